//! # Session Store
//!
//! Sole owner of the authenticated [`Session`]. Keeps the in-memory copy and the
//! two persisted keys in step:
//!
//! | Key       | Value                         |
//! |-----------|-------------------------------|
//! | `user`    | Session record as JSON        |
//! | `balance` | Cached balance, plain decimal |
//!
//! One instance is created at startup and shared by `Arc`; nothing else holds
//! a session beyond a single read.

use std::str::FromStr;
use std::sync::Arc;

use parking_lot::Mutex;
use rust_decimal::Decimal;
use shared::Session;

use crate::core::error::{AppError, Result};
use crate::storage::{KeyValueStore, StorageError};

pub const USER_KEY: &str = "user";
pub const BALANCE_KEY: &str = "balance";

pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
    current: Mutex<Option<Session>>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            storage,
            current: Mutex::new(None),
        }
    }

    /// Read the persisted session without publishing it.
    ///
    /// `Ok(None)` when nothing is stored, [`AppError::CorruptState`] when the
    /// stored record (or the store itself) cannot be parsed.
    pub fn load(&self) -> Result<Option<Session>> {
        let raw = match self.storage.get(USER_KEY) {
            Ok(raw) => raw,
            Err(StorageError::Corrupt(reason)) => return Err(AppError::CorruptState(reason)),
            Err(e) => return Err(e.into()),
        };

        let Some(raw) = raw else {
            return Ok(None);
        };

        serde_json::from_str::<Session>(&raw)
            .map(Some)
            .map_err(|e| AppError::CorruptState(format!("unreadable '{}' record: {}", USER_KEY, e)))
    }

    /// Persist `session` and its balance as a pair, then make it the active session.
    pub fn save(&self, session: Session) -> Result<()> {
        let mut current = self.current.lock();
        self.persist(&session)?;
        *current = Some(session);
        Ok(())
    }

    /// Drop the active session and remove both persisted keys. Idempotent.
    pub fn clear(&self) -> Result<()> {
        let mut current = self.current.lock();
        *current = None;
        self.storage.remove_many(&[USER_KEY, BALANCE_KEY])?;
        Ok(())
    }

    /// Set the in-memory session without touching storage.
    pub fn publish(&self, session: Option<Session>) {
        *self.current.lock() = session;
    }

    pub fn current(&self) -> Option<Session> {
        self.current.lock().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.lock().is_some()
    }

    /// Last known balance from the `balance` key.
    ///
    /// Falls back to the active session's balance when the key is missing or
    /// unparseable.
    pub fn cached_balance(&self) -> Result<Decimal> {
        let fallback = self
            .current
            .lock()
            .as_ref()
            .map(|s| s.balance)
            .ok_or(AppError::NotAuthenticated)?;

        match self.storage.get(BALANCE_KEY) {
            Ok(Some(raw)) => match Decimal::from_str(raw.trim()) {
                Ok(balance) => Ok(balance),
                Err(e) => {
                    tracing::warn!(raw = %raw, error = %e, "Cached balance unparseable, using session balance");
                    Ok(fallback)
                }
            },
            Ok(None) => Ok(fallback),
            Err(e) => {
                tracing::warn!(error = %e, "Cached balance unreadable, using session balance");
                Ok(fallback)
            }
        }
    }

    /// Overwrite the cached balance of the active session, in memory and on disk.
    pub fn store_balance(&self, balance: Decimal) -> Result<()> {
        let mut current = self.current.lock();
        let session = current.as_mut().ok_or(AppError::NotAuthenticated)?;

        let mut updated = session.clone();
        updated.balance = balance;
        self.persist(&updated)?;
        *session = updated;
        Ok(())
    }

    fn persist(&self, session: &Session) -> Result<()> {
        let record = serde_json::to_string(session)
            .map_err(|e| AppError::CorruptState(format!("cannot serialize session: {}", e)))?;

        self.storage.set_many(&[
            (USER_KEY, record),
            (BALANCE_KEY, session.balance.normalize().to_string()),
        ])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use shared::PaymentSystem;

    fn session() -> Session {
        Session {
            token: "t1".to_string(),
            client_first_name: "A".to_string(),
            client_last_name: "B".to_string(),
            number_of_card: "1111222233334444".to_string(),
            payment_system: PaymentSystem::Visa,
            balance: Decimal::from(1000),
        }
    }

    fn store() -> (Arc<MemoryStore>, SessionStore) {
        let storage = Arc::new(MemoryStore::new());
        let store = SessionStore::new(storage.clone());
        (storage, store)
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let (storage, store) = store();

        store.save(session()).unwrap();

        assert_eq!(store.load().unwrap(), Some(session()));
        assert_eq!(store.current(), Some(session()));
        assert_eq!(storage.get(BALANCE_KEY).unwrap().as_deref(), Some("1000"));
    }

    #[test]
    fn test_save_then_load_keeps_exact_balance() {
        for raw in ["1234567890123456.78", "99999999999999999", "1000.123456789012345678"] {
            let (storage, store) = store();
            let balance = Decimal::from_str(raw).unwrap();
            let saved = Session { balance, ..session() };

            store.save(saved.clone()).unwrap();

            let loaded = store.load().unwrap().unwrap();
            assert_eq!(loaded, saved, "balance {}", raw);
            assert_eq!(storage.get(BALANCE_KEY).unwrap().as_deref(), Some(raw));
            assert_eq!(store.cached_balance().unwrap(), loaded.balance);
        }
    }

    #[test]
    fn test_load_absent_is_none() {
        let (_, store) = store();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_load_garbage_is_corrupt_state() {
        let storage = Arc::new(MemoryStore::with_entries([(USER_KEY, "{not json")]));
        let store = SessionStore::new(storage);

        assert!(matches!(store.load(), Err(AppError::CorruptState(_))));
    }

    #[test]
    fn test_clear_removes_both_keys_and_is_idempotent() {
        let (storage, store) = store();
        store.save(session()).unwrap();

        store.clear().unwrap();
        store.clear().unwrap();

        assert!(storage.is_empty());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_cached_balance_prefers_balance_key() {
        let (storage, store) = store();
        store.save(session()).unwrap();
        storage.set(BALANCE_KEY, "750.50".to_string()).unwrap();

        assert_eq!(store.cached_balance().unwrap(), Decimal::new(75050, 2));
    }

    #[test]
    fn test_cached_balance_falls_back_to_session() {
        let (storage, store) = store();
        store.save(session()).unwrap();
        storage.set(BALANCE_KEY, "NaN".to_string()).unwrap();

        assert_eq!(store.cached_balance().unwrap(), Decimal::from(1000));
    }

    #[test]
    fn test_cached_balance_requires_session() {
        let (_, store) = store();
        assert!(matches!(store.cached_balance(), Err(AppError::NotAuthenticated)));
    }

    #[test]
    fn test_store_balance_updates_memory_and_both_keys() {
        let (_, store) = store();
        store.save(session()).unwrap();

        store.store_balance(Decimal::from(400)).unwrap();

        assert_eq!(store.current().unwrap().balance, Decimal::from(400));
        assert_eq!(store.load().unwrap().unwrap().balance, Decimal::from(400));
        assert_eq!(store.cached_balance().unwrap(), Decimal::from(400));
    }
}

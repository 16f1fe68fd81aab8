//! # Session Bootstrap
//!
//! One-shot startup routine reconciling the persisted session with memory.
//! Routing decisions are not trusted until the phase reaches [`BootstrapPhase::Done`].

use crate::core::error::AppError;

use super::store::SessionStore;

/// Startup phase. Moves `Pending -> Done` exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BootstrapPhase {
    #[default]
    Pending,
    Done,
}

impl BootstrapPhase {
    pub fn is_done(&self) -> bool {
        matches!(self, BootstrapPhase::Done)
    }
}

/// What the bootstrap found in storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapReport {
    /// A persisted session was published.
    Restored,
    /// Nothing was stored.
    Empty,
    /// The stored session was unreadable and has been cleared.
    Discarded { reason: String },
}

/// Read storage and publish whatever session it holds.
///
/// Never fails: on any read error the persisted keys are cleared and the user is
/// treated as logged out. The diagnostic goes to the log only.
pub fn restore_session(store: &SessionStore) -> BootstrapReport {
    match store.load() {
        Ok(Some(session)) => {
            tracing::info!(
                card = %shared::last_four(&session.number_of_card),
                network = %session.payment_system,
                "Restored persisted session"
            );
            store.publish(Some(session));
            BootstrapReport::Restored
        }
        Ok(None) => {
            tracing::debug!("No persisted session");
            store.publish(None);
            BootstrapReport::Empty
        }
        Err(err) => {
            let reason = match &err {
                AppError::CorruptState(reason) => reason.clone(),
                other => other.to_string(),
            };
            tracing::warn!(%reason, "Discarding unreadable persisted session");

            if let Err(clear_err) = store.clear() {
                tracing::error!(error = %clear_err, "Failed to clear persisted session");
            }
            store.publish(None);
            BootstrapReport::Discarded { reason }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::store::{BALANCE_KEY, USER_KEY};
    use crate::storage::{KeyValueStore, MemoryStore, StorageError};
    use std::sync::Arc;

    struct UnreadableStore;

    impl KeyValueStore for UnreadableStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "denied",
            )))
        }

        fn set_many(&self, _entries: &[(&str, String)]) -> Result<(), StorageError> {
            Ok(())
        }

        fn remove_many(&self, _keys: &[&str]) -> Result<(), StorageError> {
            Ok(())
        }
    }

    const RECORD: &str = r#"{"token":"t1","clientFirstName":"A","clientLastName":"B","numberOfCard":"1111222233334444","paymentSystem":"VISA","balance":1000}"#;

    #[test]
    fn test_phase_starts_pending() {
        assert_eq!(BootstrapPhase::default(), BootstrapPhase::Pending);
        assert!(!BootstrapPhase::default().is_done());
    }

    #[test]
    fn test_restores_valid_session() {
        let storage = Arc::new(MemoryStore::with_entries([(USER_KEY, RECORD)]));
        let store = SessionStore::new(storage);

        assert_eq!(restore_session(&store), BootstrapReport::Restored);
        assert_eq!(store.current().unwrap().token, "t1");
    }

    #[test]
    fn test_empty_storage() {
        let store = SessionStore::new(Arc::new(MemoryStore::new()));

        assert_eq!(restore_session(&store), BootstrapReport::Empty);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_malformed_payload_clears_every_key() {
        for payload in ["", "{", "null", "[]", r#"{"token":"t1"}"#, r#"{"paymentSystem":"AMEX"}"#] {
            let storage = Arc::new(MemoryStore::with_entries([
                (USER_KEY, payload),
                (BALANCE_KEY, "1000"),
            ]));
            let store = SessionStore::new(storage.clone());

            let report = restore_session(&store);

            assert!(matches!(report, BootstrapReport::Discarded { .. }), "payload {payload:?}");
            assert!(!store.is_authenticated());
            assert!(storage.is_empty(), "payload {payload:?} left keys behind");
        }
    }

    #[test]
    fn test_read_error_is_treated_as_logged_out() {
        let store = SessionStore::new(Arc::new(UnreadableStore));

        let report = restore_session(&store);

        assert!(matches!(report, BootstrapReport::Discarded { .. }));
        assert!(!store.is_authenticated());
    }
}

//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use rust_decimal::Decimal;

use bank_client::app::App;
use bank_client::config::FundsCheck;
use bank_client::core::{AppError, BankApi, Result};
use bank_client::session::SessionStore;
use bank_client::storage::{KeyValueStore, MemoryStore};
use shared::{CardOperationRequest, PaymentSystem, Session, SignInRequest, SignUpRequest, TransferRequest};

pub const CARD: &str = "4111222233334444";
pub const PIN: &str = "1234";
pub const OTHER_CARD: &str = "5555666677778888";

pub fn visa_session(balance: i64) -> Session {
    Session {
        token: "token-abc".to_string(),
        client_first_name: "Aibek".to_string(),
        client_last_name: "Sydykov".to_string(),
        number_of_card: CARD.to_string(),
        payment_system: PaymentSystem::Visa,
        balance: Decimal::from(balance),
    }
}

/// Storage as a previous signed-in run leaves it.
pub fn persisted(balance: i64) -> MemoryStore {
    let record = serde_json::to_string(&visa_session(balance)).unwrap();
    MemoryStore::with_entries([("user", record), ("balance", balance.to_string())])
}

/// Calls the fake received, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    SignIn(SignInRequest),
    SignUp(SignUpRequest),
    Deposit(PaymentSystem, CardOperationRequest),
    Withdraw(PaymentSystem, CardOperationRequest),
    Transfer(PaymentSystem, TransferRequest),
}

/// In-process backend recording every call.
pub struct FakeBank {
    calls: Mutex<Vec<Call>>,
    session: Session,
    fail: Mutex<bool>,
    delay: Mutex<Option<Duration>>,
}

impl FakeBank {
    pub fn new(session: Session) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            session,
            fail: Mutex::new(false),
            delay: Mutex::new(None),
        }
    }

    /// Make every subsequent call fail with a network error.
    pub fn fail_all(&self) {
        *self.fail.lock() = true;
    }

    /// Hold every subsequent call for `delay` before answering.
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock() = Some(delay);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    async fn answer(&self, call: Call) -> Result<()> {
        self.calls.lock().push(call);
        let delay = *self.delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if *self.fail.lock() {
            return Err(AppError::Network("HTTP 500".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl BankApi for FakeBank {
    async fn sign_in(&self, request: SignInRequest) -> Result<Session> {
        self.answer(Call::SignIn(request)).await?;
        Ok(self.session.clone())
    }

    async fn sign_up(&self, request: SignUpRequest) -> Result<()> {
        self.answer(Call::SignUp(request)).await
    }

    async fn deposit(&self, network: PaymentSystem, request: CardOperationRequest) -> Result<()> {
        self.answer(Call::Deposit(network, request)).await
    }

    async fn withdraw(&self, network: PaymentSystem, request: CardOperationRequest) -> Result<()> {
        self.answer(Call::Withdraw(network, request)).await
    }

    async fn transfer(&self, network: PaymentSystem, request: TransferRequest) -> Result<()> {
        self.answer(Call::Transfer(network, request)).await
    }
}

pub struct Harness {
    pub app: App,
    pub storage: Arc<MemoryStore>,
    pub bank: Arc<FakeBank>,
}

impl Harness {
    pub fn new(storage: MemoryStore, funds_check: FundsCheck) -> Self {
        let storage = Arc::new(storage);
        let bank = Arc::new(FakeBank::new(visa_session(1000)));
        let store = Arc::new(SessionStore::new(storage.clone()));
        let app = App::new(store, bank.clone(), funds_check);
        Self { app, storage, bank }
    }

    /// Fresh install, bootstrapped.
    pub fn empty() -> Self {
        let harness = Self::new(MemoryStore::new(), FundsCheck::default());
        harness.app.bootstrap();
        harness
    }

    /// Previous run left a signed-in session behind, bootstrapped.
    pub fn signed_in(balance: i64, funds_check: FundsCheck) -> Self {
        let harness = Self::new(persisted(balance), funds_check);
        harness.app.bootstrap();
        harness
    }

    pub fn stored(&self, key: &str) -> Option<String> {
        self.storage.get(key).unwrap()
    }
}

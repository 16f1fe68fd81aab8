//! # Application Orchestrator
//!
//! The [`App`] struct coordinates the session store, the backend API and the
//! view state that a presentation layer renders.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  Presentation (stdin driver, or any other front end)     │
//! │  - navigate(path) / back()                               │
//! │  - sign_in / deposit / transfer ... (async)              │
//! │  - view(), drain_notices()                               │
//! └─────────────┬────────────────────────────────────────────┘
//!               │
//! ┌─────────────▼────────────────────────────────────────────┐
//! │  App                                                     │
//! │  ├─ state: Arc<RwLock<AppState>>  (view, history, flags) │
//! │  ├─ store: Arc<SessionStore>      (session + storage)    │
//! │  └─ api:   Arc<dyn BankApi>       (HTTP backend)         │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Locking
//!
//! `AppState` is behind a `parking_lot::RwLock`. Locks are held briefly and
//! never across an `.await`. When both are needed, the state lock is taken
//! before the session store's.
//!
//! ## Startup
//!
//! Until [`App::bootstrap`] has run, every navigation shows
//! [`View::Loading`]. The last requested path is remembered and resolved as
//! soon as bootstrap finishes.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use bank_client::app::App;
//! use bank_client::config::{ClientConfig, FundsCheck};
//! use bank_client::services::ApiClient;
//! use bank_client::session::SessionStore;
//! use bank_client::storage::MemoryStore;
//!
//! # fn main() -> bank_client::core::Result<()> {
//! let store = Arc::new(SessionStore::new(Arc::new(MemoryStore::new())));
//! let api = Arc::new(ApiClient::new(&ClientConfig::default())?);
//! let app = App::new(store, api, FundsCheck::default());
//!
//! app.navigate("/deposit");
//! app.bootstrap();
//! println!("{:?}", app.view());
//! # Ok(())
//! # }
//! ```

pub mod forms;
pub mod handlers;
pub mod notice;
pub mod state;

pub use forms::{CardOperationForm, SignInForm, SignUpForm, TransferForm};
pub use handlers::transactions::TransferOutcome;
pub use notice::{Notice, NoticeLevel};
pub use state::*;

use std::sync::Arc;

use parking_lot::RwLock;
use rust_decimal::Decimal;
use shared::Session;

use crate::config::FundsCheck;
use crate::core::error::Result;
use crate::core::service::BankApi;
use crate::routing::{GuardOutcome, Target};
use crate::session::{restore_session, BootstrapPhase, BootstrapReport, SessionStore};

/// Main application orchestrator.
pub struct App {
    /// Shared view state. Hold locks briefly.
    pub state: Arc<RwLock<AppState>>,
    pub(crate) store: Arc<SessionStore>,
    pub(crate) api: Arc<dyn BankApi>,
    pub(crate) funds_check: FundsCheck,
}

impl App {
    pub fn new(store: Arc<SessionStore>, api: Arc<dyn BankApi>, funds_check: FundsCheck) -> Self {
        tracing::info!(%funds_check, "App state initialized");
        Self {
            state: Arc::new(RwLock::new(AppState::default())),
            store,
            api,
            funds_check,
        }
    }

    /// Restore the persisted session and finish startup.
    ///
    /// Runs once. The state lock is held for the whole reconciliation, so no
    /// navigation can observe a half-restored session. Returns `None` when
    /// bootstrap already ran.
    pub fn bootstrap(&self) -> Option<BootstrapReport> {
        let mut state = self.state.write();
        if state.phase.is_done() {
            tracing::debug!("Bootstrap already done, ignoring");
            return None;
        }

        let report = restore_session(&self.store);
        state.phase = BootstrapPhase::Done;

        let authenticated = self.store.is_authenticated();
        let outcome = handlers::navigation::resolve(&mut state, authenticated);
        tracing::info!(?report, ?outcome, "Bootstrap complete");

        Some(report)
    }

    pub fn phase(&self) -> BootstrapPhase {
        self.state.read().phase
    }

    /// Navigate to `path` through the route guard.
    pub fn navigate(&self, path: &str) -> GuardOutcome {
        let mut state = self.state.write();
        let authenticated = self.store.is_authenticated();
        handlers::navigation::go(&mut state, authenticated, Target::parse(path))
    }

    pub fn back(&self) -> GuardOutcome {
        let mut state = self.state.write();
        let authenticated = self.store.is_authenticated();
        handlers::navigation::back(&mut state, authenticated)
    }

    pub fn view(&self) -> View {
        self.state.read().view
    }

    pub fn session(&self) -> Option<Session> {
        self.store.current()
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.is_authenticated()
    }

    /// Cached balance of the active session.
    pub fn balance(&self) -> Result<Decimal> {
        self.store.cached_balance()
    }

    /// Take every queued notice, oldest first.
    pub fn drain_notices(&self) -> Vec<Notice> {
        self.state.write().notices.drain(..).collect()
    }

    pub fn form_error(&self, form: FormKind) -> Option<String> {
        self.state.read().form_errors.get(&form).cloned()
    }

    pub fn is_submitting(&self, form: FormKind) -> bool {
        self.state.read().is_submitting(form)
    }

    pub async fn sign_in(&self, form: SignInForm) -> Result<Session> {
        handlers::auth::sign_in(self, form).await
    }

    pub async fn sign_up(&self, form: SignUpForm) -> Result<()> {
        handlers::auth::sign_up(self, form).await
    }

    pub fn logout(&self) -> Result<()> {
        handlers::auth::logout(self)
    }

    pub async fn deposit(&self, form: CardOperationForm) -> Result<()> {
        handlers::transactions::deposit(self, form).await
    }

    pub async fn withdraw(&self, form: CardOperationForm) -> Result<()> {
        handlers::transactions::withdraw(self, form).await
    }

    pub async fn transfer(&self, form: TransferForm) -> Result<TransferOutcome> {
        handlers::transactions::transfer(self, form).await
    }
}

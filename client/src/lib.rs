//! # Bank Client - Library Root
//!
//! Client side of a card-banking demo: sign in with a card number and PIN,
//! keep the session across restarts, and submit deposits, withdrawals and
//! transfers to a REST backend. This library crate contains all modules used
//! by the binary crate (`main.rs`).
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              bank-client (this crate)                  │
//! ├────────────────────────────────────────────────────────┤
//! │  Tokio         - Async runtime                         │
//! │  Reqwest       - HTTP client                           │
//! │  parking_lot   - State locks                           │
//! │  tracing       - Structured logging                    │
//! └────────────────────────────────────────────────────────┘
//!          │                              │
//!          │ HTTP (JSON)                  │ file
//!          ▼                              ▼
//! ┌─────────────────┐          ┌─────────────────────────┐
//! │  Bank backend   │          │   storage.json          │
//! │  /api/...       │          │   keys: user, balance   │
//! └─────────────────┘          └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: [`App`] orchestrator, view state, forms and handlers
//! - **config**: Environment configuration ([`config::ClientConfig`])
//! - **core**: Error type and the [`core::BankApi`] service trait
//! - **debug**: Logger setup
//! - **routing**: Routes and the route guard
//! - **services**: Backend HTTP client
//! - **session**: Session store and startup bootstrap
//! - **storage**: Durable key-value storage
//! - **utils**: Input validation
//!
//! ### Module Dependency Graph
//!
//! ```text
//! main.rs
//!   │
//!   └── app (state, forms, handlers)
//!       ├── routing (guard)
//!       ├── session (store, bootstrap)
//!       │   └── storage (file / memory)
//!       └── core::BankApi
//!           └── services::api (HTTP requests)
//! ```
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin bank-client
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p bank-client
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod routing;
pub mod services;
pub mod session;
pub mod storage;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{App, AppState, FormKind, Notice, NoticeLevel, TransferOutcome, View};
pub use config::{ClientConfig, FundsCheck};
pub use core::{AppError, BankApi, Result};
pub use routing::{GuardOutcome, Route};
pub use session::{BootstrapPhase, BootstrapReport, SessionStore};

//! # Session
//!
//! - [`store`]: persisted session and cached balance
//! - [`bootstrap`]: startup phase and the one-shot restore routine

pub mod bootstrap;
pub mod store;

pub use bootstrap::{restore_session, BootstrapPhase, BootstrapReport};
pub use store::SessionStore;

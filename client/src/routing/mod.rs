//! # Routing
//!
//! Route table and the guard that admits or redirects navigation.

pub mod guard;
pub mod route;

pub use guard::{evaluate, landing, GuardOutcome};
pub use route::{Route, Target, Visibility};

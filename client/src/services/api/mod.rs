//! # Backend API Client Module
//!
//! HTTP client for the banking backend.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs           - Module exports and documentation
//! ├── client.rs        - ApiClient struct, shared POST helper, BankApi impl
//! ├── endpoints.rs     - (network, operation) -> path mapping, URL joining
//! ├── auth.rs          - Sign-in and sign-up
//! └── transactions.rs  - Deposit, withdraw and transfer
//! ```

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod transactions;

pub use client::ApiClient;
pub use endpoints::{endpoint, Operation};

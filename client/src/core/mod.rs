//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Service traits for dependency injection (`BankApi`)
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use bank_client::core::service::BankApi;
//!
//! // In production: the HTTP client
//! let api: Arc<dyn BankApi> = Arc::new(bank_client::services::api::ApiClient::new(&config)?);
//!
//! // In tests: an in-process fake
//! let api: Arc<dyn BankApi> = Arc::new(FakeBank::default());
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::BankApi;

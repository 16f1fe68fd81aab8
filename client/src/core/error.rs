//! # Common Error Types
//!
//! Consolidated error handling for the banking client.
//!
//! This module provides a centralized error type [`AppError`] that covers all error
//! scenarios in the client.
//!
//! ## Error Categories
//!
//! - **Validation**: Form input rejected before any network call
//! - **Network**: Transport failure or non-2xx backend response
//! - **CorruptState**: Persisted session present but unreadable
//! - **Storage**: Backing key-value store I/O failure
//! - **NotAuthenticated**: Protected operation attempted without a session
//! - **Busy**: Same form submitted again while a request is in flight
//! - **Config**: Invalid startup configuration
//!
//! ## Recovery
//!
//! Validation errors are shown inline under the form; Network errors become a
//! transient notice. CorruptState is recovered by the bootstrapper by discarding
//! the persisted session; it is logged, never shown to the user. Nothing is
//! retried automatically.
//!
//! ## Usage Pattern
//!
//! ```rust
//! use bank_client::core::error::AppError;
//! use rust_decimal::Decimal;
//!
//! fn validate_amount(amount: Decimal) -> Result<Decimal, AppError> {
//!     if amount <= Decimal::ZERO {
//!         return Err(AppError::Validation("Amount must be positive".to_string()));
//!     }
//!     Ok(amount)
//! }
//! ```

use thiserror::Error;

use crate::app::state::FormKind;
use crate::storage::StorageError;

/// Application-wide error type.
///
/// ```rust
/// use bank_client::core::error::AppError;
///
/// let err = AppError::Validation("PIN must be exactly 4 characters".to_string());
/// assert_eq!(err.to_string(), "Validation error: PIN must be exactly 4 characters");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Input validation error, caught before any network call.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Backend API communication error.
    ///
    /// - Network failures (connection refused, timeout, DNS errors)
    /// - HTTP errors (4xx client errors, 5xx server errors)
    /// - JSON parsing errors (malformed responses)
    #[error("Network error: {0}")]
    Network(String),

    /// Persisted session present but unparseable.
    #[error("Corrupt persisted state: {0}")]
    CorruptState(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Not signed in")]
    NotAuthenticated,

    /// A submission from this form is already in flight.
    #[error("{0} submission already in progress")]
    Busy(FormKind),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Errors the user sees as a toast rather than inline under the form.
    pub fn is_notice(&self) -> bool {
        matches!(self, AppError::Network(_))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err.to_string())
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

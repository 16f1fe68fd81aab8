//! # Client Configuration
//!
//! Configuration loaded from environment variables (a `.env` file is honoured
//! by the binary through `dotenvy`). Validated on startup to fail fast if
//! misconfigured.
//!
//! | Variable                 | Default                     |
//! |--------------------------|-----------------------------|
//! | `BANK_API_URL`           | `http://localhost:8080/api` |
//! | `BANK_STORAGE_FILE`      | `data/storage.json`         |
//! | `BANK_HTTP_TIMEOUT_SECS` | `10`                        |
//! | `BANK_FUNDS_CHECK`       | `after`                     |
//!
//! Unlike a process-wide config, a [`ClientConfig`] is passed explicitly to
//! whatever needs it.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::core::error::{AppError, Result};

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_STORAGE_FILE: &str = "data/storage.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// When a transfer compares the amount against the cached balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FundsCheck {
    /// Call the backend first, then compare. Insufficient funds only changes
    /// the notice; the backend call has already happened.
    #[default]
    AfterSubmit,
    /// Compare first; skip the backend call when funds are insufficient.
    BeforeSubmit,
}

impl FromStr for FundsCheck {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "after" => Ok(FundsCheck::AfterSubmit),
            "before" => Ok(FundsCheck::BeforeSubmit),
            other => Err(AppError::Config(format!(
                "BANK_FUNDS_CHECK must be 'after' or 'before', got '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for FundsCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FundsCheck::AfterSubmit => f.write_str("after"),
            FundsCheck::BeforeSubmit => f.write_str("before"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL; endpoint paths are joined onto it.
    pub api_base_url: String,

    /// JSON file backing local storage.
    pub storage_file: PathBuf,

    /// Per-request timeout. Valid range: 1-300 seconds.
    pub request_timeout: Duration,

    pub funds_check: FundsCheck,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            storage_file: PathBuf::from(DEFAULT_STORAGE_FILE),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            funds_check: FundsCheck::default(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let api_base_url = env::var("BANK_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let storage_file = env::var("BANK_STORAGE_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORAGE_FILE));

        let timeout_secs: u64 = env::var("BANK_HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("BANK_HTTP_TIMEOUT_SECS must be a valid number: {}", e)))?;

        let funds_check = match env::var("BANK_FUNDS_CHECK") {
            Ok(value) => value.parse()?,
            Err(_) => FundsCheck::default(),
        };

        let config = Self {
            api_base_url,
            storage_file,
            request_timeout: Duration::from_secs(timeout_secs),
            funds_check,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "BANK_API_URL must start with http:// or https://, got '{}'",
                self.api_base_url
            )));
        }

        let secs = self.request_timeout.as_secs();
        if !(1..=300).contains(&secs) {
            return Err(AppError::Config(
                "BANK_HTTP_TIMEOUT_SECS must be between 1 and 300".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ClientConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.funds_check, FundsCheck::AfterSubmit);
    }

    #[test]
    fn test_rejects_bad_url() {
        let config = ClientConfig {
            api_base_url: "localhost:8080".to_string(),
            ..ClientConfig::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_rejects_out_of_range_timeout() {
        let config = ClientConfig {
            request_timeout: Duration::from_secs(0),
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_funds_check_parse() {
        assert_eq!("before".parse::<FundsCheck>().unwrap(), FundsCheck::BeforeSubmit);
        assert_eq!(" AFTER ".parse::<FundsCheck>().unwrap(), FundsCheck::AfterSubmit);
        assert!("sometimes".parse::<FundsCheck>().is_err());
    }
}

//! # Logging
//!
//! File-based structured logging for the banking client. The interactive
//! driver owns stdout, so logs go to a daily-rotated file instead.
//!
//! ## Usage
//!
//! ```rust,no_run
//! // Initialize at app startup; keep the guard alive until exit
//! let _guard = bank_client::debug::init_logger();
//!
//! tracing::info!(route = "/deposit", "Navigation admitted");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `bank_client=debug,info`)
//! - `BANK_LOG_DIR`: Log directory (default: `logs`)
//! - `BANK_LOG_STDERR`: Also log to stderr (1=on, 0=off)

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::init as init_logger;

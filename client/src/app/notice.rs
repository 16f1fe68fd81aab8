//! # Notices
//!
//! Transient user-facing messages (what a toast would show). The app queues
//! them; the presentation layer drains and renders them.

use chrono::{DateTime, Utc};

pub const SIGN_IN_FAILED: &str = "Sign-in failed. Check your card number and PIN.";
pub const SIGN_UP_SUCCEEDED: &str = "Registration successful";
pub const SIGN_UP_FAILED: &str = "Registration failed";
pub const DEPOSIT_SUCCEEDED: &str = "Account topped up";
pub const DEPOSIT_FAILED: &str = "Failed to top up the account";
pub const WITHDRAW_SUCCEEDED: &str = "Withdrawal completed";
pub const WITHDRAW_FAILED: &str = "Failed to withdraw funds";
pub const TRANSFER_SUCCEEDED: &str = "Transfer completed";
pub const TRANSFER_FAILED: &str = "Transfer failed";
pub const INSUFFICIENT_FUNDS: &str = "Insufficient funds!";
pub const SESSION_SAVE_FAILED: &str = "Could not save your session";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            created_at: Utc::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }
}

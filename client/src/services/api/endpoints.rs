//! # Endpoint Map
//!
//! Card operations live under a different path family per payment network.
//! The choice is a pure function of the session's network, never of user input.

use std::fmt;

use shared::PaymentSystem;

pub const SIGN_IN: &str = "auth/signIn";
pub const SIGN_UP: &str = "auth/signUp";

/// Money-moving backend operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Deposit,
    Withdraw,
    Transfer,
}

impl Operation {
    pub fn all() -> &'static [Operation] {
        &[Operation::Deposit, Operation::Withdraw, Operation::Transfer]
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Deposit => f.write_str("deposit"),
            Operation::Withdraw => f.write_str("withdraw"),
            Operation::Transfer => f.write_str("transfer"),
        }
    }
}

/// Backend path for `operation` on a card of the given `network`.
pub fn endpoint(network: PaymentSystem, operation: Operation) -> &'static str {
    match (network, operation) {
        (PaymentSystem::Visa, Operation::Deposit) => "/visa/replenishVisa",
        (PaymentSystem::Visa, Operation::Withdraw) => "/visa/debitingVisa",
        (PaymentSystem::Visa, Operation::Transfer) => "/visa/transferVisa",
        (PaymentSystem::Mastercard, Operation::Deposit) => "/master/replenishMaster",
        (PaymentSystem::Mastercard, Operation::Withdraw) => "/master/debitingMaster",
        (PaymentSystem::Mastercard, Operation::Transfer) => "/master/transferMaster",
    }
}

/// Join a base URL and a relative path with exactly one slash between them.
///
/// ```rust
/// use bank_client::services::api::endpoints::join_url;
///
/// assert_eq!(join_url("http://h/api/", "/visa/replenishVisa"), "http://h/api/visa/replenishVisa");
/// assert_eq!(join_url("http://h/api", "auth/signIn"), "http://h/api/auth/signIn");
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

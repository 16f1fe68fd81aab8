use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Card payment network. Selects which backend endpoint family serves a request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentSystem {
    Visa,
    Mastercard,
}

impl PaymentSystem {
    pub fn all() -> &'static [PaymentSystem] {
        &[PaymentSystem::Visa, PaymentSystem::Mastercard]
    }

    /// Wire name, as the backend expects it.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentSystem::Visa => "VISA",
            PaymentSystem::Mastercard => "MASTERCARD",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            PaymentSystem::Visa => "Visa",
            PaymentSystem::Mastercard => "MasterCard",
        }
    }
}

impl fmt::Display for PaymentSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown payment network name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPaymentSystem(pub String);

impl fmt::Display for UnknownPaymentSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown payment system '{}' (expected VISA or MASTERCARD)", self.0)
    }
}

impl std::error::Error for UnknownPaymentSystem {}

impl FromStr for PaymentSystem {
    type Err = UnknownPaymentSystem;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "VISA" => Ok(PaymentSystem::Visa),
            "MASTERCARD" | "MASTER" => Ok(PaymentSystem::Mastercard),
            _ => Err(UnknownPaymentSystem(s.to_string())),
        }
    }
}

/// Authenticated user record returned by `auth/signIn`.
///
/// This is also the exact JSON persisted under the `user` storage key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub client_first_name: String,
    pub client_last_name: String,
    pub number_of_card: String,
    pub payment_system: PaymentSystem,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub balance: Decimal,
}

impl Session {
    /// "First Last", for greetings.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.client_first_name, self.client_last_name)
            .trim()
            .to_string()
    }
}

/// Sign-in request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub number_of_card: String,
    pub password_of_card: String,
}

/// Sign-up request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub client_first_name: String,
    pub client_last_name: String,
    pub phone_number: String,
    pub number_of_card: String,
    pub password_of_card: String,
    pub payment: PaymentSystem,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub balance: Decimal,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::auth::PaymentSystem;

/// Body for deposit (`replenish*`) and withdraw (`debiting*`) calls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CardOperationRequest {
    pub card_num: String,
    pub password_of_card: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub summa: Decimal,
}

/// Body for card-to-card transfers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub card_num: String,
    pub password_of_card: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub summa: Decimal,
    pub other_card_num: String,
    /// Destination card's payment network.
    pub payment: PaymentSystem,
}

//! Validation utilities for user input

use std::str::FromStr;

use rust_decimal::Decimal;
use shared::PaymentSystem;

use crate::core::error::AppError;

pub const CARD_NUMBER_LEN: usize = 16;
pub const PIN_LEN: usize = 4;
pub const PHONE_PREFIX: &str = "+996";
pub const PHONE_DIGITS: usize = 9;

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    /// Convert into `Result`, for `?` in submit handlers.
    pub fn into_result(self) -> Result<(), AppError> {
        match self.error {
            Some(message) if !self.is_valid => Err(AppError::Validation(message)),
            _ => Ok(()),
        }
    }
}

/// Validate a required text field
pub fn validate_required(label: &str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return ValidationResult::err(format!("{} is required", label));
    }
    ValidationResult::ok()
}

/// Validate card number: exactly 16 characters
pub fn validate_card_number(card: &str) -> ValidationResult {
    if card.is_empty() {
        return ValidationResult::err("Card number is required");
    }

    if card.chars().count() != CARD_NUMBER_LEN {
        return ValidationResult::err(format!("Card number must be exactly {} characters", CARD_NUMBER_LEN));
    }

    ValidationResult::ok()
}

/// Validate PIN: exactly 4 characters
pub fn validate_pin(pin: &str) -> ValidationResult {
    if pin.is_empty() {
        return ValidationResult::err("PIN is required");
    }

    if pin.chars().count() != PIN_LEN {
        return ValidationResult::err(format!("PIN must be exactly {} characters", PIN_LEN));
    }

    ValidationResult::ok()
}

/// Validate phone: `+996` followed by exactly 9 digits
pub fn validate_phone(phone: &str) -> ValidationResult {
    if phone.is_empty() {
        return ValidationResult::err("Phone number is required");
    }

    let valid = phone
        .strip_prefix(PHONE_PREFIX)
        .map(|rest| rest.len() == PHONE_DIGITS && rest.chars().all(|c| c.is_ascii_digit()))
        .unwrap_or(false);

    if !valid {
        return ValidationResult::err(format!(
            "Phone number must start with {} followed by {} digits (e.g. +996700123456)",
            PHONE_PREFIX, PHONE_DIGITS
        ));
    }

    ValidationResult::ok()
}

/// Parse a strictly positive amount
pub fn parse_amount(amount: &str) -> Result<Decimal, AppError> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Err(AppError::Validation("Amount is required".to_string()));
    }

    let value = Decimal::from_str(amount)
        .map_err(|_| AppError::Validation(format!("Amount '{}' is not a number", amount)))?;

    if value <= Decimal::ZERO {
        return Err(AppError::Validation("Amount must be greater than 0".to_string()));
    }

    Ok(value)
}

/// Parse a non-negative opening balance (sign-up)
pub fn parse_opening_balance(balance: &str) -> Result<Decimal, AppError> {
    let balance = balance.trim();
    if balance.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let value = Decimal::from_str(balance)
        .map_err(|_| AppError::Validation(format!("Balance '{}' is not a number", balance)))?;

    if value.is_sign_negative() && !value.is_zero() {
        return Err(AppError::Validation("Balance cannot be negative".to_string()));
    }

    Ok(value)
}

/// Parse a payment network name
pub fn parse_payment_system(network: &str) -> Result<PaymentSystem, AppError> {
    if network.trim().is_empty() {
        return Err(AppError::Validation("Payment system is required".to_string()));
    }
    network
        .parse()
        .map_err(|e: shared::UnknownPaymentSystem| AppError::Validation(e.to_string()))
}

//! # Form Input
//!
//! Raw field values as the user typed them, and their conversion into wire
//! requests. Conversion is where validation happens; a form that converts has
//! passed every client-side check.

use shared::{CardOperationRequest, PaymentSystem, SignInRequest, SignUpRequest, TransferRequest};

use crate::core::error::{AppError, Result};
use crate::utils::validation::{
    parse_amount, parse_opening_balance, parse_payment_system, validate_card_number, validate_phone,
    validate_pin, validate_required,
};

pub const FILL_ALL_FIELDS: &str = "Please fill in all fields";

fn require_all(fields: &[&str]) -> Result<()> {
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(AppError::Validation(FILL_ALL_FIELDS.to_string()));
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignInForm {
    pub card_number: String,
    pub pin: String,
}

impl SignInForm {
    pub fn new(card_number: impl Into<String>, pin: impl Into<String>) -> Self {
        Self {
            card_number: card_number.into(),
            pin: pin.into(),
        }
    }

    pub fn to_request(&self) -> Result<SignInRequest> {
        validate_card_number(&self.card_number).into_result()?;
        validate_pin(&self.pin).into_result()?;

        Ok(SignInRequest {
            number_of_card: self.card_number.clone(),
            password_of_card: self.pin.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpForm {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub card_number: String,
    pub pin: String,
    pub payment_system: String,
    pub balance: String,
}

impl Default for SignUpForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            phone: String::new(),
            card_number: String::new(),
            pin: String::new(),
            payment_system: PaymentSystem::Visa.as_str().to_string(),
            balance: "0".to_string(),
        }
    }
}

impl SignUpForm {
    pub fn to_request(&self) -> Result<SignUpRequest> {
        validate_required("First name", &self.first_name).into_result()?;
        validate_required("Last name", &self.last_name).into_result()?;
        validate_phone(&self.phone).into_result()?;
        validate_card_number(&self.card_number).into_result()?;
        validate_pin(&self.pin).into_result()?;
        let payment = parse_payment_system(&self.payment_system)?;
        let balance = parse_opening_balance(&self.balance)?;

        Ok(SignUpRequest {
            client_first_name: self.first_name.trim().to_string(),
            client_last_name: self.last_name.trim().to_string(),
            phone_number: self.phone.clone(),
            number_of_card: self.card_number.clone(),
            password_of_card: self.pin.clone(),
            payment,
            balance,
        })
    }
}

/// Deposit and withdraw share one form shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardOperationForm {
    pub pin: String,
    pub amount: String,
}

impl CardOperationForm {
    pub fn new(pin: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            pin: pin.into(),
            amount: amount.into(),
        }
    }

    /// Build the request for the session's `card_number`.
    pub fn to_request(&self, card_number: &str) -> Result<CardOperationRequest> {
        require_all(&[&self.amount, &self.pin])?;
        validate_pin(&self.pin).into_result()?;
        let summa = parse_amount(&self.amount)?;

        Ok(CardOperationRequest {
            card_num: card_number.to_string(),
            password_of_card: self.pin.clone(),
            summa,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferForm {
    pub pin: String,
    pub amount: String,
    pub destination_card: String,
    pub destination_network: String,
}

impl Default for TransferForm {
    fn default() -> Self {
        Self {
            pin: String::new(),
            amount: String::new(),
            destination_card: String::new(),
            destination_network: PaymentSystem::Visa.as_str().to_string(),
        }
    }
}

impl TransferForm {
    pub fn new(
        pin: impl Into<String>,
        amount: impl Into<String>,
        destination_card: impl Into<String>,
        destination_network: PaymentSystem,
    ) -> Self {
        Self {
            pin: pin.into(),
            amount: amount.into(),
            destination_card: destination_card.into(),
            destination_network: destination_network.as_str().to_string(),
        }
    }

    pub fn to_request(&self, card_number: &str) -> Result<TransferRequest> {
        require_all(&[&self.amount, &self.destination_card, &self.pin])?;
        validate_pin(&self.pin).into_result()?;
        let summa = parse_amount(&self.amount)?;
        validate_card_number(&self.destination_card).into_result()?;
        let payment = parse_payment_system(&self.destination_network)?;

        Ok(TransferRequest {
            card_num: card_number.to_string(),
            password_of_card: self.pin.clone(),
            summa,
            other_card_num: self.destination_card.clone(),
            payment,
        })
    }
}

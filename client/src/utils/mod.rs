//! # Utility Functions
//!
//! - **[`validation`]**: Form input validation (card numbers, PINs, phones, amounts)
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Card number masking
//! - [`crate::core`]: Core abstractions and error types

pub mod validation;

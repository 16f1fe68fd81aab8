//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the banking client and the backend API.
//! All DTOs use JSON serialization via `serde` for API communication.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Session record, sign-in and sign-up DTOs
//!   - **[`dto::banking`]**: Deposit, withdraw and transfer request bodies
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::last_four`]**: Card number reduced to its last 4 digits for display and logs
//!
//! ## Wire Format
//!
//! The backend speaks camelCase JSON, so every DTO carries
//! `#[serde(rename_all = "camelCase")]`:
//! - `numberOfCard`, `passwordOfCard`, `clientFirstName`, ...
//! - Payment networks serialize as `"VISA"` / `"MASTERCARD"`
//! - Amounts are `rust_decimal::Decimal` values written as JSON numbers
//!
//! ## Usage in the Client
//!
//! ```rust,ignore
//! use shared::dto::auth::{SignInRequest, Session};
//!
//! # async fn run() -> Result<(), reqwest::Error> {
//! let request = SignInRequest {
//!     number_of_card: "1111222233334444".to_string(),
//!     password_of_card: "1234".to_string(),
//! };
//!
//! let session: Session = reqwest::Client::new()
//!     .post("http://localhost:8080/api/auth/signIn")
//!     .json(&request)
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;

//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures exchanged with the banking backend
//! via the REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Session record, sign-in and sign-up
//! - [`banking`] - Card operations (deposit, withdraw) and transfers
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/auth/signIn
//! Content-Type: application/json
//!
//! {
//!   "numberOfCard": "1111222233334444",
//!   "passwordOfCard": "1234"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "token": "t1",
//!   "clientFirstName": "A",
//!   "clientLastName": "B",
//!   "numberOfCard": "1111222233334444",
//!   "paymentSystem": "VISA",
//!   "balance": 1000
//! }
//! ```

pub mod auth;
pub mod banking;

pub use auth::*;
pub use banking::*;

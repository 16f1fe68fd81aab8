//! # Services Module
//!
//! External service integrations for the banking client.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │          bank-client         │
//! │  ┌────────────────────────┐  │
//! │  │  ApiClient (api/)      │  │
//! │  └───────────┬────────────┘  │
//! └──────────────┼───────────────┘
//!                │ HTTP/JSON
//!                ▼
//! ┌──────────────────────────────┐
//! │  Banking backend             │
//! │  /api/auth/signIn, signUp    │
//! │  /api/visa/*                 │
//! │  /api/master/*               │
//! └──────────────────────────────┘
//! ```
//!
//! Every call is a JSON `POST`. Non-2xx responses and transport failures map
//! to [`crate::core::AppError::Network`].

pub mod api;

pub use api::ApiClient;

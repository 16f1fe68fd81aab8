//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use async_trait::async_trait;
use shared::{CardOperationRequest, PaymentSystem, Session, SignInRequest, SignUpRequest, TransferRequest};

use crate::core::error::Result;

/// Backend operations the client depends on.
///
/// [`crate::services::api::ApiClient`] is the production implementation; tests
/// substitute an in-process fake. The `network` argument is the *session's*
/// payment network and selects the endpoint family.
#[async_trait]
pub trait BankApi: Send + Sync {
    /// Authenticate with card number and PIN
    async fn sign_in(&self, request: SignInRequest) -> Result<Session>;

    /// Create a new account
    async fn sign_up(&self, request: SignUpRequest) -> Result<()>;

    /// Credit the session's card
    async fn deposit(&self, network: PaymentSystem, request: CardOperationRequest) -> Result<()>;

    /// Debit the session's card
    async fn withdraw(&self, network: PaymentSystem, request: CardOperationRequest) -> Result<()>;

    /// Move money to another card
    async fn transfer(&self, network: PaymentSystem, request: TransferRequest) -> Result<()>;
}

//! # Authentication Endpoints
//!
//! Handles sign-in and sign-up.

use shared::{Session, SignInRequest, SignUpRequest};

use super::client::ApiClient;
use super::endpoints::{SIGN_IN, SIGN_UP};
use crate::core::error::{AppError, Result};

/// Sign in with card number and PIN.
#[tracing::instrument(skip(client, request), fields(card = %shared::last_four(&request.number_of_card)))]
pub async fn sign_in(client: &ApiClient, request: SignInRequest) -> Result<Session> {
    tracing::info!("Attempting sign-in");
    let start = std::time::Instant::now();

    let response = client.post_json(SIGN_IN, &request).await?;

    let session = response.json::<Session>().await.map_err(|e| {
        tracing::error!(error = %e, "Sign-in response parse error");
        AppError::Network(format!("Failed to parse response: {}", e))
    })?;

    tracing::info!(
        duration_ms = start.elapsed().as_millis(),
        network = %session.payment_system,
        "Sign-in successful"
    );
    Ok(session)
}

/// Register a new account. The response body is not used.
#[tracing::instrument(skip(client, request), fields(card = %shared::last_four(&request.number_of_card)))]
pub async fn sign_up(client: &ApiClient, request: SignUpRequest) -> Result<()> {
    client.post_json(SIGN_UP, &request).await?;
    tracing::info!("Sign-up successful");
    Ok(())
}

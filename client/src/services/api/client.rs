//! # API Client
//!
//! Main HTTP client for backend API communication.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Serialize;
use shared::{CardOperationRequest, ErrorResponse, PaymentSystem, Session, SignInRequest, SignUpRequest, TransferRequest};

use super::endpoints::join_url;
use crate::config::ClientConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::BankApi;

/// HTTP client for communicating with the banking backend.
///
/// Holds a pooled `reqwest::Client` configured with the request timeout from
/// [`ClientConfig`], so a hung backend surfaces as a `Network` error instead
/// of a submission that never completes.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
        })
    }

    pub(crate) fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// POST a JSON body; any non-2xx status becomes [`AppError::Network`].
    pub(crate) async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        let url = self.url(path);
        let start = std::time::Instant::now();

        let response = self.client.post(&url).json(body).send().await.map_err(|e| {
            tracing::error!(%url, error = %e, "Request failed");
            AppError::Network(e.to_string())
        })?;

        let status = response.status();
        let duration_ms = start.elapsed().as_millis();

        if status.is_success() {
            tracing::debug!(%url, status = status.as_u16(), duration_ms, "Request succeeded");
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let reason = serde_json::from_str::<ErrorResponse>(&body)
            .map(|e| e.error)
            .unwrap_or_else(|_| format!("HTTP {}", status.as_u16()));

        tracing::warn!(
            %url,
            status = status.as_u16(),
            error = %reason,
            duration_ms,
            "Backend rejected request"
        );
        Err(AppError::Network(reason))
    }
}

#[async_trait]
impl BankApi for ApiClient {
    async fn sign_in(&self, request: SignInRequest) -> Result<Session> {
        super::auth::sign_in(self, request).await
    }

    async fn sign_up(&self, request: SignUpRequest) -> Result<()> {
        super::auth::sign_up(self, request).await
    }

    async fn deposit(&self, network: PaymentSystem, request: CardOperationRequest) -> Result<()> {
        super::transactions::deposit(self, network, request).await
    }

    async fn withdraw(&self, network: PaymentSystem, request: CardOperationRequest) -> Result<()> {
        super::transactions::withdraw(self, network, request).await
    }

    async fn transfer(&self, network: PaymentSystem, request: TransferRequest) -> Result<()> {
        super::transactions::transfer(self, network, request).await
    }
}

//! # Card Operation Endpoints
//!
//! Deposit, withdraw and transfer. Each is a single POST to the endpoint the
//! session's payment network maps to; response bodies are ignored.

use shared::{CardOperationRequest, PaymentSystem, TransferRequest};

use super::client::ApiClient;
use super::endpoints::{endpoint, Operation};
use crate::core::error::Result;

#[tracing::instrument(skip(client, request), fields(card = %shared::last_four(&request.card_num), amount = %request.summa))]
pub async fn deposit(client: &ApiClient, network: PaymentSystem, request: CardOperationRequest) -> Result<()> {
    client.post_json(endpoint(network, Operation::Deposit), &request).await?;
    tracing::info!("Deposit accepted");
    Ok(())
}

#[tracing::instrument(skip(client, request), fields(card = %shared::last_four(&request.card_num), amount = %request.summa))]
pub async fn withdraw(client: &ApiClient, network: PaymentSystem, request: CardOperationRequest) -> Result<()> {
    client.post_json(endpoint(network, Operation::Withdraw), &request).await?;
    tracing::info!("Withdrawal accepted");
    Ok(())
}

#[tracing::instrument(
    skip(client, request),
    fields(
        card = %shared::last_four(&request.card_num),
        to = %shared::last_four(&request.other_card_num),
        amount = %request.summa,
    )
)]
pub async fn transfer(client: &ApiClient, network: PaymentSystem, request: TransferRequest) -> Result<()> {
    client.post_json(endpoint(network, Operation::Transfer), &request).await?;
    tracing::info!("Transfer accepted");
    Ok(())
}

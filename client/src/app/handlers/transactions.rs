//! # Transaction Handlers
//!
//! Deposit, withdraw and transfer against the active session's card.
//!
//! ## Transfer and the cached balance
//!
//! The backend response carries no balance, so after a transfer the client
//! adjusts its cached copy itself. With [`FundsCheck::AfterSubmit`] the amount
//! is compared after the backend call; an amount above the cached balance only
//! yields the insufficient-funds notice and the cache stays as it was. With
//! [`FundsCheck::BeforeSubmit`] the comparison happens first and an
//! insufficient amount never reaches the backend.

use rust_decimal::Decimal;
use shared::Session;
use uuid::Uuid;

use crate::app::forms::{CardOperationForm, TransferForm};
use crate::app::notice::{self, Notice};
use crate::app::state::FormKind;
use crate::app::App;
use crate::config::FundsCheck;
use crate::core::error::{AppError, Result};

use super::{navigation, notify, validated, InFlight};

/// How a transfer ended, once the backend accepted it (or was never asked).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferOutcome {
    /// Cached balance reduced to `balance`.
    Completed { balance: Decimal },
    /// Amount exceeded the cached `balance`, which is unchanged.
    InsufficientFunds { balance: Decimal },
    /// Backend accepted the transfer but the session was gone by then.
    SessionEnded,
}

fn active_session(app: &App) -> Result<Session> {
    app.store.current().ok_or(AppError::NotAuthenticated)
}

/// Deposit or withdraw. Same form, different endpoint.
async fn card_operation(app: &App, form_kind: FormKind, form: CardOperationForm) -> Result<()> {
    let _slot = InFlight::acquire(&app.state, form_kind)?;
    let session = active_session(app)?;
    let request = validated(&app.state, form_kind, form.to_request(&session.number_of_card))?;

    let submission = Uuid::new_v4();
    let network = session.payment_system;
    tracing::info!(%submission, form = %form_kind, %network, amount = %request.summa, "Submitting");

    let (result, succeeded, failed) = match form_kind {
        FormKind::Withdraw => (
            app.api.withdraw(network, request).await,
            notice::WITHDRAW_SUCCEEDED,
            notice::WITHDRAW_FAILED,
        ),
        _ => (
            app.api.deposit(network, request).await,
            notice::DEPOSIT_SUCCEEDED,
            notice::DEPOSIT_FAILED,
        ),
    };

    if let Err(e) = result {
        tracing::warn!(%submission, error = %e, "Submission failed");
        notify(&app.state, Notice::error(failed));
        return Err(e);
    }

    let mut state = app.state.write();
    state.push_notice(Notice::success(succeeded));
    if state.is_showing(form_kind) {
        let authenticated = app.store.is_authenticated();
        navigation::back(&mut state, authenticated);
    } else {
        tracing::debug!(%submission, "Screen changed before completion, staying put");
    }

    Ok(())
}

/// Internal handler function - use [`crate::app::App::deposit`] instead.
pub(crate) async fn deposit(app: &App, form: CardOperationForm) -> Result<()> {
    card_operation(app, FormKind::Deposit, form).await
}

/// Internal handler function - use [`crate::app::App::withdraw`] instead.
pub(crate) async fn withdraw(app: &App, form: CardOperationForm) -> Result<()> {
    card_operation(app, FormKind::Withdraw, form).await
}

/// Internal handler function - use [`crate::app::App::transfer`] instead.
pub(crate) async fn transfer(app: &App, form: TransferForm) -> Result<TransferOutcome> {
    let _slot = InFlight::acquire(&app.state, FormKind::Transfer)?;
    let session = active_session(app)?;
    let request = validated(&app.state, FormKind::Transfer, form.to_request(&session.number_of_card))?;
    let amount = request.summa;

    let submission = Uuid::new_v4();
    let network = session.payment_system;
    tracing::info!(
        %submission,
        %network,
        %amount,
        to = %shared::last_four(&request.other_card_num),
        funds_check = %app.funds_check,
        "Submitting transfer"
    );

    if app.funds_check == FundsCheck::BeforeSubmit {
        let balance = app.store.cached_balance()?;
        if amount > balance {
            tracing::info!(%submission, %balance, "Transfer exceeds cached balance, not sent");
            notify(&app.state, Notice::error(notice::INSUFFICIENT_FUNDS));
            return Ok(TransferOutcome::InsufficientFunds { balance });
        }
    }

    if let Err(e) = app.api.transfer(network, request).await {
        tracing::warn!(%submission, error = %e, "Transfer failed");
        notify(&app.state, Notice::error(notice::TRANSFER_FAILED));
        return Err(e);
    }

    let balance = match app.store.cached_balance() {
        Ok(balance) => balance,
        Err(AppError::NotAuthenticated) => return Ok(session_ended(app, submission)),
        Err(e) => return Err(e),
    };

    if app.funds_check == FundsCheck::AfterSubmit && amount > balance {
        tracing::info!(%submission, %balance, "Transfer exceeds cached balance");
        notify(&app.state, Notice::error(notice::INSUFFICIENT_FUNDS));
        return Ok(TransferOutcome::InsufficientFunds { balance });
    }

    let remaining = balance - amount;
    match app.store.store_balance(remaining) {
        Ok(()) => {
            tracing::info!(%submission, balance = %remaining, "Transfer completed");
            notify(&app.state, Notice::success(notice::TRANSFER_SUCCEEDED));
            Ok(TransferOutcome::Completed { balance: remaining })
        }
        Err(AppError::NotAuthenticated) => Ok(session_ended(app, submission)),
        Err(e) => {
            tracing::error!(%submission, error = %e, "Failed to store balance");
            notify(&app.state, Notice::warning(notice::SESSION_SAVE_FAILED));
            Err(e)
        }
    }
}

fn session_ended(app: &App, submission: Uuid) -> TransferOutcome {
    tracing::info!(%submission, "Transfer completed after logout, balance not cached");
    notify(&app.state, Notice::success(notice::TRANSFER_SUCCEEDED));
    TransferOutcome::SessionEnded
}

//! # Authentication Handlers
//!
//! Sign-in, sign-up and logout.

use shared::Session;

use crate::app::forms::{SignInForm, SignUpForm};
use crate::app::notice::{self, Notice};
use crate::app::state::FormKind;
use crate::app::App;
use crate::core::error::Result;
use crate::routing::{Route, Target};

use super::{navigation, notify, validated, InFlight};

/// Authenticate and persist the returned session.
///
/// An already active session is returned as-is; the backend is not asked and
/// the stored record is left alone.
///
/// Internal handler function - use [`crate::app::App::sign_in`] instead.
pub(crate) async fn sign_in(app: &App, form: SignInForm) -> Result<Session> {
    let _slot = InFlight::acquire(&app.state, FormKind::SignIn)?;
    if let Some(session) = app.store.current() {
        tracing::debug!(card = %shared::last_four(&session.number_of_card), "Already signed in");
        return Ok(session);
    }
    let request = validated(&app.state, FormKind::SignIn, form.to_request())?;

    let session = match app.api.sign_in(request).await {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!(error = %e, "Sign-in failed");
            notify(&app.state, Notice::error(notice::SIGN_IN_FAILED));
            return Err(e);
        }
    };

    if let Err(e) = app.store.save(session.clone()) {
        tracing::error!(error = %e, "Failed to persist session");
        notify(&app.state, Notice::error(notice::SESSION_SAVE_FAILED));
        return Err(e);
    }

    tracing::info!(
        card = %shared::last_four(&session.number_of_card),
        network = %session.payment_system,
        "Signed in"
    );

    let mut state = app.state.write();
    if state.is_showing(FormKind::SignIn) {
        let authenticated = app.store.is_authenticated();
        navigation::go(&mut state, authenticated, Target::Known(Route::Home));
    }

    Ok(session)
}

/// Register a new account. Does not sign in.
///
/// Internal handler function - use [`crate::app::App::sign_up`] instead.
pub(crate) async fn sign_up(app: &App, form: SignUpForm) -> Result<()> {
    let _slot = InFlight::acquire(&app.state, FormKind::SignUp)?;
    let request = validated(&app.state, FormKind::SignUp, form.to_request())?;
    let card = shared::last_four(&request.number_of_card);

    if let Err(e) = app.api.sign_up(request).await {
        tracing::warn!(%card, error = %e, "Sign-up failed");
        notify(&app.state, Notice::error(notice::SIGN_UP_FAILED));
        return Err(e);
    }

    tracing::info!(%card, "Account registered");

    let mut state = app.state.write();
    state.push_notice(Notice::success(notice::SIGN_UP_SUCCEEDED));
    if state.is_showing(FormKind::SignUp) {
        let authenticated = app.store.is_authenticated();
        navigation::go(&mut state, authenticated, Target::Known(Route::SignIn));
    }

    Ok(())
}

/// Drop the session and return to the sign-in screen.
///
/// Internal handler function - use [`crate::app::App::logout`] instead.
pub(crate) fn logout(app: &App) -> Result<()> {
    let mut state = app.state.write();
    let cleared = app.store.clear();
    if let Err(e) = &cleared {
        tracing::error!(error = %e, "Failed to remove persisted session");
    }

    navigation::reset(&mut state, false, Route::SignIn);
    tracing::info!("Logged out");
    cleared
}

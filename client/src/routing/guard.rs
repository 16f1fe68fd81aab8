//! # Route Guard
//!
//! Pure admission decision, evaluated on every navigation:
//!
//! | Bootstrap | Session | Target    | Outcome          |
//! |-----------|---------|-----------|------------------|
//! | Pending   | any     | any       | Loading          |
//! | Done      | absent  | Protected | Redirect(SignIn) |
//! | Done      | present | Public    | Redirect(Home)   |
//! | Done      | absent  | Public    | Admit            |
//! | Done      | present | Protected | Admit            |
//! | Done      | present | unmatched | Redirect(Home)   |
//! | Done      | absent  | unmatched | Redirect(SignIn) |
//!
//! The outcome depends only on these inputs, never on when bootstrap happened
//! to finish relative to the first navigation.

use crate::session::BootstrapPhase;

use super::route::{Route, Target, Visibility};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Show the loading placeholder; bootstrap still running.
    Loading,
    Admit(Route),
    /// Replace the current location with this route.
    Redirect(Route),
}

pub fn evaluate(phase: BootstrapPhase, authenticated: bool, target: &Target) -> GuardOutcome {
    if !phase.is_done() {
        return GuardOutcome::Loading;
    }

    let route = match target {
        Target::Known(route) => *route,
        Target::Unmatched(_) => return GuardOutcome::Redirect(landing(authenticated)),
    };

    match (route.visibility(), authenticated) {
        (Visibility::Protected, false) => GuardOutcome::Redirect(Route::SignIn),
        (Visibility::Public, true) => GuardOutcome::Redirect(Route::Home),
        _ => GuardOutcome::Admit(route),
    }
}

/// Where a user lands by default.
pub fn landing(authenticated: bool) -> Route {
    if authenticated {
        Route::Home
    } else {
        Route::SignIn
    }
}

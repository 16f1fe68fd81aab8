//! # Navigation Handlers
//!
//! Every screen change goes through the route guard. Admitted routes are pushed
//! onto the history stack; a redirect takes the place of the rejected target
//! and is only pushed when it is not already on top.

use crate::app::state::{AppState, View};
use crate::routing::{evaluate, landing, GuardOutcome, Route, Target};

/// Re-evaluate `state.requested` and update the view.
///
/// Internal handler function - use [`crate::app::App::navigate`] instead.
pub(crate) fn resolve(state: &mut AppState, authenticated: bool) -> GuardOutcome {
    let outcome = evaluate(state.phase, authenticated, &state.requested);

    match outcome {
        GuardOutcome::Loading => {
            state.view = View::Loading;
        }
        GuardOutcome::Admit(route) => {
            state.view = View::Screen(route);
            push_history(state, route);
        }
        GuardOutcome::Redirect(route) => {
            tracing::info!(requested = ?state.requested, to = %route, "Navigation redirected");
            state.requested = Target::Known(route);
            state.view = View::Screen(route);
            push_history(state, route);
        }
    }

    outcome
}

/// Record `target` and resolve it.
pub(crate) fn go(state: &mut AppState, authenticated: bool, target: Target) -> GuardOutcome {
    state.requested = target;
    resolve(state, authenticated)
}

/// Leave the current screen for the previous history entry.
///
/// With nothing to go back to, lands on Home or SignIn as the guard decides.
pub(crate) fn back(state: &mut AppState, authenticated: bool) -> GuardOutcome {
    if !state.phase.is_done() {
        return resolve(state, authenticated);
    }

    state.history.pop();
    let previous = state.history.last().copied().unwrap_or_else(|| landing(authenticated));
    go(state, authenticated, Target::Known(previous))
}

/// Forget history and land on `route`. Used by logout.
pub(crate) fn reset(state: &mut AppState, authenticated: bool, route: Route) -> GuardOutcome {
    state.history.clear();
    go(state, authenticated, Target::Known(route))
}

fn push_history(state: &mut AppState, route: Route) {
    if state.history.last() != Some(&route) {
        state.history.push(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::BootstrapPhase;

    fn ready() -> AppState {
        AppState {
            phase: BootstrapPhase::Done,
            ..AppState::default()
        }
    }

    #[test]
    fn test_pending_navigation_only_loads() {
        let mut state = AppState::default();
        for route in Route::all() {
            let outcome = go(&mut state, true, Target::Known(*route));
            assert_eq!(outcome, GuardOutcome::Loading);
            assert_eq!(state.view, View::Loading);
        }
        assert!(state.history.is_empty());
        // Remembered for when bootstrap finishes
        assert_eq!(state.requested, Target::Known(Route::Transfer));
    }

    #[test]
    fn test_admitted_routes_are_pushed() {
        let mut state = ready();
        go(&mut state, true, Target::Known(Route::Home));
        go(&mut state, true, Target::Known(Route::Deposit));
        go(&mut state, true, Target::Known(Route::Deposit));
        assert_eq!(state.history, vec![Route::Home, Route::Deposit]);
        assert_eq!(state.view, View::Screen(Route::Deposit));
    }

    #[test]
    fn test_redirect_replaces_target() {
        let mut state = ready();
        go(&mut state, false, Target::Known(Route::SignIn));
        let outcome = go(&mut state, false, Target::Known(Route::Transfer));

        assert_eq!(outcome, GuardOutcome::Redirect(Route::SignIn));
        assert_eq!(state.requested, Target::Known(Route::SignIn));
        assert_eq!(state.history, vec![Route::SignIn]);
    }

    #[test]
    fn test_unmatched_path_redirects() {
        let mut state = ready();
        let outcome = go(&mut state, true, Target::parse("/nowhere"));
        assert_eq!(outcome, GuardOutcome::Redirect(Route::Home));
    }

    #[test]
    fn test_back_pops_history() {
        let mut state = ready();
        go(&mut state, true, Target::Known(Route::Home));
        go(&mut state, true, Target::Known(Route::Withdraw));

        let outcome = back(&mut state, true);
        assert_eq!(outcome, GuardOutcome::Admit(Route::Home));
        assert_eq!(state.history, vec![Route::Home]);
    }

    #[test]
    fn test_back_with_empty_history_lands() {
        let mut state = ready();
        assert_eq!(back(&mut state, false), GuardOutcome::Admit(Route::SignIn));

        let mut state = ready();
        go(&mut state, true, Target::Known(Route::Deposit));
        assert_eq!(back(&mut state, true), GuardOutcome::Admit(Route::Home));
    }

    #[test]
    fn test_back_rechecks_guard() {
        let mut state = ready();
        go(&mut state, true, Target::Known(Route::Home));
        go(&mut state, true, Target::Known(Route::Balance));

        // Session gone: the previous protected entry is no longer reachable.
        let outcome = back(&mut state, false);
        assert_eq!(outcome, GuardOutcome::Redirect(Route::SignIn));
    }

    #[test]
    fn test_reset_clears_history() {
        let mut state = ready();
        go(&mut state, true, Target::Known(Route::Home));
        go(&mut state, true, Target::Known(Route::Transfer));

        reset(&mut state, false, Route::SignIn);
        assert_eq!(state.history, vec![Route::SignIn]);
        assert_eq!(state.view, View::Screen(Route::SignIn));
    }
}

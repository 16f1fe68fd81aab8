//! # Application State Types
//!
//! Everything the presentation layer reads: bootstrap phase, the resolved view,
//! navigation history, per-form in-flight flags, inline form errors and the
//! notice queue. The session itself is not here; it belongs to
//! [`crate::session::SessionStore`].

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

use crate::routing::{Route, Target};
use crate::session::BootstrapPhase;

use super::notice::Notice;

/// Notices kept before the oldest are dropped.
pub const MAX_NOTICES: usize = 32;

/// Forms that talk to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    SignIn,
    SignUp,
    Deposit,
    Withdraw,
    Transfer,
}

impl FormKind {
    /// Screen hosting the form
    pub fn route(&self) -> Route {
        match self {
            FormKind::SignIn => Route::SignIn,
            FormKind::SignUp => Route::SignUp,
            FormKind::Deposit => Route::Deposit,
            FormKind::Withdraw => Route::Withdraw,
            FormKind::Transfer => Route::Transfer,
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FormKind::SignIn => "Sign-in",
            FormKind::SignUp => "Sign-up",
            FormKind::Deposit => "Deposit",
            FormKind::Withdraw => "Withdraw",
            FormKind::Transfer => "Transfer",
        })
    }
}

/// What is on screen after the guard has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Bootstrap placeholder
    Loading,
    Screen(Route),
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub phase: BootstrapPhase,
    /// Last navigation target; re-resolved when bootstrap finishes.
    pub requested: Target,
    pub view: View,
    /// Admitted routes, most recent last.
    pub history: Vec<Route>,
    pub in_flight: HashSet<FormKind>,
    /// Inline validation messages, per form.
    pub form_errors: HashMap<FormKind, String>,
    pub notices: VecDeque<Notice>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            phase: BootstrapPhase::Pending,
            requested: Target::Known(Route::Home),
            view: View::Loading,
            history: Vec::new(),
            in_flight: HashSet::new(),
            form_errors: HashMap::new(),
            notices: VecDeque::new(),
        }
    }
}

impl AppState {
    pub fn is_submitting(&self, form: FormKind) -> bool {
        self.in_flight.contains(&form)
    }

    /// True while `form`'s screen is the one displayed.
    pub fn is_showing(&self, form: FormKind) -> bool {
        self.view == View::Screen(form.route())
    }

    pub fn push_notice(&mut self, notice: Notice) {
        if self.notices.len() == MAX_NOTICES {
            self.notices.pop_front();
        }
        self.notices.push_back(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_loading() {
        let state = AppState::default();
        assert_eq!(state.phase, BootstrapPhase::Pending);
        assert_eq!(state.view, View::Loading);
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_notice_queue_is_bounded() {
        let mut state = AppState::default();
        for i in 0..(MAX_NOTICES + 5) {
            state.push_notice(Notice::success(format!("n{}", i)));
        }
        assert_eq!(state.notices.len(), MAX_NOTICES);
        assert_eq!(state.notices.front().unwrap().message, "n5");
    }

    #[test]
    fn test_form_routes() {
        assert_eq!(FormKind::Transfer.route(), Route::Transfer);
        assert_eq!(FormKind::SignIn.route(), Route::SignIn);
    }
}

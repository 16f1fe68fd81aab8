//! # Event Handlers
//!
//! Handlers organized by domain. Each submit handler runs the same sequence:
//! claim the form's in-flight slot, validate, call the backend, then update
//! state and queue a notice. State locks are taken only between awaits.

pub mod auth;
pub mod navigation;
pub mod transactions;

use std::sync::Arc;

use parking_lot::RwLock;

use crate::app::notice::Notice;
use crate::app::state::{AppState, FormKind};
use crate::core::error::{AppError, Result};

/// In-flight marker for one form. Released on drop, so every exit path of a
/// submission clears it.
pub(crate) struct InFlight {
    state: Arc<RwLock<AppState>>,
    form: FormKind,
}

impl InFlight {
    pub(crate) fn acquire(state: &Arc<RwLock<AppState>>, form: FormKind) -> Result<Self> {
        let mut guard = state.write();
        if !guard.in_flight.insert(form) {
            tracing::debug!(%form, "Submission rejected, already in flight");
            return Err(AppError::Busy(form));
        }
        guard.form_errors.remove(&form);

        Ok(Self {
            state: Arc::clone(state),
            form,
        })
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.state.write().in_flight.remove(&self.form);
    }
}

/// Record a validation failure inline under the form.
pub(crate) fn validated<T>(state: &RwLock<AppState>, form: FormKind, result: Result<T>) -> Result<T> {
    if let Err(AppError::Validation(message)) = &result {
        state.write().form_errors.insert(form, message.clone());
    }
    result
}

pub(crate) fn notify(state: &RwLock<AppState>, notice: Notice) {
    state.write().push_notice(notice);
}

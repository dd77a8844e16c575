//! Result notifier
//!
//! Publishes [`AuthViewState`] through a `watch` channel. Each write is a
//! single `send_modify`, so subscribers never observe a half-applied result.

use log::debug;
use tokio::sync::watch;

use super::state::AuthViewState;
use crate::auth::{ResultSink, ValidationResult};

pub struct ResultNotifier {
    state: watch::Sender<AuthViewState>,
}

impl ResultNotifier {
    pub fn new() -> Self {
        let (state, _) = watch::channel(AuthViewState::default());
        Self { state }
    }

    /// Returns a receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<AuthViewState> {
        self.state.subscribe()
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> AuthViewState {
        self.state.borrow().clone()
    }

    /// Hides the alert banner, leaving the message and last result in place.
    pub fn dismiss_alert(&self) {
        self.state.send_if_modified(|state| {
            let was_visible = state.alert_visible;
            state.alert_visible = false;
            was_visible
        });
    }
}

impl Default for ResultNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultSink for ResultNotifier {
    fn present_loading(&self, is_loading: bool) {
        debug!("loading -> {}", is_loading);
        self.state.send_modify(|state| state.loading = is_loading);
    }

    fn present_result(&self, result: ValidationResult) {
        debug!("result -> success={}", result.success);
        self.state.send_modify(|state| {
            state.alert_message = result.message.clone();
            state.alert_visible = !result.success;
            state.loading = false;
            state.last_result = result;
        });
    }
}

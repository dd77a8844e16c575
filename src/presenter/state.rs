//! Observable authentication view state
//!
//! The values a login screen renders from: spinner, alert banner, and the
//! last outcome received.

use crate::auth::ValidationResult;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthViewState {
    pub loading: bool,
    pub alert_visible: bool,
    pub alert_message: String,
    pub last_result: ValidationResult,
}

impl AuthViewState {
    /// Submitting is disabled while an attempt is pending.
    pub fn can_submit(&self) -> bool {
        !self.loading
    }
}

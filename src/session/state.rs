//! Session state
//!
//! The two-state login machine and the snapshot published to observers.

use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn,
}

impl SessionState {
    pub fn is_authenticated(self) -> bool {
        matches!(self, SessionState::LoggedIn)
    }
}

impl From<bool> for SessionState {
    fn from(authenticated: bool) -> Self {
        if authenticated {
            SessionState::LoggedIn
        } else {
            SessionState::LoggedOut
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::LoggedOut => write!(f, "logged out"),
            SessionState::LoggedIn => write!(f, "logged in"),
        }
    }
}

/// What session observers see: the login state plus the one-shot message
/// shown on the next screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub state: SessionState,
    pub message: Option<String>,
}

//! Authentication result types
//!
//! Defines the outcome produced by a login attempt.

pub const LOGIN_SUCCEEDED: &str = "login succeeded";
pub const LOGIN_FAILED: &str = "invalid username or password";

/// Outcome of one login attempt. Created once by the validator, consumed once
/// by the result sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub success: bool,
    pub message: String,
}

impl ValidationResult {
    pub fn succeeded() -> Self {
        Self {
            success: true,
            message: LOGIN_SUCCEEDED.to_string(),
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            message: LOGIN_FAILED.to_string(),
        }
    }
}

impl Default for ValidationResult {
    /// The empty result a view starts from before any attempt.
    fn default() -> Self {
        Self {
            success: false,
            message: String::new(),
        }
    }
}

//! Error handlers
//!
//! Maps errors onto log output and the shell's numeric reply codes.

use crate::error::types::{AppError, AuthError};
use log::error;

/// Handle an application error
pub fn handle_error(err: &AppError) {
    error!("Application error: {}", err);
}

/// Convert error to a shell reply code
pub fn error_to_reply_code(err: &AppError) -> u16 {
    match err {
        AppError::Auth(AuthError::InvalidCredentials) => 530,
        AppError::Auth(AuthError::AttemptInProgress) => 450,
        AppError::Store(_) => 451,
        AppError::Config(_) => 500,
        AppError::Io(_) => 451,
    }
}

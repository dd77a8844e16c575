//! Error types
//!
//! Defines domain-specific error types for each module of the application.

use std::fmt;
use std::io;

/// Authentication module errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Wrong username or wrong password. The two are never distinguished.
    InvalidCredentials,
    /// A login attempt is already waiting for its result.
    AttemptInProgress,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "invalid username or password"),
            AuthError::AttemptInProgress => write!(f, "a login attempt is already in progress"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Durable key-value storage errors
#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Serialization(serde_json::Error),
    InvalidValue { key: String, found: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "IO error: {}", e),
            StoreError::Serialization(e) => write!(f, "Serialization error: {}", e),
            StoreError::InvalidValue { key, found } => {
                write!(f, "Invalid value for key {}: expected bool, found {}", key, found)
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Serialization(e) => Some(e),
            StoreError::InvalidValue { .. } => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(error: io::Error) -> Self {
        StoreError::Io(error)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(error: serde_json::Error) -> Self {
        StoreError::Serialization(error)
    }
}

/// General application error that encompasses all error types
#[derive(Debug)]
pub enum AppError {
    Auth(AuthError),
    Store(StoreError),
    Config(config::ConfigError),
    Io(io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Auth(e) => write!(f, "Authentication error: {}", e),
            AppError::Store(e) => write!(f, "Storage error: {}", e),
            AppError::Config(e) => write!(f, "Configuration error: {}", e),
            AppError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<AuthError> for AppError {
    fn from(error: AuthError) -> Self {
        AppError::Auth(error)
    }
}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        AppError::Store(error)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(error: config::ConfigError) -> Self {
        AppError::Config(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        AppError::Io(error)
    }
}

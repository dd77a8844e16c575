//! Authentication system
//!
//! Handles credential hashing, login attempt validation, and the result types
//! handed to the presentation layer.

pub mod credentials;
pub mod results;
pub mod validator;

pub use credentials::{CredentialStore, Credentials, hash_password};
pub use results::ValidationResult;
pub use validator::{CredentialValidator, PendingValidation, ResultSink, Validator};

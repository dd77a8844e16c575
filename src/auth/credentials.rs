//! Credential storage and hashing
//!
//! Holds the single accepted credential pair and the digest used to compare
//! submitted passwords against it.

use sha2::{Digest, Sha256};
use std::fmt;

/// Username accepted when no override is configured.
pub const VALID_USERNAME: &str = "user";

/// Lowercase hex SHA-256 of the accepted password.
pub const VALID_PASSWORD_HASH: &str =
    "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8";

/// A username/password pair submitted for one login attempt.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// The username and password digest an attempt is compared against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialStore {
    username: String,
    password_hash: String,
}

impl CredentialStore {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }

    /// Returns true when both the username and the password digest match.
    pub fn matches(&self, credentials: &Credentials) -> bool {
        let hashed = hash_password(&credentials.password);
        credentials.username == self.username && hashed == self.password_hash
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new(VALID_USERNAME, VALID_PASSWORD_HASH)
    }
}

/// SHA-256 of the UTF-8 password, lowercase hex.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

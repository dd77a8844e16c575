//! Configuration management for the food delivery app
//!
//! Built-in defaults, then an optional `food-delivery.toml`, then environment
//! overrides prefixed with `FOOD_DELIVERY_` (nested keys joined with `__`).

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::auth::credentials::{VALID_PASSWORD_HASH, VALID_USERNAME};

const DEFAULT_CONFIG_FILE: &str = "food-delivery";
const ENV_PREFIX: &str = "FOOD_DELIVERY";

/// Complete application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Artificial latency before a login attempt resolves
    pub login_delay_ms: u64,

    /// How long a transient banner stays up before it dismisses itself
    pub banner_timeout_secs: u64,

    /// How long the splash screen is shown on start
    pub splash_duration_ms: u64,

    /// Location of the persisted session flag
    pub session_store_path: String,

    /// Category selected when the menu first opens
    pub default_category: String,

    pub auth: AuthConfig,
}

/// The single accepted credential pair
#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub username: String,

    /// Lowercase hex SHA-256 of the accepted password
    pub password_hash: String,
}

impl AppConfig {
    /// Load configuration from `food-delivery.toml` (if present) with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(
            File::with_name(DEFAULT_CONFIG_FILE).required(false),
            environment(),
        )
    }

    /// Load configuration from an explicit file, which must exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::build(File::from(path).required(true), environment())
    }

    fn build<S>(file: S, env: Environment) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let settings = Config::builder()
            .set_default("login_delay_ms", 1000_i64)?
            .set_default("banner_timeout_secs", 3_i64)?
            .set_default("splash_duration_ms", 1600_i64)?
            .set_default("session_store_path", "session.json")?
            .set_default("default_category", "Pizza")?
            .set_default("auth.username", VALID_USERNAME)?
            .set_default("auth.password_hash", VALID_PASSWORD_HASH)?
            .add_source(file)
            .add_source(env)
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.banner_timeout_secs == 0 {
            return Err(ConfigError::Message(
                "banner_timeout_secs must be greater than 0".into(),
            ));
        }

        if self.default_category.trim().is_empty() {
            return Err(ConfigError::Message(
                "default_category cannot be empty".into(),
            ));
        }

        if self.auth.username.is_empty() {
            return Err(ConfigError::Message("auth.username cannot be empty".into()));
        }

        let hash = &self.auth.password_hash;
        if hash.len() != 64 || !hash.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')) {
            return Err(ConfigError::Message(
                "auth.password_hash must be 64 lowercase hex digits".into(),
            ));
        }

        Ok(())
    }

    /// Get login delay as Duration
    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    /// Get banner timeout as Duration
    pub fn banner_timeout(&self) -> Duration {
        Duration::from_secs(self.banner_timeout_secs)
    }

    /// Get splash duration as Duration
    pub fn splash_duration(&self) -> Duration {
        Duration::from_millis(self.splash_duration_ms)
    }

    /// Get session store location as PathBuf
    pub fn session_store_path(&self) -> PathBuf {
        PathBuf::from(&self.session_store_path)
    }
}

/// `FOOD_DELIVERY_LOGIN_DELAY_MS`, `FOOD_DELIVERY_AUTH__USERNAME`, ...
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: 1000,
            banner_timeout_secs: 3,
            splash_duration_ms: 1600,
            session_store_path: "session.json".to_string(),
            default_category: "Pizza".to_string(),
            auth: AuthConfig::default(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            username: VALID_USERNAME.to_string(),
            password_hash: VALID_PASSWORD_HASH.to_string(),
        }
    }
}

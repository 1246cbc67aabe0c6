//! Application configuration loading and validation.
//!
//! Provides the [`Config`] struct that aggregates all settings. Configuration
//! is loaded from an optional TOML file; the database URL can be overridden
//! from the environment (`USERDB_DATABASE_URL`, also read from `.env`).
//!
//! # Example
//!
//! ```no_run
//! use userdb::infrastructure::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("userdb.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::database::{DatabaseConfig, DATABASE_URL_ENV};
use super::logging::{LoggingConfig, LOG_FORMATS};
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Every section and key has a default, so an empty document is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Target database and pool settings.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content, applying the environment
    /// override for the database URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_with_url_override(content, std::env::var(DATABASE_URL_ENV).ok())
    }

    /// Parse configuration from TOML content with an explicit URL override.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    pub fn parse_with_url_override(content: &str, url: Option<String>) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        if let Some(url) = url {
            config.database.url = url;
        }
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load from `path` if given, otherwise start from defaults.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn load_optional<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::parse_toml(""),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "database.url",
            }
            .into());
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                field: "database.max_connections",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.database.connect_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "database.connect_timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.database.busy_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "database.busy_timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if !self.logging.has_known_format() {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!(
                    "'{}' is not one of: {}",
                    self.logging.format,
                    LOG_FORMATS.join(", ")
                ),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

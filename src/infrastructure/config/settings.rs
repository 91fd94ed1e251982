//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct. Configuration is loaded from a TOML
//! file; a missing file means defaults. `ROSTER_DATABASE` overrides the
//! database path from the file.
//!
//! # Example
//!
//! ```no_run
//! use roster::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_or_default("config.toml")?;
//!     config.init_logging(0);
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::logging::LoggingConfig;
use crate::adapter::outbound::sqlite::database::connection::PoolSettings;
use crate::error::{ConfigError, Result};

/// Environment variable that overrides [`Config::database`].
pub const DATABASE_ENV: &str = "ROSTER_DATABASE";

/// Main application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the SQLite database file.
    ///
    /// Defaults to "students.db" in the current directory.
    pub database: String,

    /// Maximum pooled database connections.
    pub pool_size: u32,

    /// SQLite busy timeout in milliseconds.
    pub busy_timeout_ms: u64,

    /// Logging and tracing configuration.
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: "students.db".to_string(),
            pool_size: 1,
            busy_timeout_ms: 5000,
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, then apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is malformed, or fails
    /// validation.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let mut config = Self::parse_toml(&content)?;
        config.apply_env();
        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file is unreadable or invalid.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            return Self::load(path);
        }
        let mut config = Self::default();
        config.apply_env();
        Ok(config)
    }

    fn apply_env(&mut self) {
        self.override_database(std::env::var(DATABASE_ENV).ok());
    }

    /// Replace the database path with `value` unless it is missing or blank.
    fn override_database(&mut self, value: Option<String>) {
        if let Some(database) = value.filter(|v| !v.trim().is_empty()) {
            self.database = database;
        }
    }

    fn validate(&self) -> Result<()> {
        if self.database.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database",
                reason: "must not be empty".to_string(),
            }
            .into());
        }
        if self.pool_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "pool_size",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: "must be \"pretty\" or \"json\"".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Pool settings derived from this configuration.
    #[must_use]
    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            max_size: self.pool_size,
            busy_timeout_ms: self.busy_timeout_ms,
        }
    }

    /// Initialize logging from this configuration.
    pub fn init_logging(&self, verbosity: u8) {
        self.logging.init(verbosity);
    }
}

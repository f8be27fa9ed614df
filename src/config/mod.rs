//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `LEVELER`
//! prefix and `__` as the nesting separator.
//!
//! # Example
//!
//! ```no_run
//! use leveler::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod storage;

pub use error::{ConfigError, ConfigValidationError};
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Storage configuration (backend selection, data directory)
    #[serde(default)]
    pub storage: StorageConfig,

    /// Tracing filter directive, e.g. `info` or `leveler=debug`
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Loads a `.env` file if present, then reads variables with the
    /// `LEVELER` prefix:
    ///
    /// - `LEVELER__STORAGE__BACKEND=memory` -> `storage.backend`
    /// - `LEVELER__STORAGE__DATA_DIR=/var/lib/leveler` -> `storage.data_dir`
    /// - `LEVELER__LOG_FILTER=debug` -> `log_filter`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed into its
    /// expected type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default().prefix("LEVELER").separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.storage.validate()?;
        if self.log_filter.trim().is_empty() {
            return Err(ConfigValidationError::InvalidLogFilter(
                "empty filter".to_string(),
            ));
        }
        Ok(())
    }
}

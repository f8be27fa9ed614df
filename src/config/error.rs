//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ConfigValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("Data directory must not be empty")]
    EmptyDataDir,

    #[error("Unknown storage backend: {0}")]
    UnknownBackend(String),

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
}

//! Storage configuration

use serde::Deserialize;

use super::error::ConfigValidationError;

/// Which storage adapter backs the ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// In-memory store, data lost on exit.
    Memory,
    /// JSON files under `data_dir`.
    File,
}

/// Storage configuration section.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Adapter selection.
    #[serde(default = "default_backend")]
    pub backend: StorageBackend,

    /// Directory for the JSON documents when the file backend is used.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_backend() -> StorageBackend {
    StorageBackend::File
}

fn default_data_dir() -> String {
    "./data".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            data_dir: default_data_dir(),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.backend == StorageBackend::File && self.data_dir.trim().is_empty() {
            return Err(ConfigValidationError::EmptyDataDir);
        }
        Ok(())
    }
}

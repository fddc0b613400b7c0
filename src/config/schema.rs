//! Configuration schema types
//!
//! This module defines the configuration structure that maps to the TOML file.

use serde::{Deserialize, Serialize};

/// Storage backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// JSON document on disk, durable across restarts
    #[default]
    File,
    /// In-process map, lost on exit
    Memory,
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Main patient store configuration
///
/// This is the root configuration structure that maps to the TOML file.
/// Every section is optional and falls back to its defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PatientStoreConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Storage backend settings
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PatientStoreConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.storage.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backend (file or memory)
    #[serde(default)]
    pub backend: StorageBackend,

    /// Path of the JSON document used by the file backend
    #[serde(default = "default_storage_path")]
    pub path: String,

    /// Maximum key size in bytes
    #[serde(default = "default_max_key_size")]
    pub max_key_size: usize,

    /// Maximum serialized record size in bytes
    #[serde(default = "default_max_value_size")]
    pub max_value_size: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: default_storage_path(),
            max_key_size: default_max_key_size(),
            max_value_size: default_max_value_size(),
        }
    }
}

impl StorageConfig {
    fn validate(&self) -> Result<(), String> {
        if self.backend == StorageBackend::File && self.path.trim().is_empty() {
            return Err("storage.path cannot be empty when backend = 'file'".to_string());
        }

        // A generated UUID is 36 bytes of text and must always fit
        if self.max_key_size < 36 {
            return Err(format!(
                "storage.max_key_size must be >= 36, got {}",
                self.max_key_size
            ));
        }

        if self.max_value_size == 0 {
            return Err("storage.max_value_size must be > 0".to_string());
        }

        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled = true".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_storage_path() -> String {
    "data/patients.json".to_string()
}

fn default_max_key_size() -> usize {
    44
}

fn default_max_value_size() -> usize {
    1024
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PatientStoreConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.storage.max_key_size, 44);
        assert_eq!(config.storage.max_value_size, 1024);
        assert!(!config.logging.local_enabled);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: PatientStoreConfig = toml::from_str("").unwrap();
        assert_eq!(config.application.log_level, "info");
        assert_eq!(config.storage.path, "data/patients.json");
    }

    #[test]
    fn test_parse_memory_backend() {
        let config: PatientStoreConfig = toml::from_str(
            r#"
[storage]
backend = "memory"
"#,
        )
        .unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Memory);
    }

    #[test]
    fn test_unknown_backend_rejected() {
        let result: Result<PatientStoreConfig, _> = toml::from_str(
            r#"
[storage]
backend = "postgres"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = PatientStoreConfig::default();
        config.application.log_level = "verbose".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.contains("Invalid log_level"));
    }

    #[test]
    fn test_empty_path_rejected_for_file_backend() {
        let mut config = PatientStoreConfig::default();
        config.storage.path = "  ".to_string();
        assert!(config.validate().is_err());

        config.storage.backend = StorageBackend::Memory;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_key_size_too_small() {
        let mut config = PatientStoreConfig::default();
        config.storage.max_key_size = 16;
        assert!(config.validate().unwrap_err().contains("max_key_size"));
    }

    #[test]
    fn test_zero_value_size() {
        let mut config = PatientStoreConfig::default();
        config.storage.max_value_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_rotation() {
        let mut config = PatientStoreConfig::default();
        config.logging.local_rotation = "weekly".to_string();
        assert!(config.validate().unwrap_err().contains("local_rotation"));
    }

    #[test]
    fn test_backend_display() {
        assert_eq!(StorageBackend::File.to_string(), "file");
        assert_eq!(StorageBackend::Memory.to_string(), "memory");
    }
}

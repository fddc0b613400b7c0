//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{PatientStoreConfig, StorageBackend};
use crate::domain::errors::PatientStoreError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into PatientStoreConfig
/// 4. Applies environment variable overrides (PATIENT_STORE_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns [`PatientStoreError::Configuration`] if the file is missing or
/// unreadable, a referenced variable is unset, parsing fails, or validation
/// fails.
///
/// # Examples
///
/// ```no_run
/// use patient_store::config::loader::load_config;
///
/// let config = load_config("patient-store.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<PatientStoreConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(PatientStoreError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        PatientStoreError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    load_config_from_str(&contents)
}

/// Parses, overrides and validates configuration from TOML text
///
/// # Errors
///
/// Same as [`load_config`], minus the file access failures.
pub fn load_config_from_str(contents: &str) -> Result<PatientStoreConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: PatientStoreConfig = toml::from_str(&contents)
        .map_err(|e| PatientStoreError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        PatientStoreError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied through untouched.
///
/// # Errors
///
/// Returns an error naming every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| PatientStoreError::Configuration(format!("Invalid pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(PatientStoreError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using PATIENT_STORE_* prefix
///
/// Environment variables follow the pattern: PATIENT_STORE_<SECTION>_<KEY>
/// For example: PATIENT_STORE_STORAGE_PATH, PATIENT_STORE_APPLICATION_LOG_LEVEL
fn apply_env_overrides(config: &mut PatientStoreConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("PATIENT_STORE_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Storage overrides
    if let Ok(val) = std::env::var("PATIENT_STORE_STORAGE_BACKEND") {
        config.storage.backend = match val.as_str() {
            "file" => StorageBackend::File,
            "memory" => StorageBackend::Memory,
            other => {
                return Err(PatientStoreError::Configuration(format!(
                    "Invalid PATIENT_STORE_STORAGE_BACKEND '{other}'. Must be one of: file, memory"
                )))
            }
        };
    }
    if let Ok(val) = std::env::var("PATIENT_STORE_STORAGE_PATH") {
        config.storage.path = val;
    }
    if let Ok(val) = std::env::var("PATIENT_STORE_STORAGE_MAX_KEY_SIZE") {
        if let Ok(size) = val.parse() {
            config.storage.max_key_size = size;
        }
    }
    if let Ok(val) = std::env::var("PATIENT_STORE_STORAGE_MAX_VALUE_SIZE") {
        if let Ok(size) = val.parse() {
            config.storage.max_value_size = size;
        }
    }

    // Logging overrides
    if let Ok(val) = std::env::var("PATIENT_STORE_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("PATIENT_STORE_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("PATIENT_STORE_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

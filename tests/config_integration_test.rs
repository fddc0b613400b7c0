//! Integration tests for configuration loading and validation
//!
//! Tests that modify environment variables hold `ENV_MUTEX` so they do not
//! interfere with each other.

use patient_store::config::{load_config, StorageBackend};
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("PATIENT_STORE_APPLICATION_LOG_LEVEL");
    std::env::remove_var("PATIENT_STORE_STORAGE_BACKEND");
    std::env::remove_var("PATIENT_STORE_STORAGE_PATH");
    std::env::remove_var("PATIENT_STORE_STORAGE_MAX_VALUE_SIZE");
    std::env::remove_var("PATIENT_STORE_LOGGING_LOCAL_ROTATION");
    std::env::remove_var("TEST_PATIENT_DATA_DIR");
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(contents.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[application]
log_level = "debug"

[storage]
backend = "file"
path = "/var/lib/patient-store/patients.json"
max_key_size = 64
max_value_size = 2048

[logging]
local_enabled = true
local_path = "/tmp/patient-store"
local_rotation = "hourly"
"#,
    );

    let config = load_config(temp_file.path()).unwrap();
    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.storage.backend, StorageBackend::File);
    assert_eq!(config.storage.path, "/var/lib/patient-store/patients.json");
    assert_eq!(config.storage.max_key_size, 64);
    assert_eq!(config.storage.max_value_size, 2048);
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_path, "/tmp/patient-store");
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_load_empty_config_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config("");

    let config = load_config(temp_file.path()).unwrap();
    assert_eq!(config.application.log_level, "info");
    assert_eq!(config.storage.backend, StorageBackend::File);
    assert_eq!(config.storage.path, "data/patients.json");
    assert_eq!(config.storage.max_key_size, 44);
    assert_eq!(config.storage.max_value_size, 1024);
    assert!(!config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "daily");
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TEST_PATIENT_DATA_DIR", "/srv/data");

    let temp_file = write_config(
        r#"
[storage]
path = "${TEST_PATIENT_DATA_DIR}/patients.json"
"#,
    );

    let result = load_config(temp_file.path());
    cleanup_env_vars();

    assert_eq!(result.unwrap().storage.path, "/srv/data/patients.json");
}

#[test]
fn test_missing_substitution_variable_fails() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[storage]
path = "${TEST_PATIENT_DATA_DIR}/patients.json"
"#,
    );

    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("TEST_PATIENT_DATA_DIR"));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_env_var_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("PATIENT_STORE_APPLICATION_LOG_LEVEL", "warn");
    std::env::set_var("PATIENT_STORE_STORAGE_BACKEND", "memory");
    std::env::set_var("PATIENT_STORE_STORAGE_MAX_VALUE_SIZE", "4096");

    let temp_file = write_config(
        r#"
[application]
log_level = "info"

[storage]
backend = "file"
"#,
    );

    let result = load_config(temp_file.path());
    cleanup_env_vars();

    let config = result.unwrap();
    assert_eq!(config.application.log_level, "warn");
    assert_eq!(config.storage.backend, StorageBackend::Memory);
    assert_eq!(config.storage.max_value_size, 4096);
}

#[test]
fn test_invalid_backend_override_fails() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("PATIENT_STORE_STORAGE_BACKEND", "postgres");

    let temp_file = write_config("");
    let result = load_config(temp_file.path());
    cleanup_env_vars();

    assert!(result.is_err());
}

#[test]
fn test_invalid_config_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let cases = [
        "[application]\nlog_level = \"loud\"\n",
        "[storage]\nmax_key_size = 8\n",
        "[storage]\nmax_value_size = 0\n",
        "[storage]\nbackend = \"file\"\npath = \"  \"\n",
        "[logging]\nlocal_rotation = \"size\"\n",
        "[storage]\nbackend = \"sqlite\"\n",
    ];

    for contents in cases {
        let temp_file = write_config(contents);
        let err = load_config(temp_file.path()).unwrap_err();
        assert_eq!(err.exit_code(), 2, "expected config error for {contents:?}");
    }
}

#[test]
fn test_missing_config_file() {
    let err = load_config("definitely-not-here.toml").unwrap_err();
    assert!(err.to_string().contains("Configuration file not found"));
}

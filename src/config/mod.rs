//! Configuration management for the patient store.
//!
//! TOML configuration with:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `PATIENT_STORE_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [storage]
//! backend = "file"
//! path = "${PATIENT_STORE_DATA_DIR}/patients.json"
//! max_key_size = 44
//! max_value_size = 1024
//!
//! [logging]
//! local_enabled = true
//! local_path = "logs"
//! local_rotation = "daily"
//! ```
//!
//! ```rust,no_run
//! use patient_store::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("patient-store.toml")?;
//! println!("Storage backend: {}", config.storage.backend);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_from_str};
pub use schema::{
    ApplicationConfig, LoggingConfig, PatientStoreConfig, StorageBackend, StorageConfig,
};

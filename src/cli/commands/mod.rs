//! CLI command implementations
//!
//! Data commands print records as pretty JSON on stdout and report failures
//! on stderr, returning the exit code from
//! [`PatientStoreError::exit_code`](crate::domain::PatientStoreError::exit_code).

pub mod add;
pub mod delete;
pub mod get;
pub mod init;
pub mod list;
pub mod set_status;
pub mod update;
pub mod validate;

use crate::adapters::storage::create_patient_storage;
use crate::config::load_config;
use crate::core::PatientService;
use crate::domain::PatientStoreError;
use serde::Serialize;

/// Load configuration and open the configured store
///
/// On failure the error is reported and the exit code returned as `Err`.
pub(crate) async fn open_service(config_path: &str) -> Result<PatientService, i32> {
    let config = load_config(config_path).map_err(|e| {
        eprintln!("❌ Failed to load configuration file");
        eprintln!("   Error: {e}");
        eprintln!("   Run 'patient-store init' to create one");
        e.exit_code()
    })?;

    let storage = create_patient_storage(&config.storage).await.map_err(|e| {
        eprintln!("❌ Failed to open {} storage", config.storage.backend);
        eprintln!("   Error: {e}");
        e.exit_code()
    })?;

    Ok(PatientService::new(storage))
}

/// Report an operation failure and return its exit code
pub(crate) fn report_error(err: &PatientStoreError) -> i32 {
    eprintln!("❌ {err}");
    err.exit_code()
}

/// Print a value as pretty JSON on stdout
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

//! Logging and observability
//!
//! Structured logging via `tracing`, with:
//! - Configurable log levels (`RUST_LOG` overrides the configured level)
//! - Console output on stderr
//! - Optional JSON file output with rotation
//!
//! # Example
//!
//! ```no_run
//! use patient_store::logging::init_logging;
//! use patient_store::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log a successful patient mutation
///
/// # Example
///
/// ```no_run
/// use patient_store::log_patient_mutation;
///
/// log_patient_mutation!("add", "7d44b88c-4199-4bad-97dc-d78268e01398");
/// ```
#[macro_export]
macro_rules! log_patient_mutation {
    ($operation:expr, $patient_id:expr) => {
        tracing::info!(
            operation = $operation,
            patient_id = %$patient_id,
            "Patient record changed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use patient_store::log_error_with_context;
/// use patient_store::domain::PatientStoreError;
///
/// let error = PatientStoreError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}

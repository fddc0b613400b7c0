//! Domain error types
//!
//! This module defines the error hierarchy for the patient store.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main patient store error type
///
/// Every fallible operation in the crate returns this type. The first three
/// variants are the service taxonomy callers are expected to match on; the
/// remaining ones come from the ambient configuration and logging layers.
#[derive(Debug, Error)]
pub enum PatientStoreError {
    /// Input failed a stated constraint (empty name, invalid status, empty id)
    #[error("Validation error: {0}")]
    Validation(String),

    /// The referenced patient id does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// The persistence backend failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PatientStoreError {
    /// Returns true for validation failures
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true when the referenced patient was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Process exit code the CLI reports for this error
    ///
    /// - `2` configuration error
    /// - `3` validation error
    /// - `4` patient not found
    /// - `5` storage or other fatal error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Configuration(_) => 2,
            Self::Validation(_) => 3,
            Self::NotFound(_) => 4,
            Self::Storage(_) | Self::Io(_) | Self::Serialization(_) => 5,
        }
    }
}

/// Storage-specific errors
///
/// Errors raised by [`PatientStorage`](crate::adapters::storage::PatientStorage)
/// backends. They are surfaced to callers as an opaque
/// [`PatientStoreError::Storage`] and never retried.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Failed to read the backing store
    #[error("Failed to read store: {0}")]
    ReadFailed(String),

    /// Failed to write the backing store
    #[error("Failed to write store: {0}")]
    WriteFailed(String),

    /// Backing store content could not be decoded
    #[error("Store is corrupted: {0}")]
    Corrupted(String),

    /// A key or serialized value exceeds the configured bound
    #[error("{what} size {size} exceeds maximum of {max} bytes")]
    CapacityExceeded {
        what: &'static str,
        size: usize,
        max: usize,
    },

    /// A freshly generated key collided with an existing record
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for PatientStoreError {
    fn from(err: std::io::Error) -> Self {
        PatientStoreError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for PatientStoreError {
    fn from(err: serde_json::Error) -> Self {
        PatientStoreError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for PatientStoreError {
    fn from(err: toml::de::Error) -> Self {
        PatientStoreError::Configuration(format!("TOML parse error: {err}"))
    }
}

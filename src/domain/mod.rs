//! Domain models and types for the patient store.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Records** ([`Patient`], [`PatientPayload`], [`PatientStatus`])
//! - **Strongly-typed identifiers** ([`PatientId`])
//! - **Error types** ([`PatientStoreError`], [`StorageError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, PatientStoreError>`]:
//!
//! ```rust
//! use patient_store::domain::{PatientStatus, Result};
//!
//! fn example() -> Result<PatientStatus> {
//!     // Invalid values surface as PatientStoreError::Validation
//!     let status: PatientStatus = "inactive".parse()?;
//!     Ok(status)
//! }
//! ```

pub mod errors;
pub mod ids;
pub mod patient;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{PatientStoreError, StorageError};
pub use ids::PatientId;
pub use patient::{Patient, PatientPayload, PatientStatus};
pub use result::Result;

//! Result type alias for the patient store

use super::errors::PatientStoreError;

/// Result type alias for patient store operations
///
/// # Examples
///
/// ```
/// use patient_store::domain::result::Result;
/// use patient_store::domain::errors::PatientStoreError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(PatientStoreError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, PatientStoreError>;

//! Input validation rules

use crate::domain::{PatientPayload, PatientStoreError, Result};

/// Returns true if both names contain something other than whitespace
pub fn is_valid_name_pair(first_name: &str, last_name: &str) -> bool {
    !first_name.trim().is_empty() && !last_name.trim().is_empty()
}

/// Validates the names in a payload
///
/// `action` is the verb used in the error message ("add", "update").
///
/// # Errors
///
/// Returns [`PatientStoreError::Validation`] if either name is blank.
pub fn validate_payload(payload: &PatientPayload, action: &str) -> Result<()> {
    if is_valid_name_pair(&payload.first_name, &payload.last_name) {
        Ok(())
    } else {
        Err(PatientStoreError::Validation(format!(
            "Couldn't {action} Patient. First or Last name is invalid"
        )))
    }
}

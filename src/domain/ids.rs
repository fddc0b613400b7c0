//! Patient identifier newtype
//!
//! Patient ids are opaque strings (UUID v4 text when generated by the store).
//! The only structural rule is that an id is never empty.

use super::errors::PatientStoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Patient identifier newtype wrapper
///
/// # Examples
///
/// ```
/// use patient_store::domain::ids::PatientId;
/// use std::str::FromStr;
///
/// let id = PatientId::from_str("7d44b88c-4199-4bad-97dc-d78268e01398").unwrap();
/// assert_eq!(id.as_str(), "7d44b88c-4199-4bad-97dc-d78268e01398");
/// assert!(PatientId::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PatientId(String);

impl PatientId {
    /// Creates a new PatientId
    ///
    /// # Errors
    ///
    /// Returns [`PatientStoreError::Validation`] if the id is empty.
    /// Whitespace-only ids are accepted.
    pub fn new(id: impl Into<String>) -> Result<Self, PatientStoreError> {
        let id = id.into();
        if id.is_empty() {
            return Err(PatientStoreError::Validation(
                "Invalid patient ID".to_string(),
            ));
        }
        Ok(Self(id))
    }

    /// Returns the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PatientId {
    type Err = PatientStoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PatientId {
    type Error = PatientStoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PatientId> for String {
    fn from(id: PatientId) -> Self {
        id.0
    }
}

impl AsRef<str> for PatientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_id_creation() {
        let id = PatientId::new("7d44b88c-4199-4bad-97dc-d78268e01398").unwrap();
        assert_eq!(id.as_str(), "7d44b88c-4199-4bad-97dc-d78268e01398");
    }

    #[test]
    fn test_patient_id_empty_fails() {
        let err = PatientId::new("").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(PatientId::new("  \t").unwrap().as_str(), "  \t");
    }

    #[test]
    fn test_patient_id_display() {
        let id = PatientId::new("abc").unwrap();
        assert_eq!(format!("{id}"), "abc");
    }

    #[test]
    fn test_patient_id_serialization() {
        let id = PatientId::new("abc").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc\"");
        let back: PatientId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<PatientId>("\"\"").is_err());
    }
}

//! Patient domain model
//!
//! This module defines the [`Patient`] record, the [`PatientPayload`] used to
//! create and update it, and the closed [`PatientStatus`] set.

use super::errors::PatientStoreError;
use super::ids::PatientId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Patient status
///
/// Serialized as the lowercase strings `"active"` and `"inactive"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PatientStatus {
    /// Patient is active (the status of every new record)
    #[default]
    Active,
    /// Patient is inactive
    Inactive,
}

impl PatientStatus {
    /// Returns the wire representation of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for PatientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for PatientStatus {
    type Err = PatientStoreError;

    /// Parses a status; matching is exact and case-sensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(PatientStoreError::Validation(format!(
                "Invalid status '{other}'. Must be one of: active, inactive"
            ))),
        }
    }
}

/// Input for creating or updating a patient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientPayload {
    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Birth date as an opaque 64-bit timestamp
    pub birth_date: u64,
}

impl PatientPayload {
    /// Creates a new payload
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, birth_date: u64) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_date,
        }
    }
}

/// A stored patient record
///
/// # Examples
///
/// ```
/// use patient_store::domain::{Patient, PatientId, PatientPayload, PatientStatus};
///
/// let patient = Patient::new(
///     PatientId::new("p-1").unwrap(),
///     PatientPayload::new("Ann", "Lee", 100),
///     1_000,
/// );
///
/// assert_eq!(patient.status, PatientStatus::Active);
/// assert_eq!(patient.updated_at, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Unique, immutable identifier
    pub id: PatientId,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Birth date as an opaque 64-bit timestamp
    pub birth_date: u64,

    /// Current status
    pub status: PatientStatus,

    /// Creation time, never modified
    pub created_at: u64,

    /// Time of the last full update; `None` until the first one
    pub updated_at: Option<u64>,
}

impl Patient {
    /// Creates a new active patient that has never been updated
    pub fn new(id: PatientId, payload: PatientPayload, created_at: u64) -> Self {
        Self {
            id,
            first_name: payload.first_name,
            last_name: payload.last_name,
            birth_date: payload.birth_date,
            status: PatientStatus::Active,
            created_at,
            updated_at: None,
        }
    }

    /// Returns a copy with the payload fields replaced and `updated_at` set
    ///
    /// `id`, `status` and `created_at` carry over. The update time is clamped
    /// to `created_at` so it never precedes creation.
    pub fn with_update(&self, payload: PatientPayload, now: u64) -> Self {
        Self {
            first_name: payload.first_name,
            last_name: payload.last_name,
            birth_date: payload.birth_date,
            updated_at: Some(now.max(self.created_at)),
            ..self.clone()
        }
    }

    /// Returns a copy with only the status replaced
    pub fn with_status(&self, status: PatientStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

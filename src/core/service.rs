//! Patient service
//!
//! The service owns the storage backend and applies validation and lookup
//! rules around it. Mutating operations take `&mut self`, so requests against
//! one service are always served one at a time.

use crate::adapters::storage::PatientStorage;
use crate::core::clock::{Clock, SystemClock};
use crate::core::ids::{IdGenerator, UuidGenerator};
use crate::core::validation::validate_payload;
use crate::domain::{
    Patient, PatientId, PatientPayload, PatientStatus, PatientStoreError, Result, StorageError,
};
use crate::log_patient_mutation;
use std::sync::Arc;

/// Patient record service
///
/// # Example
///
/// ```rust
/// use patient_store::adapters::storage::MemoryStorage;
/// use patient_store::core::PatientService;
/// use patient_store::domain::{PatientPayload, PatientStatus};
///
/// # async fn example() -> patient_store::domain::Result<()> {
/// let mut service = PatientService::new(Box::new(MemoryStorage::new()));
///
/// let patient = service.add_patient(PatientPayload::new("Ann", "Lee", 100)).await?;
/// assert_eq!(patient.status, PatientStatus::Active);
///
/// service.update_patient_status(patient.id.as_str(), "inactive").await?;
/// assert!(service.get_patients_by_status("active").await?.is_empty());
/// # Ok(())
/// # }
/// ```
pub struct PatientService {
    storage: Box<dyn PatientStorage>,
    ids: Box<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl PatientService {
    /// Create a service over `storage` using UUID ids and the system clock
    pub fn new(storage: Box<dyn PatientStorage>) -> Self {
        Self::with_collaborators(
            storage,
            Box::new(UuidGenerator),
            Arc::new(SystemClock::new()),
        )
    }

    /// Create a service with explicit id and time sources
    pub fn with_collaborators(
        storage: Box<dyn PatientStorage>,
        ids: Box<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            storage,
            ids,
            clock,
        }
    }

    /// Name of the underlying storage backend
    pub fn backend_name(&self) -> &str {
        self.storage.backend_name()
    }

    /// Create a new active patient
    ///
    /// # Errors
    ///
    /// - [`PatientStoreError::Validation`] if either name is blank
    /// - [`PatientStoreError::Storage`] if the record cannot be stored
    pub async fn add_patient(&mut self, payload: PatientPayload) -> Result<Patient> {
        validate_payload(&payload, "add").map_err(|e| rejected("add", e))?;

        let id = PatientId::new(self.ids.generate())?;
        if self.storage.contains_key(id.as_str()).await? {
            return Err(StorageError::DuplicateKey(id.into_inner()).into());
        }

        let patient = Patient::new(id, payload, self.clock.now());
        self.storage
            .insert(patient.id.as_str(), patient.clone())
            .await?;

        log_patient_mutation!("add", patient.id);
        Ok(patient)
    }

    /// Replace the names and birth date of an existing patient
    ///
    /// `status`, `id` and `created_at` are kept; `updated_at` is set to now.
    ///
    /// # Errors
    ///
    /// - [`PatientStoreError::Validation`] for an empty id or a blank name
    /// - [`PatientStoreError::NotFound`] if no patient has this id
    pub async fn update_patient(&mut self, id: &str, payload: PatientPayload) -> Result<Patient> {
        let id = parse_id(id, "update")?;
        validate_payload(&payload, "update").map_err(|e| rejected("update", e))?;

        let existing = self.storage.get(id.as_str()).await?.ok_or_else(|| {
            rejected(
                "update",
                PatientStoreError::NotFound(format!(
                    "Couldn't update Patient with id={id}. Patient not found."
                )),
            )
        })?;

        let updated = existing.with_update(payload, self.clock.now());
        self.storage.insert(id.as_str(), updated.clone()).await?;

        log_patient_mutation!("update", id);
        Ok(updated)
    }

    /// Remove a patient, returning the removed record
    ///
    /// # Errors
    ///
    /// - [`PatientStoreError::Validation`] for an empty id
    /// - [`PatientStoreError::NotFound`] if no patient has this id
    pub async fn delete_patient(&mut self, id: &str) -> Result<Patient> {
        let id = parse_id(id, "delete")?;

        let removed = self.storage.remove(id.as_str()).await?.ok_or_else(|| {
            rejected(
                "delete",
                PatientStoreError::NotFound(format!(
                    "Couldn't delete Patient with id={id}. Patient not found."
                )),
            )
        })?;

        log_patient_mutation!("delete", id);
        Ok(removed)
    }

    /// Change only the status of a patient
    ///
    /// `updated_at` is left untouched.
    ///
    /// # Errors
    ///
    /// - [`PatientStoreError::Validation`] for an empty id or a status other
    ///   than `active` / `inactive`
    /// - [`PatientStoreError::NotFound`] if no patient has this id
    pub async fn update_patient_status(&mut self, id: &str, status: &str) -> Result<PatientStatus> {
        let id = parse_id(id, "update_status")?;

        let existing = self.storage.get(id.as_str()).await?.ok_or_else(|| {
            rejected(
                "update_status",
                PatientStoreError::NotFound(format!(
                    "Couldn't update Patient with id={id}. Patient not found."
                )),
            )
        })?;

        let status: PatientStatus = status.parse().map_err(|_| {
            rejected(
                "update_status",
                PatientStoreError::Validation(format!(
                    "Couldn't update Patient with id={id}. Status is invalid."
                )),
            )
        })?;

        self.storage
            .insert(id.as_str(), existing.with_status(status))
            .await?;

        tracing::info!(patient_id = %id, status = %status, "Patient status changed");
        Ok(status)
    }

    /// Fetch one patient
    ///
    /// # Errors
    ///
    /// - [`PatientStoreError::Validation`] for an empty id
    /// - [`PatientStoreError::NotFound`] if no patient has this id
    pub async fn get_patient(&self, id: &str) -> Result<Patient> {
        let id = parse_id(id, "get")?;

        tracing::debug!(patient_id = %id, "Fetching patient");
        self.storage.get(id.as_str()).await?.ok_or_else(|| {
            rejected(
                "get",
                PatientStoreError::NotFound(format!(
                    "Couldn't get Patient with id={id}. Patient not found."
                )),
            )
        })
    }

    /// All patients, in storage key order
    pub async fn get_patients(&self) -> Result<Vec<Patient>> {
        let patients = self.storage.values().await?;
        tracing::debug!(count = patients.len(), "Listed patients");
        Ok(patients)
    }

    /// Patients whose status equals `status`, in storage key order
    ///
    /// # Errors
    ///
    /// - [`PatientStoreError::Validation`] if `status` is not `active` / `inactive`
    pub async fn get_patients_by_status(&self, status: &str) -> Result<Vec<Patient>> {
        let status: PatientStatus = status.parse().map_err(|_| {
            rejected(
                "list_by_status",
                PatientStoreError::Validation(
                    "Couldn't get Patients. Status is invalid".to_string(),
                ),
            )
        })?;

        let patients: Vec<Patient> = self
            .storage
            .values()
            .await?
            .into_iter()
            .filter(|p| p.status == status)
            .collect();

        tracing::debug!(status = %status, count = patients.len(), "Listed patients by status");
        Ok(patients)
    }

    /// Number of stored patients
    pub async fn count(&self) -> Result<usize> {
        self.storage.len().await
    }
}

fn parse_id(id: &str, operation: &str) -> Result<PatientId> {
    PatientId::new(id).map_err(|e| rejected(operation, e))
}

fn rejected(operation: &str, err: PatientStoreError) -> PatientStoreError {
    tracing::warn!(operation = operation, error = %err, "Request rejected");
    err
}

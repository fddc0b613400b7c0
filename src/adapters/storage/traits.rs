//! Storage abstraction traits
//!
//! This module defines the key-value interface the patient service persists
//! through, plus the capacity bounds every backend enforces.

use crate::domain::{Patient, Result, StorageError};
use async_trait::async_trait;

/// Ordered key-value storage for patient records
///
/// Keys are patient ids. Each method is a single, complete operation: it
/// either takes full effect or leaves the store untouched.
#[async_trait]
pub trait PatientStorage: Send + Sync {
    /// Short name of the backend, used in logs
    fn backend_name(&self) -> &str;

    /// Look up a record by key
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(Patient))` if found, `Ok(None)` if not found.
    async fn get(&self, key: &str) -> Result<Option<Patient>>;

    /// Insert or replace the record stored under `key`
    ///
    /// # Errors
    ///
    /// Returns a storage error if the record exceeds the capacity bounds or
    /// cannot be persisted. The previous value is kept in that case.
    async fn insert(&mut self, key: &str, record: Patient) -> Result<()>;

    /// Remove the record stored under `key`
    ///
    /// # Returns
    ///
    /// Returns the removed record, or `None` if the key was absent.
    async fn remove(&mut self, key: &str) -> Result<Option<Patient>>;

    /// All records in key order
    async fn values(&self) -> Result<Vec<Patient>>;

    /// Number of stored records
    async fn len(&self) -> Result<usize> {
        Ok(self.values().await?.len())
    }

    /// Returns true if `key` is present
    async fn contains_key(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).await?.is_some())
    }
}

/// Upper bounds on key and serialized record size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityLimits {
    /// Maximum key length in bytes
    pub max_key_size: usize,

    /// Maximum serialized (JSON) record length in bytes
    pub max_value_size: usize,
}

impl CapacityLimits {
    /// Creates new limits
    pub fn new(max_key_size: usize, max_value_size: usize) -> Self {
        Self {
            max_key_size,
            max_value_size,
        }
    }

    /// Checks a key/record pair against the limits
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::CapacityExceeded`] when either bound is exceeded.
    pub fn check(&self, key: &str, record: &Patient) -> Result<()> {
        if key.len() > self.max_key_size {
            return Err(StorageError::CapacityExceeded {
                what: "Key",
                size: key.len(),
                max: self.max_key_size,
            }
            .into());
        }

        let encoded = serde_json::to_vec(record)
            .map_err(|e| StorageError::WriteFailed(format!("Failed to encode record: {e}")))?;
        if encoded.len() > self.max_value_size {
            return Err(StorageError::CapacityExceeded {
                what: "Value",
                size: encoded.len(),
                max: self.max_value_size,
            }
            .into());
        }

        Ok(())
    }
}

impl Default for CapacityLimits {
    fn default() -> Self {
        Self::new(44, 1024)
    }
}

//! In-memory storage backend
//!
//! Non-durable; used for tests and `backend = "memory"` runs.

use crate::adapters::storage::traits::{CapacityLimits, PatientStorage};
use crate::domain::{Patient, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Ordered in-memory patient map
#[derive(Debug, Default)]
pub struct MemoryStorage {
    records: BTreeMap<String, Patient>,
    limits: CapacityLimits,
}

impl MemoryStorage {
    /// Create an empty store with default capacity limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given capacity limits
    pub fn with_limits(limits: CapacityLimits) -> Self {
        Self {
            records: BTreeMap::new(),
            limits,
        }
    }
}

#[async_trait]
impl PatientStorage for MemoryStorage {
    fn backend_name(&self) -> &str {
        "memory"
    }

    async fn get(&self, key: &str) -> Result<Option<Patient>> {
        Ok(self.records.get(key).cloned())
    }

    async fn insert(&mut self, key: &str, record: Patient) -> Result<()> {
        self.limits.check(key, &record)?;
        self.records.insert(key.to_string(), record);
        Ok(())
    }

    async fn remove(&mut self, key: &str) -> Result<Option<Patient>> {
        Ok(self.records.remove(key))
    }

    async fn values(&self) -> Result<Vec<Patient>> {
        Ok(self.records.values().cloned().collect())
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.records.len())
    }
}

//! Storage backend factory
//!
//! This module provides a factory function to create a storage backend based
//! on configuration.

use crate::adapters::storage::file::FileStorage;
use crate::adapters::storage::memory::MemoryStorage;
use crate::adapters::storage::traits::{CapacityLimits, PatientStorage};
use crate::config::schema::{StorageBackend, StorageConfig};
use crate::domain::Result;

/// Create a storage backend based on the configuration
///
/// # Errors
///
/// Returns an error if the file backend cannot load its document
pub async fn create_patient_storage(config: &StorageConfig) -> Result<Box<dyn PatientStorage>> {
    let limits = CapacityLimits::new(config.max_key_size, config.max_value_size);

    match config.backend {
        StorageBackend::File => {
            let storage = FileStorage::open(&config.path, limits).await?;
            tracing::debug!(path = %storage.path().display(), "Created file storage");
            Ok(Box::new(storage))
        }
        StorageBackend::Memory => {
            tracing::debug!("Creating in-memory storage");
            Ok(Box::new(MemoryStorage::with_limits(limits)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_create_memory_storage() {
        let config = StorageConfig {
            backend: StorageBackend::Memory,
            ..StorageConfig::default()
        };
        let storage = create_patient_storage(&config).await.unwrap();
        assert_eq!(storage.backend_name(), "memory");
    }

    #[tokio::test]
    async fn test_create_file_storage() {
        let dir = TempDir::new().unwrap();
        let config = StorageConfig {
            backend: StorageBackend::File,
            path: dir.path().join("patients.json").to_string_lossy().to_string(),
            ..StorageConfig::default()
        };
        let storage = create_patient_storage(&config).await.unwrap();
        assert_eq!(storage.backend_name(), "file");
    }
}

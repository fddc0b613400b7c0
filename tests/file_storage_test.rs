//! Integration tests for the JSON file backend

use patient_store::adapters::storage::{
    create_patient_storage, CapacityLimits, FileStorage, PatientStorage,
};
use patient_store::config::{StorageBackend, StorageConfig};
use patient_store::core::PatientService;
use patient_store::domain::{PatientPayload, PatientStatus, PatientStoreError, StorageError};
use tempfile::TempDir;

fn file_config(dir: &TempDir) -> StorageConfig {
    StorageConfig {
        backend: StorageBackend::File,
        path: dir
            .path()
            .join("data")
            .join("patients.json")
            .to_string_lossy()
            .to_string(),
        ..StorageConfig::default()
    }
}

#[tokio::test]
async fn test_records_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let config = file_config(&dir);

    let (kept, deleted) = {
        let mut service = PatientService::new(create_patient_storage(&config).await.unwrap());
        let kept = service
            .add_patient(PatientPayload::new("Ann", "Lee", 100))
            .await
            .unwrap();
        let deleted = service
            .add_patient(PatientPayload::new("Bob", "Ray", 200))
            .await
            .unwrap();
        service
            .update_patient_status(kept.id.as_str(), "inactive")
            .await
            .unwrap();
        service.delete_patient(deleted.id.as_str()).await.unwrap();
        (kept, deleted)
    };

    let service = PatientService::new(create_patient_storage(&config).await.unwrap());
    assert_eq!(service.backend_name(), "file");

    let reloaded = service.get_patient(kept.id.as_str()).await.unwrap();
    assert_eq!(reloaded.first_name, "Ann");
    assert_eq!(reloaded.created_at, kept.created_at);
    assert_eq!(reloaded.status, PatientStatus::Inactive);

    assert!(service
        .get_patient(deleted.id.as_str())
        .await
        .unwrap_err()
        .is_not_found());
    assert_eq!(service.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_document_uses_camel_case_fields() {
    let dir = TempDir::new().unwrap();
    let config = file_config(&dir);

    let mut service = PatientService::new(create_patient_storage(&config).await.unwrap());
    service
        .add_patient(PatientPayload::new("Ann", "Lee", 100))
        .await
        .unwrap();

    let document = std::fs::read_to_string(&config.path).unwrap();
    assert!(document.contains("\"firstName\": \"Ann\""));
    assert!(document.contains("\"birthDate\": 100"));
    assert!(document.contains("\"status\": \"active\""));
    assert!(document.contains("\"updatedAt\": null"));
}

#[tokio::test]
async fn test_oversized_record_is_rejected_and_not_persisted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("patients.json");
    let storage = FileStorage::open(&path, CapacityLimits::new(44, 1024))
        .await
        .unwrap();
    let mut service = PatientService::new(Box::new(storage));

    let long_name = "A".repeat(2048);
    let err = service
        .add_patient(PatientPayload::new(long_name, "Lee", 0))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        PatientStoreError::Storage(StorageError::CapacityExceeded { .. })
    ));
    assert_eq!(service.count().await.unwrap(), 0);

    let reopened = FileStorage::open(&path, CapacityLimits::default())
        .await
        .unwrap();
    assert_eq!(reopened.len().await.unwrap(), 0);
}

#[tokio::test]
async fn test_corrupted_document_fails_to_open() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("patients.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = FileStorage::open(&path, CapacityLimits::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        PatientStoreError::Storage(StorageError::Corrupted(_))
    ));
    assert_eq!(err.exit_code(), 5);
}

#[tokio::test]
async fn test_memory_backend_from_config() {
    let config = StorageConfig {
        backend: StorageBackend::Memory,
        ..StorageConfig::default()
    };
    let storage = create_patient_storage(&config).await.unwrap();
    assert_eq!(storage.backend_name(), "memory");
}

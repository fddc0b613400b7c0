//! External system integrations.
//!
//! - [`storage`] - persistence backends behind the [`storage::PatientStorage`] trait
//!
//! Adapters isolate external dependencies so the service can be exercised
//! against the in-memory backend in tests:
//!
//! ```rust,no_run
//! use patient_store::adapters::storage::{create_patient_storage, PatientStorage};
//! use patient_store::config::StorageConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = create_patient_storage(&StorageConfig::default()).await?;
//! println!("{} records", storage.len().await?);
//! # Ok(())
//! # }
//! ```

pub mod storage;

//! Core business logic for the patient store.
//!
//! # Modules
//!
//! - [`service`] - the [`PatientService`] and its seven operations
//! - [`validation`] - name validation rules
//! - [`clock`] - time source for `createdAt` / `updatedAt`
//! - [`ids`] - record identifier generation
//!
//! # Example
//!
//! ```rust,no_run
//! use patient_store::adapters::storage::create_patient_storage;
//! use patient_store::config::load_config;
//! use patient_store::core::PatientService;
//! use patient_store::domain::PatientPayload;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("patient-store.toml")?;
//! let storage = create_patient_storage(&config.storage).await?;
//! let mut service = PatientService::new(storage);
//!
//! let patient = service.add_patient(PatientPayload::new("Ann", "Lee", 100)).await?;
//! println!("Created {}", patient.id);
//! # Ok(())
//! # }
//! ```

pub mod clock;
pub mod ids;
pub mod service;
pub mod validation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use ids::{IdGenerator, UuidGenerator};
pub use service::PatientService;

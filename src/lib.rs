// Patient Store - Durable Patient Record Store
// Copyright (c) 2025 Patient Store Contributors
// Licensed under the MIT License

//! # Patient Store
//!
//! A small, durable store of patient records keyed by generated identifiers.
//!
//! ## Overview
//!
//! This library provides:
//! - **Creating** patients with validated names and a generated id
//! - **Updating** names, birth date and active/inactive status
//! - **Deleting** and **querying** records, optionally filtered by status
//! - **Persisting** records in a JSON document that survives restarts
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (service, validation, clock, ids)
//! - [`adapters`] - Storage backends (memory, JSON file)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use patient_store::adapters::storage::create_patient_storage;
//! use patient_store::config::load_config;
//! use patient_store::core::PatientService;
//! use patient_store::domain::PatientPayload;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("patient-store.toml")?;
//!     let storage = create_patient_storage(&config.storage).await?;
//!     let mut service = PatientService::new(storage);
//!
//!     let patient = service
//!         .add_patient(PatientPayload::new("Ann", "Lee", 100))
//!         .await?;
//!     service.update_patient_status(patient.id.as_str(), "inactive").await?;
//!
//!     println!("{} patient(s) stored", service.count().await?);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every fallible operation returns [`domain::PatientStoreError`]. Its
//! `Display` text is the message reported to callers, e.g.
//! `Couldn't update Patient with id=abc. Patient not found`.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;

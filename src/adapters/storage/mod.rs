//! Storage abstraction layer
//!
//! A trait-based key-value interface ([`PatientStorage`]) with two backends:
//! an in-memory map and a JSON-file map that survives restarts.

pub mod factory;
pub mod file;
pub mod memory;
pub mod traits;

pub use factory::create_patient_storage;
pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use traits::{CapacityLimits, PatientStorage};

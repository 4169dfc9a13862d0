//! A Rust library for loading medical staff and patient records from
//! delimited text files, with per-field validation and text rendering.

pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod utils;
pub mod validation;

// Re-export the most common types for easier use
// Core types
pub use config::LoaderConfig;
pub use error::{RecordError, Result};
pub use loader::{LoadSummary, Loader};

// Domain model
pub use models::{
    AmbulatoryCare, DoctorDetails, EntityKind, Employment, HospitalStay, IdSequence,
    MedicalProfile, NurseDuties, Person, Record, RecordId, RenderLines, Role, Roster,
};

// Validation
pub use validation::{FieldRejection, RejectReason, Validated};

//! Domain models for medical staff and patient records
//!
//! A record is a [`Person`] (identity and demographics shared by everyone)
//! combined with a [`Role`] carrying the fields of one of the four entity
//! kinds. Every field is validated on construction and stored either as a
//! valid value or as absent.

pub mod collections;
pub mod employee;
pub mod identity;
pub mod patient;
pub mod person;
pub mod record;
pub mod render;
pub mod types;

// Re-export commonly used types
pub use collections::Roster;
pub use employee::{DoctorDetails, Employment, NurseDuties};
pub use identity::{IdSequence, RecordId};
pub use patient::{AmbulatoryCare, HospitalStay, MedicalProfile};
pub use person::Person;
pub use record::{EntityKind, Record, Role};
pub use render::RenderLines;
pub use types::{
    DoctorCategory, EducationLevel, Gender, HealthGroup, PatientStatus, Profession, Rhesus, Token,
};

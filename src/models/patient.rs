//! Patient entity models
//!
//! Medical data common to all patients, plus the admission-specific parts of
//! hospital (inpatient) and ambulatory (outpatient) patients.

use super::render::{RenderLines, push_value};
use super::types::{HealthGroup, PatientStatus, Rhesus};
use crate::validation::rules::{bounded_u8, enumerated, non_negative, text};
use crate::validation::{FieldRejection, FieldReport, assign};

/// Number of patient fields following the person fields
pub const MEDICAL_FIELD_COUNT: usize = 6;
/// Number of hospital fields following the patient fields
pub const HOSPITAL_FIELD_COUNT: usize = 3;
/// Number of ambulatory fields following the patient fields
pub const AMBULATORY_FIELD_COUNT: usize = 4;

/// Clinical diagnosis value meaning nothing was found; not rendered
pub const NO_CLINICAL_FINDING: &str = "Диагноз не выявлен";
/// Chronic diagnosis value meaning nothing was found; not rendered
pub const NO_CHRONIC_FINDING: &str = "Не выявлено";

/// Highest territorial (district) number
pub const MAX_TERRITORIAL_NUMBER: u8 = 20;
/// Highest disability group; 0 means no disability
pub const MAX_DISABILITY_GROUP: u8 = 3;

/// Medical data shared by all patients
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MedicalProfile {
    medical_policy: Option<String>,
    status: Option<PatientStatus>,
    workplace: Option<String>,
    blood_type: Option<u8>,
    rhesus: Option<Rhesus>,
    allergies: Option<String>,
}

impl MedicalProfile {
    /// Build from raw fields, in file order
    pub fn from_fields(fields: &[&str; MEDICAL_FIELD_COUNT], report: &mut FieldReport) -> Self {
        let [medical_policy, status, workplace, blood_type, rhesus, allergies] = *fields;

        Self {
            medical_policy: report.keep("medical_policy", medical_policy, text(medical_policy)),
            status: report.keep("status", status, enumerated(status)),
            workplace: report.keep("workplace", workplace, text(workplace)),
            blood_type: report.keep("blood_type", blood_type, bounded_u8(blood_type, 1..=4)),
            rhesus: report.keep("rhesus", rhesus, enumerated(rhesus)),
            allergies: report.keep("allergies", allergies, text(allergies)),
        }
    }

    /// Medical insurance policy number
    #[must_use]
    pub fn medical_policy(&self) -> Option<&str> {
        self.medical_policy.as_deref()
    }

    /// Social status
    #[must_use]
    pub fn status(&self) -> Option<PatientStatus> {
        self.status
    }

    /// Place of work or study
    #[must_use]
    pub fn workplace(&self) -> Option<&str> {
        self.workplace.as_deref()
    }

    /// Blood group, 1..=4
    #[must_use]
    pub fn blood_type(&self) -> Option<u8> {
        self.blood_type
    }

    /// Rhesus factor
    #[must_use]
    pub fn rhesus(&self) -> Option<Rhesus> {
        self.rhesus
    }

    /// Allergic reactions
    #[must_use]
    pub fn allergies(&self) -> Option<&str> {
        self.allergies.as_deref()
    }

    /// Replace the social status
    pub fn set_status(&mut self, raw: &str) -> Result<(), FieldRejection> {
        assign(&mut self.status, "status", raw, enumerated(raw))
    }

    /// Replace the blood group
    pub fn set_blood_type(&mut self, raw: &str) -> Result<(), FieldRejection> {
        assign(&mut self.blood_type, "blood_type", raw, bounded_u8(raw, 1..=4))
    }

    /// Replace the rhesus factor
    pub fn set_rhesus(&mut self, raw: &str) -> Result<(), FieldRejection> {
        assign(&mut self.rhesus, "rhesus", raw, enumerated(raw))
    }
}

impl RenderLines for MedicalProfile {
    fn render_lines(&self, lines: &mut Vec<String>) {
        push_value(lines, "Медицинский полис", self.medical_policy.as_deref());
        push_value(lines, "Статус", self.status);
        push_value(lines, "Место работы (учёбы)", self.workplace.as_deref());
        // rhesus is only shown next to a blood group
        if let Some(blood_type) = self.blood_type {
            match self.rhesus {
                Some(rhesus) => lines.push(format!("Группа крови: {blood_type}({rhesus})")),
                None => lines.push(format!("Группа крови: {blood_type}")),
            }
        }
        push_value(lines, "Аллергические реакции", self.allergies.as_deref());
    }
}

/// Inpatient admission data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HospitalStay {
    department: Option<String>,
    /// Any non-negative integer; negative numbers are rejected as out of range
    room_number: Option<u32>,
    clinical_diagnosis: Option<String>,
}

impl HospitalStay {
    /// Build from raw fields, in file order
    pub fn from_fields(fields: &[&str; HOSPITAL_FIELD_COUNT], report: &mut FieldReport) -> Self {
        let [department, room_number, clinical_diagnosis] = *fields;

        Self {
            department: report.keep("department", department, text(department)),
            room_number: report.keep("room_number", room_number, non_negative(room_number)),
            clinical_diagnosis: report.keep(
                "clinical_diagnosis",
                clinical_diagnosis,
                text(clinical_diagnosis),
            ),
        }
    }

    /// Hospital department
    #[must_use]
    pub fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }

    /// Ward room number, `0..=u32::MAX`
    #[must_use]
    pub fn room_number(&self) -> Option<u32> {
        self.room_number
    }

    /// Clinical diagnosis
    #[must_use]
    pub fn clinical_diagnosis(&self) -> Option<&str> {
        self.clinical_diagnosis.as_deref()
    }

    /// Replace the room number; a negative number is rejected with the
    /// accepted range in the reason
    pub fn set_room_number(&mut self, raw: &str) -> Result<(), FieldRejection> {
        assign(&mut self.room_number, "room_number", raw, non_negative(raw))
    }
}

impl RenderLines for HospitalStay {
    fn render_lines(&self, lines: &mut Vec<String>) {
        push_value(lines, "Отделение", self.department.as_deref());
        push_value(lines, "Палата", self.room_number);
        push_value(
            lines,
            "Клинический диагноз",
            self.clinical_diagnosis
                .as_deref()
                .filter(|diagnosis| *diagnosis != NO_CLINICAL_FINDING),
        );
    }
}

/// Outpatient registration data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmbulatoryCare {
    territorial_number: Option<u8>,
    disability: Option<u8>,
    health_group: Option<HealthGroup>,
    chronic_diagnosis: Option<String>,
}

impl AmbulatoryCare {
    /// Build from raw fields, in file order
    pub fn from_fields(fields: &[&str; AMBULATORY_FIELD_COUNT], report: &mut FieldReport) -> Self {
        let [territorial_number, disability, health_group, chronic_diagnosis] = *fields;

        Self {
            territorial_number: report.keep(
                "territorial_number",
                territorial_number,
                bounded_u8(territorial_number, 1..=MAX_TERRITORIAL_NUMBER),
            ),
            disability: report.keep(
                "disability",
                disability,
                bounded_u8(disability, 0..=MAX_DISABILITY_GROUP),
            ),
            health_group: report.keep("health_group", health_group, enumerated(health_group)),
            chronic_diagnosis: report.keep(
                "chronic_diagnosis",
                chronic_diagnosis,
                text(chronic_diagnosis),
            ),
        }
    }

    /// Territorial (district) number, 1..=20
    #[must_use]
    pub fn territorial_number(&self) -> Option<u8> {
        self.territorial_number
    }

    /// Disability group, 0..=3
    #[must_use]
    pub fn disability(&self) -> Option<u8> {
        self.disability
    }

    /// Health group
    #[must_use]
    pub fn health_group(&self) -> Option<HealthGroup> {
        self.health_group
    }

    /// Chronic diagnosis
    #[must_use]
    pub fn chronic_diagnosis(&self) -> Option<&str> {
        self.chronic_diagnosis.as_deref()
    }

    /// Replace the territorial number
    pub fn set_territorial_number(&mut self, raw: &str) -> Result<(), FieldRejection> {
        assign(
            &mut self.territorial_number,
            "territorial_number",
            raw,
            bounded_u8(raw, 1..=MAX_TERRITORIAL_NUMBER),
        )
    }

    /// Replace the disability group
    pub fn set_disability(&mut self, raw: &str) -> Result<(), FieldRejection> {
        assign(
            &mut self.disability,
            "disability",
            raw,
            bounded_u8(raw, 0..=MAX_DISABILITY_GROUP),
        )
    }

    /// Replace the health group
    pub fn set_health_group(&mut self, raw: &str) -> Result<(), FieldRejection> {
        assign(&mut self.health_group, "health_group", raw, enumerated(raw))
    }
}

impl RenderLines for AmbulatoryCare {
    fn render_lines(&self, lines: &mut Vec<String>) {
        push_value(lines, "Участок", self.territorial_number);
        if let Some(group) = self.disability.filter(|group| *group > 0) {
            lines.push(format!("Группа инвалидности: {group} группа"));
        }
        push_value(lines, "Группа здоровья", self.health_group);
        push_value(
            lines,
            "Хронический диагноз",
            self.chronic_diagnosis
                .as_deref()
                .filter(|diagnosis| *diagnosis != NO_CHRONIC_FINDING),
        );
    }
}

//! Record entity model
//!
//! A [`Record`] is a [`Person`] plus a [`Role`]: the tagged set of fields that
//! make the person a doctor, a nurse, a hospital patient or an ambulatory
//! patient. Records are built from the `;`-separated fields of one file line,
//! laid out as person fields first, then the employee or patient fields, then
//! the role-specific fields.

use std::fmt;

use super::employee::{
    DOCTOR_FIELD_COUNT, DoctorDetails, EMPLOYMENT_FIELD_COUNT, Employment, NURSE_FIELD_COUNT,
    NurseDuties,
};
use super::identity::{IdSequence, RecordId};
use super::patient::{
    AMBULATORY_FIELD_COUNT, AmbulatoryCare, HOSPITAL_FIELD_COUNT, HospitalStay,
    MEDICAL_FIELD_COUNT, MedicalProfile,
};
use super::person::{PERSON_FIELD_COUNT, Person};
use super::render::{RenderLines, join_lines};
use crate::error::{RecordError, Result};
use crate::validation::{FieldRejection, FieldReport};

/// The four kinds of record a file can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    /// Doctor (employee)
    Doctor,
    /// Nurse (employee)
    Nurse,
    /// Inpatient
    HospitalPatient,
    /// Outpatient
    AmbulatoryPatient,
}

impl EntityKind {
    /// Every kind, in display order
    pub const ALL: [Self; 4] = [
        Self::Doctor,
        Self::Nurse,
        Self::HospitalPatient,
        Self::AmbulatoryPatient,
    ];

    /// Number of data fields on a line of this kind
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Doctor => PERSON_FIELD_COUNT + EMPLOYMENT_FIELD_COUNT + DOCTOR_FIELD_COUNT,
            Self::Nurse => PERSON_FIELD_COUNT + EMPLOYMENT_FIELD_COUNT + NURSE_FIELD_COUNT,
            Self::HospitalPatient => PERSON_FIELD_COUNT + MEDICAL_FIELD_COUNT + HOSPITAL_FIELD_COUNT,
            Self::AmbulatoryPatient => {
                PERSON_FIELD_COUNT + MEDICAL_FIELD_COUNT + AMBULATORY_FIELD_COUNT
            }
        }
    }

    /// Machine name of the kind
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Doctor => "doctor",
            Self::Nurse => "nurse",
            Self::HospitalPatient => "hospital_patient",
            Self::AmbulatoryPatient => "ambulatory_patient",
        }
    }

    /// Heading used when listing records of this kind
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Doctor => "Врачи",
            Self::Nurse => "Медицинские сёстры",
            Self::HospitalPatient => "Стационарные пациенты",
            Self::AmbulatoryPatient => "Амбулаторные пациенты",
        }
    }

    /// Whether records of this kind are staff rather than patients
    #[must_use]
    pub const fn is_employee(self) -> bool {
        matches!(self, Self::Doctor | Self::Nurse)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Role-specific part of a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    /// Doctor: employee data plus doctor details
    Doctor {
        /// Professional data
        employment: Employment,
        /// Doctor-specific data
        details: DoctorDetails,
    },
    /// Nurse: employee data plus nurse duties
    Nurse {
        /// Professional data
        employment: Employment,
        /// Nurse-specific duties
        duties: NurseDuties,
    },
    /// Inpatient: medical data plus hospital stay
    HospitalPatient {
        /// Medical data
        medical: MedicalProfile,
        /// Admission data
        stay: HospitalStay,
    },
    /// Outpatient: medical data plus ambulatory registration
    AmbulatoryPatient {
        /// Medical data
        medical: MedicalProfile,
        /// Registration data
        care: AmbulatoryCare,
    },
}

impl Role {
    /// Kind of record this role belongs to
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Doctor { .. } => EntityKind::Doctor,
            Self::Nurse { .. } => EntityKind::Nurse,
            Self::HospitalPatient { .. } => EntityKind::HospitalPatient,
            Self::AmbulatoryPatient { .. } => EntityKind::AmbulatoryPatient,
        }
    }

    /// A role of the given kind with every field absent
    #[must_use]
    pub fn empty(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Doctor => Self::Doctor {
                employment: Employment::default(),
                details: DoctorDetails::default(),
            },
            EntityKind::Nurse => Self::Nurse {
                employment: Employment::default(),
                duties: NurseDuties::default(),
            },
            EntityKind::HospitalPatient => Self::HospitalPatient {
                medical: MedicalProfile::default(),
                stay: HospitalStay::default(),
            },
            EntityKind::AmbulatoryPatient => Self::AmbulatoryPatient {
                medical: MedicalProfile::default(),
                care: AmbulatoryCare::default(),
            },
        }
    }

    /// Build the role from the fields that follow the person fields
    fn from_fields(kind: EntityKind, fields: &[&str], report: &mut FieldReport) -> Result<Self> {
        let role = match kind {
            EntityKind::Doctor => Self::Doctor {
                employment: Employment::from_fields(section(kind, fields, 0)?, report),
                details: DoctorDetails::from_fields(
                    section(kind, fields, EMPLOYMENT_FIELD_COUNT)?,
                    report,
                ),
            },
            EntityKind::Nurse => Self::Nurse {
                employment: Employment::from_fields(section(kind, fields, 0)?, report),
                duties: NurseDuties::from_fields(
                    section(kind, fields, EMPLOYMENT_FIELD_COUNT)?,
                    report,
                ),
            },
            EntityKind::HospitalPatient => Self::HospitalPatient {
                medical: MedicalProfile::from_fields(section(kind, fields, 0)?, report),
                stay: HospitalStay::from_fields(section(kind, fields, MEDICAL_FIELD_COUNT)?, report),
            },
            EntityKind::AmbulatoryPatient => Self::AmbulatoryPatient {
                medical: MedicalProfile::from_fields(section(kind, fields, 0)?, report),
                care: AmbulatoryCare::from_fields(
                    section(kind, fields, MEDICAL_FIELD_COUNT)?,
                    report,
                ),
            },
        };
        Ok(role)
    }
}

impl RenderLines for Role {
    fn render_lines(&self, lines: &mut Vec<String>) {
        match self {
            Self::Doctor { employment, details } => {
                employment.render_lines(lines);
                details.render_lines(lines);
            }
            Self::Nurse { employment, duties } => {
                employment.render_lines(lines);
                duties.render_lines(lines);
            }
            Self::HospitalPatient { medical, stay } => {
                medical.render_lines(lines);
                stay.render_lines(lines);
            }
            Self::AmbulatoryPatient { medical, care } => {
                medical.render_lines(lines);
                care.render_lines(lines);
            }
        }
    }
}

/// Fixed-size view of `N` fields starting at `offset`
fn section<'a, const N: usize>(
    kind: EntityKind,
    fields: &'a [&'a str],
    offset: usize,
) -> Result<&'a [&'a str; N]> {
    fields
        .get(offset..offset + N)
        .and_then(|slice| <&[&str; N]>::try_from(slice).ok())
        .ok_or(RecordError::Arity {
            kind,
            expected: kind.arity(),
            found: fields.len() + PERSON_FIELD_COUNT,
        })
}

/// A validated medical staff or patient record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    person: Person,
    role: Role,
    rejections: Vec<FieldRejection>,
}

impl Record {
    /// Build a record of `kind` from the data fields of one line.
    ///
    /// Fails only when the number of fields does not match the kind's arity;
    /// in that case no identifier is taken from `ids`. Field content never
    /// makes construction fail: unusable values become absent fields and are
    /// listed in [`Record::rejections`].
    pub fn from_fields(kind: EntityKind, ids: &mut IdSequence, fields: &[&str]) -> Result<Self> {
        if fields.len() != kind.arity() {
            return Err(RecordError::Arity {
                kind,
                expected: kind.arity(),
                found: fields.len(),
            });
        }
        let (person_fields, role_fields) = fields.split_at(PERSON_FIELD_COUNT);
        let person_fields: &[&str; PERSON_FIELD_COUNT] =
            person_fields.try_into().map_err(|_| RecordError::Arity {
                kind,
                expected: kind.arity(),
                found: fields.len(),
            })?;

        let mut report = FieldReport::new();
        let person = Person::from_fields(ids.peek(), person_fields, &mut report);
        let role = Role::from_fields(kind, role_fields, &mut report)?;
        let id = ids.next_id();
        debug_assert_eq!(id, person.id());

        Ok(Self {
            person,
            role,
            rejections: report.into_rejections(),
        })
    }

    /// A record of `kind` with every field absent
    #[must_use]
    pub fn empty(kind: EntityKind, id: RecordId) -> Self {
        Self {
            person: Person::empty(id),
            role: Role::empty(kind),
            rejections: Vec::new(),
        }
    }

    /// Record identifier
    #[must_use]
    pub fn id(&self) -> RecordId {
        self.person.id()
    }

    /// Kind of record
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        self.role.kind()
    }

    /// Identity and demographics
    #[must_use]
    pub fn person(&self) -> &Person {
        &self.person
    }

    /// Mutable identity and demographics
    pub fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }

    /// Role-specific data
    #[must_use]
    pub fn role(&self) -> &Role {
        &self.role
    }

    /// Mutable role-specific data
    pub fn role_mut(&mut self) -> &mut Role {
        &mut self.role
    }

    /// Professional data, for doctors and nurses
    #[must_use]
    pub fn employment(&self) -> Option<&Employment> {
        match &self.role {
            Role::Doctor { employment, .. } | Role::Nurse { employment, .. } => Some(employment),
            _ => None,
        }
    }

    /// Medical data, for patients
    #[must_use]
    pub fn medical(&self) -> Option<&MedicalProfile> {
        match &self.role {
            Role::HospitalPatient { medical, .. } | Role::AmbulatoryPatient { medical, .. } => {
                Some(medical)
            }
            _ => None,
        }
    }

    /// Doctor details, for doctors
    #[must_use]
    pub fn doctor_details(&self) -> Option<&DoctorDetails> {
        match &self.role {
            Role::Doctor { details, .. } => Some(details),
            _ => None,
        }
    }

    /// Nurse duties, for nurses
    #[must_use]
    pub fn nurse_duties(&self) -> Option<&NurseDuties> {
        match &self.role {
            Role::Nurse { duties, .. } => Some(duties),
            _ => None,
        }
    }

    /// Hospital stay, for inpatients
    #[must_use]
    pub fn hospital_stay(&self) -> Option<&HospitalStay> {
        match &self.role {
            Role::HospitalPatient { stay, .. } => Some(stay),
            _ => None,
        }
    }

    /// Ambulatory registration, for outpatients
    #[must_use]
    pub fn ambulatory_care(&self) -> Option<&AmbulatoryCare> {
        match &self.role {
            Role::AmbulatoryPatient { care, .. } => Some(care),
            _ => None,
        }
    }

    /// Field values rejected while the record was built
    #[must_use]
    pub fn rejections(&self) -> &[FieldRejection] {
        &self.rejections
    }

    /// Whether every supplied field value was accepted
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejections.is_empty()
    }

    /// Labeled lines, person fields first
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        self.render_lines(&mut lines);
        lines
    }

    /// Short form: `<id>. <full name>`
    #[must_use]
    pub fn summary(&self) -> String {
        match self.person.full_name() {
            Some(name) => format!("{}. {name}", self.id()),
            None => format!("{}.", self.id()),
        }
    }
}

impl RenderLines for Record {
    fn render_lines(&self, lines: &mut Vec<String>) {
        self.person.render_lines(lines);
        self.role.render_lines(lines);
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_lines(&self.lines()))
    }
}

//! Employee entity models
//!
//! Professional data of medical staff, and the role-specific parts of doctors
//! and nurses.

use super::render::{RenderLines, push_flag, push_value};
use super::types::{DoctorCategory, Profession};
use crate::validation::rules::{boolean, bounded_u8, bounded_u16, enumerated, text};
use crate::validation::{FieldRejection, FieldReport, assign};

/// Number of employee fields following the person fields
pub const EMPLOYMENT_FIELD_COUNT: usize = 7;
/// Number of doctor fields following the employee fields
pub const DOCTOR_FIELD_COUNT: usize = 8;
/// Number of nurse fields following the employee fields
pub const NURSE_FIELD_COUNT: usize = 3;

/// Earliest accepted graduation year
pub const MIN_GRADUATION_YEAR: u16 = 1950;
/// Latest accepted graduation year
pub const MAX_GRADUATION_YEAR: u16 = 2030;
/// Longest accepted work experience, in years
pub const MAX_WORK_EXPERIENCE: u8 = 60;

/// Professional data of a medical employee
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Employment {
    foreign_language: Option<bool>,
    education_document: Option<String>,
    graduation_year: Option<u16>,
    qualification: Option<String>,
    specialty: Option<String>,
    profession: Option<Profession>,
    work_experience: Option<u8>,
}

impl Employment {
    /// Build from raw fields, in file order
    pub fn from_fields(fields: &[&str; EMPLOYMENT_FIELD_COUNT], report: &mut FieldReport) -> Self {
        let [
            foreign_language,
            education_document,
            graduation_year,
            qualification,
            specialty,
            profession,
            work_experience,
        ] = *fields;

        Self {
            foreign_language: report.keep(
                "foreign_language",
                foreign_language,
                boolean(foreign_language),
            ),
            education_document: report.keep(
                "education_document",
                education_document,
                text(education_document),
            ),
            graduation_year: report.keep(
                "graduation_year",
                graduation_year,
                bounded_u16(graduation_year, MIN_GRADUATION_YEAR..=MAX_GRADUATION_YEAR),
            ),
            qualification: report.keep("qualification", qualification, text(qualification)),
            specialty: report.keep("specialty", specialty, text(specialty)),
            profession: report.keep("profession", profession, enumerated(profession)),
            work_experience: report.keep(
                "work_experience",
                work_experience,
                bounded_u8(work_experience, 0..=MAX_WORK_EXPERIENCE),
            ),
        }
    }

    /// Knows a foreign language
    #[must_use]
    pub fn foreign_language(&self) -> Option<bool> {
        self.foreign_language
    }

    /// Diploma or other education document
    #[must_use]
    pub fn education_document(&self) -> Option<&str> {
        self.education_document.as_deref()
    }

    /// Year of graduation, 1950..=2030
    #[must_use]
    pub fn graduation_year(&self) -> Option<u16> {
        self.graduation_year
    }

    /// Qualification
    #[must_use]
    pub fn qualification(&self) -> Option<&str> {
        self.qualification.as_deref()
    }

    /// Specialty
    #[must_use]
    pub fn specialty(&self) -> Option<&str> {
        self.specialty.as_deref()
    }

    /// Profession
    #[must_use]
    pub fn profession(&self) -> Option<Profession> {
        self.profession
    }

    /// Work experience in years, 0..=60
    #[must_use]
    pub fn work_experience(&self) -> Option<u8> {
        self.work_experience
    }

    /// Replace the graduation year
    pub fn set_graduation_year(&mut self, raw: &str) -> Result<(), FieldRejection> {
        assign(
            &mut self.graduation_year,
            "graduation_year",
            raw,
            bounded_u16(raw, MIN_GRADUATION_YEAR..=MAX_GRADUATION_YEAR),
        )
    }

    /// Replace the profession
    pub fn set_profession(&mut self, raw: &str) -> Result<(), FieldRejection> {
        assign(&mut self.profession, "profession", raw, enumerated(raw))
    }

    /// Replace the work experience
    pub fn set_work_experience(&mut self, raw: &str) -> Result<(), FieldRejection> {
        assign(
            &mut self.work_experience,
            "work_experience",
            raw,
            bounded_u8(raw, 0..=MAX_WORK_EXPERIENCE),
        )
    }
}

impl RenderLines for Employment {
    fn render_lines(&self, lines: &mut Vec<String>) {
        push_flag(lines, "Знает иностранный язык", self.foreign_language);
        push_value(lines, "Документ об образовании", self.education_document.as_deref());
        push_value(lines, "Год окончания", self.graduation_year);
        push_value(lines, "Квалификация", self.qualification.as_deref());
        push_value(lines, "Специализация", self.specialty.as_deref());
        push_value(lines, "Профессия", self.profession);
        // zero years is a real value and is shown
        push_value(lines, "Стаж", self.work_experience);
    }
}

/// Doctor-specific data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctorDetails {
    academic_degree: Option<bool>,
    academic_rank: Option<bool>,
    category: Option<DoctorCategory>,
    trainings: Option<bool>,
    medical_errors: Option<String>,
    diagnosis: Option<bool>,
    treatment: Option<bool>,
    rehabilitation: Option<bool>,
}

impl DoctorDetails {
    /// Build from raw fields, in file order
    pub fn from_fields(fields: &[&str; DOCTOR_FIELD_COUNT], report: &mut FieldReport) -> Self {
        let [
            academic_degree,
            academic_rank,
            category,
            trainings,
            medical_errors,
            diagnosis,
            treatment,
            rehabilitation,
        ] = *fields;

        Self {
            academic_degree: report.keep("academic_degree", academic_degree, boolean(academic_degree)),
            academic_rank: report.keep("academic_rank", academic_rank, boolean(academic_rank)),
            category: report.keep("category", category, enumerated(category)),
            trainings: report.keep("trainings", trainings, boolean(trainings)),
            medical_errors: report.keep("medical_errors", medical_errors, text(medical_errors)),
            diagnosis: report.keep("diagnosis", diagnosis, boolean(diagnosis)),
            treatment: report.keep("treatment", treatment, boolean(treatment)),
            rehabilitation: report.keep("rehabilitation", rehabilitation, boolean(rehabilitation)),
        }
    }

    /// Holds an academic degree
    #[must_use]
    pub fn academic_degree(&self) -> Option<bool> {
        self.academic_degree
    }

    /// Holds an academic rank
    #[must_use]
    pub fn academic_rank(&self) -> Option<bool> {
        self.academic_rank
    }

    /// Qualification category
    #[must_use]
    pub fn category(&self) -> Option<DoctorCategory> {
        self.category
    }

    /// Completed advanced training
    #[must_use]
    pub fn trainings(&self) -> Option<bool> {
        self.trainings
    }

    /// Recorded medical errors
    #[must_use]
    pub fn medical_errors(&self) -> Option<&str> {
        self.medical_errors.as_deref()
    }

    /// Performs diagnostics
    #[must_use]
    pub fn diagnosis(&self) -> Option<bool> {
        self.diagnosis
    }

    /// Performs treatment
    #[must_use]
    pub fn treatment(&self) -> Option<bool> {
        self.treatment
    }

    /// Performs rehabilitation
    #[must_use]
    pub fn rehabilitation(&self) -> Option<bool> {
        self.rehabilitation
    }

    /// Replace the qualification category
    pub fn set_category(&mut self, raw: &str) -> Result<(), FieldRejection> {
        assign(&mut self.category, "category", raw, enumerated(raw))
    }
}

impl RenderLines for DoctorDetails {
    fn render_lines(&self, lines: &mut Vec<String>) {
        push_flag(lines, "Ученая степень", self.academic_degree);
        push_flag(lines, "Ученое звание", self.academic_rank);
        push_value(lines, "Категория", self.category);
        push_flag(lines, "Повышение квалификации", self.trainings);
        push_value(lines, "Медицинские ошибки", self.medical_errors.as_deref());
        push_flag(lines, "Выполнение диагностики заболеваний", self.diagnosis);
        push_flag(lines, "Лечебная практика", self.treatment);
        push_flag(lines, "Реабилитация больных", self.rehabilitation);
    }
}

/// Nurse-specific duties
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NurseDuties {
    sanitary_service: Option<bool>,
    patient_care: Option<bool>,
    medical_procedures: Option<bool>,
}

impl NurseDuties {
    /// Build from raw fields, in file order
    pub fn from_fields(fields: &[&str; NURSE_FIELD_COUNT], report: &mut FieldReport) -> Self {
        let [sanitary_service, patient_care, medical_procedures] = *fields;

        Self {
            sanitary_service: report.keep(
                "sanitary_service",
                sanitary_service,
                boolean(sanitary_service),
            ),
            patient_care: report.keep("patient_care", patient_care, boolean(patient_care)),
            medical_procedures: report.keep(
                "medical_procedures",
                medical_procedures,
                boolean(medical_procedures),
            ),
        }
    }

    /// Sanitary treatment of rooms
    #[must_use]
    pub fn sanitary_service(&self) -> Option<bool> {
        self.sanitary_service
    }

    /// Patient care
    #[must_use]
    pub fn patient_care(&self) -> Option<bool> {
        self.patient_care
    }

    /// Performs medical procedures
    #[must_use]
    pub fn medical_procedures(&self) -> Option<bool> {
        self.medical_procedures
    }
}

impl RenderLines for NurseDuties {
    fn render_lines(&self, lines: &mut Vec<String>) {
        push_flag(lines, "Санитарная обработка помещений", self.sanitary_service);
        push_flag(lines, "Уход за больными", self.patient_care);
        push_flag(lines, "Выполнение медицинских процедур", self.medical_procedures);
    }
}

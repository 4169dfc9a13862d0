use std::io::Write;

use med_records::EntityKind;
use tempfile::NamedTempFile;

/// Person fields shared by every sample row
pub const PERSON_FIELDS: [&str; 9] = [
    "Иванов",
    "муж.",
    "01.01.1980",
    "Москва",
    "True",
    "1234 567890 01.01.2020",
    "ул. Ленина",
    "высшее",
    "+7(900)123-45-67",
];

const EMPLOYMENT_FIELDS: [&str; 7] = [
    "True",
    "Диплом ВСГ 1234567",
    "2003",
    "Врач-терапевт",
    "Терапия",
    "врач",
    "20",
];

const DOCTOR_FIELDS: [&str; 8] = [
    "True", "False", "первая", "True", "Нет", "True", "True", "False",
];

const NURSE_FIELDS: [&str; 3] = ["True", "True", "False"];

const MEDICAL_FIELDS: [&str; 6] = ["1234567890123456", "рабочий", "Завод", "2", "+", "Пенициллин"];

const HOSPITAL_FIELDS: [&str; 3] = ["Кардиология", "12", "Стенокардия"];

const AMBULATORY_FIELDS: [&str; 4] = ["5", "0", "II", "Гастрит"];

/// Data fields of a fully valid row of the given kind
#[must_use]
pub fn sample_fields(kind: EntityKind) -> Vec<&'static str> {
    let mut fields = PERSON_FIELDS.to_vec();
    match kind {
        EntityKind::Doctor => {
            fields.extend_from_slice(&EMPLOYMENT_FIELDS);
            fields.extend_from_slice(&DOCTOR_FIELDS);
        }
        EntityKind::Nurse => {
            fields.extend_from_slice(&EMPLOYMENT_FIELDS);
            fields.extend_from_slice(&NURSE_FIELDS);
        }
        EntityKind::HospitalPatient => {
            fields.extend_from_slice(&MEDICAL_FIELDS);
            fields.extend_from_slice(&HOSPITAL_FIELDS);
        }
        EntityKind::AmbulatoryPatient => {
            fields.extend_from_slice(&MEDICAL_FIELDS);
            fields.extend_from_slice(&AMBULATORY_FIELDS);
        }
    }
    fields
}

/// A valid line of the given kind, written with a trailing separator
#[must_use]
pub fn sample_line(kind: EntityKind) -> String {
    format!("{};", sample_fields(kind).join(";"))
}

/// A line of the given kind with every field empty
#[must_use]
pub fn empty_line(kind: EntityKind) -> String {
    format!("{};", vec![""; kind.arity()].join(";"))
}

/// Write lines to a temporary file, one per line
pub fn write_temp_file(lines: &[String]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for line in lines {
        writeln!(file, "{line}").expect("Failed to write temp file");
    }
    file.flush().expect("Failed to flush temp file");
    file
}

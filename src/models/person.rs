//! Person entity model
//!
//! Identity and demographic data shared by every record kind. A `Person` is
//! never a record on its own; it is the common part of doctors, nurses and
//! patients.

use chrono::{Datelike, NaiveDate};

use super::identity::RecordId;
use super::render::{RenderLines, push_flag, push_value};
use super::types::{EducationLevel, Gender};
use crate::validation::rules::{boolean, enumerated, pattern, text, truncated_text};
use crate::validation::{FieldPattern, FieldRejection, FieldReport, assign};

/// Maximum number of characters kept from a full name
pub const FULL_NAME_MAX_CHARS: usize = 25;

/// Number of person fields at the start of every record line
pub const PERSON_FIELD_COUNT: usize = 9;

const DATE_FORMAT: &str = "%d.%m.%Y";

/// Identity and demographics of a person
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    id: RecordId,
    full_name: Option<String>,
    gender: Option<Gender>,
    birthday: Option<String>,
    place_of_birth: Option<String>,
    married: Option<bool>,
    passport: Option<String>,
    residence_address: Option<String>,
    education_level: Option<EducationLevel>,
    phone: Option<String>,
}

impl Person {
    /// Build a person from its raw fields, in file order
    pub fn from_fields(
        id: RecordId,
        fields: &[&str; PERSON_FIELD_COUNT],
        report: &mut FieldReport,
    ) -> Self {
        let [
            full_name,
            gender,
            birthday,
            place_of_birth,
            married,
            passport,
            residence_address,
            education_level,
            phone,
        ] = *fields;

        Self {
            id,
            full_name: report.keep(
                "full_name",
                full_name,
                truncated_text(full_name, FULL_NAME_MAX_CHARS),
            ),
            gender: report.keep("gender", gender, enumerated(gender)),
            birthday: report.keep("birthday", birthday, pattern(birthday, FieldPattern::Date)),
            place_of_birth: report.keep("place_of_birth", place_of_birth, text(place_of_birth)),
            married: report.keep("married", married, boolean(married)),
            passport: report.keep("passport", passport, pattern(passport, FieldPattern::Passport)),
            residence_address: report.keep(
                "residence_address",
                residence_address,
                text(residence_address),
            ),
            education_level: report.keep(
                "education_level",
                education_level,
                enumerated(education_level),
            ),
            phone: report.keep("phone", phone, pattern(phone, FieldPattern::Phone)),
        }
    }

    /// A person with every field absent
    #[must_use]
    pub fn empty(id: RecordId) -> Self {
        Self {
            id,
            full_name: None,
            gender: None,
            birthday: None,
            place_of_birth: None,
            married: None,
            passport: None,
            residence_address: None,
            education_level: None,
            phone: None,
        }
    }

    /// Record identifier
    #[must_use]
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Full name, at most 25 characters
    #[must_use]
    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    /// Gender
    #[must_use]
    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    /// Birthday as written, `DD.MM.YYYY`
    #[must_use]
    pub fn birthday(&self) -> Option<&str> {
        self.birthday.as_deref()
    }

    /// Place of birth
    #[must_use]
    pub fn place_of_birth(&self) -> Option<&str> {
        self.place_of_birth.as_deref()
    }

    /// Marital status
    #[must_use]
    pub fn married(&self) -> Option<bool> {
        self.married
    }

    /// Passport series, number and issue date
    #[must_use]
    pub fn passport(&self) -> Option<&str> {
        self.passport.as_deref()
    }

    /// Registered residence address
    #[must_use]
    pub fn residence_address(&self) -> Option<&str> {
        self.residence_address.as_deref()
    }

    /// Education level
    #[must_use]
    pub fn education_level(&self) -> Option<EducationLevel> {
        self.education_level
    }

    /// Phone number, `+7(NNN)NNN-NN-NN`
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Birthday as a calendar date.
    ///
    /// `None` when the birthday is absent or has the right shape but names a
    /// day that does not exist (e.g. `31.02.1990`).
    #[must_use]
    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birthday
            .as_deref()
            .and_then(|value| NaiveDate::parse_from_str(value, DATE_FORMAT).ok())
    }

    /// Issue date of the passport
    #[must_use]
    pub fn passport_issue_date(&self) -> Option<NaiveDate> {
        self.passport
            .as_deref()
            .and_then(|value| value.rsplit(' ').next())
            .and_then(|date| NaiveDate::parse_from_str(date, DATE_FORMAT).ok())
    }

    /// Age in full years at a reference date
    #[must_use]
    pub fn age_at(&self, reference_date: &NaiveDate) -> Option<i32> {
        let birth = self.birth_date()?;
        if *reference_date < birth {
            return None;
        }
        let mut age = reference_date.year() - birth.year();
        if (reference_date.month(), reference_date.day()) < (birth.month(), birth.day()) {
            age -= 1;
        }
        Some(age)
    }

    /// Replace the full name, truncating it to 25 characters
    pub fn set_full_name(&mut self, raw: &str) -> Result<(), FieldRejection> {
        assign(
            &mut self.full_name,
            "full_name",
            raw,
            truncated_text(raw, FULL_NAME_MAX_CHARS),
        )
    }

    /// Replace the gender
    pub fn set_gender(&mut self, raw: &str) -> Result<(), FieldRejection> {
        assign(&mut self.gender, "gender", raw, enumerated(raw))
    }

    /// Replace the birthday
    pub fn set_birthday(&mut self, raw: &str) -> Result<(), FieldRejection> {
        assign(&mut self.birthday, "birthday", raw, pattern(raw, FieldPattern::Date))
    }

    /// Replace the passport details
    pub fn set_passport(&mut self, raw: &str) -> Result<(), FieldRejection> {
        assign(&mut self.passport, "passport", raw, pattern(raw, FieldPattern::Passport))
    }

    /// Replace the education level
    pub fn set_education_level(&mut self, raw: &str) -> Result<(), FieldRejection> {
        assign(&mut self.education_level, "education_level", raw, enumerated(raw))
    }

    /// Replace the phone number
    pub fn set_phone(&mut self, raw: &str) -> Result<(), FieldRejection> {
        assign(&mut self.phone, "phone", raw, pattern(raw, FieldPattern::Phone))
    }
}

impl RenderLines for Person {
    fn render_lines(&self, lines: &mut Vec<String>) {
        lines.push(format!("Номер: {}", self.id));
        push_value(lines, "ФИО", self.full_name.as_deref());
        push_value(lines, "Пол", self.gender);
        push_value(lines, "Дата рождения", self.birthday.as_deref());
        push_value(lines, "Место рождения", self.place_of_birth.as_deref());
        push_flag(lines, "В браке", self.married);
        push_value(lines, "Паспорт", self.passport.as_deref());
        push_value(lines, "Адрес регистрации", self.residence_address.as_deref());
        push_value(lines, "Уровень образования", self.education_level);
        push_value(lines, "Телефон", self.phone.as_deref());
    }
}

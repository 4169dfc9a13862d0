//! Fixed text formats for pattern-constrained fields

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // ASCII digits only; `\d` would also admit other Unicode digits.
    static ref DATE_PATTERN: Regex = Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").unwrap();
    static ref PASSPORT_PATTERN: Regex =
        Regex::new(r"^[0-9]{4} [0-9]{6} [0-9]{2}\.[0-9]{2}\.[0-9]{4}$").unwrap();
    static ref PHONE_PATTERN: Regex =
        Regex::new(r"^\+7\([0-9]{3}\)[0-9]{3}-[0-9]{2}-[0-9]{2}$").unwrap();
}

/// A field whose value must match a fixed format exactly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPattern {
    /// `DD.MM.YYYY`
    Date,
    /// Series, number and issue date: `NNNN NNNNNN DD.MM.YYYY`
    Passport,
    /// Russian mobile number: `+7(NNN)NNN-NN-NN`
    Phone,
}

impl FieldPattern {
    /// Human readable description of the format
    #[must_use]
    pub fn format(self) -> &'static str {
        match self {
            Self::Date => "DD.MM.YYYY",
            Self::Passport => "NNNN NNNNNN DD.MM.YYYY",
            Self::Phone => "+7(NNN)NNN-NN-NN",
        }
    }

    /// Whether `value` matches the whole format
    #[must_use]
    pub fn matches(self, value: &str) -> bool {
        let regex: &Regex = match self {
            Self::Date => &DATE_PATTERN,
            Self::Passport => &PASSPORT_PATTERN,
            Self::Phone => &PHONE_PATTERN,
        };
        regex.is_match(value)
    }
}

//! Common domain type definitions
//!
//! Enumerated field values shared by the record models. Every type here is a
//! closed set of canonical tokens as they appear in the record files; matching
//! is case-insensitive and the canonical spelling is what gets stored and
//! rendered.

use std::fmt;

/// A closed set of textual tokens
pub trait Token: Sized + Copy + 'static {
    /// Every member of the set
    const ALL: &'static [Self];

    /// Canonical spellings, in the same order as [`Token::ALL`]
    const CHOICES: &'static [&'static str];

    /// Canonical spelling of this member
    fn as_str(self) -> &'static str;

    /// Additional accepted spellings
    fn aliases(self) -> &'static [&'static str] {
        &[]
    }

    /// Look up a member by canonical spelling or alias, ignoring case and
    /// surrounding whitespace
    fn from_token(raw: &str) -> Option<Self> {
        let wanted = raw.trim().to_lowercase();
        Self::ALL.iter().copied().find(|candidate| {
            candidate.as_str().to_lowercase() == wanted
                || candidate
                    .aliases()
                    .iter()
                    .any(|alias| alias.to_lowercase() == wanted)
        })
    }
}

/// Define a token enum with its `Token` and `Display` implementations
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $token:literal $([$($alias:literal),+])?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl Token for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];
            const CHOICES: &'static [&'static str] = &[$($token),+];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }

            fn aliases(self) -> &'static [&'static str] {
                match self {
                    $(Self::$variant => &[$($($alias),+)?],)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

token_enum! {
    /// Gender of a person
    pub enum Gender {
        /// Male
        Male => "муж.",
        /// Female
        Female => "жен.",
    }
}

token_enum! {
    /// Highest completed level of education
    pub enum EducationLevel {
        /// University degree
        Higher => "высшее",
        /// Specialized secondary (college) education
        SpecializedSecondary => "ср.спец",
        /// General secondary school
        Secondary => "среднее",
    }
}

token_enum! {
    /// Profession of a medical employee
    pub enum Profession {
        /// Physician
        Doctor => "врач",
        /// Nurse
        Nurse => "медицинская сестра" ["медсестра"],
    }
}

token_enum! {
    /// Qualification category of a doctor
    pub enum DoctorCategory {
        /// Highest category
        Highest => "высшая",
        /// First category
        First => "первая",
        /// Second category
        Second => "вторая",
    }
}

token_enum! {
    /// Social status of a patient
    pub enum PatientStatus {
        /// Blue-collar worker
        Worker => "рабочий",
        /// Office employee
        Employee => "служащий",
        /// Pupil or student
        Student => "обучающийся",
    }
}

token_enum! {
    /// Rhesus factor of a blood sample
    pub enum Rhesus {
        /// Rh+
        Positive => "+",
        /// Rh-
        Negative => "-",
    }
}

token_enum! {
    /// Dispensary health group of an outpatient
    pub enum HealthGroup {
        /// Healthy
        I => "I",
        /// At risk of chronic disease
        II => "II",
        /// Chronic disease under observation
        III => "III",
    }
}

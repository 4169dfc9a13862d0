//! Field validation
//!
//! Every raw field value read from a record file goes through one of the rules
//! in [`rules`] and comes out as a [`Validated`] outcome. Records keep only the
//! valid values; rejected values are reported through [`FieldReport`] so callers
//! and tests can see why a field ended up absent.

pub mod patterns;
pub mod rules;

use std::fmt;

pub use patterns::FieldPattern;

/// Outcome of validating one raw field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validated<T> {
    /// The value satisfies the field's constraint
    Valid(T),
    /// No value was supplied
    Absent,
    /// A value was supplied but violates the constraint
    Rejected(RejectReason),
}

impl<T> Validated<T> {
    /// Convert to an optional value, dropping the rejection reason
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Absent | Self::Rejected(_) => None,
        }
    }

    /// Borrow the valid value, if any
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Absent | Self::Rejected(_) => None,
        }
    }

    /// Whether the outcome holds a value
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Whether no value was supplied
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// The rejection reason, if the value was rejected
    pub fn rejection(&self) -> Option<&RejectReason> {
        match self {
            Self::Rejected(reason) => Some(reason),
            Self::Valid(_) | Self::Absent => None,
        }
    }

    /// Map the valid value
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Validated<U> {
        match self {
            Self::Valid(value) => Validated::Valid(f(value)),
            Self::Absent => Validated::Absent,
            Self::Rejected(reason) => Validated::Rejected(reason),
        }
    }

    /// Chain another check onto a valid value
    pub fn and_then<U, F: FnOnce(T) -> Validated<U>>(self, f: F) -> Validated<U> {
        match self {
            Self::Valid(value) => f(value),
            Self::Absent => Validated::Absent,
            Self::Rejected(reason) => Validated::Rejected(reason),
        }
    }
}

/// Why a supplied value was not accepted
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    /// Not one of the accepted boolean tokens
    #[error("not a boolean token (expected True/False/Да/Нет)")]
    NotBoolean,

    /// Not a base-10 integer
    #[error("not an integer")]
    NotInteger,

    /// Integer outside the closed range
    #[error("{value} is outside {min}..={max}")]
    OutOfRange {
        /// Parsed value
        value: i64,
        /// Smallest accepted value
        min: i64,
        /// Largest accepted value
        max: i64,
    },

    /// Not a member of the field's candidate set
    #[error("not one of: {}", choices.join(", "))]
    NotInSet {
        /// Canonical accepted values
        choices: &'static [&'static str],
    },

    /// Does not match the field's fixed format
    #[error("does not match format {format}")]
    PatternMismatch {
        /// Human readable format description
        format: &'static str,
    },
}

/// A rejected value together with the field it was supplied for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRejection {
    /// Field identifier, e.g. `phone`
    pub field: &'static str,
    /// Raw value as supplied
    pub value: String,
    /// Why it was rejected
    pub reason: RejectReason,
}

impl fmt::Display for FieldRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {:?}: {}", self.field, self.value, self.reason)
    }
}

/// Collects rejections while a record is being built
#[derive(Debug, Default)]
pub struct FieldReport {
    rejections: Vec<FieldRejection>,
}

impl FieldReport {
    /// Create an empty report
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the value of a validation outcome, noting a rejection if there was one
    pub fn keep<T>(&mut self, field: &'static str, raw: &str, outcome: Validated<T>) -> Option<T> {
        match outcome {
            Validated::Valid(value) => Some(value),
            Validated::Absent => None,
            Validated::Rejected(reason) => {
                self.rejections.push(FieldRejection {
                    field,
                    value: raw.to_string(),
                    reason,
                });
                None
            }
        }
    }

    /// Rejections noted so far
    pub fn rejections(&self) -> &[FieldRejection] {
        &self.rejections
    }

    /// Whether any value was rejected
    pub fn is_clean(&self) -> bool {
        self.rejections.is_empty()
    }

    /// Take the collected rejections
    pub fn into_rejections(self) -> Vec<FieldRejection> {
        self.rejections
    }
}

/// Apply a validated outcome to a stored field.
///
/// Used by setters: the field is overwritten with the valid value or cleared,
/// and a rejection is handed back to the caller.
pub(crate) fn assign<T>(
    slot: &mut Option<T>,
    field: &'static str,
    raw: &str,
    outcome: Validated<T>,
) -> std::result::Result<(), FieldRejection> {
    let mut report = FieldReport::new();
    *slot = report.keep(field, raw, outcome);
    match report.into_rejections().pop() {
        Some(rejection) => Err(rejection),
        None => Ok(()),
    }
}

//! Validation rules, one per field kind.
//!
//! Rules never panic and never return errors: anything that is not a valid
//! value is either [`Validated::Absent`] (nothing supplied) or
//! [`Validated::Rejected`] (something unusable supplied).
//!
//! Free-text values are taken verbatim. Token values (booleans, integers,
//! enumerations) are trimmed of surrounding whitespace before they are checked.

use std::ops::RangeInclusive;

use super::{FieldPattern, RejectReason, Validated};
use crate::models::types::Token;

/// Free text: any non-empty string
pub fn text(raw: &str) -> Validated<String> {
    if raw.is_empty() {
        Validated::Absent
    } else {
        Validated::Valid(raw.to_string())
    }
}

/// Free text cut to at most `max_chars` characters
pub fn truncated_text(raw: &str, max_chars: usize) -> Validated<String> {
    text(raw).map(|value| match value.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => value[..byte_idx].to_string(),
        None => value,
    })
}

/// Boolean token: `True`/`Да` or `False`/`Нет`, any case
pub fn boolean(raw: &str) -> Validated<bool> {
    let token = raw.trim();
    if token.is_empty() {
        return Validated::Absent;
    }
    match token.to_lowercase().as_str() {
        "true" | "да" => Validated::Valid(true),
        "false" | "нет" => Validated::Valid(false),
        _ => Validated::Rejected(RejectReason::NotBoolean),
    }
}

/// Base-10 integer without a range check
pub fn integer(raw: &str) -> Validated<i64> {
    let token = raw.trim();
    if token.is_empty() {
        return Validated::Absent;
    }
    match token.parse::<i64>() {
        Ok(value) => Validated::Valid(value),
        Err(_) => Validated::Rejected(RejectReason::NotInteger),
    }
}

/// Integer within a closed range
pub fn bounded_int(raw: &str, range: RangeInclusive<i64>) -> Validated<i64> {
    integer(raw).and_then(|value| {
        if range.contains(&value) {
            Validated::Valid(value)
        } else {
            Validated::Rejected(RejectReason::OutOfRange {
                value,
                min: *range.start(),
                max: *range.end(),
            })
        }
    })
}

/// [`bounded_int`] narrowed to `u8`, for small counters and codes
pub fn bounded_u8(raw: &str, range: RangeInclusive<u8>) -> Validated<u8> {
    let wide = i64::from(*range.start())..=i64::from(*range.end());
    bounded_int(raw, wide).and_then(|value| match u8::try_from(value) {
        Ok(narrow) => Validated::Valid(narrow),
        Err(_) => Validated::Rejected(RejectReason::NotInteger),
    })
}

/// [`bounded_int`] narrowed to `u16`, for calendar years
pub fn bounded_u16(raw: &str, range: RangeInclusive<u16>) -> Validated<u16> {
    let wide = i64::from(*range.start())..=i64::from(*range.end());
    bounded_int(raw, wide).and_then(|value| match u16::try_from(value) {
        Ok(narrow) => Validated::Valid(narrow),
        Err(_) => Validated::Rejected(RejectReason::NotInteger),
    })
}

/// Any non-negative integer that fits in `u32`.
///
/// Values outside `0..=u32::MAX` are rejected as [`RejectReason::OutOfRange`].
pub fn non_negative(raw: &str) -> Validated<u32> {
    bounded_int(raw, 0..=i64::from(u32::MAX)).and_then(|value| match u32::try_from(value) {
        Ok(narrow) => Validated::Valid(narrow),
        Err(_) => Validated::Rejected(RejectReason::NotInteger),
    })
}

/// Member of a closed token set
pub fn enumerated<T: Token>(raw: &str) -> Validated<T> {
    if raw.trim().is_empty() {
        return Validated::Absent;
    }
    match T::from_token(raw) {
        Some(value) => Validated::Valid(value),
        None => Validated::Rejected(RejectReason::NotInSet {
            choices: T::CHOICES,
        }),
    }
}

/// Text matching a fixed format exactly
pub fn pattern(raw: &str, format: FieldPattern) -> Validated<String> {
    if raw.is_empty() {
        Validated::Absent
    } else if format.matches(raw) {
        Validated::Valid(raw.to_string())
    } else {
        Validated::Rejected(RejectReason::PatternMismatch {
            format: format.format(),
        })
    }
}

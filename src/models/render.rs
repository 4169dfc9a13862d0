//! Labeled-line rendering of records
//!
//! A record renders as one `<label>: <value>` line per field holding a value.
//! Absent fields produce no line at all.

use std::fmt::Display;

use itertools::Itertools;

/// Components that contribute labeled lines to a record's rendering
pub trait RenderLines {
    /// Append this component's lines, in field order
    fn render_lines(&self, lines: &mut Vec<String>);
}

/// Text shown for a boolean field
#[must_use]
pub fn yes_no(value: bool) -> &'static str {
    if value { "да" } else { "нет" }
}

/// Append `label: value` when the value is present
pub fn push_value<V: Display>(lines: &mut Vec<String>, label: &str, value: Option<V>) {
    if let Some(value) = value {
        lines.push(format!("{label}: {value}"));
    }
}

/// Append `label: да|нет` when the flag is present
pub fn push_flag(lines: &mut Vec<String>, label: &str, value: Option<bool>) {
    push_value(lines, label, value.map(yes_no));
}

/// Join rendered lines into the multi-line text form
#[must_use]
pub fn join_lines(lines: &[String]) -> String {
    lines.iter().join("\n")
}

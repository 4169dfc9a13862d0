//! Console output utilities
//!
//! This module provides utilities for printing loaded records.

use std::io::{self, Write};

use crate::loader::LoadSummary;
use crate::models::{EntityKind, Record};

/// Write every record's rendering, separated by blank lines
///
/// # Arguments
/// * `out` - Destination, usually stdout
/// * `kind` - Kind of the records, used for the heading
/// * `records` - Records to print
pub fn write_records<W: Write>(out: &mut W, kind: EntityKind, records: &[Record]) -> io::Result<()> {
    writeln!(out, "== {} ({}) ==", kind.title(), records.len())?;
    for record in records {
        writeln!(out, "{record}")?;
        writeln!(out)?;
    }
    Ok(())
}

/// Print records to stdout
pub fn print_records(kind: EntityKind, records: &[Record]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_records(&mut out, kind, records)
}

/// Print summary information about one loaded file
pub fn print_load_summary(kind: EntityKind, summary: &LoadSummary) {
    println!(
        "{}: {} lines, {} loaded, {} skipped, {} blank, {} rejected field values",
        kind,
        summary.lines,
        summary.loaded,
        summary.skipped,
        summary.blank,
        summary.rejected_fields
    );
}

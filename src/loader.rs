//! Delimited record file loading
//!
//! Files hold one record per line, fields separated by `;` (configurable), no
//! header row and no escaping. A single empty field left by a trailing
//! separator is dropped before the field count is checked against the entity
//! kind's arity. Lines with the wrong field count are skipped with a warning;
//! a missing file yields an empty list. Loading never aborts.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use smallvec::SmallVec;

use crate::config::LoaderConfig;
use crate::error::{RecordError, Result};
use crate::models::{EntityKind, IdSequence, Record, Roster};
use crate::utils::logging::{
    finish_and_clear, log_operation_complete, log_operation_start, log_rejections, log_warning,
    spinner_if,
};

/// Fields of one line; inline capacity covers the widest record kind
pub type LineFields<'a> = SmallVec<[&'a str; 32]>;

/// Counters for one loaded file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Lines read, blank ones included
    pub lines: usize,
    /// Records constructed
    pub loaded: usize,
    /// Lines skipped because of a wrong field count or invalid UTF-8
    pub skipped: usize,
    /// Blank lines
    pub blank: usize,
    /// Field values rejected across all constructed records
    pub rejected_fields: usize,
}

impl LoadSummary {
    /// Add another file's counters to this one
    pub fn merge(&mut self, other: &Self) {
        self.lines += other.lines;
        self.loaded += other.loaded;
        self.skipped += other.skipped;
        self.blank += other.blank;
        self.rejected_fields += other.rejected_fields;
    }
}

/// Reads record files and builds validated records.
///
/// The loader owns the identifier sequence, so identifiers stay unique across
/// every file it reads.
#[derive(Debug, Clone, Default)]
pub struct Loader {
    config: LoaderConfig,
    ids: IdSequence,
}

impl Loader {
    /// Create a loader with a fresh identifier sequence
    #[must_use]
    pub fn new(config: LoaderConfig) -> Self {
        Self::with_ids(config, IdSequence::new())
    }

    /// Create a loader continuing an existing identifier sequence
    #[must_use]
    pub fn with_ids(config: LoaderConfig, ids: IdSequence) -> Self {
        Self { config, ids }
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Identifier sequence state
    #[must_use]
    pub fn ids(&self) -> &IdSequence {
        &self.ids
    }

    /// Split a line into its data fields
    #[must_use]
    pub fn split_line<'a>(&self, line: &'a str) -> LineFields<'a> {
        let mut fields: LineFields<'a> = line.trim().split(self.config.delimiter).collect();
        if self.config.trim_trailing_separator && fields.len() > 1 && fields.last() == Some(&"") {
            fields.pop();
        }
        fields
    }

    /// Build one record from one line
    pub fn parse_line(&mut self, kind: EntityKind, line: &str) -> Result<Record> {
        let fields = self.split_line(line);
        Record::from_fields(kind, &mut self.ids, &fields)
    }

    /// Read records from any buffered source.
    ///
    /// `source` names the input in diagnostics. A line that is not valid
    /// UTF-8 is skipped like a line with the wrong field count. Any other read
    /// error ends the read; records built before it are kept.
    pub fn read_records<R: BufRead>(
        &mut self,
        kind: EntityKind,
        reader: R,
        source: &str,
    ) -> (Vec<Record>, LoadSummary) {
        let mut records = Vec::new();
        let mut summary = LoadSummary::default();
        let pb = spinner_if(self.config.show_progress, Some(kind.name()));

        for (idx, bytes) in reader.split(b'\n').enumerate() {
            let line_no = idx + 1;
            let bytes = match bytes {
                Ok(bytes) => bytes,
                Err(e) => {
                    log_warning(&format!("Stopped reading {source} at line {line_no}: {e}"), None);
                    break;
                }
            };
            summary.lines += 1;
            pb.inc(1);

            let line = match String::from_utf8(bytes) {
                Ok(line) => line,
                Err(e) => {
                    log_warning(&format!("{source}:{line_no}: skipping line, {e}"), None);
                    summary.skipped += 1;
                    continue;
                }
            };

            if line.trim().is_empty() {
                log::debug!("{source}:{line_no}: blank line");
                summary.blank += 1;
                continue;
            }

            match self.parse_line(kind, &line) {
                Ok(record) => {
                    log_rejections(&record, self.config.warn_on_rejections);
                    summary.rejected_fields += record.rejections().len();
                    summary.loaded += 1;
                    records.push(record);
                }
                Err(e) => {
                    log_warning(&format!("{source}:{line_no}: skipping line, {e}"), None);
                    summary.skipped += 1;
                }
            }
        }

        finish_and_clear(&pb);
        (records, summary)
    }

    /// Load a file, failing if it cannot be opened
    pub fn try_load_file(
        &mut self,
        kind: EntityKind,
        path: &Path,
    ) -> Result<(Vec<Record>, LoadSummary)> {
        let start = Instant::now();
        log_operation_start(&format!("Loading {kind} records from"), path);

        let file = File::open(path).map_err(|e| RecordError::io(path, e))?;
        let source = path.display().to_string();
        let (records, summary) = self.read_records(kind, BufReader::new(file), &source);

        log_operation_complete("loaded", path, records.len(), Some(start.elapsed()));
        if summary.skipped > 0 {
            log_warning(
                &format!("{} unusable lines were skipped", summary.skipped),
                Some(path),
            );
        }
        Ok((records, summary))
    }

    /// Load a file; an unreadable file gives an empty list
    pub fn load_file_with_summary(
        &mut self,
        kind: EntityKind,
        path: &Path,
    ) -> (Vec<Record>, LoadSummary) {
        match self.try_load_file(kind, path) {
            Ok(loaded) => loaded,
            Err(e) => {
                if e.is_not_found() {
                    log_warning("File not found", Some(path));
                } else {
                    log_warning(&e.to_string(), None);
                }
                (Vec::new(), LoadSummary::default())
            }
        }
    }

    /// Load a file; an unreadable file gives an empty list
    pub fn load_file(&mut self, kind: EntityKind, path: &Path) -> Vec<Record> {
        self.load_file_with_summary(kind, path).0
    }

    /// Load a doctors file
    pub fn load_doctors(&mut self, path: &Path) -> Vec<Record> {
        self.load_file(EntityKind::Doctor, path)
    }

    /// Load a nurses file
    pub fn load_nurses(&mut self, path: &Path) -> Vec<Record> {
        self.load_file(EntityKind::Nurse, path)
    }

    /// Load a hospital patients file
    pub fn load_hospital_patients(&mut self, path: &Path) -> Vec<Record> {
        self.load_file(EntityKind::HospitalPatient, path)
    }

    /// Load an ambulatory patients file
    pub fn load_ambulatory_patients(&mut self, path: &Path) -> Vec<Record> {
        self.load_file(EntityKind::AmbulatoryPatient, path)
    }

    /// Load a file into a roster, replacing that kind's list
    pub fn load_into(&mut self, roster: &mut Roster, kind: EntityKind, path: &Path) -> LoadSummary {
        let (records, summary) = self.load_file_with_summary(kind, path);
        roster.replace(kind, records);
        summary
    }
}

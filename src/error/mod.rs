//! Error handling for record loading.
//!
//! Field-level validation problems never surface here: they turn into absent
//! fields plus a [`crate::validation::FieldRejection`] on the record. This type
//! only covers failures that prevent a record (or a whole file) from being read.

use std::io;
use std::path::PathBuf;

use crate::models::record::EntityKind;

/// Specialized error type for record loading
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// Error opening or reading a file
    #[error("IO error for {}: {source}", path.display())]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// A delimited line carries the wrong number of fields for its kind
    #[error("incorrect field count for {kind}: expected {expected}, found {found}")]
    Arity {
        /// Entity kind the line was parsed as
        kind: EntityKind,
        /// Number of data fields required by the kind
        expected: usize,
        /// Number of data fields present on the line
        found: usize,
    },

    /// Error with loader configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed JSON configuration
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl RecordError {
    /// Wrap an IO error together with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error means the input file does not exist
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Result type for record operations
pub type Result<T> = std::result::Result<T, RecordError>;

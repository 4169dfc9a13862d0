//! Configuration for the record `Loader`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RecordError, Result};

/// Field separator used by the record files
pub const DEFAULT_DELIMITER: char = ';';

/// Configuration for the `Loader`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Character separating fields on a line
    pub delimiter: char,
    /// Drop one empty trailing field produced by a trailing delimiter
    pub trim_trailing_separator: bool,
    /// Show a spinner on stderr while reading files
    pub show_progress: bool,
    /// Log rejected field values at warn level instead of debug
    pub warn_on_rejections: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            trim_trailing_separator: true,
            show_progress: false,
            warn_on_rejections: false,
        }
    }
}

impl LoaderConfig {
    /// Read a configuration from a JSON file. Missing keys keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| RecordError::io(path, e))?;
        Self::from_json_str(&text)
    }

    /// Parse a configuration from a JSON string
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the line splitter cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.delimiter.is_whitespace() {
            return Err(RecordError::Config(format!(
                "delimiter {:?} is whitespace and would be stripped from lines",
                self.delimiter
            )));
        }
        Ok(())
    }

    /// Set whether a progress spinner is shown
    #[must_use]
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Set whether field rejections are logged at warn level
    #[must_use]
    pub fn with_rejection_warnings(mut self, warn: bool) -> Self {
        self.warn_on_rejections = warn;
        self
    }
}

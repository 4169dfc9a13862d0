//! Logging utilities
//!
//! This module provides standardized logging functions for load operations.

use std::path::Path;

use crate::models::Record;

/// Log an operation start with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `path` - Path of the file being operated on
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{} {}", operation, path.display());
}

/// Log an operation completion with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `path` - Path of the file that was operated on
/// * `items` - Number of records produced
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(
    operation: &str,
    path: &Path,
    items: usize,
    elapsed: Option<std::time::Duration>,
) {
    if let Some(duration) = elapsed {
        log::info!(
            "Successfully {} {} records from {} in {:?}",
            operation,
            items,
            path.display(),
            duration
        );
    } else {
        log::info!(
            "Successfully {} {} records from {}",
            operation,
            items,
            path.display()
        );
    }
}

/// Log an operation warning with consistent format
///
/// # Arguments
/// * `message` - Warning message
/// * `path` - Optional path related to the warning
pub fn log_warning(message: &str, path: Option<&Path>) {
    if let Some(path) = path {
        log::warn!("{}: {}", message, path.display());
    } else {
        log::warn!("{message}");
    }
}

/// Log every field value a record rejected
///
/// # Arguments
/// * `record` - The freshly built record
/// * `as_warning` - Log at warn level instead of debug
pub fn log_rejections(record: &Record, as_warning: bool) {
    let level = if as_warning {
        log::Level::Warn
    } else {
        log::Level::Debug
    };
    for rejection in record.rejections() {
        log::log!(
            level,
            "{} {}: rejected {}",
            record.kind(),
            record.id(),
            rejection
        );
    }
}

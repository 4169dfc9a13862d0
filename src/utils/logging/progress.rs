//! Progress reporting utilities for file loading
//!
//! This module provides standardized progress reporting for record loading,
//! using the indicatif crate. Bars draw to stderr so rendered records on
//! stdout stay clean.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Default template for the loading spinner
pub const DEFAULT_SPINNER_TEMPLATE: &str = "{spinner:.green} {elapsed_precise} {pos} lines {msg}";

/// Create a spinner progress bar for reading a file of unknown length
///
/// # Arguments
/// * `message` - Optional message to display with the spinner
///
/// # Returns
/// A configured spinner `ProgressBar`
#[must_use]
pub fn create_spinner(message: Option<&str>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template(DEFAULT_SPINNER_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);

    if let Some(msg) = message {
        pb.set_message(msg.to_string());
    }

    // Set reasonable tick rate
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// A spinner when progress display is enabled, otherwise a hidden bar
///
/// Callers can tick the returned bar unconditionally.
#[must_use]
pub fn spinner_if(enabled: bool, message: Option<&str>) -> ProgressBar {
    if enabled {
        create_spinner(message)
    } else {
        ProgressBar::hidden()
    }
}

/// Finish a progress bar and clear it from display
///
/// # Arguments
/// * `pb` - The `ProgressBar` to finish and clear
pub fn finish_and_clear(pb: &ProgressBar) {
    pb.finish_and_clear();
}

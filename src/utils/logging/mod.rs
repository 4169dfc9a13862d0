//! Logging, progress and console output for record loading

pub mod console;
pub mod log;
pub mod progress;

pub use self::log::{log_operation_complete, log_operation_start, log_rejections, log_warning};
pub use self::progress::{create_spinner, finish_and_clear, spinner_if};

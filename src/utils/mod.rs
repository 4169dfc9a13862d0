//! Utility functions for record loading

pub mod logging;

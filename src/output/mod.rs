//! Report rendering and file output.
//!
//! This module handles:
//! - Plain-text report lines for stdout
//! - JSON documents written to disk

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{timing_report_to_string, write_timing_report};
pub use text::{format_breakdown, format_critical_path, format_timing_report};

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

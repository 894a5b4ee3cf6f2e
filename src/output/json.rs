//! JSON output writer for timing reports.

use crate::aggregator::TimingStats;
use crate::utils::error::OutputError;
use super::validate_path;
use chrono::Utc;
use log::{debug, info};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Document written to disk: the stats plus a generation timestamp
#[derive(Debug, Serialize)]
struct TimingReportDocument<'a> {
    generated_at: String,

    #[serde(flatten)]
    stats: &'a TimingStats,
}

impl<'a> TimingReportDocument<'a> {
    fn new(stats: &'a TimingStats) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            stats,
        }
    }
}

/// Write timing stats to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_timing_report(
    stats: &TimingStats,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing timing report to: {}", output_path.display());

    validate_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, &TimingReportDocument::new(stats))?;

    Ok(())
}

/// Serialize timing stats to a pretty JSON string
pub fn timing_report_to_string(stats: &TimingStats) -> Result<String, OutputError> {
    Ok(serde_json::to_string_pretty(&TimingReportDocument::new(stats))?)
}

//! Critical path command implementation.

use super::models::CriticalPathArgs;
use crate::aggregator::{report_critical_path, LabelSource};
use crate::output::format_critical_path;
use crate::parser::{ensure_profile_exists, load_profile};
use anyhow::{Context, Result};
use log::info;

/// Validate critical path arguments
///
/// Fails with `FileNotFound` before anything is read.
pub fn validate_critical_path_args(args: &CriticalPathArgs) -> Result<()> {
    ensure_profile_exists(&args.profile)?;
    Ok(())
}

/// Build the critical path report lines
///
/// **Public** - used by `execute_critical_path` and tests
pub fn critical_path_lines(args: &CriticalPathArgs) -> Result<Vec<String>> {
    let profile = load_profile(&args.profile)
        .with_context(|| format!("Failed to load profile {}", args.profile.display()))?;

    let lines = report_critical_path(&profile);

    let unresolved = lines
        .iter()
        .filter(|line| line.source == LabelSource::Unresolved)
        .count();
    info!(
        "Critical path has {} components ({} without a mnemonic)",
        lines.len(),
        unresolved
    );

    Ok(format_critical_path(&lines))
}

/// Execute the critical path command, printing one line per component
pub fn execute_critical_path(args: CriticalPathArgs) -> Result<()> {
    validate_critical_path_args(&args)?;

    for line in critical_path_lines(&args)? {
        println!("{}", line);
    }

    Ok(())
}

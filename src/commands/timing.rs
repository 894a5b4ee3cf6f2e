//! Mnemonic timing command implementation.
//!
//! The timing command:
//! 1. Validates the profile path and mnemonic
//! 2. Loads the profile
//! 3. Computes timing statistics for the mnemonic
//! 4. Prints the report and optionally writes it as JSON

use super::models::TimingArgs;
use crate::aggregator::{compute_timing_stats, TimingStats};
use crate::output::{format_timing_report, write_timing_report};
use crate::parser::{ensure_profile_exists, load_profile};
use anyhow::{Context, Result};
use log::{info, warn};
use std::time::Instant;

/// Validate timing arguments
///
/// **Public** - can be called before execute_timing for early validation
pub fn validate_timing_args(args: &TimingArgs) -> Result<()> {
    if args.mnemonic.is_empty() {
        anyhow::bail!("Mnemonic cannot be empty");
    }

    ensure_profile_exists(&args.profile)?;

    Ok(())
}

/// Load the profile and compute stats without printing
pub fn compute_timing(args: &TimingArgs) -> Result<TimingStats> {
    let profile = load_profile(&args.profile)
        .with_context(|| format!("Failed to load profile {}", args.profile.display()))?;

    Ok(compute_timing_stats(&profile, &args.mnemonic))
}

/// Execute the timing command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Missing profile or empty mnemonic
/// * Profile decode errors
/// * JSON write errors when `output_json` is set
pub fn execute_timing(args: TimingArgs) -> Result<()> {
    let start_time = Instant::now();

    validate_timing_args(&args)?;

    info!("Computing timing for '{}' in {}", args.mnemonic, args.profile.display());
    let stats = compute_timing(&args)?;

    if !stats.has_matches() {
        warn!("No matching actions found for '{}'", args.mnemonic);
    }

    for line in format_timing_report(&stats) {
        println!("{}", line);
    }

    if let Some(path) = &args.output_json {
        write_timing_report(&stats, path).context("Failed to write timing report JSON")?;
        info!("✓ Timing report written to: {}", path.display());
    }

    info!("Timing report completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(())
}

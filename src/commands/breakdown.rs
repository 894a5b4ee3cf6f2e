//! Per-mnemonic breakdown command implementation.

use super::models::BreakdownArgs;
use crate::aggregator::summarize_mnemonics;
use crate::output::format_breakdown;
use crate::parser::{ensure_profile_exists, load_profile};
use crate::utils::config::MAX_TOP_MNEMONICS;
use anyhow::{Context, Result};

/// Validate breakdown arguments
pub fn validate_breakdown_args(args: &BreakdownArgs) -> Result<()> {
    if args.top == 0 {
        anyhow::bail!("top must be greater than 0");
    }

    if args.top > MAX_TOP_MNEMONICS {
        anyhow::bail!("top is too large (max {})", MAX_TOP_MNEMONICS);
    }

    ensure_profile_exists(&args.profile)?;

    Ok(())
}

/// Execute the breakdown command
pub fn execute_breakdown(args: BreakdownArgs) -> Result<()> {
    validate_breakdown_args(&args)?;

    let profile = load_profile(&args.profile)
        .with_context(|| format!("Failed to load profile {}", args.profile.display()))?;

    let summaries = summarize_mnemonics(&profile, args.top);
    if summaries.is_empty() {
        println!("No actions with a mnemonic found.");
        return Ok(());
    }

    for line in format_breakdown(&summaries) {
        println!("{}", line);
    }

    Ok(())
}

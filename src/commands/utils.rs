use crate::parser::{load_profile, EventCategory};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Validate a profile file and print a short summary
pub fn validate_profile_file(file_path: PathBuf) -> Result<()> {
    println!("Validating profile: {}", file_path.display());

    let profile = load_profile(&file_path)
        .with_context(|| format!("Failed to load profile {}", file_path.display()))?;

    let (mut critical, mut processing, mut other) = (0usize, 0usize, 0usize);
    for event in &profile.trace_events {
        match event.category() {
            EventCategory::CriticalPathComponent => critical += 1,
            EventCategory::ActionProcessing => processing += 1,
            EventCategory::Other => other += 1,
        }
    }

    println!("✓ Valid profile JSON");
    println!("  Trace Events: {}", profile.trace_events.len());
    println!("  Critical Path Components: {}", critical);
    println!("  Action Processing: {}", processing);
    println!("  Other: {}", other);

    if let Some(build_id) = profile.metadata("build_id") {
        println!("  Build ID: {}", build_id);
    }
    if let Some(output_base) = profile.metadata("output_base") {
        println!("  Output Base: {}", output_base);
    }

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Bazel Profile Tools v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Critical path and per-mnemonic timing reports for Bazel trace profiles.");
}

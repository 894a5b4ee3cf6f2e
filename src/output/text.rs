//! Plain-text report lines.

use crate::aggregator::{CriticalPathLine, MnemonicSummary, TimingStats};
use crate::utils::config::DURATION_UNIT;

/// One `<label>: <name>` line per critical path component
pub fn format_critical_path(lines: &[CriticalPathLine]) -> Vec<String> {
    lines.iter().map(CriticalPathLine::to_line).collect()
}

/// Sentences describing a timing query
///
/// Percentile lines are replaced by a single notice when nothing matched.
pub fn format_timing_report(stats: &TimingStats) -> Vec<String> {
    let m = &stats.mnemonic;
    let mut out = vec![
        format!("Total wall time was {} {}.", stats.total_wall_time, DURATION_UNIT),
        format!("Total number of actions was {}.", stats.total_events),
        format!("Total number of actions for {} was {}.", m, stats.num_actions),
        format!("Total time for {} was {} {}.", m, stats.total_cpu_time, DURATION_UNIT),
    ];

    match &stats.percentiles {
        Some(p) => {
            for (name, value) in [
                ("p25", p.p25),
                ("p50", p.p50),
                ("p90", p.p90),
                ("p95", p.p95),
                ("p99", p.p99),
            ] {
                out.push(format!("{} time for {} was {} {}.", name, m, value, DURATION_UNIT));
            }
        }
        None => out.push(format!(
            "No matching actions found for {}; percentiles are undefined.",
            m
        )),
    }

    out
}

/// Aligned table of per-mnemonic totals
pub fn format_breakdown(summaries: &[MnemonicSummary]) -> Vec<String> {
    let width = summaries
        .iter()
        .map(|s| s.mnemonic.len())
        .max()
        .unwrap_or(0)
        .max("Mnemonic".len());

    let mut out = Vec::with_capacity(summaries.len() + 1);
    out.push(format!("{:<width$}  {:>8}  {:>16}", "Mnemonic", "Actions", "Time (us)"));

    for s in summaries {
        out.push(format!(
            "{:<width$}  {:>8}  {:>16}",
            s.mnemonic, s.count, s.total_time
        ));
    }

    out
}

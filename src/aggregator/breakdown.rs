//! Per-mnemonic breakdown of executed actions.
//!
//! Groups `action processing` events by their mnemonic to show where build
//! time goes before drilling into one mnemonic with the timing report.

use crate::parser::schema::{EventCategory, Profile};
use log::debug;
use serde::Serialize;
use std::collections::HashMap;

/// Totals for one mnemonic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MnemonicSummary {
    pub mnemonic: String,
    pub count: u64,
    pub total_time: u64,
}

/// Aggregate action time per mnemonic
///
/// **Public** - main entry point for the breakdown
///
/// # Returns
/// Summaries sorted by total time (descending), ties broken by name,
/// truncated to `top_n`
pub fn summarize_mnemonics(profile: &Profile, top_n: usize) -> Vec<MnemonicSummary> {
    let mut by_mnemonic: HashMap<&str, (u64, u64)> = HashMap::new();

    for event in &profile.trace_events {
        if event.category() != EventCategory::ActionProcessing {
            continue;
        }
        let Some(mnemonic) = event.mnemonic() else {
            continue;
        };

        let entry = by_mnemonic.entry(mnemonic).or_insert((0, 0));
        entry.0 += 1;
        entry.1 = entry.1.saturating_add(event.duration());
    }

    debug!("Found {} distinct mnemonics", by_mnemonic.len());

    let mut summaries: Vec<MnemonicSummary> = by_mnemonic
        .into_iter()
        .map(|(mnemonic, (count, total_time))| MnemonicSummary {
            mnemonic: mnemonic.to_string(),
            count,
            total_time,
        })
        .collect();

    summaries.sort_by(|a, b| {
        b.total_time
            .cmp(&a.total_time)
            .then_with(|| a.mnemonic.cmp(&b.mnemonic))
    });
    summaries.truncate(top_n);

    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_profile;

    #[test]
    fn test_summarize_mnemonics() {
        let profile = parse_profile(
            r#"{"traceEvents": [
                {"name": "Compiling a.cc", "cat": "action processing", "dur": 100, "args": {"mnemonic": "CppCompile"}},
                {"name": "Compiling b.cc", "cat": "action processing", "dur": 50, "args": {"mnemonic": "CppCompile"}},
                {"name": "Linking app", "cat": "action processing", "dur": 400, "args": {"mnemonic": "CppLink"}},
                {"name": "Writing file", "cat": "action processing", "dur": 9},
                {"name": "action 'Linking app'", "cat": "critical path component", "dur": 400, "args": {"mnemonic": "CppLink"}}
            ]}"#,
        )
        .unwrap();

        let summaries = summarize_mnemonics(&profile, 10);

        assert_eq!(
            summaries,
            vec![
                MnemonicSummary { mnemonic: "CppLink".to_string(), count: 1, total_time: 400 },
                MnemonicSummary { mnemonic: "CppCompile".to_string(), count: 2, total_time: 150 },
            ]
        );
    }

    #[test]
    fn test_summarize_mnemonics_truncates_and_breaks_ties() {
        let profile = parse_profile(
            r#"{"traceEvents": [
                {"name": "b x", "cat": "action processing", "dur": 5, "args": {"mnemonic": "B"}},
                {"name": "a x", "cat": "action processing", "dur": 5, "args": {"mnemonic": "A"}},
                {"name": "c x", "cat": "action processing", "dur": 1, "args": {"mnemonic": "C"}}
            ]}"#,
        )
        .unwrap();

        let summaries = summarize_mnemonics(&profile, 2);

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].mnemonic, "A");
        assert_eq!(summaries[1].mnemonic, "B");
    }
}

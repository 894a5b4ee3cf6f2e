//! Per-mnemonic timing statistics.
//!
//! Matches events whose name or `args.mnemonic` contains a substring and
//! reports counts, CPU time, wall time and duration percentiles.

use crate::parser::schema::{Profile, TraceEvent};
use crate::utils::config::REPORTED_PERCENTILES;
use log::debug;
use serde::Serialize;

/// Duration percentiles of the matched actions, in microseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Percentiles {
    pub p25: u64,
    pub p50: u64,
    pub p90: u64,
    pub p95: u64,
    pub p99: u64,
}

/// Timing statistics for one mnemonic query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimingStats {
    /// Substring the events were matched against
    pub mnemonic: String,

    /// Number of events in the whole trace
    pub total_events: usize,

    /// Number of matching events
    pub num_actions: usize,

    /// Sum of matched durations
    pub total_cpu_time: u64,

    /// Sum of all durations, matched or not
    pub total_wall_time: u64,

    /// `None` when nothing matched
    pub percentiles: Option<Percentiles>,
}

impl TimingStats {
    pub fn has_matches(&self) -> bool {
        self.num_actions > 0
    }
}

/// Whether an event matches the mnemonic query
pub fn event_matches(event: &TraceEvent, mnemonic: &str) -> bool {
    event.name.contains(mnemonic) || event.mnemonic().unwrap_or("").contains(mnemonic)
}

/// Compute timing statistics for all events matching `mnemonic`
///
/// **Public** - main entry point for the timing report
///
/// # Arguments
/// * `profile` - Decoded profile
/// * `mnemonic` - Substring matched against event names and mnemonics
///
/// # Returns
/// Aggregated stats; `percentiles` is `None` if nothing matched
pub fn compute_timing_stats(profile: &Profile, mnemonic: &str) -> TimingStats {
    let mut num_actions = 0usize;
    let mut total_cpu_time = 0u64;
    let mut total_wall_time = 0u64;
    let mut durations: Vec<u64> = Vec::new();

    for event in &profile.trace_events {
        let dur = event.duration();

        if event_matches(event, mnemonic) {
            num_actions += 1;
            total_cpu_time = total_cpu_time.saturating_add(dur);
            durations.push(dur);
        }

        total_wall_time = total_wall_time.saturating_add(dur);
    }

    durations.sort();

    debug!(
        "Matched {} of {} events for '{}'",
        num_actions,
        profile.trace_events.len(),
        mnemonic
    );

    TimingStats {
        mnemonic: mnemonic.to_string(),
        total_events: profile.trace_events.len(),
        num_actions,
        total_cpu_time,
        total_wall_time,
        percentiles: compute_percentiles(&durations),
    }
}

/// Percentiles by index truncation over sorted durations
///
/// The value at percentile `p` is `sorted[floor(p / 100 * len)]`; no
/// interpolation. Returns `None` for an empty slice.
pub fn compute_percentiles(sorted: &[u64]) -> Option<Percentiles> {
    if sorted.is_empty() {
        return None;
    }

    let [p25, p50, p90, p95, p99] = REPORTED_PERCENTILES.map(|p| percentile_at(sorted, p));

    Some(Percentiles {
        p25,
        p50,
        p90,
        p95,
        p99,
    })
}

/// **Private** - caller guarantees `sorted` is non-empty and `percent < 100`
fn percentile_at(sorted: &[u64], percent: u64) -> u64 {
    let index = (sorted.len() as u64 * percent / 100) as usize;
    sorted[index]
}

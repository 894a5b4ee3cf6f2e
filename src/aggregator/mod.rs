//! Report computations over decoded profiles.
//!
//! This module turns trace events into:
//! - Message keys for correlating critical path entries with mnemonics
//! - The labelled critical path
//! - Timing statistics for one mnemonic
//! - A per-mnemonic breakdown

pub mod breakdown;
pub mod critical_path;
pub mod mnemonic;
pub mod timing;

// Re-export main types and functions
pub use breakdown::{summarize_mnemonics, MnemonicSummary};
pub use critical_path::{
    build_message_index, collect_critical_path, report_critical_path, resolve_label,
    CriticalPathEntry, CriticalPathLine, LabelSource, MessageIndex,
};
pub use mnemonic::{extract_message, special_case_prefix};
pub use timing::{compute_percentiles, compute_timing_stats, event_matches, Percentiles, TimingStats};

//! Configuration and constants for the CLI.

/// File suffix that marks a gzip-compressed profile
pub const GZIP_SUFFIX: &str = ".gz";

// Event categories written by Bazel's JSON trace profile
pub const CATEGORY_CRITICAL_PATH: &str = "critical path component";
pub const CATEGORY_ACTION_PROCESSING: &str = "action processing";

/// Critical path entries for actions are named `action '<progress message>'`
pub const ACTION_NAME_PREFIX: &str = "action '";

/// Progress messages whose tail varies per action and must be matched by prefix.
///
/// "LinkingGenerating Descriptor Set" is a single literal on purpose: it keeps
/// label resolution compatible with reports produced by earlier tooling.
pub const SPECIAL_CASE_MESSAGES: &[&str] = &[
    "Merging Kotlin output jar",
    "Extracting interface for jar",
    "Symlinking virtual headers",
    "LinkingGenerating Descriptor Set",
    "ProtoCompile",
    "KotlinCompile",
];

/// Percentiles reported by the timing report, in whole percent
pub const REPORTED_PERCENTILES: [u64; 5] = [25, 50, 90, 95, 99];

/// Unit used in every duration line
pub const DURATION_UNIT: &str = "microseconds";

pub const DEFAULT_TOP_MNEMONICS: usize = 20;
pub const MAX_TOP_MNEMONICS: usize = 1000;

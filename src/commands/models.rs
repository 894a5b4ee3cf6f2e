use crate::utils::config::DEFAULT_TOP_MNEMONICS;
use std::path::PathBuf;

/// Arguments for the critical path command
#[derive(Debug, Clone)]
pub struct CriticalPathArgs {
    /// Path to the Bazel profile (`.json` or `.json.gz`)
    pub profile: PathBuf,
}

/// Arguments for the mnemonic timing command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct TimingArgs {
    /// Path to the Bazel profile
    pub profile: PathBuf,

    /// Substring to match against event names and mnemonics
    pub mnemonic: String,

    /// Also write the stats as JSON here
    pub output_json: Option<PathBuf>,
}

impl Default for TimingArgs {
    fn default() -> Self {
        Self {
            profile: PathBuf::from("profile.json.gz"),
            mnemonic: String::new(),
            output_json: None,
        }
    }
}

/// Arguments for the per-mnemonic breakdown command
#[derive(Debug, Clone)]
pub struct BreakdownArgs {
    pub profile: PathBuf,

    /// Number of mnemonics to list
    pub top: usize,
}

impl Default for BreakdownArgs {
    fn default() -> Self {
        Self {
            profile: PathBuf::from("profile.json.gz"),
            top: DEFAULT_TOP_MNEMONICS,
        }
    }
}

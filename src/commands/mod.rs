//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod breakdown;
pub mod critical_path;
pub mod models;
pub mod timing;
pub mod utils;

// Re-export main command functions
pub use breakdown::{execute_breakdown, validate_breakdown_args};
pub use critical_path::{critical_path_lines, execute_critical_path, validate_critical_path_args};
pub use models::{BreakdownArgs, CriticalPathArgs, TimingArgs};
pub use timing::{compute_timing, execute_timing, validate_timing_args};
pub use utils::{display_version, validate_profile_file};

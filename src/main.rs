//! Bazel Profile Tools CLI
//!
//! Critical path and per-mnemonic timing reports for Bazel trace profiles.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use bazel_profile_tools::commands::{
    display_version, execute_breakdown, execute_critical_path, execute_timing,
    validate_profile_file, BreakdownArgs, CriticalPathArgs, TimingArgs,
};

/// Bazel Profile Tools - reports over Bazel JSON trace profiles
#[derive(Parser, Debug)]
#[command(name = "bazel-profile")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Dump the critical path, labelling each action with its mnemonic
    CriticalPath {
        /// Path to Bazel profile json (optionally .gz)
        profile: PathBuf,
    },

    /// Report total and percentile times for actions matching a mnemonic
    MnemonicTime {
        /// Path to Bazel profile json (optionally .gz)
        profile: PathBuf,

        /// Mnemonic to search for, for example 'Dexing'
        #[arg(long)]
        mnemonic: String,

        /// Also write the stats as JSON to this path
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// List total action time per mnemonic
    Mnemonics {
        /// Path to Bazel profile json (optionally .gz)
        profile: PathBuf,

        /// Number of mnemonics to show
        #[arg(long, default_value = "20")]
        top: usize,
    },

    /// Validate a profile and print a summary
    Validate {
        /// Path to Bazel profile json (optionally .gz)
        profile: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging (stderr, so report lines stay alone on stdout)
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::CriticalPath { profile } => {
            execute_critical_path(CriticalPathArgs { profile })?;
        }

        Commands::MnemonicTime {
            profile,
            mnemonic,
            json,
        } => {
            execute_timing(TimingArgs {
                profile,
                mnemonic,
                output_json: json,
            })?;
        }

        Commands::Mnemonics { profile, top } => {
            execute_breakdown(BreakdownArgs { profile, top })?;
        }

        Commands::Validate { profile } => {
            validate_profile_file(profile)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

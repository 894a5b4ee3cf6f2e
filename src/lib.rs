//! Bazel Profile Tools
//!
//! Reports over Bazel JSON trace profiles (`--profile=...json.gz`):
//! the critical path annotated with action mnemonics, and timing
//! statistics for the actions matching a mnemonic.
//!
//! This crate provides the core implementation for the
//! `bazel-profile` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! bazel build //... --profile=/tmp/profile.json.gz
//! bazel-profile critical-path /tmp/profile.json.gz
//! bazel-profile mnemonic-time /tmp/profile.json.gz --mnemonic CppCompile
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;

//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a trace profile
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Profile JSON '{}' not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("Profile path '{}' is not a file", .0.display())]
    NotAFile(PathBuf),

    #[error("Failed to read profile: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed profile JSON: {0}")]
    MalformedInput(#[from] serde_json::Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

//! Trace profile parsing.
//!
//! This module handles:
//! - Reading plain and gzip-compressed profiles
//! - Decoding the JSON trace into typed events
//! - Classifying events by category

pub mod loader;
pub mod schema;

// Re-export main types
pub use loader::{ensure_profile_exists, is_gzip_path, load_profile, parse_profile};
pub use schema::{EventArgs, EventCategory, Profile, TraceEvent};

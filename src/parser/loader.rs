//! Profile loader for Bazel `--profile` output.
//!
//! Reads a plain or gzip-compressed JSON trace into memory and decodes it.
//! The whole document is materialized at once; there is no streaming parse.

use super::schema::Profile;
use crate::utils::config::GZIP_SUFFIX;
use crate::utils::error::LoadError;
use flate2::read::GzDecoder;
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load and decode a profile from disk
///
/// **Public** - main entry point for loading
///
/// # Arguments
/// * `path` - Path to a `.json` or `.json.gz` profile
///
/// # Errors
/// * `LoadError::FileNotFound` - Path does not exist (checked before opening)
/// * `LoadError::Io` - File or gzip stream could not be read
/// * `LoadError::MalformedInput` - Not JSON, or `traceEvents`/`name` missing
pub fn load_profile(path: impl AsRef<Path>) -> Result<Profile, LoadError> {
    let path = path.as_ref();

    ensure_profile_exists(path)?;

    let raw = read_profile_text(path)?;
    debug!("Read {} bytes from {}", raw.len(), path.display());

    let profile = parse_profile(&raw)?;
    debug!("Decoded {} trace events", profile.trace_events.len());

    Ok(profile)
}

/// Decode a profile held in memory
pub fn parse_profile(raw: &str) -> Result<Profile, LoadError> {
    Ok(serde_json::from_str(raw)?)
}

/// Fail with `FileNotFound` unless `path` names an existing regular file
pub fn ensure_profile_exists(path: &Path) -> Result<(), LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }
    if path.is_dir() {
        return Err(LoadError::NotAFile(path.to_path_buf()));
    }
    Ok(())
}

/// Whether the path is treated as gzip-compressed
pub fn is_gzip_path(path: &Path) -> bool {
    path.to_string_lossy().ends_with(GZIP_SUFFIX)
}

/// Read the full profile text, decompressing when needed
///
/// **Private** - the file handle is dropped when this returns, on success or error
fn read_profile_text(path: &Path) -> Result<String, LoadError> {
    let mut file = File::open(path)?;
    let mut raw = String::new();

    if is_gzip_path(path) {
        debug!("Decompressing gzip profile: {}", path.display());
        GzDecoder::new(file).read_to_string(&mut raw)?;
    } else {
        file.read_to_string(&mut raw)?;
    }

    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_is_gzip_path() {
        assert!(is_gzip_path(Path::new("profile.json.gz")));
        assert!(is_gzip_path(Path::new("/tmp/out/command.profile.gz")));
        assert!(!is_gzip_path(Path::new("profile.json")));
        assert!(!is_gzip_path(Path::new("profile.gzip")));
    }

    #[test]
    fn test_parse_profile_minimal() {
        let profile = parse_profile(r#"{"traceEvents": []}"#).unwrap();
        assert!(profile.trace_events.is_empty());
        assert!(profile.other_data.is_none());
    }

    #[test]
    fn test_parse_profile_missing_trace_events() {
        let result = parse_profile(r#"{"otherData": {}}"#);
        assert!(matches!(result, Err(LoadError::MalformedInput(_))));
    }

    #[test]
    fn test_parse_profile_missing_name() {
        let result = parse_profile(r#"{"traceEvents": [{"cat": "action processing"}]}"#);
        assert!(matches!(result, Err(LoadError::MalformedInput(_))));
    }

    #[test]
    fn test_parse_profile_invalid_json() {
        let result = parse_profile("{\"traceEvents\": [");
        assert!(matches!(result, Err(LoadError::MalformedInput(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_profile(PathBuf::from("/definitely/not/here/profile.json"));
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_load_directory_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = load_profile(temp_dir.path());
        assert!(matches!(result, Err(LoadError::NotAFile(_))));
    }
}

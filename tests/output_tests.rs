use bazel_profile_tools::aggregator::{Percentiles, TimingStats};
use bazel_profile_tools::output::{format_timing_report, validate_path, write_timing_report};
use std::path::Path;

fn create_test_stats() -> TimingStats {
    TimingStats {
        mnemonic: "X".to_string(),
        total_events: 3,
        num_actions: 3,
        total_cpu_time: 60,
        total_wall_time: 60,
        percentiles: Some(Percentiles {
            p25: 10,
            p50: 20,
            p90: 30,
            p95: 30,
            p99: 30,
        }),
    }
}

#[test]
fn test_write_timing_report() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("timing.json");

    write_timing_report(&create_test_stats(), &path).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["total_cpu_time"], 60);
    assert_eq!(value["percentiles"]["p99"], 30);
}

#[test]
fn test_validate_output_path_empty() {
    let result = validate_path(Path::new(""));
    assert!(result.is_err());
}

#[test]
fn test_validate_output_path_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    let result = validate_path(temp_dir.path());
    assert!(result.is_err());
}

#[test]
fn test_timing_report_mentions_units() {
    let lines = format_timing_report(&create_test_stats());

    assert!(lines.iter().any(|l| l == "Total time for X was 60 microseconds."));
    assert!(lines.iter().any(|l| l == "p50 time for X was 20 microseconds."));
}

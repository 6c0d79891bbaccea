//! Unit tests for loading `DecoderConfig` from JSON files.

use std::io::Write;
use std::time::Duration;

use tempfile::NamedTempFile;
use vedirect_rs::{DecoderConfig, VeDirectError};

/// Tests that a config file sets the throttle interval.
#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"{{ "throttle_ms": 2500 }}"#).unwrap();

    let config = DecoderConfig::from_file(file.path()).unwrap();
    assert_eq!(config.throttle(), Duration::from_millis(2500));
}

/// Tests that a missing file surfaces as an I/O error.
#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = DecoderConfig::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, VeDirectError::Io(_)));
}

/// Tests that malformed JSON surfaces as a configuration error.
#[test]
fn test_malformed_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "throttle_ms = 10").unwrap();

    let err = DecoderConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, VeDirectError::ConfigError(_)));
}

/// Tests that an out-of-range throttle in a file is rejected.
#[test]
fn test_out_of_range_throttle() {
    let err = DecoderConfig::from_json_str(r#"{ "throttle_ms": 3600001 }"#).unwrap_err();
    assert_eq!(err.to_string(), "Invalid throttle interval: 3600001 ms");
}

/// Tests that zero throttle is accepted.
#[test]
fn test_zero_throttle() {
    let config = DecoderConfig::with_throttle(Duration::ZERO).unwrap();
    assert_eq!(config.throttle_ms, 0);
}

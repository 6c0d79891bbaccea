//! Unit tests for the `VeDirectError` enum and its associated `Display` trait implementation.

use vedirect_rs::error::VeDirectError;

/// Tests that the `SerialPortError` variant is correctly formatted.
#[test]
fn test_serial_port_error() {
    let err = VeDirectError::SerialPortError("Test error".to_string());
    assert_eq!(err.to_string(), "Serial port error: Test error");
}

/// Tests that the `Io` variant wraps `std::io::Error`.
#[test]
fn test_io_error() {
    let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
    let err: VeDirectError = io.into();
    assert_eq!(err.to_string(), "I/O error: eof");
}

/// Tests that the `ConfigError` variant is correctly formatted.
#[test]
fn test_config_error() {
    let err = VeDirectError::ConfigError("bad".to_string());
    assert_eq!(err.to_string(), "Configuration error: bad");
}

/// Tests that JSON errors convert into `ConfigError`.
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: VeDirectError = json_err.into();
    assert!(matches!(err, VeDirectError::ConfigError(_)));
}

/// Tests that the `InvalidThrottle` variant is correctly formatted.
#[test]
fn test_invalid_throttle_error() {
    let err = VeDirectError::InvalidThrottle(42);
    assert_eq!(err.to_string(), "Invalid throttle interval: 42 ms");
}

//! # VE.Direct Error Handling
//!
//! This module defines the VeDirectError enum, which represents the errors
//! raised by the outer surfaces of the crate (serial port, files, config).
//! The byte decoder itself never fails; malformed input is only counted and
//! logged.

use thiserror::Error;

/// Represents the different error types that can occur in the VE.Direct crate.
#[derive(Debug, Error)]
pub enum VeDirectError {
    /// Indicates an error related to the serial port communication.
    #[error("Serial port error: {0}")]
    SerialPortError(String),

    /// Indicates an I/O failure while reading the byte source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Indicates a configuration document that could not be parsed.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Indicates a throttle interval outside the accepted range.
    #[error("Invalid throttle interval: {0} ms")]
    InvalidThrottle(u64),
}

impl From<serde_json::Error> for VeDirectError {
    fn from(err: serde_json::Error) -> Self {
        VeDirectError::ConfigError(err.to_string())
    }
}

impl From<tokio_serial::Error> for VeDirectError {
    fn from(err: tokio_serial::Error) -> Self {
        VeDirectError::SerialPortError(err.to_string())
    }
}

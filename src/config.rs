//! # Decoder Configuration
//!
//! The throttle interval is the only tunable of the decoder; the stall
//! timeout is fixed by the protocol. Configuration can be built in code or
//! loaded from a JSON document:
//!
//! ```rust
//! use vedirect_rs::config::DecoderConfig;
//!
//! let config = DecoderConfig::from_json_str(r#"{ "throttle_ms": 1000 }"#).unwrap();
//! assert_eq!(config.throttle().as_millis(), 1000);
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{VEDIRECT_DEFAULT_THROTTLE, VEDIRECT_STALL_TIMEOUT};
use crate::error::VeDirectError;

/// Longest accepted throttle interval (one hour).
pub const MAX_THROTTLE_MS: u64 = 3_600_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecoderConfig {
    /// Minimum milliseconds between two committed snapshots.
    pub throttle_ms: u64,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        DecoderConfig {
            throttle_ms: VEDIRECT_DEFAULT_THROTTLE.as_millis() as u64,
        }
    }
}

impl DecoderConfig {
    pub fn with_throttle(throttle: Duration) -> Result<Self, VeDirectError> {
        let throttle_ms = u64::try_from(throttle.as_millis()).unwrap_or(u64::MAX);
        let config = DecoderConfig { throttle_ms };
        config.validate()?;
        Ok(config)
    }

    pub fn throttle(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }

    pub fn stall_timeout(&self) -> Duration {
        VEDIRECT_STALL_TIMEOUT
    }

    pub fn validate(&self) -> Result<(), VeDirectError> {
        if self.throttle_ms > MAX_THROTTLE_MS {
            return Err(VeDirectError::InvalidThrottle(self.throttle_ms));
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self, VeDirectError> {
        let config: DecoderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, VeDirectError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_throttle() {
        let config = DecoderConfig::default();
        assert_eq!(config.throttle(), Duration::from_millis(100));
        assert_eq!(config.stall_timeout(), Duration::from_millis(200));
    }

    #[test]
    fn test_missing_key_uses_default() {
        let config = DecoderConfig::from_json_str("{}").unwrap();
        assert_eq!(config, DecoderConfig::default());
    }

    #[test]
    fn test_rejects_huge_throttle() {
        let err = DecoderConfig::with_throttle(Duration::from_secs(7200)).unwrap_err();
        assert!(matches!(err, VeDirectError::InvalidThrottle(7_200_000)));
    }

    #[test]
    fn test_rejects_unknown_key() {
        let err = DecoderConfig::from_json_str(r#"{ "stall_ms": 10 }"#).unwrap_err();
        assert!(matches!(err, VeDirectError::ConfigError(_)));
    }
}

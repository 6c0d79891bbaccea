//! # VE.Direct Protocol Constants
//!
//! Framing bytes, the checksum sentinel and the timing limits used by the
//! text-protocol decoder.

use std::time::Duration;

// Framing bytes
pub const VEDIRECT_CR: u8 = b'\r';
pub const VEDIRECT_LF: u8 = b'\n';
pub const VEDIRECT_TAB: u8 = b'\t';
pub const VEDIRECT_HEX_START: u8 = b':';

/// Label of the last field of every text frame. Matched exactly, case-sensitive.
pub const VEDIRECT_CHECKSUM_LABEL: &[u8] = b"Checksum";

/// Maximum gap between two bytes of one in-progress frame.
pub const VEDIRECT_STALL_TIMEOUT: Duration = Duration::from_millis(200);

/// Default minimum spacing between two committed snapshots.
pub const VEDIRECT_DEFAULT_THROTTLE: Duration = Duration::from_millis(100);

// Accumulator caps. The protocol limits labels to 9 and values to 33 characters.
pub const VEDIRECT_MAX_LABEL_LEN: usize = 16;
pub const VEDIRECT_MAX_VALUE_LEN: usize = 64;

/// Raw lines longer than this are flushed to the diagnostic tap unterminated.
pub const VEDIRECT_MAX_TAP_LINE_LEN: usize = 256;

// Serial line settings
pub const VEDIRECT_BAUDRATE: u32 = 19200;
pub const VEDIRECT_READ_TIMEOUT: Duration = Duration::from_secs(1);

pub const VEDIRECT_UNKNOWN_TEXT: &str = "Unknown";

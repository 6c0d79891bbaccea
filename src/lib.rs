//! # vedirect-rs - A Rust Crate for the Victron VE.Direct Text Protocol
//!
//! VE.Direct is the serial telemetry link of Victron battery monitors, solar
//! charge controllers and inverters. The device streams human-readable
//! `label\tvalue` fields in frames closed by a `Checksum` field, with
//! occasional `:` hex messages mixed in.
//!
//! ## Features
//!
//! - Incremental byte-at-a-time decoding, no framing assumptions about reads
//! - Hex message lines recognized and skipped
//! - Stalled or truncated frames dropped instead of merged
//! - Throttled, atomically published snapshots of typed fields
//! - Model, error, charge-state and tracking-mode code tables
//! - Optional raw-line diagnostic tap
//! - Async serial pump on top of `tokio-serial`
//!
//! ## Usage
//!
//! ```rust
//! use vedirect_rs::{DecoderConfig, FrameDecoder};
//!
//! let mut decoder = FrameDecoder::new(DecoderConfig::default());
//! let reader = decoder.snapshot_handle();
//!
//! for &byte in b"V\t12800\r\nCS\t3\r\nChecksum\t\x00" {
//!     decoder.feed(byte);
//! }
//!
//! let snapshot = reader.current().expect("one frame committed");
//! assert_eq!(snapshot.charge_state.unwrap().text, "Bulk");
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod tables;
pub mod vedirect;

pub use crate::config::DecoderConfig;
pub use crate::error::VeDirectError;
pub use crate::logging::{init_logger, log_info};

pub use vedirect::{
    FieldOutcome, FrameDecoder, LineTap, ParserState, SerialConfig, Snapshot, SnapshotHandle,
};


//! # VE.Direct Text Frame Decoder
//!
//! [`FrameDecoder`] consumes the serial byte stream one byte at a time. A
//! text frame is a run of `label\tvalue\r\n` fields closed by a field named
//! `Checksum`; asynchronous hex messages start with `:` and run to the end
//! of their line.
//!
//! ## Usage
//!
//! ```rust
//! use vedirect_rs::vedirect::FrameDecoder;
//! use vedirect_rs::config::DecoderConfig;
//!
//! let mut decoder = FrameDecoder::new(DecoderConfig::default());
//! assert!(decoder.current_snapshot().is_none());
//!
//! decoder.feed_slice(b"\r\nPID\t0xA042\r\nV\t12800\r\nChecksum\t\x7f");
//!
//! let snapshot = decoder.current_snapshot().unwrap();
//! assert_eq!(snapshot.battery_voltage_mv, Some(12800));
//! assert_eq!(snapshot.device_type.unwrap().text, "BlueSolar MPPT 75|15");
//! ```
//!
//! ## Frame commit
//!
//! Fields are dispatched into a staging record as each line completes. When
//! the `Checksum` field arrives the throttle decides the fate of the whole
//! frame: the staging record is either published in one swap or dropped.
//! The checksum byte itself is consumed without being verified.
//!
//! ## Recovery
//!
//! If more than the 200 ms stall timeout passes between two bytes while a
//! frame is open, the next byte first resets the decoder to `Idle` and
//! drops everything staged so far, so the rest of a stalled frame cannot
//! merge with the next one.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use log::{debug, trace, warn};

use crate::config::DecoderConfig;
use crate::constants::{
    VEDIRECT_CHECKSUM_LABEL, VEDIRECT_CR, VEDIRECT_HEX_START, VEDIRECT_LF,
    VEDIRECT_MAX_LABEL_LEN, VEDIRECT_MAX_VALUE_LEN, VEDIRECT_TAB,
};
use crate::vedirect::clock::{Clock, MonotonicClock};
use crate::vedirect::fields::{apply_field, FieldOutcome};
use crate::vedirect::snapshot::{Snapshot, SnapshotHandle};
use crate::vedirect::state::ParserState;
use crate::vedirect::stats::DecoderStats;
use crate::vedirect::tap::{LineTap, TapChannel};

fn is_eol(byte: u8) -> bool {
    byte == VEDIRECT_CR || byte == VEDIRECT_LF
}

/// Incremental decoder for one VE.Direct serial link.
pub struct FrameDecoder<C: Clock = MonotonicClock> {
    config: DecoderConfig,
    clock: C,
    state: ParserState,
    label: Vec<u8>,
    value: Vec<u8>,
    /// Set when the current field outgrew its buffer cap.
    overflow: bool,
    staging: Snapshot,
    /// A text field of the current frame has been seen.
    frame_open: bool,
    last_byte_at: Option<Instant>,
    last_publish_at: Option<Instant>,
    published: SnapshotHandle,
    tap: TapChannel,
    stats: DecoderStats,
}

impl FrameDecoder<MonotonicClock> {
    pub fn new(config: DecoderConfig) -> Self {
        Self::with_clock(config, MonotonicClock)
    }
}

impl Default for FrameDecoder<MonotonicClock> {
    fn default() -> Self {
        Self::new(DecoderConfig::default())
    }
}

impl<C: Clock> FrameDecoder<C> {
    pub fn with_clock(config: DecoderConfig, clock: C) -> Self {
        FrameDecoder {
            config,
            clock,
            state: ParserState::Idle,
            label: Vec::with_capacity(VEDIRECT_MAX_LABEL_LEN),
            value: Vec::with_capacity(VEDIRECT_MAX_VALUE_LEN),
            overflow: false,
            staging: Snapshot::default(),
            frame_open: false,
            last_byte_at: None,
            last_publish_at: None,
            published: SnapshotHandle::new(),
            tap: TapChannel::new(),
            stats: DecoderStats::default(),
        }
    }

    /// Feeds one received byte.
    pub fn feed(&mut self, byte: u8) {
        let now = self.clock.now();
        self.check_stall(now);
        self.last_byte_at = Some(now);
        self.stats.bytes += 1;
        self.tap.push(byte);
        self.step(byte, now);
    }

    /// Feeds a run of bytes in order.
    pub fn feed_slice(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.feed(byte);
        }
    }

    /// Latest committed snapshot; `None` until the first frame is committed.
    pub fn current_snapshot(&self) -> Option<Arc<Snapshot>> {
        self.published.current()
    }

    /// Reader for the published snapshot that can be moved to other tasks.
    pub fn snapshot_handle(&self) -> SnapshotHandle {
        self.published.clone()
    }

    pub fn state(&self) -> ParserState {
        self.state
    }

    pub fn stats(&self) -> &DecoderStats {
        &self.stats
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Attaches a diagnostic tap, replacing any previous one.
    pub fn set_tap<T: LineTap + 'static>(&mut self, tap: T) {
        self.tap.set(Box::new(tap));
    }

    pub fn clear_tap(&mut self) {
        self.tap.clear();
    }

    /// Drops any partial field and staged frame and returns to `Idle`.
    ///
    /// The published snapshot and the throttle timestamp are kept.
    pub fn reset(&mut self) {
        self.state = ParserState::Idle;
        self.label.clear();
        self.value.clear();
        self.overflow = false;
        self.staging = Snapshot::default();
        self.frame_open = false;
    }

    fn check_stall(&mut self, now: Instant) {
        let Some(last) = self.last_byte_at else {
            return;
        };
        if self.state == ParserState::Idle && !self.frame_open {
            return;
        }
        let gap = now.saturating_duration_since(last);
        if gap > self.config.stall_timeout() {
            warn!("Last transmission too long ago ({gap:?}), dropping partial frame");
            self.stats.stall_resets += 1;
            self.reset();
        }
    }

    fn step(&mut self, byte: u8, now: Instant) {
        match self.state {
            ParserState::Idle => {
                if is_eol(byte) {
                    return;
                }
                self.label.clear();
                self.value.clear();
                self.overflow = false;
                self.state = ParserState::ReadingLabel;
                self.read_label(byte);
            }
            ParserState::ReadingLabel => self.read_label(byte),
            ParserState::ReadingValue => self.read_value(byte, now),
            ParserState::DiscardingBinaryFrame => {
                if is_eol(byte) {
                    self.state = ParserState::Idle;
                }
            }
        }
    }

    fn read_label(&mut self, byte: u8) {
        match byte {
            VEDIRECT_HEX_START => {
                trace!("Hex frame start, discarding to end of line");
                self.stats.hex_frames += 1;
                self.state = ParserState::DiscardingBinaryFrame;
            }
            VEDIRECT_TAB => self.state = ParserState::ReadingValue,
            // Dropped, not appended, so a bare line cannot run into the next label.
            VEDIRECT_CR | VEDIRECT_LF => {
                trace!("Line without separator: {:?}", self.label.escape_ascii().to_string());
                self.stats.record_field(FieldOutcome::Malformed);
                self.frame_open = true;
                self.state = ParserState::Idle;
            }
            _ => push_capped(&mut self.label, byte, VEDIRECT_MAX_LABEL_LEN, &mut self.overflow),
        }
    }

    fn read_value(&mut self, byte: u8, now: Instant) {
        if !self.overflow && self.label == VEDIRECT_CHECKSUM_LABEL {
            self.end_frame(now);
            self.state = ParserState::Idle;
            return;
        }
        if is_eol(byte) {
            self.dispatch();
            self.state = ParserState::Idle;
        } else {
            push_capped(&mut self.value, byte, VEDIRECT_MAX_VALUE_LEN, &mut self.overflow);
        }
    }

    fn dispatch(&mut self) {
        let outcome = if self.overflow {
            FieldOutcome::Malformed
        } else {
            apply_field(&mut self.staging, &self.label, &self.value)
        };
        self.stats.record_field(outcome);
        self.frame_open = true;
    }

    /// Throttle decision at the checksum sentinel.
    fn end_frame(&mut self, now: Instant) {
        let throttle = self.config.throttle();
        let accepted = self
            .last_publish_at
            .map_or(true, |last| now.saturating_duration_since(last) >= throttle);

        let mut staged = std::mem::take(&mut self.staging);
        self.frame_open = false;

        if accepted {
            self.last_publish_at = Some(now);
            staged.captured_at = Utc::now();
            self.published.publish(staged);
            self.stats.frames_committed += 1;
            debug!("Frame committed ({} total)", self.stats.frames_committed);
        } else {
            self.stats.frames_suppressed += 1;
            trace!("Frame suppressed by throttle of {throttle:?}");
        }
    }

    /// Time since the last committed frame, if any.
    pub fn since_last_commit(&self) -> Option<Duration> {
        self.last_publish_at
            .map(|last| self.clock.now().saturating_duration_since(last))
    }
}

fn push_capped(buf: &mut Vec<u8>, byte: u8, cap: usize, overflow: &mut bool) {
    if buf.len() < cap {
        buf.push(byte);
    } else {
        *overflow = true;
    }
}

//! # Decoded Snapshots
//!
//! A [`Snapshot`] holds the typed fields of one committed text frame. It is
//! built in a staging record while the frame streams in and handed to the
//! [`SnapshotHandle`] as a whole once the frame is accepted. Readers get an
//! `Arc` to an immutable record, so they never see a half-written one.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// An integer code together with its resolved table text.
///
/// `code` is the value as received; codes outside the table, including
/// negative ones, resolve to `"Unknown"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodedText {
    pub code: i64,
    pub text: &'static str,
}

impl CodedText {
    pub fn new(code: i64, text: &'static str) -> Self {
        CodedText { code, text }
    }
}

/// Off-reason bitmask and the names of its set bits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OffReason {
    pub mask: i64,
    pub reasons: Vec<&'static str>,
}

/// Typed contents of one text frame.
///
/// `None` means the label was not part of the committed frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Snapshot {
    /// `V`, mV
    pub battery_voltage_mv: Option<i32>,
    /// `VPV`, mV
    pub panel_voltage_mv: Option<i32>,
    /// `PPV`, W
    pub panel_power_w: Option<i32>,
    /// `I`, mA
    pub battery_current_ma: Option<i32>,
    /// `IL`, mA
    pub load_current_ma: Option<i32>,
    /// `LOAD`
    pub load_on: Option<bool>,
    /// `Alarm`
    pub alarm: Option<String>,
    /// `H19`, 0.01 kWh scaled by 10
    pub yield_total: Option<i32>,
    /// `H20`
    pub yield_today: Option<i32>,
    /// `H21`, W
    pub max_power_today_w: Option<i32>,
    /// `H22`
    pub yield_yesterday: Option<i32>,
    /// `H23`, W
    pub max_power_yesterday_w: Option<i32>,
    /// `ERR`
    pub error: Option<CodedText>,
    /// `CS`
    pub charge_state: Option<CodedText>,
    /// `FW`, dotted
    pub firmware_version: Option<String>,
    /// `PID`
    pub device_type: Option<CodedText>,
    /// `SER#`
    pub serial_number: Option<String>,
    /// `HSDS`
    pub day_number: Option<i32>,
    /// `MPPT`
    pub tracking_mode: Option<CodedText>,
    /// `OR`
    pub off_reason: Option<OffReason>,
    /// Wall-clock time of the commit.
    pub captured_at: DateTime<Utc>,
}

impl Snapshot {
    /// Battery voltage in volts.
    pub fn battery_voltage_v(&self) -> Option<f32> {
        self.battery_voltage_mv.map(|mv| mv as f32 / 1000.0)
    }

    /// Panel voltage in volts.
    pub fn panel_voltage_v(&self) -> Option<f32> {
        self.panel_voltage_mv.map(|mv| mv as f32 / 1000.0)
    }

    /// Renders the snapshot as a JSON object.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Shared, read-mostly view of the latest committed snapshot.
///
/// Cloning is cheap; every clone observes the same publication slot.
#[derive(Debug, Clone, Default)]
pub struct SnapshotHandle {
    slot: Arc<ArcSwapOption<Snapshot>>,
}

impl SnapshotHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// The latest committed snapshot, or `None` if no frame has been
    /// committed yet.
    pub fn current(&self) -> Option<Arc<Snapshot>> {
        self.slot.load_full()
    }

    pub fn has_data(&self) -> bool {
        self.slot.load().is_some()
    }

    /// Replaces the published snapshot in one pointer swap.
    pub(crate) fn publish(&self, snapshot: Snapshot) {
        self.slot.store(Some(Arc::new(snapshot)));
    }
}

//! Decoder counters.
//!
//! Every best-effort recovery the decoder makes (stall reset, dropped
//! field, coerced number) bumps one of these counters, so a noisy link shows
//! up here even though the decoder never reports an error.

use serde::Serialize;

use crate::vedirect::fields::FieldOutcome;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DecoderStats {
    pub bytes: u64,
    pub frames_committed: u64,
    pub frames_suppressed: u64,
    pub stall_resets: u64,
    pub hex_frames: u64,
    pub fields_applied: u64,
    pub fields_coerced: u64,
    pub fields_unrecognized: u64,
    pub fields_malformed: u64,
}

impl DecoderStats {
    pub(crate) fn record_field(&mut self, outcome: FieldOutcome) {
        match outcome {
            FieldOutcome::Applied => self.fields_applied += 1,
            FieldOutcome::Coerced => self.fields_coerced += 1,
            FieldOutcome::Unrecognized => self.fields_unrecognized += 1,
            FieldOutcome::Malformed => self.fields_malformed += 1,
        }
    }

    /// Frames that reached the checksum sentinel, committed or not.
    pub fn frames_completed(&self) -> u64 {
        self.frames_committed + self.frames_suppressed
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

//! # VE.Direct Lookup Tables
//!
//! Static mappings from the integer codes carried in text frames to their
//! descriptive names. Every lookup is exact-match and falls back to
//! `"Unknown"` for codes the table does not list. Newer firmware keeps
//! adding codes, so an unknown code is never an error.

pub mod codes;
pub mod device_type;

pub use codes::{
    charge_state_text, error_code_text, off_reason_names, tracking_mode_text, CHARGE_STATES,
    ERROR_CODES, OFF_REASON_BITS, TRACKING_MODES,
};
pub use device_type::{device_type_text, is_known_device, DEVICE_TYPES};

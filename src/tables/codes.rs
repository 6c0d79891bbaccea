//! Status code tables: tracking mode (`MPPT`), error code (`ERR`), charge
//! state (`CS`) and off-reason bits (`OR`).

use crate::constants::VEDIRECT_UNKNOWN_TEXT;

/// `MPPT` field values. Sorted by code.
pub const TRACKING_MODES: &[(u32, &str)] = &[(0, "Off"), (1, "Limited"), (2, "Active")];

/// `ERR` field values. Sorted by code.
pub const ERROR_CODES: &[(u32, &str)] = &[
    (0, "No error"),
    (2, "Battery voltage too high"),
    (17, "Charger temperature too high"),
    (18, "Charger over current"),
    (19, "Charger current reversed"),
    (20, "Bulk time limit exceeded"),
    (21, "Current sensor issue"),
    (26, "Terminals overheated"),
    (28, "Converter issue"),
    (33, "Input voltage too high (solar panel)"),
    (34, "Input current too high (solar panel)"),
    (38, "Input shutdown (excessive battery voltage)"),
    (39, "Input shutdown (due to current flow during off mode)"),
    (65, "Lost communication with one of devices"),
    (66, "Synchronised charging device configuration issue"),
    (67, "BMS connection lost"),
    (68, "Network misconfigured"),
    (116, "Factory calibration data lost"),
    (117, "Invalid/incompatible firmware"),
    (119, "User settings invalid"),
];

/// `CS` field values. Sorted by code.
pub const CHARGE_STATES: &[(u32, &str)] = &[
    (0, "Off"),
    (1, "Low power"),
    (2, "Fault"),
    (3, "Bulk"),
    (4, "Absorption"),
    (5, "Float"),
    (6, "Storage"),
    (7, "Equalize (manual)"),
    (9, "Inverting"),
    (11, "Power supply"),
    (245, "Starting-up"),
    (246, "Repeated absorption"),
    (247, "Auto equalize / Recondition"),
    (248, "BatterySafe"),
    (252, "External control"),
];

/// `OR` bit names, indexed by bit position.
pub const OFF_REASON_BITS: [&str; 16] = [
    "No input power",
    "Switched off (power switch)",
    "Switched off (device mode register)",
    "Remote input",
    "Protection active",
    "Paygo",
    "BMS",
    "Engine shutdown detection",
    "Analysing input voltage",
    "Unknown: Bit 10",
    "Unknown: Bit 11",
    "Unknown: Bit 12",
    "Unknown: Bit 13",
    "Unknown: Bit 14",
    "Unknown: Bit 15",
    "Unknown: Bit 16",
];

fn lookup(table: &'static [(u32, &'static str)], code: u32) -> &'static str {
    table
        .binary_search_by_key(&code, |&(c, _)| c)
        .map(|idx| table[idx].1)
        .unwrap_or(VEDIRECT_UNKNOWN_TEXT)
}

pub fn tracking_mode_text(code: u32) -> &'static str {
    lookup(TRACKING_MODES, code)
}

pub fn error_code_text(code: u32) -> &'static str {
    lookup(ERROR_CODES, code)
}

pub fn charge_state_text(code: u32) -> &'static str {
    lookup(CHARGE_STATES, code)
}

/// Names of the bits set in an off-reason mask, lowest bit first.
///
/// Bits above 15 have no name and are skipped.
pub fn off_reason_names(mask: u32) -> Vec<&'static str> {
    OFF_REASON_BITS
        .iter()
        .enumerate()
        .filter(|(bit, _)| mask & (1 << bit) != 0)
        .map(|(_, name)| *name)
        .collect()
}

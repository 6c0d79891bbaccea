//! Unit tests for the lookup tables in `tables`.

use vedirect_rs::tables::{
    charge_state_text, device_type_text, error_code_text, off_reason_names, tracking_mode_text,
    CHARGE_STATES, DEVICE_TYPES, ERROR_CODES, TRACKING_MODES,
};

/// Tests the tracking mode table.
#[test]
fn test_tracking_modes() {
    assert_eq!(tracking_mode_text(0), "Off");
    assert_eq!(tracking_mode_text(1), "Limited");
    assert_eq!(tracking_mode_text(2), "Active");
    assert_eq!(tracking_mode_text(99), "Unknown");
}

/// Tests a sample of error codes.
#[test]
fn test_error_codes() {
    assert_eq!(error_code_text(0), "No error");
    assert_eq!(error_code_text(2), "Battery voltage too high");
    assert_eq!(error_code_text(67), "BMS connection lost");
    assert_eq!(error_code_text(119), "User settings invalid");
    assert_eq!(error_code_text(120), "Unknown");
}

/// Tests a sample of charge states.
#[test]
fn test_charge_states() {
    assert_eq!(charge_state_text(3), "Bulk");
    assert_eq!(charge_state_text(4), "Absorption");
    assert_eq!(charge_state_text(247), "Auto equalize / Recondition");
    assert_eq!(charge_state_text(252), "External control");
    assert_eq!(charge_state_text(253), "Unknown");
}

/// Tests a sample of product IDs across device families.
#[test]
fn test_device_types() {
    assert_eq!(device_type_text(0x0300), "BlueSolar MPPT 70|15");
    assert_eq!(device_type_text(0xA042), "BlueSolar MPPT 75|15");
    assert_eq!(device_type_text(0xA053), "SmartSolar MPPT 75|15");
    assert_eq!(device_type_text(0xA10E), "SmartSolar MPPT VE.Can 150/100 rev2");
    assert_eq!(device_type_text(0xA2A4), "Phoenix Inverter 48V 3000VA 230V");
    assert_eq!(device_type_text(0xA347), "Phoenix Smart IP43 Charger 24|16 (3)");
    assert_eq!(device_type_text(0xA442), "Multi RS Solar 48V 6000VA 230V");
    assert_eq!(device_type_text(0xFFFF), "Unknown");
}

/// Tests that every listed code maps to its own listed text.
#[test]
fn test_tables_round_trip() {
    for &(code, text) in DEVICE_TYPES {
        assert_eq!(device_type_text(code), text, "PID 0x{code:04X}");
    }
    for &(code, text) in ERROR_CODES {
        assert_eq!(error_code_text(code), text);
    }
    for &(code, text) in CHARGE_STATES {
        assert_eq!(charge_state_text(code), text);
    }
    for &(code, text) in TRACKING_MODES {
        assert_eq!(tracking_mode_text(code), text);
    }
}

/// Tests that no table entry uses the fallback text.
#[test]
fn test_no_entry_named_unknown() {
    assert!(DEVICE_TYPES.iter().all(|&(_, t)| t != "Unknown"));
    assert!(ERROR_CODES.iter().all(|&(_, t)| t != "Unknown"));
    assert!(CHARGE_STATES.iter().all(|&(_, t)| t != "Unknown"));
}

/// Tests that all sixteen off-reason bits have names.
#[test]
fn test_off_reason_all_bits() {
    let names = off_reason_names(0xFFFF);
    assert_eq!(names.len(), 16);
    assert_eq!(names[8], "Analysing input voltage");
    assert_eq!(names[15], "Unknown: Bit 16");
}

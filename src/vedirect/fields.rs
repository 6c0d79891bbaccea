//! # Field Dispatcher
//!
//! Converts one completed `label\tvalue` pair into the matching typed field
//! of a staging [`Snapshot`].
//!
//! Numeric values are read the way the charge controllers' reference
//! firmware reads them: leading whitespace and an optional sign, then as
//! many digits as are present. A value with no leading digits is stored as
//! `0` and reported as [`FieldOutcome::Coerced`] so the caller can tell it
//! apart from a genuine reading of zero.

use log::debug;

use crate::constants::VEDIRECT_UNKNOWN_TEXT;
use crate::tables::{
    charge_state_text, device_type_text, error_code_text, off_reason_names, tracking_mode_text,
};
use crate::vedirect::snapshot::{CodedText, OffReason, Snapshot};

/// Result of dispatching one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOutcome {
    /// The value was stored.
    Applied,
    /// Recognized numeric label with an unparseable value; stored as zero.
    Coerced,
    /// Label not in the dispatch table.
    Unrecognized,
    /// Empty label, or label/value not valid text.
    Malformed,
}

/// Dispatches `label`/`value` into `record`.
pub fn apply_field(record: &mut Snapshot, label: &[u8], value: &[u8]) -> FieldOutcome {
    if label.is_empty() {
        return FieldOutcome::Malformed;
    }
    let (Ok(label), Ok(value)) = (std::str::from_utf8(label), std::str::from_utf8(value)) else {
        return FieldOutcome::Malformed;
    };

    let outcome = match label {
        "V" => int_field(&mut record.battery_voltage_mv, value, 1),
        "VPV" => int_field(&mut record.panel_voltage_mv, value, 1),
        "PPV" => int_field(&mut record.panel_power_w, value, 1),
        "I" => int_field(&mut record.battery_current_ma, value, 1),
        "IL" => int_field(&mut record.load_current_ma, value, 1),
        "LOAD" => {
            record.load_on = Some(value == "ON" || value == "On");
            FieldOutcome::Applied
        }
        "Alarm" => {
            record.alarm = Some(value.to_string());
            FieldOutcome::Applied
        }
        "H19" => int_field(&mut record.yield_total, value, 10),
        "H20" => int_field(&mut record.yield_today, value, 10),
        "H21" => int_field(&mut record.max_power_today_w, value, 1),
        "H22" => int_field(&mut record.yield_yesterday, value, 10),
        "H23" => int_field(&mut record.max_power_yesterday_w, value, 1),
        "ERR" => coded_field(&mut record.error, parse_decimal(value), error_code_text),
        "CS" => coded_field(&mut record.charge_state, parse_decimal(value), charge_state_text),
        "FW" => {
            record.firmware_version = Some(format_firmware(value));
            FieldOutcome::Applied
        }
        "PID" => coded_field(&mut record.device_type, parse_auto_radix(value), device_type_text),
        "SER#" => {
            record.serial_number = Some(value.to_string());
            FieldOutcome::Applied
        }
        "HSDS" => int_field(&mut record.day_number, value, 1),
        "MPPT" => coded_field(&mut record.tracking_mode, parse_decimal(value), tracking_mode_text),
        "OR" => off_reason_field(&mut record.off_reason, value),
        _ => {
            debug!("Unhandled property: {label} : {value}");
            return FieldOutcome::Unrecognized;
        }
    };

    if outcome == FieldOutcome::Coerced {
        debug!("Non-numeric value for {label}: {value:?}, stored as 0");
    }
    outcome
}

fn int_field(slot: &mut Option<i32>, value: &str, scale: i32) -> FieldOutcome {
    match parse_decimal(value).map(clamp_i32) {
        Some(v) => {
            *slot = Some(v.saturating_mul(scale));
            FieldOutcome::Applied
        }
        None => {
            *slot = Some(0);
            FieldOutcome::Coerced
        }
    }
}

fn coded_field(
    slot: &mut Option<CodedText>,
    parsed: Option<i64>,
    resolve: fn(u32) -> &'static str,
) -> FieldOutcome {
    let (code, outcome) = match parsed {
        Some(code) => (code, FieldOutcome::Applied),
        None => (0, FieldOutcome::Coerced),
    };
    // Out-of-range codes keep their raw value and stay unmapped.
    let text = u32::try_from(code).map_or(VEDIRECT_UNKNOWN_TEXT, resolve);
    *slot = Some(CodedText::new(code, text));
    outcome
}

fn off_reason_field(slot: &mut Option<OffReason>, value: &str) -> FieldOutcome {
    let (mask, outcome) = match parse_auto_radix(value) {
        Some(mask) => (mask, FieldOutcome::Applied),
        None => (0, FieldOutcome::Coerced),
    };
    let reasons = match u32::try_from(mask) {
        Ok(bits) => off_reason_names(bits),
        Err(_) => vec![VEDIRECT_UNKNOWN_TEXT],
    };
    *slot = Some(OffReason { mask, reasons });
    outcome
}

fn clamp_i32(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Splits leading whitespace and an optional sign off `s`.
fn split_sign(s: &str) -> (bool, &str) {
    let s = s.trim_start();
    match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    }
}

/// Accumulates the leading digits of `digits` in `radix`.
/// Returns `None` if there is no leading digit.
fn leading_digits(digits: &str, radix: u32) -> Option<i64> {
    let mut value: i64 = 0;
    let mut seen = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(radix) else { break };
        value = value.saturating_mul(radix as i64).saturating_add(d as i64);
        seen = true;
    }
    seen.then_some(value)
}

/// Decimal integer prefix, `atoi` style: `" 12abc"` is 12, `"abc"` is `None`.
pub fn parse_decimal(s: &str) -> Option<i64> {
    let (negative, digits) = split_sign(s);
    leading_digits(digits, 10).map(|v| if negative { -v } else { v })
}

/// Integer prefix with the radix taken from the text, `strtol(.., 0)` style:
/// `0x`/`0X` is hexadecimal, a leading `0` octal, anything else decimal.
pub fn parse_auto_radix(s: &str) -> Option<i64> {
    let (negative, body) = split_sign(s);
    let hex = body
        .strip_prefix("0x")
        .or_else(|| body.strip_prefix("0X"))
        .and_then(|rest| leading_digits(rest, 16));
    let value = match hex {
        Some(v) => Some(v),
        None if body.starts_with('0') => leading_digits(body, 8),
        None => leading_digits(body, 10),
    };
    value.map(|v| if negative { -v } else { v })
}

/// Inserts a decimal point two characters from the end: `"150"` is `"1.50"`.
///
/// Values shorter than three characters are zero-padded first, so `"5"`
/// becomes `"0.05"`. An empty value stays empty.
pub fn format_firmware(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let count = raw.chars().count();
    let padded = if count < 3 {
        format!("{}{raw}", "0".repeat(3 - count))
    } else {
        raw.to_string()
    };
    let split = padded
        .char_indices()
        .rev()
        .nth(1)
        .map(|(idx, _)| idx)
        .unwrap_or(0);
    format!("{}.{}", &padded[..split], &padded[split..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_prefix() {
        assert_eq!(parse_decimal("12800"), Some(12800));
        assert_eq!(parse_decimal("-250"), Some(-250));
        assert_eq!(parse_decimal("  42"), Some(42));
        assert_eq!(parse_decimal("12abc"), Some(12));
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("-"), None);
    }

    #[test]
    fn test_parse_auto_radix() {
        assert_eq!(parse_auto_radix("0xA042"), Some(0xA042));
        assert_eq!(parse_auto_radix("0XA042"), Some(0xA042));
        assert_eq!(parse_auto_radix("0x"), Some(0));
        assert_eq!(parse_auto_radix("017"), Some(0o17));
        assert_eq!(parse_auto_radix("300"), Some(300));
        assert_eq!(parse_auto_radix("zz"), None);
    }

    #[test]
    fn test_format_firmware() {
        assert_eq!(format_firmware("150"), "1.50");
        assert_eq!(format_firmware("0159"), "01.59");
        assert_eq!(format_firmware("50"), "0.50");
        assert_eq!(format_firmware("5"), "0.05");
        assert_eq!(format_firmware(""), "");
    }

    #[test]
    fn test_empty_label_is_malformed() {
        let mut record = Snapshot::default();
        assert_eq!(apply_field(&mut record, b"", b"12"), FieldOutcome::Malformed);
        assert_eq!(record, Snapshot::default());
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let mut record = Snapshot::default();
        assert_eq!(
            apply_field(&mut record, b"SER#", &[0xFF, 0xFE]),
            FieldOutcome::Malformed
        );
        assert_eq!(record.serial_number, None);
    }

    #[test]
    fn test_coerced_numeric_is_zero() {
        let mut record = Snapshot::default();
        assert_eq!(apply_field(&mut record, b"V", b"--"), FieldOutcome::Coerced);
        assert_eq!(record.battery_voltage_mv, Some(0));
    }

    #[test]
    fn test_out_of_range_code_is_unknown() {
        let mut record = Snapshot::default();
        assert_eq!(apply_field(&mut record, b"ERR", b"4294967298"), FieldOutcome::Applied);
        assert_eq!(record.error, Some(CodedText::new(4_294_967_298, "Unknown")));
    }

    #[test]
    fn test_yield_scaling_saturates() {
        let mut record = Snapshot::default();
        apply_field(&mut record, b"H19", b"999999999999");
        assert_eq!(record.yield_total, Some(i32::MAX));
    }
}

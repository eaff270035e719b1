//! Parsing human-readable byte quantities such as `"5 GiB"`.

use super::units::ByteUnit;
use crate::error::{NumbaError, Result};

/// Largest `f64` strictly above every `i64`, i.e. `2^63`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Splits a byte string into its numeric run and its unit run.
///
/// The numeric run is the leading digits and decimal points. Everything after
/// it is the unit run, with whitespace removed, so any amount of whitespace
/// between the two parts is accepted. Whitespace inside the number ends it.
///
/// # Examples
///
/// ```
/// use libnumba::bytes::split_byte_string;
///
/// assert_eq!(split_byte_string("10MB"), ("10".to_string(), "MB".to_string()));
/// assert_eq!(split_byte_string("5 GiB"), ("5".to_string(), "GiB".to_string()));
/// ```
pub fn split_byte_string(s: &str) -> (String, String) {
    let s = s.trim_start();
    let end = s
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(s.len());
    let (number, rest) = s.split_at(end);
    let units = rest.chars().filter(|c| !c.is_whitespace()).collect();

    (number.to_string(), units)
}

/// Parses a human-readable quantity of bytes into a raw byte count.
///
/// The unit is required and matched case-sensitively against the SI and IEC
/// tables, so `"1Kb"` (kilobits) is rejected.
///
/// # Examples
///
/// ```
/// use libnumba::parse_bytes_float;
///
/// assert_eq!(parse_bytes_float("1.5KiB").unwrap(), 1536.0);
/// assert!(parse_bytes_float("1.5").is_err());
/// ```
pub fn parse_bytes_float(s: &str) -> Result<f64> {
    let (number, units) = split_byte_string(s);

    let value: f64 = number.parse().map_err(|e| {
        log::debug!("byte string {s:?} has no valid number: {e}");
        NumbaError::invalid_number(number.as_str(), e)
    })?;

    if units.is_empty() {
        log::debug!("byte string {s:?} has no units");
        return Err(NumbaError::missing_units(s));
    }

    match ByteUnit::lookup(&units) {
        Some(unit) => Ok(value * unit.factor),
        None => {
            log::debug!("byte string {s:?} has unknown units {units:?}");
            Err(NumbaError::unrecognized_units(units))
        }
    }
}

/// Parses a human-readable quantity of bytes into an `i64`.
///
/// Fractional bytes are truncated. Quantities that do not fit into an `i64`
/// are rejected with [`NumbaError::OutOfRange`].
///
/// # Examples
///
/// ```
/// use libnumba::parse_bytes;
///
/// assert_eq!(parse_bytes("6GiB").unwrap(), 6 * 1024 * 1024 * 1024);
/// assert!(parse_bytes("1ZB").is_err());
/// ```
pub fn parse_bytes(s: &str) -> Result<i64> {
    let value = parse_bytes_float(s)?;
    if value >= I64_LIMIT {
        log::debug!("byte string {s:?} overflows i64: {value}");
        return Err(NumbaError::out_of_range(value));
    }

    Ok(value as i64)
}

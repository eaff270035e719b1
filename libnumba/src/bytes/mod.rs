//! Byte quantities in SI and IEC units.
//!
//! Formatting scales a byte count to the largest unit that fits and prints
//! it with a fixed number of decimals. Parsing goes the other way, from
//! `"5 GiB"` back to a byte count.

use crate::error::NumbaError;
use serde::{Deserialize, Serialize};

mod parse;
mod units;

#[cfg(test)]
mod tests;

pub use parse::{parse_bytes, parse_bytes_float, split_byte_string};
pub use units::*;

/// Returned by [`format_bytes`] in place of a size when the base is not 2 or 10.
pub const BAD_BASE: &str = "%!(BADBASE)";

/// Returned in place of a size when the precision exceeds [`MAX_PRECISION`].
pub const BAD_PREC: &str = "%!(BADPREC)";

/// Largest precision the formatter accepts.
pub const MAX_PRECISION: usize = u16::MAX as usize;

/// Unit family used when formatting bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Base {
    /// Powers of 1024 (KiB, MiB, ...)
    #[default]
    Binary,
    /// Powers of 1000 (KB, MB, ...)
    Decimal,
}

impl Base {
    /// The numeric base, 2 or 10.
    pub fn radix(self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Decimal => 10,
        }
    }

    /// Unit table for this family, smallest first.
    pub fn units(self) -> &'static [ByteUnit] {
        match self {
            Self::Binary => &BINARY_UNITS,
            Self::Decimal => &DECIMAL_UNITS,
        }
    }
}

impl TryFrom<u32> for Base {
    type Error = NumbaError;

    fn try_from(base: u32) -> Result<Self, Self::Error> {
        match base {
            2 => Ok(Self::Binary),
            10 => Ok(Self::Decimal),
            other => Err(NumbaError::invalid_base(other)),
        }
    }
}

impl From<Base> for u32 {
    fn from(base: Base) -> Self {
        base.radix()
    }
}

/// Formats a byte count in base 2 (IEC) or base 10 (SI) units with
/// `precision` digits after the decimal point.
///
/// Any other base yields [`BAD_BASE`] instead of a size. Use
/// [`format_bytes_in`] with a [`Base`] to rule that out at compile time.
///
/// # Examples
///
/// ```
/// use libnumba::format_bytes;
///
/// assert_eq!(format_bytes(1024 * 1024, 2, 2), "1.00MiB");
/// assert_eq!(format_bytes(2_000_000_000, 10, 2), "2.00GB");
/// assert_eq!(format_bytes(1024, 7, 0), "%!(BADBASE)");
/// ```
pub fn format_bytes(bytes: i64, base: u32, precision: usize) -> String {
    match Base::try_from(base) {
        Ok(base) => format_bytes_in(bytes, base, precision),
        Err(_) => BAD_BASE.to_string(),
    }
}

/// Formats a byte count in the given unit family.
///
/// The value is divided by the largest unit not exceeding it. Counts below
/// the smallest unit are printed as plain bytes with the symbol `B`. Ties at
/// the last printed decimal round to even. A precision above
/// [`MAX_PRECISION`] yields [`BAD_PREC`].
///
/// # Examples
///
/// ```
/// use libnumba::bytes::{Base, format_bytes_in};
///
/// assert_eq!(format_bytes_in(52_428_800, Base::Binary, 0), "50MiB");
/// assert_eq!(format_bytes_in(512, Base::Decimal, 1), "512.0B");
/// ```
pub fn format_bytes_in(bytes: i64, base: Base, precision: usize) -> String {
    if precision > MAX_PRECISION {
        return BAD_PREC.to_string();
    }

    let value = bytes as f64;
    let (scaled, symbol) = base
        .units()
        .iter()
        .rev()
        .find(|unit| value >= unit.factor)
        .map_or((value, "B"), |unit| (value / unit.factor, unit.symbol));

    format!("{scaled:.precision$}{symbol}")
}

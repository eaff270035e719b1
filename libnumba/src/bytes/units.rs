//! Byte unit tables.
//!
//! Decimal (SI) units scale by powers of 1000, binary (IEC) units by powers
//! of 1024. Symbols are case-sensitive: an upper-case `B` is a byte, a
//! lower-case `b` would be a bit and is never matched.
//!
//! - <http://physics.nist.gov/cuu/Units/binary.html>
//! - <http://physics.nist.gov/cuu/Units/prefixes.html>

/// A single byte unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ByteUnit {
    pub symbol: &'static str,
    pub factor: f64,
}

impl ByteUnit {
    const fn new(symbol: &'static str, factor: f64) -> Self {
        Self { symbol, factor }
    }

    /// Looks up a unit by its exact symbol in both families.
    ///
    /// # Examples
    ///
    /// ```
    /// use libnumba::bytes::ByteUnit;
    ///
    /// assert_eq!(ByteUnit::lookup("KiB").map(|u| u.factor), Some(1024.0));
    /// assert!(ByteUnit::lookup("Kb").is_none());
    /// ```
    pub fn lookup(symbol: &str) -> Option<&'static ByteUnit> {
        DECIMAL_UNITS
            .iter()
            .chain(BINARY_UNITS.iter())
            .find(|unit| unit.symbol == symbol)
    }
}

pub const BYTE: f64 = 1.0;

pub const KB: f64 = 1000.0 * BYTE;
pub const MB: f64 = 1000.0 * KB;
pub const GB: f64 = 1000.0 * MB;
pub const TB: f64 = 1000.0 * GB;
pub const PB: f64 = 1000.0 * TB;
pub const EB: f64 = 1000.0 * PB;
pub const ZB: f64 = 1000.0 * EB;
pub const YB: f64 = 1000.0 * ZB;

pub const KIB: f64 = 1024.0 * BYTE;
pub const MIB: f64 = 1024.0 * KIB;
pub const GIB: f64 = 1024.0 * MIB;
pub const TIB: f64 = 1024.0 * GIB;
pub const PIB: f64 = 1024.0 * TIB;
pub const EIB: f64 = 1024.0 * PIB;
pub const ZIB: f64 = 1024.0 * EIB;
pub const YIB: f64 = 1024.0 * ZIB;

/// SI units, smallest first.
pub const DECIMAL_UNITS: [ByteUnit; 8] = [
    ByteUnit::new("KB", KB),
    ByteUnit::new("MB", MB),
    ByteUnit::new("GB", GB),
    ByteUnit::new("TB", TB),
    ByteUnit::new("PB", PB),
    ByteUnit::new("EB", EB),
    ByteUnit::new("ZB", ZB),
    ByteUnit::new("YB", YB),
];

/// IEC units, smallest first.
pub const BINARY_UNITS: [ByteUnit; 8] = [
    ByteUnit::new("KiB", KIB),
    ByteUnit::new("MiB", MIB),
    ByteUnit::new("GiB", GIB),
    ByteUnit::new("TiB", TIB),
    ByteUnit::new("PiB", PIB),
    ByteUnit::new("EiB", EIB),
    ByteUnit::new("ZiB", ZIB),
    ByteUnit::new("YiB", YIB),
];

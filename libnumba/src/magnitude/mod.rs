//! Abbreviated magnitudes for large integers.
//!
//! Turns `1500000` into `"1.5M"` or `"1.5 million"`. Values with three or
//! fewer digits, zero and negative values are returned unchanged.


/// One power-of-1000 step in the magnitude table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagnitudeUnit {
    /// Short suffix, e.g. `K`.
    pub abbreviation: &'static str,
    /// Lowercase English word, e.g. `thousand`.
    pub word: &'static str,
}

impl MagnitudeUnit {
    const fn new(abbreviation: &'static str, word: &'static str) -> Self {
        Self { abbreviation, word }
    }
}

/// Magnitude units in ascending order. Index `i` stands for `10^(3 * (i + 1))`.
pub const MAGNITUDE_UNITS: [MagnitudeUnit; 8] = [
    MagnitudeUnit::new("K", "thousand"),
    MagnitudeUnit::new("M", "million"),
    MagnitudeUnit::new("B", "billion"),
    MagnitudeUnit::new("T", "trillion"),
    MagnitudeUnit::new("P", "quadrillion"),
    MagnitudeUnit::new("E", "quintillion"),
    MagnitudeUnit::new("Z", "sextillion"),
    MagnitudeUnit::new("Y", "septillion"),
];

/// Picks the unit for `n` and returns it with the scaled, rounded value.
///
/// The bucket comes from the digit count (`digits / 3 - 1`) and the value is
/// `n` shifted down to its leading digit, rounded half-up to one decimal.
fn scale(n: i64) -> Option<(String, &'static MagnitudeUnit)> {
    if n <= 0 {
        return None;
    }

    let digits = n.to_string().len();
    if digits <= 3 {
        return None;
    }

    let idx = digits / 3 - 1;
    // i64 tops out at 19 digits (index 5), inside the table
    let unit = MAGNITUDE_UNITS.get(idx)?;

    let shifted = n as f64 / 10f64.powi(digits as i32 - 1);
    let rounded = (shifted * 10.0 + 0.5).floor() / 10.0;

    // f64 Display drops a trailing ".0"
    Some((rounded.to_string(), unit))
}

/// Formats `n` with an abbreviated magnitude suffix.
///
/// # Examples
///
/// ```
/// use libnumba::abbreviate;
///
/// assert_eq!(abbreviate(999), "999");
/// assert_eq!(abbreviate(1000), "1K");
/// assert_eq!(abbreviate(1_500_000), "1.5M");
/// assert_eq!(abbreviate(-5000), "-5000");
/// ```
pub fn abbreviate(n: i64) -> String {
    match scale(n) {
        Some((value, unit)) => format!("{value}{}", unit.abbreviation),
        None => n.to_string(),
    }
}

/// Formats `n` with its magnitude spelled out as a word.
///
/// # Examples
///
/// ```
/// use libnumba::word;
///
/// assert_eq!(word(1000), "1 thousand");
/// assert_eq!(word(1_500_000_000), "1.5 billion");
/// assert_eq!(word(42), "42");
/// ```
pub fn word(n: i64) -> String {
    match scale(n) {
        Some((value, unit)) => format!("{value} {}", unit.word),
        None => n.to_string(),
    }
}

//! English ordinal suffixes ("1st", "2nd", "11th").


const TH: &str = "th";
const ST: &str = "st";
const ND: &str = "nd";
const RD: &str = "rd";

/// Formats `n` followed by its ordinal suffix.
///
/// # Examples
///
/// ```
/// use libnumba::ordinal;
///
/// assert_eq!(ordinal(0), "0th");
/// assert_eq!(ordinal(11), "11th");
/// assert_eq!(ordinal(101), "101st");
/// ```
pub fn ordinal(n: i64) -> String {
    format!("{n}{}", ordinal_suffix(n))
}

/// Returns the ordinal suffix for `n`.
///
/// Residues use flooring (Euclidean) modulo, so negative values get the
/// suffix of `n mod 100` taken in `0..100`: `-1` ends in `99` and gets "th",
/// `-9` ends in `91` and gets "st".
pub fn ordinal_suffix(n: i64) -> &'static str {
    match n.rem_euclid(100) {
        11..=13 => TH,
        _ => match n.rem_euclid(10) {
            1 => ST,
            2 => ND,
            3 => RD,
            _ => TH,
        },
    }
}

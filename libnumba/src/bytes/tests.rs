use super::*;
use rstest::rstest;

#[rstest]
#[case::kilobyte(1000, 10, 0, "1KB")]
#[case::kilobyte_binary_count(1024, 10, 2, "1.02KB")]
#[case::kibibyte(1024, 2, 1, "1.0KiB")]
#[case::modem_second(56_000, 10, 2, "56.00KB")]
#[case::floppy_disk(1_024_000, 2, 2, "1000.00KiB")]
#[case::cd_file(52_428_800, 2, 0, "50MiB")]
#[case::dvd_file(1_300_000_000, 2, 2, "1.21GiB")]
#[case::hard_disk(300_000_000_000, 10, 1, "300.0GB")]
#[case::ram(8_589_934_592, 2, 2, "8.00GiB")]
fn test_format_bytes(
    #[case] bytes: i64,
    #[case] base: u32,
    #[case] precision: usize,
    #[case] expected: &str,
) {
    assert_eq!(format_bytes(bytes, base, precision), expected);
}

#[rstest]
#[case(0, Base::Binary, 0, "0B")]
#[case(1023, Base::Binary, 0, "1023B")]
#[case(999, Base::Decimal, 1, "999.0B")]
#[case(1024, Base::Binary, 0, "1KiB")]
#[case(1_000_000, Base::Decimal, 3, "1.000MB")]
fn test_format_bytes_below_and_at_unit_boundary(
    #[case] bytes: i64,
    #[case] base: Base,
    #[case] precision: usize,
    #[case] expected: &str,
) {
    assert_eq!(format_bytes_in(bytes, base, precision), expected);
}

#[rstest]
#[case::two_and_a_half(2560, 0, "2KiB")]
#[case::three_and_a_half(3584, 0, "4KiB")]
#[case::one_and_an_eighth(1152, 2, "1.12KiB")]
#[case::one_and_three_eighths(1408, 2, "1.38KiB")]
fn test_format_bytes_ties_round_to_even(
    #[case] bytes: i64,
    #[case] precision: usize,
    #[case] expected: &str,
) {
    assert_eq!(format_bytes_in(bytes, Base::Binary, precision), expected);
}

#[rstest]
#[case::at_limit(MAX_PRECISION, false)]
#[case::over_limit(MAX_PRECISION + 1, true)]
#[case::far_over_limit(70_000, true)]
fn test_format_bytes_precision_limit(#[case] precision: usize, #[case] rejected: bool) {
    for base in [2, 10] {
        let formatted = format_bytes(1024, base, precision);
        assert_eq!(formatted == BAD_PREC, rejected);
        if !rejected {
            let decimals = formatted.split('.').nth(1).unwrap();
            assert_eq!(decimals.trim_end_matches(char::is_alphabetic).len(), precision);
        }
    }
    assert_eq!(BAD_PREC, "%!(BADPREC)");
}

#[test]
fn test_bad_base_checked_before_precision() {
    assert_eq!(format_bytes(1024, 7, MAX_PRECISION + 1), BAD_BASE);
}

#[test]
fn test_format_bytes_largest_i64() {
    assert_eq!(format_bytes(i64::MAX, 2, 2), "8.00EiB");
    assert_eq!(format_bytes(i64::MAX, 10, 2), "9.22EB");
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(3)]
#[case(7)]
#[case(16)]
fn test_format_bytes_bad_base(#[case] base: u32) {
    for bytes in [0, 1024, 52_428_800] {
        assert_eq!(format_bytes(bytes, base, 0), BAD_BASE);
    }
    assert_eq!(BAD_BASE, "%!(BADBASE)");
}

#[test]
fn test_base_try_from() {
    assert_eq!(Base::try_from(2).unwrap(), Base::Binary);
    assert_eq!(Base::try_from(10).unwrap(), Base::Decimal);
    assert!(matches!(
        Base::try_from(8),
        Err(NumbaError::InvalidBase { base: 8 })
    ));
}

#[test]
fn test_base_radix_round_trips() {
    for base in [Base::Binary, Base::Decimal] {
        assert_eq!(Base::try_from(base.radix()).unwrap(), base);
        assert_eq!(u32::from(base), base.radix());
    }
}

#[test]
fn test_base_serde_as_number() {
    assert_eq!(serde_json::to_string(&Base::Decimal).unwrap(), "10");
    assert_eq!(serde_json::from_str::<Base>("2").unwrap(), Base::Binary);
    assert!(serde_json::from_str::<Base>("16").is_err());
}

#[test]
fn test_unit_tables_strictly_increasing() {
    for units in [&DECIMAL_UNITS, &BINARY_UNITS] {
        assert!(units.windows(2).all(|w| w[0].factor < w[1].factor));
    }
    assert_eq!(DECIMAL_UNITS[0].factor, 1000.0);
    assert_eq!(BINARY_UNITS[0].factor, 1024.0);
    assert_eq!(BINARY_UNITS[7].factor, 2f64.powi(80));
}

#[test]
fn test_unit_symbols() {
    let decimal: Vec<_> = DECIMAL_UNITS.iter().map(|u| u.symbol).collect();
    let binary: Vec<_> = BINARY_UNITS.iter().map(|u| u.symbol).collect();

    assert_eq!(decimal, ["KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"]);
    assert_eq!(binary, ["KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB", "YiB"]);
}

#[test]
fn test_lookup_is_case_sensitive() {
    assert_eq!(ByteUnit::lookup("MB").unwrap().factor, MB);
    assert_eq!(ByteUnit::lookup("MiB").unwrap().factor, MIB);
    assert!(ByteUnit::lookup("mb").is_none());
    assert!(ByteUnit::lookup("Mb").is_none());
    assert!(ByteUnit::lookup("MIB").is_none());
    assert!(ByteUnit::lookup("B").is_none());
}

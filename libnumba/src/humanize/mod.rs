//! Extension trait for calling the formatters as methods on integers.

use crate::bytes::{Base, format_bytes_in};
use crate::{magnitude, ordinal};


/// Human-readable formatting for integer values.
///
/// # Examples
///
/// ```
/// use libnumba::Humanize;
///
/// assert_eq!(1500_i64.abbreviate(), "1.5K");
/// assert_eq!(2_000_000u32.word(), "2 million");
/// assert_eq!(22u8.ordinal(), "22nd");
/// assert_eq!(52_428_800_i64.binary_size(0), "50MiB");
/// ```
pub trait Humanize {
    /// See [`abbreviate`](crate::abbreviate).
    fn abbreviate(self) -> String;

    /// See [`word`](crate::word).
    fn word(self) -> String;

    /// See [`ordinal`](crate::ordinal).
    fn ordinal(self) -> String;

    /// Byte size in IEC units (KiB, MiB, ...).
    fn binary_size(self, precision: usize) -> String;

    /// Byte size in SI units (KB, MB, ...).
    fn decimal_size(self, precision: usize) -> String;
}

macro_rules! impl_humanize {
    ($($ty:ty),*) => {
        $(
            impl Humanize for $ty {
                fn abbreviate(self) -> String {
                    magnitude::abbreviate(i64::from(self))
                }

                fn word(self) -> String {
                    magnitude::word(i64::from(self))
                }

                fn ordinal(self) -> String {
                    ordinal::ordinal(i64::from(self))
                }

                fn binary_size(self, precision: usize) -> String {
                    format_bytes_in(i64::from(self), Base::Binary, precision)
                }

                fn decimal_size(self, precision: usize) -> String {
                    format_bytes_in(i64::from(self), Base::Decimal, precision)
                }
            }
        )*
    };
}

impl_humanize!(i8, i16, i32, i64, u8, u16, u32);

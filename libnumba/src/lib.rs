//! Numba - Human-Readable Number Formatting
//!
//! Numba turns raw numbers into compact display strings for CLIs,
//! dashboards and logs, and parses byte sizes back into numbers.
//!
//! # Quick Start
//!
//! ```
//! use libnumba::{abbreviate, format_bytes, ordinal, parse_bytes, word};
//!
//! assert_eq!(abbreviate(1_500_000), "1.5M");
//! assert_eq!(word(1_500_000_000), "1.5 billion");
//! assert_eq!(format_bytes(52_428_800, 2, 0), "50MiB");
//! assert_eq!(parse_bytes("5 GiB").unwrap(), 5 * 1024 * 1024 * 1024);
//! assert_eq!(ordinal(101), "101st");
//! ```
//!
//! # Features
//!
//! - **Magnitudes**: `1K`, `1.5M`, `2 billion` up to septillions
//! - **Byte sizes**: SI (`KB`, `MB`) and IEC (`KiB`, `MiB`) units with fixed precision
//! - **Byte parsing**: `"6GiB"` back to `6442450944`
//! - **Ordinals**: `1st`, `2nd`, `11th`, `101st`
//!
//! Every function is pure and works on static tables only, so all of them
//! can be called from any thread without synchronization.
//!
//! # Main Types
//!
//! - [`Humanize`] - Extension trait exposing the formatters as methods
//! - [`Base`] - Unit family for byte formatting
//! - [`Config`] - Formatting defaults loaded from YAML
//! - [`NumbaError`] - Errors from parsing and configuration

#![warn(clippy::all)]

/// Returns the libnumba crate version.
///
/// # Examples
///
/// ```
/// let version = libnumba::version();
/// assert!(!version.is_empty());
/// ```
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// Re-export commonly used items for convenience
pub use bytes::{Base, format_bytes, format_bytes_in, parse_bytes, parse_bytes_float};
pub use crate::config::Config;
pub use error::{NumbaError, Result};
pub use humanize::Humanize;
pub use magnitude::{abbreviate, word};
pub use ordinal::{ordinal, ordinal_suffix};

pub mod bytes;
pub mod config;
pub mod error;
pub mod humanize;
pub mod magnitude;
pub mod ordinal;

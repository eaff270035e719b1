//! Basic usage example for the numba library.
//!
//! Run with: cargo run --example basic_usage

use libnumba::{Config, Humanize, abbreviate, format_bytes, ordinal, parse_bytes, word};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Numba Library - Basic Usage Example\n");

    for n in [42_i64, 1_500, 2_300_000, 7_000_000_000] {
        println!("{n:>12} -> {:<6} {}", abbreviate(n), word(n));
    }
    println!();

    for (bytes, base) in [(1_024_000, 2), (1_300_000_000, 2), (300_000_000_000, 10)] {
        println!("{bytes:>14} bytes (base {base:>2}) -> {}", format_bytes(bytes, base, 2));
    }
    println!();

    for input in ["5 GiB", "10MB", "1Kb"] {
        match parse_bytes(input) {
            Ok(bytes) => println!("{input:>8} -> {bytes} bytes"),
            Err(e) => eprintln!("{input:>8} -> ✗ {e}"),
        }
    }
    println!();

    let places: Vec<String> = (1..=4_i64).chain([11, 101]).map(ordinal).collect();
    println!("Places: {}", places.join(", "));

    let config = Config::from_yaml_str("bytes: { base: 10, precision: 1 }")?;
    println!("Configured: {}", config.format_bytes(56_000));
    println!("Trait: {}", 52_428_800_i64.binary_size(0));

    Ok(())
}

//! Formatting defaults.
//!
//! Holds the defaults used when formatting without explicit arguments,
//! built from serde defaults merged with an optional YAML document.

use crate::bytes::{Base, MAX_PRECISION, format_bytes_in};
use crate::error::{NumbaError, Result};
use config::{Config as ConfigRs, File, FileFormat};
use serde::{Deserialize, Serialize};


/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub bytes: Bytes,
}

impl Config {
    /// Parses a `Config` from a YAML string, filling gaps with defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use libnumba::Config;
    /// use libnumba::bytes::Base;
    ///
    /// let config = Config::from_yaml_str("bytes: { base: 10 }").unwrap();
    /// assert_eq!(config.bytes.base, Base::Decimal);
    /// assert_eq!(config.bytes.precision, 2);
    /// ```
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let defaults = ConfigRs::try_from(&Config::default()).map_err(|e| {
            NumbaError::config_with_source("Failed to serialize default configuration", e)
        })?;

        let builder = ConfigRs::builder()
            // Add default values
            .add_source(defaults)
            // Merge with YAML string
            .add_source(File::from_str(s, FileFormat::Yaml));

        log::trace!("building configuration from {} bytes of YAML", s.len());
        Self::from_builder(builder)
    }

    /// Creates a `Config` from a `config::ConfigBuilder`.
    fn from_builder(builder: config::ConfigBuilder<config::builder::DefaultState>) -> Result<Self> {
        let config: Self = builder
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(|e| NumbaError::config_with_source("Failed to deserialize configuration", e))?;

        config.validate()?;
        Ok(config)
    }

    /// Rejects values the formatters cannot honour.
    fn validate(&self) -> Result<()> {
        if self.bytes.precision > MAX_PRECISION {
            return Err(NumbaError::config(format!(
                "bytes.precision {} exceeds the maximum of {MAX_PRECISION}",
                self.bytes.precision
            )));
        }
        Ok(())
    }

    /// Formats a byte count with the configured base and precision.
    ///
    /// # Examples
    ///
    /// ```
    /// use libnumba::Config;
    ///
    /// assert_eq!(Config::default().format_bytes(1536), "1.50KiB");
    /// ```
    pub fn format_bytes(&self, bytes: i64) -> String {
        format_bytes_in(bytes, self.bytes.base, self.bytes.precision)
    }
}

/// Byte formatting settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bytes {
    #[serde(default)]
    pub base: Base,

    #[serde(default = "default_bytes_precision")]
    pub precision: usize,
}

impl Default for Bytes {
    fn default() -> Self {
        Self {
            base: Base::default(),
            precision: default_bytes_precision(),
        }
    }
}

fn default_bytes_precision() -> usize {
    2
}

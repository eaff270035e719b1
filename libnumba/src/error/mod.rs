//! Error types for numba
//!
//! Formatting never fails: the formatters degrade to plain output instead.
//! Errors only come out of the byte-string parser, the typed [`Base`]
//! conversion and configuration loading.
//!
//! [`Base`]: crate::bytes::Base

use std::num::ParseFloatError;
use thiserror::Error;


/// Main error type for numba operations
#[derive(Error, Debug)]
pub enum NumbaError {
    /// The leading numeric run of a byte string is not a number
    #[error("invalid number {input:?}: {source}")]
    InvalidNumber {
        input: String,
        #[source]
        source: ParseFloatError,
    },

    /// A byte string carried no unit symbol after the number
    #[error("no units found in {input:?}")]
    MissingUnits { input: String },

    /// The unit symbol is not one of the known byte units
    #[error("unrecognized units {units}")]
    UnrecognizedUnits { units: String },

    /// The parsed byte count does not fit into an `i64`
    #[error("value too large for int64: {value}")]
    OutOfRange { value: f64 },

    /// A byte base other than 2 or 10 was requested
    #[error("unsupported base {base}, expected 2 or 10")]
    InvalidBase { base: u32 },

    /// Configuration errors (malformed YAML, unsupported values)
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for numba operations
pub type Result<T> = std::result::Result<T, NumbaError>;

impl NumbaError {
    /// Creates a new invalid number error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libnumba::error::NumbaError;
    ///
    /// let source = "1.2.3".parse::<f64>().unwrap_err();
    /// let err = NumbaError::invalid_number("1.2.3", source);
    /// assert!(matches!(err, NumbaError::InvalidNumber { .. }));
    /// ```
    pub fn invalid_number<S: Into<String>>(input: S, source: ParseFloatError) -> Self {
        Self::InvalidNumber {
            input: input.into(),
            source,
        }
    }

    /// Creates a new missing units error.
    pub fn missing_units<S: Into<String>>(input: S) -> Self {
        Self::MissingUnits {
            input: input.into(),
        }
    }

    /// Creates a new unrecognized units error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libnumba::error::NumbaError;
    ///
    /// let err = NumbaError::unrecognized_units("Kb");
    /// assert_eq!(err.to_string(), "unrecognized units Kb");
    /// ```
    pub fn unrecognized_units<S: Into<String>>(units: S) -> Self {
        Self::UnrecognizedUnits {
            units: units.into(),
        }
    }

    /// Creates a new out of range error.
    pub fn out_of_range(value: f64) -> Self {
        Self::OutOfRange { value }
    }

    /// Creates a new invalid base error.
    pub fn invalid_base(base: u32) -> Self {
        Self::InvalidBase { base }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new configuration error with a source error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libnumba::error::NumbaError;
    /// use std::io;
    ///
    /// let io_err = io::Error::new(io::ErrorKind::InvalidData, "bad yaml");
    /// let err = NumbaError::config_with_source("failed to read config", io_err);
    /// assert!(matches!(err, NumbaError::Config { .. }));
    /// ```
    pub fn config_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if the error came out of the byte-string parser.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidNumber { .. }
                | Self::MissingUnits { .. }
                | Self::UnrecognizedUnits { .. }
                | Self::OutOfRange { .. }
        )
    }
}

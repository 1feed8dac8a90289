//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

use crate::core::color::ColorError;

/// Where an unconvertible value was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSlot {
    /// 0-based position in the sample sequence.
    Sample(usize),
    Minimum,
    Maximum,
}

/// A sample or bound that is not a finite number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueError {
    pub slot: ValueSlot,
    pub text: String,
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot {
            ValueSlot::Sample(i) => write!(f, "sample {i}: {} is not a number", self.text),
            ValueSlot::Minimum => write!(f, "minimum {} is not a number", self.text),
            ValueSlot::Maximum => write!(f, "maximum {} is not a number", self.text),
        }
    }
}
impl Error for ValueError {}

/// The input source could not be read as a sequence of samples.
#[derive(Debug)]
pub enum InputError {
    Io(io::Error),
    NotText { line: usize },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Io(e) => write!(f, "cannot read samples: {e}"),
            InputError::NotText { line } => write!(f, "line {line}: input is not UTF-8 text"),
        }
    }
}
impl Error for InputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            InputError::Io(e) => Some(e),
            InputError::NotText { .. } => None,
        }
    }
}

/// Precise configuration faults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroWidth,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroWidth => f.write_str("width must be at least 1"),
        }
    }
}
impl Error for ConfigError {}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum SparkError {
    InvalidInput(InputError),
    InvalidValue(ValueError),
    Color(ColorError),
    Config(ConfigError),
    Io(io::Error),
}

impl fmt::Display for SparkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SparkError::InvalidInput(e) => write!(f, "{e}"),
            SparkError::InvalidValue(e) => write!(f, "{e}"),
            SparkError::Color(e) => write!(f, "{e}"),
            SparkError::Config(e) => write!(f, "{e}"),
            SparkError::Io(e) => write!(f, "{e}"),
        }
    }
}
impl Error for SparkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SparkError::InvalidInput(e) => Some(e),
            SparkError::InvalidValue(e) => Some(e),
            SparkError::Color(e) => Some(e),
            SparkError::Config(e) => Some(e),
            SparkError::Io(e) => Some(e),
        }
    }
}

// automatic conversions
impl From<io::Error> for SparkError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<InputError> for SparkError {
    fn from(e: InputError) -> Self {
        Self::InvalidInput(e)
    }
}
impl From<ValueError> for SparkError {
    fn from(e: ValueError) -> Self {
        Self::InvalidValue(e)
    }
}
impl From<ColorError> for SparkError {
    fn from(e: ColorError) -> Self {
        Self::Color(e)
    }
}
impl From<ConfigError> for SparkError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_names_the_offending_text() {
        let e = SparkError::from(ValueError {
            slot: ValueSlot::Sample(1),
            text: "\"x\"".into(),
        });
        assert_eq!(e.to_string(), "sample 1: \"x\" is not a number");
    }

    #[test]
    fn bound_errors_name_the_bound() {
        let e = ValueError {
            slot: ValueSlot::Maximum,
            text: "NaN".into(),
        };
        assert_eq!(e.to_string(), "maximum NaN is not a number");
    }

    #[test]
    fn io_failure_keeps_its_source() {
        let e = SparkError::from(InputError::Io(io::Error::other("boom")));
        assert!(e.source().is_some());
        assert!(e.to_string().contains("boom"));
    }
}

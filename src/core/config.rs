//! Run-time configuration object + fluent builder.

use crate::core::{
    color::{AnsiCode, ColorError},
    data::{Sample, convert},
    error::{ConfigError, SparkError, ValueError, ValueSlot},
};

/// Immutable parameters handed to the renderer.
///
/// Only obtainable through [`ConfigBuilder::build`], so bounds are always
/// finite.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    minimum: Option<f64>,
    maximum: Option<f64>,
    color: Option<AnsiCode>,
    width: Option<usize>,
}

impl Config {
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Widens the range downwards; never clips.
    #[inline]
    #[must_use]
    pub fn minimum(&self) -> Option<f64> {
        self.minimum
    }
    /// Widens the range upwards; never clips.
    #[inline]
    #[must_use]
    pub fn maximum(&self) -> Option<f64> {
        self.maximum
    }
    #[inline]
    #[must_use]
    pub fn color(&self) -> Option<&AnsiCode> {
        self.color.as_ref()
    }
    /// Keep only the most recent `width` samples.
    #[inline]
    #[must_use]
    pub fn width(&self) -> Option<usize> {
        self.width
    }
}

/// Fluent builder; conversion failures surface from `build`.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    minimum: Option<Result<f64, ValueError>>,
    maximum: Option<Result<f64, ValueError>>,
    color: Option<Result<AnsiCode, ColorError>>,
    width: Option<usize>,
}

impl ConfigBuilder {
    #[inline]
    #[must_use]
    pub fn minimum<S: Sample + ?Sized>(mut self, v: &S) -> Self {
        self.minimum = Some(convert(v, ValueSlot::Minimum));
        self
    }
    #[inline]
    #[must_use]
    pub fn maximum<S: Sample + ?Sized>(mut self, v: &S) -> Self {
        self.maximum = Some(convert(v, ValueSlot::Maximum));
        self
    }
    #[inline]
    #[must_use]
    pub fn minimum_opt<S: Sample>(self, v: Option<&S>) -> Self {
        match v {
            Some(v) => self.minimum(v),
            None => self,
        }
    }
    #[inline]
    #[must_use]
    pub fn maximum_opt<S: Sample>(self, v: Option<&S>) -> Self {
        match v {
            Some(v) => self.maximum(v),
            None => self,
        }
    }
    /// Colour name or `#RRGGBB`.
    #[inline]
    #[must_use]
    pub fn color(mut self, name: &str) -> Self {
        self.color = Some(AnsiCode::from_name(name));
        self
    }
    #[inline]
    #[must_use]
    pub fn ansi(mut self, code: AnsiCode) -> Self {
        self.color = Some(Ok(code));
        self
    }
    #[inline]
    #[must_use]
    pub fn width(mut self, w: usize) -> Self {
        self.width = Some(w);
        self
    }

    /// # Errors
    /// * [`SparkError::InvalidValue`] for a bound that is not a finite number.
    /// * [`SparkError::Color`] for an unknown colour.
    /// * [`SparkError::Config`] for a zero width.
    pub fn build(self) -> Result<Config, SparkError> {
        if self.width == Some(0) {
            return Err(ConfigError::ZeroWidth.into());
        }
        Ok(Config {
            minimum: self.minimum.transpose()?,
            maximum: self.maximum.transpose()?,
            color: self.color.transpose()?,
            width: self.width,
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ConfigBuilder> for Result<Config, SparkError> {
    fn from(b: ConfigBuilder) -> Self {
        b.build()
    }
}

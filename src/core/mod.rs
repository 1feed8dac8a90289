//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;

// re-export frequently-used items for convenience
pub use bounds::EffectiveRange;
pub use color::{AnsiCode, ColorError, colorize};
pub use config::{Config, ConfigBuilder};
pub use constants::{BASELINE_GLYPH, SPARK_CHARS, TOP_GLYPH};
pub use data::{Sample, read_samples, read_samples_from_path};
pub use error::{ConfigError, InputError, SparkError, ValueError, ValueSlot};

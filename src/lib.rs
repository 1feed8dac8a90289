//! Public-facing crate root – re-exports of the sparkline API.
//!
//! ```
//! let line = sparkify::sparkify([0.5, 1.2, 3.5, 7.3, 8.0, 12.5], None, None).unwrap();
//! assert_eq!(line.chars().count(), 6);
//! ```

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    bounds::EffectiveRange,
    color::{AnsiCode, ColorError, colorize},
    config::{Config, ConfigBuilder},
    constants::{BASELINE_GLYPH, SPARK_CHARS},
    data::{Sample, read_samples, read_samples_from_path},
    error::{ConfigError, InputError, SparkError, ValueError, ValueSlot},
};

pub use render::{SparkCache, glyph_indices, render, sparkify};

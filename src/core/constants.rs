//! A collection of constants.

/// Eight block glyphs of (nearly) steadily increasing height, U+2581..=U+2588.
pub const SPARK_CHARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Index of the tallest glyph.
pub const TOP_GLYPH: usize = SPARK_CHARS.len() - 1;

/// The flat-line glyph used when the effective range has zero width.
pub const BASELINE_GLYPH: char = SPARK_CHARS[0];

/// Width used when the terminal size cannot be determined.
pub const FALLBACK_WIDTH: usize = 80;

/// Default entry limit of a render cache.
pub const DEFAULT_CACHE_LIMIT: usize = 128;

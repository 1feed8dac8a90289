pub mod cache;
pub mod sparkline;

pub use cache::SparkCache;
pub use sparkline::{glyph_indices, render, sparkify};

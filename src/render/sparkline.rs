//! Numeric series to a single line of block glyphs.
//!
//! ### Workflow
//! 1. Every sample is converted to `f64` up front; the first failure aborts
//!    the call, so a sparkline is either complete or not produced at all.
//! 2. The data extrema are widened (never narrowed) by the optional explicit
//!    bounds to give the [`EffectiveRange`].
//! 3. Each value maps independently to `round((x - min) * 7 / span)`, ties to
//!    even, and from there to one of the eight [`SPARK_CHARS`].
//!
//! A zero-width range (constant series) is a flat baseline of `▁`.

use crate::core::{
    bounds::EffectiveRange,
    color::colorize,
    config::Config,
    constants::{BASELINE_GLYPH, SPARK_CHARS},
    data::{Sample, collect_samples, convert},
    error::{SparkError, ValueSlot},
};

/// Render `series` as a sparkline, optionally widening the range.
///
/// ```
/// assert_eq!(sparkify::sparkify([1, 1, -2, 3, -5, 8, -13], None, None).unwrap(), "▆▆▅▆▄█▁");
/// assert_eq!(sparkify::sparkify([5, 5, 5], None, None).unwrap(), "▁▁▁");
/// ```
///
/// # Errors
/// [`SparkError::InvalidValue`] if a sample or bound is not a finite number.
pub fn sparkify<I>(
    series: I,
    minimum: Option<f64>,
    maximum: Option<f64>,
) -> Result<String, SparkError>
where
    I: IntoIterator,
    I::Item: Sample,
{
    let minimum = minimum.map(|m| convert(&m, ValueSlot::Minimum)).transpose()?;
    let maximum = maximum.map(|m| convert(&m, ValueSlot::Maximum)).transpose()?;
    let values = collect_samples(series)?;
    Ok(draw(&values, minimum, maximum))
}

/// Render `series` with the bounds, width and colour of `cfg`.
///
/// With a width set only the most recent samples are drawn and the range is
/// taken over those alone.
///
/// # Errors
/// [`SparkError::InvalidValue`] if a sample is not a finite number.
pub fn render<I>(series: I, cfg: &Config) -> Result<String, SparkError>
where
    I: IntoIterator,
    I::Item: Sample,
{
    let values = collect_samples(series)?;
    let visible = match cfg.width() {
        Some(w) if values.len() > w => &values[values.len() - w..],
        _ => &values[..],
    };

    let line = draw(visible, cfg.minimum(), cfg.maximum());
    Ok(match cfg.color() {
        Some(c) if !line.is_empty() => colorize(c, &line),
        _ => line,
    })
}

/// Quantize already-converted values to glyph indices in `0..=7`.
///
/// Values and bounds must be finite.
#[must_use]
pub fn glyph_indices(values: &[f64], minimum: Option<f64>, maximum: Option<f64>) -> Vec<usize> {
    match EffectiveRange::widen(values, minimum, maximum) {
        Some(range) => values.iter().map(|&x| range.index_of(x)).collect(),
        None => Vec::new(),
    }
}

/// Infallible core over finite values.
pub(crate) fn draw(values: &[f64], minimum: Option<f64>, maximum: Option<f64>) -> String {
    let Some(range) = EffectiveRange::widen(values, minimum, maximum) else {
        return String::new();
    };
    if range.is_flat() {
        return std::iter::repeat_n(BASELINE_GLYPH, values.len()).collect();
    }
    values
        .iter()
        .map(|&x| SPARK_CHARS[range.index_of(x)])
        .collect()
}

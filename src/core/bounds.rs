//! Range helpers: effective (widen-only) bounds + terminal width plumbing.

use terminal_size::{Width, terminal_size};

use crate::core::constants::{FALLBACK_WIDTH, TOP_GLYPH};

/// The `[min, max]` interval a series is quantized against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveRange {
    pub min: f64,
    pub max: f64,
}

impl EffectiveRange {
    /// Data extrema widened by the optional explicit bounds.
    ///
    /// * Returns `None` for an empty series.
    /// * An explicit minimum above the data minimum (or maximum below the
    ///   data maximum) is ignored: bounds never clip data.
    ///
    /// All inputs are expected to be finite.
    #[must_use]
    pub fn widen(values: &[f64], minimum: Option<f64>, maximum: Option<f64>) -> Option<Self> {
        let (first, rest) = values.split_first()?;
        let (mut low, mut high) = (*first, *first);
        for &v in rest {
            low = low.min(v);
            high = high.max(v);
        }

        Some(Self {
            min: minimum.map_or(low, |m| low.min(m)),
            max: maximum.map_or(high, |m| high.max(m)),
        })
    }

    /// Zero-width ranges render as a baseline.
    #[inline]
    #[must_use]
    pub fn is_flat(&self) -> bool {
        self.max <= self.min
    }

    /// Glyph index in `0..=TOP_GLYPH` for a value inside the range.
    ///
    /// Ties round half to even. A span that overflows `f64` is quantized on
    /// halved operands, which leaves the ratio unchanged; a span so small
    /// that its scale overflows divides by the span first.
    #[inline]
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn index_of(&self, x: f64) -> usize {
        if self.is_flat() {
            return 0;
        }
        let top = TOP_GLYPH as f64;
        let span = self.max - self.min;
        let scale = top / span;
        let scaled = if !span.is_finite() {
            (x / 2.0 - self.min / 2.0) / (self.max / 2.0 - self.min / 2.0) * top
        } else if scale.is_finite() {
            (x - self.min) * scale
        } else {
            // subnormal span: `top / span` overflows
            (x - self.min) / span * top
        };

        // `scaled` lies in [0, TOP_GLYPH] up to rounding error
        scaled.round_ties_even().clamp(0.0, top) as usize
    }
}

/// Current terminal width in columns (80 fallback).
#[inline]
#[must_use]
pub fn terminal_width() -> usize {
    terminal_size().map_or(FALLBACK_WIDTH, |(Width(w), _)| usize::from(w).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_has_no_range() {
        assert_eq!(EffectiveRange::widen(&[], Some(0.0), Some(1.0)), None);
    }

    #[test]
    fn explicit_bounds_only_widen() {
        let data = [2.0, 5.0, 3.0];
        let r = EffectiveRange::widen(&data, Some(4.0), Some(4.0)).unwrap();
        assert_eq!(r, EffectiveRange { min: 2.0, max: 5.0 });

        let r = EffectiveRange::widen(&data, Some(-1.0), Some(9.0)).unwrap();
        assert_eq!(r, EffectiveRange { min: -1.0, max: 9.0 });
    }

    #[test]
    fn flat_range_maps_to_baseline() {
        let r = EffectiveRange::widen(&[4.0, 4.0], Some(4.0), None).unwrap();
        assert!(r.is_flat());
        assert_eq!(r.index_of(4.0), 0);
    }

    #[test]
    fn endpoints_map_to_first_and_last_glyph() {
        let r = EffectiveRange { min: -13.0, max: 8.0 };
        assert_eq!(r.index_of(-13.0), 0);
        assert_eq!(r.index_of(8.0), TOP_GLYPH);
    }

    #[test]
    fn ties_round_to_even() {
        // scale = 7 / 14 = 0.5, so odd integers land exactly on .5
        let r = EffectiveRange { min: 0.0, max: 14.0 };
        assert_eq!(r.index_of(1.0), 0); // 0.5 -> 0
        assert_eq!(r.index_of(3.0), 2); // 1.5 -> 2
        assert_eq!(r.index_of(5.0), 2); // 2.5 -> 2
        assert_eq!(r.index_of(7.0), 4); // 3.5 -> 4
    }

    #[test]
    fn overflowing_span_is_still_quantized() {
        let r = EffectiveRange {
            min: -f64::MAX,
            max: f64::MAX,
        };
        assert_eq!(r.index_of(-f64::MAX), 0);
        assert_eq!(r.index_of(0.0), 4); // 3.5 -> 4
        assert_eq!(r.index_of(f64::MAX), TOP_GLYPH);
    }

    #[test]
    fn subnormal_span_is_still_quantized() {
        let tiny = f64::from_bits(1); // smallest subnormal
        let r = EffectiveRange::widen(&[0.0, 2.0 * tiny, 5.0 * tiny], None, None).unwrap();
        assert!(!(7.0 / (r.max - r.min)).is_finite());
        assert_eq!(r.index_of(0.0), 0);
        assert_eq!(r.index_of(2.0 * tiny), 3); // 2.8 -> 3
        assert_eq!(r.index_of(5.0 * tiny), TOP_GLYPH);
    }
}

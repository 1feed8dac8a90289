//! Memoizing front for [`sparkify`](super::sparkline::sparkify).
//!
//! The key is the full `(samples, minimum, maximum)` tuple, with samples
//! kept as their ordered `f64` bit patterns so the key is hashable. The
//! least recently used line is evicted once the limit is reached; errors are
//! never stored.

use std::num::NonZeroUsize;

use lru::LruCache;

use crate::{
    core::{
        constants::DEFAULT_CACHE_LIMIT,
        data::convert,
        error::{SparkError, ValueSlot},
    },
    render::sparkline::draw,
};

#[derive(Clone, PartialEq, Eq, Hash)]
struct Key {
    samples: Vec<u64>,
    minimum: Option<u64>,
    maximum: Option<u64>,
}

/// Bounded render cache owned by a single caller.
pub struct SparkCache {
    lines: LruCache<Key, String>,
    hits: u64,
    misses: u64,
}

impl Default for SparkCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_LIMIT)
    }
}

impl SparkCache {
    /// A cache holding at most `limit` lines (at least one).
    #[must_use]
    pub fn new(limit: usize) -> Self {
        let cap = NonZeroUsize::new(limit).unwrap_or(NonZeroUsize::MIN);
        Self {
            lines: LruCache::new(cap),
            hits: 0,
            misses: 0,
        }
    }

    /// Same result as `sparkify(samples, minimum, maximum)`, reused when the
    /// exact arguments were seen before.
    ///
    /// # Errors
    /// [`SparkError::InvalidValue`] if a sample or bound is not finite.
    pub fn render(
        &mut self,
        samples: &[f64],
        minimum: Option<f64>,
        maximum: Option<f64>,
    ) -> Result<&str, SparkError> {
        let minimum = minimum.map(|m| convert(&m, ValueSlot::Minimum)).transpose()?;
        let maximum = maximum.map(|m| convert(&m, ValueSlot::Maximum)).transpose()?;
        for (i, s) in samples.iter().enumerate() {
            convert(s, ValueSlot::Sample(i))?;
        }

        let key = Key {
            samples: samples.iter().map(|s| s.to_bits()).collect(),
            minimum: minimum.map(f64::to_bits),
            maximum: maximum.map(f64::to_bits),
        };

        if self.lines.contains(&key) {
            self.hits += 1;
        } else {
            self.misses += 1;
            self.lines.put(key.clone(), draw(samples, minimum, maximum));
        }
        // `get` marks the line as most recently used
        Ok(self.lines.get(&key).map_or("", String::as_str))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Drop every line and reset the hit/miss counters.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.hits = 0;
        self.misses = 0;
    }

    #[inline]
    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    #[inline]
    #[must_use]
    pub fn misses(&self) -> u64 {
        self.misses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::sparkline::sparkify;

    #[test]
    fn repeated_calls_hit() {
        let mut cache = SparkCache::new(4);
        let series = [1.0, 1.0, -2.0, 3.0, -5.0, 8.0, -13.0];
        assert_eq!(cache.render(&series, None, None).unwrap(), "▆▆▅▆▄█▁");
        assert_eq!(cache.render(&series, None, None).unwrap(), "▆▆▅▆▄█▁");
        assert_eq!((cache.hits(), cache.misses()), (1, 1));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn bounds_are_part_of_the_key() {
        let mut cache = SparkCache::default();
        let series = [0.0, 7.0];
        assert_eq!(cache.render(&series, None, None).unwrap(), "▁█");
        assert_eq!(cache.render(&series, None, Some(14.0)).unwrap(), "▁▅");
        assert_eq!(cache.misses(), 2);
    }

    #[test]
    fn order_is_part_of_the_key() {
        let mut cache = SparkCache::default();
        assert_eq!(cache.render(&[0.0, 7.0], None, None).unwrap(), "▁█");
        assert_eq!(cache.render(&[7.0, 0.0], None, None).unwrap(), "█▁");
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn least_recently_used_entry_is_evicted() {
        let mut cache = SparkCache::new(2);
        cache.render(&[1.0], None, None).unwrap();
        cache.render(&[2.0], None, None).unwrap();
        cache.render(&[3.0], None, None).unwrap();
        assert_eq!(cache.len(), 2);

        // [1.0] was the oldest and unused, so it is gone
        cache.render(&[1.0], None, None).unwrap();
        assert_eq!(cache.hits(), 0);
        assert_eq!(cache.misses(), 4);
    }

    #[test]
    fn recently_hit_entry_survives_eviction() {
        let mut cache = SparkCache::new(2);
        cache.render(&[1.0], None, None).unwrap();
        cache.render(&[2.0], None, None).unwrap();
        cache.render(&[1.0], None, None).unwrap(); // hit, [2.0] is now coldest
        cache.render(&[3.0], None, None).unwrap(); // evicts [2.0]
        cache.render(&[1.0], None, None).unwrap();
        assert_eq!((cache.hits(), cache.misses()), (2, 3));

        cache.render(&[2.0], None, None).unwrap();
        assert_eq!(cache.misses(), 4);
    }

    #[test]
    fn errors_are_not_cached() {
        let mut cache = SparkCache::default();
        assert!(cache.render(&[1.0, f64::NAN], None, None).is_err());
        assert!(cache.is_empty());
        assert_eq!(cache.misses(), 0);
    }

    #[test]
    fn clear_resets_lines_and_counters() {
        let mut cache = SparkCache::default();
        cache.render(&[1.0, 2.0], None, None).unwrap();
        cache.render(&[1.0, 2.0], None, None).unwrap();
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!((cache.hits(), cache.misses()), (0, 0));
    }

    #[test]
    fn agrees_with_uncached_render() {
        let mut cache = SparkCache::default();
        let series = [0.5, 1.2, 3.5, 7.3, 8.0, 12.5];
        let plain = sparkify(series, Some(-1.0), Some(20.0)).unwrap();
        assert_eq!(cache.render(&series, Some(-1.0), Some(20.0)).unwrap(), plain);
    }
}

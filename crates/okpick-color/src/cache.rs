//! Memoized OkLCH hue ramps.
//!
//! [`generate_oklch_hue_colors`] runs one cusp search per sample, which is
//! noticeable when a picker redraws its hue strip on every drag event. The
//! cache keys ramps by lightness and chroma rounded to whole percent plus the
//! step count, so the key space stays small and entries are never evicted.
//!
//! The cache is an ordinary value: the component that owns a picker creates
//! one (or shares one through [`HueRampCache::shared`]) and passes it down.
//! Concurrent misses on one key both compute the same ramp; the first insert
//! wins and every caller gets that `Arc`.
//!
//! # Example
//!
//! ```rust
//! use okpick_color::cache::HueRampCache;
//! use std::sync::Arc;
//!
//! let cache = HueRampCache::new();
//! let a = cache.get_or_generate(0.5, 0.3, 36);
//! let b = cache.get_or_generate(0.5, 0.3, 36);
//! assert!(Arc::ptr_eq(&a, &b));
//! assert_eq!(cache.stats().hits, 1);
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use okpick_core::Color;
use okpick_math::saturate;
use tracing::{debug, trace};

use crate::ramp::generate_oklch_hue_colors;

/// Cache key: inputs rounded to whole percent plus the sample count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HueRampKey {
    /// Lightness, 0..=100.
    pub lightness_pct: u8,
    /// Chroma proportion, 0..=100.
    pub chroma_pct: u8,
    /// Number of samples.
    pub steps: usize,
}

impl HueRampKey {
    /// Buckets raw inputs. Out-of-range and NaN values are clamped first.
    pub fn new(lightness: f32, chroma_proportion: f32, steps: usize) -> Self {
        Self {
            lightness_pct: to_pct(lightness),
            chroma_pct: to_pct(chroma_proportion),
            steps,
        }
    }

    /// Lightness the ramp is generated at.
    pub fn lightness(&self) -> f32 {
        self.lightness_pct as f32 / 100.0
    }

    /// Chroma proportion the ramp is generated at.
    pub fn chroma_proportion(&self) -> f32 {
        self.chroma_pct as f32 / 100.0
    }
}

#[inline]
fn to_pct(v: f32) -> u8 {
    (saturate(v) * 100.0).round() as u8
}

/// Cache statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: u64,
    /// Number of cache misses.
    pub misses: u64,
    /// Ramps currently cached.
    pub entries: usize,
}

impl CacheStats {
    /// Hit rate as percentage.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

/// Thread-safe, unbounded map from [`HueRampKey`] to a generated ramp.
#[derive(Debug, Default)]
pub struct HueRampCache {
    ramps: RwLock<HashMap<HueRampKey, Arc<[Color]>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl HueRampCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty cache behind an `Arc` for sharing between pickers.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Returns the ramp for the bucketed inputs, generating it on first use.
    pub fn get_or_generate(&self, lightness: f32, chroma_proportion: f32, steps: usize) -> Arc<[Color]> {
        let key = HueRampKey::new(lightness, chroma_proportion, steps);

        if let Some(ramp) = self.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(l = key.lightness_pct, c = key.chroma_pct, steps, "hue ramp cache hit");
            return ramp;
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!(l = key.lightness_pct, c = key.chroma_pct, steps, "hue ramp cache miss");

        // generate outside the lock
        let ramp: Arc<[Color]> =
            generate_oklch_hue_colors(key.lightness(), key.chroma_proportion(), steps).into();

        let mut ramps = self.ramps.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(ramps.entry(key).or_insert(ramp))
    }

    /// Looks up a ramp without generating it.
    pub fn get(&self, key: &HueRampKey) -> Option<Arc<[Color]>> {
        let ramps = self.ramps.read().unwrap_or_else(PoisonError::into_inner);
        ramps.get(key).cloned()
    }

    /// Number of cached ramps.
    pub fn len(&self) -> usize {
        self.ramps.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every cached ramp and resets the counters.
    pub fn clear(&self) {
        self.ramps.write().unwrap_or_else(PoisonError::into_inner).clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    /// Returns cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }
}

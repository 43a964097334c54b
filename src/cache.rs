use crate::config::{DEFAULT_CACHE_HIGH, INTEGER_CACHE_HIGH_KEY, MAX_CACHE_HIGH, cache_high_from};
use crate::{Int8, Int32};
use std::sync::{Arc, OnceLock};

/// Lower bound of the `Int32` cache. Fixed.
pub const INTEGER_CACHE_LOW: i32 = -128;

static INTEGER_CACHE: OnceLock<IntegerCache> = OnceLock::new();
static BYTE_CACHE: OnceLock<ByteCache> = OnceLock::new();

/// Canonical `Int32` instances for every value in `[low, high]`.
///
/// Canonicalizing a value in range always yields the same `Arc`; values
/// outside get a fresh allocation each time.
#[derive(Debug)]
pub struct IntegerCache {
    high: i32,
    entries: Box<[Arc<Int32>]>,
}

impl IntegerCache {
    /// Builds a cache for `[-128, high]`; `high` is raised to at least 127.
    pub fn new(high: i32) -> Self {
        let high = high.clamp(DEFAULT_CACHE_HIGH, MAX_CACHE_HIGH);
        let entries: Box<[Arc<Int32>]> = (INTEGER_CACHE_LOW..=high).map(|v| Arc::new(Int32::new(v))).collect();
        log::debug!("populated Int32 cache [{INTEGER_CACHE_LOW}, {high}] with {} entries", entries.len());
        IntegerCache { high, entries }
    }

    pub fn low(&self) -> i32 {
        INTEGER_CACHE_LOW
    }

    pub fn high(&self) -> i32 {
        self.high
    }

    pub fn contains(&self, value: i32) -> bool {
        (INTEGER_CACHE_LOW..=self.high).contains(&value)
    }

    /// The shared instance for `value`, if it is cached.
    pub fn get(&self, value: i32) -> Option<&Arc<Int32>> {
        if !self.contains(value) {
            return None;
        }
        self.entries.get((value - INTEGER_CACHE_LOW) as usize)
    }

    /// The shared instance for `value` when cached, otherwise a new one.
    pub fn canonicalize(&self, value: i32) -> Arc<Int32> {
        match self.get(value) {
            Some(shared) => Arc::clone(shared),
            None => Arc::new(Int32::new(value)),
        }
    }
}

/// The process-wide `Int32` cache.
///
/// Built on first use; its upper bound comes from
/// [`INTEGER_CACHE_HIGH_KEY`](crate::config::INTEGER_CACHE_HIGH_KEY), read once.
pub fn integer_cache() -> &'static IntegerCache {
    INTEGER_CACHE.get_or_init(|| {
        let raw = std::env::var(INTEGER_CACHE_HIGH_KEY).ok();
        IntegerCache::new(cache_high_from(raw.as_deref()))
    })
}

/// Canonical `Int8` instances for the whole 8-bit domain.
#[derive(Debug)]
pub struct ByteCache {
    entries: Box<[Arc<Int8>]>,
}

impl ByteCache {
    fn new() -> Self {
        let entries: Box<[Arc<Int8>]> = (i8::MIN..=i8::MAX).map(|b| Arc::new(Int8::new(b))).collect();
        log::debug!("populated Int8 cache with {} entries", entries.len());
        ByteCache { entries }
    }

    /// The shared instance for `value`.
    pub fn get(&self, value: i8) -> Arc<Int8> {
        Arc::clone(&self.entries[(value as i32 + 128) as usize])
    }
}

/// The process-wide `Int8` cache.
pub fn byte_cache() -> &'static ByteCache {
    BYTE_CACHE.get_or_init(ByteCache::new)
}

//! Cache Metrics System
//!
//! The cache counts its own operations and reports them through the
//! [`CacheMetrics`] trait as a `BTreeMap<String, f64>` snapshot. A `BTreeMap`
//! keeps report keys in one fixed order, so the same workload renders the
//! same output on every run; that makes reports easy to diff between runs
//! and lets tests assert on them directly. With under a dozen keys, the
//! `O(log n)` lookup cost next to a `HashMap` is not measurable.
//!
//! Snapshots are taken while the cache lock is held, so the counters within
//! one report are mutually consistent.

use std::collections::BTreeMap;

/// Operation counters tracked by the LRU cache.
///
/// Counters are cumulative for the lifetime of the cache; `clear()`ing the
/// cache drops its entries but keeps the history. Misses are not stored
/// separately: they are always `requests - cache_hits`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LruCacheMetrics {
    /// Total number of lookups made against the cache, hit or miss. Both
    /// `get` and the closure accessors count; presence checks do not.
    pub requests: u64,

    /// Number of lookups that found the key resident.
    pub cache_hits: u64,

    /// Number of entries evicted due to capacity pressure.
    pub evictions: u64,

    /// Number of fresh keys inserted.
    pub insertions: u64,

    /// Number of existing entries overwritten in place.
    pub updates: u64,

    /// Number of entries removed explicitly.
    pub removals: u64,
}

impl LruCacheMetrics {
    /// Creates a new metrics instance with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a cache hit - the requested key was resident.
    pub fn record_hit(&mut self) {
        self.requests += 1;
        self.cache_hits += 1;
    }

    /// Records a cache miss - the requested key was not resident.
    ///
    /// Misses are reported as `requests - cache_hits`.
    pub fn record_miss(&mut self) {
        self.requests += 1;
    }

    /// Records an eviction - an entry was displaced by capacity pressure.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Records an insertion - a fresh key was written to the cache.
    pub fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    /// Records an update - an existing entry was overwritten in place.
    pub fn record_update(&mut self) {
        self.updates += 1;
    }

    /// Records an explicit removal.
    pub fn record_removal(&mut self) {
        self.removals += 1;
    }

    /// Calculates the cache hit rate.
    ///
    /// # Returns
    /// A value between 0.0 and 1.0, or 0.0 if no requests have been made.
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Calculates the cache miss rate.
    ///
    /// # Returns
    /// A value between 0.0 and 1.0, or 0.0 if no requests have been made.
    pub fn miss_rate(&self) -> f64 {
        if self.requests > 0 {
            (self.requests - self.cache_hits) as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Renders the counters as a `BTreeMap` snapshot.
    ///
    /// Derived keys (`cache_misses`, `hit_rate`, `miss_rate`) are computed at
    /// snapshot time; `eviction_rate` is included only once at least one
    /// lookup has been recorded.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        // Basic counters
        metrics.insert("cache_hits".to_string(), self.cache_hits as f64);
        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("insertions".to_string(), self.insertions as f64);
        metrics.insert("removals".to_string(), self.removals as f64);
        metrics.insert("requests".to_string(), self.requests as f64);
        metrics.insert("updates".to_string(), self.updates as f64);

        // Calculated metrics
        metrics.insert(
            "cache_misses".to_string(),
            (self.requests - self.cache_hits) as f64,
        );

        // Rates (0.0 to 1.0)
        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());

        // Derived metrics
        if self.requests > 0 {
            metrics.insert(
                "eviction_rate".to_string(),
                self.evictions as f64 / self.requests as f64,
            );
        }

        metrics
    }
}

/// Trait for retrieving metrics from a cache implementation.
///
/// A report is a flat `BTreeMap<String, f64>` ordered by key, so callers can
/// render and compare reports without knowing which counters the cache
/// behind the trait tracks.
pub trait CacheMetrics {
    /// Returns all metrics as key-value pairs in deterministic order.
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Returns the name of the eviction algorithm, e.g. `"LRU"`.
    fn algorithm_name(&self) -> &'static str;
}

impl CacheMetrics for LruCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU"
    }
}

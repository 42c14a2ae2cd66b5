//! Configuration for the Least Recently Used (LRU) cache.
//!
//! # Design Philosophy
//!
//! The configuration struct has all public fields for simple instantiation:
//!
//! - **Simple**: Just create the struct with the fields set
//! - **Type safety**: All parameters must be provided at construction
//! - **No boilerplate**: A `new` shorthand exists, but a struct literal works
//!   just as well
//!
//! # Sizing Guidelines
//!
//! `capacity` counts entries, not bytes. Each resident entry costs one arena
//! slot and one index bucket beyond the key and value themselves (roughly
//! 48-80 bytes depending on the key type), so for a memory budget:
//!
//! ```text
//! capacity ≈ memory_budget / (average_entry_size + overhead_per_entry)
//! ```
//!
//! A bounded cache reserves its arena up front (very large capacities grow
//! on demand) and never holds more than `capacity` entries, which keeps its
//! footprint predictable.
//!
//! # Unbounded Mode
//!
//! A capacity of `0` disables eviction: entries accumulate until they are
//! removed explicitly or the cache is cleared. Use it when an upper bound is
//! enforced elsewhere, such as a key space that is itself finite.
//!
//! # Examples
//!
//! ```
//! use shared_lru::config::LruCacheConfig;
//! use shared_lru::LruCache;
//!
//! // ~10,000 small entries, evicting the least recently used beyond that.
//! let config = LruCacheConfig { capacity: 10_000 };
//! let cache: LruCache<String, i32> = LruCache::init(config, None);
//!
//! // Unbounded: nothing is ever evicted.
//! let config = LruCacheConfig::new(0);
//! assert!(config.is_unbounded());
//! let cache: LruCache<u64, String> = LruCache::init(config, None);
//! ```

use std::fmt;

/// Configuration for an LRU (Least Recently Used) cache.
///
/// LRU evicts the least recently accessed entry when an insert takes the
/// cache past `capacity`.
///
/// # Fields
///
/// - `capacity`: Maximum number of entries the cache holds. `0` disables
///   eviction and lets the cache grow without bound.
///
/// # Examples
///
/// ```
/// use shared_lru::config::LruCacheConfig;
/// use shared_lru::LruCache;
///
/// let config = LruCacheConfig { capacity: 500 };
/// let cache: LruCache<&str, i32> = LruCache::init(config, None);
/// assert_eq!(cache.capacity(), 500);
/// ```
#[derive(Clone, Copy)]
pub struct LruCacheConfig {
    /// Maximum number of key-value pairs the cache holds; `0` means
    /// unbounded. Account for one arena slot and one index bucket of
    /// overhead per entry.
    pub capacity: usize,
}

impl LruCacheConfig {
    /// Creates a configuration holding at most `capacity` entries
    /// (`0` = unbounded).
    pub fn new(capacity: usize) -> Self {
        LruCacheConfig { capacity }
    }

    /// Returns `true` when eviction is disabled.
    pub fn is_unbounded(&self) -> bool {
        self.capacity == 0
    }
}

impl fmt::Debug for LruCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}

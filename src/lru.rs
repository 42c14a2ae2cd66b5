//! Least Recently Used (LRU) Cache Implementation
//!
//! This module provides a thread-safe LRU cache with O(1) time for all common
//! cache operations. LRU is one of the most widely used cache eviction
//! algorithms due to its simplicity and good performance for workloads with
//! temporal locality.
//!
//! # Algorithm
//!
//! The cache maintains items in order of recency of use, evicting the least
//! recently used item when capacity is exceeded. This works on the principle
//! of temporal locality: items that have been accessed recently are likely to
//! be accessed again soon.
//!
//! Two structures cooperate under one lock: a hash index mapping each key to
//! a handle, and a recency list that owns the entries. The handle is a stable
//! slot index into the list's arena (see [`crate::list`]), so the index never
//! holds pointers into the list, only plain integers.
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │                  LruCache                  │
//! │                ┌─────────┐                 │
//! │                │  Mutex  │                 │
//! │                └────┬────┘                 │
//! │           ┌─────────▼─────────┐            │
//! │           │      LruCore      │            │
//! │           │  ┌─────┐ ┌──────┐ │            │
//! │           │  │ map │ │ list │ │            │
//! │           │  └─────┘ └──────┘ │            │
//! │           └───────────────────┘            │
//! └────────────────────────────────────────────┘
//! ```
//!
//! # Thread Safety
//!
//! Every public operation, including `len()` and `contains_key()`, acquires
//! the one `parking_lot::Mutex` for its whole critical section, so callers
//! always observe the index and the recency list in agreement.
//!
//! ## Why Mutex Instead of RwLock?
//!
//! LRU requires **mutable access even for read operations**: every `get()`
//! moves the accessed item to the front of the recency list. Since `get()` is
//! inherently a write, an `RwLock` would provide no benefit: every access
//! would still need the exclusive lock. `Mutex` is preferred because:
//!
//! 1. **Lower overhead**: `Mutex` has less bookkeeping than `RwLock`
//! 2. **No false promises**: Makes it clear that all operations are mutually
//!    exclusive
//! 3. **Better performance**: `parking_lot::Mutex` is highly optimized for
//!    short critical sections like these
//!
//! # Performance Characteristics
//!
//! - **Time Complexity**:
//!   - Get: O(1)
//!   - Put: O(1), at most one eviction
//!   - Remove: O(1)
//!
//! - **Space Complexity**:
//!   - O(n) where n is the number of resident entries
//!   - A bounded cache reserves its slot arena up front (very large
//!     capacities grow on demand) and recycles slots on eviction, so
//!     steady-state churn performs no allocation
//!
//! # When to Use
//!
//! LRU caches are ideal for:
//! - General-purpose caching where access patterns exhibit temporal locality
//! - Simple implementation with predictable performance
//! - Caching with a fixed memory budget
//!
//! They are less suitable for:
//! - Workloads where frequency of access is more important than recency
//! - Scanning patterns where a large set of items is accessed once in
//!   sequence

use crate::config::LruCacheConfig;
use crate::list::List;
use crate::metrics::{CacheMetrics, LruCacheMetrics};
use parking_lot::Mutex;
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Most arena slots and index buckets a bounded cache reserves up front.
/// Reservation is a sizing hint only: the constructor accepts any `usize`
/// capacity, and a cache larger than this grows on demand instead.
const MAX_PREALLOCATION: usize = 1 << 16;

/// Internal cache state: the hash index, the recency list, and the metrics,
/// always mutated together under the cache's lock.
///
/// The `map` stores slot indices handed out by `list`. An index stays valid
/// exactly as long as its entry is resident, and both structures are updated
/// in the same critical section, so the key sets of `map` and `list` are
/// identical whenever the lock is free. Handles are plain integers, which
/// means this type is `Send`/`Sync` wherever its parameters are, with no
/// manual impls.
pub(crate) struct LruCore<K, V, S = DefaultHashBuilder> {
    config: LruCacheConfig,
    list: List<(K, V)>,
    map: HashMap<K, usize, S>,
    metrics: LruCacheMetrics,
}

impl<K: Hash + Eq, V: Clone, S: BuildHasher> LruCore<K, V, S> {
    pub(crate) fn with_hasher(config: LruCacheConfig, hash_builder: S) -> Self {
        let cap = config.capacity;
        let (list, map) = if cap == 0 {
            (List::new(), HashMap::with_hasher(hash_builder))
        } else {
            // put() links the new entry in before evicting, so a full cache
            // briefly holds capacity + 1 entries inside the critical section.
            // Both reservations are clamped to MAX_PREALLOCATION: construction
            // must not overflow or allocate absurdly for a huge capacity.
            let slots = cap.saturating_add(1).min(MAX_PREALLOCATION);
            let map_capacity = cap
                .checked_next_power_of_two()
                .unwrap_or(cap)
                .min(MAX_PREALLOCATION);
            (
                List::with_capacity(slots),
                HashMap::with_capacity_and_hasher(map_capacity, hash_builder),
            )
        };
        LruCore {
            config,
            list,
            map,
            metrics: LruCacheMetrics::new(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.config.capacity
    }

    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Presence check. Reads the index only: recency order and metrics are
    /// left untouched.
    pub(crate) fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    /// Looks up `key`, promoting its entry to most recently used on a hit.
    pub(crate) fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.map.get(key) {
            Some(&idx) => {
                self.list.move_to_front(idx);
                self.metrics.record_hit();
                self.list.get(idx).map(|entry| &entry.1)
            }
            None => {
                self.metrics.record_miss();
                None
            }
        }
    }

    /// Like [`LruCore::get`], but hands out a mutable reference.
    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.map.get(key) {
            Some(&idx) => {
                self.list.move_to_front(idx);
                self.metrics.record_hit();
                self.list.get_mut(idx).map(|entry| &mut entry.1)
            }
            None => {
                self.metrics.record_miss();
                None
            }
        }
    }

    /// Inserts or updates `key`, making it the most recently used entry.
    ///
    /// Returns the displaced pair: the old entry when `key` was already
    /// resident, the evicted least recently used entry when the insert
    /// pushed a bounded cache over capacity, `None` otherwise.
    pub(crate) fn put(&mut self, key: K, value: V) -> Option<(K, V)>
    where
        K: Clone,
    {
        if let Some(&idx) = self.map.get(&key) {
            self.list.move_to_front(idx);
            self.metrics.record_update();
            return self.list.update(idx, (key, value));
        }

        let idx = self.list.push_front((key.clone(), value));
        self.map.insert(key, idx);
        self.metrics.record_insertion();
        self.evict_over_capacity()
    }

    /// Evicts the least recently used entry if the insert that just ran took
    /// a bounded cache over its capacity. A single insert grows the list by
    /// one, so one eviction is always enough. An empty list has nothing to
    /// give up and is left alone.
    fn evict_over_capacity(&mut self) -> Option<(K, V)> {
        let cap = self.config.capacity;
        if cap == 0 || self.list.len() <= cap {
            return None;
        }
        match self.list.remove_last() {
            Some((key, value)) => {
                self.map.remove(&key);
                self.metrics.record_eviction();
                Some((key, value))
            }
            None => None,
        }
    }

    /// Removes `key` and returns its value. The recency order of the other
    /// entries is unchanged; removing an absent key is a no-op.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = self.map.remove(key)?;
        let (_, value) = self.list.remove(idx)?;
        self.metrics.record_removal();
        Some(value)
    }

    /// Drops every entry. Capacity and accumulated metrics are kept.
    pub(crate) fn clear(&mut self) {
        self.map.clear();
        self.list.clear();
    }

    pub(crate) fn metrics(&self) -> &LruCacheMetrics {
        &self.metrics
    }

    /// Panics unless the index and the list agree entry for entry.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        assert_eq!(
            self.map.len(),
            self.list.len(),
            "index and list disagree on entry count"
        );
        let cap = self.config.capacity;
        assert!(
            cap == 0 || self.list.len() <= cap,
            "bounded cache holds more entries than its capacity"
        );
        for (key, &idx) in &self.map {
            match self.list.get(idx) {
                Some((stored, _)) => {
                    assert!(stored == key, "index handle points at a different key")
                }
                None => panic!("index handle points at a vacant slot"),
            }
        }
        self.list.assert_valid();
    }
}

impl<K, V, S> fmt::Debug for LruCore<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCore")
            .field("capacity", &self.config.capacity)
            .field("len", &self.list.len())
            .finish()
    }
}

/// A thread-safe, fixed-capacity Least Recently Used (LRU) cache.
///
/// All methods take `&self` and synchronize internally through a single
/// `parking_lot::Mutex`, so the cache can be shared across threads via
/// `Arc` (or a `static`) without further locking. `get` and `put` promote
/// the touched entry to most recently used; once a bounded cache is full,
/// each insert of a fresh key evicts the least recently used entry.
///
/// A capacity of `0` disables eviction entirely and lets the cache grow
/// without bound.
///
/// # Type Parameters
///
/// - `K`: Key type. Must implement `Hash + Eq` (plus `Clone` for `put`).
/// - `V`: Value type. Must implement `Clone`; `get` returns a clone so the
///   lock is never held by a borrow that outlives the call. For values that
///   are expensive to clone, wrap them in `Arc` or use [`LruCache::get_with`].
/// - `S`: Hash builder. Defaults to `DefaultHashBuilder`.
///
/// # Examples
///
/// ```
/// use shared_lru::LruCache;
///
/// let cache = LruCache::new(2);
/// cache.put("apple", 1);
/// cache.put("banana", 2);
/// assert_eq!(cache.get(&"apple"), Some(1));
///
/// // "banana" is now the least recently used entry and the first to go.
/// cache.put("cherry", 3);
/// assert_eq!(cache.get(&"banana"), None);
/// assert_eq!(cache.len(), 2);
/// ```
pub struct LruCache<K, V, S = DefaultHashBuilder> {
    core: Mutex<LruCore<K, V, S>>,
}

impl<K: Hash + Eq, V: Clone> LruCache<K, V> {
    /// Creates a cache holding at most `capacity` entries. A capacity of `0`
    /// disables eviction.
    ///
    /// # Examples
    ///
    /// ```
    /// use shared_lru::LruCache;
    ///
    /// let cache: LruCache<u64, String> = LruCache::new(1024);
    /// assert_eq!(cache.capacity(), 1024);
    /// ```
    pub fn new(capacity: usize) -> LruCache<K, V, DefaultHashBuilder> {
        LruCache::with_hasher(capacity, DefaultHashBuilder::default())
    }

    /// Creates a cache from a configuration with an optional hasher.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration specifying the capacity
    /// * `hasher` - Optional custom hash builder. If `None`, uses
    ///   `DefaultHashBuilder`
    ///
    /// # Examples
    ///
    /// ```
    /// use shared_lru::config::LruCacheConfig;
    /// use shared_lru::LruCache;
    ///
    /// let config = LruCacheConfig::new(10_000);
    /// let cache: LruCache<String, Vec<u8>> = LruCache::init(config, None);
    /// assert!(cache.is_empty());
    /// ```
    pub fn init(config: LruCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        LruCache {
            core: Mutex::new(LruCore::with_hasher(config, hasher.unwrap_or_default())),
        }
    }
}

impl<K: Hash + Eq, V: Clone, S: BuildHasher> LruCache<K, V, S> {
    /// Creates a cache with a custom hash builder.
    ///
    /// Use this for deterministic hashing or DoS-resistant hashers.
    pub fn with_hasher(capacity: usize, hash_builder: S) -> Self {
        LruCache {
            core: Mutex::new(LruCore::with_hasher(
                LruCacheConfig::new(capacity),
                hash_builder,
            )),
        }
    }

    /// Returns the configured capacity. `0` means eviction is disabled.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.core.lock().capacity()
    }

    /// Returns the number of entries currently resident.
    #[inline]
    pub fn len(&self) -> usize {
        self.core.lock().len()
    }

    /// Returns `true` if the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.core.lock().is_empty()
    }

    /// Returns `true` if `key` is resident, without promoting it. Use
    /// [`LruCache::get`] when the entry's recency should be refreshed.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.core.lock().contains_key(key)
    }

    /// Retrieves a clone of the value for `key`, promoting the entry to most
    /// recently used. Returns `None` if the key is not resident.
    ///
    /// # Examples
    ///
    /// ```
    /// use shared_lru::LruCache;
    ///
    /// let cache = LruCache::new(10);
    /// cache.put("key", 42);
    /// assert_eq!(cache.get(&"key"), Some(42));
    /// assert_eq!(cache.get(&"missing"), None);
    /// ```
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.core.lock().get(key).cloned()
    }

    /// Applies `f` to the value for `key` without cloning it, promoting the
    /// entry to most recently used.
    ///
    /// `f` runs while the cache lock is held; keep it short and do not call
    /// back into the cache from inside it.
    ///
    /// # Examples
    ///
    /// ```
    /// use shared_lru::LruCache;
    ///
    /// let cache = LruCache::new(10);
    /// cache.put("key", String::from("value"));
    /// let len = cache.get_with(&"key", |v| v.len());
    /// assert_eq!(len, Some(5));
    /// ```
    pub fn get_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&V) -> R,
    {
        let mut core = self.core.lock();
        core.get(key).map(f)
    }

    /// Applies `f` to the value for `key` with mutable access, promoting the
    /// entry to most recently used. The same locking caveat as
    /// [`LruCache::get_with`] applies.
    ///
    /// # Examples
    ///
    /// ```
    /// use shared_lru::LruCache;
    ///
    /// let cache = LruCache::new(10);
    /// cache.put("counter", 0);
    /// cache.get_mut_with(&"counter", |v| *v += 1);
    /// assert_eq!(cache.get(&"counter"), Some(1));
    /// ```
    pub fn get_mut_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&mut V) -> R,
    {
        let mut core = self.core.lock();
        core.get_mut(key).map(f)
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher> LruCache<K, V, S> {
    /// Inserts or updates `key`, making it the most recently used entry.
    ///
    /// Returns the displaced pair, if any: the previous entry when `key` was
    /// already resident, or the evicted least recently used entry when the
    /// insert pushed a full bounded cache over capacity. At most one entry
    /// is evicted per call.
    ///
    /// # Examples
    ///
    /// ```
    /// use shared_lru::LruCache;
    ///
    /// let cache = LruCache::new(1);
    /// assert_eq!(cache.put("a", 1), None);
    /// assert_eq!(cache.put("a", 2), Some(("a", 1))); // update in place
    /// assert_eq!(cache.put("b", 3), Some(("a", 2))); // evicts the LRU entry
    /// ```
    #[inline]
    pub fn put(&self, key: K, value: V) -> Option<(K, V)> {
        self.core.lock().put(key, value)
    }

    /// Removes `key` and returns its value, or `None` if it was not
    /// resident. Repeated removal of the same key is a no-op, and the
    /// recency order of the remaining entries is unchanged.
    #[inline]
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.core.lock().remove(key)
    }

    /// Drops every entry. Capacity and accumulated metrics are kept.
    #[inline]
    pub fn clear(&self) {
        self.core.lock().clear();
    }
}

impl<K, V, S> fmt::Debug for LruCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.core.try_lock() {
            Some(core) => f
                .debug_struct("LruCache")
                .field("capacity", &core.config.capacity)
                .field("len", &core.list.len())
                .finish(),
            None => f
                .debug_struct("LruCache")
                .field("state", &"<locked>")
                .finish(),
        }
    }
}

impl<K: Hash + Eq, V: Clone, S: BuildHasher> CacheMetrics for LruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.core.lock().metrics().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.core.lock().metrics().algorithm_name()
    }
}

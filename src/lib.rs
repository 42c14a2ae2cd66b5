#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! This section provides quick code examples and an API reference for the
//! cache.
//!
//! ## Quick Reference
//!
//! | Method | Effect on recency | Complexity |
//! |--------|-------------------|------------|
//! | [`LruCache::put`] | entry becomes most recently used; may evict the LRU entry | O(1) |
//! | [`LruCache::get`] | entry becomes most recently used | O(1) |
//! | [`LruCache::get_with`] / [`LruCache::get_mut_with`] | entry becomes most recently used | O(1) |
//! | [`LruCache::remove`] | other entries keep their order | O(1) |
//! | [`LruCache::contains_key`] | none | O(1) |
//! | [`LruCache::len`] / [`LruCache::is_empty`] | none | O(1) |
//! | [`LruCache::clear`] | empties the cache | O(n) |
//!
//! Every method takes `&self` and synchronizes internally, so a shared
//! reference is all a thread needs.
//!
//! ## Code Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use shared_lru::LruCache;
//!
//! let cache = LruCache::new(2);
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");      // "a" becomes most recently used
//! cache.put("c", 3);    // "b" evicted (least recently used)
//! assert!(cache.get(&"b").is_none());
//! ```
//!
//! ### Sharing Across Threads
//!
//! ```rust
//! use shared_lru::LruCache;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let cache = Arc::new(LruCache::new(10_000));
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|t| {
//!         let cache = Arc::clone(&cache);
//!         thread::spawn(move || {
//!             for i in 0..1000u64 {
//!                 cache.put(format!("key-{t}-{i}"), i);
//!             }
//!         })
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(cache.len(), 4000);
//! ```
//!
//! ### Configuration and Unbounded Mode
//!
//! ```rust
//! use shared_lru::config::LruCacheConfig;
//! use shared_lru::LruCache;
//!
//! // Capacity 0 disables eviction entirely.
//! let config = LruCacheConfig { capacity: 0 };
//! let cache: LruCache<u64, u64> = LruCache::init(config, None);
//! for i in 0..100_000 {
//!     cache.put(i, i);
//! }
//! assert_eq!(cache.len(), 100_000);
//! ```
//!
//! ### Metrics
//!
//! ```rust
//! use shared_lru::metrics::CacheMetrics;
//! use shared_lru::LruCache;
//!
//! let cache = LruCache::new(100);
//! cache.put("a", 1);
//! cache.get(&"a");
//! cache.get(&"missing");
//!
//! let metrics = cache.metrics();
//! assert_eq!(metrics["hit_rate"], 0.5);
//! println!("{} metrics: {metrics:?}", cache.algorithm_name());
//! ```
//!
//! ## Locking Model
//!
//! One mutex guards the whole cache state, so every operation observes the
//! hash index and the recency list in agreement:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                   LruCache                   │
//! │                 ┌─────────┐                  │
//! │   put/get/...──▶│  Mutex  │                  │
//! │                 └────┬────┘                  │
//! │            ┌─────────▼─────────┐             │
//! │            │  index  +  list   │             │
//! │            └───────────────────┘             │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! A `get()` promotes the entry it finds, which is a mutation, so there is no
//! read path that could run under a shared lock; see [`lru`] for the full
//! rationale.
//!
//! ## Modules
//!
//! - [`lru`]: The LRU cache implementation
//! - [`config`]: Configuration structure
//! - [`metrics`]: Metrics collection for cache performance monitoring

/// Doubly linked list implementation with in-place editing capabilities.
///
/// This module provides a memory-efficient doubly linked list that keeps
/// entries in recency order, stored in a slot arena and linked by plain
/// indices.
///
/// **Note**: This module is internal infrastructure and is not exposed to
/// library consumers. Use the high-level cache implementation instead.
pub(crate) mod list;

/// Cache configuration structure.
///
/// Provides the configuration used to construct the cache.
pub mod config;

/// Least Recently Used (LRU) cache implementation.
///
/// Provides a thread-safe, fixed-size cache that evicts the least recently
/// used entry when the capacity is exceeded.
pub mod lru;

/// Cache metrics system.
///
/// Provides metrics collection and reporting through a common interface.
pub mod metrics;

// Re-export the cache type
pub use lru::LruCache;

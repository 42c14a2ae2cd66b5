//! Concurrent Cache Usage Examples
//!
//! This example demonstrates multi-threaded usage patterns for the shared
//! LRU cache.
//!
//! Run with: cargo run --example concurrent_usage

use shared_lru::config::LruCacheConfig;
use shared_lru::LruCache;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

fn main() {
    println!("Concurrent Cache Usage Examples");
    println!("================================\n");

    basic_concurrent_usage();
    println!();

    zero_copy_get_with();
    println!();

    capacity_modes();
    println!();

    throughput_comparison();
}

/// Basic multi-threaded cache usage
fn basic_concurrent_usage() {
    println!("1. Basic Concurrent Usage");
    println!("   -----------------------");

    // Every method takes &self, so the cache shares through a plain Arc.
    let cache = Arc::new(LruCache::init(LruCacheConfig { capacity: 1_000 }, None));

    let num_threads = 4;
    let ops_per_thread = 1_000;

    let handles: Vec<_> = (0..num_threads)
        .map(|thread_id| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..ops_per_thread {
                    let key = format!("thread{thread_id}-key{i}");
                    let value = thread_id * 10_000 + i;

                    // Write
                    cache.put(key.clone(), value);

                    // Read; another thread may have evicted the key already
                    if let Some(v) = cache.get(&key) {
                        assert_eq!(v, value);
                    }
                }
            })
        })
        .collect();

    // Wait for all threads to complete
    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    println!(
        "   Completed {} operations across {} threads",
        num_threads * ops_per_thread * 2, // 2 ops per iteration (put + get)
        num_threads
    );
    println!("   Final cache size: {} items", cache.len());
}

/// Zero-copy access pattern using get_with()
fn zero_copy_get_with() {
    println!("2. Zero-Copy Access with get_with()");
    println!("   ----------------------------------");

    let cache: LruCache<String, Vec<u8>> =
        LruCache::init(LruCacheConfig { capacity: 100 }, None);

    // Store a large value
    let large_data = vec![1u8; 1024]; // 1KB of data
    cache.put("large_key".to_string(), large_data);

    // Process the value without cloning using get_with()
    let sum: Option<u64> = cache.get_with(&"large_key".to_string(), |data| {
        data.iter().map(|&x| x as u64).sum()
    });

    println!("   Stored 1KB of data in cache");
    println!(
        "   Computed sum without cloning: {}",
        sum.unwrap_or_default()
    );

    // Compare: get() would clone the entire 1KB vector
    let _cloned_data = cache.get(&"large_key".to_string());
    println!("   get() returns a clone - use get_with() to avoid cloning");

    // Practical example: check if value meets a condition
    let has_zeros: Option<bool> =
        cache.get_with(&"large_key".to_string(), |data| data.contains(&0));
    println!("   Data contains zeros: {}", has_zeros.unwrap_or(false));
}

/// Demonstrate bounded and unbounded capacity modes
fn capacity_modes() {
    println!("3. Capacity Modes");
    println!("   ---------------");

    // Bounded: holds at most `capacity` entries, evicting the least
    // recently used one on overflow.
    let bounded: LruCache<i32, i32> = LruCache::init(LruCacheConfig { capacity: 100 }, None);
    for i in 0..150 {
        bounded.put(i, i);
    }
    println!(
        "   Bounded cache: 150 puts through capacity {} -> {} resident",
        bounded.capacity(),
        bounded.len()
    );

    // Unbounded: capacity 0 disables eviction entirely.
    let unbounded: LruCache<i32, i32> = LruCache::init(LruCacheConfig { capacity: 0 }, None);
    for i in 0..150 {
        unbounded.put(i, i);
    }
    println!(
        "   Unbounded cache: 150 puts -> {} resident, nothing evicted",
        unbounded.len()
    );

    println!();
    println!("   Capacity guidelines:");
    println!("   - Size for your working set, not your total keyspace");
    println!("   - Unbounded mode suits deduplication and interning tables");
    println!("   - Capacity is entry count; values are opaque to the cache");
}

/// Compare throughput across contending thread counts
fn throughput_comparison() {
    println!("4. Throughput Comparison (10K put+get pairs per thread)");
    println!("   -----------------------------------------------------");

    let ops_per_thread = 10_000;

    for num_threads in [1, 2, 4, 8] {
        let cache: Arc<LruCache<i32, i32>> =
            Arc::new(LruCache::init(LruCacheConfig { capacity: 10_000 }, None));

        let start = Instant::now();

        let handles: Vec<_> = (0..num_threads)
            .map(|t| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    let offset = t * ops_per_thread;
                    for i in 0..ops_per_thread {
                        let key = offset + i;
                        cache.put(key, key);
                        cache.get(&key);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let elapsed = start.elapsed();
        let total_ops = num_threads as usize * ops_per_thread as usize * 2;
        let ops_per_sec = (total_ops as f64 / elapsed.as_secs_f64()) as u64;

        println!(
            "   {:2} threads: {:>7.2?} ({:>10} ops/sec)",
            num_threads, elapsed, ops_per_sec
        );
    }

    println!();
    println!("   All operations serialize on one lock, so adding threads");
    println!("   adds contention rather than parallelism. Keep critical");
    println!("   sections short and values cheap to clone.");
}

//! Concurrent Cache Benchmarks
//!
//! Benchmarks for measuring cache performance when shared across threads.
//! Since every operation serializes on one mutex, the thread-count
//! comparison mostly shows how gracefully throughput degrades as more
//! threads queue on the lock.

// `criterion_group!` expands to an undocumented `pub fn`, which the
// crate-wide `missing_docs` deny cannot be satisfied for.
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shared_lru::config::LruCacheConfig;
use shared_lru::LruCache;
use std::sync::Arc;
use std::thread;

const CACHE_SIZE: usize = 10_000;
const OPS_PER_THREAD: usize = 1_000;

fn make_shared(capacity: usize) -> Arc<LruCache<usize, usize>> {
    let config = LruCacheConfig { capacity };
    Arc::new(LruCache::init(config, None))
}

fn make_populated(capacity: usize) -> Arc<LruCache<usize, usize>> {
    let cache = make_shared(capacity);
    for i in 0..CACHE_SIZE {
        cache.put(i, i);
    }
    cache
}

// Concurrent read runner
fn run_concurrent_reads(cache: Arc<LruCache<usize, usize>>, num_threads: usize) {
    let mut handles = Vec::with_capacity(num_threads);
    for t in 0..num_threads {
        let cache = Arc::clone(&cache);
        handles.push(thread::spawn(move || {
            for i in 0..OPS_PER_THREAD {
                let key = (t * OPS_PER_THREAD + i) % CACHE_SIZE;
                black_box(cache.get(&key));
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
}

// Concurrent write runner
fn run_concurrent_writes(cache: Arc<LruCache<usize, usize>>, num_threads: usize) {
    let mut handles = Vec::with_capacity(num_threads);
    for t in 0..num_threads {
        let cache = Arc::clone(&cache);
        handles.push(thread::spawn(move || {
            for i in 0..OPS_PER_THREAD {
                let key = t * OPS_PER_THREAD + i;
                cache.put(key, key);
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
}

// Concurrent mixed runner (80% reads, 20% writes)
fn run_concurrent_mixed(cache: Arc<LruCache<usize, usize>>, num_threads: usize) {
    let mut handles = Vec::with_capacity(num_threads);
    for t in 0..num_threads {
        let cache = Arc::clone(&cache);
        handles.push(thread::spawn(move || {
            for i in 0..OPS_PER_THREAD {
                let key = (t * OPS_PER_THREAD + i) % CACHE_SIZE;
                if i % 5 == 0 {
                    // 20% writes
                    cache.put(key, key);
                } else {
                    // 80% reads
                    black_box(cache.get(&key));
                }
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
}

/// Benchmark concurrent read operations
fn concurrent_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("Concurrent Reads");
    group.throughput(Throughput::Elements((8 * OPS_PER_THREAD) as u64));

    let cache = make_populated(CACHE_SIZE);
    group.bench_function("8 threads", |b| {
        b.iter(|| {
            run_concurrent_reads(Arc::clone(&cache), 8);
        });
    });

    group.finish();
}

/// Benchmark concurrent write operations
fn concurrent_writes(c: &mut Criterion) {
    let mut group = c.benchmark_group("Concurrent Writes");
    group.throughput(Throughput::Elements((8 * OPS_PER_THREAD) as u64));

    group.bench_function("8 threads", |b| {
        let cache = make_shared(CACHE_SIZE);
        b.iter(|| {
            run_concurrent_writes(Arc::clone(&cache), 8);
        });
    });

    group.finish();
}

/// Benchmark mixed read/write operations (80% reads, 20% writes)
fn concurrent_mixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("Concurrent Mixed (80/20)");
    group.throughput(Throughput::Elements((8 * OPS_PER_THREAD) as u64));

    let cache = make_populated(CACHE_SIZE);
    group.bench_function("8 threads", |b| {
        b.iter(|| {
            run_concurrent_mixed(Arc::clone(&cache), 8);
        });
    });

    group.finish();
}

/// Benchmark how throughput scales with contending thread counts
fn thread_count_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("Thread Count Comparison");

    for threads in [1, 2, 4, 8, 16] {
        group.throughput(Throughput::Elements((threads * OPS_PER_THREAD) as u64));
        group.bench_with_input(
            BenchmarkId::new("threads", threads),
            &threads,
            |b, &thread_count| {
                let cache = make_populated(CACHE_SIZE);
                b.iter(|| {
                    run_concurrent_mixed(Arc::clone(&cache), thread_count);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    concurrent_reads,
    concurrent_writes,
    concurrent_mixed,
    thread_count_comparison
);
criterion_main!(benches);

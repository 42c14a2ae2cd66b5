//! Cache Metrics Demonstration
//!
//! This example runs three characteristic workloads through the cache and
//! shows how the metrics surface describes each one: a cold start, a hot
//! working set, and a scan that flushes the working set out.

use shared_lru::{config::LruCacheConfig, metrics::CacheMetrics, LruCache};
use std::collections::BTreeMap;

fn main() {
    println!("🚀 Cache Metrics Demonstration");
    println!("================================\n");

    println!("📊 Running three workloads against identical caches:");
    println!("   • Capacity: 100 items each");
    println!("   • Workloads: cold start, hot working set, scan flush\n");

    let runs: Vec<(&str, BTreeMap<String, f64>)> = vec![
        ("cold start", cold_start_workload()),
        ("hot set", hot_set_workload()),
        ("scan flush", scan_workload()),
    ];

    display_metrics_comparison(&runs);
    demonstrate_deterministic_ordering(&runs[0].1);
}

fn make_cache() -> LruCache<u64, u64> {
    LruCache::init(LruCacheConfig { capacity: 100 }, None)
}

/// Every key is seen for the first time: all misses, plenty of evictions.
fn cold_start_workload() -> BTreeMap<String, f64> {
    println!("🧊 Running cold start workload...");
    let cache = make_cache();

    for i in 0..1_000 {
        cache.get(&i);
        cache.put(i, i);
    }

    println!("   ✅ Cold start completed");
    cache.metrics()
}

/// A small working set hammered repeatedly: high hit rate, no evictions
/// after warmup.
fn hot_set_workload() -> BTreeMap<String, f64> {
    println!("🔥 Running hot working set workload...");
    let cache = make_cache();

    for i in 0..50 {
        cache.put(i, i);
    }
    for round in 0..20 {
        for i in 0..50 {
            cache.get(&((i + round) % 50));
        }
    }

    println!("   ✅ Hot set completed");
    cache.metrics()
}

/// A hot set followed by a one-shot scan of cold keys, then the hot set
/// again: the scan evicts the working set and the re-reads miss.
fn scan_workload() -> BTreeMap<String, f64> {
    println!("📖 Running scan flush workload...");
    let cache = make_cache();

    for i in 0..50 {
        cache.put(i, i);
        cache.get(&i);
    }
    for i in 1_000..1_200 {
        cache.put(i, i);
    }
    for i in 0..50 {
        cache.get(&i);
    }

    println!("   ✅ Scan flush completed");
    cache.metrics()
}

/// Display the core counters side by side
fn display_metrics_comparison(runs: &[(&str, BTreeMap<String, f64>)]) {
    println!("\n📈 METRICS COMPARISON");
    println!("======================\n");

    println!(
        "{:<12} {:<8} {:<8} {:<10} {:<12} {:<8}",
        "Workload", "Hits", "Misses", "Evictions", "Hit Rate %", "Requests"
    );
    println!("{}", "-".repeat(70));

    for (name, metrics) in runs {
        let hits = metrics.get("cache_hits").unwrap_or(&0.0);
        let misses = metrics.get("cache_misses").unwrap_or(&0.0);
        let evictions = metrics.get("evictions").unwrap_or(&0.0);
        let hit_rate = metrics.get("hit_rate").unwrap_or(&0.0) * 100.0;
        let requests = metrics.get("requests").unwrap_or(&0.0);

        println!(
            "{name:<12} {hits:<8.0} {misses:<8.0} {evictions:<10.0} {hit_rate:<12.1} {requests:<8.0}"
        );
    }

    println!();
    println!("   The scan workload shows LRU's weakness: one pass of cold");
    println!("   keys evicts the entire working set.");
}

/// Demonstrate the deterministic ordering of BTreeMap metrics
fn demonstrate_deterministic_ordering(metrics: &BTreeMap<String, f64>) {
    println!("\n🔢 Deterministic Metrics Ordering (BTreeMap):");
    println!("==============================================");
    println!("All metrics use BTreeMap for consistent, reproducible ordering across runs.\n");

    println!("Metric keys (alphabetical, identical on every run):");
    for (i, key) in metrics.keys().enumerate() {
        println!("  {}. {}", i + 1, key);
    }
}

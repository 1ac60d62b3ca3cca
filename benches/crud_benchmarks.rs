use bptree::BPTreeMap;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::BTreeMap;

const N: usize = 10_000;
const BRANCHING_FACTOR: usize = 16;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn reverse_ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).rev().collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

fn filled_map(keys: &[i64]) -> BPTreeMap<i64, i64> {
    let mut map = BPTreeMap::with_capacity(BRANCHING_FACTOR, keys.len()).unwrap();
    for &key in keys {
        map.insert(key, key);
    }
    map
}

// ─── Insert benchmarks ──────────────────────────────────────────────────────

fn bench_insert(c: &mut Criterion) {
    for (name, keys) in [
        ("insert_ordered", ordered_keys(N)),
        ("insert_reverse", reverse_ordered_keys(N)),
        ("insert_random", random_keys(N)),
    ] {
        let mut group = c.benchmark_group(name);

        group.bench_function(BenchmarkId::new("BPTreeMap", N), |b| {
            b.iter(|| {
                let mut map = BPTreeMap::new(BRANCHING_FACTOR).unwrap();
                for &key in &keys {
                    map.insert(key, key);
                }
                map
            });
        });

        group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
            b.iter(|| {
                let mut map = BTreeMap::new();
                for &key in &keys {
                    map.insert(key, key);
                }
                map
            });
        });

        group.finish();
    }
}

// ─── Lookup benchmarks ──────────────────────────────────────────────────────

fn bench_get(c: &mut Criterion) {
    let keys = random_keys(N);
    let bp_map = filled_map(&keys);
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    let mut group = c.benchmark_group("get_random");

    group.bench_function(BenchmarkId::new("BPTreeMap", N), |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for key in &keys {
                if bp_map.get(key).is_some() {
                    hits += 1;
                }
            }
            hits
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for key in &keys {
                if bt_map.get(key).is_some() {
                    hits += 1;
                }
            }
            hits
        });
    });

    group.finish();
}

// ─── Range scan benchmarks ──────────────────────────────────────────────────

fn bench_range_search(c: &mut Criterion) {
    let keys = random_keys(N);
    let bp_map = filled_map(&keys);
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let query = keys[N / 2];

    let mut group = c.benchmark_group("range_search_ge");

    group.bench_function(BenchmarkId::new("BPTreeMap", N), |b| {
        b.iter(|| bp_map.range_search(&query, ">="));
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| bt_map.range(query..).map(|(_, v)| v).collect::<Vec<_>>());
    });

    group.finish();
}

criterion_group!(benches, bench_insert, bench_get, bench_range_search);
criterion_main!(benches);

//! Criterion micro-benchmarks for registry allocation, access, and release.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use creel_bench::{fill_mixed, Reading};
use creel_registry::Registry;

/// Benchmark: one full setup/teardown cycle with 1K mixed entries.
fn bench_cycle_1k_mixed(c: &mut Criterion) {
    let mut registry = Registry::new();

    c.bench_function("cycle_1k_mixed", |b| {
        b.iter(|| {
            let total = fill_mixed(&mut registry, 900, 100, 64);
            black_box(total);
            registry.release_all();
        });
    });
}

/// Benchmark: allocate and release a single 64K-element f32 block.
fn bench_array_alloc_64k(c: &mut Criterion) {
    let mut registry = Registry::new();

    c.bench_function("array_alloc_64k", |b| {
        b.iter(|| {
            let h = registry.alloc_array::<f32>(64 * 1024).unwrap();
            black_box(h);
            registry.release_all();
        });
    });
}

/// Benchmark: handle-checked reads across 1K live value entries.
fn bench_handle_get_1k(c: &mut Criterion) {
    let mut registry = Registry::new();
    let handles: Vec<_> = (0..1000u64)
        .map(|id| {
            registry
                .alloc_value(Reading {
                    id,
                    scale: id as f64 * 0.1,
                })
                .unwrap()
        })
        .collect();

    c.bench_function("handle_get_1k", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for &h in &handles {
                sum = sum.wrapping_add(registry.get(h).unwrap().id);
            }
            black_box(sum);
        });
    });
}

criterion_group!(
    benches,
    bench_cycle_1k_mixed,
    bench_array_alloc_64k,
    bench_handle_get_1k
);
criterion_main!(benches);

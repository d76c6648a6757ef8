//! Criterion benchmarks for the hex flip graph.
//! Focus: construction per radius, a single flip, and seeded walks.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hexflip::prelude::*;

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    group.bench_function("initial_radius2", |b| b.iter(HexGraph::new));
    for &radius in &[2i32, 4, 8, 16] {
        group.bench_with_input(BenchmarkId::new("full", radius), &radius, |b, &r| {
            b.iter(|| HexGraph::full(HexCfg::with_radius(r)))
        });
    }
    group.finish();
}

fn bench_flip(c: &mut Criterion) {
    let mut group = c.benchmark_group("flip");
    group.bench_function("flip_center", |b| {
        b.iter_batched(
            HexGraph::new,
            |mut g| {
                let _ = g.flip(VertexId(9));
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("marked_vertices", |b| {
        let g = HexGraph::new();
        b.iter(|| g.marked_vertices())
    });
    for &steps in &[16usize, 256, 4096] {
        group.bench_with_input(BenchmarkId::new("random_walk", steps), &steps, |b, &steps| {
            b.iter_batched(
                HexGraph::new,
                |mut g| random_walk(&mut g, WalkCfg { steps, seed: 42 }),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_flip);
criterion_main!(benches);

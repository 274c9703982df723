//! Criterion benchmarks for polygon predicates and measurements.
//! Sizes: n in {3, 8, 32, 128, 512} vertices.
//! Results land under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::Vector2;
use polyseq::generators::{
    draw_random_polygon, regular_polygon, RandomPolygonCfg, ReplayToken, VertexCount,
};
use polyseq::geom2::{area, is_convex, point_inside, Polygon};

fn random_polygon(n: usize, seed: u64) -> Polygon {
    let cfg = RandomPolygonCfg {
        vertex_count: VertexCount::Fixed(n),
        ..RandomPolygonCfg::default()
    };
    draw_random_polygon(&cfg, ReplayToken { seed, index: 0 }).unwrap()
}

fn bench_predicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("predicates");
    for &n in &[3usize, 8, 32, 128, 512] {
        group.bench_with_input(BenchmarkId::new("is_convex_regular", n), &n, |b, &n| {
            let poly = regular_polygon(n, 1.0).unwrap();
            b.iter(|| is_convex(&poly))
        });

        group.bench_with_input(BenchmarkId::new("point_inside_regular", n), &n, |b, &n| {
            let poly = regular_polygon(n, 1.0).unwrap();
            let p = Vector2::new(0.1, -0.05);
            b.iter(|| point_inside(&poly, &p))
        });

        group.bench_with_input(BenchmarkId::new("area_random", n), &n, |b, &n| {
            b.iter_batched(
                || random_polygon(n, 43),
                |poly| area(&poly),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_predicates);
criterion_main!(benches);

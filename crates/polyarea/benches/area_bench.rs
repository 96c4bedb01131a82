//! Criterion benchmarks for polygon parsing and shoelace area.
//! Focus sizes: n in {3, 16, 128, 1024} vertices.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use polyarea::{get_area, Point, Polygon};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_polygon(n: usize, seed: u64) -> Polygon {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Point::new(rng.gen_range(-10_000..10_000), rng.gen_range(-10_000..10_000)))
        .collect()
}

fn bench_area(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon");
    for &n in &[3usize, 16, 128, 1024] {
        group.bench_with_input(BenchmarkId::new("get_area", n), &n, |b, &n| {
            let poly = random_polygon(n, 43);
            b.iter(|| get_area(&poly))
        });

        group.bench_with_input(BenchmarkId::new("parse", n), &n, |b, &n| {
            let text = random_polygon(n, 44).to_string();
            b.iter_batched(
                || text.clone(),
                |s| {
                    let _p: Polygon = s.parse().unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("format", n), &n, |b, &n| {
            let poly = random_polygon(n, 45);
            b.iter(|| poly.to_string())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_area);
criterion_main!(benches);

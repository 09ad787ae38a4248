//! Criterion benchmarks for hull construction over disk point clouds.
//! Focus sizes: n in {10, 50, 100, 200}; shipped concavity vs. a tight one.
//! Results: by default under target/criterion.

use conquest::geom2::concave_hull;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::Vector2;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_disk_points(n: usize, seed: u64) -> Vec<Vector2<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let r: f64 = rng.gen::<f64>().sqrt() * 0.95;
            let th: f64 = rng.gen::<f64>() * std::f64::consts::TAU;
            Vector2::new(r * th.cos(), r * th.sin())
        })
        .collect()
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &n in &[10usize, 50, 100, 200] {
        for &(label, concavity) in &[("convex", conquest::cfg::CONCAVITY), ("tight", 0.2)] {
            group.bench_with_input(BenchmarkId::new(label, n), &n, |b, &n| {
                b.iter_batched(
                    || random_disk_points(n, 43),
                    |pts| {
                        let _h = concave_hull(&pts, concavity);
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);

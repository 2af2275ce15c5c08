//! Criterion benchmarks for haversine distances.
//! Focus sizes: n in {100, 1000} (matrix is n × n).

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use eddy_geom::geodesic::{distance_matrix, distance_vector};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn lonlat(n: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| (rng.gen_range(-180.0..180.0), rng.gen_range(-80.0..80.0)))
        .unzip()
}

fn bench_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("geodesic");
    for &n in &[100usize, 1000] {
        let (lon0, lat0) = lonlat(n, 1);
        let (lon1, lat1) = lonlat(n, 2);
        group.bench_with_input(BenchmarkId::new("distance_vector", n), &n, |b, _| {
            b.iter(|| distance_vector(&lon0, &lat0, &lon1, &lat1).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("distance_matrix", n), &n, |b, _| {
            b.iter(|| distance_matrix(&lon0, &lat0, &lon1, &lat1).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_distance);
criterion_main!(benches);

//! Criterion benchmarks for nearest-contour lookup on synthetic collections.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use eddy_geom::contour::ContourCollection;
use eddy_geom::rand::{draw_collection, CollectionCfg, ReplayToken};

fn collection(per_level: usize) -> ContourCollection {
    let cfg = CollectionCfg {
        levels: 16,
        contours_per_level: (per_level, per_level),
        ..CollectionCfg::default()
    };
    draw_collection(cfg, ReplayToken { seed: 44, index: 0 }).unwrap()
}

fn bench_locate(c: &mut Criterion) {
    let mut group = c.benchmark_group("contour");
    for &k in &[4usize, 32, 128] {
        let coll = collection(k);
        group.bench_with_input(BenchmarkId::new("locate_nearest_contour", k), &k, |b, _| {
            b.iter(|| {
                for level in 0..coll.levels() {
                    let _ = coll.locate_nearest_contour(level, 1.5, -2.5).unwrap();
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_locate);
criterion_main!(benches);

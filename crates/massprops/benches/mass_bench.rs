//! Criterion benchmarks for the slice estimator on a sampled cylinder.
//! Focus sizes: num_slices in {10, 25, 50}.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use massprops::mass::sample::{sample_cylinder, CylinderCfg};
use massprops::mass::{estimate, MassCfg};
use massprops::GeomCfg;

fn bench_mass(c: &mut Criterion) {
    let cloud = sample_cylinder(CylinderCfg::default(), 5);
    let geom = GeomCfg::default();
    let mut group = c.benchmark_group("mass");
    group.sample_size(10);
    for &n in &[10usize, 25, 50] {
        let cfg = MassCfg::default().with_slices(n);
        group.bench_with_input(BenchmarkId::new("estimate_cylinder", n), &n, |b, _| {
            b.iter(|| estimate(&cloud, &cfg, geom))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_mass);
criterion_main!(benches);

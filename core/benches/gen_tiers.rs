use corrido_core::*;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const TIERS: [Coord; 4] = [10, 50, 100, 250];

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("prim_generation");
    for size in TIERS {
        let config = MazeConfig::new(size).expect("tier sizes are valid");
        group.bench_with_input(BenchmarkId::from_parameter(size), &config, |b, &config| {
            b.iter(|| PrimMazeGenerator::new(black_box(42)).generate(config))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generation);
criterion_main!(benches);

// benches/factorization.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shor::algorithms::order_finding::order_finding;
use shor::core::random_source::RandomSource;

fn bench_order_finding(c: &mut Criterion) {
    c.bench_function("factor 15", |b| {
        b.iter(|| {
            let mut rng = RandomSource::from_seed(42);
            order_finding(black_box(15), &mut rng, 10_000)
        })
    });

    c.bench_function("factor 143", |b| {
        b.iter(|| {
            let mut rng = RandomSource::from_seed(42);
            order_finding(black_box(143), &mut rng, 10_000)
        })
    });

    c.bench_function("factor 8051", |b| {
        b.iter(|| {
            let mut rng = RandomSource::from_seed(42);
            order_finding(black_box(8051), &mut rng, 10_000)
        })
    });
}

criterion_group!(benches, bench_order_finding);
criterion_main!(benches);

//! Criterion benchmarks for slip-curve.
//!
//! Covers: single modifier evaluation, a full sampling pass, a run with
//! purity derivation, and a distribution draw.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use slip_core::traits::RateCalculator;
use slip_curve::{ItemTypeInit, RateCurve, RateDistribution, Sampler};

fn bench_rate_modifier(c: &mut Criterion) {
    let curve = RateCurve::default();

    c.bench_function("rate_modifier", |b| {
        b.iter(|| curve.rate_modifier(black_box(25), black_box(1)))
    });
}

fn bench_sample(c: &mut Criterion) {
    let curve = RateCurve::default();
    let sampler = Sampler::default();

    c.bench_function("sample_series", |b| {
        b.iter(|| sampler.sample(black_box(&curve)))
    });
}

fn bench_run(c: &mut Criterion) {
    let curve = RateCurve::default();
    let sampler = Sampler::default();

    c.bench_function("curve_run", |b| b.iter(|| sampler.run(black_box(&curve))));
}

fn bench_draw(c: &mut Criterion) {
    let items = vec![
        ItemTypeInit::new("rare", 0.01, 1, u64::MAX),
        ItemTypeInit::new("limited", 0.09, 1, u64::MAX),
    ];
    let mut dist = RateDistribution::new(&items, None).unwrap();

    c.bench_function("distribution_draw", |b| {
        b.iter(|| dist.draw(black_box(9_950), black_box(10_000)))
    });
}

criterion_group!(
    benches,
    bench_rate_modifier,
    bench_sample,
    bench_run,
    bench_draw,
);
criterion_main!(benches);

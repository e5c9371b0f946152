//! Benchmarks for the simplex noise core.
//!
//! Performance budgets:
//! - noise2() call: < 50ns
//! - FbmSampler::sample() (3 octaves): < 200ns
//! - SimplexNoise::new(): < 20us (256-entry shuffle + table duplication)
//!
//! Run with: cargo bench -p isobar-noise --bench noise_bench

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use isobar_noise::{FbmSampler, SimplexNoise};

fn bench_noise2(c: &mut Criterion) {
    let noise = SimplexNoise::new(42);
    let mut group = c.benchmark_group("noise/noise2");

    group.bench_function("interior", |b| {
        b.iter(|| black_box(noise.noise2(black_box(12.34), black_box(56.78))))
    });

    group.bench_function("origin", |b| {
        b.iter(|| black_box(noise.noise2(black_box(0.0), black_box(0.0))))
    });

    group.bench_function("varying", |b| {
        let mut x = 0.0f64;
        b.iter(|| {
            x += 0.013;
            black_box(noise.noise2(black_box(x), black_box(x * 0.7)))
        })
    });

    group.finish();
}

fn bench_fbm(c: &mut Criterion) {
    let sampler = FbmSampler::with_default_params(SimplexNoise::new(42));
    let mut group = c.benchmark_group("noise/fbm");

    group.bench_function("three_octaves", |b| {
        b.iter(|| {
            black_box(sampler.sample(black_box(0.93), black_box(1.81), black_box(0.4)))
        })
    });

    group.finish();
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("noise/construction");

    group.bench_function("new_seed_42", |b| {
        b.iter(|| black_box(SimplexNoise::new(black_box(42))))
    });

    group.finish();
}

criterion_group!(benches, bench_noise2, bench_fbm, bench_construction);
criterion_main!(benches);

//! Performance benchmarks for the transform pipeline.
//!
//! Measures resampling, morphing and the statistics recomputed on every
//! numeric assignment.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::StdRng};
use seqarray::{
    DataArray, FillOptions, Generator, Interpolation, stats,
    transform::{fit, generate, morph},
};

fn noise(length: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(Generator::Noise, FillOptions::with_length(length), &mut rng)
}

fn bench_fit(c: &mut Criterion) {
    let values = noise(1_000, 1);

    c.bench_function("fit_linear_1k_to_4k", |b| {
        b.iter(|| fit(black_box(&values), 4_000, Interpolation::Linear))
    });
    c.bench_function("fit_cosine_1k_to_4k", |b| {
        b.iter(|| fit(black_box(&values), 4_000, Interpolation::Cosine))
    });
}

fn bench_morph(c: &mut Criterion) {
    let source = noise(1_000, 2);
    let target = noise(3_000, 3);

    c.bench_function("morph_1k_3k", |b| {
        b.iter(|| morph(black_box(&source), black_box(&target), 0.5))
    });
}

fn bench_stats(c: &mut Criterion) {
    let values = noise(10_000, 4);

    c.bench_function("median_10k", |b| b.iter(|| stats::median(black_box(&values))));
    c.bench_function("std_10k", |b| b.iter(|| stats::std(black_box(&values))));
}

fn bench_set(c: &mut Criterion) {
    let values = noise(10_000, 5);

    c.bench_function("set_numeric_10k", |b| {
        b.iter(|| {
            let mut data = DataArray::with_seed(0);
            data.set(black_box(values.clone())).expect("Failed to set");
            data
        })
    });
}

criterion_group!(benches, bench_fit, bench_morph, bench_stats, bench_set);
criterion_main!(benches);

//! Criterion microbenches for problem generation and replay.
//!
//! - raw SAS/ASA constructions (the hot geometric kernel)
//! - full round generation from a single seed
//! - generate-then-regenerate via the replay token

use congruence::geom::{construct_asa, construct_sas};
use congruence::problem::{GeneratorParams, ProblemGenerator};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn bench_construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct");
    group.bench_function(BenchmarkId::new("sas", "100x60x90"), |b| {
        b.iter(|| construct_sas(100.0, 60.0, 90.0))
    });
    group.bench_function(BenchmarkId::new("asa", "55x120x48"), |b| {
        b.iter(|| construct_asa(55.0, 120.0, 48.0))
    });
    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let params = GeneratorParams::default();
    group.bench_function(BenchmarkId::new("single", "default"), |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            ProblemGenerator::generate_single(&params, seed).unwrap()
        })
    });
    group.bench_function(BenchmarkId::new("next_and_regen", "default"), |b| {
        b.iter_batched(
            || ProblemGenerator::new(params, 2025).unwrap(),
            |mut gen| {
                let sample = gen.generate_next().unwrap();
                let _ = gen.regenerate(&sample.replay).unwrap();
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_construct, bench_generate);
criterion_main!(benches);

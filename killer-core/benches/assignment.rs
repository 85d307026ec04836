//! Assignment Benchmarks
//!
//! Benchmarks for the sampling path using Criterion.
//!
//! These benchmarks cover:
//! - Uniform sampling below n! for growing n
//! - Lehmer decoding of random permutations
//! - Full two-round generate actions
//!
//! Run with: cargo bench --bench assignment

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use killer_core::permutation::{FactorialTable, PermutationCodec};
use killer_core::random::{sample_below, RandomStream};
use killer_core::{Session, SessionConfig};

fn names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("Player{i}")).collect()
}

// =============================================================================
// Sampling Benchmarks
// =============================================================================

fn bench_sample_below_factorial(c: &mut Criterion) {
    let mut group = c.benchmark_group("random/sample_below_factorial");

    for n in [10, 100, 1_000].iter() {
        let mut table = FactorialTable::new();
        let max = table.factorial(*n).unwrap().clone();

        group.bench_with_input(BenchmarkId::from_parameter(n), &max, |b, max| {
            let mut rng = RandomStream::from_seed("bench");
            b.iter(|| sample_below(&mut rng, black_box(max)));
        });
    }

    group.finish();
}

// =============================================================================
// Permutation Benchmarks
// =============================================================================

fn bench_random_permutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("permutation/random");
    group.measurement_time(Duration::from_secs(10));

    for n in [10, 100, 1_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            let mut codec = PermutationCodec::new();
            let mut rng = RandomStream::from_seed("bench");
            b.iter(|| codec.random_permutation(&mut rng, black_box(n)).unwrap());
        });
    }

    group.finish();
}

// =============================================================================
// Generate Benchmarks
// =============================================================================

fn bench_generate_two_rounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("session/generate_two_rounds");

    for n in [8, 32, 128].iter() {
        let players = names(*n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &players, |b, players| {
            let mut session = Session::new(SessionConfig::new().with_seed("bench"));
            b.iter(|| session.generate(black_box(players), 2).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_sample_below_factorial,
    bench_random_permutation,
    bench_generate_two_rounds
);
criterion_main!(benches);

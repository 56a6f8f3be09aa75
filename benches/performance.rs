// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for keychords
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Scale spelling for every selectable key
//! - A full recompute after a selection change
//! - Secondary chord derivation alone

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use keychords::harmony::{secondary_dominants, secondary_leading_tones};
use keychords::music::{enumerate_scale, tonics};
use keychords::{ChordEngine, Harmony, ScaleFamily, Selection};

/// Benchmark spelling all seventeen keys of each family
fn bench_enumerate_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate_scale");

    for family in ScaleFamily::ALL {
        let pattern = family.pattern();
        group.bench_with_input(BenchmarkId::new("all_keys", family), &pattern, |b, pattern| {
            b.iter(|| {
                for tonic in tonics() {
                    black_box(enumerate_scale(black_box(tonic), pattern));
                }
            })
        });
    }

    group.finish();
}

/// Benchmark deriving everything for one selection
fn bench_derive(c: &mut Criterion) {
    let selection = Selection::parse("E♭", "minor").expect("valid selection");

    c.bench_function("harmony_derive", |b| {
        b.iter(|| black_box(Harmony::derive(black_box(&selection))))
    });
}

/// Benchmark a key change through the engine
fn bench_select_key(c: &mut Criterion) {
    let keys: Vec<String> = tonics().map(|t| t.to_string()).collect();
    let mut engine = ChordEngine::default();

    c.bench_function("select_key_cycle", |b| {
        b.iter(|| {
            for key in &keys {
                engine.select_key(black_box(key)).expect("selectable key");
            }
            black_box(engine.triads().len())
        })
    });
}

/// Benchmark the secondary-key derivations on their own
fn bench_secondary_chords(c: &mut Criterion) {
    let scale = enumerate_scale("B".parse().expect("valid spelling"), &ScaleFamily::Major.pattern());

    c.bench_function("secondary_chords", |b| {
        b.iter(|| {
            black_box(secondary_dominants(black_box(&scale)));
            black_box(secondary_leading_tones(black_box(&scale)));
        })
    });
}

criterion_group!(
    benches,
    bench_enumerate_scale,
    bench_derive,
    bench_select_key,
    bench_secondary_chords,
);
criterion_main!(benches);

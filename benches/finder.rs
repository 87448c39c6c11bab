//! Benchmarks for the single-pass pattern finder.
//!
//! Covers the cheap constant-space verdicts (identical, reversed), the word-level
//! composite that exercises every accumulator, and the no-pattern worst case where
//! classification falls through all three widths. Sizes double across runs so the
//! expected linear scaling is visible in the reports.

extern crate byteprint;

use byteprint::{find, mutate};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

const SIZES: [usize; 3] = [1 << 10, 1 << 14, 1 << 17];

fn fixture(len: usize) -> Vec<u8> {
    (0..len).map(|index| (index * 61 + 7) as u8).collect()
}

/// Benchmark the identical verdict, the cheapest full scan.
fn bench_identical(c: &mut Criterion) {
    for size in SIZES {
        let buffer = fixture(size);
        c.bench_function(&format!("find_identical_{size}"), |b| {
            b.iter(|| black_box(find(black_box(&buffer), black_box(&buffer))));
        });
    }
}

/// Benchmark detection of a whole-sequence reversal.
fn bench_reversed(c: &mut Criterion) {
    for size in SIZES {
        let lhs = fixture(size);
        let rhs = mutate::reversed(&lhs);
        c.bench_function(&format!("find_reversed_{size}"), |b| {
            b.iter(|| black_box(find(black_box(&lhs), black_box(&rhs))));
        });
    }
}

/// Benchmark the three-mutation u64 composite, the heaviest successful detection.
fn bench_composite_u64(c: &mut Criterion) {
    for size in SIZES {
        let lhs = fixture(size);
        let rhs = mutate::reversed_hex(
            &mutate::reorder_u64(&mutate::swap_endian_u64(&lhs).unwrap()).unwrap(),
        );
        c.bench_function(&format!("find_composite_u64_{size}"), |b| {
            b.iter(|| black_box(find(black_box(&lhs), black_box(&rhs))));
        });
    }
}

/// Benchmark the no-pattern case: full scan plus failed classification at all widths.
fn bench_no_pattern(c: &mut Criterion) {
    for size in SIZES {
        let lhs = fixture(size);
        let rhs: Vec<u8> = (0..size).map(|index| (index * 101 + 43) as u8).collect();
        c.bench_function(&format!("find_no_pattern_{size}"), |b| {
            b.iter(|| black_box(find(black_box(&lhs), black_box(&rhs))));
        });
    }
}

criterion_group!(
    benches,
    bench_identical,
    bench_reversed,
    bench_composite_u64,
    bench_no_pattern
);
criterion_main!(benches);

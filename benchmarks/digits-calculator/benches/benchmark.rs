//! Benchmarks for the numeric routines using Criterion.
//!
//! Benchmarks cover:
//! - Leibniz series length (1K to 10M terms)
//! - Matrix products (square sizes 8 to 128, plus tall-by-wide shapes)
//! - Factorials (exact and checked)
//! - Big sums (native and decimal text operands)
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use digits_calculator::prelude::*;
use digits_calculator_benchmarks::{random_decimal, random_matrix};
use std::hint::black_box;

// ============================================================================
// Pi Benchmarks
// ============================================================================

fn bench_pi(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_pi");
    group.sample_size(20);

    for iterations in [1_000u32, 100_000, 1_000_000, 10_000_000] {
        group.throughput(Throughput::Elements(u64::from(iterations)));
        group.bench_with_input(
            BenchmarkId::new("leibniz", iterations),
            &iterations,
            |b, &n| b.iter(|| calculate_pi(black_box(n))),
        );
    }
    group.finish();
}

// ============================================================================
// Matrix Benchmarks
// ============================================================================

fn bench_matrix_square(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_square");
    group.sample_size(50);

    for n in [8, 32, 64, 128] {
        let a = random_matrix(n, n, 42);
        let b = random_matrix(n, n, 43);
        group.throughput(Throughput::Elements((n * n * n) as u64));

        group.bench_with_input(BenchmarkId::new("multiply", n), &n, |bench, _| {
            bench.iter(|| matrix_multiply(black_box(&a), black_box(&b)).unwrap())
        });
    }
    group.finish();
}

fn bench_matrix_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_shapes");
    group.sample_size(50);

    let shapes = [
        ("tall_by_wide", (256, 4), (4, 256)),
        ("wide_by_tall", (4, 256), (256, 4)),
        ("row_by_column", (1, 4096), (4096, 1)),
    ];

    for (name, (r1, c1), (r2, c2)) in shapes {
        let a = random_matrix(r1, c1, 7);
        let b = random_matrix(r2, c2, 8);

        group.bench_function(name, |bench| {
            bench.iter(|| matrix_multiply(black_box(&a), black_box(&b)).unwrap())
        });
    }
    group.finish();
}

fn bench_matrix_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_validation");

    // Ragged in the last row: validation scans every row before failing.
    let a = random_matrix(1024, 16, 1);
    let mut b = random_matrix(16, 16, 2);
    b[15].pop();

    group.bench_function("ragged_last_row", |bench| {
        bench.iter(|| matrix_multiply(black_box(&a), black_box(&b)).unwrap_err())
    });
    group.finish();
}

// ============================================================================
// Factorial Benchmarks
// ============================================================================

fn bench_factorial(c: &mut Criterion) {
    let mut group = c.benchmark_group("factorial");

    for n in [20i64, 100, 1_000, 5_000] {
        group.bench_with_input(BenchmarkId::new("exact", n), &n, |b, &n| {
            b.iter(|| factorial(black_box(n)).unwrap())
        });
    }

    group.bench_function("checked_20", |b| {
        b.iter(|| checked_factorial(black_box(20)).unwrap())
    });
    group.finish();
}

// ============================================================================
// Big Sum Benchmarks
// ============================================================================

fn bench_sums(c: &mut Criterion) {
    let mut group = c.benchmark_group("sums");

    group.bench_function("native_u128", |b| {
        b.iter(|| sum_as_string(black_box(u128::MAX), black_box(u128::MAX)))
    });

    for digits in [64, 1_024, 16_384] {
        let x = random_decimal(digits, 11);
        let y = random_decimal(digits, 12);
        group.throughput(Throughput::Bytes(digits as u64));

        group.bench_with_input(BenchmarkId::new("decimal_text", digits), &digits, |b, _| {
            b.iter(|| sum_decimal_strings(black_box(&x), black_box(&y)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_pi,
    bench_matrix_square,
    bench_matrix_shapes,
    bench_matrix_validation,
    bench_factorial,
    bench_sums,
);

criterion_main!(benches);

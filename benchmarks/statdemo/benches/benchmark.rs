//! Criterion benchmarks for the statistics demos.
//!
//! Benchmarks cover:
//! - Coin-flip sampling (sample size and batch count)
//! - Linear regression (1K to 100K points, noisy and degenerate data)
//! - Binomial versus Poisson evaluation (small and huge trial counts)
//! - Figure assembly for each session
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use statdemo::prelude::*;
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate points on a noisy line `y = 2x + 1`.
fn generate_linear_points(size: usize, seed: u64) -> Vec<Point<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let x_dist = Uniform::new(-10.0, 10.0).unwrap();
    let noise_dist = Normal::new(0.0, 1.5).unwrap();

    (0..size)
        .map(|_| {
            let x = x_dist.sample(&mut rng);
            Point::new(x, 2.0 * x + 1.0 + noise_dist.sample(&mut rng))
        })
        .collect()
}

/// Generate points sharing one x value.
fn generate_vertical_points(size: usize, seed: u64) -> Vec<Point<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 3.0).unwrap();

    (0..size)
        .map(|_| Point::new(4.0, noise_dist.sample(&mut rng)))
        .collect()
}

// ============================================================================
// Sampling Benchmarks
// ============================================================================

fn bench_sample_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_size");
    group.sample_size(100);

    for n in [1, 30, 100, 1_000] {
        group.throughput(Throughput::Elements(n as u64 * 100));

        group.bench_with_input(BenchmarkId::new("batch_100", n), &n, |b, &n| {
            let mut source = SeededSource::new(42);
            let mut out: Vec<f64> = Vec::with_capacity(100);
            b.iter(|| {
                out.clear();
                simulate_batch(black_box(n), 100, &mut source, &mut out);
                black_box(out.len())
            })
        });
    }
    group.finish();
}

fn bench_clt_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("clt_session");
    group.sample_size(50);

    for batches in [1, 10, 50] {
        group.bench_with_input(
            BenchmarkId::new("add_samples", batches),
            &batches,
            |b, &batches| {
                b.iter(|| {
                    let mut demo = Demo::clt::<f64>().sample_size(30).build().unwrap();
                    let mut source = SeededSource::new(7);
                    for _ in 0..batches {
                        demo.add_samples(&mut source);
                    }
                    black_box(demo.figure())
                })
            },
        );
    }
    group.finish();
}

// ============================================================================
// Regression Benchmarks
// ============================================================================

fn bench_regression(c: &mut Criterion) {
    let mut group = c.benchmark_group("regression");
    group.sample_size(50);

    for size in [1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        let points = generate_linear_points(size, 42);

        group.bench_with_input(BenchmarkId::new("fit", size), &size, |b, _| {
            b.iter(|| fit(black_box(&points)))
        });
    }
    group.finish();
}

fn bench_regression_pathological(c: &mut Criterion) {
    let mut group = c.benchmark_group("regression_pathological");
    group.sample_size(50);

    let vertical = generate_vertical_points(10_000, 42);
    group.bench_function("shared_x", |b| b.iter(|| fit(black_box(&vertical))));

    let constant: Vec<Point<f64>> = (0..10_000)
        .map(|i| Point::new(i as f64, 3.0))
        .collect();
    group.bench_function("constant_y", |b| b.iter(|| fit(black_box(&constant))));

    group.finish();
}

fn bench_regression_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("regression_session");
    group.sample_size(50);

    let points = generate_linear_points(1_000, 11);

    group.bench_function("add_and_summarise", |b| {
        b.iter(|| {
            let mut demo = Demo::regression::<f64>().build().unwrap();
            for p in &points {
                demo.add_point(p.x, p.y).unwrap();
            }
            black_box(demo.summary_text())
        })
    });
    group.finish();
}

// ============================================================================
// Distribution Benchmarks
// ============================================================================

fn bench_distribution(c: &mut Criterion) {
    let mut group = c.benchmark_group("distribution");
    group.sample_size(100);

    for n in [20, 100, 170, 1_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("evaluate", n), &n, |b, &n| {
            b.iter(|| evaluate(black_box(n), black_box(0.1_f64)).unwrap())
        });
    }
    group.finish();
}

fn bench_distribution_figure(c: &mut Criterion) {
    let mut group = c.benchmark_group("distribution_figure");
    group.sample_size(100);

    let pair = evaluate(500, 0.3_f64).unwrap();
    group.bench_function("figure_for", |b| b.iter(|| figure_for(black_box(&pair))));
    group.finish();
}

criterion_group!(
    benches,
    bench_sample_size,
    bench_clt_session,
    bench_regression,
    bench_regression_pathological,
    bench_regression_session,
    bench_distribution,
    bench_distribution_figure,
);
criterion_main!(benches);

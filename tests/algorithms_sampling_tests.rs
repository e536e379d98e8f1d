//! Tests for coin-flip sampling.
//!
//! ## Test Organization
//!
//! 1. **Trial Mean** - Range, k/n lattice, scripted draws
//! 2. **Batch** - Append semantics
//! 3. **Normal Approximation** - Grid and density shape
//! 4. **Summary** - Empirical versus theoretical moments

use approx::assert_relative_eq;

use statdemo::prelude::*;

// ============================================================================
// Trial Mean Tests
// ============================================================================

/// Test that draws below one half count as heads.
#[test]
fn test_trial_mean_scripted_draws() {
    let draws = [0.1, 0.6, 0.49, 0.5, 0.99, 0.0];
    let mut i = 0;
    let mut source = from_fn(|| {
        let v = draws[i];
        i += 1;
        v
    });

    // Heads: 0.1, 0.49, 0.0 => 3 of 6
    let mean: f64 = simulate_trial_mean(6, &mut source);
    assert_relative_eq!(mean, 0.5);
}

/// Test all-heads and all-tails extremes.
#[test]
fn test_trial_mean_extremes() {
    let heads: f64 = simulate_trial_mean(25, &mut from_fn(|| 0.0));
    let tails: f64 = simulate_trial_mean(25, &mut from_fn(|| 0.75));
    assert_eq!(heads, 1.0);
    assert_eq!(tails, 0.0);
}

/// Test that every mean is k / n for an integer k in [0, n].
#[test]
fn test_trial_mean_on_lattice() {
    let mut source = SeededSource::new(2024);
    for n in 1..=40usize {
        for _ in 0..25 {
            let m: f64 = simulate_trial_mean(n, &mut source);
            assert!((0.0..=1.0).contains(&m));
            let k = (m * n as f64).round();
            assert_relative_eq!(k / n as f64, m, epsilon = 1e-12);
            assert!(k >= 0.0 && k <= n as f64);
        }
    }
}

/// Test that a zero sample size yields zero without drawing.
#[test]
fn test_trial_mean_zero_sample_size() {
    let mut source = from_fn(|| -> f64 { panic!("no draw expected") });
    let m: f64 = simulate_trial_mean(0, &mut source);
    assert_eq!(m, 0.0);
}

// ============================================================================
// Batch Tests
// ============================================================================

/// Test that batches append without clearing.
#[test]
fn test_batch_appends() {
    let mut source = SeededSource::new(5);
    let mut out: Vec<f64> = vec![0.25];

    simulate_batch(10, 4, &mut source, &mut out);
    assert_eq!(out.len(), 5);
    assert_eq!(out[0], 0.25);

    simulate_batch(10, 3, &mut source, &mut out);
    assert_eq!(out.len(), 8);
}

/// Test that a zero-count batch is a no-op.
#[test]
fn test_batch_zero_count() {
    let mut source = SeededSource::new(5);
    let mut out: Vec<f64> = Vec::new();
    simulate_batch(10, 0, &mut source, &mut out);
    assert!(out.is_empty());
}

/// Test reproducibility with a seeded source.
#[test]
fn test_batch_reproducible() {
    let mut a: Vec<f64> = Vec::new();
    let mut b: Vec<f64> = Vec::new();
    simulate_batch(30, 50, &mut SeededSource::new(11), &mut a);
    simulate_batch(30, 50, &mut SeededSource::new(11), &mut b);
    assert_eq!(a, b);
}

// ============================================================================
// Normal Approximation Tests
// ============================================================================

/// Test the evaluation grid covers [0, 1] inclusive.
#[test]
fn test_normal_approximation_grid() {
    let (xs, ys) = normal_approximation::<f64>(10, 100);
    assert_eq!(xs.len(), 100);
    assert_eq!(ys.len(), 100);
    assert_eq!(xs[0], 0.0);
    assert_eq!(xs[99], 1.0);
    assert_relative_eq!(xs[1], 1.0 / 99.0);
}

/// Test the density peaks at 0.5 with height 1 / (sd sqrt(2 pi)).
#[test]
fn test_normal_approximation_shape() {
    let n = 16;
    let (xs, ys) = normal_approximation::<f64>(n, 101);
    let sd = 0.5 / (n as f64).sqrt();

    let (peak_idx, _) = ys
        .iter()
        .enumerate()
        .fold((0, f64::MIN), |best, (i, &y)| if y > best.1 { (i, y) } else { best });
    assert_relative_eq!(xs[peak_idx], 0.5, epsilon = 1e-12);
    assert_relative_eq!(
        ys[peak_idx],
        1.0 / (sd * (2.0 * std::f64::consts::PI).sqrt()),
        max_relative = 1e-12
    );

    // Symmetric around 0.5
    assert_relative_eq!(ys[10], ys[90], max_relative = 1e-9);
}

/// Test the expected standard deviation formula.
#[test]
fn test_expected_std_dev() {
    assert_relative_eq!(expected_std_dev::<f64>(1), 0.5);
    assert_relative_eq!(expected_std_dev::<f64>(100), 0.05);
}

// ============================================================================
// Summary Tests
// ============================================================================

/// Test empirical moments converge to the CLT prediction.
#[test]
fn test_summary_matches_theory() {
    let n = 50;
    let mut samples: Vec<f64> = Vec::new();
    simulate_batch(n, 4000, &mut SeededSource::new(3), &mut samples);

    let summary = SampleSummary::new(&samples, n);
    assert_eq!(summary.count, 4000);
    assert_eq!(summary.expected_mean, 0.5);
    assert_relative_eq!(summary.expected_std_dev, 0.5 / (50f64).sqrt());
    assert!((summary.mean - 0.5).abs() < 0.01);
    assert!((summary.std_dev - summary.expected_std_dev).abs() < 0.01);
}

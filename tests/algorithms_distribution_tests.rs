//! Tests for the binomial versus Poisson evaluator.
//!
//! ## Test Organization
//!
//! 1. **Support Bound** - Heuristic truncation and the n ceiling
//! 2. **Evaluation** - Worked examples and normalisation
//! 3. **Rejection** - Out-of-domain parameters
//! 4. **Convergence** - Poisson limit for large n, small p

use approx::assert_relative_eq;

use statdemo::prelude::*;

// ============================================================================
// Support Bound Tests
// ============================================================================

/// Test the bound for the worked example n = 4, p = 0.5.
#[test]
fn test_support_bound_capped_by_trials() {
    // floor(2 + 4 sqrt(2) + 10) = 17, capped at 4
    assert_eq!(support_bound(4, 2.0_f64), 4);
}

/// Test the heuristic when it is below n.
#[test]
fn test_support_bound_heuristic() {
    // lambda = 1: floor(1 + 4 + 10) = 15
    assert_eq!(support_bound(1000, 1.0_f64), 15);
    // lambda = 25: floor(25 + 20 + 10) = 55
    assert_eq!(support_bound(1000, 25.0_f64), 55);
}

/// Test the zero-rate collapse to min(n, 10).
#[test]
fn test_support_bound_zero_rate() {
    assert_eq!(support_bound(100, 0.0_f64), 10);
    assert_eq!(support_bound(6, 0.0_f64), 6);
}

// ============================================================================
// Evaluation Tests
// ============================================================================

/// Test the worked example n = 4, p = 0.5.
#[test]
fn test_evaluate_worked_example() {
    let pair = evaluate(4, 0.5_f64).unwrap();

    assert_eq!(pair.trials, 4);
    assert_eq!(pair.lambda, 2.0);
    assert_eq!(pair.max_k(), 4);
    assert_eq!(pair.support(), vec![0, 1, 2, 3, 4]);
    assert_relative_eq!(pair.binomial[2].probability, 0.375, max_relative = 1e-12);

    let expected = [1.0 / 16.0, 4.0 / 16.0, 6.0 / 16.0, 4.0 / 16.0, 1.0 / 16.0];
    for (entry, &want) in pair.binomial.iter().zip(&expected) {
        assert_relative_eq!(entry.probability, want, max_relative = 1e-12);
    }
}

/// Test n = 10, p = 0.5: full support, normalised, peaked in the middle.
#[test]
fn test_evaluate_fair_ten() {
    let pair = evaluate(10, 0.5_f64).unwrap();

    assert_eq!(pair.lambda, 5.0);
    assert_eq!(pair.max_k(), 10);

    let total: f64 = pair.binomial.iter().map(|e| e.probability).sum();
    assert_relative_eq!(total, 1.0, max_relative = 1e-12);
    assert!(pair.binomial[5].probability > pair.binomial[0].probability);
}

/// Test both series share length and k values.
#[test]
fn test_evaluate_aligned_series() {
    let pair = evaluate(200, 0.05_f64).unwrap();
    // lambda = 10: floor(10 + 4 sqrt(10) + 10) = 32
    assert_eq!(pair.max_k(), 32);
    assert_eq!(pair.binomial.len(), 33);
    assert_eq!(pair.poisson.len(), 33);
    for (i, (b, p)) in pair.binomial.iter().zip(&pair.poisson).enumerate() {
        assert_eq!(b.k, i);
        assert_eq!(p.k, i);
    }
}

/// Test p = 0: all mass at zero for both laws.
#[test]
fn test_evaluate_zero_probability() {
    let pair = evaluate(50, 0.0_f64).unwrap();

    assert_eq!(pair.lambda, 0.0);
    assert_eq!(pair.max_k(), 10);
    assert_eq!(pair.binomial[0].probability, 1.0);
    assert_eq!(pair.poisson[0].probability, 1.0);
    for k in 1..=10 {
        assert_eq!(pair.binomial[k].probability, 0.0);
        assert_eq!(pair.poisson[k].probability, 0.0);
    }
}

/// Test p = 1: the binomial mass sits at k = n.
#[test]
fn test_evaluate_unit_probability() {
    let pair = evaluate(5, 1.0_f64).unwrap();
    assert_eq!(pair.max_k(), 5);
    assert_eq!(pair.binomial[5].probability, 1.0);
    assert_eq!(pair.binomial[0].probability, 0.0);
}

/// Test that evaluation is deterministic.
#[test]
fn test_evaluate_matches_pmf() {
    // Direct range and log-space range
    for &(n, p) in &[(60usize, 0.2_f64), (400, 0.05)] {
        let pair = evaluate(n, p).unwrap();
        for entry in &pair.binomial {
            assert_eq!(entry.probability, binomial_pmf(entry.k, n, p));
        }
        for entry in &pair.poisson {
            assert_eq!(entry.probability, poisson_pmf(entry.k, pair.lambda));
        }
    }
}

#[test]
fn test_evaluate_deterministic() {
    assert_eq!(evaluate(37, 0.2_f64).unwrap(), evaluate(37, 0.2_f64).unwrap());
}

// ============================================================================
// Rejection Tests
// ============================================================================

/// Test n = 0 is rejected.
#[test]
fn test_evaluate_rejects_too_many_trials() {
    assert!(matches!(
        evaluate(MAX_TRIALS + 1, 0.5_f64),
        Err(StatError::TooManyTrials { .. })
    ));
}

#[test]
fn test_evaluate_rejects_zero_trials() {
    assert_eq!(evaluate(0, 0.5_f64), Err(StatError::InvalidTrials(0)));
}

/// Test p outside [0, 1] is rejected.
#[test]
fn test_evaluate_rejects_probability() {
    assert_eq!(
        evaluate(10, -0.1_f64),
        Err(StatError::InvalidProbability(-0.1))
    );
    assert_eq!(
        evaluate(10, 1.5_f64),
        Err(StatError::InvalidProbability(1.5))
    );
    assert!(matches!(
        evaluate(10, f64::NAN),
        Err(StatError::InvalidProbability(_))
    ));
}

// ============================================================================
// Convergence Tests
// ============================================================================

/// Test the gap between the laws shrinks as n grows with n p fixed.
#[test]
fn test_poisson_limit() {
    let coarse = evaluate(10, 0.3_f64).unwrap().max_abs_difference();
    let fine = evaluate(3000, 0.001_f64).unwrap().max_abs_difference();

    assert!(fine < coarse);
    assert!(fine < 1e-3);
}

/// Test the gap is zero when both laws are degenerate.
#[test]
fn test_max_abs_difference_degenerate() {
    let pair = evaluate(8, 0.0_f64).unwrap();
    assert_eq!(pair.max_abs_difference(), 0.0);
}

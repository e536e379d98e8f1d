//! Tests for factorials and binomial coefficients.
//!
//! ## Test Organization
//!
//! 1. **Factorial** - Small values, zero, negative arguments, overflow
//! 2. **Binomial Coefficient** - Exact small values, symmetry, out of range
//! 3. **Log Space** - Agreement with direct values

use approx::assert_relative_eq;

use statdemo::prelude::*;

// ============================================================================
// Factorial Tests
// ============================================================================

/// Test factorial of small arguments.
#[test]
fn test_factorial_small_values() {
    assert_eq!(factorial::<f64>(0).unwrap(), 1.0);
    assert_eq!(factorial::<f64>(1).unwrap(), 1.0);
    assert_eq!(factorial::<f64>(5).unwrap(), 120.0);
    assert_eq!(factorial::<f64>(10).unwrap(), 3_628_800.0);
}

/// Test that a negative argument is an explicit error, not a coerced value.
#[test]
fn test_factorial_negative_rejected() {
    assert_eq!(
        factorial::<f64>(-1),
        Err(StatError::NegativeFactorial(-1))
    );
    assert_eq!(
        factorial::<f32>(-10),
        Err(StatError::NegativeFactorial(-10))
    );
}

/// Test the overflow boundary for f64.
#[test]
fn test_factorial_overflow_boundary() {
    assert!(factorial::<f64>(170).unwrap().is_finite());
    assert!(factorial::<f64>(171).unwrap().is_infinite());
}

// ============================================================================
// Binomial Coefficient Tests
// ============================================================================

/// Test exact small coefficients.
#[test]
fn test_choose_small_values() {
    assert_eq!(choose::<f64>(4, 2), 6.0);
    assert_eq!(choose::<f64>(5, 0), 1.0);
    assert_eq!(choose::<f64>(5, 5), 1.0);
    assert_eq!(choose::<f64>(10, 3), 120.0);
    assert_eq!(choose::<f64>(52, 5), 2_598_960.0);
}

/// Test symmetry C(n, k) = C(n, n - k).
#[test]
fn test_choose_symmetry() {
    for n in 0..30 {
        for k in 0..=n {
            assert_eq!(choose::<f64>(n, k), choose::<f64>(n, n - k));
        }
    }
}

/// Test that choosing more than available gives zero.
#[test]
fn test_choose_out_of_range() {
    assert_eq!(choose::<f64>(3, 4), 0.0);
    assert_eq!(choose::<f64>(0, 1), 0.0);
}

/// Test agreement with the factorial definition in the small range.
#[test]
fn test_choose_matches_factorial_formula() {
    for n in 0..=20i64 {
        for k in 0..=n {
            let direct = factorial::<f64>(n).unwrap()
                / (factorial::<f64>(k).unwrap() * factorial::<f64>(n - k).unwrap());
            assert_relative_eq!(
                choose::<f64>(n as usize, k as usize),
                direct,
                max_relative = 1e-12
            );
        }
    }
}

// ============================================================================
// Log Space Tests
// ============================================================================

/// Test ln(k!) against the direct factorial.
#[test]
fn test_ln_factorial_matches_direct() {
    assert_eq!(ln_factorial::<f64>(0), 0.0);
    assert_eq!(ln_factorial::<f64>(1), 0.0);
    for k in 2..=50 {
        let direct = factorial::<f64>(k as i64).unwrap().ln();
        assert_relative_eq!(ln_factorial::<f64>(k), direct, max_relative = 1e-12);
    }
}

/// Test ln k! stays continuous across the large-count approximation.
#[test]
fn test_ln_factorial_large_counts() {
    for k in [255_usize, 256, 257, 1_000, 20_000] {
        let exact: f64 = (2..=k).map(|i| (i as f64).ln()).sum();
        assert_relative_eq!(ln_factorial::<f64>(k), exact, max_relative = 1e-12);
    }
    assert!(ln_factorial::<f64>(1_000_000).is_finite());
}

/// Test ln C(n, k) against the direct coefficient.
#[test]
fn test_ln_choose_matches_direct() {
    assert_relative_eq!(ln_choose::<f64>(10, 3), 120.0_f64.ln(), max_relative = 1e-12);
    assert_relative_eq!(
        ln_choose::<f64>(100, 50),
        choose::<f64>(100, 50).ln(),
        max_relative = 1e-10
    );
    assert_eq!(ln_choose::<f64>(3, 4), f64::NEG_INFINITY);
}

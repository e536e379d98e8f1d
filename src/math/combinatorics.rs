//! Factorials and binomial coefficients.
//!
//! ## Purpose
//!
//! This module provides the counting functions behind the binomial and
//! Poisson probability mass functions.
//!
//! ## Design notes
//!
//! * **Incremental ratio**: `choose` multiplies `(n - k + i) / i` step by
//!   step, so every intermediate value is itself a binomial coefficient and
//!   stays an exact integer while it fits the mantissa.
//! * **Log space**: `ln_factorial` and `ln_choose` serve arguments whose
//!   direct values overflow the float type. Large counts switch to the
//!   Stirling series so the cost stays constant.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * `factorial(0) == 1`.
//! * `choose(n, k) == 0` for `k > n`.
//! * `choose(n, k) == choose(n, n - k)`.
//!
//! ## Non-goals
//!
//! * This module does not provide a gamma function for non-integer arguments.

// External dependencies
use core::f64::consts::PI;
use num_traits::Float;

// Internal dependencies
use crate::math::from_usize;
use crate::primitives::errors::StatError;

// ============================================================================
// Factorial
// ============================================================================

/// Compute `num!` as a float.
///
/// Returns [`StatError::NegativeFactorial`] for negative arguments. Results
/// beyond the float's range are `+inf` (above `170!` for `f64`).
pub fn factorial<T: Float>(num: i64) -> Result<T, StatError> {
    if num < 0 {
        return Err(StatError::NegativeFactorial(num));
    }
    Ok(factorial_of(num as usize))
}

/// Factorial of a non-negative count. Saturates at `+inf`.
#[inline]
pub fn factorial_of<T: Float>(k: usize) -> T {
    let mut result = T::one();
    for i in 2..=k {
        result = result * from_usize::<T>(i);
        if !result.is_finite() {
            return T::infinity();
        }
    }
    result
}

/// Largest `k` whose factorial is finite in `T` (170 for `f64`, 34 for `f32`).
pub fn max_finite_factorial<T: Float>() -> usize {
    let mut result = T::one();
    let mut k = 1;
    loop {
        let next = result * from_usize::<T>(k + 1);
        if !next.is_finite() {
            return k;
        }
        result = next;
        k += 1;
    }
}

/// Counts at or above this use the Stirling series in [`ln_factorial`].
const STIRLING_THRESHOLD: usize = 256;

/// Natural logarithm of `k!`.
///
/// Exact log-sum below 256, Stirling series with three correction terms
/// above (relative error below `1e-15` for `f64`).
pub fn ln_factorial<T: Float>(k: usize) -> T {
    if k < STIRLING_THRESHOLD {
        return (2..=k).fold(T::zero(), |acc, i| acc + from_usize::<T>(i).ln());
    }

    let c = |v: f64| T::from(v).unwrap_or_else(T::zero);
    let n = from_usize::<T>(k);
    let inv = n.recip();
    let inv2 = inv * inv;
    n * n.ln() - n
        + c(0.5) * (c(2.0 * PI) * n).ln()
        + inv * (c(1.0 / 12.0) - inv2 * (c(1.0 / 360.0) - inv2 * c(1.0 / 1260.0)))
}

// ============================================================================
// Binomial Coefficient
// ============================================================================

/// Number of ways to choose `k` items from `n`.
///
/// # Formula
///
/// ```text
/// C(n, k) = prod_{i=1..k} (n - k + i) / i,   k <- min(k, n - k)
/// ```
pub fn choose<T: Float>(n: usize, k: usize) -> T {
    if k > n {
        return T::zero();
    }
    let k = k.min(n - k);
    let mut result = T::one();
    for i in 1..=k {
        result = result * from_usize::<T>(n - k + i) / from_usize::<T>(i);
    }
    result
}

/// Natural logarithm of `C(n, k)`. Returns `-inf` for `k > n`.
pub fn ln_choose<T: Float>(n: usize, k: usize) -> T {
    if k > n {
        return T::neg_infinity();
    }
    ln_factorial::<T>(n) - ln_factorial::<T>(k) - ln_factorial::<T>(n - k)
}

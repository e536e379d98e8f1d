//! Binomial and Poisson probability mass functions.
//!
//! ## Purpose
//!
//! This module evaluates the two discrete laws compared by the
//! binomial-to-Poisson demo.
//!
//! ## Design notes
//!
//! * **Direct first**: Small arguments use the textbook formulas so that
//!   displayed values match hand calculation.
//! * **Log space fallback**: Arguments whose factorials or powers leave the
//!   float range are evaluated as `exp(ln pmf)`.
//!
//! ## Key concepts
//!
//! * **Binomial**: `C(n, k) p^k (1 - p)^(n - k)`.
//! * **Poisson**: `lambda^k e^(-lambda) / k!`.
//!
//! ## Invariants
//!
//! * Results are in `[0, 1]` for valid inputs.
//! * `binomial_pmf(k, n, p) == 0` for `k > n`.
//! * `poisson_pmf(0, 0) == 1` and `poisson_pmf(k, 0) == 0` for `k > 0`.
//!
//! ## Non-goals
//!
//! * This module does not validate `n` or `p`; see the distribution evaluator.
//! * This module does not compute cumulative distribution functions.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::combinatorics::{choose, factorial_of, ln_choose, ln_factorial, max_finite_factorial};
use crate::math::from_usize;

/// Probability of exactly `k` successes in `n` trials with success chance `p`.
pub fn binomial_pmf<T: Float>(k: usize, n: usize, p: T) -> T {
    binomial_pmf_within(k, n, p, max_finite_factorial::<T>())
}

/// [`binomial_pmf`] with the factorial range of `T` supplied by the caller,
/// for loops that evaluate many `k` at once.
pub(crate) fn binomial_pmf_within<T: Float>(
    k: usize,
    n: usize,
    p: T,
    direct_limit: usize,
) -> T {
    if k > n {
        return T::zero();
    }

    if n <= direct_limit {
        return choose::<T>(n, k) * p.powi(k as i32) * (T::one() - p).powi((n - k) as i32);
    }

    // Degenerate laws have no finite logarithm.
    if p <= T::zero() {
        return if k == 0 { T::one() } else { T::zero() };
    }
    if p >= T::one() {
        return if k == n { T::one() } else { T::zero() };
    }

    let kf = from_usize::<T>(k);
    let rest = from_usize::<T>(n - k);
    (ln_choose::<T>(n, k) + kf * p.ln() + rest * (T::one() - p).ln()).exp()
}

/// Probability of exactly `k` events for a Poisson law with rate `lambda`.
pub fn poisson_pmf<T: Float>(k: usize, lambda: T) -> T {
    if lambda <= T::zero() {
        return if k == 0 { T::one() } else { T::zero() };
    }

    let kf = from_usize::<T>(k);
    let ln_limit = T::max_value().ln();
    let fact = factorial_of::<T>(k);
    if fact.is_finite() && lambda < ln_limit && kf * lambda.ln() < ln_limit {
        return lambda.powi(k as i32) * (-lambda).exp() / fact;
    }

    (kf * lambda.ln() - lambda - ln_factorial::<T>(k)).exp()
}

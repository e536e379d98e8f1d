//! Binomial versus Poisson evaluation over a shared support.
//!
//! ## Purpose
//!
//! This module evaluates a binomial law and its matching Poisson law
//! (`lambda = n p`) on the same range of counts, for side-by-side display.
//!
//! ## Design notes
//!
//! * **Bounded support**: `k` runs over `0..=max_k` with
//!   `max_k = min(n, floor(lambda + 4 sqrt(lambda) + 10))`.
//! * **Stateless**: Each call recomputes both series.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Both series have `max_k + 1` entries with identical `k` values.
//! * `max_k <= n <= MAX_TRIALS`.
//!
//! ## Non-goals
//!
//! * This module does not guarantee any tail coverage for the truncated support.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::from_usize;
use crate::math::combinatorics::max_finite_factorial;
use crate::math::pmf::{binomial_pmf_within, poisson_pmf};
use crate::primitives::errors::StatError;

// ============================================================================
// Types
// ============================================================================

/// Probability of a single count.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PmfEntry<T> {
    /// Count.
    pub k: usize,
    /// Probability of exactly `k`.
    pub probability: T,
}

/// Binomial and Poisson laws evaluated on a shared support.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DistributionPair<T> {
    /// Binomial trial count.
    pub trials: usize,
    /// Binomial success probability.
    pub probability: T,
    /// Poisson rate `n p`.
    pub lambda: T,
    /// Binomial probabilities.
    pub binomial: Vec<PmfEntry<T>>,
    /// Poisson probabilities.
    pub poisson: Vec<PmfEntry<T>>,
}

impl<T: Float> DistributionPair<T> {
    /// Largest count in the support.
    pub fn max_k(&self) -> usize {
        self.binomial.len().saturating_sub(1)
    }

    /// Counts `0..=max_k`.
    pub fn support(&self) -> Vec<usize> {
        self.binomial.iter().map(|e| e.k).collect()
    }

    /// Largest absolute pointwise gap between the two laws on the support.
    pub fn max_abs_difference(&self) -> T {
        self.binomial
            .iter()
            .zip(&self.poisson)
            .map(|(b, p)| (b.probability - p.probability).abs())
            .fold(T::zero(), T::max)
    }
}

// ============================================================================
// Evaluation
// ============================================================================

/// Upper end of the displayed support: `min(n, floor(lambda + 4 sqrt(lambda) + 10))`.
pub fn support_bound<T: Float>(n: usize, lambda: T) -> usize {
    let four = from_usize::<T>(4);
    let ten = from_usize::<T>(10);
    let bound = (lambda + four * lambda.sqrt() + ten).floor();
    n.min(bound.to_usize().unwrap_or(usize::MAX))
}

/// Evaluate `Binomial(n, p)` and `Poisson(n p)` on `0..=support_bound(n, n p)`.
///
/// Rejects `n < 1`, `n > MAX_TRIALS` and `p` outside `[0, 1]`.
pub fn evaluate<T: Float>(n: usize, p: T) -> Result<DistributionPair<T>, StatError> {
    Validator::validate_trials(n)?;
    Validator::validate_probability(p)?;

    let lambda = from_usize::<T>(n) * p;
    let max_k = support_bound(n, lambda);
    let direct_limit = max_finite_factorial::<T>();

    let binomial = (0..=max_k)
        .map(|k| PmfEntry {
            k,
            probability: binomial_pmf_within(k, n, p, direct_limit),
        })
        .collect();
    let poisson = (0..=max_k)
        .map(|k| PmfEntry {
            k,
            probability: poisson_pmf(k, lambda),
        })
        .collect();

    Ok(DistributionPair {
        trials: n,
        probability: p,
        lambda,
        binomial,
        poisson,
    })
}

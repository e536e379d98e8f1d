//! Coin-flip sampling for the Central Limit Theorem demo.
//!
//! ## Purpose
//!
//! This module draws synthetic Bernoulli-trial sample means and provides
//! the theoretical normal curve they converge to.
//!
//! ## Design notes
//!
//! * **Injectable randomness**: Every draw comes from a [`UniformSource`].
//! * **Append-only**: Batches extend the caller's collection; clearing is
//!   the caller's decision.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Fair coin**: A draw below one half counts as heads.
//! * **Sample mean**: Fraction of heads in `n` flips, always `k / n`.
//! * **Normal approximation**: Mean `0.5`, standard deviation `0.5 / sqrt(n)`.
//!
//! ## Invariants
//!
//! * Every sample mean lies in `[0, 1]`.
//! * A batch of `count` appends exactly `count` values.
//!
//! ## Non-goals
//!
//! * This module does not simulate biased coins.
//! * This module does not bin samples into a histogram (the renderer does).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::{Float, FloatConst};

// Internal dependencies
use crate::math::from_usize;
use crate::math::moments::{mean, population_variance};
use crate::math::normal::normal_pdf;
use crate::primitives::random::UniformSource;

/// Mean of a fair coin flip.
const FAIR_MEAN: f64 = 0.5;

// ============================================================================
// Sampling
// ============================================================================

/// Flip a fair coin `n` times and return the fraction of heads.
///
/// Callers validate `n >= 1`; `n == 0` returns zero.
pub fn simulate_trial_mean<T, S>(n: usize, source: &mut S) -> T
where
    T: Float,
    S: UniformSource<T> + ?Sized,
{
    if n == 0 {
        return T::zero();
    }

    let half = T::from(FAIR_MEAN).unwrap_or_else(T::zero);
    let heads = (0..n).filter(|_| source.next_uniform() < half).count();
    from_usize::<T>(heads) / from_usize::<T>(n)
}

/// Append `count` sample means of `n` flips each to `out`.
pub fn simulate_batch<T, S>(n: usize, count: usize, source: &mut S, out: &mut Vec<T>)
where
    T: Float,
    S: UniformSource<T> + ?Sized,
{
    out.reserve(count);
    for _ in 0..count {
        out.push(simulate_trial_mean(n, source));
    }
}

// ============================================================================
// Theory
// ============================================================================

/// Standard deviation of a fair-coin sample mean over `n` flips.
#[inline]
pub fn expected_std_dev<T: Float>(n: usize) -> T {
    T::from(FAIR_MEAN).unwrap_or_else(T::zero) / from_usize::<T>(n).sqrt()
}

/// Normal density predicted by the CLT, sampled on `points` evenly spaced
/// x values covering `[0, 1]` inclusive.
///
/// Returns `(x, density)`. Callers validate `n >= 1` and `points >= 2`.
pub fn normal_approximation<T: Float + FloatConst>(n: usize, points: usize) -> (Vec<T>, Vec<T>) {
    let mu = T::from(FAIR_MEAN).unwrap_or_else(T::zero);
    let sd = expected_std_dev::<T>(n);
    let last = from_usize::<T>(points.saturating_sub(1).max(1));

    let xs: Vec<T> = (0..points).map(|i| from_usize::<T>(i) / last).collect();
    let ys = xs.iter().map(|&x| normal_pdf(x, mu, sd)).collect();
    (xs, ys)
}

// ============================================================================
// Summary
// ============================================================================

/// Empirical and theoretical moments of collected sample means.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SampleSummary<T> {
    /// Number of sample means collected.
    pub count: usize,
    /// Mean of the collected sample means.
    pub mean: T,
    /// Population standard deviation of the collected sample means.
    pub std_dev: T,
    /// Mean predicted by the CLT (always 0.5).
    pub expected_mean: T,
    /// Standard deviation predicted by the CLT, `0.5 / sqrt(n)`.
    pub expected_std_dev: T,
}

impl<T: Float> SampleSummary<T> {
    /// Summarise `samples` drawn with `n` flips each.
    pub fn new(samples: &[T], n: usize) -> Self {
        Self {
            count: samples.len(),
            mean: mean(samples),
            std_dev: population_variance(samples).sqrt(),
            expected_mean: T::from(FAIR_MEAN).unwrap_or_else(T::zero),
            expected_std_dev: expected_std_dev::<T>(n),
        }
    }
}

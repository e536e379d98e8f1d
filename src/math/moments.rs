//! Population moments.
//!
//! Means and variances here divide by `n`, not `n - 1`. Empty input yields
//! zero rather than NaN.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::from_usize;

/// Arithmetic mean.
#[inline]
pub fn mean<T: Float>(values: &[T]) -> T {
    if values.is_empty() {
        return T::zero();
    }
    let sum = values.iter().fold(T::zero(), |acc, &v| acc + v);
    sum / from_usize::<T>(values.len())
}

/// Population variance: `sum((v - mean)^2) / n`.
#[inline]
pub fn population_variance<T: Float>(values: &[T]) -> T {
    if values.is_empty() {
        return T::zero();
    }
    let m = mean(values);
    let ss = values.iter().fold(T::zero(), |acc, &v| {
        let d = v - m;
        acc + d * d
    });
    ss / from_usize::<T>(values.len())
}

//! Normal density for the CLT overlay curve.

// External dependencies
use num_traits::{Float, FloatConst};

/// Density of `N(mean, std_dev^2)` at `x`.
///
/// # Formula
///
/// ```text
/// f(x) = exp(-(x - mean)^2 / (2 sd^2)) / (sd * sqrt(2 pi))
/// ```
#[inline]
pub fn normal_pdf<T: Float + FloatConst>(x: T, mean: T, std_dev: T) -> T {
    let two = T::one() + T::one();
    let d = x - mean;
    (-(d * d) / (two * std_dev * std_dev)).exp() / (std_dev * (two * T::PI()).sqrt())
}

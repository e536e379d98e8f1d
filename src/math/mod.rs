//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the demos:
//! - Factorials and binomial coefficients
//! - Binomial and Poisson probability mass functions
//! - Normal density
//! - Population moments
//!
//! These are reusable mathematical building blocks with no demo-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Evaluation
//!   ↓
//! Layer 4: Algorithms
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

// External dependencies
use num_traits::Float;

/// Factorials and binomial coefficients.
pub mod combinatorics;

/// Binomial and Poisson probability mass functions.
pub mod pmf;

/// Normal density.
pub mod normal;

/// Population mean and variance.
pub mod moments;

/// Convert a count to `T`. Every count is representable (possibly rounded) in a float.
#[inline]
pub(crate) fn from_usize<T: Float>(v: usize) -> T {
    T::from(v).unwrap_or_else(T::infinity)
}

//! Uniform random sources for coin-flip simulation.
//!
//! ## Purpose
//!
//! This module defines the injectable uniform random function used by the
//! sampling engine. Every draw returns a value in `[0, 1)` which the
//! sampler compares against one half.
//!
//! ## Design notes
//!
//! * **Injectable**: Any `FnMut() -> T` closure becomes a source via [`from_fn`].
//! * **Reproducible**: [`SeededSource`] wraps a seeded `StdRng`.
//! * **Ambient**: [`ThreadSource`] uses the thread-local generator (`std` only).
//!
//! ## Non-goals
//!
//! * This module does not provide non-uniform distributions.

// External dependencies
use num_traits::Float;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ============================================================================
// Source Trait
// ============================================================================

/// A source of uniform random values in `[0, 1)`.
pub trait UniformSource<T> {
    /// Draw the next value in `[0, 1)`.
    fn next_uniform(&mut self) -> T;
}

impl<T, S: UniformSource<T> + ?Sized> UniformSource<T> for &mut S {
    #[inline]
    fn next_uniform(&mut self) -> T {
        (**self).next_uniform()
    }
}

// ============================================================================
// Closure Source
// ============================================================================

/// Source backed by a closure. Created with [`from_fn`].
#[derive(Debug, Clone)]
pub struct FnSource<F> {
    f: F,
}

/// Wrap a closure returning values in `[0, 1)` as a [`UniformSource`].
pub fn from_fn<T, F: FnMut() -> T>(f: F) -> FnSource<F> {
    FnSource { f }
}

impl<T, F: FnMut() -> T> UniformSource<T> for FnSource<F> {
    #[inline]
    fn next_uniform(&mut self) -> T {
        (self.f)()
    }
}

// ============================================================================
// Generator Sources
// ============================================================================

#[inline]
fn unit_interval<T: Float, R: Rng + ?Sized>(rng: &mut R) -> T {
    T::from(rng.random::<f64>()).unwrap_or_else(T::zero)
}

/// Reproducible source seeded from a `u64`.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    /// Create a source whose draws are fully determined by `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<T: Float> UniformSource<T> for SeededSource {
    #[inline]
    fn next_uniform(&mut self) -> T {
        unit_interval(&mut self.rng)
    }
}

/// Source backed by the thread-local generator.
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct ThreadSource {
    rng: rand::rngs::ThreadRng,
}

#[cfg(feature = "std")]
impl Default for ThreadSource {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl ThreadSource {
    /// Create a source drawing from `rand::rng()`.
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

#[cfg(feature = "std")]
impl<T: Float> UniformSource<T> for ThreadSource {
    #[inline]
    fn next_uniform(&mut self) -> T {
        unit_interval(&mut self.rng)
    }
}

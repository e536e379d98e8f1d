//! High-level API for the statistics demos.
//!
//! ## Purpose
//!
//! This module is the user-facing entry point. It re-exports the public
//! types of every layer and provides [`Demo`], which starts each kind of
//! session.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Builders with sensible defaults for all parameters.
//! * **Validated**: Parameters are checked when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Start a session via `Demo::clt()`, `Demo::regression()` or
//!    `Demo::binomial_poisson()`.
//! 2. Chain configuration methods (`.sample_size()`, `.precision()`, ...).
//! 3. Call `.build()` and drive the session with user actions.

// External dependencies
use num_traits::{Float, FloatConst};

// Publicly re-exported types
pub use crate::adapters::binomial::{BinomialPoissonDemo, figure_for};
pub use crate::adapters::clt::{CltDemo, CltDemoBuilder};
pub use crate::adapters::regression::{RegressionDemo, RegressionDemoBuilder};
pub use crate::algorithms::distribution::{DistributionPair, PmfEntry, evaluate, support_bound};
pub use crate::algorithms::regression::{FitOutcome, LinearFit, MIN_POINTS, Point, fit, fit_xy};
pub use crate::algorithms::sampling::{
    SampleSummary, expected_std_dev, normal_approximation, simulate_batch, simulate_trial_mean,
};
pub use crate::engine::validator::{MAX_TRIALS, Validator};
pub use crate::evaluation::summary::{
    DEFAULT_PRECISION, INSUFFICIENT_MESSAGE, regression_summary,
};
pub use crate::math::combinatorics::{choose, factorial, ln_choose, ln_factorial};
pub use crate::math::moments::{mean, population_variance};
pub use crate::math::normal::normal_pdf;
pub use crate::math::pmf::{binomial_pmf, poisson_pmf};
pub use crate::primitives::errors::StatError;
pub use crate::primitives::figure::{
    BarMode, Figure, HistNorm, Layout, Outline, RenderSink, Series, TraceKind,
};
#[cfg(feature = "std")]
pub use crate::primitives::random::ThreadSource;
pub use crate::primitives::random::{FnSource, SeededSource, UniformSource, from_fn};

/// Entry point for creating demo sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct Demo;

impl Demo {
    /// Configure a Central Limit Theorem coin-flip session.
    pub fn clt<T: Float + FloatConst>() -> CltDemoBuilder<T> {
        CltDemoBuilder::new()
    }

    /// Configure an interactive regression session.
    pub fn regression<T: Float>() -> RegressionDemoBuilder<T> {
        RegressionDemoBuilder::new()
    }

    /// Create a binomial versus Poisson session with default inputs.
    pub fn binomial_poisson<T: Float>() -> BinomialPoissonDemo<T> {
        BinomialPoissonDemo::new()
    }
}

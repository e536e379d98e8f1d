//! Central Limit Theorem session.
//!
//! ## Purpose
//!
//! This module holds the state of one CLT demo: the growing list of
//! coin-flip sample means, plus the parameters used to draw new batches.
//!
//! ## Design notes
//!
//! * **Explicit context**: Each [`CltDemo`] owns its samples; sessions never
//!   share state.
//! * **Append-only**: Batches extend the list until [`CltDemo::reset`].
//! * **Builder**: Parameters are validated once at `build()` and again by
//!   each setter.
//!
//! ## Invariants
//!
//! * Every stored sample mean lies in `[0, 1]`.
//! * `sample_size >= 1` and `curve_points >= 2`.
//!
//! ## Non-goals
//!
//! * This adapter does not remember which sample size produced each mean.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::marker::PhantomData;
use num_traits::{Float, FloatConst};

// Internal dependencies
use crate::algorithms::sampling::{SampleSummary, normal_approximation, simulate_batch};
use crate::engine::validator::Validator;
use crate::evaluation::summary::clt_title;
use crate::primitives::errors::StatError;
use crate::primitives::figure::{Figure, HistNorm, Layout, RenderSink, Series, TraceKind};
use crate::primitives::random::UniformSource;

// ============================================================================
// CLT Builder
// ============================================================================

/// Builder for a [`CltDemo`].
#[derive(Debug, Clone)]
pub struct CltDemoBuilder<T> {
    /// Coin flips per sample (default: 30).
    pub sample_size: usize,

    /// Samples drawn per batch (default: 100).
    pub batch_count: usize,

    /// Resolution of the normal overlay (default: 100).
    pub curve_points: usize,

    _marker: PhantomData<T>,
}

impl<T> Default for CltDemoBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CltDemoBuilder<T> {
    /// Create a builder with default parameters.
    pub fn new() -> Self {
        Self {
            sample_size: 30,
            batch_count: 100,
            curve_points: 100,
            _marker: PhantomData,
        }
    }

    /// Set the number of coin flips per sample.
    pub fn sample_size(mut self, n: usize) -> Self {
        self.sample_size = n;
        self
    }

    /// Set the number of samples drawn per batch.
    pub fn batch_count(mut self, count: usize) -> Self {
        self.batch_count = count;
        self
    }

    /// Set the resolution of the normal overlay.
    pub fn curve_points(mut self, points: usize) -> Self {
        self.curve_points = points;
        self
    }

    /// Validate parameters and create an empty session.
    pub fn build(self) -> Result<CltDemo<T>, StatError> {
        Validator::validate_sample_size(self.sample_size)?;
        Validator::validate_curve_points(self.curve_points)?;

        Ok(CltDemo {
            sample_size: self.sample_size,
            batch_count: self.batch_count,
            curve_points: self.curve_points,
            samples: Vec::new(),
        })
    }
}

// ============================================================================
// CLT Session
// ============================================================================

/// One CLT demo session.
#[derive(Debug, Clone)]
pub struct CltDemo<T> {
    sample_size: usize,
    batch_count: usize,
    curve_points: usize,
    samples: Vec<T>,
}

impl<T: Float + FloatConst> CltDemo<T> {
    /// Start configuring a session.
    pub fn builder() -> CltDemoBuilder<T> {
        CltDemoBuilder::new()
    }

    // ========================================================================
    // Parameters
    // ========================================================================

    /// Coin flips per sample.
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Samples drawn per batch.
    pub fn batch_count(&self) -> usize {
        self.batch_count
    }

    /// Change the number of coin flips for future samples.
    pub fn set_sample_size(&mut self, n: usize) -> Result<(), StatError> {
        Validator::validate_sample_size(n)?;
        self.sample_size = n;
        Ok(())
    }

    /// Change the number of samples drawn per batch. Zero makes batches no-ops.
    pub fn set_batch_count(&mut self, count: usize) {
        self.batch_count = count;
    }

    /// Parse the sample size and batch count from text fields.
    ///
    /// On failure neither parameter changes.
    pub fn set_from_text(&mut self, n: &str, count: &str) -> Result<(), StatError> {
        let parsed = Validator::parse_count(n, "sample size").and_then(|n| {
            Validator::validate_sample_size(n)?;
            Validator::parse_count(count, "sample count").map(|count| (n, count))
        });
        match parsed {
            Ok((n, count)) => {
                self.sample_size = n;
                self.batch_count = count;
                Ok(())
            }
            Err(err) => {
                tracing::debug!(error = %err, "CLT parameters rejected");
                Err(err)
            }
        }
    }

    // ========================================================================
    // Actions
    // ========================================================================

    /// Draw one batch and append it. Returns the number of means appended.
    pub fn add_samples<S>(&mut self, source: &mut S) -> usize
    where
        S: UniformSource<T> + ?Sized,
    {
        simulate_batch(self.sample_size, self.batch_count, source, &mut self.samples);
        tracing::debug!(
            appended = self.batch_count,
            total = self.samples.len(),
            sample_size = self.sample_size,
            "CLT samples added"
        );
        self.batch_count
    }

    /// Discard every collected sample mean.
    pub fn reset(&mut self) {
        tracing::debug!(discarded = self.samples.len(), "CLT samples reset");
        self.samples = Vec::new();
    }

    // ========================================================================
    // Views
    // ========================================================================

    /// Collected sample means in draw order.
    pub fn samples(&self) -> &[T] {
        &self.samples
    }

    /// Number of collected sample means.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no samples have been collected.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Empirical versus theoretical moments.
    pub fn summary(&self) -> SampleSummary<T> {
        SampleSummary::new(&self.samples, self.sample_size)
    }

    /// Histogram of sample means with the normal approximation overlaid.
    pub fn figure(&self) -> Figure<T> {
        let histogram = Series::histogram("Sample Means", self.samples.clone())
            .opacity(0.7)
            .hist_norm(HistNorm::ProbabilityDensity)
            .outline(1.0, "black");

        let (xs, ys) = normal_approximation::<T>(self.sample_size, self.curve_points);
        let normal = Series::xy("Normal Approx", TraceKind::Lines, xs, ys).color("red");

        let layout = Layout::new(
            clt_title(self.sample_size, self.samples.len()),
            "Mean #Heads / n",
            "Probability Density",
        )
        .bar_gap(0.02);

        Figure {
            series: vec![histogram, normal],
            layout,
        }
    }

    /// Send the current figure to `sink`.
    pub fn plot<R: RenderSink<T> + ?Sized>(&self, sink: &mut R) {
        sink.render(&self.figure());
    }
}

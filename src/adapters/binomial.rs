//! Binomial versus Poisson session.
//!
//! ## Purpose
//!
//! This module keeps the current `(n, p)` inputs of the binomial-to-Poisson
//! demo and renders both laws on request.
//!
//! ## Design notes
//!
//! * **Deferred validation**: Setters store raw values; `evaluate` rejects
//!   invalid ones and nothing is rendered.
//! * **Stateless results**: Each evaluation is computed from scratch.
//!
//! ## Non-goals
//!
//! * This adapter does not cap `n`; large values fall back to log-space PMFs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::str::FromStr;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::distribution::{DistributionPair, evaluate};
use crate::engine::validator::Validator;
use crate::evaluation::summary::{binomial_poisson_title, poisson_name};
use crate::math::from_usize;
use crate::primitives::errors::StatError;
use crate::primitives::figure::{BarMode, Figure, Layout, RenderSink, Series, TraceKind};

/// One binomial versus Poisson demo session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinomialPoissonDemo<T> {
    trials: usize,
    probability: T,
}

impl<T: Float> Default for BinomialPoissonDemo<T> {
    fn default() -> Self {
        Self {
            trials: 20,
            probability: T::from(0.1).unwrap_or_else(T::zero),
        }
    }
}

impl<T: Float> BinomialPoissonDemo<T> {
    /// Create a session with `n = 20` and `p = 0.1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current trial count.
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Current success probability.
    pub fn probability(&self) -> T {
        self.probability
    }

    /// Set the trial count. Checked when evaluating.
    pub fn set_trials(&mut self, n: usize) {
        self.trials = n;
    }

    /// Set the success probability. Checked when evaluating.
    pub fn set_probability(&mut self, p: T) {
        self.probability = p;
    }

    /// Parse both fields from text. On failure nothing changes.
    pub fn set_from_text(&mut self, n: &str, p: &str) -> Result<(), StatError>
    where
        T: FromStr,
    {
        let trials = Validator::parse_count(n, "n")?;
        let probability = Validator::parse_value::<T>(p, "p")?;
        self.trials = trials;
        self.probability = probability;
        Ok(())
    }

    /// Evaluate both laws for the current inputs.
    pub fn evaluate(&self) -> Result<DistributionPair<T>, StatError> {
        let pair = evaluate(self.trials, self.probability)?;
        tracing::trace!(
            trials = self.trials,
            max_k = pair.max_k(),
            "binomial and poisson evaluated"
        );
        Ok(pair)
    }

    /// Binomial bars with the Poisson line overlaid.
    pub fn figure(&self) -> Result<Figure<T>, StatError> {
        let pair = self.evaluate()?;
        Ok(figure_for(&pair))
    }

    /// Send the figure to `sink`. Invalid inputs render nothing.
    pub fn plot<R: RenderSink<T> + ?Sized>(&self, sink: &mut R) -> Result<(), StatError> {
        match self.figure() {
            Ok(figure) => {
                sink.render(&figure);
                Ok(())
            }
            Err(err) => {
                tracing::debug!(error = %err, "binomial plot skipped");
                Err(err)
            }
        }
    }
}

/// Build the comparison chart for an evaluated pair.
pub fn figure_for<T: Float>(pair: &DistributionPair<T>) -> Figure<T> {
    let ks: Vec<T> = pair.binomial.iter().map(|e| from_usize::<T>(e.k)).collect();
    let binom = pair.binomial.iter().map(|e| e.probability).collect();
    let pois = pair.poisson.iter().map(|e| e.probability).collect();

    let binomial = Series::xy("Binomial PMF", TraceKind::Bar, ks.clone(), binom)
        .opacity(0.7)
        .outline(1.0, "black");
    let poisson =
        Series::xy(poisson_name(pair.lambda), TraceKind::LinesMarkers, ks, pois).color("red");

    let layout = Layout::new(
        binomial_poisson_title(pair.trials, pair.probability, pair.lambda),
        "k",
        "Probability",
    )
    .bar_mode(BarMode::Overlay);

    Figure {
        series: vec![binomial, poisson],
        layout,
    }
}

//! Interactive regression session.
//!
//! ## Purpose
//!
//! This module holds the point set of one regression demo and re-fits it on
//! every view request.
//!
//! ## Design notes
//!
//! * **Explicit context**: Each [`RegressionDemo`] owns its points.
//! * **Gatekeeping**: Non-finite or unparsable input never reaches the point set.
//! * **Snapshot**: Fits are recomputed from scratch; nothing is cached.
//!
//! ## Invariants
//!
//! * Every stored point has finite coordinates.
//! * Points keep insertion order.
//!
//! ## Non-goals
//!
//! * This adapter does not support removing individual points.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use core::str::FromStr;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::regression::{FitOutcome, Point, fit};
use crate::engine::validator::Validator;
use crate::evaluation::summary::{DEFAULT_PRECISION, regression_summary};
use crate::primitives::errors::StatError;
use crate::primitives::figure::{Figure, Layout, RenderSink, Series, TraceKind};

// ============================================================================
// Regression Builder
// ============================================================================

/// Builder for a [`RegressionDemo`].
#[derive(Debug, Clone)]
pub struct RegressionDemoBuilder<T> {
    /// Decimals shown in the summary text (default: 3).
    pub precision: usize,

    /// Points present when the session starts.
    pub initial_points: Vec<Point<T>>,
}

impl<T> Default for RegressionDemoBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RegressionDemoBuilder<T> {
    /// Create a builder with default parameters.
    pub fn new() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            initial_points: Vec::new(),
        }
    }

    /// Set the number of decimals in the summary text.
    pub fn precision(mut self, decimals: usize) -> Self {
        self.precision = decimals;
        self
    }

    /// Seed the session with points.
    pub fn points(mut self, points: impl IntoIterator<Item = Point<T>>) -> Self {
        self.initial_points.extend(points);
        self
    }
}

impl<T: Float> RegressionDemoBuilder<T> {
    /// Validate the seed points and create the session.
    pub fn build(self) -> Result<RegressionDemo<T>, StatError> {
        for p in &self.initial_points {
            Validator::validate_point(p.x, p.y)?;
        }

        Ok(RegressionDemo {
            precision: self.precision,
            points: self.initial_points,
        })
    }
}

// ============================================================================
// Regression Session
// ============================================================================

/// One regression demo session.
#[derive(Debug, Clone)]
pub struct RegressionDemo<T> {
    precision: usize,
    points: Vec<Point<T>>,
}

impl<T: Float> RegressionDemo<T> {
    /// Start configuring a session.
    pub fn builder() -> RegressionDemoBuilder<T> {
        RegressionDemoBuilder::new()
    }

    // ========================================================================
    // Actions
    // ========================================================================

    /// Append a point. Non-finite coordinates are rejected and nothing changes.
    pub fn add_point(&mut self, x: T, y: T) -> Result<(), StatError> {
        if let Err(err) = Validator::validate_point(x, y) {
            tracing::debug!(error = %err, "regression point rejected");
            return Err(err);
        }
        self.points.push(Point::new(x, y));
        tracing::debug!(total = self.points.len(), "regression point added");
        Ok(())
    }

    /// Parse and append a point from text fields.
    pub fn add_point_text(&mut self, x: &str, y: &str) -> Result<(), StatError>
    where
        T: FromStr,
    {
        let parsed = Validator::parse_value::<T>(x, "x")
            .and_then(|x| Validator::parse_value::<T>(y, "y").map(|y| (x, y)));
        match parsed {
            Ok((x, y)) => self.add_point(x, y),
            Err(err) => {
                tracing::debug!(error = %err, "regression point rejected");
                Err(err)
            }
        }
    }

    /// Discard every point.
    pub fn reset(&mut self) {
        tracing::debug!(discarded = self.points.len(), "regression points reset");
        self.points = Vec::new();
    }

    // ========================================================================
    // Views
    // ========================================================================

    /// Points in insertion order.
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the session has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Fit the current points.
    pub fn fit(&self) -> FitOutcome<T> {
        fit(&self.points)
    }

    /// Statistics block, or the not-enough-data message.
    pub fn summary_text(&self) -> String {
        regression_summary(&self.fit(), self.precision)
    }

    /// Scatter of the points plus the fitted segment when available.
    pub fn figure(&self) -> Figure<T> {
        let xs = self.points.iter().map(|p| p.x).collect();
        let ys = self.points.iter().map(|p| p.y).collect();
        let mut series = vec![Series::xy("Data Points", TraceKind::Markers, xs, ys)];

        let outcome = self.fit();
        if let Some([a, b]) = outcome.fitted().and_then(|f| f.segment(&self.points)) {
            series.push(
                Series::xy(
                    "Regression Line",
                    TraceKind::Lines,
                    vec![a.x, b.x],
                    vec![a.y, b.y],
                )
                .color("red"),
            );
        }

        Figure {
            series,
            layout: Layout::new("Linear Regression Demo", "X", "Y"),
        }
    }

    /// Send the figure and summary text to `sink`.
    pub fn plot<R: RenderSink<T> + ?Sized>(&self, sink: &mut R) {
        sink.render(&self.figure());
        sink.show_summary(&self.summary_text());
    }
}

//! Ordinary least squares line fitting.
//!
//! ## Purpose
//!
//! This module fits a straight line to an accumulated point set and derives
//! fit-quality statistics (mean squared error and coefficient of
//! determination).
//!
//! ## Design notes
//!
//! * **Snapshot**: Every fit is recomputed from scratch; nothing is cached.
//! * **Population formulas**: Sums are divided by `n`, never `n - 1`.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Slope**: `sum(dx * dy) / sum(dx^2)` with deviations from the means.
//! * **Intercept**: `mean_y - slope * mean_x`.
//! * **MSE**: `sum((y - y_hat)^2) / n`.
//! * **R^2**: `1 - ss_res / ss_tot`.
//!
//! ## Invariants
//!
//! * Fewer than two points yields [`FitOutcome::Insufficient`], not an error.
//! * Zero variance in x gives slope exactly zero.
//! * Zero variance in y gives R^2 exactly one.
//! * The result does not depend on point order beyond float rounding.
//!
//! ## Non-goals
//!
//! * This module does not fit weighted, robust or polynomial models.
//! * This module does not compute standard errors or intervals.

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
use crate::primitives::errors::StatError;

/// Minimum number of points for a line fit.
pub const MIN_POINTS: usize = 2;

// ============================================================================
// Types
// ============================================================================

/// One observation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Point<T> {
    /// Predictor value.
    pub x: T,
    /// Response value.
    pub y: T,
}

impl<T> Point<T> {
    /// Create a point.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

/// Fitted line and its quality statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LinearFit<T> {
    /// Slope `m` of `y = m x + b`.
    pub slope: T,
    /// Intercept `b` of `y = m x + b`.
    pub intercept: T,
    /// Mean squared residual.
    pub mse: T,
    /// Coefficient of determination.
    pub r_squared: T,
    /// Number of points fitted.
    pub n: usize,
}

impl<T: Float> LinearFit<T> {
    /// Evaluate the fitted line at `x`.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.slope * x + self.intercept
    }

    /// Line segment spanning the x extent of `points`.
    ///
    /// Returns the endpoints at the minimum and maximum x, or `None` when
    /// `points` is empty.
    pub fn segment(&self, points: &[Point<T>]) -> Option<[Point<T>; 2]> {
        let first = points.first()?;
        let (min_x, max_x) = points
            .iter()
            .fold((first.x, first.x), |(lo, hi), p| (lo.min(p.x), hi.max(p.x)));
        Some([
            Point::new(min_x, self.predict(min_x)),
            Point::new(max_x, self.predict(max_x)),
        ])
    }
}

/// Result of a fit request.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FitOutcome<T> {
    /// A line was fitted.
    Fitted(LinearFit<T>),
    /// Too few points to fit a line.
    Insufficient {
        /// Number of points available.
        points: usize,
    },
}

impl<T> FitOutcome<T> {
    /// The fitted line, if any.
    pub fn fitted(&self) -> Option<&LinearFit<T>> {
        match self {
            FitOutcome::Fitted(fit) => Some(fit),
            FitOutcome::Insufficient { .. } => None,
        }
    }

    /// Whether there were too few points.
    pub fn is_insufficient(&self) -> bool {
        matches!(self, FitOutcome::Insufficient { .. })
    }
}

// ============================================================================
// Fitting
// ============================================================================

/// Fit `y = m x + b` to `points` by ordinary least squares.
pub fn fit<T: Float>(points: &[Point<T>]) -> FitOutcome<T> {
    let n = points.len();
    if n < MIN_POINTS {
        return FitOutcome::Insufficient { points: n };
    }

    let nf = from_usize::<T>(n);

    // Step 1: Means
    let (sum_x, sum_y) = points
        .iter()
        .fold((T::zero(), T::zero()), |(sx, sy), p| (sx + p.x, sy + p.y));
    let mean_x = sum_x / nf;
    let mean_y = sum_y / nf;

    // Step 2: Slope from centered cross products
    let (sxy, sxx) = points.iter().fold((T::zero(), T::zero()), |(sxy, sxx), p| {
        let dx = p.x - mean_x;
        let dy = p.y - mean_y;
        (sxy + dx * dy, sxx + dx * dx)
    });
    // Rounded means can leave a tiny sxx for identical x, so compare raw values.
    let x_constant = points.iter().all(|p| p.x == points[0].x);
    let slope = if x_constant || sxx == T::zero() {
        T::zero()
    } else {
        sxy / sxx
    };
    let intercept = mean_y - slope * mean_x;

    // Step 3: Residual and total sums of squares
    let (ss_res, ss_tot) = points.iter().fold((T::zero(), T::zero()), |(res, tot), p| {
        let r = p.y - (slope * p.x + intercept);
        let d = p.y - mean_y;
        (res + r * r, tot + d * d)
    });

    let y_constant = points.iter().all(|p| p.y == points[0].y);
    let r_squared = if y_constant || ss_tot == T::zero() {
        T::one()
    } else {
        T::one() - ss_res / ss_tot
    };

    FitOutcome::Fitted(LinearFit {
        slope,
        intercept,
        mse: ss_res / nf,
        r_squared,
        n,
    })
}

/// Fit parallel coordinate slices.
///
/// Rejects slices of different length or containing non-finite values.
pub fn fit_xy<T: Float>(x: &[T], y: &[T]) -> Result<FitOutcome<T>, StatError> {
    Validator::validate_inputs(x, y)?;

    let points: Vec<Point<T>> = x.iter().zip(y).map(|(&x, &y)| Point::new(x, y)).collect();
    Ok(fit(&points))
}

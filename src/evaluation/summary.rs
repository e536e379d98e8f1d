//! Summary text and chart titles.
//!
//! ## Purpose
//!
//! This module turns computed results into the strings the rendering sink
//! displays: the regression statistics block and the per-demo titles.
//!
//! ## Design notes
//!
//! * **Precision**: Regression statistics use a caller-chosen number of
//!   decimals (three by default).
//! * **Plain text**: Lines are joined with `\n`; markup is the sink's job.
//!
//! ## Non-goals
//!
//! * This module does not localise messages.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String};
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::regression::FitOutcome;

/// Decimals shown for regression statistics unless configured otherwise.
pub const DEFAULT_PRECISION: usize = 3;

/// Text shown when fewer than two points are available.
pub const INSUFFICIENT_MESSAGE: &str = "Need at least 2 points for regression.";

#[inline]
fn as_f64<T: Float>(v: T) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}

/// Shortest decimal that round-trips at the precision of `T`.
fn shortest<T: Float>(v: T) -> String {
    if as_f64(T::epsilon()) >= f64::from(f32::EPSILON) {
        format!("{}", v.to_f32().unwrap_or(f32::NAN))
    } else {
        format!("{}", as_f64(v))
    }
}

// ============================================================================
// Regression
// ============================================================================

/// Format slope, intercept, MSE and R^2, one per line.
pub fn regression_summary<T: Float>(outcome: &FitOutcome<T>, precision: usize) -> String {
    match outcome.fitted() {
        Some(fit) => format!(
            "Slope (m): {:.*}\nIntercept (b): {:.*}\nMSE: {:.*}\nR²: {:.*}",
            precision,
            as_f64(fit.slope),
            precision,
            as_f64(fit.intercept),
            precision,
            as_f64(fit.mse),
            precision,
            as_f64(fit.r_squared),
        ),
        None => String::from(INSUFFICIENT_MESSAGE),
    }
}

// ============================================================================
// Titles
// ============================================================================

/// Title of the CLT chart.
pub fn clt_title(sample_size: usize, samples: usize) -> String {
    format!("CLT Demo (n={}, samples={})", sample_size, samples)
}

/// Legend name of the Poisson series.
pub fn poisson_name<T: Float>(lambda: T) -> String {
    format!("Poisson(λ={:.2})", as_f64(lambda))
}

/// Title of the binomial versus Poisson chart.
pub fn binomial_poisson_title<T: Float>(trials: usize, probability: T, lambda: T) -> String {
    format!(
        "Binomial(n={}, p={}) vs {}",
        trials,
        shortest(probability),
        poisson_name(lambda)
    )
}

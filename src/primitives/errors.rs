//! Error types for statistics demo operations.
//!
//! ## Purpose
//!
//! This module defines the error type returned when input is rejected
//! before any computation runs: non-numeric text, non-finite values,
//! out-of-domain parameters and negative factorial arguments.
//!
//! ## Design notes
//!
//! * **Single Enum**: One `StatError` covers every rejection in the crate.
//! * **Context**: Variants carry the offending value for display.
//! * **no_std**: `std::error::Error` is only implemented with the `std` feature.
//!
//! ## Key concepts
//!
//! * **Rejection vs Outcome**: Too few regression points and the
//!   zero-variance conventions are values, not errors.
//!
//! ## Non-goals
//!
//! * This module does not recover from errors or correct invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for rejected statistics demo input.
#[derive(Debug, Clone, PartialEq)]
pub enum StatError {
    /// A value was NaN or infinite.
    InvalidNumericValue(String),

    /// Text input could not be parsed as a number.
    ParseFailure {
        /// Name of the input field.
        field: &'static str,
        /// The rejected text.
        input: String,
    },

    /// Parallel x and y sequences have different lengths.
    MismatchedInputs {
        /// Number of x values.
        x_len: usize,
        /// Number of y values.
        y_len: usize,
    },

    /// Coin flips per sample must be at least 1.
    InvalidSampleSize(usize),

    /// Binomial trial count must be at least 1.
    InvalidTrials(usize),

    /// Binomial trial count exceeds the supported maximum.
    TooManyTrials {
        /// Requested trial count.
        trials: usize,
        /// Largest accepted trial count.
        max: usize,
    },

    /// Success probability must lie in [0, 1].
    InvalidProbability(f64),

    /// Factorial is undefined for negative arguments.
    NegativeFactorial(i64),

    /// Normal curve needs at least 2 evaluation points.
    InvalidCurvePoints(usize),
}

impl fmt::Display for StatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatError::InvalidNumericValue(detail) => {
                write!(f, "Invalid numeric value: {}", detail)
            }
            StatError::ParseFailure { field, input } => {
                write!(f, "Could not parse {} from '{}'", field, input)
            }
            StatError::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {} points, y has {}", x_len, y_len)
            }
            StatError::InvalidSampleSize(n) => {
                write!(f, "Invalid sample size: {} (must be at least 1)", n)
            }
            StatError::InvalidTrials(n) => {
                write!(f, "Invalid number of trials: {} (must be at least 1)", n)
            }
            StatError::TooManyTrials { trials, max } => {
                write!(f, "Too many trials: {} (must be at most {})", trials, max)
            }
            StatError::InvalidProbability(p) => {
                write!(f, "Invalid probability: {} (must be in [0, 1])", p)
            }
            StatError::NegativeFactorial(num) => {
                write!(f, "Factorial is undefined for negative argument {}", num)
            }
            StatError::InvalidCurvePoints(points) => {
                write!(f, "Invalid curve points: {} (must be at least 2)", points)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StatError {}

//! Input validation for demo parameters and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for every value that crosses
//! from the input surface into the computational core: sample sizes,
//! binomial parameters, regression points and raw text fields.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: Enforces `n >= 1`, binomial `n <= MAX_TRIALS`
//!   and `p` in `[0, 1]`.
//! * **Finite Checks**: Ensures all inputs are finite (no NaN/Inf).
//! * **Text Parsing**: Trims and parses field text; rejects non-numbers.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not provide automatic correction of invalid inputs.
//! * This module does not cap CLT sample sizes or batch counts.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::ToString};

// External dependencies
use core::str::FromStr;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::StatError;

/// Largest binomial trial count accepted.
///
/// Both series hold `max_k + 1` entries, so the cap bounds their length
/// at roughly half a million.
pub const MAX_TRIALS: usize = 1_000_000;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for demo parameters and input data.
///
/// Provides static methods for validating each kind of input. All methods
/// fail fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Data Validation
    // ========================================================================

    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), StatError> {
        if !val.is_finite() {
            return Err(StatError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    /// Validate one regression observation.
    pub fn validate_point<T: Float>(x: T, y: T) -> Result<(), StatError> {
        Self::validate_scalar(x, "x")?;
        Self::validate_scalar(y, "y")
    }

    /// Validate parallel coordinate arrays for regression.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T]) -> Result<(), StatError> {
        // Check 1: Matching lengths
        if x.len() != y.len() {
            return Err(StatError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        // Check 2: All values finite
        for (i, &val) in x.iter().enumerate() {
            if !val.is_finite() {
                return Err(StatError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        for (i, &val) in y.iter().enumerate() {
            if !val.is_finite() {
                return Err(StatError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the number of coin flips per CLT sample.
    pub fn validate_sample_size(n: usize) -> Result<(), StatError> {
        if n < 1 {
            return Err(StatError::InvalidSampleSize(n));
        }
        Ok(())
    }

    /// Validate the number of binomial trials: `1 <= n <= MAX_TRIALS`.
    pub fn validate_trials(n: usize) -> Result<(), StatError> {
        if n < 1 {
            return Err(StatError::InvalidTrials(n));
        }
        if n > MAX_TRIALS {
            return Err(StatError::TooManyTrials {
                trials: n,
                max: MAX_TRIALS,
            });
        }
        Ok(())
    }

    /// Validate a success probability.
    pub fn validate_probability<T: Float>(p: T) -> Result<(), StatError> {
        if !p.is_finite() || p < T::zero() || p > T::one() {
            return Err(StatError::InvalidProbability(
                p.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the resolution of the normal overlay curve.
    pub fn validate_curve_points(points: usize) -> Result<(), StatError> {
        if points < 2 {
            return Err(StatError::InvalidCurvePoints(points));
        }
        Ok(())
    }

    // ========================================================================
    // Text Input
    // ========================================================================

    /// Parse a non-negative integer field.
    pub fn parse_count(input: &str, field: &'static str) -> Result<usize, StatError> {
        input
            .trim()
            .parse::<usize>()
            .map_err(|_| StatError::ParseFailure {
                field,
                input: input.to_string(),
            })
    }

    /// Parse a finite floating-point field.
    pub fn parse_value<T: Float + FromStr>(
        input: &str,
        field: &'static str,
    ) -> Result<T, StatError> {
        let value = input
            .trim()
            .parse::<T>()
            .map_err(|_| StatError::ParseFailure {
                field,
                input: input.to_string(),
            })?;
        Self::validate_scalar(value, field)?;
        Ok(value)
    }
}

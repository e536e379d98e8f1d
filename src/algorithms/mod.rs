//! Layer 4: Algorithms
//!
//! # Purpose
//!
//! This layer holds the three computational cores of the demos:
//! - Coin-flip sampling for the CLT
//! - Least-squares regression
//! - Binomial versus Poisson evaluation
//!
//! The three modules are independent of each other.
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
//! Layer 4: Algorithms ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Coin-flip sampling.
pub mod sampling;

/// Ordinary least squares.
pub mod regression;

/// Binomial and Poisson evaluation.
pub mod distribution;

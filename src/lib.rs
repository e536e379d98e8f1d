//! # statdemo: interactive statistics teaching demos
//!
//! The computational core of three classroom demos, independent of any
//! user interface:
//!
//! - **Central Limit Theorem**: repeatedly flip a fair coin `n` times, collect
//!   the fraction of heads, and watch the histogram of those fractions
//!   approach `N(0.5, 0.25 / n)`.
//! - **Linear regression**: add points one at a time and re-fit an ordinary
//!   least squares line, with mean squared error and R².
//! - **Binomial to Poisson**: compare `Binomial(n, p)` with `Poisson(n p)` on a
//!   shared support and see the two laws converge for large `n`, small `p`.
//!
//! Each demo is a session object that owns its state and describes its chart
//! as a [`Figure`](prelude::Figure) handed to a
//! [`RenderSink`](prelude::RenderSink). Drawing is left to the host.
//!
//! ## Quick Start
//!
//! ### Regression
//!
//! ```rust
//! use statdemo::prelude::*;
//!
//! let mut demo = Demo::regression::<f64>().build()?;
//! demo.add_point(1.0, 2.0)?;
//! assert!(demo.fit().is_insufficient());
//!
//! demo.add_point(2.0, 4.0)?;
//! demo.add_point(3.0, 6.0)?;
//!
//! let fit = *demo.fit().fitted().expect("three points");
//! assert!((fit.slope - 2.0).abs() < 1e-12);
//! assert!((fit.intercept).abs() < 1e-12);
//! assert_eq!(demo.summary_text().lines().next(), Some("Slope (m): 2.000"));
//! # Ok::<(), StatError>(())
//! ```
//!
//! ### Central Limit Theorem
//!
//! ```rust
//! use statdemo::prelude::*;
//!
//! let mut demo = Demo::clt::<f64>().sample_size(20).batch_count(500).build()?;
//! let mut source = SeededSource::new(42);
//! demo.add_samples(&mut source);
//!
//! assert_eq!(demo.len(), 500);
//! assert!(demo.samples().iter().all(|&m| (0.0..=1.0).contains(&m)));
//!
//! let summary = demo.summary();
//! assert!((summary.mean - 0.5).abs() < 0.05);
//! # Ok::<(), StatError>(())
//! ```
//!
//! ### Binomial versus Poisson
//!
//! ```rust
//! use statdemo::prelude::*;
//!
//! let pair = evaluate(4, 0.5_f64)?;
//! assert_eq!(pair.lambda, 2.0);
//! assert_eq!(pair.max_k(), 4);
//! assert!((pair.binomial[2].probability - 0.375).abs() < 1e-12);
//!
//! assert!(evaluate(0, 0.5_f64).is_err());
//! assert!(evaluate(10, 1.5_f64).is_err());
//! # Ok::<(), StatError>(())
//! ```
//!
//! ## Randomness
//!
//! Coin flips come from a [`UniformSource`](prelude::UniformSource): any
//! closure via [`from_fn`](prelude::from_fn), a reproducible
//! [`SeededSource`](prelude::SeededSource), or the thread-local
//! `ThreadSource` (with the `std` feature).
//!
//! ## Outcomes That Are Not Errors
//!
//! | Situation                  | Result                             |
//! |----------------------------|------------------------------------|
//! | Fewer than 2 points        | `FitOutcome::Insufficient`         |
//! | All x identical            | slope exactly `0`                  |
//! | All y identical            | R² exactly `1`                     |
//! | `p = 0`                    | all mass at `k = 0` for both laws  |
//!
//! Rejected input (`n < 1`, binomial `n` above `MAX_TRIALS`, `p` outside
//! `[0, 1]`, NaN, unparsable text, negative factorial) is reported as a [`StatError`](prelude::StatError).
//!
//! ## Logging
//!
//! Session mutations emit `tracing` events at `debug`/`trace` level. The
//! crate never installs a subscriber.
//!
//! ## Feature Flags
//!
//! - `std` (default): `std::error::Error` and `ThreadSource`.
//! - `serde`: `Serialize` for figures and results.
//! - `dev`: exposes `internals` for white-box testing.
//!
//! Without `std` the crate needs only `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the error type, uniform random sources and the figure model
// consumed by render sinks.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains factorials, binomial coefficients, the binomial and Poisson
// PMFs, the normal density and population moments.
mod math;

// Layer 3: Engine - input validation.
//
// Contains the `Validator` guarding every parameter and data value.
mod engine;

// Layer 4: Algorithms - computational cores.
//
// Contains coin-flip sampling, least-squares regression and the
// binomial/Poisson evaluator.
mod algorithms;

// Layer 5: Evaluation - presentation of results.
//
// Contains summary text and chart titles.
mod evaluation;

// Layer 6: Adapters - demo sessions.
//
// Contains the CLT, regression and binomial/Poisson session objects.
mod adapters;

// High-level API.
//
// Provides `Demo` and re-exports of the public types.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use statdemo::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::*;
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal validation engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal computational cores.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal presentation helpers.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal demo sessions.
    pub mod adapters {
        pub use crate::adapters::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}

//! Layer 6: Adapters
//!
//! # Purpose
//!
//! This layer provides one session object per demo. A session owns the
//! accumulated state (sample means, points, current parameters), applies
//! user actions to it and describes the resulting chart to a render sink.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters ← You are here
//!   ↓
//! Layer 5: Evaluation
//!   ↓
//! Layer 4: Algorithms
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// CLT coin-flip session.
pub mod clt;

/// Interactive regression session.
pub mod regression;

/// Binomial versus Poisson session.
pub mod binomial;

//! Layer 5: Evaluation
//!
//! # Purpose
//!
//! This layer presents computed results: summary text and chart titles.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Evaluation ← You are here
//!   ↓
//! Layer 4: Algorithms
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Summary text and titles.
pub mod summary;

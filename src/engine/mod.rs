//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer guards the computational core: every parameter and data value
//! is checked here before the algorithms layer sees it.
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
//! Layer 4: Algorithms
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Parameter and data validation.
pub mod validator;

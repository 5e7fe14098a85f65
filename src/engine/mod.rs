//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer guards the math kernels: every public routine passes its
//! inputs through the [`validator::Validator`] before computing.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input validation for all routines.
pub mod validator;

//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental data types shared by every other layer:
//! - The crate-wide error type
//! - Matrix shape and operand descriptors
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for all fallible routines.
pub mod errors;

/// Matrix shape and operand descriptors.
pub mod matrix;

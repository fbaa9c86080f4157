//! # gd-core
//!
//! Core types and error definitions for gammadist.
//!
//! This crate provides the building blocks shared by the other crates in the
//! workspace – the floating-point type aliases, the error hierarchy, and the
//! `ensure!` / `fail!` convenience macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// A probability expressed as a decimal in `[0, 1]`.
pub type Probability = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};

//! Error types for gammadist.
//!
//! Two failure channels exist and stay separate: construction validity
//! (a distribution built from inconsistent parameters captures its error once
//! and returns it from every statistical query) and solver convergence
//! (`NoConvergence`, produced only by the quantile search).

use thiserror::Error;

/// The top-level error type used throughout gammadist.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The shape parameter is outside its domain (must be strictly positive).
    #[error("shape out of domain: {shape} (must be > 0)")]
    ShapeOutOfDomain {
        /// The offending shape value.
        shape: f64,
    },

    /// Both rate and scale were supplied. The two parameterizations are
    /// mutually exclusive; exactly one of the two must be positive.
    #[error("over-determined: both rate ({rate}) and scale ({scale}) supplied")]
    OverDetermined {
        /// The rate that was supplied.
        rate: f64,
        /// The scale that was supplied.
        scale: f64,
    },

    /// Neither rate nor scale was supplied.
    #[error("under-determined: neither rate ({rate}) nor scale ({scale}) is positive")]
    UnderDetermined {
        /// The non-positive rate that was supplied.
        rate: f64,
        /// The non-positive scale that was supplied.
        scale: f64,
    },

    /// An iterative solver exhausted its iteration budget before reaching
    /// the requested tolerance.
    #[error("no convergence after {iterations} iterations (tolerance {tolerance:e})")]
    NoConvergence {
        /// The iteration budget that was exhausted.
        iterations: u32,
        /// The tolerance that could not be met.
        tolerance: f64,
    },

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// General runtime error.
    #[error("{0}")]
    Runtime(String),
}

/// Shorthand `Result` type used throughout gammadist.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use gd_core::{ensure, errors::Error};
/// fn positive(x: f64) -> gd_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use gd_core::{fail, errors::Error};
/// fn always_err() -> gd_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

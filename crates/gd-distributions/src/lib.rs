//! # gd-distributions
//!
//! Statistics of the Gamma probability distribution: density, cumulative
//! probability, quantiles, and the standard moments, under the shape/rate
//! and shape/scale parameterizations.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// The Gamma distribution.
pub mod gamma;

pub use gamma::{GammaDistribution, DEFAULT_QUANTILE_CEILING};

//! # gammadist
//!
//! Statistics of the Gamma probability distribution: density, cumulative
//! probability, quantiles, and the five standard moments, under the two
//! mutually exclusive shape/rate and shape/scale parameterizations.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this crate
//! rather than the individual `gd-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use gammadist::GammaDistribution;
//!
//! let d = GammaDistribution::with_rate(2.0, 1.0);
//! assert_eq!(d.mean().unwrap(), 2.0);
//! assert_eq!(d.variance().unwrap(), 2.0);
//! assert!((d.pdf(2.0).unwrap() - 0.2707).abs() < 1e-4);
//! assert!((d.cdf(2.0).unwrap() - 0.5940).abs() < 1e-4);
//! ```
//!
//! Invalid parameterizations are captured at construction and surface as
//! errors on every statistical query:
//!
//! ```rust
//! use gammadist::GammaDistribution;
//!
//! // Both rate and scale supplied: over-determined.
//! let d = GammaDistribution::new(2.0, 1.0, 0.5);
//! assert!(!d.is_valid());
//! assert!(d.mean().is_err());
//! // The raw inputs are still readable.
//! assert_eq!(d.beta(), 1.0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use gd_core as core;

/// Special functions: Γ, ln Γ, and the lower incomplete gamma integral.
pub use gd_special as special;

/// The Gamma distribution itself.
pub use gd_distributions as distributions;

pub use gd_core::{Error, Probability, Real, Result};
pub use gd_distributions::{GammaDistribution, DEFAULT_QUANTILE_CEILING};

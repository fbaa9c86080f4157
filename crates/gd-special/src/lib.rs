//! # gd-special
//!
//! Special functions backing the gamma distribution: Γ, ln Γ, and the lower
//! incomplete gamma integral, delegating to the `statrs` crate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

use gd_core::Real;

/// Largest argument for which [`gamma_function`] returns a finite `f64`.
///
/// The Lanczos evaluation in `statrs` overflows shortly before the
/// mathematical limit of Γ (its first infinite result appears near
/// `a ≈ 169.75`, not at `a ≈ 171.62` where Γ itself leaves `f64` range),
/// so the threshold sits conservatively below the provider's breaking point.
/// Beyond it callers must work in log space via [`ln_gamma`].
pub const MAX_GAMMA_ARG: Real = 169.0;

/// The Gamma function Γ(a).
///
/// Uses the Lanczos approximation via `statrs`. Finite only for
/// `a <= MAX_GAMMA_ARG`.
pub fn gamma_function(a: Real) -> Real {
    statrs::function::gamma::gamma(a)
}

/// The natural logarithm of the Gamma function, ln Γ(a).
///
/// Usable for all positive `a` without overflow.
pub fn ln_gamma(a: Real) -> Real {
    statrs::function::gamma::ln_gamma(a)
}

/// The threshold above which [`gamma_function`] overflows.
pub fn gamma_function_max_arg() -> Real {
    MAX_GAMMA_ARG
}

/// The lower incomplete gamma integral γ(a, x) = ∫₀ˣ t^(a-1) e^(-t) dt.
///
/// Non-regularized; divide by Γ(a) to obtain a probability in `[0, 1]`.
pub fn lower_incomplete_gamma(a: Real, x: Real) -> Real {
    statrs::function::gamma::gamma_li(a, x)
}

/// The regularized lower incomplete gamma function P(a, x) = γ(a, x) / Γ(a).
pub fn regularized_lower_gamma(a: Real, x: Real) -> Real {
    statrs::function::gamma::gamma_lr(a, x)
}

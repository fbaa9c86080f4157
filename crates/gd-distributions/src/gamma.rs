//! Gamma distribution with shape `α` and rate `β` or scale `θ`.
//!
//! The two characterisations are mutually exclusive: a distribution is built
//! either from shape and rate (scale left at zero) or from shape and scale
//! (rate left at zero). Supplying both, or neither, yields an instance that
//! remembers the construction error and returns it from every statistical
//! query, while the raw inputs stay readable through the accessors.

use gd_core::{ensure, Error, Probability, Real, Result};
use gd_special::{gamma_function, ln_gamma, lower_incomplete_gamma, MAX_GAMMA_ARG};

/// Stopping tolerance of the quantile bisection, on `|CDF(mid) - p|`.
const EPS_STOP: Real = 1.0e-7;

/// Iteration budget of the quantile bisection.
const MAX_ITERATIONS: u32 = 70;

/// Default upper end of the quantile search bracket.
///
/// A search ceiling, not a supremum: with the default bracket, quantiles
/// whose true value exceeds 100 in the distribution's natural units are not
/// reachable. Use [`GammaDistribution::quantile_with_ceiling`] for such
/// distributions.
pub const DEFAULT_QUANTILE_CEILING: Real = 100.0;

/// Gamma distribution under either the shape/rate or the shape/scale
/// parameterization.
///
/// Immutable once constructed. Parameter validation happens at construction
/// time and is captured rather than raised: the raw inputs are always stored
/// and readable, and an invalid instance returns its construction error from
/// every distributional query.
#[derive(Debug, Clone)]
pub struct GammaDistribution {
    alpha: Real,
    beta: Real,
    theta: Real,
    status: Option<Error>,
}

impl GammaDistribution {
    /// Create a gamma distribution from shape `alpha`, rate `beta`, and scale
    /// `theta`, of which exactly one of `beta` / `theta` must be positive.
    ///
    /// Checked in order: `alpha <= 0` ([`Error::ShapeOutOfDomain`], takes
    /// precedence), both `beta > 0` and `theta > 0`
    /// ([`Error::OverDetermined`]), neither positive
    /// ([`Error::UnderDetermined`]).
    pub fn new(alpha: Real, beta: Real, theta: Real) -> Self {
        let status = if alpha <= 0.0 {
            Some(Error::ShapeOutOfDomain { shape: alpha })
        } else if beta > 0.0 && theta > 0.0 {
            Some(Error::OverDetermined {
                rate: beta,
                scale: theta,
            })
        } else if beta > 0.0 || theta > 0.0 {
            None
        } else {
            Some(Error::UnderDetermined {
                rate: beta,
                scale: theta,
            })
        };
        Self {
            alpha,
            beta,
            theta,
            status,
        }
    }

    /// Create a gamma distribution with given shape and rate.
    pub fn with_rate(shape: Real, rate: Real) -> Self {
        Self::new(shape, rate, 0.0)
    }

    /// Create a gamma distribution with given shape and scale.
    pub fn with_scale(shape: Real, scale: Real) -> Self {
        Self::new(shape, 0.0, scale)
    }

    /// Whether construction produced a usable parameterization.
    pub fn is_valid(&self) -> bool {
        self.status.is_none()
    }

    /// The construction error, if any.
    pub fn status(&self) -> Option<&Error> {
        self.status.as_ref()
    }

    fn check(&self) -> Result<()> {
        match &self.status {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    /// Shape `α` as supplied at construction.
    pub fn alpha(&self) -> Real {
        self.alpha
    }

    /// Rate `β` as supplied at construction (zero under the scale form).
    pub fn beta(&self) -> Real {
        self.beta
    }

    /// Scale `θ` as supplied at construction (zero under the rate form).
    pub fn theta(&self) -> Real {
        self.theta
    }

    /// Shape parameter, identical under both parameterizations.
    pub fn shape(&self) -> Real {
        self.alpha
    }

    /// Rate parameter: the native `β`, or `1/θ` under the scale form.
    pub fn rate(&self) -> Result<Real> {
        self.check()?;
        if self.beta > 0.0 {
            Ok(self.beta)
        } else {
            Ok(1.0 / self.theta)
        }
    }

    /// Scale parameter: the native `θ`, or `1/β` under the rate form.
    pub fn scale(&self) -> Result<Real> {
        self.check()?;
        if self.theta > 0.0 {
            Ok(self.theta)
        } else {
            Ok(1.0 / self.beta)
        }
    }

    // ── Density and cumulative probability ───────────────────────────────────

    /// Probability density function.
    ///
    /// Zero for `x <= 0`. For `α` beyond the Γ overflow threshold the density
    /// is evaluated through the log-space asymptotic
    /// `exp((α-1)·ln x − x − ln Γ(α))`, which omits the rate/scale factor.
    /// That omission is a known accuracy trade-off, negligible at the
    /// extreme shapes where the branch engages.
    pub fn pdf(&self, x: Real) -> Result<Real> {
        self.check()?;
        if x <= 0.0 {
            return Ok(0.0);
        }
        if self.alpha > MAX_GAMMA_ARG {
            return Ok(((self.alpha - 1.0) * x.ln() - x - ln_gamma(self.alpha)).exp());
        }
        let g = gamma_function(self.alpha);
        if self.beta > 0.0 {
            Ok(self.beta.powf(self.alpha) * x.powf(self.alpha - 1.0) * (-self.beta * x).exp() / g)
        } else {
            Ok(x.powf(self.alpha - 1.0) * (-x / self.theta).exp()
                / (self.theta.powf(self.alpha) * g))
        }
    }

    /// Cumulative distribution function P(X ≤ x).
    ///
    /// The regularized lower incomplete gamma function γ(α, x·β)/Γ(α)
    /// (equivalently γ(α, x/θ)/Γ(α)). Zero for `x <= 0`; saturates at `1.0`
    /// for `α` beyond the Γ overflow threshold.
    pub fn cdf(&self, x: Real) -> Result<Real> {
        self.check()?;
        if x <= 0.0 {
            return Ok(0.0);
        }
        if self.alpha > MAX_GAMMA_ARG {
            return Ok(1.0);
        }
        let z = if self.beta > 0.0 {
            x * self.beta
        } else {
            x / self.theta
        };
        Ok(lower_incomplete_gamma(self.alpha, z) / gamma_function(self.alpha))
    }

    // ── Moments ──────────────────────────────────────────────────────────────

    /// Mean: `α/β` (rate form) or `α·θ` (scale form).
    pub fn mean(&self) -> Result<Real> {
        self.check()?;
        if self.beta > 0.0 {
            Ok(self.alpha / self.beta)
        } else {
            Ok(self.alpha * self.theta)
        }
    }

    /// Variance: `α/β²` (rate form) or `α·θ²` (scale form).
    pub fn variance(&self) -> Result<Real> {
        self.check()?;
        if self.beta > 0.0 {
            Ok(self.alpha / (self.beta * self.beta))
        } else {
            Ok(self.alpha * self.theta * self.theta)
        }
    }

    /// Standard deviation, the square root of [`variance`](Self::variance).
    pub fn std_deviation(&self) -> Result<Real> {
        Ok(self.variance()?.sqrt())
    }

    /// Skewness: `2/√α`. Depends on the shape only.
    pub fn skewness(&self) -> Result<Real> {
        self.check()?;
        Ok(2.0 / self.alpha.sqrt())
    }

    /// Excess kurtosis: `6/α`. Depends on the shape only.
    pub fn kurtosis(&self) -> Result<Real> {
        self.check()?;
        Ok(6.0 / self.alpha)
    }

    // ── Quantile ─────────────────────────────────────────────────────────────

    /// Inverse CDF (quantile function) over the default search bracket
    /// `[0, 100]`.
    ///
    /// `p <= 0` maps to `0`; `p >= 1` maps to the bracket ceiling (see
    /// [`DEFAULT_QUANTILE_CEILING`]). Fails with [`Error::NoConvergence`] if
    /// the bisection exhausts its iteration budget, which happens when the
    /// CDF is too steep for the bracket resolution or the target quantile
    /// lies above the ceiling.
    pub fn quantile(&self, p: Probability) -> Result<Real> {
        self.quantile_with_ceiling(p, DEFAULT_QUANTILE_CEILING)
    }

    /// Inverse CDF over the caller-chosen search bracket `[0, ceiling]`.
    ///
    /// Bisects until `|CDF(mid) - p| <= 1e-7` or the 70-iteration budget runs
    /// out. The bracket never expands: pick a ceiling above the quantiles the
    /// distribution can realistically produce.
    pub fn quantile_with_ceiling(&self, p: Probability, ceiling: Real) -> Result<Real> {
        self.check()?;
        ensure!(
            ceiling.is_finite() && ceiling > 0.0,
            "quantile search ceiling must be positive and finite, got {ceiling}"
        );
        if p <= 0.0 {
            return Ok(0.0);
        }
        if p >= 1.0 {
            return Ok(ceiling);
        }

        let mut lo: Real = 0.0;
        let mut hi = ceiling;
        for _ in 0..MAX_ITERATIONS {
            let mid = 0.5 * (lo + hi);
            let pr = self.cdf(mid)?;
            if (pr - p).abs() <= EPS_STOP {
                return Ok(mid);
            }
            if pr > p {
                hi = mid;
            } else {
                lo = mid;
            }
        }
        Err(Error::NoConvergence {
            iterations: MAX_ITERATIONS,
            tolerance: EPS_STOP,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_form_construction() {
        let d = GammaDistribution::new(2.0, 3.0, 0.0);
        assert!(d.is_valid());
        assert_eq!(d.rate().unwrap(), 3.0);
        assert!((d.scale().unwrap() - 1.0 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn scale_form_construction() {
        let d = GammaDistribution::with_scale(2.0, 0.25);
        assert!(d.is_valid());
        assert_eq!(d.scale().unwrap(), 0.25);
        assert!((d.rate().unwrap() - 4.0).abs() < 1e-15);
    }

    #[test]
    fn shape_violation_takes_precedence() {
        // Shape check first, even when rate/scale are also inconsistent
        let d = GammaDistribution::new(-1.0, 2.0, 3.0);
        assert_eq!(d.status(), Some(&Error::ShapeOutOfDomain { shape: -1.0 }));
    }

    #[test]
    fn over_and_under_determined_are_distinct() {
        let over = GammaDistribution::new(2.0, 1.0, 1.0);
        assert_eq!(
            over.status(),
            Some(&Error::OverDetermined {
                rate: 1.0,
                scale: 1.0
            })
        );

        let under = GammaDistribution::new(2.0, 0.0, 0.0);
        assert_eq!(
            under.status(),
            Some(&Error::UnderDetermined {
                rate: 0.0,
                scale: 0.0
            })
        );
    }

    #[test]
    fn invalid_instance_keeps_raw_inputs() {
        let d = GammaDistribution::new(-1.0, 2.0, 3.0);
        assert_eq!(d.alpha(), -1.0);
        assert_eq!(d.beta(), 2.0);
        assert_eq!(d.theta(), 3.0);
        assert!(d.pdf(1.0).is_err());
        assert!(d.mean().is_err());
    }

    #[test]
    fn pdf_cdf_zero_below_support() {
        for d in [
            GammaDistribution::with_rate(2.0, 1.0),
            GammaDistribution::with_scale(2.0, 1.0),
        ] {
            assert_eq!(d.pdf(0.0).unwrap(), 0.0);
            assert_eq!(d.pdf(-1.0).unwrap(), 0.0);
            assert_eq!(d.cdf(0.0).unwrap(), 0.0);
            assert_eq!(d.cdf(-1.0).unwrap(), 0.0);
        }
    }

    #[test]
    fn exponential_special_case() {
        // Gamma(1, 1) = Exponential(1): pdf = e^(-x), CDF = 1 - e^(-x)
        let d = GammaDistribution::with_rate(1.0, 1.0);
        let x: Real = 1.5;
        assert!((d.pdf(x).unwrap() - (-x).exp()).abs() < 1e-10);
        assert!((d.cdf(x).unwrap() - (1.0 - (-x).exp())).abs() < 1e-10);
    }

    #[test]
    fn worked_example_shape_2_rate_1() {
        let d = GammaDistribution::with_rate(2.0, 1.0);
        assert_eq!(d.mean().unwrap(), 2.0);
        assert_eq!(d.variance().unwrap(), 2.0);
        assert!((d.std_deviation().unwrap() - 2.0_f64.sqrt()).abs() < 1e-12);
        // pdf(2) = 2 e^(-2)
        assert!((d.pdf(2.0).unwrap() - 2.0 * (-2.0_f64).exp()).abs() < 1e-10);
        // CDF(2) = 1 - 3 e^(-2) ≈ 0.5940
        let expected = 1.0 - 3.0 * (-2.0_f64).exp();
        assert!(
            (d.cdf(2.0).unwrap() - expected).abs() < 1e-10,
            "got {}, expected {}",
            d.cdf(2.0).unwrap(),
            expected
        );
    }

    #[test]
    fn scale_and_rate_forms_agree() {
        let by_rate = GammaDistribution::with_rate(3.0, 2.0);
        let by_scale = GammaDistribution::with_scale(3.0, 0.5);
        for &x in &[0.5, 1.0, 2.0, 5.0] {
            assert!(
                (by_rate.pdf(x).unwrap() - by_scale.pdf(x).unwrap()).abs() < 1e-12,
                "pdf mismatch at x={x}"
            );
            assert!(
                (by_rate.cdf(x).unwrap() - by_scale.cdf(x).unwrap()).abs() < 1e-12,
                "CDF mismatch at x={x}"
            );
        }
        assert_eq!(by_rate.mean().unwrap(), by_scale.mean().unwrap());
        assert_eq!(by_rate.variance().unwrap(), by_scale.variance().unwrap());
    }

    #[test]
    fn skewness_kurtosis_shape_only() {
        let by_rate = GammaDistribution::with_rate(2.0, 3.0);
        let by_scale = GammaDistribution::with_scale(2.0, 0.2);
        assert_eq!(by_rate.skewness().unwrap(), by_scale.skewness().unwrap());
        assert_eq!(by_rate.kurtosis().unwrap(), by_scale.kurtosis().unwrap());
        assert!((by_rate.skewness().unwrap() - 2.0 / 2.0_f64.sqrt()).abs() < 1e-12);
        assert_eq!(by_rate.kurtosis().unwrap(), 3.0);
    }

    #[test]
    fn cdf_monotone_and_saturating() {
        let d = GammaDistribution::with_rate(2.5, 1.5);
        let mut prev = 0.0;
        for i in 1..=100 {
            let x = i as Real * 0.5;
            let c = d.cdf(x).unwrap();
            assert!(c >= prev, "CDF decreased at x={x}");
            prev = c;
        }
        assert!((d.cdf(50.0).unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn quantile_boundaries() {
        let d = GammaDistribution::with_rate(2.0, 1.0);
        assert_eq!(d.quantile(0.0).unwrap(), 0.0);
        assert_eq!(d.quantile(-0.5).unwrap(), 0.0);
        assert_eq!(d.quantile(1.0).unwrap(), 100.0);
        assert_eq!(d.quantile(1.5).unwrap(), 100.0);
        assert_eq!(d.quantile_with_ceiling(1.0, 40.0).unwrap(), 40.0);
    }

    #[test]
    fn quantile_cdf_roundtrip() {
        let d = GammaDistribution::with_rate(3.0, 2.0);
        for p in [0.1, 0.25, 0.5, 0.75, 0.9] {
            let x = d.quantile(p).unwrap();
            let p2 = d.cdf(x).unwrap();
            assert!((p2 - p).abs() < 1e-6, "roundtrip failed for p={p}: got {p2}");
        }
    }

    #[test]
    fn quantile_checks_validity_first() {
        let d = GammaDistribution::new(2.0, 1.0, 1.0);
        assert_eq!(
            d.quantile(0.5),
            Err(Error::OverDetermined {
                rate: 1.0,
                scale: 1.0
            })
        );
    }

    #[test]
    fn quantile_rejects_bad_ceiling() {
        let d = GammaDistribution::with_rate(2.0, 1.0);
        assert!(matches!(
            d.quantile_with_ceiling(0.5, 0.0),
            Err(Error::Precondition(_))
        ));
        assert!(matches!(
            d.quantile_with_ceiling(0.5, Real::INFINITY),
            Err(Error::Precondition(_))
        ));
    }

    #[test]
    fn quantile_no_convergence() {
        // The mass sits within ~1e-15 of zero; 70 bisections of [0, 100]
        // cannot resolve the median to the CDF tolerance.
        let d = GammaDistribution::with_rate(1.0, 1.0e15);
        assert_eq!(
            d.quantile(0.5),
            Err(Error::NoConvergence {
                iterations: 70,
                tolerance: 1.0e-7
            })
        );
    }

    #[test]
    fn quantile_wider_ceiling_reaches_far_tail() {
        // Mean 200 sits above the default bracket; a wider bracket solves it.
        let d = GammaDistribution::with_rate(20.0, 0.1);
        assert!(d.quantile(0.5).is_err());
        let x = d.quantile_with_ceiling(0.5, 1000.0).unwrap();
        assert!((d.cdf(x).unwrap() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn pdf_cdf_finite_just_past_gamma_overflow() {
        // Shapes where the provider's Γ is already infinite must take the
        // log-space and saturation branches instead of dividing by infinity.
        for &shape in &[169.5, 170.0, 171.6] {
            let d = GammaDistribution::with_rate(shape, 1.0);
            let p = d.pdf(shape).unwrap();
            assert!(p.is_finite() && p > 0.0, "pdf({shape}) = {p}");
            let c = d.cdf(shape).unwrap();
            assert!(!c.is_nan(), "cdf({shape}) = {c}");
            assert_eq!(c, 1.0);
        }
    }

    #[test]
    fn large_shape_asymptotics() {
        let d = GammaDistribution::with_rate(200.0, 1.0);
        // CDF saturates above the Γ overflow threshold
        assert_eq!(d.cdf(150.0).unwrap(), 1.0);
        // pdf stays finite through the log-space branch
        let p = d.pdf(200.0).unwrap();
        assert!(p.is_finite() && p > 0.0);
    }
}

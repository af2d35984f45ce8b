//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//!
//! Both functions are generic over `T: Float` so they serve `f32` and `f64`
//! callers alike.

use num_traits::Float;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// sqrt(2 * pi)
const SQRT_2PI: f64 = 2.506_628_274_631;

/// Beyond this distance from the origin the tail mass is below `f64` resolution.
const TAIL_CUTOFF: f64 = 37.0;

/// Switch point between the rational and the continued-fraction branch.
const RATIONAL_LIMIT: f64 = 7.071_067_811_865_47;

/// Lower tail mass Φ(-|x|) using Hart's double-precision approximation.
///
/// Rational approximation for |x| < 7.07, continued fraction beyond that.
/// Accurate to roughly 1e-14 across the real line.
#[inline]
fn lower_tail<T: Float>(abs_x: T) -> T {
    let c = |v: f64| T::from(v).unwrap_or_else(T::zero);

    if abs_x > c(TAIL_CUTOFF) {
        return T::zero();
    }

    let exponential = (-abs_x * abs_x * c(0.5)).exp();

    if abs_x < c(RATIONAL_LIMIT) {
        let mut num = c(3.526_249_659_989_11e-2) * abs_x + c(0.700_383_064_443_688);
        num = num * abs_x + c(6.373_962_203_531_65);
        num = num * abs_x + c(33.912_866_078_383);
        num = num * abs_x + c(112.079_291_497_871);
        num = num * abs_x + c(221.213_596_169_931);
        num = num * abs_x + c(220.206_867_912_376);

        let mut den = c(8.838_834_764_831_84e-2) * abs_x + c(1.755_667_163_182_64);
        den = den * abs_x + c(16.064_177_579_207);
        den = den * abs_x + c(86.780_732_202_946_1);
        den = den * abs_x + c(296.564_248_779_674);
        den = den * abs_x + c(637.333_633_378_831);
        den = den * abs_x + c(793.826_512_519_948);
        den = den * abs_x + c(440.413_735_824_752);

        exponential * num / den
    } else {
        let mut frac = abs_x + c(0.65);
        frac = abs_x + c(4.0) / frac;
        frac = abs_x + c(3.0) / frac;
        frac = abs_x + c(2.0) / frac;
        frac = abs_x + c(1.0) / frac;
        exponential / frac / c(SQRT_2PI)
    }
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1).
///
/// The lower tail is evaluated on |x| and reflected for positive arguments,
/// so `norm_cdf(x) + norm_cdf(-x) == 1` up to a single rounding. Put-call
/// parity of the closed-form prices relies on this.
///
/// # Examples
/// ```
/// use pricer_core::math::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-14);
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// assert!(norm_cdf(3.0_f64) > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    if x.is_nan() {
        return x;
    }
    let tail = lower_tail(x.abs());
    if x > T::zero() {
        T::one() - tail
    } else {
        tail
    }
}

/// Standard normal probability density function.
///
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Examples
/// ```
/// use pricer_core::math::norm_pdf;
///
/// // φ(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((norm_pdf(0.0_f64) - 0.3989422804).abs() < 1e-9);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let frac_1_sqrt_2pi = T::from(FRAC_1_SQRT_2PI).unwrap_or_else(T::zero);
    let half = T::from(0.5).unwrap_or_else(T::zero);

    frac_1_sqrt_2pi * (-half * x * x).exp()
}

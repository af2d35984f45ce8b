//! Black-Scholes pricing model for European options.
//!
//! This module provides the closed-form Black-Scholes price of a European
//! call or put together with all five analytical Greeks.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! | Greek | Call | Put |
//! |-------|------|-----|
//! | Delta | N(d₁) | −N(−d₁) |
//! | Gamma | φ(d₁)/(S·σ·√T) | same |
//! | Vega  | S·√T·φ(d₁) | same |
//! | Theta | −S·σ·φ(d₁)/(2√T) − r·K·e^(−rT)·N(d₂) | −S·σ·φ(d₁)/(2√T) + r·K·e^(−rT)·N(−d₂) |
//! | Rho   | K·T·e^(−rT)·N(d₂) | −K·T·e^(−rT)·N(−d₂) |

use pricer_core::math::{norm_cdf, norm_pdf};
use pricer_core::traits::OptionPricer;
use pricer_core::types::{
    ExerciseStyle, Measure, MeasureSet, OptionType, PricingError, PricingModel,
};
use pricer_core::Contract;

/// Intermediate Black-Scholes terms for one contract.
///
/// Computed once per pricing call and shared by the price and every Greek.
#[derive(Debug, Clone, Copy)]
pub struct BlackScholes {
    option_type: OptionType,
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    sqrt_t: f64,
    discount: f64,
    d1: f64,
    d2: f64,
}

impl BlackScholes {
    /// Derives d₁, d₂ and the discount factor from a validated contract.
    ///
    /// When σ√T underflows to zero the option is priced in its deterministic
    /// limit: d₁ = d₂ = ±∞ according to the sign of ln(S/K) + (r + σ²/2)T.
    pub fn from_contract(contract: &Contract) -> Self {
        let spot = contract.spot();
        let strike = contract.strike();
        let expiry = contract.maturity();
        let rate = contract.rate();
        let volatility = contract.volatility();

        let sqrt_t = expiry.sqrt();
        let vol_sqrt_t = volatility * sqrt_t;
        let numerator = (spot / strike).ln() + (rate + 0.5 * volatility * volatility) * expiry;

        let (d1, d2) = if vol_sqrt_t > 0.0 {
            let d1 = numerator / vol_sqrt_t;
            (d1, d1 - vol_sqrt_t)
        } else {
            let limit = if numerator > 0.0 {
                f64::INFINITY
            } else if numerator < 0.0 {
                f64::NEG_INFINITY
            } else {
                0.0
            };
            (limit, limit)
        };

        Self {
            option_type: contract.option_type(),
            spot,
            strike,
            expiry,
            rate,
            volatility,
            sqrt_t,
            discount: (-rate * expiry).exp(),
            d1,
            d2,
        }
    }

    /// Returns d₁.
    #[inline]
    pub fn d1(&self) -> f64 {
        self.d1
    }

    /// Returns d₂.
    #[inline]
    pub fn d2(&self) -> f64 {
        self.d2
    }

    /// Option value.
    #[inline]
    pub fn price(&self) -> f64 {
        match self.option_type {
            OptionType::Call => {
                self.spot * norm_cdf(self.d1) - self.strike * self.discount * norm_cdf(self.d2)
            }
            OptionType::Put => {
                self.strike * self.discount * norm_cdf(-self.d2) - self.spot * norm_cdf(-self.d1)
            }
        }
    }

    /// Delta (∂V/∂S).
    #[inline]
    pub fn delta(&self) -> f64 {
        match self.option_type {
            OptionType::Call => norm_cdf(self.d1),
            OptionType::Put => -norm_cdf(-self.d1),
        }
    }

    /// Gamma (∂²V/∂S²), identical for calls and puts.
    #[inline]
    pub fn gamma(&self) -> f64 {
        let denom = self.spot * self.volatility * self.sqrt_t;
        if denom > 0.0 && self.d1.is_finite() {
            norm_pdf(self.d1) / denom
        } else {
            0.0
        }
    }

    /// Vega (∂V/∂σ), identical for calls and puts.
    #[inline]
    pub fn vega(&self) -> f64 {
        self.spot * self.sqrt_t * norm_pdf(self.d1)
    }

    /// Theta, the rate of change of value as calendar time passes.
    ///
    /// Usually negative (time decay).
    #[inline]
    pub fn theta(&self) -> f64 {
        let decay = -(self.spot * self.volatility * norm_pdf(self.d1)) / (2.0 * self.sqrt_t);
        let carry = self.rate * self.strike * self.discount;
        match self.option_type {
            OptionType::Call => decay - carry * norm_cdf(self.d2),
            OptionType::Put => decay + carry * norm_cdf(-self.d2),
        }
    }

    /// Rho (∂V/∂r).
    #[inline]
    pub fn rho(&self) -> f64 {
        let scale = self.strike * self.expiry * self.discount;
        match self.option_type {
            OptionType::Call => scale * norm_cdf(self.d2),
            OptionType::Put => -scale * norm_cdf(-self.d2),
        }
    }

    /// Value and all five Greeks.
    pub fn measures(&self) -> MeasureSet {
        [
            (Measure::Value, self.price()),
            (Measure::Delta, self.delta()),
            (Measure::Gamma, self.gamma()),
            (Measure::Theta, self.theta()),
            (Measure::Vega, self.vega()),
            (Measure::Rho, self.rho()),
        ]
        .into_iter()
        .collect()
    }
}

/// Closed-form pricer for European contracts.
///
/// Populates all six measures. American contracts are rejected with
/// `PricingError::UnsupportedStyle`: the closed form has no early-exercise term.
///
/// # Examples
/// ```
/// use pricer_core::{Contract, ExerciseStyle, Measure, OptionPricer, OptionType};
/// use pricer_models::analytical::AnalyticPricer;
///
/// let contract = Contract::new(
///     OptionType::Call, ExerciseStyle::European, 100.0, 100.0, 1.0, 0.05, 0.2, 100,
/// ).unwrap();
///
/// let measures = AnalyticPricer::new().price(&contract).unwrap();
/// assert!((measures.value().unwrap() - 10.4506).abs() < 1e-3);
/// assert!((measures.get(Measure::Delta).unwrap() - 0.6368).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticPricer;

impl AnalyticPricer {
    /// Creates the pricer.
    pub fn new() -> Self {
        Self
    }
}

impl OptionPricer for AnalyticPricer {
    fn model(&self) -> PricingModel {
        PricingModel::Analytic
    }

    fn price(&self, contract: &Contract) -> Result<MeasureSet, PricingError> {
        if contract.style() != ExerciseStyle::European {
            return Err(PricingError::UnsupportedStyle {
                model: PricingModel::Analytic,
                style: contract.style(),
            });
        }

        let measures = BlackScholes::from_contract(contract).measures();
        if let Some((measure, value)) = measures.iter().find(|(_, v)| !v.is_finite()) {
            return Err(PricingError::NumericalInstability(format!(
                "closed-form {} is {}",
                measure, value
            )));
        }
        Ok(measures)
    }
}

//! Vanilla option contract.
//!
//! A [`Contract`] is an immutable, validated description of one option:
//! payoff side, exercise style, the five market/economic inputs and the
//! resolution (`steps`) used by the lattice and simulation pricers.
//!
//! # Invariants
//!
//! - `spot`, `strike`, `maturity`, `volatility` are finite and strictly positive
//! - `rate` is finite (negative rates are allowed)
//! - `1 <= steps <= MAX_STEPS`
//!
//! # Hashing
//!
//! `Hash` and `Eq` work on the bit patterns of the fields (with `-0.0`
//! folded into `0.0`), so two field-identical contracts are equal and hash
//! identically no matter how they were built. [`Contract::stable_hash`]
//! exposes that hash as a plain `u64`.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::types::{ExerciseStyle, OptionType, PricingError};

/// Largest accepted lattice depth or simulation step count.
pub const MAX_STEPS: usize = 10_000;

/// Immutable vanilla option contract.
///
/// # Examples
/// ```
/// use pricer_core::contract::Contract;
/// use pricer_core::types::{ExerciseStyle, OptionType};
///
/// let contract = Contract::builder(OptionType::Call, ExerciseStyle::European)
///     .spot(100.0)
///     .strike(100.0)
///     .maturity(1.0)
///     .rate(0.05)
///     .volatility(0.2)
///     .steps(100)
///     .build()
///     .unwrap();
///
/// assert_eq!(contract.spot(), 100.0);
/// assert_eq!(contract.intrinsic(), 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ContractFields"))]
pub struct Contract {
    option_type: OptionType,
    style: ExerciseStyle,
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    volatility: f64,
    steps: usize,
}

impl Contract {
    /// Creates a validated contract.
    ///
    /// # Errors
    ///
    /// `PricingError::InvalidParameter` naming the first offending field,
    /// checked in the order spot, strike, maturity, rate, volatility, steps.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        option_type: OptionType,
        style: ExerciseStyle,
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        volatility: f64,
        steps: usize,
    ) -> Result<Self, PricingError> {
        require_positive("spot", spot)?;
        require_positive("strike", strike)?;
        require_positive("maturity", maturity)?;
        if !rate.is_finite() {
            return Err(PricingError::invalid(
                "rate",
                format!("must be finite, got {}", rate),
            ));
        }
        require_positive("volatility", volatility)?;
        if steps < 1 {
            return Err(PricingError::invalid("steps", "must be at least 1, got 0"));
        }
        if steps > MAX_STEPS {
            return Err(PricingError::invalid(
                "steps",
                format!("must not exceed {}, got {}", MAX_STEPS, steps),
            ));
        }

        Ok(Self {
            option_type,
            style,
            spot,
            strike,
            maturity,
            rate,
            volatility,
            steps,
        })
    }

    /// Starts a builder for the given payoff side and exercise style.
    pub fn builder(option_type: OptionType, style: ExerciseStyle) -> ContractBuilder {
        ContractBuilder::new(option_type, style)
    }

    /// Returns the payoff side.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Returns the exercise style.
    #[inline]
    pub fn style(&self) -> ExerciseStyle {
        self.style
    }

    /// Returns the spot price (S₀).
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price (K).
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the time to maturity in years (T).
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Returns the continuously compounded risk-free rate (r).
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility (σ).
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the lattice depth / number of simulation time steps (N).
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Exercise payoff at the given underlying level.
    #[inline]
    pub fn payoff(&self, spot: f64) -> f64 {
        self.option_type.payoff(spot, self.strike)
    }

    /// Exercise payoff at the current spot.
    #[inline]
    pub fn intrinsic(&self) -> f64 {
        self.payoff(self.spot)
    }

    /// Discount factor to maturity, e^(−rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }

    /// Returns a copy with a different spot, re-validated.
    pub fn with_spot(&self, spot: f64) -> Result<Self, PricingError> {
        Self { spot, ..*self }.validated()
    }

    /// Returns a copy with a different maturity, re-validated.
    pub fn with_maturity(&self, maturity: f64) -> Result<Self, PricingError> {
        Self { maturity, ..*self }.validated()
    }

    /// Returns a copy with a different volatility, re-validated.
    pub fn with_volatility(&self, volatility: f64) -> Result<Self, PricingError> {
        Self {
            volatility,
            ..*self
        }
        .validated()
    }

    /// Returns a copy with a different rate, re-validated.
    pub fn with_rate(&self, rate: f64) -> Result<Self, PricingError> {
        Self { rate, ..*self }.validated()
    }

    /// Returns a copy with a different exercise style.
    pub fn with_style(&self, style: ExerciseStyle) -> Self {
        Self { style, ..*self }
    }

    /// Hash over all fields, identical for field-identical contracts.
    pub fn stable_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }

    fn validated(self) -> Result<Self, PricingError> {
        Self::new(
            self.option_type,
            self.style,
            self.spot,
            self.strike,
            self.maturity,
            self.rate,
            self.volatility,
            self.steps,
        )
    }

    fn key(&self) -> (OptionType, ExerciseStyle, [u64; 5], usize) {
        (
            self.option_type,
            self.style,
            [
                canonical_bits(self.spot),
                canonical_bits(self.strike),
                canonical_bits(self.maturity),
                canonical_bits(self.rate),
                canonical_bits(self.volatility),
            ],
            self.steps,
        )
    }
}

impl PartialEq for Contract {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Contract {}

impl Hash for Contract {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

#[inline]
fn canonical_bits(x: f64) -> u64 {
    // 0.0 == -0.0 must hash the same
    if x == 0.0 {
        0.0_f64.to_bits()
    } else {
        x.to_bits()
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), PricingError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PricingError::invalid(
            field,
            format!("must be finite and positive, got {}", value),
        ))
    }
}

/// Builder for [`Contract`].
///
/// Every numeric field must be set; `build` reports the first missing or
/// invalid field.
#[derive(Debug, Clone)]
pub struct ContractBuilder {
    option_type: OptionType,
    style: ExerciseStyle,
    spot: Option<f64>,
    strike: Option<f64>,
    maturity: Option<f64>,
    rate: Option<f64>,
    volatility: Option<f64>,
    steps: Option<usize>,
}

impl ContractBuilder {
    fn new(option_type: OptionType, style: ExerciseStyle) -> Self {
        Self {
            option_type,
            style,
            spot: None,
            strike: None,
            maturity: None,
            rate: None,
            volatility: None,
            steps: None,
        }
    }

    /// Sets the spot price.
    pub fn spot(mut self, spot: f64) -> Self {
        self.spot = Some(spot);
        self
    }

    /// Sets the strike price.
    pub fn strike(mut self, strike: f64) -> Self {
        self.strike = Some(strike);
        self
    }

    /// Sets the time to maturity in years.
    pub fn maturity(mut self, maturity: f64) -> Self {
        self.maturity = Some(maturity);
        self
    }

    /// Sets the risk-free rate.
    pub fn rate(mut self, rate: f64) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Sets the volatility.
    pub fn volatility(mut self, volatility: f64) -> Self {
        self.volatility = Some(volatility);
        self
    }

    /// Sets the lattice depth / simulation step count.
    pub fn steps(mut self, steps: usize) -> Self {
        self.steps = Some(steps);
        self
    }

    /// Validates and builds the contract.
    ///
    /// # Errors
    ///
    /// `PricingError::InvalidParameter` for the first missing or invalid field.
    pub fn build(self) -> Result<Contract, PricingError> {
        Contract::new(
            self.option_type,
            self.style,
            required("spot", self.spot)?,
            required("strike", self.strike)?,
            required("maturity", self.maturity)?,
            required("rate", self.rate)?,
            required("volatility", self.volatility)?,
            required("steps", self.steps)?,
        )
    }
}

fn required<T>(field: &'static str, value: Option<T>) -> Result<T, PricingError> {
    value.ok_or_else(|| PricingError::invalid(field, "not set"))
}

/// Unvalidated field set used to deserialise a [`Contract`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ContractFields {
    option_type: OptionType,
    style: ExerciseStyle,
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    volatility: f64,
    steps: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<ContractFields> for Contract {
    type Error = PricingError;

    fn try_from(f: ContractFields) -> Result<Self, Self::Error> {
        Contract::new(
            f.option_type,
            f.style,
            f.spot,
            f.strike,
            f.maturity,
            f.rate,
            f.volatility,
            f.steps,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atm_call() -> Contract {
        Contract::new(
            OptionType::Call,
            ExerciseStyle::European,
            100.0,
            100.0,
            1.0,
            0.05,
            0.2,
            100,
        )
        .unwrap()
    }

    fn field_of(err: PricingError) -> &'static str {
        match err {
            PricingError::InvalidParameter { field, .. } => field,
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_new_valid_contract() {
        let c = atm_call();
        assert_eq!(c.option_type(), OptionType::Call);
        assert_eq!(c.style(), ExerciseStyle::European);
        assert_eq!(c.strike(), 100.0);
        assert_eq!(c.maturity(), 1.0);
        assert_eq!(c.rate(), 0.05);
        assert_eq!(c.volatility(), 0.2);
        assert_eq!(c.steps(), 100);
    }

    #[test]
    fn test_negative_rate_is_allowed() {
        assert!(atm_call().with_rate(-0.01).is_ok());
    }

    #[test]
    fn test_each_invalid_field_is_named() {
        let base = atm_call();
        assert_eq!(field_of(base.with_spot(0.0).unwrap_err()), "spot");
        assert_eq!(field_of(base.with_spot(-5.0).unwrap_err()), "spot");
        assert_eq!(field_of(base.with_maturity(0.0).unwrap_err()), "maturity");
        assert_eq!(field_of(base.with_volatility(0.0).unwrap_err()), "volatility");
        assert_eq!(field_of(base.with_rate(f64::NAN).unwrap_err()), "rate");
        assert_eq!(field_of(base.with_spot(f64::INFINITY).unwrap_err()), "spot");

        let err = Contract::new(
            OptionType::Put,
            ExerciseStyle::American,
            100.0,
            -1.0,
            1.0,
            0.0,
            0.2,
            10,
        )
        .unwrap_err();
        assert_eq!(field_of(err), "strike");

        let err = Contract::new(
            OptionType::Put,
            ExerciseStyle::American,
            100.0,
            100.0,
            1.0,
            0.0,
            0.2,
            0,
        )
        .unwrap_err();
        assert_eq!(field_of(err), "steps");
    }

    #[test]
    fn test_steps_upper_bound() {
        let at_limit = Contract::new(
            OptionType::Put,
            ExerciseStyle::American,
            100.0,
            100.0,
            1.0,
            0.05,
            0.2,
            MAX_STEPS,
        );
        assert!(at_limit.is_ok());

        for steps in [MAX_STEPS + 1, 1 << 33, usize::MAX] {
            let err = Contract::new(
                OptionType::Put,
                ExerciseStyle::American,
                100.0,
                100.0,
                1.0,
                0.05,
                0.2,
                steps,
            )
            .unwrap_err();
            assert_eq!(field_of(err), "steps");
        }

        let err = Contract::builder(OptionType::Call, ExerciseStyle::European)
            .spot(100.0)
            .strike(100.0)
            .maturity(1.0)
            .rate(0.05)
            .volatility(0.2)
            .steps(MAX_STEPS + 1)
            .build()
            .unwrap_err();
        assert_eq!(field_of(err), "steps");
    }

    #[test]
    fn test_builder_reports_missing_field() {
        let err = Contract::builder(OptionType::Call, ExerciseStyle::European)
            .spot(100.0)
            .strike(100.0)
            .maturity(1.0)
            .rate(0.05)
            .steps(10)
            .build()
            .unwrap_err();
        assert_eq!(field_of(err), "volatility");
    }

    #[test]
    fn test_builder_matches_constructor() {
        let built = Contract::builder(OptionType::Call, ExerciseStyle::European)
            .steps(100)
            .volatility(0.2)
            .rate(0.05)
            .maturity(1.0)
            .strike(100.0)
            .spot(100.0)
            .build()
            .unwrap();

        assert_eq!(built, atm_call());
        assert_eq!(built.stable_hash(), atm_call().stable_hash());
    }

    #[test]
    fn test_hash_distinguishes_fields() {
        let base = atm_call();
        let others = [
            base.with_spot(101.0).unwrap(),
            base.with_rate(0.04).unwrap(),
            base.with_style(ExerciseStyle::American),
        ];
        for other in others {
            assert_ne!(base, other);
            assert_ne!(base.stable_hash(), other.stable_hash());
        }
    }

    #[test]
    fn test_signed_zero_rate_hashes_equal() {
        let a = atm_call().with_rate(0.0).unwrap();
        let b = atm_call().with_rate(-0.0).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.stable_hash(), b.stable_hash());
    }

    #[test]
    fn test_intrinsic_and_discount() {
        let itm_put = Contract::new(
            OptionType::Put,
            ExerciseStyle::American,
            80.0,
            100.0,
            2.0,
            0.05,
            0.3,
            50,
        )
        .unwrap();
        assert_eq!(itm_put.intrinsic(), 20.0);
        assert!((itm_put.discount_factor() - (-0.1_f64).exp()).abs() < 1e-15);
    }
}

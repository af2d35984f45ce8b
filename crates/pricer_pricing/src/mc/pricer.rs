//! Monte Carlo pricer with finite-difference Greeks.
//!
//! Every style is priced with the European payoff on the terminal spot. No
//! exercise boundary is simulated, so American contracts receive their
//! European value (a known approximation).
//!
//! Greeks are estimated by bump-and-revalue. Each bump is a full simulation
//! run that draws fresh normals from the same call-local generator, so the
//! Greeks carry Monte Carlo noise on top of the finite-difference truncation
//! error. With `h = f × quantity` and `f` the configured bump fraction:
//!
//! | Greek | Estimator | Bumped quantity |
//! |-------|-----------|-----------------|
//! | Delta | (P(S+h) − P(S−h)) / 2h | S₀ |
//! | Gamma | (P(S+h) − 2P + P(S−h)) / h² | S₀ |
//! | Theta | (P − P(T−h)) / h | T |
//! | Vega  | (P(σ+h) − P) / h | σ |
//! | Rho   | (P(r+h) − P) / h | r |
//!
//! Theta is the rate of value gained per unit of maturity and is not negated.

use pricer_core::traits::OptionPricer;
use pricer_core::types::{Measure, MeasureSet, PricingError, PricingModel};
use pricer_core::Contract;
use tracing::{debug, trace};

use super::paths::{compute_payoffs, generate_gbm_paths, GbmParams};
use super::workspace::PathWorkspace;
use crate::config::EngineConfig;
use crate::rng::PricerRng;

/// Discounted Monte Carlo estimate of a single value.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::SimulationEstimate;
///
/// let estimate = SimulationEstimate { price: 10.5, std_error: 0.05 };
/// assert!((estimate.confidence_95() - 0.098).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimulationEstimate {
    /// Discounted mean payoff.
    pub price: f64,
    /// Standard error of the price estimate.
    pub std_error: f64,
}

impl SimulationEstimate {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }
}

/// Monte Carlo pricer for European and American contracts.
///
/// Stateless apart from its configuration: each call builds its own
/// generator and workspace.
///
/// # Examples
///
/// ```rust
/// use pricer_core::{Contract, ExerciseStyle, Measure, OptionPricer, OptionType};
/// use pricer_pricing::{EngineConfig, SimulationPricer};
///
/// let config = EngineConfig::builder().path_count(20_000).seed(42).build().unwrap();
/// let pricer = SimulationPricer::new(config);
///
/// let contract = Contract::new(
///     OptionType::Call, ExerciseStyle::European, 100.0, 100.0, 1.0, 0.05, 0.2, 1,
/// ).unwrap();
///
/// let measures = pricer.price(&contract).unwrap();
/// assert_eq!(measures.len(), 6);
/// assert!((measures.value().unwrap() - 10.45).abs() < 0.5);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SimulationPricer {
    config: EngineConfig,
}

impl SimulationPricer {
    /// Creates a pricer with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Prices the contract once and reports the standard error.
    ///
    /// Uses a fresh generator built from the configured seed, or from OS
    /// entropy when none is set.
    pub fn simulate(&self, contract: &Contract) -> Result<SimulationEstimate, PricingError> {
        let mut rng = PricerRng::from_optional_seed(self.config.seed());
        let mut workspace = PathWorkspace::new(self.config.path_count(), contract.steps());
        let estimate = run(&mut rng, &mut workspace, contract);
        check_finite("value", estimate.price)?;
        Ok(estimate)
    }

    /// Prices the contract and all five Greeks.
    ///
    /// # Errors
    /// - `NumericalInstability` when `rate` is zero (the rho bump vanishes)
    ///   or any estimate is not finite
    /// - `InvalidParameter` if a bumped contract fails validation
    fn price_with_greeks(&self, contract: &Contract) -> Result<MeasureSet, PricingError> {
        let f = self.config.bump_fraction();
        let h_rate = f * contract.rate();
        if h_rate == 0.0 {
            return Err(PricingError::NumericalInstability(
                "rho bump is zero because the rate is zero".to_string(),
            ));
        }

        let mut rng = PricerRng::from_optional_seed(self.config.seed());
        let mut workspace = PathWorkspace::new(self.config.path_count(), contract.steps());
        debug!(
            paths = workspace.n_paths(),
            steps = workspace.n_steps(),
            seed = rng.seed(),
            style = %contract.style(),
            "running simulation"
        );

        let mut reprice = |label: &'static str, bumped: &Contract| {
            let price = run(&mut rng, &mut workspace, bumped).price;
            trace!(bump = label, price, "bumped run");
            price
        };

        let base = reprice("base", contract);

        let h_spot = f * contract.spot();
        let up = reprice("spot_up", &contract.with_spot(contract.spot() + h_spot)?);
        let down = reprice("spot_down", &contract.with_spot(contract.spot() - h_spot)?);

        let h_time = f * contract.maturity();
        let shorter = reprice(
            "maturity_down",
            &contract.with_maturity(contract.maturity() - h_time)?,
        );

        let h_vol = f * contract.volatility();
        let vol_up = reprice(
            "volatility_up",
            &contract.with_volatility(contract.volatility() + h_vol)?,
        );

        let rate_up = reprice("rate_up", &contract.with_rate(contract.rate() + h_rate)?);

        let measures: MeasureSet = [
            (Measure::Value, base),
            (Measure::Delta, (up - down) / (2.0 * h_spot)),
            (Measure::Gamma, (up - 2.0 * base + down) / (h_spot * h_spot)),
            (Measure::Theta, (base - shorter) / h_time),
            (Measure::Vega, (vol_up - base) / h_vol),
            (Measure::Rho, (rate_up - base) / h_rate),
        ]
        .into_iter()
        .collect();

        for (measure, value) in measures.iter() {
            check_finite(measure.name(), value)?;
        }
        Ok(measures)
    }
}

impl OptionPricer for SimulationPricer {
    fn model(&self) -> PricingModel {
        PricingModel::Simulation
    }

    fn price(&self, contract: &Contract) -> Result<MeasureSet, PricingError> {
        self.price_with_greeks(contract)
    }
}

/// One full simulation: draw normals, evolve paths, average payoffs.
///
/// Payoffs are summed sequentially in path order.
fn run(
    rng: &mut PricerRng,
    workspace: &mut PathWorkspace,
    contract: &Contract,
) -> SimulationEstimate {
    rng.fill_normal(workspace.randoms_mut());
    generate_gbm_paths(workspace, GbmParams::from(contract));
    compute_payoffs(workspace, |spot| contract.payoff(spot));

    let payoffs = workspace.payoffs();
    let n_paths = payoffs.len();
    let mean = payoffs.iter().sum::<f64>() / n_paths as f64;

    let std_error = if n_paths > 1 {
        let variance =
            payoffs.iter().map(|&p| (p - mean).powi(2)).sum::<f64>() / (n_paths - 1) as f64;
        (variance / n_paths as f64).sqrt()
    } else {
        0.0
    };

    let discount_factor = contract.discount_factor();
    SimulationEstimate {
        price: mean * discount_factor,
        std_error: std_error * discount_factor,
    }
}

fn check_finite(what: &str, value: f64) -> Result<(), PricingError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PricingError::NumericalInstability(format!(
            "simulated {} is {}",
            what, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::types::{ExerciseStyle, OptionType};

    fn seeded(paths: usize, seed: u64) -> SimulationPricer {
        SimulationPricer::new(
            EngineConfig::builder()
                .path_count(paths)
                .seed(seed)
                .build()
                .unwrap(),
        )
    }

    fn contract(option_type: OptionType, style: ExerciseStyle, rate: f64) -> Contract {
        Contract::new(option_type, style, 100.0, 100.0, 1.0, rate, 0.2, 4).unwrap()
    }

    #[test]
    fn test_fixed_seed_is_deterministic() {
        let pricer = seeded(2_000, 11);
        let c = contract(OptionType::Put, ExerciseStyle::European, 0.03);
        assert_eq!(pricer.price(&c).unwrap(), pricer.price(&c).unwrap());
        assert_eq!(pricer.simulate(&c).unwrap(), pricer.simulate(&c).unwrap());
    }

    #[test]
    fn test_all_measures_populated() {
        let m = seeded(1_000, 5)
            .price(&contract(OptionType::Call, ExerciseStyle::European, 0.05))
            .unwrap();
        for measure in Measure::ALL {
            assert!(m.contains(measure), "missing {}", measure);
        }
    }

    #[test]
    fn test_zero_rate_rho_is_reported() {
        let result =
            seeded(100, 1).price(&contract(OptionType::Call, ExerciseStyle::European, 0.0));
        assert!(matches!(result, Err(PricingError::NumericalInstability(_))));
    }

    #[test]
    fn test_zero_rate_value_still_simulates() {
        let estimate = seeded(1_000, 1)
            .simulate(&contract(OptionType::Call, ExerciseStyle::European, 0.0))
            .unwrap();
        assert!(estimate.price > 0.0);
    }

    #[test]
    fn test_american_priced_as_european() {
        let pricer = seeded(2_000, 3);
        let european = contract(OptionType::Put, ExerciseStyle::European, 0.05);
        let american = european.with_style(ExerciseStyle::American);
        assert_eq!(
            pricer.price(&european).unwrap(),
            pricer.price(&american).unwrap()
        );
    }

    #[test]
    fn test_single_path_has_zero_std_error() {
        let estimate = seeded(1, 8)
            .simulate(&contract(OptionType::Call, ExerciseStyle::European, 0.05))
            .unwrap();
        assert_eq!(estimate.std_error, 0.0);
    }

    #[test]
    fn test_negative_rate_rho_uses_signed_bump() {
        let m = seeded(5_000, 21)
            .price(&contract(OptionType::Call, ExerciseStyle::European, -0.02))
            .unwrap();
        assert!(m.get(Measure::Rho).unwrap().is_finite());
    }
}

//! Trigeorgis binomial lattice.
//!
//! The tree works in log-price space with equal up and down moves:
//!
//! ```text
//! dt  = T / N
//! ν   = r - σ²/2
//! dxu = √(σ²·dt + ν²·dt²),   dxd = -dxu
//! pu  = 1/2 + (ν·dt) / (2·dxu),   pd = 1 - pu
//! ```
//!
//! Option values are rolled back from the terminal payoffs with
//! `df·(pu·V[i][j+1] + pd·V[i+1][j+1])`, taking the maximum with the
//! intrinsic value at every node for American exercise.

use pricer_core::traits::OptionPricer;
use pricer_core::types::{MeasureSet, PricingError, PricingModel};
use pricer_core::Contract;
use tracing::trace;

use super::grid::LatticeGrid;

/// Per-step move size, probabilities and discount factor of the tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeParameters {
    /// Time step T/N.
    pub dt: f64,
    /// One-step discount factor e^(-r·dt).
    pub discount: f64,
    /// Log up-move size; the down move is its negation.
    pub dxu: f64,
    /// Risk-neutral up probability.
    pub pu: f64,
    /// Risk-neutral down probability.
    pub pd: f64,
}

impl TreeParameters {
    /// Derives the tree parameters for a contract.
    ///
    /// When `σ²·dt` underflows to zero the tree collapses onto the spot:
    /// `dxu = 0`, `pu = pd = 1/2`, and every node carries the intrinsic value.
    ///
    /// # Errors
    /// `PricingError::NumericalInstability` when `dxu` is not strictly
    /// positive and finite, or `pu` falls outside [0, 1]. The probability is
    /// never clamped.
    pub fn from_contract(contract: &Contract) -> Result<Self, PricingError> {
        let sigma = contract.volatility();
        let rate = contract.rate();
        let dt = contract.maturity() / contract.steps() as f64;

        if sigma * sigma * dt == 0.0 {
            return Ok(Self {
                dt,
                discount: 1.0,
                dxu: 0.0,
                pu: 0.5,
                pd: 0.5,
            });
        }

        let nu = rate - 0.5 * sigma * sigma;
        let dxu = (sigma * sigma * dt + nu * nu * dt * dt).sqrt();
        if !(dxu.is_finite() && dxu > 0.0) {
            return Err(PricingError::NumericalInstability(format!(
                "lattice move size dxu = {} is not positive and finite",
                dxu
            )));
        }

        let pu = 0.5 + 0.5 * nu * dt / dxu;
        if !(0.0..=1.0).contains(&pu) {
            return Err(PricingError::NumericalInstability(format!(
                "lattice up probability {} is outside [0, 1]",
                pu
            )));
        }

        let discount = (-rate * dt).exp();
        if !discount.is_finite() {
            return Err(PricingError::NumericalInstability(format!(
                "lattice discount factor {} is not finite",
                discount
            )));
        }

        Ok(Self {
            dt,
            discount,
            dxu,
            pu,
            pd: 1.0 - pu,
        })
    }
}

/// Binomial tree pricer for European and American contracts.
///
/// Returns `Value` only. The number of time steps is taken from the
/// contract. European contracts are rolled back without the early-exercise
/// comparison.
///
/// # Examples
/// ```
/// use pricer_core::{Contract, ExerciseStyle, OptionPricer, OptionType};
/// use pricer_models::lattice::LatticePricer;
///
/// let contract = Contract::new(
///     OptionType::Call, ExerciseStyle::European, 100.0, 100.0, 1.0, 0.05, 0.2, 500,
/// ).unwrap();
///
/// let value = LatticePricer::new().price(&contract).unwrap().value().unwrap();
/// assert!((value - 10.4506).abs() < 0.05);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LatticePricer;

impl LatticePricer {
    /// Creates the pricer.
    pub fn new() -> Self {
        Self
    }

    /// Builds and rolls back the full tree, returning the populated grids.
    pub fn build_grid(&self, contract: &Contract) -> Result<LatticeGrid, PricingError> {
        let params = TreeParameters::from_contract(contract)?;
        trace!(
            steps = contract.steps(),
            dt = params.dt,
            dxu = params.dxu,
            pu = params.pu,
            "building lattice"
        );

        let n = contract.steps();
        let mut grid = LatticeGrid::new(n);
        grid.fill_stock(contract.spot(), params.dxu);

        for i in 0..=n {
            grid.set_value(i, n, contract.payoff(grid.stock(i, n)));
        }

        let early_exercise = contract.style().allows_early_exercise();
        let disc_pu = params.discount * params.pu;
        let disc_pd = params.discount * params.pd;

        for j in (0..n).rev() {
            for i in 0..=j {
                let continuation =
                    disc_pu * grid.value(i, j + 1) + disc_pd * grid.value(i + 1, j + 1);
                let value = if early_exercise {
                    continuation.max(contract.payoff(grid.stock(i, j)))
                } else {
                    continuation
                };
                grid.set_value(i, j, value);
            }
        }

        Ok(grid)
    }
}

impl OptionPricer for LatticePricer {
    fn model(&self) -> PricingModel {
        PricingModel::Lattice
    }

    fn price(&self, contract: &Contract) -> Result<MeasureSet, PricingError> {
        let value = self.build_grid(contract)?.value(0, 0);
        if !value.is_finite() {
            return Err(PricingError::NumericalInstability(format!(
                "lattice value is {}",
                value
            )));
        }
        Ok(MeasureSet::with_value(value))
    }
}

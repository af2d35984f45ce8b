//! Geometric Brownian Motion path generation.
//!
//! Paths are evolved with the exact log-space step
//!
//! ```text
//! S(t+dt) = S(t) × exp((r - 0.5σ²)dt + σ√dt × Z)
//! ```
//!
//! Each path only reads its own row of normals and writes its own row of
//! spots, so rows are processed in parallel with rayon. The normals must be
//! drawn beforehand in a fixed order, which keeps the result independent of
//! thread scheduling.

use pricer_core::Contract;
use rayon::prelude::*;

use super::workspace::PathWorkspace;

/// GBM parameters under the risk-neutral measure.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::GbmParams;
///
/// let params = GbmParams::new(100.0, 0.05, 0.2, 1.0);
/// assert_eq!(params.maturity, 1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmParams {
    /// Initial spot price (S₀).
    pub spot: f64,
    /// Risk-free rate (r), annualised.
    pub rate: f64,
    /// Volatility (σ), annualised.
    pub volatility: f64,
    /// Time to maturity (T) in years.
    pub maturity: f64,
}

impl GbmParams {
    /// Creates new GBM parameters.
    #[inline]
    pub fn new(spot: f64, rate: f64, volatility: f64, maturity: f64) -> Self {
        Self {
            spot,
            rate,
            volatility,
            maturity,
        }
    }
}

impl From<&Contract> for GbmParams {
    fn from(contract: &Contract) -> Self {
        Self::new(
            contract.spot(),
            contract.rate(),
            contract.volatility(),
            contract.maturity(),
        )
    }
}

/// Evolves every path in the workspace from its pre-filled normals.
///
/// The caller must fill [`PathWorkspace::randoms_mut`] first.
pub fn generate_gbm_paths(workspace: &mut PathWorkspace, params: GbmParams) {
    let n_steps = workspace.n_steps();
    let dt = params.maturity / n_steps as f64;

    let drift_dt = (params.rate - 0.5 * params.volatility * params.volatility) * dt;
    let vol_sqrt_dt = params.volatility * dt.sqrt();

    let (paths, randoms) = workspace.paths_mut_and_randoms();

    paths
        .par_chunks_mut(n_steps + 1)
        .zip(randoms.par_chunks(n_steps))
        .for_each(|(path, normals)| {
            path[0] = params.spot;
            for (step, z) in normals.iter().enumerate() {
                path[step + 1] = path[step] * (drift_dt + vol_sqrt_dt * z).exp();
            }
        });
}

/// Writes the payoff of each path's terminal spot into the payoff buffer.
pub fn compute_payoffs<F>(workspace: &mut PathWorkspace, payoff: F)
where
    F: Fn(f64) -> f64 + Sync,
{
    let row = workspace.n_steps() + 1;
    let (paths, payoffs) = workspace.paths_and_payoffs_mut();

    payoffs
        .par_iter_mut()
        .zip(paths.par_chunks(row))
        .for_each(|(out, path)| *out = payoff(path[row - 1]));
}

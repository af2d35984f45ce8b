//! Model dispatcher with an in-memory result cache.
//!
//! [`PricingEngine`] binds each [`PricingModel`] to one registered
//! [`OptionPricer`] and checks every request against the legal model table
//! before touching the cache:
//!
//! | Style    | Legal models           | Default  |
//! |----------|------------------------|----------|
//! | European | Analytic, Simulation   | Analytic |
//! | American | Lattice, Simulation    | Lattice  |
//!
//! # Request flow
//!
//! ```text
//! price(contract, model)
//! ├── model legal for contract.style()?   no → UnsupportedModel
//! ├── cache hit?                          yes → stored MeasureSet
//! └── pricer.price(contract)
//!     ├── Ok  → store, return
//!     └── Err → return, nothing stored
//! ```

mod cache;

pub use cache::{CacheKey, CacheStats, ResultCache};

use pricer_core::traits::OptionPricer;
use pricer_core::types::{MeasureSet, PricingError, PricingModel};
use pricer_core::Contract;
use pricer_models::{AnalyticPricer, LatticePricer};
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::mc::SimulationPricer;

/// Dispatcher from `(contract, model)` to a pricer, with result caching.
///
/// # Examples
///
/// ```rust
/// use pricer_core::{Contract, ExerciseStyle, OptionType, PricingError, PricingModel};
/// use pricer_pricing::PricingEngine;
///
/// let mut engine = PricingEngine::new();
/// let contract = Contract::new(
///     OptionType::Put, ExerciseStyle::American, 100.0, 100.0, 1.0, 0.05, 0.2, 100,
/// ).unwrap();
///
/// let value = engine.price(&contract, PricingModel::Lattice).unwrap().value().unwrap();
/// assert!(value > 5.5);
///
/// assert!(matches!(
///     engine.price(&contract, PricingModel::Analytic),
///     Err(PricingError::UnsupportedModel { .. })
/// ));
/// ```
pub struct PricingEngine {
    config: EngineConfig,
    analytic: Box<dyn OptionPricer>,
    lattice: Box<dyn OptionPricer>,
    simulation: Box<dyn OptionPricer>,
    cache: ResultCache,
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PricingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PricingEngine")
            .field("config", &self.config)
            .field("cache_len", &self.cache.len())
            .field("stats", &self.cache.stats())
            .finish()
    }
}

impl PricingEngine {
    /// Creates an engine with the default configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates an engine whose simulation pricer uses `config`.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            analytic: Box::new(AnalyticPricer::new()),
            lattice: Box::new(LatticePricer::new()),
            simulation: Box::new(SimulationPricer::new(config)),
            cache: ResultCache::new(),
        }
    }

    /// Returns the configuration the engine was built with.
    ///
    /// A simulation pricer installed later through [`register`](Self::register)
    /// keeps its own configuration, which is not reflected here.
    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Replaces the pricer for `pricer.model()`.
    ///
    /// Cached results of the replaced pricer are dropped.
    pub fn register<P>(&mut self, pricer: P)
    where
        P: OptionPricer + 'static,
    {
        let model = pricer.model();
        let slot = match model {
            PricingModel::Analytic => &mut self.analytic,
            PricingModel::Lattice => &mut self.lattice,
            PricingModel::Simulation => &mut self.simulation,
        };
        *slot = Box::new(pricer);
        self.cache.invalidate_model(model);
        debug!(%model, "registered pricer");
    }

    fn pricer(&self, model: PricingModel) -> &dyn OptionPricer {
        match model {
            PricingModel::Analytic => self.analytic.as_ref(),
            PricingModel::Lattice => self.lattice.as_ref(),
            PricingModel::Simulation => self.simulation.as_ref(),
        }
    }

    /// Prices `contract` with `model`.
    ///
    /// # Errors
    /// - `UnsupportedModel` if `model` is not legal for the contract's style
    /// - any error of the selected pricer; nothing is cached in that case
    /// - `NumericalInstability` from `Simulation` when the rate is zero, since
    ///   the rho bump vanishes. The value and the other Greeks are not
    ///   returned either; use [`SimulationPricer::simulate`] for a value-only
    ///   estimate of such a contract.
    pub fn price(
        &mut self,
        contract: &Contract,
        model: PricingModel,
    ) -> Result<MeasureSet, PricingError> {
        if !model.supports(contract.style()) {
            warn!(%model, style = %contract.style(), "illegal model requested");
            return Err(PricingError::UnsupportedModel {
                model,
                style: contract.style(),
            });
        }

        let key = CacheKey::new(*contract, model);
        if let Some(measures) = self.cache.get(&key) {
            debug!(%model, contract = contract.stable_hash(), "cache hit");
            return Ok(measures.clone());
        }
        debug!(%model, contract = contract.stable_hash(), "cache miss");

        let measures = self.pricer(model).price(contract)?;
        self.cache.insert(key, measures.clone());
        Ok(measures)
    }

    /// Prices `contract` with its style's default model.
    pub fn price_default(&mut self, contract: &Contract) -> Result<MeasureSet, PricingError> {
        self.price(contract, contract.style().default_model())
    }

    /// Number of cached results.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Drops all cached results.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Cache hit and miss counters.
    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

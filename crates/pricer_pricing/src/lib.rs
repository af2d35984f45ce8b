//! # Pricer Pricing (Layer 3: Simulation and Dispatch)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing sits on top of the deterministic pricers in `pricer_models`:
//! - Monte Carlo pricing of GBM paths with finite-difference Greeks
//! - Seeded random number generation
//! - [`PricingEngine`]: legal-model dispatch plus an in-memory result cache
//! - [`EngineConfig`]: path count, bump fraction and seed
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::{Contract, ExerciseStyle, Measure, OptionType, PricingModel};
//! use pricer_pricing::{EngineConfig, PricingEngine};
//!
//! let config = EngineConfig::builder().path_count(10_000).seed(7).build().unwrap();
//! let mut engine = PricingEngine::with_config(config);
//!
//! let call = Contract::new(
//!     OptionType::Call, ExerciseStyle::European, 100.0, 100.0, 1.0, 0.05, 0.2, 1,
//! ).unwrap();
//!
//! let analytic = engine.price(&call, PricingModel::Analytic).unwrap();
//! let simulated = engine.price(&call, PricingModel::Simulation).unwrap();
//!
//! let diff = analytic.value().unwrap() - simulated.value().unwrap();
//! assert!(diff.abs() < 1.0);
//! assert!(simulated.contains(Measure::Rho));
//! ```
//!
//! ## Logging
//!
//! Events are emitted through `tracing` (engine cache hits and misses at
//! `debug`, illegal requests at `warn`, simulation runs at `debug`, bumps at
//! `trace`). No subscriber is installed by this crate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod engine;
pub mod mc;
pub mod rng;

pub use config::{ConfigError, EngineConfig, EngineConfigBuilder};
pub use engine::{CacheStats, PricingEngine};
pub use mc::{SimulationEstimate, SimulationPricer};

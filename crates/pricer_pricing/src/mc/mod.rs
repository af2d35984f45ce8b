//! Monte Carlo pricing of vanilla options.
//!
//! # Architecture
//!
//! ```text
//! SimulationPricer
//! ├── EngineConfig   (path count, bump fraction, seed)
//! ├── PathWorkspace  (per-call buffers)
//! ├── PricerRng      (per-call generator)
//! └── Orchestration
//!     ├── generate_gbm_paths()
//!     ├── compute_payoffs()
//!     └── finite-difference Greeks
//! ```
//!
//! # Examples
//!
//! ```rust
//! use pricer_core::{Contract, ExerciseStyle, OptionType};
//! use pricer_pricing::mc::SimulationPricer;
//! use pricer_pricing::EngineConfig;
//!
//! let pricer = SimulationPricer::new(
//!     EngineConfig::builder().path_count(50_000).seed(42).build().unwrap(),
//! );
//! let contract = Contract::new(
//!     OptionType::Put, ExerciseStyle::European, 100.0, 100.0, 1.0, 0.05, 0.2, 1,
//! ).unwrap();
//!
//! let estimate = pricer.simulate(&contract).unwrap();
//! assert!((estimate.price - 5.5735).abs() < 4.0 * estimate.std_error);
//! ```

mod paths;
mod pricer;
mod workspace;

pub use paths::{compute_payoffs, generate_gbm_paths, GbmParams};
pub use pricer::{SimulationEstimate, SimulationPricer};
pub use workspace::PathWorkspace;

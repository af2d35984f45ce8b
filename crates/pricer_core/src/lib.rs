//! # pricer_core: Contract and Measure Vocabulary for Option Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the pricing workspace, providing:
//! - Closed vocabularies: `OptionType`, `ExerciseStyle`, `PricingModel`, `Measure` (`types`)
//! - The legal (style, model) table (`types::option`)
//! - The immutable, validated `Contract` (`contract`)
//! - `MeasureSet`, the result of every pricing call (`types::measure`)
//! - Error type: `PricingError` (`types::error`)
//! - The `OptionPricer` trait every model implements (`traits`)
//! - Standard normal CDF/PDF (`math`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::contract::Contract;
//! use pricer_core::types::{ExerciseStyle, OptionType, PricingModel};
//!
//! let contract = Contract::new(
//!     OptionType::Put,
//!     ExerciseStyle::American,
//!     100.0, 110.0, 0.5, 0.03, 0.25, 200,
//! )
//! .unwrap();
//!
//! assert!(PricingModel::Lattice.supports(contract.style()));
//! assert!(!PricingModel::Analytic.supports(contract.style()));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Contract`, `MeasureSet` and the vocabularies

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod contract;
pub mod math;
pub mod traits;
pub mod types;

pub use contract::{Contract, ContractBuilder, MAX_STEPS};
pub use traits::OptionPricer;
pub use types::{ExerciseStyle, Measure, MeasureSet, OptionType, PricingError, PricingModel};

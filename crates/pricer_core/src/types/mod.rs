//! Closed vocabularies, measures and error types.
//!
//! This module provides:
//! - `option`: `OptionType`, `ExerciseStyle`, `PricingModel` and the legal model table
//! - `measure`: `Measure` names and the `MeasureSet` returned by every pricer
//! - `error`: `PricingError`, the single error type of a pricing call
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level.

pub mod error;
pub mod measure;
pub mod option;

pub use error::PricingError;
pub use measure::{Measure, MeasureSet, ParseMeasureError};
pub use option::{ExerciseStyle, OptionType, PricingModel};

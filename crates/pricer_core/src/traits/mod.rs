//! Core traits for pricing components.
//!
//! This module defines:
//! - `OptionPricer`: a model that turns a [`Contract`](crate::contract::Contract)
//!   into a [`MeasureSet`](crate::types::MeasureSet)

pub mod pricer;

pub use pricer::OptionPricer;

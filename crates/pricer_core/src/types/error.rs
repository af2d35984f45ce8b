//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: every failure a contract construction or pricing call can report

use thiserror::Error;

use super::option::{ExerciseStyle, PricingModel};

/// Categorised pricing errors.
///
/// All variants are local to a single call. A failed call leaves no partial
/// state behind: caches only ever store complete results.
///
/// # Variants
/// - `InvalidParameter`: A contract field violates its invariant
/// - `UnsupportedStyle`: A pricer cannot model the contract's exercise style
/// - `UnsupportedModel`: The model is not legal for the contract's exercise style
/// - `NumericalInstability`: A derived quantity would divide by zero or leave its domain
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidParameter {
///     field: "spot",
///     reason: "must be positive, got -1".to_string(),
/// };
/// assert_eq!(
///     format!("{}", err),
///     "Invalid parameter 'spot': must be positive, got -1"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// A contract field violates its positivity or finiteness invariant.
    #[error("Invalid parameter '{field}': {reason}")]
    InvalidParameter {
        /// Name of the offending field
        field: &'static str,
        /// What is wrong with the supplied value
        reason: String,
    },

    /// The pricer cannot handle the contract's exercise style.
    #[error("{model} pricer does not support {style} exercise")]
    UnsupportedStyle {
        /// Pricer that rejected the contract
        model: PricingModel,
        /// Exercise style of the rejected contract
        style: ExerciseStyle,
    },

    /// The requested model is not in the legal set for the exercise style.
    #[error("{model} model is not legal for {style} options")]
    UnsupportedModel {
        /// Requested model
        model: PricingModel,
        /// Exercise style of the contract
        style: ExerciseStyle,
    },

    /// Division by zero or a probability outside [0, 1] was detected.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

impl PricingError {
    /// Builds an `InvalidParameter` error.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        PricingError::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }
}

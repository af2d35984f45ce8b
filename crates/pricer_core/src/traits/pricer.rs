//! The pricing-model trait shared by every layer.

use crate::contract::Contract;
use crate::types::{MeasureSet, PricingError, PricingModel};

/// A numerical model able to price vanilla contracts.
///
/// Implementations are pure with respect to the contract: the same contract
/// (and, for stochastic models, the same seed) gives the same result.
///
/// # Examples
///
/// ```
/// use pricer_core::traits::OptionPricer;
/// use pricer_core::{Contract, MeasureSet, PricingError, PricingModel};
///
/// struct Intrinsic;
///
/// impl OptionPricer for Intrinsic {
///     fn model(&self) -> PricingModel {
///         PricingModel::Lattice
///     }
///
///     fn price(&self, contract: &Contract) -> Result<MeasureSet, PricingError> {
///         Ok(MeasureSet::with_value(contract.intrinsic()))
///     }
/// }
/// ```
pub trait OptionPricer: Send + Sync {
    /// The model this pricer implements.
    fn model(&self) -> PricingModel;

    /// Prices the contract.
    ///
    /// # Errors
    ///
    /// - `UnsupportedStyle` if the pricer cannot model the contract's exercise style
    /// - `NumericalInstability` if a derived quantity leaves its valid domain
    fn price(&self, contract: &Contract) -> Result<MeasureSet, PricingError>;
}

//! Option vocabulary: payoff side, exercise style and pricing model.
//!
//! All three are closed sets. The only relation between them is the legal
//! model table:
//!
//! | Style    | Legal models           |
//! |----------|------------------------|
//! | European | Analytic, Simulation   |
//! | American | Lattice, Simulation    |

use std::fmt;

/// Payoff side of a vanilla option.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
///
/// assert_eq!(OptionType::Call.payoff(110.0, 100.0), 10.0);
/// assert_eq!(OptionType::Put.payoff(110.0, 100.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionType {
    /// Evaluates the exercise payoff for the given spot and strike.
    #[inline]
    pub fn payoff(self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }

    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(self) -> bool {
        matches!(self, OptionType::Call)
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

/// Option exercise style.
///
/// # Variants
/// - `European`: Exercise only at expiry
/// - `American`: Exercise at any time up to expiry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExerciseStyle {
    /// European style: exercise only at expiry.
    European,
    /// American style: exercise at any time up to expiry.
    American,
}

impl ExerciseStyle {
    /// Returns the models legally allowed to price this style.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::{ExerciseStyle, PricingModel};
    ///
    /// let legal = ExerciseStyle::American.legal_models();
    /// assert!(legal.contains(&PricingModel::Lattice));
    /// assert!(!legal.contains(&PricingModel::Analytic));
    /// ```
    #[inline]
    pub fn legal_models(self) -> &'static [PricingModel] {
        match self {
            ExerciseStyle::European => &[PricingModel::Analytic, PricingModel::Simulation],
            ExerciseStyle::American => &[PricingModel::Lattice, PricingModel::Simulation],
        }
    }

    /// Returns the model used when the caller does not name one.
    #[inline]
    pub fn default_model(self) -> PricingModel {
        match self {
            ExerciseStyle::European => PricingModel::Analytic,
            ExerciseStyle::American => PricingModel::Lattice,
        }
    }

    /// Returns whether this style allows exercise before expiry.
    #[inline]
    pub fn allows_early_exercise(self) -> bool {
        matches!(self, ExerciseStyle::American)
    }
}

impl fmt::Display for ExerciseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExerciseStyle::European => write!(f, "European"),
            ExerciseStyle::American => write!(f, "American"),
        }
    }
}

/// Numerical model used to price a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PricingModel {
    /// Closed-form Black-Scholes.
    Analytic,
    /// Trigeorgis binomial lattice with backward induction.
    Lattice,
    /// Monte Carlo simulation with finite-difference Greeks.
    Simulation,
}

impl PricingModel {
    /// All models, in declaration order.
    pub const ALL: [PricingModel; 3] = [
        PricingModel::Analytic,
        PricingModel::Lattice,
        PricingModel::Simulation,
    ];

    /// Returns whether this model may price the given exercise style.
    #[inline]
    pub fn supports(self, style: ExerciseStyle) -> bool {
        style.legal_models().contains(&self)
    }
}

impl fmt::Display for PricingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingModel::Analytic => write!(f, "Analytic"),
            PricingModel::Lattice => write!(f, "Lattice"),
            PricingModel::Simulation => write!(f, "Simulation"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payoff() {
        assert_eq!(OptionType::Call.payoff(120.0, 100.0), 20.0);
        assert_eq!(OptionType::Call.payoff(80.0, 100.0), 0.0);
        assert_eq!(OptionType::Put.payoff(80.0, 100.0), 20.0);
        assert_eq!(OptionType::Put.payoff(120.0, 100.0), 0.0);
    }

    #[test]
    fn test_legal_model_matrix() {
        use ExerciseStyle::*;
        use PricingModel::*;

        let expected = [
            (European, Analytic, true),
            (European, Lattice, false),
            (European, Simulation, true),
            (American, Analytic, false),
            (American, Lattice, true),
            (American, Simulation, true),
        ];
        for (style, model, legal) in expected {
            assert_eq!(model.supports(style), legal, "{} / {}", style, model);
        }
    }

    #[test]
    fn test_default_model_is_legal() {
        for style in [ExerciseStyle::European, ExerciseStyle::American] {
            assert!(style.default_model().supports(style));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(OptionType::Put.to_string(), "Put");
        assert_eq!(ExerciseStyle::American.to_string(), "American");
        assert_eq!(PricingModel::Lattice.to_string(), "Lattice");
    }
}

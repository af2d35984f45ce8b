//! Pricing measures and the measure set returned by every pricer.
//!
//! A [`MeasureSet`] maps a [`Measure`] name to its value. Pricers fill in
//! what they can compute: the closed form returns all six measures, the
//! lattice returns `Value` only.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Name of a pricing output.
///
/// # Examples
/// ```
/// use pricer_core::types::Measure;
///
/// let delta: Measure = "delta".parse().unwrap();
/// assert_eq!(delta, Measure::Delta);
/// assert_eq!(delta.to_string(), "DELTA");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Measure {
    /// Present value of the option.
    Value,
    /// Delta: ∂V/∂S
    Delta,
    /// Gamma: ∂²V/∂S²
    Gamma,
    /// Theta: time sensitivity
    Theta,
    /// Vega: ∂V/∂σ
    Vega,
    /// Rho: ∂V/∂r
    Rho,
}

impl Measure {
    /// All measures, value first.
    pub const ALL: [Measure; 6] = [
        Measure::Value,
        Measure::Delta,
        Measure::Gamma,
        Measure::Theta,
        Measure::Vega,
        Measure::Rho,
    ];

    /// Upper-case name of the measure.
    pub fn name(self) -> &'static str {
        match self {
            Measure::Value => "VALUE",
            Measure::Delta => "DELTA",
            Measure::Gamma => "GAMMA",
            Measure::Theta => "THETA",
            Measure::Vega => "VEGA",
            Measure::Rho => "RHO",
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a measure name is not recognised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown measure: {0}")]
pub struct ParseMeasureError(pub String);

impl FromStr for Measure {
    type Err = ParseMeasureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Measure::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseMeasureError(s.to_string()))
    }
}

/// Mapping from measure name to value.
///
/// Iteration order follows [`Measure::ALL`].
///
/// # Examples
/// ```
/// use pricer_core::types::{Measure, MeasureSet};
///
/// let mut set = MeasureSet::with_value(10.45);
/// set.insert(Measure::Delta, 0.64);
///
/// assert_eq!(set.value(), Some(10.45));
/// assert_eq!(set.get_by_name("delta"), Some(0.64));
/// assert_eq!(set.get(Measure::Rho), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MeasureSet {
    values: BTreeMap<Measure, f64>,
}

impl MeasureSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set holding only `Value`.
    pub fn with_value(value: f64) -> Self {
        let mut set = Self::new();
        set.insert(Measure::Value, value);
        set
    }

    /// Stores a measure, returning the previous value if any.
    pub fn insert(&mut self, measure: Measure, value: f64) -> Option<f64> {
        self.values.insert(measure, value)
    }

    /// Returns the value of a measure, if populated.
    #[inline]
    pub fn get(&self, measure: Measure) -> Option<f64> {
        self.values.get(&measure).copied()
    }

    /// Looks a measure up by its (case-insensitive) name.
    pub fn get_by_name(&self, name: &str) -> Option<f64> {
        name.parse().ok().and_then(|m| self.get(m))
    }

    /// Shorthand for `get(Measure::Value)`.
    #[inline]
    pub fn value(&self) -> Option<f64> {
        self.get(Measure::Value)
    }

    /// Returns whether the measure is populated.
    pub fn contains(&self, measure: Measure) -> bool {
        self.values.contains_key(&measure)
    }

    /// Number of populated measures.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether no measure is populated.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over populated measures in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Measure, f64)> + '_ {
        self.values.iter().map(|(m, v)| (*m, *v))
    }
}

impl FromIterator<(Measure, f64)> for MeasureSet {
    fn from_iter<I: IntoIterator<Item = (Measure, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for MeasureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (measure, value) in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{}={:.6}", measure, value)?;
            first = false;
        }
        Ok(())
    }
}

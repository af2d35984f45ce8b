//! Pricing engine configuration.
//!
//! Holds the Monte Carlo tunables: path count, finite-difference bump
//! fraction and an optional seed. A configuration can be built fluently,
//! parsed from TOML, or read from environment variables:
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `PRICER_PATH_COUNT` | `path_count` | 1000 |
//! | `PRICER_BUMP_FRACTION` | `bump_fraction` | 0.01 |
//! | `PRICER_SEED` | `seed` | none (OS entropy) |

use serde::Deserialize;
use thiserror::Error;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Default number of simulation paths.
pub const DEFAULT_PATH_COUNT: usize = 1000;

/// Default relative finite-difference bump.
pub const DEFAULT_BUMP_FRACTION: f64 = 0.01;

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Path count outside [1, 10_000_000].
    #[error("Invalid path count {0}: must be in range [1, 10_000_000]")]
    InvalidPathCount(usize),

    /// Bump fraction not strictly between 0 and 1.
    #[error("Invalid bump fraction {0}: must satisfy 0 < f < 1")]
    InvalidBumpFraction(f64),

    /// TOML input could not be parsed.
    #[error("Configuration parse error: {0}")]
    Parse(String),

    /// An environment variable held an unparsable value.
    #[error("Environment variable {variable} has invalid value '{value}'")]
    Env {
        /// Variable name
        variable: &'static str,
        /// Raw value found
        value: String,
    },
}

/// Monte Carlo and finite-difference settings for a [`PricingEngine`](crate::PricingEngine).
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::EngineConfig;
///
/// let config = EngineConfig::builder()
///     .path_count(20_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.path_count(), 20_000);
/// assert_eq!(config.bump_fraction(), 0.01);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    path_count: usize,
    bump_fraction: f64,
    seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            path_count: DEFAULT_PATH_COUNT,
            bump_fraction: DEFAULT_BUMP_FRACTION,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Creates a new configuration builder starting from the defaults.
    #[inline]
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    /// Number of simulated paths per pricing run.
    #[inline]
    pub fn path_count(&self) -> usize {
        self.path_count
    }

    /// Relative size of each finite-difference bump.
    #[inline]
    pub fn bump_fraction(&self) -> f64 {
        self.bump_fraction
    }

    /// Seed for reproducible simulation, if configured.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `path_count` is 0 or greater than 10,000,000
    /// - `bump_fraction` is not strictly between 0 and 1
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.path_count == 0 || self.path_count > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.path_count));
        }
        if !(self.bump_fraction > 0.0 && self.bump_fraction < 1.0) {
            return Err(ConfigError::InvalidBumpFraction(self.bump_fraction));
        }
        Ok(())
    }

    /// Parses and validates a TOML document. Missing keys take their defaults.
    ///
    /// ```rust
    /// use pricer_pricing::EngineConfig;
    ///
    /// let config = EngineConfig::from_toml_str("path_count = 5000\nseed = 7").unwrap();
    /// assert_eq!(config.path_count(), 5000);
    /// assert_eq!(config.seed(), Some(7));
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `PRICER_PATH_COUNT`, `PRICER_BUMP_FRACTION` and `PRICER_SEED`
    /// over the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("PRICER_PATH_COUNT") {
            config.path_count = parse_var("PRICER_PATH_COUNT", &value)?;
        }
        if let Some(value) = lookup("PRICER_BUMP_FRACTION") {
            config.bump_fraction = parse_var("PRICER_BUMP_FRACTION", &value)?;
        }
        if let Some(value) = lookup("PRICER_SEED") {
            config.seed = Some(parse_var("PRICER_SEED", &value)?);
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_var<T: std::str::FromStr>(variable: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Env {
        variable,
        value: value.to_string(),
    })
}

/// Builder for [`EngineConfig`].
#[derive(Debug, Clone, Default)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    /// Sets the number of simulation paths, in [1, 10_000_000].
    #[inline]
    pub fn path_count(mut self, path_count: usize) -> Self {
        self.config.path_count = path_count;
        self
    }

    /// Sets the relative finite-difference bump, in (0, 1).
    #[inline]
    pub fn bump_fraction(mut self, bump_fraction: f64) -> Self {
        self.config.bump_fraction = bump_fraction;
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if validation fails.
    pub fn build(self) -> Result<EngineConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.path_count(), 1000);
        assert_eq!(config.bump_fraction(), 0.01);
        assert_eq!(config.seed(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_invalid_zero_paths() {
        let result = EngineConfig::builder().path_count(0).build();
        assert_eq!(result, Err(ConfigError::InvalidPathCount(0)));
    }

    #[test]
    fn test_builder_invalid_too_many_paths() {
        let result = EngineConfig::builder().path_count(MAX_PATHS + 1).build();
        assert!(matches!(result, Err(ConfigError::InvalidPathCount(_))));
    }

    #[test]
    fn test_builder_invalid_bump_fraction() {
        for f in [0.0, 1.0, -0.1, f64::NAN] {
            let result = EngineConfig::builder().bump_fraction(f).build();
            assert!(matches!(result, Err(ConfigError::InvalidBumpFraction(_))), "{}", f);
        }
    }

    #[test]
    fn test_toml_partial() {
        let config = EngineConfig::from_toml_str("bump_fraction = 0.005").unwrap();
        assert_eq!(config.path_count(), DEFAULT_PATH_COUNT);
        assert_eq!(config.bump_fraction(), 0.005);
    }

    #[test]
    fn test_toml_rejects_unknown_and_invalid() {
        assert!(matches!(
            EngineConfig::from_toml_str("paths = 10"),
            Err(ConfigError::Parse(_))
        ));
        assert_eq!(
            EngineConfig::from_toml_str("path_count = 0"),
            Err(ConfigError::InvalidPathCount(0))
        );
    }

    #[test]
    fn test_lookup_overrides() {
        let config = EngineConfig::from_lookup(lookup(&[
            ("PRICER_PATH_COUNT", "2500"),
            ("PRICER_SEED", " 99 "),
        ]))
        .unwrap();
        assert_eq!(config.path_count(), 2500);
        assert_eq!(config.bump_fraction(), DEFAULT_BUMP_FRACTION);
        assert_eq!(config.seed(), Some(99));
    }

    #[test]
    fn test_lookup_bad_value() {
        let result = EngineConfig::from_lookup(lookup(&[("PRICER_BUMP_FRACTION", "one")]));
        assert_eq!(
            result,
            Err(ConfigError::Env {
                variable: "PRICER_BUMP_FRACTION",
                value: "one".to_string(),
            })
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidPathCount(0);
        assert!(err.to_string().contains("Invalid path count 0"));

        let err = ConfigError::InvalidBumpFraction(1.5);
        assert!(err.to_string().contains("1.5"));
    }
}

//! Analytical pricing formulas for European options.
//!
//! This module provides the Black-Scholes closed form and its analytical
//! Greeks (Delta, Gamma, Vega, Theta, Rho). The standard normal functions
//! come from [`pricer_core::math`].

pub mod black_scholes;

pub use black_scholes::{AnalyticPricer, BlackScholes};

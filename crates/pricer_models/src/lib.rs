//! # Pricer Models (L2: Business Logic)
//!
//! Deterministic option pricers built on the `pricer_core` vocabulary.
//!
//! This crate provides:
//! - [`analytical::AnalyticPricer`]: closed-form Black-Scholes value and Greeks
//!   for European contracts
//! - [`lattice::LatticePricer`]: Trigeorgis binomial tree with backward
//!   induction for European and American contracts
//!
//! Both implement [`pricer_core::OptionPricer`] and are stateless, so a single
//! instance can be shared across threads.
//!
//! ## Example
//! ```
//! use pricer_core::{Contract, ExerciseStyle, OptionPricer, OptionType};
//! use pricer_models::lattice::LatticePricer;
//!
//! let put = Contract::new(
//!     OptionType::Put, ExerciseStyle::American, 100.0, 100.0, 1.0, 0.05, 0.2, 200,
//! ).unwrap();
//!
//! let value = LatticePricer::new().price(&put).unwrap().value().unwrap();
//! assert!(value > put.intrinsic());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod lattice;

pub use analytical::AnalyticPricer;
pub use lattice::LatticePricer;

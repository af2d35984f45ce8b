//! # Random Number Generation
//!
//! Seeded pseudo-random number generation for the Monte Carlo pricer.
//!
//! - **Reproducibility**: a configured seed always yields the same sequence
//! - **Batch filling**: normals are written into caller-owned `&mut [f64]`
//!   buffers without allocation
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! let mut rng = PricerRng::from_seed(12345);
//!
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//! ```

mod prng;

pub use prng::PricerRng;

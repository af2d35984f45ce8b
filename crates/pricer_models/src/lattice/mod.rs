//! Binomial lattice pricing.
//!
//! - [`TreeParameters`]: Trigeorgis log-space move size and probabilities
//! - [`LatticeGrid`]: triangular stock-price and option-value grids
//! - [`LatticePricer`]: backward induction with optional early exercise

mod grid;
mod trigeorgis;

pub use grid::LatticeGrid;
pub use trigeorgis::{LatticePricer, TreeParameters};

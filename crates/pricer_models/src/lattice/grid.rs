//! Triangular storage for a recombining binomial tree.
//!
//! # Memory Layout
//!
//! Node `(i, j)` is the state after `j` time steps of which `i` were down
//! moves, so `0 ≤ i ≤ j ≤ N`. Each time step is stored contiguously:
//!
//! ```text
//! index(i, j) = j·(j + 1)/2 + i
//! ```
//!
//! Both grids hold `(N + 1)(N + 2)/2` nodes and live only for the duration of
//! one pricing call.

/// Stock-price and option-value grids of a binomial tree.
#[derive(Debug, Clone)]
pub struct LatticeGrid {
    steps: usize,
    stock: Vec<f64>,
    value: Vec<f64>,
}

impl LatticeGrid {
    /// Allocates zeroed grids for a tree with `steps` time steps.
    pub fn new(steps: usize) -> Self {
        let nodes = (steps + 1) * (steps + 2) / 2;
        Self {
            steps,
            stock: vec![0.0; nodes],
            value: vec![0.0; nodes],
        }
    }

    /// Number of time steps N.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Total number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.stock.len()
    }

    #[inline]
    fn index(i: usize, j: usize) -> usize {
        debug_assert!(i <= j, "down-move count {} exceeds step {}", i, j);
        j * (j + 1) / 2 + i
    }

    /// Fills the stock grid from the spot and log move size.
    ///
    /// The top edge moves up by `e^dx` per step and every other node sits one
    /// down move `e^-dx` below its parent at the previous step.
    pub fn fill_stock(&mut self, spot: f64, dx: f64) {
        let up = dx.exp();
        let down = (-dx).exp();

        self.stock[0] = spot;
        for j in 1..=self.steps {
            self.stock[Self::index(0, j)] = self.stock[Self::index(0, j - 1)] * up;
            for i in 1..=j {
                self.stock[Self::index(i, j)] = self.stock[Self::index(i - 1, j - 1)] * down;
            }
        }
    }

    /// Stock price at node `(i, j)`.
    #[inline]
    pub fn stock(&self, i: usize, j: usize) -> f64 {
        self.stock[Self::index(i, j)]
    }

    /// Option value at node `(i, j)`.
    #[inline]
    pub fn value(&self, i: usize, j: usize) -> f64 {
        self.value[Self::index(i, j)]
    }

    /// Sets the option value at node `(i, j)`.
    #[inline]
    pub fn set_value(&mut self, i: usize, j: usize, value: f64) {
        self.value[Self::index(i, j)] = value;
    }

    /// Option values at time step `j`, ordered by down-move count.
    pub fn values_at(&self, j: usize) -> &[f64] {
        let start = Self::index(0, j);
        &self.value[start..=start + j]
    }

    /// Stock prices at time step `j`, ordered by down-move count.
    pub fn stocks_at(&self, j: usize) -> &[f64] {
        let start = Self::index(0, j);
        &self.stock[start..=start + j]
    }
}

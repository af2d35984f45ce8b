//! Workspace buffers for one Monte Carlo pricing call.
//!
//! # Memory Layout
//!
//! All buffers are path-major and contiguous:
//! - `randoms`: n_paths × n_steps (standard normal samples)
//! - `paths`: n_paths × (n_steps + 1) (spot trajectories including S₀)
//! - `payoffs`: n_paths (undiscounted terminal payoffs)
//!
//! A workspace is allocated once per pricing call and reused by the base
//! run and every finite-difference bump, since all of them share the same
//! dimensions. It is dropped when the call returns.

/// Buffers for random samples, spot paths and payoffs.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::PathWorkspace;
///
/// let mut workspace = PathWorkspace::new(1000, 50);
/// assert_eq!(workspace.randoms_mut().len(), 1000 * 50);
/// assert_eq!(workspace.paths().len(), 1000 * 51);
/// ```
#[derive(Debug, Clone)]
pub struct PathWorkspace {
    randoms: Vec<f64>,
    paths: Vec<f64>,
    payoffs: Vec<f64>,
    n_paths: usize,
    n_steps: usize,
}

impl PathWorkspace {
    /// Allocates zeroed buffers for `n_paths` paths of `n_steps` steps.
    ///
    /// Pricers only call this with a validated path count (at most `MAX_PATHS`)
    /// and contract step count (at most `MAX_STEPS`), whose buffer sizes fit in
    /// a 64-bit `usize`.
    pub fn new(n_paths: usize, n_steps: usize) -> Self {
        Self {
            randoms: vec![0.0; n_paths * n_steps],
            paths: vec![0.0; n_paths * (n_steps + 1)],
            payoffs: vec![0.0; n_paths],
            n_paths,
            n_steps,
        }
    }

    /// Number of paths M.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Number of time steps N.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns total memory held by the buffers in bytes.
    #[inline]
    pub fn memory_usage(&self) -> usize {
        (self.randoms.capacity() + self.paths.capacity() + self.payoffs.capacity())
            * std::mem::size_of::<f64>()
    }

    /// Mutable access to the random sample buffer.
    #[inline]
    pub fn randoms_mut(&mut self) -> &mut [f64] {
        &mut self.randoms
    }

    /// Spot trajectories, path-major.
    #[inline]
    pub fn paths(&self) -> &[f64] {
        &self.paths
    }

    /// Terminal payoffs, one per path.
    #[inline]
    pub fn payoffs(&self) -> &[f64] {
        &self.payoffs
    }

    /// Split borrow: paths (mutable) and randoms (immutable).
    #[inline]
    pub fn paths_mut_and_randoms(&mut self) -> (&mut [f64], &[f64]) {
        (&mut self.paths, &self.randoms)
    }

    /// Split borrow: paths (immutable) and payoffs (mutable).
    #[inline]
    pub fn paths_and_payoffs_mut(&mut self) -> (&[f64], &mut [f64]) {
        (&self.paths, &mut self.payoffs)
    }

    /// Terminal spot of path `path_idx`.
    #[inline]
    pub fn terminal(&self, path_idx: usize) -> f64 {
        self.paths[path_idx * (self.n_steps + 1) + self.n_steps]
    }
}

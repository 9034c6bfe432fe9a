//! Estimator configuration.

/// Slicing and density settings for `estimate`.
///
/// Neither value is range-checked here; `num_slices == 0` is rejected by the
/// estimator itself, and `density` is used as given (mass per unit volume in
/// the caller's unit system).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MassCfg {
    /// Number of equal-thickness z-bands.
    pub num_slices: usize,
    /// Uniform density.
    pub density: f64,
}

impl Default for MassCfg {
    fn default() -> Self {
        Self {
            num_slices: 100,
            density: 1.0,
        }
    }
}

impl MassCfg {
    #[must_use]
    pub const fn with_slices(mut self, num_slices: usize) -> Self {
        self.num_slices = num_slices;
        self
    }

    #[must_use]
    pub const fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }
}

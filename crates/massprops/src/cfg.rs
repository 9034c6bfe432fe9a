//! Tolerance context shared by every predicate in the crate.
//!
//! Policy
//! - Tolerances are plain values threaded through calls; nothing reads a
//!   process-wide constant. Callers that never tune them use `GeomCfg::default()`.
//! - All float equality checks are absolute: `|a - b| <= eps`.

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Absolute tolerance for equality, zero-length and on-boundary checks.
    pub eps: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps: 1e-7 }
    }
}

impl GeomCfg {
    #[inline]
    pub fn with_eps(eps: f64) -> Self {
        Self { eps }
    }

    /// `|x| <= eps`.
    #[inline]
    pub fn is_zero(&self, x: f64) -> bool {
        x.abs() <= self.eps
    }

    /// Sign of `x` with a dead zone of width `eps` around zero.
    #[inline]
    pub fn sign(&self, x: f64) -> i8 {
        if x > self.eps {
            1
        } else if x < -self.eps {
            -1
        } else {
            0
        }
    }
}

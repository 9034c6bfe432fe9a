//! Convex hull provider for point sets in the plane.
//!
//! Contract
//! - `Ok(vertices)` lists hull vertices in polygon order. Degenerate input
//!   (fewer than 3 distinct points, or all collinear) yields fewer than 3
//!   vertices, not an error.
//! - `Err(HullError)` is reserved for numerical failure.
//! - Consumers must not assume a winding direction; `MonotoneChain` happens to
//!   emit counterclockwise order.

use nalgebra::Vector2;
use thiserror::Error;

/// Hull construction failed for numerical reasons.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HullError {
    #[error("input contains a non-finite coordinate")]
    NonFinite,
}

/// Anything that can turn a point set into hull vertices.
pub trait HullProvider {
    fn hull(&self, points: &[Vector2<f64>]) -> Result<Vec<Vector2<f64>>, HullError>;
}

/// Andrew's monotone chain. Points closer than `dedup_tol` are merged first.
#[derive(Clone, Copy, Debug)]
pub struct MonotoneChain {
    pub dedup_tol: f64,
}

impl Default for MonotoneChain {
    fn default() -> Self {
        Self { dedup_tol: 1e-12 }
    }
}

impl HullProvider for MonotoneChain {
    fn hull(&self, points: &[Vector2<f64>]) -> Result<Vec<Vector2<f64>>, HullError> {
        if points.iter().any(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(HullError::NonFinite);
        }
        let mut pts: Vec<_> = points.to_vec();
        pts.sort_by(|a, b| {
            a.x.partial_cmp(&b.x)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal))
        });
        pts.dedup_by(|a, b| (*a - *b).norm() < self.dedup_tol);
        if pts.len() < 3 {
            return Ok(pts);
        }
        let mut lower: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
        for p in &pts {
            while lower.len() >= 2 && turn(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0 {
                lower.pop();
            }
            lower.push(*p);
        }
        let mut upper: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
        for p in pts.iter().rev() {
            while upper.len() >= 2 && turn(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0 {
                upper.pop();
            }
            upper.push(*p);
        }
        lower.pop();
        upper.pop();
        let mut hull = lower;
        hull.extend(upper);
        Ok(hull)
    }
}

/// z-component of `(b - a) × (c - a)`; positive for a left turn.
#[inline]
fn turn(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Convenience wrapper around `MonotoneChain::default()`.
pub fn convex_hull(points: &[Vector2<f64>]) -> Result<Vec<Vector2<f64>>, HullError> {
    MonotoneChain::default().hull(points)
}

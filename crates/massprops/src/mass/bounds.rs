//! Axis-aligned bounds of a point cloud.

use nalgebra::Vector3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds3 {
    pub min: Vector3<f64>,
    pub max: Vector3<f64>,
}

impl Bounds3 {
    #[inline]
    pub fn extent(&self) -> Vector3<f64> {
        self.max - self.min
    }
    #[inline]
    pub fn center(&self) -> Vector3<f64> {
        (self.min + self.max) * 0.5
    }
    #[inline]
    pub fn z_range(&self) -> (f64, f64) {
        (self.min.z, self.max.z)
    }
}

/// Bounds of `points`, or `None` when empty. Callers filter non-finite points first.
pub fn bounds(points: &[Vector3<f64>]) -> Option<Bounds3> {
    let first = *points.first()?;
    let init = Bounds3 {
        min: first,
        max: first,
    };
    Some(points.iter().skip(1).fold(init, |b, p| Bounds3 {
        min: b.min.inf(p),
        max: b.max.sup(p),
    }))
}

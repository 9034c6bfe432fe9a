//! Segment, ray and intersection-outcome types.

use nalgebra::Vector2;

/// Closed segment between `a` and `b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
}

impl Segment {
    #[inline]
    pub fn new(a: Vector2<f64>, b: Vector2<f64>) -> Self {
        Self { a, b }
    }
    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        self.b - self.a
    }
    #[inline]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }
}

/// Half-line starting at `origin`, passing through `through`, unbounded beyond it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vector2<f64>,
    pub through: Vector2<f64>,
}

impl Ray {
    #[inline]
    pub fn new(origin: Vector2<f64>, through: Vector2<f64>) -> Self {
        Self { origin, through }
    }
    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        self.through - self.origin
    }
}

/// Outcome of a segment/segment or ray/segment intersection.
///
/// `Coincident` means the supporting lines coincide. It carries no
/// coordinate: the overlap is a range, not a point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intersection {
    Point(Vector2<f64>),
    Coincident,
    Parallel,
    /// Lines cross, but outside at least one parameter range.
    Disjoint,
}

impl Intersection {
    #[inline]
    pub fn point(self) -> Option<Vector2<f64>> {
        if let Intersection::Point(p) = self {
            Some(p)
        } else {
            None
        }
    }
    #[inline]
    pub fn is_point(&self) -> bool {
        matches!(self, Intersection::Point(_))
    }
    #[inline]
    pub fn is_coincident(&self) -> bool {
        matches!(self, Intersection::Coincident)
    }
}

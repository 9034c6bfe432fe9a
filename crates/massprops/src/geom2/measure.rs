//! Areas, centroids, distances and polar coordinates in the plane.
//!
//! Area and centroid use the shoelace formula only. It is exact for simple
//! polygons (convex or not); self-intersecting input has no defined result.
//! Reported areas are non-negative regardless of winding direction.

use nalgebra::Vector2;

use super::types::Segment;
use crate::cfg::GeomCfg;

/// `(r, theta)` with `theta = atan2(y, x) ∈ (-π, π]`.
#[inline]
pub fn cartesian_to_polar(p: Vector2<f64>) -> (f64, f64) {
    (p.norm(), p.y.atan2(p.x))
}

#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> Vector2<f64> {
    let (s, c) = theta.sin_cos();
    Vector2::new(r * c, r * s)
}

/// Twice the signed area of triangle `abc`; positive when counterclockwise.
#[inline]
pub(crate) fn orient(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

#[inline]
pub fn triangle_signed_area(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    0.5 * orient(a, b, c)
}

#[inline]
pub fn triangle_centroid(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Vector2<f64> {
    (a + b + c) / 3.0
}

/// Shoelace signed area; positive for counterclockwise vertex order.
pub fn signed_area(polygon: &[Vector2<f64>]) -> f64 {
    if polygon.len() < 3 {
        return 0.0;
    }
    let n = polygon.len();
    let twice: f64 = (0..n)
        .map(|i| {
            let p = polygon[i];
            let q = polygon[(i + 1) % n];
            p.x * q.y - q.x * p.y
        })
        .sum();
    0.5 * twice
}

#[inline]
pub fn polygon_area(polygon: &[Vector2<f64>]) -> f64 {
    signed_area(polygon).abs()
}

/// Area and centroid together.
///
/// `None` when the polygon is degenerate: `|2A| <= eps * L²`, with `L` the
/// larger side of its bounding box, so the test does not depend on scale.
pub fn polygon_area_centroid(polygon: &[Vector2<f64>], cfg: GeomCfg) -> Option<(f64, Vector2<f64>)> {
    let n = polygon.len();
    if n < 3 {
        return None;
    }
    // Shift to the first vertex to keep the cross terms small for far-away polygons.
    let origin = polygon[0];
    let mut twice_area = 0.0;
    let mut acc = Vector2::zeros();
    let mut lo = Vector2::zeros();
    let mut hi = Vector2::zeros();
    for i in 0..n {
        let p = polygon[i] - origin;
        let q = polygon[(i + 1) % n] - origin;
        let cross = p.x * q.y - q.x * p.y;
        twice_area += cross;
        acc += (p + q) * cross;
        lo = lo.inf(&p);
        hi = hi.sup(&p);
    }
    let extent = (hi - lo).max();
    if !(twice_area.abs() > cfg.eps * extent * extent) {
        return None;
    }
    let area = 0.5 * twice_area;
    Some((area.abs(), origin + acc / (6.0 * area)))
}

#[inline]
pub fn polygon_centroid(polygon: &[Vector2<f64>], cfg: GeomCfg) -> Option<Vector2<f64>> {
    polygon_area_centroid(polygon, cfg).map(|(_, c)| c)
}

/// Euclidean distance from `p` to the closest point of `seg`.
pub fn distance_to_segment(p: Vector2<f64>, seg: &Segment) -> f64 {
    let d = seg.direction();
    let len2 = d.norm_squared();
    if len2 == 0.0 {
        return (p - seg.a).norm();
    }
    let t = ((p - seg.a).dot(&d) / len2).clamp(0.0, 1.0);
    (p - (seg.a + d * t)).norm()
}

/// `distance_to_segment` with a sign: positive left of `a → b`, negative right.
///
/// Points within `eps` of the supporting line get a non-negative result.
pub fn signed_distance_to_segment(p: Vector2<f64>, seg: &Segment, cfg: GeomCfg) -> f64 {
    let dist = distance_to_segment(p, seg);
    let len = seg.length();
    if len <= cfg.eps {
        return dist;
    }
    let perp = orient(seg.a, seg.b, p) / len;
    if perp < -cfg.eps {
        -dist
    } else {
        dist
    }
}

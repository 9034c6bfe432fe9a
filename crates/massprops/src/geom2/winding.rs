//! Point-in-polygon via winding number, and point-in-triangle.
//!
//! Algorithm (half-crossing winding number)
//! - Translate the polygon so the query point sits at the origin.
//! - For each edge, count signed crossings of the positive x-axis: +1 for an
//!   upward crossing, -1 for a downward one.
//! - An edge that starts or ends on the positive x-axis counts half, signed by
//!   the other endpoint's side. Two such halves make one full crossing.
//! - y-coordinates within `eps` of zero count as on the axis.
//!
//! Boundary policy
//! - With `exclude_collinear`, a point within `eps` of an edge returns 0.
//! - Without it, points on the boundary get whatever the crossing count says;
//!   that value is not specified and callers must not depend on it.

use nalgebra::Vector2;

use super::measure::{distance_to_segment, orient};
use super::types::Segment;
use crate::cfg::GeomCfg;

/// Winding number of `polygon` around `point`. Counterclockwise loops count positive.
pub fn winding_number(
    point: Vector2<f64>,
    polygon: &[Vector2<f64>],
    exclude_collinear: bool,
    cfg: GeomCfg,
) -> f64 {
    let n = polygon.len();
    if n < 3 {
        return 0.0;
    }
    if exclude_collinear && on_boundary(point, polygon, cfg) {
        return 0.0;
    }
    let mut w = 0.0;
    for i in 0..n {
        let a = polygon[i] - point;
        let b = polygon[(i + 1) % n] - point;
        let sa = cfg.sign(a.y);
        let sb = cfg.sign(b.y);
        if sa * sb < 0 {
            // x where the edge meets the axis
            let r = a.x + a.y * (b.x - a.x) / (a.y - b.y);
            if r > 0.0 {
                w += if sa < 0 { 1.0 } else { -1.0 };
            }
        } else if sa == 0 && a.x > 0.0 {
            w += 0.5 * f64::from(sb);
        } else if sb == 0 && b.x > 0.0 {
            w -= 0.5 * f64::from(sa);
        }
    }
    w
}

/// `true` iff the winding number is non-zero (beyond `eps`).
///
/// Collinear exclusion is off, so boundary points are unspecified.
#[inline]
pub fn point_in_polygon(point: Vector2<f64>, polygon: &[Vector2<f64>], cfg: GeomCfg) -> bool {
    !cfg.is_zero(winding_number(point, polygon, false, cfg))
}

/// `true` if `point` lies within `eps` of any polygon edge.
pub fn on_boundary(point: Vector2<f64>, polygon: &[Vector2<f64>], cfg: GeomCfg) -> bool {
    let n = polygon.len();
    (0..n).any(|i| {
        let seg = Segment::new(polygon[i], polygon[(i + 1) % n]);
        distance_to_segment(point, &seg) <= cfg.eps
    })
}

/// Barycentric sign test; points on an edge or vertex count as inside.
///
/// Signs are taken on the distance of `p` from each edge line. A triangle with
/// `|2A| <= eps * L²` (`L` its longest edge) is treated as the segments
/// joining its vertices: only points within `eps` of them are inside.
pub fn point_in_triangle(
    p: Vector2<f64>,
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    cfg: GeomCfg,
) -> bool {
    let (lab, lbc, lca) = ((b - a).norm(), (c - b).norm(), (a - c).norm());
    let longest = lab.max(lbc).max(lca);
    if !(orient(a, b, c).abs() > cfg.eps * longest * longest) {
        return on_boundary(p, &[a, b, c], cfg);
    }
    let d1 = cfg.sign(orient(a, b, p) / lab);
    let d2 = cfg.sign(orient(b, c, p) / lbc);
    let d3 = cfg.sign(orient(c, a, p) / lca);
    let has_neg = d1 < 0 || d2 < 0 || d3 < 0;
    let has_pos = d1 > 0 || d2 > 0 || d3 > 0;
    !(has_neg && has_pos)
}

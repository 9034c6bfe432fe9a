//! Segment/segment and ray/segment intersection.
//!
//! Both operations solve the same 2×2 system for line A (`p1 → p2`) and
//! line B (`p3 → p4`):
//!
//! ```text
//! den   = (y4 - y3)(x2 - x1) - (x4 - x3)(y2 - y1)
//! uAnum = (x4 - x3)(y1 - y3) - (y4 - y3)(x1 - x3)
//! uBnum = (x2 - x1)(y1 - y3) - (y2 - y1)(x1 - x3)
//! ```
//!
//! Tolerance checks use scale-free quantities: `den / (|A| |B|)` is the sine
//! of the angle between the lines, `uAnum / |B|` the distance of `p1` from
//! line B and `uBnum / |A|` the distance of `p3` from line A.
//!
//! - sine `≈ 0` and both distances `≈ 0`: the lines coincide → `Coincident`.
//! - sine `≈ 0` otherwise: `Parallel`.
//! - Else `uA = uAnum / den`, `uB = uBnum / den`, and the point is
//!   `p1 + uA (p2 - p1)` if both parameters are in range.
//!
//! Ranges: a segment accepts `[0, 1]` (closed, widened by `eps`) with
//! `include_endpoints`, or `(0, 1)` (open, narrowed by `eps`) without. A ray
//! accepts `[0, ∞)` or `(0, ∞)` likewise.

use nalgebra::Vector2;

use super::types::{Intersection, Ray, Segment};
use crate::cfg::GeomCfg;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Extent {
    Bounded,
    Unbounded,
}

impl Extent {
    #[inline]
    fn admits(self, u: f64, include_endpoints: bool, eps: f64) -> bool {
        let lo_ok = if include_endpoints { u >= -eps } else { u > eps };
        let hi_ok = match self {
            Extent::Unbounded => true,
            Extent::Bounded if include_endpoints => u <= 1.0 + eps,
            Extent::Bounded => u < 1.0 - eps,
        };
        lo_ok && hi_ok
    }
}

#[allow(clippy::too_many_arguments)]
fn solve(
    p1: Vector2<f64>,
    p2: Vector2<f64>,
    ext_a: Extent,
    p3: Vector2<f64>,
    p4: Vector2<f64>,
    ext_b: Extent,
    include_endpoints: bool,
    cfg: GeomCfg,
) -> Intersection {
    let (d1, d2) = (p2 - p1, p4 - p3);
    let den = d2.y * d1.x - d2.x * d1.y;
    let ua_num = d2.x * (p1.y - p3.y) - d2.y * (p1.x - p3.x);
    let ub_num = d1.x * (p1.y - p3.y) - d1.y * (p1.x - p3.x);
    let (l1, l2) = (d1.norm(), d2.norm());
    let sin = if l1 > 0.0 && l2 > 0.0 { den / (l1 * l2) } else { 0.0 };
    if cfg.is_zero(sin) {
        // A zero-length input has no line; fall back to the endpoint gap.
        let gap = (p1 - p3).norm();
        let off_b = if l2 > 0.0 { ua_num / l2 } else { gap };
        let off_a = if l1 > 0.0 { ub_num / l1 } else { gap };
        if cfg.is_zero(off_b) && cfg.is_zero(off_a) {
            return Intersection::Coincident;
        }
        return Intersection::Parallel;
    }
    let ua = ua_num / den;
    let ub = ub_num / den;
    if ext_a.admits(ua, include_endpoints, cfg.eps) && ext_b.admits(ub, include_endpoints, cfg.eps) {
        Intersection::Point(p1 + (p2 - p1) * ua)
    } else {
        Intersection::Disjoint
    }
}

/// Intersection of two segments.
pub fn segment_intersection(
    s1: &Segment,
    s2: &Segment,
    include_endpoints: bool,
    cfg: GeomCfg,
) -> Intersection {
    solve(
        s1.a,
        s1.b,
        Extent::Bounded,
        s2.a,
        s2.b,
        Extent::Bounded,
        include_endpoints,
        cfg,
    )
}

/// Intersection of a ray with a segment.
pub fn ray_segment_intersection(
    ray: &Ray,
    seg: &Segment,
    include_endpoints: bool,
    cfg: GeomCfg,
) -> Intersection {
    solve(
        ray.origin,
        ray.through,
        Extent::Unbounded,
        seg.a,
        seg.b,
        Extent::Bounded,
        include_endpoints,
        cfg,
    )
}

/// Number of polygon edges a ray crosses (closed edges, ignoring coincident ones).
pub fn ray_polygon_crossings(ray: &Ray, polygon: &[Vector2<f64>], cfg: GeomCfg) -> usize {
    let n = polygon.len();
    (0..n)
        .filter(|&i| {
            let edge = Segment::new(polygon[i], polygon[(i + 1) % n]);
            ray_segment_intersection(ray, &edge, true, cfg).is_point()
        })
        .count()
}

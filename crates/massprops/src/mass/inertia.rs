//! Principal moments by voxel sampling of each slice.
//!
//! Grid
//! - Cubic voxels of edge `h` (the slice thickness). Voxel centers sit at
//!   `c + ((i + ½) h, (j + ½) h)` around the slice centroid `c`, so the cells
//!   tile the plane outward from the centroid.
//! - Rows expand from the centroid in +y, then in -y, and stop at the first
//!   row with no voxel inside the hull. Each row scans the hull's x-extent.
//! - A voxel counts when its center passes `point_in_polygon`.
//!
//! Each included voxel of mass `m = density h³` at offset `(dx, dy, dz)` from
//! the reference point adds `m (dy² + dz²)`, `m (dx² + dz²)`, `m (dx² + dy²)`
//! to `(Ixx, Iyy, Izz)`.

use nalgebra::{Vector2, Vector3};

use super::slice::SliceSummary;
use crate::cfg::GeomCfg;
use crate::geom2::point_in_polygon;

/// Inertia contribution of one slice plus the number of voxels used.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct SliceInertia {
    pub diagonal: Vector3<f64>,
    pub voxels: usize,
}

pub(crate) fn slice_inertia(
    slice: &SliceSummary,
    h: f64,
    density: f64,
    about: Vector3<f64>,
    cfg: GeomCfg,
) -> SliceInertia {
    let mut out = SliceInertia::default();
    let Some(c) = slice.centroid else {
        return out;
    };
    if h <= 0.0 || slice.hull.len() < 3 {
        return out;
    }
    let hull = &slice.hull;
    let (x_lo, x_hi) = hull
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.x), hi.max(p.x))
        });
    let i_lo = ((x_lo - c.x) / h - 0.5).floor() as i64;
    let i_hi = ((x_hi - c.x) / h - 0.5).ceil() as i64;
    let m = density * h * h * h;
    let dz = slice.z_mid - about.z;
    let dz2 = dz * dz;

    for step in [1i64, -1] {
        let mut j: i64 = if step > 0 { 0 } else { -1 };
        loop {
            let y = c.y + (j as f64 + 0.5) * h;
            let dy = y - about.y;
            let mut inside = 0usize;
            for i in i_lo..=i_hi {
                let x = c.x + (i as f64 + 0.5) * h;
                if !point_in_polygon(Vector2::new(x, y), hull, cfg) {
                    continue;
                }
                let dx = x - about.x;
                out.diagonal += Vector3::new(
                    m * (dy * dy + dz2),
                    m * (dx * dx + dz2),
                    m * (dx * dx + dy * dy),
                );
                inside += 1;
            }
            if inside == 0 {
                break;
            }
            out.voxels += inside;
            j += step;
        }
    }
    out
}

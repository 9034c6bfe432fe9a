//! z-band partitioning and per-slice hull/area/centroid.

use nalgebra::{Vector2, Vector3};
use tracing::debug;

use crate::cfg::GeomCfg;
use crate::geom2::{polygon_area_centroid, HullProvider};

/// One z-band of the point cloud after hulling.
///
/// A slice whose hull could not be formed has `area == 0`, no centroid and
/// an empty hull; it takes part in aggregation with zero weight.
#[derive(Clone, Debug, PartialEq)]
pub struct SliceSummary {
    pub index: usize,
    /// Mid-height of the band.
    pub z_mid: f64,
    /// Projected points that fell into the band (duplicates included).
    pub point_count: usize,
    pub area: f64,
    pub centroid: Option<Vector2<f64>>,
    pub hull: Vec<Vector2<f64>>,
}

impl SliceSummary {
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.centroid.is_none()
    }

    /// Slice centroid promoted to 3D at the band's mid-height.
    #[inline]
    pub fn centroid3(&self) -> Option<Vector3<f64>> {
        self.centroid.map(|c| Vector3::new(c.x, c.y, self.z_mid))
    }

    fn degenerate(index: usize, z_mid: f64, point_count: usize) -> Self {
        Self {
            index,
            z_mid,
            point_count,
            area: 0.0,
            centroid: None,
            hull: Vec::new(),
        }
    }
}

/// Equal-thickness partition of `[z_min, z_min + count * thickness]`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Bands {
    pub z_min: f64,
    pub thickness: f64,
    pub count: usize,
}

impl Bands {
    /// Band containing `z`; `z == z_max` (and any rounding overshoot) maps to the last band.
    #[inline]
    pub fn index_of(&self, z: f64) -> usize {
        let k = ((z - self.z_min) / self.thickness).floor();
        if k <= 0.0 {
            0
        } else {
            (k as usize).min(self.count - 1)
        }
    }

    #[inline]
    pub fn z_mid(&self, index: usize) -> f64 {
        self.z_min + (index as f64 + 0.5) * self.thickness
    }

    /// Group the xy-projections of `points` by band.
    pub fn partition(&self, points: &[Vector3<f64>]) -> Vec<Vec<Vector2<f64>>> {
        let mut out = vec![Vec::new(); self.count];
        for p in points {
            out[self.index_of(p.z)].push(Vector2::new(p.x, p.y));
        }
        out
    }
}

/// Hull one band and measure it. Never fails: hull errors and fewer than
/// three hull vertices both produce a zero-area slice.
pub(crate) fn summarize<H>(
    index: usize,
    z_mid: f64,
    points: &[Vector2<f64>],
    provider: &H,
    cfg: GeomCfg,
) -> SliceSummary
where
    H: HullProvider + ?Sized,
{
    if points.is_empty() {
        return SliceSummary::degenerate(index, z_mid, 0);
    }
    let hull = match provider.hull(points) {
        Ok(h) if h.len() >= 3 => h,
        Ok(h) => {
            debug!(
                slice = index,
                points = points.len(),
                hull_vertices = h.len(),
                "degenerate slice, zero weight"
            );
            return SliceSummary::degenerate(index, z_mid, points.len());
        }
        Err(err) => {
            debug!(slice = index, error = %err, "hull failed, zero weight");
            return SliceSummary::degenerate(index, z_mid, points.len());
        }
    };
    match polygon_area_centroid(&hull, cfg) {
        Some((area, centroid)) => SliceSummary {
            index,
            z_mid,
            point_count: points.len(),
            area,
            centroid: Some(centroid),
            hull,
        },
        None => {
            debug!(slice = index, "hull has no area, zero weight");
            SliceSummary::degenerate(index, z_mid, points.len())
        }
    }
}

//! The estimator pipeline: bounds → bands → hulls → centroid → inertia.

use nalgebra::{Vector2, Vector3};
use tracing::{info, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::bounds::{bounds, Bounds3};
use super::cfg::MassCfg;
use super::inertia::{slice_inertia, SliceInertia};
use super::slice::{summarize, Bands, SliceSummary};
use crate::cfg::GeomCfg;
use crate::error::{GeomError, Result};
use crate::geom2::{HullProvider, MonotoneChain};
use crate::vector::weighted_centroid;

/// Whole-body aggregates from one estimator run.
#[derive(Clone, Debug, PartialEq)]
pub struct MassProperties {
    /// `Σ area · thickness · density`.
    pub total_mass: f64,
    /// `Σ area · thickness`.
    pub volume: f64,
    /// Area-weighted slice centroid; `None` when every slice is degenerate.
    pub volume_centroid: Option<Vector3<f64>>,
    /// `(Ixx, Iyy, Izz)` about axes through `volume_centroid` parallel to x, y, z.
    pub inertia_diagonal: Vector3<f64>,
    pub slice_thickness: f64,
    /// Bounds of the finite input points.
    pub bounds: Bounds3,
    /// Voxels that passed the point-in-polygon test.
    pub voxel_count: usize,
    pub slices: Vec<SliceSummary>,
}

impl MassProperties {
    fn empty(bounds: Bounds3, slice_thickness: f64, slices: Vec<SliceSummary>) -> Self {
        Self {
            total_mass: 0.0,
            volume: 0.0,
            volume_centroid: None,
            inertia_diagonal: Vector3::zeros(),
            slice_thickness,
            bounds,
            voxel_count: 0,
            slices,
        }
    }

    pub fn degenerate_slices(&self) -> usize {
        self.slices.iter().filter(|s| s.is_degenerate()).count()
    }
}

/// Estimate mass properties with the built-in monotone-chain hull.
pub fn estimate(points: &[Vector3<f64>], cfg: &MassCfg, geom: GeomCfg) -> Result<MassProperties> {
    estimate_with(points, cfg, geom, &MonotoneChain::default())
}

/// Estimate mass properties with a caller-supplied hull provider.
///
/// Errors
/// - `InvalidSliceCount` if `cfg.num_slices == 0`.
/// - `EmptyPointCloud` if no finite point remains.
///
/// Slices whose hull cannot be formed never fail the call; they contribute
/// zero area and zero inertia. A cloud with no z-extent (within `eps`) yields
/// zero mass and no centroid.
pub fn estimate_with<H>(
    points: &[Vector3<f64>],
    cfg: &MassCfg,
    geom: GeomCfg,
    provider: &H,
) -> Result<MassProperties>
where
    H: HullProvider + Sync + ?Sized,
{
    if cfg.num_slices == 0 {
        return Err(GeomError::InvalidSliceCount(cfg.num_slices));
    }
    let finite: Vec<Vector3<f64>> = points
        .iter()
        .copied()
        .filter(|p| p.iter().all(|c| c.is_finite()))
        .collect();
    if finite.len() < points.len() {
        warn!(
            skipped = points.len() - finite.len(),
            "ignoring non-finite points"
        );
    }
    let bounds = bounds(&finite).ok_or(GeomError::EmptyPointCloud)?;
    let (z_min, z_max) = bounds.z_range();
    if z_max - z_min <= geom.eps {
        info!(points = finite.len(), "point cloud is flat, zero volume");
        return Ok(MassProperties::empty(bounds, 0.0, Vec::new()));
    }

    let bands = Bands {
        z_min,
        thickness: (z_max - z_min) / cfg.num_slices as f64,
        count: cfg.num_slices,
    };
    let h = bands.thickness;
    let slices = summarize_bands(&bands, bands.partition(&finite), provider, geom);

    let area: f64 = slices.iter().map(|s| s.area).sum();
    let volume = area * h;
    let weighted: Vec<(f64, Vector3<f64>)> = slices
        .iter()
        .filter_map(|s| s.centroid3().map(|c| (s.area, c)))
        .collect();
    let Some(centroid) = weighted_centroid(&weighted, geom) else {
        info!(slices = slices.len(), "no slice has area, zero volume");
        return Ok(MassProperties::empty(bounds, h, slices));
    };

    let (inertia_diagonal, voxel_count) = slice_inertias(&slices, h, cfg.density, centroid, geom)
        .into_iter()
        .fold((Vector3::zeros(), 0usize), |(acc, n), si| {
            (acc + si.diagonal, n + si.voxels)
        });

    let out = MassProperties {
        total_mass: volume * cfg.density,
        volume,
        volume_centroid: Some(centroid),
        inertia_diagonal,
        slice_thickness: h,
        bounds,
        voxel_count,
        slices,
    };
    info!(
        points = finite.len(),
        slices = cfg.num_slices,
        degenerate = out.degenerate_slices(),
        mass = out.total_mass,
        voxels = out.voxel_count,
        "mass properties estimated"
    );
    Ok(out)
}

#[cfg(feature = "parallel")]
fn summarize_bands<H>(
    bands: &Bands,
    groups: Vec<Vec<Vector2<f64>>>,
    provider: &H,
    geom: GeomCfg,
) -> Vec<SliceSummary>
where
    H: HullProvider + Sync + ?Sized,
{
    groups
        .into_par_iter()
        .enumerate()
        .map(|(i, pts)| summarize(i, bands.z_mid(i), &pts, provider, geom))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn summarize_bands<H>(
    bands: &Bands,
    groups: Vec<Vec<Vector2<f64>>>,
    provider: &H,
    geom: GeomCfg,
) -> Vec<SliceSummary>
where
    H: HullProvider + Sync + ?Sized,
{
    summarize_bands_seq(bands, groups, provider, geom)
}

#[cfg_attr(feature = "parallel", allow(dead_code))]
fn summarize_bands_seq<H>(
    bands: &Bands,
    groups: Vec<Vec<Vector2<f64>>>,
    provider: &H,
    geom: GeomCfg,
) -> Vec<SliceSummary>
where
    H: HullProvider + ?Sized,
{
    groups
        .into_iter()
        .enumerate()
        .map(|(i, pts)| summarize(i, bands.z_mid(i), &pts, provider, geom))
        .collect()
}

#[cfg(feature = "parallel")]
fn slice_inertias(
    slices: &[SliceSummary],
    h: f64,
    density: f64,
    about: Vector3<f64>,
    geom: GeomCfg,
) -> Vec<SliceInertia> {
    slices
        .par_iter()
        .map(|s| slice_inertia(s, h, density, about, geom))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn slice_inertias(
    slices: &[SliceSummary],
    h: f64,
    density: f64,
    about: Vector3<f64>,
    geom: GeomCfg,
) -> Vec<SliceInertia> {
    slice_inertias_seq(slices, h, density, about, geom)
}

#[cfg_attr(feature = "parallel", allow(dead_code))]
fn slice_inertias_seq(
    slices: &[SliceSummary],
    h: f64,
    density: f64,
    about: Vector3<f64>,
    geom: GeomCfg,
) -> Vec<SliceInertia> {
    slices
        .iter()
        .map(|s| slice_inertia(s, h, density, about, geom))
        .collect()
}

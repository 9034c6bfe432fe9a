//! JSON summary of one estimator run.

use massprops::mass::{MassCfg, MassProperties};
use nalgebra::Vector3;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MassReport {
    pub points: usize,
    pub num_slices: usize,
    pub density: f64,
    pub total_mass: f64,
    pub volume: f64,
    pub volume_centroid: Option<[f64; 3]>,
    /// `[Ixx, Iyy, Izz]` about the volume centroid.
    pub inertia_diagonal: [f64; 3],
    pub slice_thickness: f64,
    pub degenerate_slices: usize,
    pub voxel_count: usize,
    pub bounds_min: [f64; 3],
    pub bounds_max: [f64; 3],
}

#[inline]
fn arr(v: Vector3<f64>) -> [f64; 3] {
    [v.x, v.y, v.z]
}

impl MassReport {
    pub fn new(points: usize, cfg: &MassCfg, props: &MassProperties) -> Self {
        Self {
            points,
            num_slices: cfg.num_slices,
            density: cfg.density,
            total_mass: props.total_mass,
            volume: props.volume,
            volume_centroid: props.volume_centroid.map(arr),
            inertia_diagonal: arr(props.inertia_diagonal),
            slice_thickness: props.slice_thickness,
            degenerate_slices: props.degenerate_slices(),
            voxel_count: props.voxel_count,
            bounds_min: arr(props.bounds.min),
            bounds_max: arr(props.bounds.max),
        }
    }
}

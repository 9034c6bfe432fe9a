//! Mass properties of a point cloud by z-slicing.
//!
//! Purpose
//! - Estimate volume, mass, volume centroid and the principal-axis moments
//!   `(Ixx, Iyy, Izz)` of a body given only points on (or in) it, assuming
//!   uniform density.
//!
//! Pipeline
//! 1. Bounds of the finite points; `[z_min, z_max]` is cut into
//!    `num_slices` equal bands (a point at `z_max` joins the last band).
//! 2. Each band's xy-projections are hulled (`HullProvider`); area and
//!    centroid come from the shoelace routines in `geom2`.
//! 3. Volume centroid = area-weighted mean of slice centroids at band mid-height.
//! 4. Moments are voxel sums per slice (see `inertia`) about the volume centroid.
//!
//! Assumptions and conventions
//! - Each cross-section is treated as convex (its hull); concave bodies are
//!   overestimated.
//! - Accuracy improves with `num_slices`, at higher cost. There is no
//!   adaptive refinement.
//! - With the `parallel` feature, bands are processed on rayon's pool. Per-slice
//!   results are collected in band order and reduced sequentially, so output is
//!   identical to the sequential build.

mod bounds;
mod cfg;
mod estimate;
mod inertia;
pub mod sample;
mod slice;

pub use bounds::{bounds, Bounds3};
pub use cfg::MassCfg;
pub use estimate::{estimate, estimate_with, MassProperties};
pub use slice::SliceSummary;

#[cfg(test)]
mod tests;

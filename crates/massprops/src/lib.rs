//! Geometry and mass-properties kernel.
//!
//! Modules (leaf first)
//! - `vector`: magnitudes, unit vectors, projections, weighted centroids.
//! - `transform`: rotations, angle-axis, 4×4 homogeneous transforms, skew.
//! - `geom2`: winding number, intersections, distances, area/centroid, hull.
//! - `mass`: slice-and-hull estimator for mass, centroid and principal moments.
//!
//! All functions are pure. Tolerances travel in an explicit `GeomCfg`.

pub mod cfg;
pub mod error;
pub mod geom2;
pub mod mass;
pub mod transform;
pub mod vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::GeomCfg;
pub use error::{GeomError, Result};
pub use nalgebra::{Matrix3 as Mat3, Matrix4 as Mat4, Vector2 as Vec2, Vector3 as Vec3};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{
        convex_hull, point_in_polygon, point_in_triangle, polygon_area_centroid,
        ray_segment_intersection, segment_intersection, winding_number, HullProvider,
        Intersection, MonotoneChain, Ray, Segment,
    };
    pub use crate::mass::{estimate, estimate_with, MassCfg, MassProperties};
    pub use crate::transform::{
        angle_axis_from_rotation, apply, compose, rotation_angle_axis, skew,
    };
    pub use crate::{GeomCfg, GeomError};
    pub use nalgebra::{Matrix3 as Mat3, Matrix4 as Mat4, Vector2 as Vec2, Vector3 as Vec3};
}

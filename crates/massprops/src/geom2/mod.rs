//! 2D polygon geometry.
//!
//! Purpose
//! - Predicates and measures on plain vertex lists: winding number and
//!   point-in-polygon, point-in-triangle, segment and ray intersection,
//!   point-to-segment distance, shoelace area and centroid, convex hull.
//!
//! Conventions
//! - A polygon is a `&[Vector2<f64>]` of at least 3 vertices, implicitly closed.
//! - Every tolerance comes from the caller's `GeomCfg`.
//! - Endpoint and boundary handling is chosen per call through the
//!   `include_endpoints` / `exclude_collinear` flags.

mod hull;
mod intersect;
mod measure;
mod types;
mod winding;

pub use hull::{convex_hull, HullError, HullProvider, MonotoneChain};
pub use intersect::{ray_polygon_crossings, ray_segment_intersection, segment_intersection};
pub use measure::{
    cartesian_to_polar, distance_to_segment, polar_to_cartesian, polygon_area,
    polygon_area_centroid, polygon_centroid, signed_area, signed_distance_to_segment,
    triangle_centroid, triangle_signed_area,
};
pub use types::{Intersection, Ray, Segment};
pub use winding::{on_boundary, point_in_polygon, point_in_triangle, winding_number};

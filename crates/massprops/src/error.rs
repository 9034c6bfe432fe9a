//! Error types surfaced to callers.
//!
//! Contract violations (dimension mismatch, degenerate rotation axis, zero
//! slice count) are always returned. Per-slice geometric failures inside the
//! estimator never show up here; they are recovered as zero-weight slices.

use thiserror::Error;

/// Errors produced by vector, transform and estimator entry points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    /// Two runtime-sized vectors disagree on dimension.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// Rotation axis has (near) zero length.
    #[error("rotation axis has near-zero length ({norm:e})")]
    DegenerateAxis { norm: f64 },

    /// The estimator needs at least one slice.
    #[error("invalid slice count: {0} (must be > 0)")]
    InvalidSliceCount(usize),

    /// No finite points to estimate from.
    #[error("point cloud has no finite points")]
    EmptyPointCloud,
}

/// Result alias for fallible kernel operations.
pub type Result<T> = std::result::Result<T, GeomError>;

//! Rotations and 4×4 homogeneous transforms.
//!
//! Conventions
//! - Rotation matrices act on column vectors (`p' = R p`) and are right-handed.
//! - Orthonormality of inputs is assumed, not verified.
//! - A homogeneous transform packs `R` and `t` as `[[R, t], [0, 0, 0, 1]]`.
//! - `angle_axis_from_rotation` returns `theta ∈ [0, π]`; the pair
//!   `(-theta, -axis)` describes the same rotation and callers must not rely on
//!   one sign over the other.

use nalgebra::{Matrix3, Matrix4, Vector3, Vector4};

use crate::cfg::GeomCfg;
use crate::error::{GeomError, Result};

pub fn rotation_x(theta: f64) -> Matrix3<f64> {
    let (s, c) = theta.sin_cos();
    Matrix3::new(
        1.0, 0.0, 0.0, //
        0.0, c, -s, //
        0.0, s, c,
    )
}

pub fn rotation_y(theta: f64) -> Matrix3<f64> {
    let (s, c) = theta.sin_cos();
    Matrix3::new(
        c, 0.0, s, //
        0.0, 1.0, 0.0, //
        -s, 0.0, c,
    )
}

pub fn rotation_z(theta: f64) -> Matrix3<f64> {
    let (s, c) = theta.sin_cos();
    Matrix3::new(
        c, -s, 0.0, //
        s, c, 0.0, //
        0.0, 0.0, 1.0,
    )
}

/// Rotation by `theta` about `axis` (Rodrigues). The axis is normalized here.
///
/// Fails with `DegenerateAxis` if `|axis| <= eps`.
pub fn rotation_angle_axis(theta: f64, axis: Vector3<f64>, cfg: GeomCfg) -> Result<Matrix3<f64>> {
    let norm = axis.norm();
    if !norm.is_finite() || norm <= cfg.eps {
        return Err(GeomError::DegenerateAxis { norm });
    }
    let k = skew(axis / norm);
    let (s, c) = theta.sin_cos();
    Ok(Matrix3::identity() + k * s + k * k * (1.0 - c))
}

/// Recover `(theta, axis)` from a rotation matrix via `acos((tr R - 1) / 2)`.
///
/// - `theta ≈ 0`: any axis is valid; returns the x axis.
/// - `theta ≈ π`: the antisymmetric part vanishes, so the axis is read from
///   `(R + I) / 2 = a aᵀ` instead.
pub fn angle_axis_from_rotation(r: &Matrix3<f64>, cfg: GeomCfg) -> (f64, Vector3<f64>) {
    let cos = ((r.trace() - 1.0) / 2.0).clamp(-1.0, 1.0);
    let theta = cos.acos();
    if theta <= cfg.eps {
        return (0.0, Vector3::x());
    }
    // w = 2 sin(theta) * axis
    let w = Vector3::new(
        r[(2, 1)] - r[(1, 2)],
        r[(0, 2)] - r[(2, 0)],
        r[(1, 0)] - r[(0, 1)],
    );
    if theta.sin() > cfg.eps {
        return (theta, w.normalize());
    }
    let b = (r + Matrix3::identity()) * 0.5;
    let i = (0..3)
        .max_by(|&p, &q| {
            b[(p, p)]
                .partial_cmp(&b[(q, q)])
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .unwrap_or(0);
    let ai = b[(i, i)].max(0.0).sqrt();
    if ai <= cfg.eps {
        return (theta, Vector3::x());
    }
    let mut axis = Vector3::new(b[(i, 0)], b[(i, 1)], b[(i, 2)]) / ai;
    if axis.dot(&w) < 0.0 {
        axis = -axis;
    }
    (theta, axis.normalize())
}

/// Pack rotation `r` and translation `t` into a 4×4 homogeneous transform.
pub fn compose(r: &Matrix3<f64>, t: &Vector3<f64>) -> Matrix4<f64> {
    Matrix4::new(
        r[(0, 0)], r[(0, 1)], r[(0, 2)], t.x, //
        r[(1, 0)], r[(1, 1)], r[(1, 2)], t.y, //
        r[(2, 0)], r[(2, 1)], r[(2, 2)], t.z, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Split a homogeneous transform back into `(R, t)`.
pub fn decompose(h: &Matrix4<f64>) -> (Matrix3<f64>, Vector3<f64>) {
    let r = Matrix3::new(
        h[(0, 0)], h[(0, 1)], h[(0, 2)], //
        h[(1, 0)], h[(1, 1)], h[(1, 2)], //
        h[(2, 0)], h[(2, 1)], h[(2, 2)],
    );
    (r, Vector3::new(h[(0, 3)], h[(1, 3)], h[(2, 3)]))
}

/// Apply `h` to a point: extend with 1, multiply, truncate back to 3D.
#[inline]
pub fn apply(h: &Matrix4<f64>, p: &Vector3<f64>) -> Vector3<f64> {
    let q = h * Vector4::new(p.x, p.y, p.z, 1.0);
    Vector3::new(q.x, q.y, q.z)
}

#[inline]
pub fn rotate(r: &Matrix3<f64>, p: &Vector3<f64>) -> Vector3<f64> {
    r * p
}

/// Inverse of a rigid transform, `[[Rᵀ, -Rᵀ t], [0, 1]]`. Assumes `R` orthonormal.
pub fn invert_homogeneous(h: &Matrix4<f64>) -> Matrix4<f64> {
    let (r, t) = decompose(h);
    let rt = r.transpose();
    compose(&rt, &(-(rt * t)))
}

/// Cross-product matrix: `skew(v) * w == v × w`.
#[inline]
pub fn skew(v: Vector3<f64>) -> Matrix3<f64> {
    Matrix3::new(
        0.0, -v.z, v.y, //
        v.z, 0.0, -v.x, //
        -v.y, v.x, 0.0,
    )
}

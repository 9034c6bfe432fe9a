//! Elementary vector algebra shared by every other module.
//!
//! Conventions
//! - Static-size helpers are generic over `SVector<f64, D>`; mixing 2D and 3D
//!   there is a type error.
//! - Runtime-size inputs (`DVector<f64>`) go through the `dyn_*` variants, which
//!   check dimensions and return `GeomError::DimensionMismatch`.
//! - Zero-length handling is explicit: anything that would divide by a norm at
//!   or below `cfg.eps` returns `None`.

use nalgebra::{DVector, SVector};

use crate::cfg::GeomCfg;
use crate::error::{GeomError, Result};

#[inline]
pub fn magnitude<const D: usize>(v: &SVector<f64, D>) -> f64 {
    v.norm()
}

/// Unit vector along `v`, or `None` if `|v| <= eps` (or not finite).
#[inline]
pub fn unit_vector<const D: usize>(v: &SVector<f64, D>, cfg: GeomCfg) -> Option<SVector<f64, D>> {
    let norm = v.norm();
    if !norm.is_finite() || norm <= cfg.eps {
        return None;
    }
    Some(*v / norm)
}

/// Signed length of `v` along `onto`. `None` if `onto` is degenerate.
#[inline]
pub fn scalar_projection<const D: usize>(
    v: &SVector<f64, D>,
    onto: &SVector<f64, D>,
    cfg: GeomCfg,
) -> Option<f64> {
    unit_vector(onto, cfg).map(|u| v.dot(&u))
}

/// Component of `v` along `onto`.
#[inline]
pub fn vector_projection<const D: usize>(
    v: &SVector<f64, D>,
    onto: &SVector<f64, D>,
    cfg: GeomCfg,
) -> Option<SVector<f64, D>> {
    unit_vector(onto, cfg).map(|u| u * v.dot(&u))
}

#[inline]
pub fn distance<const D: usize>(a: &SVector<f64, D>, b: &SVector<f64, D>) -> f64 {
    (a - b).norm()
}

/// Mass-weighted average of `(mass, point)` pairs.
///
/// Returns `None` when the total mass is negligible relative to the summed
/// magnitudes, `|Σm| <= eps * Σ|m|` (including the empty input). The test is
/// independent of the unit the masses are given in.
pub fn weighted_centroid<const D: usize>(
    items: &[(f64, SVector<f64, D>)],
    cfg: GeomCfg,
) -> Option<SVector<f64, D>> {
    let total: f64 = items.iter().map(|(m, _)| m).sum();
    let scale: f64 = items.iter().map(|(m, _)| m.abs()).sum();
    if negligible_mass(total, scale, cfg) {
        return None;
    }
    let acc = items
        .iter()
        .fold(SVector::<f64, D>::zeros(), |acc, (m, p)| acc + p * *m);
    Some(acc / total)
}

#[inline]
fn negligible_mass(total: f64, scale: f64, cfg: GeomCfg) -> bool {
    !(total.abs() > cfg.eps * scale)
}

#[inline]
pub fn approx_eq(a: f64, b: f64, cfg: GeomCfg) -> bool {
    (a - b).abs() <= cfg.eps
}

/// Component-wise absolute-tolerance comparison.
#[inline]
pub fn approx_eq_vec<const D: usize>(a: &SVector<f64, D>, b: &SVector<f64, D>, cfg: GeomCfg) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| approx_eq(*x, *y, cfg))
}

#[inline]
fn check_dims(expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(GeomError::DimensionMismatch { expected, found })
    }
}

/// Convert a runtime-size vector into a fixed-size one.
pub fn to_fixed<const D: usize>(v: &DVector<f64>) -> Result<SVector<f64, D>> {
    check_dims(D, v.len())?;
    Ok(SVector::<f64, D>::from_iterator(v.iter().copied()))
}

pub fn dyn_unit_vector(v: &DVector<f64>, cfg: GeomCfg) -> Option<DVector<f64>> {
    let norm = v.norm();
    if !norm.is_finite() || norm <= cfg.eps {
        return None;
    }
    Some(v / norm)
}

pub fn dyn_distance(a: &DVector<f64>, b: &DVector<f64>) -> Result<f64> {
    check_dims(a.len(), b.len())?;
    Ok((a - b).norm())
}

/// Runtime-size `scalar_projection`; the outer error is the dimension check.
pub fn dyn_scalar_projection(
    v: &DVector<f64>,
    onto: &DVector<f64>,
    cfg: GeomCfg,
) -> Result<Option<f64>> {
    check_dims(onto.len(), v.len())?;
    Ok(dyn_unit_vector(onto, cfg).map(|u| v.dot(&u)))
}

/// Runtime-size `weighted_centroid`. All points must share the first point's dimension.
pub fn dyn_weighted_centroid(
    items: &[(f64, DVector<f64>)],
    cfg: GeomCfg,
) -> Result<Option<DVector<f64>>> {
    let Some((_, first)) = items.first() else {
        return Ok(None);
    };
    let dim = first.len();
    let mut acc = DVector::<f64>::zeros(dim);
    let mut total = 0.0;
    let mut scale = 0.0;
    for (m, p) in items {
        check_dims(dim, p.len())?;
        acc += p * *m;
        total += m;
        scale += m.abs();
    }
    if negligible_mass(total, scale, cfg) {
        return Ok(None);
    }
    Ok(Some(acc / total))
}

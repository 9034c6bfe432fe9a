use super::sample::{sample_box, sample_cylinder, CylinderCfg};
use super::slice::Bands;
use super::*;
use crate::geom2::{HullError, HullProvider};
use crate::{GeomCfg, GeomError};
use nalgebra::{vector, Vector2, Vector3};
use std::f64::consts::PI;

fn rel_err(got: f64, want: f64) -> f64 {
    ((got - want) / want).abs()
}

/// 2 × 1 × 1 box lattice with four z-layers per slice.
fn box_cloud(slices: usize) -> Vec<Vector3<f64>> {
    sample_box(vector![2.0, 1.0, 1.0], [21, 11, 4 * slices + 1])
}

#[test]
fn zero_slices_is_rejected() {
    let pts = box_cloud(4);
    let cfg = MassCfg::default().with_slices(0);
    assert_eq!(
        estimate(&pts, &cfg, GeomCfg::default()),
        Err(GeomError::InvalidSliceCount(0))
    );
}

#[test]
fn empty_and_non_finite_clouds_are_rejected() {
    let cfg = MassCfg::default();
    let geom = GeomCfg::default();
    assert_eq!(estimate(&[], &cfg, geom), Err(GeomError::EmptyPointCloud));
    let nan = [vector![f64::NAN, 0.0, 0.0], vector![0.0, f64::INFINITY, 1.0]];
    assert_eq!(estimate(&nan, &cfg, geom), Err(GeomError::EmptyPointCloud));
}

#[test]
fn bands_clamp_top_point_into_last_band() {
    let bands = Bands {
        z_min: 0.0,
        thickness: 0.25,
        count: 4,
    };
    assert_eq!(bands.index_of(0.0), 0);
    assert_eq!(bands.index_of(0.3), 1);
    assert_eq!(bands.index_of(1.0), 3);
    assert!((bands.z_mid(3) - 0.875).abs() < 1e-12);
    let groups = bands.partition(&[vector![1.0, 2.0, 1.0], vector![0.0, 0.0, 0.0]]);
    assert_eq!(groups[3], vec![Vector2::new(1.0, 2.0)]);
    assert_eq!(groups[0].len(), 1);
}

#[test]
fn bounds_of_cloud() {
    let pts = [vector![1.0, -2.0, 3.0], vector![-1.0, 4.0, 0.5]];
    let b = bounds(&pts).unwrap();
    assert_eq!(b.min, vector![-1.0, -2.0, 0.5]);
    assert_eq!(b.max, vector![1.0, 4.0, 3.0]);
    assert_eq!(b.center(), vector![0.0, 1.0, 1.75]);
    assert_eq!(b.extent(), vector![2.0, 6.0, 2.5]);
    assert!(bounds(&[]).is_none());
}

#[test]
fn small_cube_scales_like_unit_cube() {
    let geom = GeomCfg::default();
    let cfg = MassCfg::default().with_slices(4);
    let unit = estimate(&sample_box(vector![1.0, 1.0, 1.0], [6, 6, 21]), &cfg, geom).unwrap();
    for side in [1e-3, 2e-4] {
        let pts = sample_box(vector![side, side, side], [6, 6, 21]);
        let props = estimate(&pts, &cfg, geom).unwrap();
        assert_eq!(props.degenerate_slices(), 0, "side={side}");
        assert!(rel_err(props.volume, side.powi(3)) < 1e-9, "side={side}");
        let c = props.volume_centroid.unwrap();
        assert!((c / side - vector![0.5, 0.5, 0.5]).norm() < 1e-9, "side={side}");
        assert_eq!(props.voxel_count, unit.voxel_count);
        for k in 0..3 {
            let want = unit.inertia_diagonal[k] * side.powi(5);
            assert!(rel_err(props.inertia_diagonal[k], want) < 1e-6, "side={side} axis={k}");
        }
    }
    assert_eq!(unit.voxel_count, 64);
}

#[test]
fn box_mass_centroid_and_moments() {
    let geom = GeomCfg::default();
    let cfg = MassCfg::default().with_slices(10).with_density(3.0);
    let props = estimate(&box_cloud(10), &cfg, geom).unwrap();

    assert!((props.volume - 2.0).abs() < 1e-9);
    assert!((props.total_mass - 6.0).abs() < 1e-9);
    let c = props.volume_centroid.unwrap();
    assert!((c - vector![1.0, 0.5, 0.5]).norm() < 1e-9);
    assert_eq!(props.degenerate_slices(), 0);
    assert!((props.slice_thickness - 0.1).abs() < 1e-12);
    // 20 × 10 voxels per slice, ten slices.
    assert_eq!(props.voxel_count, 2000);

    // Solid box: I = m (b² + c²) / 12 and cyclic.
    let m = props.total_mass;
    let want = vector![
        m * (1.0 + 1.0) / 12.0,
        m * (4.0 + 1.0) / 12.0,
        m * (4.0 + 1.0) / 12.0
    ];
    for k in 0..3 {
        assert!(
            rel_err(props.inertia_diagonal[k], want[k]) < 0.03,
            "axis {k}: got {}, want {}",
            props.inertia_diagonal[k],
            want[k]
        );
    }
}

#[test]
fn cylinder_centroid_and_moments_converge() {
    let geom = GeomCfg::default();
    let (r, h) = (1.0, 2.0);
    let cloud = sample_cylinder(
        CylinderCfg {
            radius: r,
            height: h,
            rings: 241,
            per_ring: 64,
            ..CylinderCfg::default()
        },
        11,
    );

    let coarse = estimate(&cloud, &MassCfg::default().with_slices(12), geom).unwrap();
    let fine = estimate(&cloud, &MassCfg::default().with_slices(60), geom).unwrap();

    for props in [&coarse, &fine] {
        let c = props.volume_centroid.unwrap();
        assert!((c.z - h / 2.0).abs() < 0.02, "centroid z = {}", c.z);
        assert!(c.x.abs() < 0.01 && c.y.abs() < 0.01);
        assert!(rel_err(props.volume, PI * r * r * h) < 0.01);
        assert_eq!(props.degenerate_slices(), 0);
    }

    let izz_err = |p: &MassProperties| rel_err(p.inertia_diagonal.z, 0.5 * p.total_mass * r * r);
    assert!(izz_err(&coarse) < 0.15, "coarse Izz error {}", izz_err(&coarse));
    assert!(izz_err(&fine) < 0.03, "fine Izz error {}", izz_err(&fine));

    let ixx_want = fine.total_mass * (3.0 * r * r + h * h) / 12.0;
    assert!(rel_err(fine.inertia_diagonal.x, ixx_want) < 0.05);
    assert!(rel_err(fine.inertia_diagonal.y, ixx_want) < 0.05);
}

#[test]
fn rerun_is_identical() {
    let geom = GeomCfg::default();
    let cloud = sample_cylinder(
        CylinderCfg {
            rings: 60,
            jitter: 0.02,
            ..CylinderCfg::default()
        },
        3,
    );
    let cfg = MassCfg::default().with_slices(20);
    let a = estimate(&cloud, &cfg, geom).unwrap();
    let b = estimate(&cloud, &cfg, geom).unwrap();
    assert_eq!(a, b);
}

#[test]
fn duplicate_points_do_not_change_result() {
    let geom = GeomCfg::default();
    let cloud = box_cloud(5);
    let mut doubled = cloud.clone();
    doubled.extend(cloud.iter().rev().copied());
    let cfg = MassCfg::default().with_slices(5);
    let a = estimate(&cloud, &cfg, geom).unwrap();
    let b = estimate(&doubled, &cfg, geom).unwrap();
    assert!((a.total_mass - b.total_mass).abs() < 1e-12);
    assert!((a.inertia_diagonal - b.inertia_diagonal).norm() < 1e-12);
    assert_eq!(b.slices[0].point_count, 2 * a.slices[0].point_count);
}

#[test]
fn needle_slices_are_zero_weight_not_errors() {
    let geom = GeomCfg::default();
    // Box filling bands 0..10, then a vertical line of points up to z = 2.
    let mut cloud = sample_box(vector![1.0, 1.0, 0.975], [6, 6, 40]);
    cloud.extend((1..=40).map(|k| vector![0.5, 0.5, 1.0 + k as f64 / 40.0]));
    let props = estimate(&cloud, &MassCfg::default().with_slices(20), geom).unwrap();

    assert_eq!(props.degenerate_slices(), 10);
    assert!(props.slices[10..].iter().all(|s| s.area == 0.0 && s.hull.is_empty()));
    assert!((props.volume - 1.0).abs() < 1e-9);
    let c = props.volume_centroid.unwrap();
    assert!((c - vector![0.5, 0.5, 0.5]).norm() < 1e-9);
}

#[test]
fn flat_cloud_has_no_volume() {
    let cloud = sample_box(vector![1.0, 1.0, 0.0], [5, 5, 2]);
    let props = estimate(&cloud, &MassCfg::default(), GeomCfg::default()).unwrap();
    assert_eq!(props.total_mass, 0.0);
    assert!(props.volume_centroid.is_none());
    assert!(props.slices.is_empty());
}

struct AlwaysFails;

impl HullProvider for AlwaysFails {
    fn hull(&self, _points: &[Vector2<f64>]) -> Result<Vec<Vector2<f64>>, HullError> {
        Err(HullError::NonFinite)
    }
}

#[test]
fn failing_hull_provider_degrades_to_zero_mass() {
    let cloud = box_cloud(4);
    let cfg = MassCfg::default().with_slices(4);
    let props = estimate_with(&cloud, &cfg, GeomCfg::default(), &AlwaysFails).unwrap();
    assert_eq!(props.total_mass, 0.0);
    assert!(props.volume_centroid.is_none());
    assert_eq!(props.degenerate_slices(), 4);
    assert_eq!(props.inertia_diagonal, Vector3::zeros());
}

//! Deterministic synthetic point clouds (cylinders and boxes).
//!
//! Used by tests, benches and the CLI `cylinder` command. Cylinder draws are
//! reproducible from a seed: each lateral ring gets a random phase and an
//! optional radial jitter from one `StdRng`.

use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Cylinder sampler configuration. The axis is +z, the base sits at `z = 0`.
#[derive(Clone, Copy, Debug)]
pub struct CylinderCfg {
    pub radius: f64,
    pub height: f64,
    /// Lateral rings, evenly spaced from base to top (inclusive).
    pub rings: usize,
    pub per_ring: usize,
    /// Concentric rings filling each cap.
    pub cap_rings: usize,
    /// Relative radial jitter amplitude; radii are `radius * (1 + u)`, `u ∈ [-jitter, jitter]`.
    pub jitter: f64,
}

impl Default for CylinderCfg {
    fn default() -> Self {
        Self {
            radius: 1.0,
            height: 2.0,
            rings: 200,
            per_ring: 64,
            cap_rings: 8,
            jitter: 0.0,
        }
    }
}

/// Points on the lateral surface and both caps of a cylinder.
pub fn sample_cylinder(cfg: CylinderCfg, seed: u64) -> Vec<Vector3<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let rings = cfg.rings.max(2);
    let per_ring = cfg.per_ring.max(3);
    let jitter = cfg.jitter.max(0.0);
    let dtheta = std::f64::consts::TAU / per_ring as f64;
    let mut out = Vec::with_capacity(rings * per_ring + 2 * (cfg.cap_rings * per_ring + 1));

    for k in 0..rings {
        let z = cfg.height * k as f64 / (rings - 1) as f64;
        let phase = rng.gen::<f64>() * dtheta;
        for j in 0..per_ring {
            let u = if jitter > 0.0 {
                rng.gen_range(-jitter..=jitter)
            } else {
                0.0
            };
            let r = cfg.radius * (1.0 + u);
            let (s, c) = (phase + j as f64 * dtheta).sin_cos();
            out.push(Vector3::new(r * c, r * s, z));
        }
    }
    for z in [0.0, cfg.height] {
        out.push(Vector3::new(0.0, 0.0, z));
        for m in 1..=cfg.cap_rings {
            let r = cfg.radius * m as f64 / (cfg.cap_rings + 1) as f64;
            for j in 0..per_ring {
                let (s, c) = (j as f64 * dtheta).sin_cos();
                out.push(Vector3::new(r * c, r * s, z));
            }
        }
    }
    out
}

/// Regular lattice filling `[0, size.x] × [0, size.y] × [0, size.z]` with
/// `steps` points along each axis (both ends included).
pub fn sample_box(size: Vector3<f64>, steps: [usize; 3]) -> Vec<Vector3<f64>> {
    let [nx, ny, nz] = steps.map(|s| s.max(2));
    let mut out = Vec::with_capacity(nx * ny * nz);
    for k in 0..nz {
        let z = size.z * k as f64 / (nz - 1) as f64;
        for j in 0..ny {
            let y = size.y * j as f64 / (ny - 1) as f64;
            for i in 0..nx {
                let x = size.x * i as f64 / (nx - 1) as f64;
                out.push(Vector3::new(x, y, z));
            }
        }
    }
    out
}

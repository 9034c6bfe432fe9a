//! Print how the estimator converges on a sampled cylinder as slices increase.
//!
//! Usage:
//!   cargo run -p massprops --release --example cylinder_convergence
//!   cargo run -p massprops --release --example cylinder_convergence -- 0.5 3.0
//!
//! Arguments are `radius height` (defaults 1.0 2.0). Each row compares the
//! estimate with the solid cylinder's closed forms: `m = ρπr²h`,
//! `Izz = m r²/2`, `Ixx = m(3r² + h²)/12`.

use massprops::mass::sample::{sample_cylinder, CylinderCfg};
use massprops::mass::{estimate, MassCfg};
use massprops::GeomCfg;
use std::f64::consts::PI;

fn main() {
    let mut args = std::env::args().skip(1).map(|a| a.parse::<f64>());
    let radius = args.next().and_then(Result::ok).unwrap_or(1.0);
    let height = args.next().and_then(Result::ok).unwrap_or(2.0);

    let pts = sample_cylinder(
        CylinderCfg {
            radius,
            height,
            ..CylinderCfg::default()
        },
        7,
    );
    let mass = PI * radius * radius * height;
    let izz = mass * radius * radius / 2.0;
    let ixx = mass * (3.0 * radius * radius + height * height) / 12.0;
    println!("points={} exact: mass={mass:.4} Ixx={ixx:.4} Izz={izz:.4}", pts.len());
    println!("{:>6} {:>10} {:>10} {:>10} {:>10}", "slices", "mass", "cz", "Ixx", "Izz");
    for slices in [5, 10, 25, 50, 100] {
        let cfg = MassCfg::default().with_slices(slices);
        match estimate(&pts, &cfg, GeomCfg::default()) {
            Ok(p) => {
                let cz = p.volume_centroid.map_or(f64::NAN, |c| c.z);
                println!(
                    "{:>6} {:>10.4} {:>10.4} {:>10.4} {:>10.4}",
                    slices, p.total_mass, cz, p.inertia_diagonal.x, p.inertia_diagonal.z
                );
            }
            Err(e) => eprintln!("slices={slices}: {e}"),
        }
    }
}

mod points;
mod provenance;
mod report;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use massprops::mass::sample::{sample_cylinder, CylinderCfg};
use massprops::mass::{estimate, MassCfg};
use massprops::GeomCfg;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::provenance::Provenance;
use crate::report::MassReport;

#[derive(Parser)]
#[command(name = "massprops")]
#[command(about = "Mass properties of point clouds by slicing and convex hulls")]
struct Cmd {
    /// Optional run label; propagated to provenance sidecars and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Estimate mass, volume centroid and principal moments of a CSV point cloud (x,y,z)
    Mass {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 100)]
        slices: usize,
        #[arg(long, default_value_t = 1.0)]
        density: f64,
        /// Absolute tolerance for geometric comparisons
        #[arg(long, default_value_t = 1e-7)]
        eps: f64,
    },
    /// Write a synthetic cylinder point cloud (lateral rings plus filled caps)
    Cylinder {
        #[arg(long, default_value_t = 1.0)]
        radius: f64,
        #[arg(long, default_value_t = 2.0)]
        height: f64,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 200)]
        rings: usize,
        #[arg(long, default_value_t = 64)]
        per_ring: usize,
        #[arg(long, default_value_t = 8)]
        cap_rings: usize,
        /// Relative radial jitter: lateral radii are `radius * (1 + u)`, `u` uniform in `[-jitter, jitter]`
        #[arg(long, default_value_t = 0.0)]
        jitter: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Mass {
            input,
            out,
            slices,
            density,
            eps,
        } => mass(
            &input,
            &out,
            MassCfg::default().with_slices(slices).with_density(density),
            GeomCfg::with_eps(eps),
            cmd.tag,
        ),
        Action::Cylinder {
            radius,
            height,
            out,
            rings,
            per_ring,
            cap_rings,
            jitter,
            seed,
        } => cylinder(
            CylinderCfg {
                radius,
                height,
                rings,
                per_ring,
                cap_rings,
                jitter,
            },
            seed,
            &out,
            cmd.tag,
        ),
        Action::Report => report(cmd.tag),
    }
}

fn mass(input: &Path, out: &Path, cfg: MassCfg, geom: GeomCfg, tag: Option<String>) -> Result<()> {
    tracing::info!(
        input = %input.display(),
        out = %out.display(),
        slices = cfg.num_slices,
        density = cfg.density,
        tag = ?tag,
        "mass"
    );
    let points = points::read_points_csv(input)?;
    let props = estimate(&points, &cfg, geom)
        .with_context(|| format!("estimating mass properties of {}", input.display()))?;
    let summary = MassReport::new(points.len(), &cfg, &props);

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&summary)?)
        .with_context(|| format!("writing {}", out.display()))?;

    Provenance::new(
        json!({
            "input": input.to_string_lossy(),
            "num_slices": cfg.num_slices,
            "density": cfg.density,
            "eps": geom.eps,
        }),
        tag,
    )
    .write_for(out)?;
    Ok(())
}

fn cylinder(cfg: CylinderCfg, seed: u64, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(
        radius = cfg.radius,
        height = cfg.height,
        rings = cfg.rings,
        per_ring = cfg.per_ring,
        seed,
        out = %out.display(),
        "cylinder"
    );
    let pts = sample_cylinder(cfg, seed);
    points::write_points_csv(out, &pts)?;
    tracing::info!(points = pts.len(), "cylinder_written");

    Provenance::new(
        json!({
            "radius": cfg.radius,
            "height": cfg.height,
            "rings": cfg.rings,
            "per_ring": cfg.per_ring,
            "cap_rings": cfg.cap_rings,
            "jitter": cfg.jitter,
            "seed": seed,
        }),
        tag,
    )
    .write_for(out)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let block = Provenance::new(json!({}), tag);
    println!("{}", serde_json::to_string_pretty(&block)?);
    Ok(())
}

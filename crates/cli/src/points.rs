//! Point-cloud CSV I/O (columns `x`, `y`, `z`).

use anyhow::{bail, Context, Result};
use nalgebra::Vector3;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Read a point cloud from a CSV with a header containing `x`, `y`, `z`.
/// Integer columns are accepted and cast to f64; nulls are rejected.
pub fn read_points_csv(path: &Path) -> Result<Vec<Vector3<f64>>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
            col("z").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x,y,z from {}", path.display()))?;

    let mut axes: Vec<Vec<f64>> = Vec::with_capacity(3);
    for name in ["x", "y", "z"] {
        let values: Option<Vec<f64>> = df.column(name)?.f64()?.into_iter().collect();
        let Some(values) = values else {
            bail!("column {name} in {} contains nulls", path.display());
        };
        axes.push(values);
    }
    let points = axes[0]
        .iter()
        .zip(&axes[1])
        .zip(&axes[2])
        .map(|((x, y), z)| Vector3::new(*x, *y, *z))
        .collect();
    Ok(points)
}

/// Write points as a CSV with header `x,y,z`.
pub fn write_points_csv(path: &Path, points: &[Vector3<f64>]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let zs: Vec<f64> = points.iter().map(|p| p.z).collect();
    let mut df = df!("x" => xs, "y" => ys, "z" => zs)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file).finish(&mut df)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn written_points_read_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cloud").join("pts.csv");
        let pts = vec![
            Vector3::new(0.0, 1.5, -2.0),
            Vector3::new(3.25, 0.0, 1.0),
        ];
        write_points_csv(&path, &pts).unwrap();
        let back = read_points_csv(&path).unwrap();
        assert_eq!(back, pts);
    }

    #[test]
    fn integer_columns_and_extra_columns_are_accepted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ints.csv");
        std::fs::write(&path, "id,x,y,z\n1,0,0,0\n2,1,2,3\n").unwrap();
        let back = read_points_csv(&path).unwrap();
        assert_eq!(back[1], Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn missing_column_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "x,y\n0,0\n").unwrap();
        assert!(read_points_csv(&path).is_err());
    }
}

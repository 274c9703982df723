//! Polygon serialization for stdout and output files.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::*;
use polyseq::geom2::{area, is_convex, longest_side, perimeter, shortest_side};
use polyseq::Polygon;
use serde_json::{json, Value};

/// `[[[x, y], ...], ...]`, one vertex list per polygon.
pub fn polygons_json(polys: &[Polygon]) -> Value {
    Value::Array(
        polys
            .iter()
            .map(|p| json!(p.vertices().iter().map(|v| [v.x, v.y]).collect::<Vec<_>>()))
            .collect(),
    )
}

/// One row of measurements per polygon.
pub fn measurements(polys: &[Polygon]) -> PolarsResult<DataFrame> {
    let centroids: Vec<_> = polys.iter().map(Polygon::centroid).collect();
    df!(
        "index" => (0..polys.len() as u32).collect::<Vec<u32>>(),
        "vertices" => polys.iter().map(|p| p.vertex_count() as u32).collect::<Vec<u32>>(),
        "area" => polys.iter().map(area).collect::<Vec<f64>>(),
        "perimeter" => polys.iter().map(perimeter).collect::<Vec<f64>>(),
        "shortest_side" => polys.iter().map(shortest_side).collect::<Vec<f64>>(),
        "longest_side" => polys.iter().map(longest_side).collect::<Vec<f64>>(),
        "convex" => polys.iter().map(is_convex).collect::<Vec<bool>>(),
        "centroid_x" => centroids.iter().map(|c| c.x).collect::<Vec<f64>>(),
        "centroid_y" => centroids.iter().map(|c| c.y).collect::<Vec<f64>>(),
    )
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

/// Write `polys` to `path`: a measurement table for `.csv`, vertex lists
/// otherwise.
pub fn write(path: &Path, polys: &[Polygon]) -> Result<()> {
    ensure_parent(path)?;
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        let mut df = measurements(polys)?;
        let mut file =
            File::create(path).with_context(|| format!("creating {}", path.display()))?;
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut df)?;
    } else {
        std::fs::write(path, serde_json::to_vec_pretty(&polygons_json(polys))?)
            .with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(())
}

use anyhow::{Context, Result};
use planar::{round_to, Point, Polygon, SegmentIntersection};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Metrics of one shape, as written by `measure`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ShapeReport {
    pub index: usize,
    pub kind: String,
    pub vertices: usize,
    pub area: f64,
    pub perimeter: f64,
    pub convex: bool,
    pub sides: Vec<f64>,
}

impl ShapeReport {
    pub fn measure(index: usize, shape: &mut Polygon, decimals: Option<u32>) -> Self {
        let r = |v: f64| decimals.map_or(v, |d| round_to(v, d));
        Self {
            index,
            kind: shape.kind().name().to_string(),
            vertices: shape.points().len(),
            area: r(shape.area()),
            perimeter: r(shape.perimeter()),
            convex: shape.is_convex(),
            sides: shape.side_lengths().into_iter().map(r).collect(),
        }
    }
}

/// Result of `segment`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct SegmentReport {
    pub status: String,
    pub point: Option<[f64; 2]>,
}

impl From<SegmentIntersection> for SegmentReport {
    fn from(hit: SegmentIntersection) -> Self {
        Self {
            status: hit.status().as_str().to_string(),
            point: hit.point().map(<[f64; 2]>::from),
        }
    }
}

pub fn points_json(points: &[Point]) -> Vec<[f64; 2]> {
    points.iter().map(|p| <[f64; 2]>::from(*p)).collect()
}

/// Pretty-print `value` as JSON to `path`, creating parent directories.
pub fn write_json<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

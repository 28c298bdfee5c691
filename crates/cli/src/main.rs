use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod report;
mod shapes;

use report::{points_json, write_json, SegmentReport, ShapeReport};
use shapes::{load_shapes, parse_point, parse_segment, pick};

#[derive(Parser)]
#[command(name = "planar")]
#[command(about = "Measure, test, and intersect 2D shapes described in JSON")]
struct Cmd {
    /// Log at debug level
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Area, perimeter, convexity, and side lengths of every shape in a file
    Measure {
        #[arg(long)]
        input: PathBuf,
        /// Write the report here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        /// Round metrics to this many decimal places
        #[arg(long)]
        decimals: Option<u32>,
    },
    /// Whether a point lies inside (or on) one shape
    Contains {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        shape: usize,
        /// X,Y
        #[arg(long, allow_hyphen_values = true)]
        point: String,
    },
    /// Edge intersection points between two shapes
    Intersect {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        a: usize,
        #[arg(long)]
        b: usize,
    },
    /// Classify two segments, each given as X0,Y0,X1,Y1
    Segment {
        #[arg(long, allow_hyphen_values = true)]
        first: String,
        #[arg(long, allow_hyphen_values = true)]
        second: String,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Measure {
            input,
            out,
            decimals,
        } => measure(&input, out.as_deref(), decimals),
        Action::Contains {
            input,
            shape,
            point,
        } => {
            println!("{}", contains(&input, shape, &point)?);
            Ok(())
        }
        Action::Intersect { input, a, b } => {
            let hits = intersect(&input, a, b)?;
            println!("{}", serde_json::to_string(&points_json(&hits))?);
            Ok(())
        }
        Action::Segment { first, second } => {
            let rep = segment(&first, &second)?;
            println!("{}", serde_json::to_string(&rep)?);
            Ok(())
        }
    }
}

fn measure(input: &Path, out: Option<&Path>, decimals: Option<u32>) -> Result<()> {
    tracing::info!(input = %input.display(), decimals = ?decimals, "measure");
    let reports = measure_reports(input, decimals)?;
    match out {
        Some(path) => {
            write_json(path, &reports)?;
            tracing::info!(shapes = reports.len(), out = %path.display(), "report written");
        }
        None => println!("{}", serde_json::to_string_pretty(&reports)?),
    }
    Ok(())
}

fn measure_reports(input: &Path, decimals: Option<u32>) -> Result<Vec<ShapeReport>> {
    let specs = load_shapes(input)?;
    Ok(specs
        .iter()
        .enumerate()
        .map(|(i, spec)| ShapeReport::measure(i, &mut spec.build(), decimals))
        .collect())
}

fn contains(input: &Path, shape: usize, point: &str) -> Result<bool> {
    let p = parse_point(point)?;
    tracing::info!(input = %input.display(), shape, x = p.x, y = p.y, "contains");
    let specs = load_shapes(input)?;
    Ok(pick(&specs, shape)?.contains_point(p))
}

fn intersect(input: &Path, a: usize, b: usize) -> Result<Vec<planar::Point>> {
    tracing::info!(input = %input.display(), a, b, "intersect");
    let specs = load_shapes(input)?;
    let mut first = pick(&specs, a)?;
    let mut second = pick(&specs, b)?;
    let hits = first.intersections(&mut second);
    tracing::debug!(hits = hits.len(), "intersections found");
    Ok(hits)
}

fn segment(first: &str, second: &str) -> Result<SegmentReport> {
    let (p0, p1) = parse_segment(first)?;
    let (p2, p3) = parse_segment(second)?;
    let hit = planar::line_intersect(p0, p1, p2, p3);
    tracing::info!(status = hit.status().as_str(), "segment");
    Ok(SegmentReport::from(hit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use planar::Point;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn shapes_file() -> (TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shapes.json");
        fs::write(
            &path,
            r#"[
                {"kind": "rectangle_at", "origin": [0, 0], "width": 10, "height": 10},
                {"kind": "rectangle_at", "origin": [5, 5], "width": 10, "height": 10},
                {"kind": "ellipse", "center": [0, 0], "rx": 8, "ry": 2}
            ]"#,
        )
        .unwrap();
        (dir, path)
    }

    #[test]
    fn measure_reports_every_shape() {
        let (_dir, path) = shapes_file();
        let reports = measure_reports(&path, Some(6)).unwrap();
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].area, 100.0);
        assert_eq!(reports[0].perimeter, 40.0);
        assert_eq!(reports[2].kind, "ellipse");
        assert_eq!(reports[2].area, planar::round_to(std::f64::consts::PI * 16.0, 6));
    }

    #[test]
    fn measure_writes_out_file() {
        let (dir, path) = shapes_file();
        let out = dir.path().join("out/report.json");
        measure(&path, Some(&out), None).unwrap();
        let parsed: Vec<ShapeReport> = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed.len(), 3);
    }

    #[test]
    fn contains_on_square() {
        let (_dir, path) = shapes_file();
        assert!(contains(&path, 0, "5,5").unwrap());
        assert!(!contains(&path, 0, "11,5").unwrap());
        assert!(contains(&path, 0, "10,5").unwrap());
        assert!(contains(&path, 9, "1,1").is_err());
    }

    #[test]
    fn intersect_overlapping_squares() {
        let (_dir, path) = shapes_file();
        let hits = intersect(&path, 0, 1).unwrap();
        assert_eq!(hits.len(), 2);
        assert!(hits.contains(&Point::new(10.0, 5.0)));
        assert!(hits.contains(&Point::new(5.0, 10.0)));
    }

    #[test]
    fn segment_statuses() {
        assert_eq!(segment("0,0,5,5", "1,1,4,4").unwrap().status, "coincident");
        assert_eq!(segment("1,2,5,5", "2,1,6,4").unwrap().status, "parallel");
        assert!(segment("0,0,5", "1,1,4,4").is_err());
    }
}

use anyhow::{bail, Context, Result};
use planar::{Point, Polygon};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One shape description from the JSON input file. Points are `[x, y]`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeSpec {
    Line {
        from: [f64; 2],
        to: [f64; 2],
    },
    LineAt {
        origin: [f64; 2],
        angle: f64,
        length: f64,
    },
    Triangle {
        points: [[f64; 2]; 3],
    },
    TriangleOnBase {
        base: [[f64; 2]; 2],
        height: f64,
    },
    Rectangle {
        points: [[f64; 2]; 4],
    },
    RectangleAt {
        origin: [f64; 2],
        width: f64,
        height: f64,
    },
    Regular {
        center: [f64; 2],
        radius: f64,
        #[serde(default)]
        angle: f64,
        sides: u32,
    },
    Ellipse {
        center: [f64; 2],
        rx: f64,
        ry: f64,
    },
    Circle {
        center: [f64; 2],
        radius: f64,
    },
    Polygon {
        points: Vec<[f64; 2]>,
    },
}

impl ShapeSpec {
    pub fn build(&self) -> Polygon {
        let p = |xy: &[f64; 2]| Point::from(*xy);
        match self {
            ShapeSpec::Line { from, to } => Polygon::line(p(from), p(to)),
            ShapeSpec::LineAt {
                origin,
                angle,
                length,
            } => Polygon::line_at(p(origin), *angle, *length),
            ShapeSpec::Triangle { points } => {
                Polygon::triangle(p(&points[0]), p(&points[1]), p(&points[2]))
            }
            ShapeSpec::TriangleOnBase { base, height } => {
                Polygon::triangle_on_base(p(&base[0]), p(&base[1]), *height)
            }
            ShapeSpec::Rectangle { points } => Polygon::rectangle(
                p(&points[0]),
                p(&points[1]),
                p(&points[2]),
                p(&points[3]),
            ),
            ShapeSpec::RectangleAt {
                origin,
                width,
                height,
            } => Polygon::rectangle_at(p(origin), *width, *height),
            ShapeSpec::Regular {
                center,
                radius,
                angle,
                sides,
            } => Polygon::regular(p(center), *radius, *angle, *sides),
            ShapeSpec::Ellipse { center, rx, ry } => Polygon::ellipse(p(center), *rx, *ry),
            ShapeSpec::Circle { center, radius } => Polygon::circle(p(center), *radius),
            ShapeSpec::Polygon { points } => Polygon::irregular(points.iter().map(p).collect()),
        }
    }
}

/// Read and decode a JSON array of shape descriptions.
pub fn load_shapes<P: AsRef<Path>>(path: P) -> Result<Vec<ShapeSpec>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let specs: Vec<ShapeSpec> =
        serde_json::from_str(&raw).with_context(|| format!("decoding shapes in {}", path.display()))?;
    tracing::debug!(count = specs.len(), path = %path.display(), "shapes loaded");
    Ok(specs)
}

/// Pick the shape at `index`, with a readable error when out of range.
pub fn pick(specs: &[ShapeSpec], index: usize) -> Result<Polygon> {
    match specs.get(index) {
        Some(spec) => Ok(spec.build()),
        None => bail!("shape index {index} out of range ({} shapes)", specs.len()),
    }
}

/// Parse `n` comma-separated numbers.
fn parse_numbers(raw: &str, n: usize) -> Result<Vec<f64>> {
    let values = raw
        .split(',')
        .map(|s| {
            s.trim()
                .parse::<f64>()
                .with_context(|| format!("not a number: {:?}", s.trim()))
        })
        .collect::<Result<Vec<f64>>>()?;
    if values.len() != n {
        bail!("expected {n} comma-separated numbers, got {}", values.len());
    }
    Ok(values)
}

/// `X,Y`
pub fn parse_point(raw: &str) -> Result<Point> {
    let v = parse_numbers(raw, 2)?;
    Ok(Point::new(v[0], v[1]))
}

/// `X0,Y0,X1,Y1`
pub fn parse_segment(raw: &str) -> Result<(Point, Point)> {
    let v = parse_numbers(raw, 4)?;
    Ok((Point::new(v[0], v[1]), Point::new(v[2], v[3])))
}

#[cfg(test)]
mod tests {
    use super::*;
    use planar::ShapeKind;
    use tempfile::tempdir;

    #[test]
    fn decodes_every_kind() {
        let raw = r#"[
            {"kind": "line", "from": [0, 0], "to": [3, 4]},
            {"kind": "line_at", "origin": [0, 0], "angle": 90, "length": 2},
            {"kind": "triangle", "points": [[0, 0], [4, 0], [0, 3]]},
            {"kind": "triangle_on_base", "base": [[0, 0], [4, 0]], "height": 3},
            {"kind": "rectangle", "points": [[0, 0], [2, 0], [2, 1], [0, 1]]},
            {"kind": "rectangle_at", "origin": [1, 1], "width": 2, "height": 3},
            {"kind": "regular", "center": [0, 0], "radius": 5, "sides": 6},
            {"kind": "ellipse", "center": [0, 0], "rx": 8, "ry": 2},
            {"kind": "circle", "center": [0, 0], "radius": 4},
            {"kind": "polygon", "points": [[0, 0], [1, 0], [1, 1]]}
        ]"#;
        let specs: Vec<ShapeSpec> = serde_json::from_str(raw).unwrap();
        let kinds: Vec<ShapeKind> = specs.iter().map(|s| s.build().kind()).collect();
        assert_eq!(
            kinds,
            vec![
                ShapeKind::Line,
                ShapeKind::Line,
                ShapeKind::Triangle,
                ShapeKind::Triangle,
                ShapeKind::Rectangle,
                ShapeKind::Rectangle,
                ShapeKind::RegularPolygon,
                ShapeKind::Ellipse,
                ShapeKind::Circle,
                ShapeKind::Irregular,
            ]
        );
        assert_eq!(specs[6].build().points().len(), 6);
    }

    #[test]
    fn load_from_file_and_pick() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shapes.json");
        fs::write(&path, r#"[{"kind": "circle", "center": [0, 0], "radius": 4}]"#).unwrap();
        let specs = load_shapes(&path).unwrap();
        assert_eq!(specs.len(), 1);
        assert!(pick(&specs, 0).is_ok());
        let err = pick(&specs, 3).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn load_reports_bad_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"[{"kind": "hexagon"}]"#).unwrap();
        let err = load_shapes(&path).unwrap_err();
        assert!(format!("{err:#}").contains("decoding shapes"));
        assert!(load_shapes(dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn parses_points_and_segments() {
        assert_eq!(parse_point("1.5, -2").unwrap(), Point::new(1.5, -2.0));
        let (a, b) = parse_segment("0,0,5,5").unwrap();
        assert_eq!((a, b), (Point::new(0.0, 0.0), Point::new(5.0, 5.0)));
        assert!(parse_point("1,2,3").is_err());
        assert!(parse_point("x,2").is_err());
    }
}

//! Shape constructors.
//!
//! Explicit shapes forward their corners to a `VertexStore`; the regular family
//! records `RegularParams` and derives vertices from them.

use super::{Polygon, RegularParams, ShapeKind};
use crate::cfg::ELLIPSE_SIDES;
use crate::point::Point;

impl Polygon {
    pub fn line(from: Point, to: Point) -> Self {
        Self::from_vertices(ShapeKind::Line, vec![from, to])
    }

    /// Line of `length` leaving `origin` at `angle` degrees.
    pub fn line_at(origin: Point, angle: f64, length: f64) -> Self {
        Self::line(origin, origin.position(angle, length, length))
    }

    pub fn triangle(a: Point, b: Point, c: Point) -> Self {
        Self::from_vertices(ShapeKind::Triangle, vec![a, b, c])
    }

    /// Triangle on the base `a → b` with its apex `height` away from the base
    /// midpoint, perpendicular to the base, on the left of `a → b` (y-up frame).
    /// A negative height puts the apex on the right.
    pub fn triangle_on_base(a: Point, b: Point, height: f64) -> Self {
        let apex = a.midpoint(b).position(a.angle(b) + 90.0, height, height);
        Self::triangle(a, b, apex)
    }

    /// Four explicit corners, expected to form a parallelogram.
    pub fn rectangle(a: Point, b: Point, c: Point, d: Point) -> Self {
        Self::from_vertices(ShapeKind::Rectangle, vec![a, b, c, d])
    }

    /// Axis-aligned rectangle walking `+width` along x, then `+height` along y.
    pub fn rectangle_at(origin: Point, width: f64, height: f64) -> Self {
        Self::rectangle(
            origin,
            origin + Point::new(width, 0.0),
            origin + Point::new(width, height),
            origin + Point::new(0.0, height),
        )
    }

    pub fn regular(center: Point, radius: f64, angle: f64, sides: u32) -> Self {
        Self::regular_with_radii(center, radius, radius, angle, sides)
    }

    pub fn regular_with_radii(
        center: Point,
        horizontal_radius: f64,
        vertical_radius: f64,
        angle: f64,
        sides: u32,
    ) -> Self {
        Self::from_regular(
            ShapeKind::RegularPolygon,
            RegularParams {
                center,
                horizontal_radius,
                vertical_radius,
                angle,
                sides,
            },
        )
    }

    pub fn ellipse(center: Point, horizontal_radius: f64, vertical_radius: f64) -> Self {
        Self::from_regular(
            ShapeKind::Ellipse,
            Self::ellipse_params(center, horizontal_radius, vertical_radius),
        )
    }

    pub fn circle(center: Point, radius: f64) -> Self {
        Self::from_regular(
            ShapeKind::Circle,
            Self::ellipse_params(center, radius, radius),
        )
    }

    /// Arbitrary vertex list; fewer than two points give an empty polygon.
    pub fn irregular(points: Vec<Point>) -> Self {
        Self::from_vertices(ShapeKind::Irregular, points)
    }

    fn ellipse_params(center: Point, horizontal_radius: f64, vertical_radius: f64) -> RegularParams {
        RegularParams {
            center,
            horizontal_radius,
            vertical_radius,
            angle: 0.0,
            sides: ELLIPSE_SIDES,
        }
    }
}

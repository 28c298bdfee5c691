//! Polygons: one vertex-list representation for every shape kind.
//!
//! Purpose
//! - `Polygon` pairs a `ShapeKind` tag with the store its vertices come from:
//!   an explicit `VertexStore` (line, triangle, rectangle, irregular) or a
//!   derived `RegularStore` (regular polygon, ellipse, circle).
//! - Metrics are computed from `points()` via `metrics`, except that ellipses
//!   and circles answer area and perimeter in closed form.
//!
//! Reads take `&mut self`: `points()` first applies any pending anchor or
//! parameter edits (see `store`), so every metric sees the current shape.
//! A polygon is not internally synchronized; share it behind a lock if needed.

mod build;
pub mod metrics;
mod store;

pub use store::{Anchors, RegularParams, RegularStore, VertexStore};

use std::f64::consts::PI;

use crate::point::{Axis, Point};

/// Which constructor produced a polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Line,
    Triangle,
    Rectangle,
    RegularPolygon,
    Ellipse,
    Circle,
    Irregular,
}

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Line => "line",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::RegularPolygon => "regular_polygon",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Circle => "circle",
            ShapeKind::Irregular => "irregular",
        }
    }

    /// Ellipse and circle replace triangulated area/perimeter with formulas.
    #[inline]
    pub fn has_closed_form(&self) -> bool {
        matches!(self, ShapeKind::Ellipse | ShapeKind::Circle)
    }
}

#[derive(Clone, Debug)]
enum Body {
    Vertices(VertexStore),
    Regular(RegularStore),
}

#[derive(Clone, Debug)]
pub struct Polygon {
    kind: ShapeKind,
    body: Body,
}

impl Polygon {
    fn from_vertices(kind: ShapeKind, vertices: Vec<Point>) -> Self {
        Self {
            kind,
            body: Body::Vertices(VertexStore::new(vertices)),
        }
    }

    fn from_regular(kind: ShapeKind, params: RegularParams) -> Self {
        Self {
            kind,
            body: Body::Regular(RegularStore::new(params)),
        }
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Current vertices, in order.
    pub fn points(&mut self) -> &[Point] {
        match &mut self.body {
            Body::Vertices(store) => store.points(),
            Body::Regular(store) => store.points(),
        }
    }

    /// The explicit store, for shapes not derived from regular parameters.
    pub fn store(&self) -> Option<&VertexStore> {
        match &self.body {
            Body::Vertices(store) => Some(store),
            Body::Regular(_) => None,
        }
    }

    pub fn store_mut(&mut self) -> Option<&mut VertexStore> {
        match &mut self.body {
            Body::Vertices(store) => Some(store),
            Body::Regular(_) => None,
        }
    }

    /// Shortcut for `store_mut().anchors_mut()`.
    pub fn anchors_mut(&mut self) -> Option<&mut Anchors> {
        self.store_mut().map(VertexStore::anchors_mut)
    }

    /// Center, radii, start angle, and side count of the regular family.
    pub fn regular_params(&self) -> Option<&RegularParams> {
        match &self.body {
            Body::Regular(store) => Some(store.params()),
            Body::Vertices(_) => None,
        }
    }

    pub fn regular_params_mut(&mut self) -> Option<&mut RegularParams> {
        match &mut self.body {
            Body::Regular(store) => Some(store.params_mut()),
            Body::Vertices(_) => None,
        }
    }

    pub fn is_empty(&mut self) -> bool {
        self.points().len() < 2
    }

    pub fn is_convex(&mut self) -> bool {
        metrics::is_convex(self.points())
    }

    /// Area; see `metrics::area` for the sign convention on concave shapes.
    pub fn area(&mut self) -> f64 {
        match self.ellipse_radii() {
            Some((rx, ry)) => PI * rx * ry,
            None => metrics::area(self.points()),
        }
    }

    /// Perimeter; ellipses use Ramanujan's first approximation.
    pub fn perimeter(&mut self) -> f64 {
        match self.ellipse_radii() {
            Some((a, b)) => PI * (3.0 * (a + b) - ((3.0 * a + b) * (a + 3.0 * b)).sqrt()),
            None => metrics::perimeter(self.points()),
        }
    }

    pub fn side_lengths(&mut self) -> Vec<f64> {
        metrics::side_lengths(self.points())
    }

    pub fn contains_point(&mut self, p: Point) -> bool {
        metrics::contains_point(self.points(), p)
    }

    pub fn contains_points(&mut self, candidates: &[Point]) -> (Vec<Point>, bool) {
        metrics::contains_points(self.points(), candidates)
    }

    /// Vertices of `other` that lie inside `self`, plus whether there were any.
    pub fn contains_polygon(&mut self, other: &mut Polygon) -> (Vec<Point>, bool) {
        metrics::contains_points(self.points(), other.points())
    }

    pub fn intersections(&mut self, other: &mut Polygon) -> Vec<Point> {
        metrics::intersections(self.points(), other.points())
    }

    /// Vertex average; `(ORIGIN, false)` when empty.
    pub fn centroid(&mut self) -> (Point, bool) {
        Point::average(self.points())
    }

    /// Irregular polygon of the vertices rounded to `decimals` places.
    pub fn round(&mut self, decimals: u32) -> Polygon {
        let rounded = self.points().iter().map(|p| p.round(decimals)).collect();
        Polygon::irregular(rounded)
    }

    /// Same vertex multiset, regardless of starting vertex or order.
    pub fn equal(&mut self, other: &mut Polygon) -> bool {
        Point::sort(self.points(), Axis::Y) == Point::sort(other.points(), Axis::Y)
    }

    /// Snapshot of the current vertices as an irregular polygon.
    pub fn to_irregular(&mut self) -> Polygon {
        Polygon::irregular(self.points().to_vec())
    }

    /// Radii for closed-form metrics; `None` for non-ellipse kinds, and for
    /// ellipses that degenerated to no vertices (which then measure 0).
    fn ellipse_radii(&mut self) -> Option<(f64, f64)> {
        if !self.kind.has_closed_form() {
            return None;
        }
        if self.is_empty() {
            return Some((0.0, 0.0));
        }
        self.regular_params()
            .map(|p| (p.horizontal_radius, p.vertical_radius))
    }
}

//! 2D computational-geometry kernel.
//!
//! Points, segment-intersection classification, and polygons with metric and
//! containment queries. Shapes (line, triangle, rectangle, regular polygon,
//! ellipse, circle, irregular polygon) all share one vertex-list representation
//! and differ only in how their vertices are produced.
//!
//! Numeric policy
//! - Plain `f64` with exact comparisons. There are no tolerances anywhere in the
//!   kernel; callers that need them round first (`Point::round`, `Polygon::round`).
//! - Every operation is total: degenerate input gives an empty polygon, a zero
//!   metric, or a non-point intersection variant, never a panic.
//!
//! Layout
//! - `point`: `Point` and collection helpers.
//! - `intersect`: `line_intersect` and its tagged result.
//! - `shape`: `Polygon`, its stores, metrics, and constructors.
//! - `rand`: reproducible random polygons for tests and benchmarks.

pub mod api;
pub mod cfg;
pub mod intersect;
pub mod point;
pub mod rand;
pub mod shape;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use intersect::{line_intersect, IntersectionStatus, SegmentIntersection};
pub use point::{round_to, Axis, Point};
pub use shape::{Anchors, Polygon, RegularParams, ShapeKind, VertexStore};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::intersect::{line_intersect, IntersectionStatus, SegmentIntersection};
    pub use crate::point::{Axis, Point};
    pub use crate::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
    pub use crate::shape::{metrics, Anchors, Polygon, RegularParams, ShapeKind, VertexStore};
    pub use nalgebra::Vector2 as Vec2;
}

//! Curated re-exports for downstream consumers (serializers, front-ends).
//!
//! The kernel surface a consumer needs is small: build a shape, read its
//! `points()` and metrics, and for ellipses read `regular_params()` for center and radii.

pub use crate::intersect::{line_intersect, IntersectionStatus, SegmentIntersection};
pub use crate::point::{round_to, Axis, Point};
pub use crate::shape::metrics::{
    area, contains_point, contains_points, intersections, is_convex, perimeter, side_lengths,
};
pub use crate::shape::{Anchors, Polygon, RegularParams, ShapeKind, VertexStore};

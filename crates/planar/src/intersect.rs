//! Segment–segment intersection classification.
//!
//! `line_intersect` uses the determinant form: for segments `(p0,p1)` and
//! `(p2,p3)` with denominator `d` and numerators `a`, `b`, the candidate point is
//! `p0 + (a/d)·(p1−p0)`. Results are a tagged enum so a point is only reachable
//! when one exists.

use crate::point::Point;

/// How two segments relate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SegmentIntersection {
    /// Both segments lie on one line. Carries the first segment's start point.
    Coincident(Point),
    /// Distinct parallel lines.
    Parallel,
    /// Single intersection point on both segments.
    InRange(Point),
    /// Parameters are in `[0,1]` but the reconstructed point fails the exact
    /// on-segment distance check.
    OutOfRange(Point),
    /// The lines cross outside at least one segment.
    Disjoint,
}

/// Outcome code without the point payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntersectionStatus {
    Coincident,
    Parallel,
    InRange,
    OutOfRange,
    NotIntersecting,
}

impl IntersectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntersectionStatus::Coincident => "coincident",
            IntersectionStatus::Parallel => "parallel",
            IntersectionStatus::InRange => "in_range",
            IntersectionStatus::OutOfRange => "out_of_range",
            IntersectionStatus::NotIntersecting => "not_intersecting",
        }
    }
}

impl SegmentIntersection {
    #[inline]
    pub fn status(&self) -> IntersectionStatus {
        match self {
            SegmentIntersection::Coincident(_) => IntersectionStatus::Coincident,
            SegmentIntersection::Parallel => IntersectionStatus::Parallel,
            SegmentIntersection::InRange(_) => IntersectionStatus::InRange,
            SegmentIntersection::OutOfRange(_) => IntersectionStatus::OutOfRange,
            SegmentIntersection::Disjoint => IntersectionStatus::NotIntersecting,
        }
    }

    #[inline]
    pub fn point(&self) -> Option<Point> {
        match *self {
            SegmentIntersection::Coincident(p)
            | SegmentIntersection::InRange(p)
            | SegmentIntersection::OutOfRange(p) => Some(p),
            SegmentIntersection::Parallel | SegmentIntersection::Disjoint => None,
        }
    }

    #[inline]
    pub fn is_in_range(&self) -> bool {
        matches!(self, SegmentIntersection::InRange(_))
    }
}

/// Classify segments `(p0,p1)` and `(p2,p3)`.
pub fn line_intersect(p0: Point, p1: Point, p2: Point, p3: Point) -> SegmentIntersection {
    let d = (p3.y - p2.y) * (p1.x - p0.x) - (p3.x - p2.x) * (p1.y - p0.y);
    let a = (p3.x - p2.x) * (p0.y - p2.y) - (p3.y - p2.y) * (p0.x - p2.x);
    let b = (p1.x - p0.x) * (p0.y - p2.y) - (p1.y - p0.y) * (p0.x - p2.x);

    if d == 0.0 {
        if a == 0.0 && b == 0.0 {
            return SegmentIntersection::Coincident(p0);
        }
        return SegmentIntersection::Parallel;
    }

    let t = a / d;
    let u = b / d;
    if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
        return SegmentIntersection::Disjoint;
    }

    let hit = p0 + (p1 - p0) * t;
    // Parameters can pass while the reconstructed point drifts off a segment.
    if on_segment(hit, p0, p1) && on_segment(hit, p2, p3) {
        SegmentIntersection::InRange(hit)
    } else {
        SegmentIntersection::OutOfRange(hit)
    }
}

#[inline]
fn on_segment(p: Point, start: Point, end: Point) -> bool {
    p.distance(start) + p.distance(end) == start.distance(end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn crossing_segments_are_in_range() {
        let r = line_intersect(pt(2.0, 2.0), pt(2.0, 10.0), pt(0.0, 4.0), pt(10.0, 4.0));
        assert_eq!(r, SegmentIntersection::InRange(pt(2.0, 4.0)));
        assert_eq!(r.status(), IntersectionStatus::InRange);
        assert_eq!(r.point(), Some(pt(2.0, 4.0)));
    }

    #[test]
    fn collinear_overlap_is_coincident_at_first_start() {
        let r = line_intersect(pt(0.0, 0.0), pt(5.0, 5.0), pt(1.0, 1.0), pt(4.0, 4.0));
        assert_eq!(r, SegmentIntersection::Coincident(pt(0.0, 0.0)));
    }

    #[test]
    fn parallel_offset_lines() {
        let r = line_intersect(pt(1.0, 2.0), pt(5.0, 5.0), pt(2.0, 1.0), pt(6.0, 4.0));
        assert_eq!(r, SegmentIntersection::Parallel);
        assert_eq!(r.point(), None);
    }

    #[test]
    fn crossing_outside_segments_is_disjoint() {
        let r = line_intersect(pt(0.0, 0.0), pt(1.0, 0.0), pt(5.0, -1.0), pt(5.0, 1.0));
        assert_eq!(r, SegmentIntersection::Disjoint);
        assert_eq!(r.status(), IntersectionStatus::NotIntersecting);
    }

    #[test]
    fn shared_endpoint_is_in_range() {
        let r = line_intersect(pt(0.0, 0.0), pt(4.0, 0.0), pt(4.0, 0.0), pt(4.0, 3.0));
        assert_eq!(r, SegmentIntersection::InRange(pt(4.0, 0.0)));
    }

    #[test]
    fn status_names_are_stable() {
        assert_eq!(IntersectionStatus::InRange.as_str(), "in_range");
        assert_eq!(IntersectionStatus::NotIntersecting.as_str(), "not_intersecting");
    }
}

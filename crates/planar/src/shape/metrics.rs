//! Polygon metrics over plain vertex slices.
//!
//! These functions accept only what they need (a slice, in order) so they can be
//! used on any vertex list, not just on a `Polygon`. Polygons with fewer than two
//! vertices are empty: every metric returns 0, `false`, or an empty list.
//!
//! Area formulas
//! - 3 vertices: Heron's formula.
//! - ≥4 vertices, convex: fan triangulation from vertex 0 (Heron per triangle).
//! - ≥4 vertices, concave: shoelace, keeping its sign (negative for clockwise
//!   winding in a y-up frame).

use crate::intersect::{line_intersect, SegmentIntersection};
use crate::point::Point;

/// Closed-loop edges `(v[i], v[i+1 mod n])`; none for fewer than two vertices.
pub fn edges(points: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = if points.len() < 2 { 0 } else { points.len() };
    (0..n).map(move |i| (points[i], points[(i + 1) % n]))
}

/// True iff every non-zero turn (cross product at a vertex) has the same sign.
/// Collinear triples are skipped. Fewer than three vertices are never convex.
pub fn is_convex(points: &[Point]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut sign = 0.0f64;
    for i in 0..n {
        let prev = points[(i + n - 1) % n];
        let cur = points[i];
        let next = points[(i + 1) % n];
        let turn = (prev - cur).cross(next - cur);
        if turn == 0.0 || turn.is_nan() {
            continue;
        }
        if sign == 0.0 {
            sign = turn.signum();
        } else if turn.signum() != sign {
            return false;
        }
    }
    true
}

/// Triangle area from its three side lengths.
pub fn heron(a: Point, b: Point, c: Point) -> f64 {
    let ab = a.distance(b);
    let bc = b.distance(c);
    let ca = c.distance(a);
    let s = (ab + bc + ca) / 2.0;
    // Rounding can push the product of a degenerate triangle slightly below 0.
    (s * (s - ab) * (s - bc) * (s - ca)).max(0.0).sqrt()
}

/// Signed shoelace area: `(Σ x_i·y_{i+1} − Σ y_i·x_{i+1}) / 2`.
pub fn shoelace(points: &[Point]) -> f64 {
    let mut forward = 0.0;
    let mut backward = 0.0;
    for (p, q) in edges(points) {
        forward += p.x * q.y;
        backward += p.y * q.x;
    }
    (forward - backward) / 2.0
}

/// Fan triangulation from vertex 0. Only meaningful for convex polygons.
pub fn fan_area(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let apex = points[0];
    points[1..]
        .windows(2)
        .map(|w| heron(apex, w[0], w[1]))
        .sum()
}

pub fn area(points: &[Point]) -> f64 {
    match points.len() {
        0..=2 => 0.0,
        3 => heron(points[0], points[1], points[2]),
        _ if is_convex(points) => fan_area(points),
        _ => shoelace(points),
    }
}

/// Sum of edge lengths; the closing edge is only added for three or more
/// vertices, so a two-vertex polygon measures its single segment.
pub fn perimeter(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 2 {
        return 0.0;
    }
    let open = Point::sum_distances(points);
    if n >= 3 {
        open + points[n - 1].distance(points[0])
    } else {
        open
    }
}

pub fn side_lengths(points: &[Point]) -> Vec<f64> {
    match points.len() {
        0 | 1 => Vec::new(),
        2 => vec![perimeter(points)],
        _ => edges(points).map(|(p, q)| p.distance(q)).collect(),
    }
}

/// Ray-casting containment; boundary points count as inside.
///
/// The ray runs from `p` to `(FAR.x, p.y)`. Per edge:
/// - `p` equal to an endpoint → inside.
/// - `Coincident` (edge on the ray's line) → inside iff `p.x` is within the
///   edge's x-range; otherwise the edge is ignored.
/// - `InRange` or `OutOfRange` (parameters within both segments, whatever the
///   distance check on the reconstructed point said) → inside if the hit is
///   `p` itself, else one crossing when the edge straddles the ray's line.
///
/// An edge straddles when exactly one endpoint lies strictly above `p.y`.
/// A vertex on the ray shared by two edges is therefore counted once when
/// the outline passes through it, and zero times when the outline only
/// touches it.
///
/// Inside iff the crossing count is odd.
pub fn contains_point(points: &[Point], p: Point) -> bool {
    let far = Point::new(Point::FAR.x, p.y);
    let mut crossings = 0usize;
    for (a, b) in edges(points) {
        if p == a || p == b {
            return true;
        }
        match line_intersect(p, far, a, b) {
            SegmentIntersection::Coincident(_) => {
                if a.x.min(b.x) <= p.x && p.x <= a.x.max(b.x) {
                    return true;
                }
            }
            SegmentIntersection::InRange(hit) | SegmentIntersection::OutOfRange(hit) => {
                if hit == p {
                    return true;
                }
                if (a.y > p.y) != (b.y > p.y) {
                    crossings += 1;
                }
            }
            _ => {}
        }
    }
    crossings % 2 == 1
}

/// Members of `candidates` inside the polygon, plus whether there were any.
pub fn contains_points(points: &[Point], candidates: &[Point]) -> (Vec<Point>, bool) {
    let inside: Vec<Point> = candidates
        .iter()
        .copied()
        .filter(|c| contains_point(points, *c))
        .collect();
    let any = !inside.is_empty();
    (inside, any)
}

/// Every `InRange` hit over all edge pairs (closing edges included).
///
/// A point shared by several edge pairs, such as a touching corner, appears once
/// per pair.
pub fn intersections(first: &[Point], second: &[Point]) -> Vec<Point> {
    let mut hits = Vec::new();
    for (p0, p1) in edges(first) {
        for (p2, p3) in edges(second) {
            if let SegmentIntersection::InRange(hit) = line_intersect(p0, p1, p2, p3) {
                hits.push(hit);
            }
        }
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
        raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn square() -> Vec<Point> {
        pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)])
    }

    #[test]
    fn square_area_paths_agree() {
        let sq = square();
        assert!(is_convex(&sq));
        assert!((fan_area(&sq) - 100.0).abs() < 1e-9);
        assert_eq!(shoelace(&sq), 100.0);
        assert!((area(&sq) - shoelace(&sq)).abs() < 1e-9);
    }

    #[test]
    fn concave_area_uses_signed_shoelace() {
        // Arrow head, clockwise in a y-up frame.
        let cw = pts(&[(0.0, 0.0), (2.0, 4.0), (4.0, 0.0), (2.0, 1.0)]);
        assert!(!is_convex(&cw));
        assert_eq!(area(&cw), -6.0);
        let ccw: Vec<Point> = cw.iter().rev().copied().collect();
        assert_eq!(area(&ccw), 6.0);
    }

    #[test]
    fn triangle_heron_matches_shoelace() {
        let tri = pts(&[(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]);
        assert!((area(&tri) - 6.0).abs() < 1e-12);
        assert!((area(&tri) - shoelace(&tri).abs()).abs() < 1e-12);
    }

    #[test]
    fn convexity_skips_collinear_and_rejects_small() {
        let with_midpoint = pts(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        assert!(is_convex(&with_midpoint));
        assert!(!is_convex(&pts(&[(0.0, 0.0), (1.0, 1.0)])));
    }

    #[test]
    fn perimeter_and_sides() {
        let sq = square();
        assert_eq!(perimeter(&sq), 40.0);
        assert_eq!(side_lengths(&sq), vec![10.0; 4]);
        let seg = pts(&[(0.0, 0.0), (3.0, 4.0)]);
        assert_eq!(perimeter(&seg), 5.0);
        assert_eq!(side_lengths(&seg), vec![5.0]);
        assert_eq!(perimeter(&[]), 0.0);
        assert!(side_lengths(&[]).is_empty());
    }

    #[test]
    fn square_containment() {
        let sq = square();
        assert!(contains_point(&sq, Point::new(5.0, 5.0)));
        assert!(!contains_point(&sq, Point::new(11.0, 5.0)));
        assert!(contains_point(&sq, Point::new(10.0, 5.0)));
        assert!(contains_point(&sq, Point::new(0.0, 0.0)));
        // On the bottom edge: coincident with the ray, inside the x-range.
        assert!(contains_point(&sq, Point::new(5.0, 0.0)));
        // Left of the square on the bottom edge's line.
        assert!(!contains_point(&sq, Point::new(-5.0, 0.0)));
        assert!(!contains_point(&[], Point::ORIGIN));
    }

    #[test]
    fn slanted_triangle_containment_matches_orientation() {
        let tri = pts(&[(0.0, 0.0), (10.0, 0.0), (3.0, 7.0)]);
        let mut checked = 0;
        for i in -5..=105 {
            for j in -5..=75 {
                let p = Point::new(f64::from(i) * 0.1, f64::from(j) * 0.1);
                let sides: Vec<f64> = edges(&tri).map(|(a, b)| (b - a).cross(p - a)).collect();
                // Skip grid points within rounding of an edge line.
                if sides.iter().any(|s| s.abs() < 1e-9) {
                    continue;
                }
                let expected = sides.iter().all(|s| *s > 0.0);
                assert_eq!(contains_point(&tri, p), expected, "at {p:?}");
                checked += 1;
            }
        }
        assert!(checked > 8000);
    }

    #[test]
    fn ray_through_shared_vertex_counts_once() {
        let diamond = pts(&[(5.0, 0.0), (10.0, 5.0), (5.0, 10.0), (0.0, 5.0)]);
        assert!(contains_point(&diamond, Point::new(2.0, 5.0)));
        assert!(contains_point(&diamond, Point::new(8.0, 5.0)));
        assert!(!contains_point(&diamond, Point::new(-2.0, 5.0)));
        assert!(!contains_point(&diamond, Point::new(12.0, 5.0)));
    }

    #[test]
    fn ray_touching_apex_does_not_cross() {
        let tri = pts(&[(0.0, 0.0), (10.0, 0.0), (3.0, 7.0)]);
        assert!(!contains_point(&tri, Point::new(0.0, 7.0)));
        assert!(contains_point(&tri, Point::new(3.0, 7.0)));
        assert!(!contains_point(&tri, Point::new(4.0, 7.0)));
    }

    #[test]
    fn point_set_containment_filters() {
        let sq = square();
        let candidates = pts(&[(1.0, 1.0), (20.0, 1.0), (9.0, 9.0)]);
        let (inside, any) = contains_points(&sq, &candidates);
        assert!(any);
        assert_eq!(inside, pts(&[(1.0, 1.0), (9.0, 9.0)]));
        let (none, any) = contains_points(&sq, &pts(&[(20.0, 20.0)]));
        assert!(!any);
        assert!(none.is_empty());
    }

    #[test]
    fn overlapping_squares_intersect_twice() {
        let a = square();
        let b = pts(&[(5.0, 5.0), (15.0, 5.0), (15.0, 15.0), (5.0, 15.0)]);
        let hits = intersections(&a, &b);
        assert_eq!(hits.len(), 2);
        assert!(hits.contains(&Point::new(10.0, 5.0)));
        assert!(hits.contains(&Point::new(5.0, 10.0)));
    }

    #[test]
    fn touching_corner_is_reported_per_edge_pair() {
        let a = square();
        let b = pts(&[(10.0, 10.0), (20.0, 10.0), (20.0, 20.0), (10.0, 20.0)]);
        let hits = intersections(&a, &b);
        assert!(hits.len() > 1);
        assert!(hits.iter().all(|h| *h == Point::new(10.0, 10.0)));
    }
}

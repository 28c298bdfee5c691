//! 2D points and point-collection helpers.
//!
//! - `Point`: `(x, y)` value with component-wise arithmetic and exact equality.
//! - `angle`/`position`: direction and polar placement, both in degrees.
//! - Collection helpers (`total`, `average`, `sum_distances`, `sort`, `organize`)
//!   are associated functions over slices.
//!
//! Conventions
//! - Angles are degrees counterclockwise from +x in a y-up frame (so clockwise on
//!   a y-down canvas such as SVG), normalized into `[0, 360)`.
//! - Equality is exact `f64 ==`. Round before comparing computed points.

use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use nalgebra::Vector2;

use crate::cfg::FAR_COORD;

/// A point (or offset) in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Axis used as the primary key by `Point::sort`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

/// Round `value` to `decimals` places after the decimal point.
#[inline]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

impl Point {
    /// The origin. Associated constants cannot be mutated through any path.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };
    /// Far sentinel; the end point of the containment ray is `(FAR.x, y)`.
    pub const FAR: Point = Point {
        x: FAR_COORD,
        y: FAR_COORD,
    };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_vec2(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Direction of the segment `self → other` in degrees, in `[0, 360)`.
    ///
    /// Axis-aligned directions are answered exactly (0, 90, 180, 270) without
    /// going through `atan2`. Coincident points give 0.
    pub fn angle(&self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        if dx == 0.0 {
            return if dy > 0.0 {
                90.0
            } else if dy < 0.0 {
                270.0
            } else {
                0.0
            };
        }
        if dy == 0.0 {
            return if dx > 0.0 { 0.0 } else { 180.0 };
        }
        let deg = dy.atan2(dx).to_degrees();
        let deg = if deg < 0.0 { deg + 360.0 } else { deg };
        if deg >= 360.0 {
            0.0
        } else {
            deg
        }
    }

    /// Polar placement: `self + (radius_x·cos(angle), radius_y·sin(angle))`.
    #[inline]
    pub fn position(&self, angle: f64, radius_x: f64, radius_y: f64) -> Point {
        let rad = angle.to_radians();
        Point::new(self.x + radius_x * rad.cos(), self.y + radius_y * rad.sin())
    }

    #[inline]
    pub fn round(&self, decimals: u32) -> Point {
        Point::new(round_to(self.x, decimals), round_to(self.y, decimals))
    }

    /// 2D cross product (z-component of the 3D cross product).
    #[inline]
    pub fn cross(&self, other: Point) -> f64 {
        self.to_vec2().perp(&other.to_vec2())
    }

    #[inline]
    pub fn midpoint(&self, other: Point) -> Point {
        (*self + other) / 2.0
    }

    /// Component-wise sum.
    pub fn total(points: &[Point]) -> Point {
        points.iter().fold(Point::ORIGIN, |acc, p| acc + *p)
    }

    /// Component-wise mean; `(ORIGIN, false)` for an empty slice.
    pub fn average(points: &[Point]) -> (Point, bool) {
        if points.is_empty() {
            return (Point::ORIGIN, false);
        }
        (Self::total(points) / points.len() as f64, true)
    }

    /// Length of the open path through `points` (the loop is not closed).
    pub fn sum_distances(points: &[Point]) -> f64 {
        points.windows(2).map(|w| w[0].distance(w[1])).sum()
    }

    /// Sort by one axis via exact-key buckets.
    ///
    /// Within a bucket, `Axis::X` keeps encounter order of the y values while
    /// `Axis::Y` sorts the x values ascending. `Axis::Y` therefore yields a total
    /// (y, x) order; `Axis::X` does not.
    pub fn sort(points: &[Point], axis: Axis) -> Vec<Point> {
        let mut buckets: Vec<(f64, Vec<f64>)> = Vec::new();
        for p in points {
            let (key, other) = match axis {
                Axis::X => (p.x, p.y),
                Axis::Y => (p.y, p.x),
            };
            match buckets.iter_mut().find(|(k, _)| *k == key) {
                Some((_, others)) => others.push(other),
                None => buckets.push((key, vec![other])),
            }
        }
        buckets.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        if axis == Axis::Y {
            for (_, others) in &mut buckets {
                others.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
            }
        }
        buckets
            .into_iter()
            .flat_map(|(key, others)| {
                others.into_iter().map(move |other| match axis {
                    Axis::X => Point::new(key, other),
                    Axis::Y => Point::new(other, key),
                })
            })
            .collect()
    }

    /// Order points by their angle as seen from `origin` (ascending degrees).
    ///
    /// Points sharing an angle stay in encounter order; no secondary key by
    /// distance is applied.
    pub fn organize(points: &[Point], origin: Point) -> Vec<Point> {
        let mut buckets: Vec<(f64, Vec<Point>)> = Vec::new();
        for p in points {
            let key = origin.angle(*p);
            match buckets.iter_mut().find(|(k, _)| *k == key) {
                Some((_, members)) => members.push(*p),
                None => buckets.push((key, vec![*p])),
            }
        }
        buckets.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        buckets.into_iter().flat_map(|(_, members)| members).collect()
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        p.to_vec2()
    }
}

impl From<[f64; 2]> for Point {
    #[inline]
    fn from(xy: [f64; 2]) -> Self {
        Point::new(xy[0], xy[1])
    }
}

impl From<Point> for [f64; 2] {
    #[inline]
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

impl Neg for Point {
    type Output = Point;
    #[inline]
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Div<f64> for Point {
    type Output = Point;
    #[inline]
    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

/// Component-wise binary operators against a `Point` or a scalar, plus the
/// in-place `*Assign` forms.
macro_rules! componentwise {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $sym:tt) => {
        impl $Op for Point {
            type Output = Point;
            #[inline]
            fn $op(self, rhs: Point) -> Point {
                Point::new(self.x $sym rhs.x, self.y $sym rhs.y)
            }
        }
        impl $Op<f64> for Point {
            type Output = Point;
            #[inline]
            fn $op(self, rhs: f64) -> Point {
                Point::new(self.x $sym rhs, self.y $sym rhs)
            }
        }
        impl $OpAssign for Point {
            #[inline]
            fn $op_assign(&mut self, rhs: Point) {
                *self = *self $sym rhs;
            }
        }
        impl $OpAssign<f64> for Point {
            #[inline]
            fn $op_assign(&mut self, rhs: f64) {
                *self = *self $sym rhs;
            }
        }
    };
}

componentwise!(Add, add, AddAssign, add_assign, +);
componentwise!(Sub, sub, SubAssign, sub_assign, -);
componentwise!(Mul, mul, MulAssign, mul_assign, *);

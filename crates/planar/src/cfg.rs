//! Fixed kernel constants.
//!
//! Policy
//! - The kernel compares floats exactly, so there are no tolerances to tune.
//!   What remains are shape-construction limits and the containment sentinel.

/// Degrees in a full turn; regular polygons step by `FULL_TURN / sides`.
pub const FULL_TURN: u32 = 360;
/// Side counts above this are clamped.
pub const MAX_SIDES: u32 = 360;
/// Side counts below this yield an empty polygon.
pub const MIN_SIDES: u32 = 3;
/// Radii below this yield an empty polygon.
pub const MIN_RADIUS: f64 = 1.0;
/// Ellipses and circles are regular polygons with this many sides.
pub const ELLIPSE_SIDES: u32 = 360;
/// Coordinate of the far sentinel point (the end of the containment ray).
pub const FAR_COORD: f64 = i64::MAX as f64;

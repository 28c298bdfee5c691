//! Vertex stores with lazily reconciled caches.
//!
//! Two stores back every `Polygon`:
//! - `VertexStore`: explicit vertex list plus the four public `Anchors`.
//! - `RegularStore`: vertices derived from `RegularParams`.
//!
//! Both expose their editable inputs only through `*_mut` accessors, which move
//! the cache from `Clean` to `Dirty`. The next `points()` call rebuilds the
//! vertices from those inputs and moves it back to `Clean`.

use crate::cfg::{FULL_TURN, MAX_SIDES, MIN_RADIUS, MIN_SIDES};
use crate::point::Point;

/// The public view of a polygon's first four corners.
///
/// Missing corners (polygons with fewer than four vertices) read as `ORIGIN`
/// and are ignored when written back.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Anchors {
    pub first: Point,
    pub second: Point,
    pub third: Point,
    pub fourth: Point,
}

impl Anchors {
    fn from_vertices(vertices: &[Point]) -> Self {
        let at = |i: usize| vertices.get(i).copied().unwrap_or(Point::ORIGIN);
        Self {
            first: at(0),
            second: at(1),
            third: at(2),
            fourth: at(3),
        }
    }

    #[inline]
    pub fn to_array(&self) -> [Point; 4] {
        [self.first, self.second, self.third, self.fourth]
    }
}

#[derive(Clone, Debug)]
enum Cache {
    Clean(Vec<Point>),
    /// Holds the stale vertices until the next read.
    Dirty(Vec<Point>),
}

impl Default for Cache {
    fn default() -> Self {
        Cache::Clean(Vec::new())
    }
}

impl Cache {
    #[inline]
    fn vertices(&self) -> &[Point] {
        match self {
            Cache::Clean(v) | Cache::Dirty(v) => v,
        }
    }

    #[inline]
    fn is_dirty(&self) -> bool {
        matches!(self, Cache::Dirty(_))
    }

    fn mark_dirty(&mut self) {
        if let Cache::Clean(v) = self {
            *self = Cache::Dirty(std::mem::take(v));
        }
    }

    /// Take the stale vertices out of a dirty cache; the caller must store a
    /// fresh `Clean` list afterwards.
    fn take_dirty(&mut self) -> Option<Vec<Point>> {
        match std::mem::take(self) {
            Cache::Dirty(v) => Some(v),
            clean => {
                *self = clean;
                None
            }
        }
    }
}

/// Ordered vertex list with anchor fields mirroring `vertices[0..4]`.
///
/// Invariants:
/// - Either empty or at least two vertices.
/// - When clean, `anchors` agree with the first four vertices.
#[derive(Clone, Debug, Default)]
pub struct VertexStore {
    anchors: Anchors,
    cache: Cache,
}

impl VertexStore {
    pub fn new(vertices: Vec<Point>) -> Self {
        let mut store = Self::default();
        store.setup(vertices);
        store
    }

    /// Replace the vertex list and reset the anchors.
    ///
    /// Fewer than two vertices clear the store.
    pub fn setup(&mut self, vertices: Vec<Point>) -> &[Point] {
        if vertices.len() < 2 {
            tracing::debug!(count = vertices.len(), "setup below two vertices, store cleared");
            self.anchors = Anchors::default();
            self.cache = Cache::default();
        } else {
            self.anchors = Anchors::from_vertices(&vertices);
            self.cache = Cache::Clean(vertices);
        }
        self.cache.vertices()
    }

    #[inline]
    pub fn anchors(&self) -> &Anchors {
        &self.anchors
    }

    /// Edit the anchors; the vertex list picks up the edits on the next read.
    #[inline]
    pub fn anchors_mut(&mut self) -> &mut Anchors {
        self.cache.mark_dirty();
        &mut self.anchors
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.cache.is_dirty()
    }

    /// Vertex count; reconciliation never changes it.
    #[inline]
    pub fn len(&self) -> usize {
        self.cache.vertices().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() < 2
    }

    /// The vertex list, with pending anchor edits applied first.
    pub fn points(&mut self) -> &[Point] {
        if let Some(mut vertices) = self.cache.take_dirty() {
            for (slot, anchor) in vertices.iter_mut().zip(self.anchors.to_array()) {
                *slot = anchor;
            }
            tracing::trace!(count = vertices.len(), "anchors written back");
            self.cache = Cache::Clean(vertices);
        }
        self.cache.vertices()
    }
}

/// Parameters of the regular-polygon family (regular polygon, ellipse, circle).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegularParams {
    pub center: Point,
    pub horizontal_radius: f64,
    pub vertical_radius: f64,
    /// Angle of the first vertex, in degrees.
    pub angle: f64,
    pub sides: u32,
}

impl RegularParams {
    /// Derive the vertex list.
    ///
    /// Vertices sit at `angle + k·(360 / sides)` for `k in 0..sides`, with the
    /// step in whole degrees (integer division). For side counts that do not
    /// divide 360 the count stays `sides` and the leftover degrees widen the
    /// closing gap; the count is not reduced to fit the coarser step.
    pub fn vertices(&self) -> Vec<Point> {
        if self.horizontal_radius < MIN_RADIUS
            || self.vertical_radius < MIN_RADIUS
            || self.sides < MIN_SIDES
        {
            tracing::debug!(
                rx = self.horizontal_radius,
                ry = self.vertical_radius,
                sides = self.sides,
                "degenerate regular polygon, no vertices"
            );
            return Vec::new();
        }
        let sides = if self.sides > MAX_SIDES {
            tracing::debug!(sides = self.sides, max = MAX_SIDES, "side count clamped");
            MAX_SIDES
        } else {
            self.sides
        };
        let step = FULL_TURN / sides;
        (0..sides)
            .map(|k| {
                self.center.position(
                    self.angle + f64::from(k * step),
                    self.horizontal_radius,
                    self.vertical_radius,
                )
            })
            .collect()
    }
}

/// Vertices derived from `RegularParams`, regenerated after parameter edits.
#[derive(Clone, Debug)]
pub struct RegularStore {
    params: RegularParams,
    cache: Cache,
}

impl RegularStore {
    pub fn new(params: RegularParams) -> Self {
        let vertices = params.vertices();
        Self {
            params,
            cache: Cache::Clean(vertices),
        }
    }

    #[inline]
    pub fn params(&self) -> &RegularParams {
        &self.params
    }

    /// Edit the parameters; vertices are regenerated on the next read.
    #[inline]
    pub fn params_mut(&mut self) -> &mut RegularParams {
        self.cache.mark_dirty();
        &mut self.params
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.cache.is_dirty()
    }

    pub fn points(&mut self) -> &[Point] {
        if self.cache.take_dirty().is_some() {
            let vertices = self.params.vertices();
            tracing::trace!(count = vertices.len(), "regular polygon regenerated");
            self.cache = Cache::Clean(vertices);
        }
        self.cache.vertices()
    }
}

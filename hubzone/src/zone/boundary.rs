//! Polygon boundary types.
//!
//! A zone boundary is one or more [`Polygon`]s (disjoint pieces), each an
//! outer [`Ring`] with zero or more hole rings. Rings are stored *open*:
//! the closing edge back to the first vertex is implicit. The loader trims
//! an explicit duplicate closing vertex before constructing a ring.

use crate::coord::Coord;

/// A closed vertex loop, stored without the duplicate closing vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    /// Ring vertices in order. The edge from the last vertex back to the
    /// first is implicit.
    pub vertices: Vec<Coord>,
}

impl Ring {
    /// Create a ring from open vertices (no duplicate closing vertex).
    pub fn new(vertices: Vec<Coord>) -> Self {
        Self { vertices }
    }

    /// Number of vertices (equals the number of edges).
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the ring has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate over the ring's edges, including the implicit closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Coord, Coord)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }
}

/// A single polygon piece: one outer ring and zero or more holes.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// The outer boundary ring.
    pub outer: Ring,
    /// Interior hole rings. A point inside a hole is outside the polygon.
    pub holes: Vec<Ring>,
}

impl Polygon {
    /// Create a polygon from an outer ring and its holes.
    pub fn new(outer: Ring, holes: Vec<Ring>) -> Self {
        Self { outer, holes }
    }

    /// Iterate over all rings, outer first.
    pub fn rings(&self) -> impl Iterator<Item = &Ring> {
        std::iter::once(&self.outer).chain(self.holes.iter())
    }
}

/// A complete zone boundary: one or more disjoint polygon pieces.
pub type Boundary = Vec<Polygon>;

/// Axis-aligned bounding box in degrees.
///
/// For a zone that straddles the antimeridian, `min_lon > max_lon` and the
/// longitude interval is the wrapped range `[min_lon, 180] ∪ [-180, max_lon]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Returns true if the longitude interval wraps across the antimeridian.
    pub fn wraps(&self) -> bool {
        self.min_lon > self.max_lon
    }

    /// Returns true if the box contains the given point (inclusive edges).
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        if lat < self.min_lat || lat > self.max_lat {
            return false;
        }
        if self.wraps() {
            lon >= self.min_lon || lon <= self.max_lon
        } else {
            lon >= self.min_lon && lon <= self.max_lon
        }
    }

    /// Longitudinal width in degrees, wrap-aware.
    pub fn width(&self) -> f64 {
        if self.wraps() {
            (self.max_lon - self.min_lon).rem_euclid(360.0)
        } else {
            self.max_lon - self.min_lon
        }
    }

    /// Box area in square degrees, used as the deterministic
    /// "smaller designation first" tie-break in match ordering.
    pub fn area_deg2(&self) -> f64 {
        (self.max_lat - self.min_lat) * self.width()
    }
}

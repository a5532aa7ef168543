//! Point-in-polygon classification.
//!
//! Ray-casting with the even-odd rule, with an explicit boundary policy:
//! a point exactly on a ring edge or vertex — outer or hole — is classified
//! as **inside**. An address that geocodes exactly onto a tract line must
//! never produce a false "not covered" result.

use crate::coord::Coord;
use crate::zone::{Boundary, Polygon, Ring};

use super::normalize_lon;

/// Tolerance for the on-edge test, in degrees (~0.1 mm at the equator).
const EDGE_EPSILON: f64 = 1e-9;

/// Returns true if the point lies inside any polygon piece of the boundary.
pub fn point_in_boundary(point: Coord, boundary: &Boundary) -> bool {
    boundary.iter().any(|polygon| point_in_polygon(point, polygon))
}

/// Returns true if the point lies inside the polygon.
///
/// A point is inside when it is on any ring's boundary, or strictly inside
/// the outer ring and not strictly inside any hole ring. Longitudes are
/// normalized to the polygon's reference meridian first, so rings crossing
/// ±180° are classified correctly.
pub fn point_in_polygon(point: Coord, polygon: &Polygon) -> bool {
    let Some(first) = polygon.outer.vertices.first() else {
        return false;
    };
    let ref_lon = first.lon;
    let p = Coord::new(point.lat, normalize_lon(point.lon, ref_lon));

    // Boundary-inclusive: on any edge of any ring is inside.
    for ring in polygon.rings() {
        if on_ring_edge(p, ring, ref_lon) {
            return true;
        }
    }

    if !crossings_odd(p, &polygon.outer, ref_lon) {
        return false;
    }
    for hole in &polygon.holes {
        if crossings_odd(p, hole, ref_lon) {
            // Strictly inside a hole (on-edge already returned above)
            return false;
        }
    }
    true
}

/// Returns true if `p` lies on the segment from `a` to `b` (inclusive of
/// the endpoints), within [`EDGE_EPSILON`].
pub fn point_on_segment(p: Coord, a: Coord, b: Coord) -> bool {
    let cross = (b.lon - a.lon) * (p.lat - a.lat) - (b.lat - a.lat) * (p.lon - a.lon);
    if cross.abs() > EDGE_EPSILON {
        return false;
    }
    let (min_lat, max_lat) = if a.lat <= b.lat { (a.lat, b.lat) } else { (b.lat, a.lat) };
    let (min_lon, max_lon) = if a.lon <= b.lon { (a.lon, b.lon) } else { (b.lon, a.lon) };
    p.lat >= min_lat - EDGE_EPSILON
        && p.lat <= max_lat + EDGE_EPSILON
        && p.lon >= min_lon - EDGE_EPSILON
        && p.lon <= max_lon + EDGE_EPSILON
}

fn on_ring_edge(p: Coord, ring: &Ring, ref_lon: f64) -> bool {
    ring.edges().any(|(a, b)| {
        let a = Coord::new(a.lat, normalize_lon(a.lon, ref_lon));
        let b = Coord::new(b.lat, normalize_lon(b.lon, ref_lon));
        point_on_segment(p, a, b)
    })
}

/// Even-odd crossing count for a rightward ray from `p`.
///
/// The half-open vertex rule (`>` on one end, `<=` on the other) counts
/// each vertex exactly once, so rays through vertices do not double-count.
fn crossings_odd(p: Coord, ring: &Ring, ref_lon: f64) -> bool {
    let n = ring.vertices.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let vi = ring.vertices[i];
        let vj = ring.vertices[j];
        let (lat_i, lon_i) = (vi.lat, normalize_lon(vi.lon, ref_lon));
        let (lat_j, lon_j) = (vj.lat, normalize_lon(vj.lon, ref_lon));

        if (lat_i > p.lat) != (lat_j > p.lat) {
            let cross_lon = lon_j + (p.lat - lat_j) / (lat_i - lat_j) * (lon_i - lon_j);
            if p.lon < cross_lon {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

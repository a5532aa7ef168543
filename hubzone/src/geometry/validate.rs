//! Ring validation checks used by the dataset loader.

use crate::coord::Coord;
use crate::zone::Ring;

/// Trims an explicit closing vertex (`first == last`) from a raw vertex
/// list. Rings are stored open; closure is implicit.
pub fn close_ring(mut vertices: Vec<Coord>) -> Vec<Coord> {
    if vertices.len() >= 2 {
        let first = vertices[0];
        let last = vertices[vertices.len() - 1];
        if first.lat == last.lat && first.lon == last.lon {
            vertices.pop();
        }
    }
    vertices
}

/// Returns true if any two non-adjacent edges of the ring properly cross.
///
/// Adjacent edges share a vertex by construction and are skipped. Collinear
/// touching is not flagged; only proper crossings (a bowtie) invalidate a
/// ring. O(n²) over edges, acceptable at load time.
pub fn ring_self_intersects(ring: &Ring) -> bool {
    let edges: Vec<(Coord, Coord)> = ring.edges().collect();
    let n = edges.len();
    if n < 4 {
        // A triangle cannot properly self-intersect
        return false;
    }
    for i in 0..n {
        for j in (i + 2)..n {
            // Skip the wrap-around adjacency between the last and first edge
            if i == 0 && j == n - 1 {
                continue;
            }
            let (a, b) = edges[i];
            let (c, d) = edges[j];
            if segments_properly_cross(a, b, c, d) {
                return true;
            }
        }
    }
    false
}

/// Strict segment crossing: the segments intersect at a single interior
/// point of both.
fn segments_properly_cross(a: Coord, b: Coord, c: Coord, d: Coord) -> bool {
    let d1 = orient(c, d, a);
    let d2 = orient(c, d, b);
    let d3 = orient(a, b, c);
    let d4 = orient(a, b, d);
    ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
}

/// Signed area orientation of the triangle (p, q, r).
fn orient(p: Coord, q: Coord, r: Coord) -> f64 {
    (q.lon - p.lon) * (r.lat - p.lat) - (q.lat - p.lat) * (r.lon - p.lon)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(pairs: &[(f64, f64)]) -> Vec<Coord> {
        pairs.iter().map(|&(lat, lon)| Coord::new(lat, lon)).collect()
    }

    // =========================================================================
    // close_ring
    // =========================================================================

    #[test]
    fn test_close_ring_trims_explicit_closure() {
        let open = close_ring(coords(&[(0.0, 0.0), (0.0, 1.0), (1.0, 0.0), (0.0, 0.0)]));
        assert_eq!(open.len(), 3);
    }

    #[test]
    fn test_close_ring_leaves_implicit_closure_alone() {
        let open = close_ring(coords(&[(0.0, 0.0), (0.0, 1.0), (1.0, 0.0)]));
        assert_eq!(open.len(), 3);
    }

    #[test]
    fn test_close_ring_short_input() {
        assert_eq!(close_ring(coords(&[(0.0, 0.0)])).len(), 1);
        assert!(close_ring(Vec::new()).is_empty());
    }

    // =========================================================================
    // ring_self_intersects
    // =========================================================================

    #[test]
    fn test_convex_ring_does_not_intersect() {
        let ring = Ring::new(coords(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]));
        assert!(!ring_self_intersects(&ring));
    }

    #[test]
    fn test_concave_ring_does_not_intersect() {
        let ring = Ring::new(coords(&[
            (0.0, 0.0),
            (0.0, 2.0),
            (1.0, 2.0),
            (1.0, 1.0),
            (2.0, 1.0),
            (2.0, 0.0),
        ]));
        assert!(!ring_self_intersects(&ring));
    }

    #[test]
    fn test_bowtie_intersects() {
        // Edges (0,0)-(1,1) and (1,0)-(0,1) cross at (0.5, 0.5)
        let ring = Ring::new(coords(&[(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0)]));
        assert!(ring_self_intersects(&ring));
    }

    #[test]
    fn test_triangle_never_intersects() {
        let ring = Ring::new(coords(&[(0.0, 0.0), (0.0, 1.0), (1.0, 0.0)]));
        assert!(!ring_self_intersects(&ring));
    }

    #[test]
    fn test_five_point_star_intersects() {
        let ring = Ring::new(coords(&[
            (0.0, 0.0),
            (2.0, 1.0),
            (0.0, 2.0),
            (1.5, 0.5),
            (1.5, 1.5),
        ]));
        assert!(ring_self_intersects(&ring));
    }
}

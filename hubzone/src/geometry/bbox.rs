//! Bounding-box derivation.

use crate::zone::{Boundary, BoundingBox};

use super::{normalize_lon, wrap_delta};

/// Computes the tight bounding box of a boundary, plus whether the boundary
/// straddles the ±180° meridian.
///
/// Crossing is detected per edge: any edge whose raw endpoint longitudes
/// differ by more than 180° must pass through the antimeridian. Extents are
/// computed in the boundary's normalized longitude frame and wrapped back
/// into [-180, 180]; for a crossing boundary the result has
/// `min_lon > max_lon`, the wrapped-interval encoding.
///
/// Returns `None` for a boundary with no vertices.
pub fn enclosing_bbox(boundary: &Boundary) -> Option<(BoundingBox, bool)> {
    let ref_lon = boundary
        .first()
        .and_then(|polygon| polygon.outer.vertices.first())
        .map(|v| v.lon)?;

    let crosses = boundary.iter().any(|polygon| {
        polygon
            .rings()
            .any(|ring| ring.edges().any(|(a, b)| (a.lon - b.lon).abs() > 180.0))
    });

    let mut min_lat = f64::INFINITY;
    let mut max_lat = f64::NEG_INFINITY;
    let mut min_lon = f64::INFINITY;
    let mut max_lon = f64::NEG_INFINITY;

    for polygon in boundary {
        for ring in polygon.rings() {
            for v in &ring.vertices {
                let lon = normalize_lon(v.lon, ref_lon);
                min_lat = min_lat.min(v.lat);
                max_lat = max_lat.max(v.lat);
                min_lon = min_lon.min(lon);
                max_lon = max_lon.max(lon);
            }
        }
    }

    if !min_lat.is_finite() {
        return None;
    }

    // Back into canonical [-180, 180] space; a crossing boundary wraps.
    let bbox = BoundingBox {
        min_lat,
        max_lat,
        min_lon: wrap_delta(min_lon),
        max_lon: wrap_delta(max_lon),
    };
    Some((bbox, crosses))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Coord;
    use crate::zone::{Polygon, Ring};

    fn polygon(coords: &[(f64, f64)]) -> Polygon {
        Polygon::new(
            Ring::new(coords.iter().map(|&(lat, lon)| Coord::new(lat, lon)).collect()),
            Vec::new(),
        )
    }

    #[test]
    fn test_simple_bbox_is_tight() {
        let boundary = vec![polygon(&[(38.0, -77.5), (38.0, -77.0), (39.0, -77.0), (39.0, -77.5)])];
        let (bbox, crosses) = enclosing_bbox(&boundary).unwrap();
        assert!(!crosses);
        assert_eq!(bbox.min_lat, 38.0);
        assert_eq!(bbox.max_lat, 39.0);
        assert_eq!(bbox.min_lon, -77.5);
        assert_eq!(bbox.max_lon, -77.0);
    }

    #[test]
    fn test_bbox_spans_all_pieces_and_holes() {
        let mut piece = polygon(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]);
        piece.holes.push(Ring::new(vec![
            Coord::new(4.0, 4.0),
            Coord::new(4.0, 6.0),
            Coord::new(6.0, 6.0),
        ]));
        let boundary = vec![piece, polygon(&[(20.0, 20.0), (20.0, 21.0), (21.0, 21.0)])];
        let (bbox, _) = enclosing_bbox(&boundary).unwrap();
        assert_eq!(bbox.min_lat, 0.0);
        assert_eq!(bbox.max_lat, 21.0);
        assert_eq!(bbox.min_lon, 0.0);
        assert_eq!(bbox.max_lon, 21.0);
    }

    #[test]
    fn test_antimeridian_bbox_wraps() {
        let boundary = vec![polygon(&[
            (-1.0, 179.0),
            (-1.0, -179.0),
            (1.0, -179.0),
            (1.0, 179.0),
        ])];
        let (bbox, crosses) = enclosing_bbox(&boundary).unwrap();
        assert!(crosses);
        assert!(bbox.wraps());
        assert_eq!(bbox.min_lon, 179.0);
        assert_eq!(bbox.max_lon, -179.0);
        assert!(bbox.contains(0.0, 180.0));
        assert!(!bbox.contains(0.0, 0.0));
    }

    #[test]
    fn test_non_crossing_zone_near_antimeridian_does_not_wrap() {
        let boundary = vec![polygon(&[
            (0.0, 178.0),
            (0.0, 179.5),
            (1.0, 179.5),
            (1.0, 178.0),
        ])];
        let (bbox, crosses) = enclosing_bbox(&boundary).unwrap();
        assert!(!crosses);
        assert!(!bbox.wraps());
        assert_eq!(bbox.min_lon, 178.0);
        assert_eq!(bbox.max_lon, 179.5);
    }

    #[test]
    fn test_empty_boundary_returns_none() {
        assert!(enclosing_bbox(&Vec::new()).is_none());
        let boundary = vec![Polygon::new(Ring::new(Vec::new()), Vec::new())];
        assert!(enclosing_bbox(&boundary).is_none());
    }
}

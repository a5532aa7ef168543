//! Raw record deserialization and per-record validation.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::coord::{self, CoordError};
use crate::geometry::{close_ring, enclosing_bbox, ring_self_intersects};
use crate::zone::{Polygon, Ring, ZoneRecord, ZoneStatus, ZoneType};

/// Why a single record was rejected. Never propagated to the caller; logged
/// by the load loop and counted in the stats.
#[derive(Debug, thiserror::Error)]
pub enum ZoneValidationError {
    #[error("Unreadable record: {0}")]
    Deserialize(#[from] serde_json::Error),
    #[error("Boundary has no rings")]
    EmptyBoundary,
    #[error("Polygon {polygon} ring {ring} has {vertices} distinct vertices (minimum 3)")]
    ShortRing {
        polygon: usize,
        ring: usize,
        vertices: usize,
    },
    #[error("Polygon {polygon} ring {ring} is self-intersecting")]
    SelfIntersectingRing { polygon: usize, ring: usize },
    #[error("{0}")]
    Coordinate(#[from] CoordError),
}

/// Wire shape of one dataset record.
///
/// `boundary` follows the converted-GeoJSON MultiPolygon convention:
/// polygons → rings → `[lon, lat]` vertex pairs, first ring of a polygon is
/// the outer ring, any further rings are holes.
#[derive(Debug, Deserialize)]
struct RawZone {
    id: String,
    name: String,
    zone_type: ZoneType,
    #[serde(default)]
    state: String,
    #[serde(default)]
    county: String,
    status: ZoneStatus,
    #[serde(default)]
    effective_date: Option<DateTime<Utc>>,
    #[serde(default)]
    expiration_date: Option<DateTime<Utc>>,
    boundary: Vec<Vec<Vec<[f64; 2]>>>,
}

/// Validate one raw JSON record into a [`ZoneRecord`].
pub(super) fn parse_record(entry: serde_json::Value) -> Result<ZoneRecord, ZoneValidationError> {
    let raw: RawZone = serde_json::from_value(entry)?;

    let mut boundary = Vec::with_capacity(raw.boundary.len());
    for (polygon_index, raw_polygon) in raw.boundary.iter().enumerate() {
        let mut rings = Vec::with_capacity(raw_polygon.len());
        for (ring_index, raw_ring) in raw_polygon.iter().enumerate() {
            rings.push(parse_ring(raw_ring, polygon_index, ring_index)?);
        }
        let mut rings = rings.into_iter();
        let Some(outer) = rings.next() else {
            return Err(ZoneValidationError::EmptyBoundary);
        };
        boundary.push(Polygon::new(outer, rings.collect()));
    }

    let (bounding_box, crosses_antimeridian) =
        enclosing_bbox(&boundary).ok_or(ZoneValidationError::EmptyBoundary)?;

    Ok(ZoneRecord {
        id: raw.id,
        name: raw.name,
        zone_type: raw.zone_type,
        state: raw.state.to_uppercase(),
        county: raw.county,
        status: raw.status,
        effective_date: raw.effective_date,
        expiration_date: raw.expiration_date,
        boundary,
        bounding_box,
        crosses_antimeridian,
    })
}

fn parse_ring(
    raw_ring: &[[f64; 2]],
    polygon: usize,
    ring: usize,
) -> Result<Ring, ZoneValidationError> {
    let mut vertices = Vec::with_capacity(raw_ring.len());
    for &[lon, lat] in raw_ring {
        vertices.push(coord::validate(lat, lon)?);
    }

    let vertices = close_ring(vertices);
    if vertices.len() < 3 {
        return Err(ZoneValidationError::ShortRing {
            polygon,
            ring,
            vertices: vertices.len(),
        });
    }

    let result = Ring::new(vertices);
    if ring_self_intersects(&result) {
        return Err(ZoneValidationError::SelfIntersectingRing { polygon, ring });
    }
    Ok(result)
}

//! Bounding-box spatial index.
//!
//! A grid of 1°×1° cells keyed by the floor of latitude and longitude. Each
//! zone is registered in every cell its bounding box overlaps, so a point
//! query is one cell lookup plus a bbox filter over the cell's occupants —
//! no false negatives, and false positives are cheap to filter downstream
//! with the point-in-polygon test.
//!
//! The index is built once per snapshot and read-only afterwards; it lives
//! inside an immutable [`Snapshot`](crate::snapshot::Snapshot), so no
//! interior locking is needed.

mod cell;

use std::collections::HashMap;

use crate::zone::ZoneRecord;

pub use cell::GridCell;

/// Grid index over zone bounding boxes.
///
/// Invariant: for any point P and any zone Z whose bounding box contains P,
/// `candidates(P)` yields Z's index.
#[derive(Debug, Default)]
pub struct SpatialIndex {
    cells: HashMap<GridCell, Vec<u32>>,
}

impl SpatialIndex {
    /// Build the index over a slice of zones. Zone identity is the slice
    /// index, stable for the lifetime of the owning snapshot.
    pub fn build(zones: &[ZoneRecord]) -> Self {
        let mut cells: HashMap<GridCell, Vec<u32>> = HashMap::new();
        for (zone_index, zone) in zones.iter().enumerate() {
            for cell in cell::covering_cells(&zone.bounding_box) {
                cells.entry(cell).or_default().push(zone_index as u32);
            }
        }
        tracing::debug!(
            zones = zones.len(),
            cells = cells.len(),
            "Built spatial index"
        );
        Self { cells }
    }

    /// Zone indices whose bounding box contains the query point.
    ///
    /// The caller applies the exact geometric filter.
    pub fn candidates<'a>(
        &'a self,
        zones: &'a [ZoneRecord],
        lat: f64,
        lon: f64,
    ) -> impl Iterator<Item = u32> + 'a {
        self.cells
            .get(&GridCell::from_lat_lon(lat, lon))
            .into_iter()
            .flatten()
            .copied()
            .filter(move |&i| zones[i as usize].bounding_box.contains(lat, lon))
    }

    /// Number of occupied grid cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

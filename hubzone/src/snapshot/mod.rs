//! Immutable dataset snapshots.
//!
//! A [`Snapshot`] is one versioned, fully-indexed copy of the zone dataset:
//! the validated records, an id lookup map, the stable listing order, and
//! the spatial index, all built once and never mutated. The
//! [`SnapshotManager`] owns the "current" pointer and swaps it atomically
//! on reload; readers clone an `Arc` to whichever snapshot was current when
//! their request started and can never observe a half-built or mixed state.

mod manager;
mod refresh;

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::loader::{Dataset, LoadStats};
use crate::spatial::SpatialIndex;
use crate::zone::ZoneRecord;

pub use manager::SnapshotManager;
pub use refresh::spawn_refresh;

/// An immutable, versioned zone dataset plus its indexes.
#[derive(Debug)]
pub struct Snapshot {
    version: u64,
    loaded_at: DateTime<Utc>,
    zones: Vec<ZoneRecord>,
    by_id: HashMap<String, usize>,
    listing_order: Vec<u32>,
    index: SpatialIndex,
    stats: LoadStats,
}

impl Snapshot {
    /// Build a snapshot from a loaded dataset. All derived structures —
    /// id map, listing order, spatial index — are computed here, off the
    /// read path.
    pub(crate) fn build(version: u64, dataset: Dataset) -> Self {
        let Dataset { zones, stats } = dataset;

        let by_id = zones
            .iter()
            .enumerate()
            .map(|(i, zone)| (zone.id.clone(), i))
            .collect();

        // Stable listing order: case-insensitive name, id breaks ties
        let mut listing_order: Vec<u32> = (0..zones.len() as u32).collect();
        listing_order.sort_unstable_by(|&a, &b| {
            let za = &zones[a as usize];
            let zb = &zones[b as usize];
            za.name
                .to_lowercase()
                .cmp(&zb.name.to_lowercase())
                .then_with(|| za.id.cmp(&zb.id))
        });

        let index = SpatialIndex::build(&zones);

        Self {
            version,
            loaded_at: Utc::now(),
            zones,
            by_id,
            listing_order,
            index,
            stats,
        }
    }

    /// Snapshot version, monotonically increasing across installs.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Instant this snapshot was built.
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Accept/reject counts from the load that produced this snapshot.
    pub fn stats(&self) -> LoadStats {
        self.stats
    }

    /// Number of zones in the snapshot.
    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    /// All zones, in source order.
    pub fn zones(&self) -> &[ZoneRecord] {
        &self.zones
    }

    /// O(1) lookup by zone id.
    pub fn get(&self, id: &str) -> Option<&ZoneRecord> {
        self.by_id.get(id).map(|&i| &self.zones[i])
    }

    /// Zones in the stable listing order (name, then id).
    pub fn ordered(&self) -> impl Iterator<Item = &ZoneRecord> {
        self.listing_order.iter().map(|&i| &self.zones[i as usize])
    }

    /// Spatial-index candidates whose bounding box contains the point.
    pub fn candidates(&self, lat: f64, lon: f64) -> impl Iterator<Item = &ZoneRecord> {
        self.index
            .candidates(&self.zones, lat, lon)
            .map(|i| &self.zones[i as usize])
    }
}

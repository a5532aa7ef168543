//! Lookup service implementation.

use std::cmp::Ordering;
use std::sync::Arc;

use chrono::Utc;
use tokio_util::sync::CancellationToken;

use crate::coord;
use crate::geometry::point_in_boundary;
use crate::snapshot::{Snapshot, SnapshotManager};
use crate::zone::ZoneRecord;

use super::error::ServiceError;
use super::settings::{MatchFilter, ServiceSettings};
use super::types::{LocationCheck, Outcome, PageQuery, Pagination, ZonePage};

/// How many listing records to scan between cancellation checks.
const CANCEL_CHECK_STRIDE: usize = 256;

/// Read-side API over the current snapshot.
///
/// The service itself is stateless per request: every operation clones the
/// current snapshot `Arc` once at entry and runs against that snapshot
/// alone. Any number of calls may run concurrently with each other and
/// with snapshot reloads.
#[derive(Debug, Clone)]
pub struct LookupService {
    manager: Arc<SnapshotManager>,
    settings: ServiceSettings,
}

impl LookupService {
    /// Create a service with default settings.
    pub fn new(manager: Arc<SnapshotManager>) -> Self {
        Self::with_settings(manager, ServiceSettings::default())
    }

    /// Create a service with explicit settings.
    pub fn with_settings(manager: Arc<SnapshotManager>, settings: ServiceSettings) -> Self {
        Self { manager, settings }
    }

    /// The service settings.
    pub fn settings(&self) -> &ServiceSettings {
        &self.settings
    }

    fn snapshot(&self) -> Result<Arc<Snapshot>, ServiceError> {
        self.manager.current().ok_or(ServiceError::ServiceUnavailable)
    }

    /// Paginated catalog listing with optional text search.
    ///
    /// `search` matches case-insensitively as a substring of name, state,
    /// or county. Ordering is the snapshot's stable (name, id) listing
    /// order, so identical queries against one snapshot version always
    /// page identically.
    pub fn find_all(
        &self,
        query: &PageQuery,
        token: &CancellationToken,
    ) -> Result<Outcome<ZonePage>, ServiceError> {
        let snapshot = self.snapshot()?;

        let page = query.page.max(1);
        let limit = self.settings.resolve_limit(query.limit);
        let needle = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let mut matches: Vec<&ZoneRecord> = Vec::new();
        for (scanned, zone) in snapshot.ordered().enumerate() {
            if scanned % CANCEL_CHECK_STRIDE == 0 && token.is_cancelled() {
                return Ok(Outcome::Cancelled);
            }
            if let Some(ref needle) = needle {
                if !matches_search(zone, needle) {
                    continue;
                }
            }
            matches.push(zone);
        }

        let total_items = matches.len();
        let total_pages = (total_items as u32).div_ceil(limit);
        let skip = (page - 1) as usize * limit as usize;
        let data = matches
            .into_iter()
            .skip(skip)
            .take(limit as usize)
            .map(ZoneRecord::summary)
            .collect();

        tracing::debug!(
            page,
            limit,
            total_items,
            search = query.search.as_deref().unwrap_or(""),
            "Catalog listing"
        );

        Ok(Outcome::Complete(ZonePage {
            data,
            pagination: Pagination {
                page,
                limit,
                total_items,
                total_pages,
            },
            snapshot_version: snapshot.version(),
        }))
    }

    /// Look up a single zone by id.
    pub fn find_by_id(&self, id: &str) -> Result<ZoneRecord, ServiceError> {
        let snapshot = self.snapshot()?;
        snapshot
            .get(id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))
    }

    /// Determine every zone containing the given point.
    ///
    /// Candidates come from the spatial index and are confirmed with the
    /// exact point-in-polygon test; the result is ordered by zone-type
    /// priority, then bounding-box area (smaller designation first), then
    /// id. An empty result is a successful "not in any HUBZone" answer.
    pub fn check_location(
        &self,
        lat: f64,
        lon: f64,
        token: &CancellationToken,
    ) -> Result<Outcome<LocationCheck>, ServiceError> {
        let point = coord::validate(lat, lon)
            .map_err(|source| ServiceError::InvalidCoordinates { lat, lon, source })?;
        let snapshot = self.snapshot()?;
        let checked_at = Utc::now();

        let mut matches: Vec<&ZoneRecord> = Vec::new();
        for candidate in snapshot.candidates(lat, lon) {
            if token.is_cancelled() {
                return Ok(Outcome::Cancelled);
            }
            if self.settings.match_filter() == MatchFilter::ActiveOnly
                && !candidate.is_active_at(checked_at)
            {
                continue;
            }
            if point_in_boundary(point, &candidate.boundary) {
                matches.push(candidate);
            }
        }

        matches.sort_by(|a, b| {
            a.zone_type
                .priority()
                .cmp(&b.zone_type.priority())
                .then_with(|| {
                    a.bounding_box
                        .area_deg2()
                        .partial_cmp(&b.bounding_box.area_deg2())
                        .unwrap_or(Ordering::Equal)
                })
                .then_with(|| a.id.cmp(&b.id))
        });

        tracing::debug!(lat, lon, matches = matches.len(), "Location check");

        Ok(Outcome::Complete(LocationCheck {
            matching_zones: matches.into_iter().cloned().collect(),
            checked_at,
            snapshot_version: snapshot.version(),
        }))
    }
}

fn matches_search(zone: &ZoneRecord, needle: &str) -> bool {
    zone.name.to_lowercase().contains(needle)
        || zone.state.to_lowercase().contains(needle)
        || zone.county.to_lowercase().contains(needle)
}

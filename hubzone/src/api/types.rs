//! Wire request/response shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::service::{LocationCheck, PageQuery, Pagination, ZonePage};
use crate::zone::{ZoneRecord, ZoneStatus, ZoneSummary, ZoneType};

/// Raw query-string parameters for the catalog listing.
///
/// Values arrive as untyped strings; [`resolve`](Self::resolve) applies
/// the lenient defaults the route contract requires — a malformed or
/// missing `page` becomes 1, a malformed or missing `limit` falls back to
/// the service default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub search: Option<String>,
}

impl ListParams {
    /// Resolve raw parameters into a service query. Never fails.
    pub fn resolve(&self) -> PageQuery {
        let page = self
            .page
            .as_deref()
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|&p| p >= 1)
            .unwrap_or(1);
        let limit = self
            .limit
            .as_deref()
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|&l| l >= 1);
        PageQuery {
            page,
            limit,
            search: self.search.clone(),
        }
    }
}

/// JSON body of a location check request.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CheckRequest {
    pub latitude: f64,
    pub longitude: f64,
}

/// One page of the catalog, as served to the routing layer.
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
    pub data: Vec<ZoneSummary>,
    pub pagination: Pagination,
}

impl From<ZonePage> for ListResponse {
    fn from(page: ZonePage) -> Self {
        Self {
            data: page.data,
            pagination: page.pagination,
        }
    }
}

/// Full zone payload for detail and check responses.
///
/// `boundary` is included only when the caller renders geometry; list
/// views use [`ZoneSummary`] instead.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneDetail {
    pub id: String,
    pub name: String,
    pub zone_type: ZoneType,
    pub state: String,
    pub county: String,
    pub status: ZoneStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<DateTime<Utc>>,
    pub crosses_antimeridian: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundary: Option<Vec<Vec<Vec<[f64; 2]>>>>,
}

impl ZoneDetail {
    /// Build a detail payload, optionally carrying the boundary geometry
    /// back out in the `[lon, lat]` wire convention.
    pub fn from_record(record: &ZoneRecord, with_boundary: bool) -> Self {
        let boundary = with_boundary.then(|| {
            record
                .boundary
                .iter()
                .map(|polygon| {
                    polygon
                        .rings()
                        .map(|ring| ring.vertices.iter().map(|v| [v.lon, v.lat]).collect())
                        .collect()
                })
                .collect()
        });
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            zone_type: record.zone_type,
            state: record.state.clone(),
            county: record.county.clone(),
            status: record.status,
            effective_date: record.effective_date,
            expiration_date: record.expiration_date,
            crosses_antimeridian: record.crosses_antimeridian,
            boundary,
        }
    }
}

/// Response body of a location check.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResponse {
    pub matching_zones: Vec<ZoneDetail>,
    pub checked_at: DateTime<Utc>,
}

impl CheckResponse {
    /// Build a check response. `with_boundary` controls geometry payload
    /// size per caller.
    pub fn from_check(check: &LocationCheck, with_boundary: bool) -> Self {
        Self {
            matching_zones: check
                .matching_zones
                .iter()
                .map(|zone| ZoneDetail::from_record(zone, with_boundary))
                .collect(),
            checked_at: check.checked_at,
        }
    }
}

/// Error body shape shared by all failure responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

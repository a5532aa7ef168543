//! Service request and result types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::zone::{ZoneRecord, ZoneSummary};

/// Completion state of a cancellable operation.
///
/// Cancellation is a control outcome, not an error: a cancelled call
/// returns no partial results and nothing worth logging as a failure.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The operation ran to completion.
    Complete(T),
    /// The caller's token fired before completion.
    Cancelled,
}

impl<T> Outcome<T> {
    /// Returns the completed value, or `None` if cancelled.
    pub fn into_complete(self) -> Option<T> {
        match self {
            Outcome::Complete(value) => Some(value),
            Outcome::Cancelled => None,
        }
    }

    /// Returns true if the operation was cancelled.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Outcome::Cancelled)
    }
}

/// Catalog listing query.
#[derive(Debug, Clone, Default)]
pub struct PageQuery {
    /// 1-indexed page number; zero is treated as 1.
    pub page: u32,
    /// Requested page size; `None` or zero falls back to the service
    /// default, larger values are clamped to the ceiling.
    pub limit: Option<u32>,
    /// Case-insensitive substring filter over name, state, and county.
    pub search: Option<String>,
}

/// Pagination metadata accompanying a listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total_items: usize,
    pub total_pages: u32,
}

/// One page of the zone catalog.
#[derive(Debug, Clone)]
pub struct ZonePage {
    /// Zone summaries in the snapshot's stable listing order.
    pub data: Vec<ZoneSummary>,
    pub pagination: Pagination,
    /// Version of the snapshot the page was served from.
    pub snapshot_version: u64,
}

/// Result of a point-in-zone check.
#[derive(Debug, Clone)]
pub struct LocationCheck {
    /// All zones containing the point, ordered by zone-type priority,
    /// then bounding-box area, then id.
    pub matching_zones: Vec<ZoneRecord>,
    /// Instant the check ran.
    pub checked_at: DateTime<Utc>,
    /// Version of the snapshot the check ran against.
    pub snapshot_version: u64,
}

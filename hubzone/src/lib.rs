//! HUBZone spatial lookup engine.
//!
//! Given a latitude/longitude pair, determines which (possibly
//! overlapping) federally-designated HUBZone polygons contain that point,
//! and supports paginated text search over the zone catalog. The engine is
//! read-mostly: any number of lookups run concurrently against an
//! immutable [`snapshot::Snapshot`] of the dataset, and a reload publishes
//! a fresh snapshot with a single atomic swap.
//!
//! # High-Level API
//!
//! ```ignore
//! use std::sync::Arc;
//! use hubzone::service::LookupService;
//! use hubzone::snapshot::SnapshotManager;
//! use tokio_util::sync::CancellationToken;
//!
//! let manager = Arc::new(SnapshotManager::new());
//! manager.reload_from_path("data/zones.json")?;
//!
//! let service = LookupService::new(manager);
//! let check = service.check_location(38.9072, -77.0369, &CancellationToken::new())?;
//! ```

pub mod api;
pub mod coord;
pub mod geometry;
pub mod loader;
pub mod logging;
pub mod service;
pub mod snapshot;
pub mod spatial;
pub mod zone;

/// Version of the hubzone library and CLI.
///
/// This is synchronized across all components in the workspace.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

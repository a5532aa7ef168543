//! High-level lookup service.
//!
//! [`LookupService`] is the public API of the engine: paginated catalog
//! listing with text search, id lookup, and the point-in-zone check. Every
//! operation acquires one snapshot reference up front and runs entirely
//! against it, so a concurrent reload can never produce a torn result.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use hubzone::service::{LookupService, Outcome};
//! use hubzone::snapshot::SnapshotManager;
//! use tokio_util::sync::CancellationToken;
//!
//! let manager = Arc::new(SnapshotManager::new());
//! manager.reload_from_path("zones.json")?;
//!
//! let service = LookupService::new(manager);
//! let token = CancellationToken::new();
//! if let Outcome::Complete(check) = service.check_location(38.9072, -77.0369, &token)? {
//!     println!("{} matching zones", check.matching_zones.len());
//! }
//! ```

mod error;
mod lookup;
mod settings;
mod types;

pub use error::ServiceError;
pub use lookup::LookupService;
pub use settings::{MatchFilter, ServiceSettings};
pub use types::{LocationCheck, Outcome, PageQuery, Pagination, ZonePage};

//! Shared command plumbing.

use std::path::Path;
use std::sync::Arc;

use hubzone::service::{LookupService, MatchFilter, ServiceSettings};
use hubzone::snapshot::SnapshotManager;

use crate::error::CliError;

/// Load a dataset file and stand up a lookup service over it.
pub fn build_service(dataset: &Path, active_only: bool) -> Result<LookupService, CliError> {
    let manager = Arc::new(SnapshotManager::new());
    manager.reload_from_path(dataset)?;

    let filter = if active_only {
        MatchFilter::ActiveOnly
    } else {
        MatchFilter::All
    };
    Ok(LookupService::with_settings(
        manager,
        ServiceSettings::new().with_match_filter(filter),
    ))
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => tracing::error!(error = %e, "Failed to serialize output"),
    }
}

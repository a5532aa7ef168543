//! Dataset loader.
//!
//! Parses a raw boundary source — a JSON array of zone records in
//! converted-GeoJSON convention (vertex pairs are `[lon, lat]`, boundaries
//! are MultiPolygon-shaped ring arrays) — into validated [`ZoneRecord`]s.
//! Gzip-compressed sources (`.gz` extension) are decompressed transparently.
//!
//! # Failure policy
//!
//! A record that fails validation is dropped with a structured warning and
//! counted in [`LoadStats`]; the load continues. Only a container-level
//! failure (unreadable file, malformed JSON, not an array) aborts with a
//! [`LoadError`], in which case the caller keeps its previous snapshot.

mod raw;

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use crate::zone::ZoneRecord;

pub use raw::ZoneValidationError;

/// Error type for container-level load failures.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Dataset not found at: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed dataset container: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Counts reported by a completed load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadStats {
    /// Records that passed validation.
    pub accepted: usize,
    /// Records dropped by validation.
    pub rejected: usize,
}

/// A validated, not-yet-indexed zone dataset.
#[derive(Debug)]
pub struct Dataset {
    /// Validated zone records, in source order.
    pub zones: Vec<ZoneRecord>,
    /// Accept/reject counts from the load.
    pub stats: LoadStats,
}

/// Load a dataset from a JSON file, decompressing `.gz` sources.
pub fn load_path<P: AsRef<Path>>(path: P) -> Result<Dataset, LoadError> {
    use flate2::read::GzDecoder;

    let path = path.as_ref();
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        tracing::debug!(path = %path.display(), "Loading gzip compressed dataset");
        load_reader(BufReader::new(GzDecoder::new(file)))
    } else {
        load_reader(BufReader::new(file))
    }
}

/// Load a dataset from a reader.
///
/// The container must be a JSON array. Each element is validated
/// independently so one ill-typed or geometrically invalid record cannot
/// abort the load.
pub fn load_reader<R: Read>(reader: R) -> Result<Dataset, LoadError> {
    let entries: Vec<serde_json::Value> = serde_json::from_reader(reader)?;

    let mut zones: Vec<ZoneRecord> = Vec::with_capacity(entries.len());
    let mut seen_ids: HashSet<String> = HashSet::with_capacity(entries.len());
    let mut rejected = 0usize;

    for (position, entry) in entries.into_iter().enumerate() {
        match raw::parse_record(entry) {
            Ok(record) => {
                if !seen_ids.insert(record.id.clone()) {
                    tracing::warn!(
                        position,
                        id = %record.id,
                        "Dropping zone record with duplicate id"
                    );
                    rejected += 1;
                    continue;
                }
                if record.crosses_antimeridian {
                    tracing::info!(id = %record.id, "Zone boundary crosses the antimeridian");
                }
                zones.push(record);
            }
            Err(e) => {
                tracing::warn!(position, error = %e, "Dropping invalid zone record");
                rejected += 1;
            }
        }
    }

    let stats = LoadStats {
        accepted: zones.len(),
        rejected,
    };
    tracing::info!(
        accepted = stats.accepted,
        rejected = stats.rejected,
        "Loaded zone dataset"
    );

    Ok(Dataset { zones, stats })
}

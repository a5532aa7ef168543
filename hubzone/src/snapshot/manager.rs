//! Snapshot ownership and atomic publication.

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::loader::{self, Dataset, LoadError};

use super::Snapshot;

/// Holds the currently-active [`Snapshot`] and swaps it atomically.
///
/// The manager is the only component that ever replaces the current
/// pointer. A new snapshot is built entirely off to the side; publication
/// is a brief write-lock pointer swap, so readers never block on a reload
/// and never see partial state. Superseded snapshots are freed when the
/// last in-flight reader drops its `Arc`.
#[derive(Debug)]
pub struct SnapshotManager {
    current: RwLock<Option<Arc<Snapshot>>>,
    next_version: AtomicU64,
}

impl SnapshotManager {
    /// Create a manager with no snapshot loaded.
    pub fn new() -> Self {
        Self {
            current: RwLock::new(None),
            next_version: AtomicU64::new(1),
        }
    }

    /// The current snapshot, or `None` if no load has succeeded yet.
    ///
    /// Callers hold the returned `Arc` for the duration of one request so
    /// a concurrent swap cannot tear their view.
    pub fn current(&self) -> Option<Arc<Snapshot>> {
        self.current
            .read()
            .expect("snapshot lock poisoned")
            .clone()
    }

    /// Version of the current snapshot, if any.
    pub fn version(&self) -> Option<u64> {
        self.current().map(|s| s.version())
    }

    /// Build a snapshot from a dataset and publish it as current.
    ///
    /// All index construction happens before the lock is taken; the swap
    /// itself is a single pointer store.
    pub fn install(&self, dataset: Dataset) -> Arc<Snapshot> {
        let version = self.next_version.fetch_add(1, Ordering::Relaxed);
        let snapshot = Arc::new(Snapshot::build(version, dataset));

        let mut current = self.current.write().expect("snapshot lock poisoned");
        let previous = current.replace(Arc::clone(&snapshot));
        drop(current);

        tracing::info!(
            version,
            zones = snapshot.zone_count(),
            previous = previous.map(|p| p.version()),
            "Published snapshot"
        );
        snapshot
    }

    /// Load a dataset file and publish it.
    ///
    /// On a container-level load failure the previous snapshot remains
    /// authoritative and the error is returned to the caller.
    pub fn reload_from_path<P: AsRef<Path>>(&self, path: P) -> Result<Arc<Snapshot>, LoadError> {
        let dataset = loader::load_path(path)?;
        Ok(self.install(dataset))
    }
}

impl Default for SnapshotManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::LoadStats;

    fn dataset(ids: &[&str]) -> Dataset {
        let records: Vec<serde_json::Value> = ids
            .iter()
            .map(|id| {
                serde_json::json!({
                    "id": id,
                    "name": format!("Zone {}", id),
                    "zone_type": "redesignated",
                    "state": "PR",
                    "county": "San Juan",
                    "status": "active",
                    "boundary": [[[[-66.2, 18.3], [-66.0, 18.3], [-66.0, 18.5], [-66.2, 18.5]]]],
                })
            })
            .collect();
        loader::load_reader(serde_json::Value::Array(records).to_string().as_bytes()).unwrap()
    }

    #[test]
    fn test_starts_uninitialized() {
        let manager = SnapshotManager::new();
        assert!(manager.current().is_none());
        assert!(manager.version().is_none());
    }

    #[test]
    fn test_install_publishes() {
        let manager = SnapshotManager::new();
        let snapshot = manager.install(dataset(&["A"]));
        assert_eq!(snapshot.version(), 1);
        assert_eq!(manager.version(), Some(1));
    }

    #[test]
    fn test_versions_increase_monotonically() {
        let manager = SnapshotManager::new();
        let first = manager.install(dataset(&["A"]));
        let second = manager.install(dataset(&["A", "B"]));
        assert!(second.version() > first.version());
        assert_eq!(manager.version(), Some(second.version()));
    }

    #[test]
    fn test_held_reference_survives_swap() {
        let manager = SnapshotManager::new();
        manager.install(dataset(&["A"]));

        // An in-flight request holds the old snapshot
        let held = manager.current().unwrap();
        manager.install(dataset(&["A", "B"]));

        assert_eq!(held.zone_count(), 1);
        assert_eq!(manager.current().unwrap().zone_count(), 2);
    }

    #[test]
    fn test_failed_reload_keeps_previous() {
        let manager = SnapshotManager::new();
        manager.install(dataset(&["A"]));
        let before = manager.version();

        let result = manager.reload_from_path("/nonexistent/zones.json");
        assert!(matches!(result, Err(LoadError::NotFound(_))));
        assert_eq!(manager.version(), before);
    }

    #[test]
    fn test_reload_from_path_installs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zones.json");
        let doc = serde_json::json!([{
            "id": "R1",
            "name": "Reloaded",
            "zone_type": "indian_land",
            "state": "OK",
            "county": "Cherokee",
            "status": "active",
            "boundary": [[[[-95.1, 35.8], [-94.9, 35.8], [-94.9, 36.0], [-95.1, 36.0]]]],
        }]);
        std::fs::write(&path, doc.to_string()).unwrap();

        let manager = SnapshotManager::new();
        let snapshot = manager.reload_from_path(&path).unwrap();
        assert_eq!(snapshot.zone_count(), 1);
        assert_eq!(snapshot.stats(), LoadStats { accepted: 1, rejected: 0 });
    }

    #[test]
    fn test_concurrent_readers_during_swaps() {
        use std::thread;

        let manager = Arc::new(SnapshotManager::new());
        manager.install(dataset(&["A"]));

        let writer = {
            let manager = Arc::clone(&manager);
            thread::spawn(move || {
                for _ in 0..20 {
                    manager.install(dataset(&["A", "B"]));
                    manager.install(dataset(&["A"]));
                }
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let manager = Arc::clone(&manager);
                thread::spawn(move || {
                    for _ in 0..100 {
                        let snapshot = manager.current().expect("snapshot always present");
                        // A snapshot is internally consistent regardless of swaps
                        let count = snapshot.zone_count();
                        assert!(count == 1 || count == 2);
                        assert_eq!(snapshot.zones().len(), count);
                    }
                })
            })
            .collect();

        writer.join().expect("writer panicked");
        for reader in readers {
            reader.join().expect("reader panicked");
        }
    }
}

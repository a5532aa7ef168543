//! Periodic dataset refresh task.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use super::SnapshotManager;

/// Spawn a background task that reloads the dataset on a fixed interval
/// until the token is cancelled.
///
/// Each reload runs on the blocking pool (file I/O plus parse). A failed
/// reload is logged and the previous snapshot stays authoritative; the task
/// keeps ticking.
pub fn spawn_refresh(
    manager: Arc<SnapshotManager>,
    path: PathBuf,
    interval: Duration,
    token: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately; the caller has already
        // done (or deliberately skipped) the initial load.
        ticker.tick().await;

        tracing::info!(path = %path.display(), interval_secs = interval.as_secs(), "Dataset refresh task started");

        loop {
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::info!("Dataset refresh task stopping");
                    return;
                }
                _ = ticker.tick() => {
                    let manager = Arc::clone(&manager);
                    let path = path.clone();
                    let result = tokio::task::spawn_blocking(move || {
                        manager.reload_from_path(&path)
                    })
                    .await;

                    match result {
                        Ok(Ok(snapshot)) => tracing::info!(
                            version = snapshot.version(),
                            zones = snapshot.zone_count(),
                            "Dataset refreshed"
                        ),
                        Ok(Err(e)) => tracing::warn!(
                            error = %e,
                            "Dataset refresh failed; keeping previous snapshot"
                        ),
                        Err(e) => tracing::warn!(error = %e, "Dataset refresh task panicked"),
                    }
                }
            }
        }
    })
}

//! Republishing release content while the server runs.

use history_core::content::ContentSource;
use history_core::store::{ReleaseStore, SnapshotHandle, StoreError};

/// Load and validate `source`, then publish it.
///
/// On failure the current snapshot stays in place and keeps serving.
pub fn reload_snapshot(source: &ContentSource, snapshots: &SnapshotHandle) -> Result<(), StoreError> {
    let store = ReleaseStore::load(source)?;
    snapshots.publish(store);
    Ok(())
}

/// Reload content every time the process receives SIGHUP.
#[cfg(unix)]
pub async fn reload_on_hangup(source: ContentSource, snapshots: SnapshotHandle) {
    use tokio::signal::unix::{signal, SignalKind};

    let mut hangup = match signal(SignalKind::hangup()) {
        Ok(hangup) => hangup,
        Err(e) => {
            tracing::warn!("Cannot listen for SIGHUP, content reload disabled: {}", e);
            return;
        }
    };

    while hangup.recv().await.is_some() {
        tracing::info!("SIGHUP received, reloading {}", source);
        if let Err(e) = reload_snapshot(&source, &snapshots) {
            tracing::error!("Reload failed, keeping current release history: {}", e);
        }
    }
}

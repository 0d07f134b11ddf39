use std::sync::{Arc, RwLock};

use super::ReleaseStore;

/// Shared handle to the current [`ReleaseStore`].
///
/// Readers take a cloned `Arc` and render from it without holding any lock,
/// so a reload that publishes a new store never changes what an in-flight
/// render sees. The lock only guards the pointer swap.
#[derive(Debug, Clone, Default)]
pub struct SnapshotHandle {
    current: Arc<RwLock<Option<Arc<ReleaseStore>>>>,
}

impl SnapshotHandle {
    pub fn new(store: ReleaseStore) -> Self {
        Self {
            current: Arc::new(RwLock::new(Some(Arc::new(store)))),
        }
    }

    /// A handle with no content loaded yet.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The current snapshot, or `None` if no content has been published.
    pub fn current(&self) -> Option<Arc<ReleaseStore>> {
        // A poisoned lock still holds a complete pointer; the swap cannot tear.
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        guard.clone()
    }

    /// Replace the current snapshot. Returns the previous one.
    pub fn publish(&self, store: ReleaseStore) -> Option<Arc<ReleaseStore>> {
        let next = Arc::new(store);
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        let previous = guard.replace(next);
        tracing::info!(releases = guard.as_ref().map_or(0, |s| s.len()), "Published release snapshot");
        previous
    }
}

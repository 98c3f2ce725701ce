//! Stale-view marking
//!
//! The `RevalidationBus` decouples mutations from the rendering layer: a
//! successful write publishes the affected view path on a
//! `tokio::sync::broadcast` channel, and whatever caches rendered output
//! for that path subscribes and re-fetches.
//!
//! ```text
//! create/update/delete ──▶ RevalidationBus::revalidate() ──▶ broadcast ──▶ page cache
//! ```
//!
//! Publishing is fire-and-forget: a bus with no subscribers is a normal
//! state, not an error, and the publisher never learns who listened.

use tokio::sync::broadcast;

/// Broadcast channel of view paths that must be recomputed on next access.
#[derive(Clone)]
pub struct RevalidationBus {
    tx: broadcast::Sender<String>,
}

impl RevalidationBus {
    /// Create a bus with the given channel capacity.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Mark the view at `path` as stale.
    pub fn revalidate(&self, path: &str) {
        // send() errs only when nobody is subscribed, which is fine.
        let _ = self.tx.send(path.to_string());
        tracing::debug!("Revalidated view {}", path);
    }

    /// Subscribe to stale-view notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.tx.subscribe()
    }
}

impl Default for RevalidationBus {
    fn default() -> Self {
        Self::new(1024)
    }
}

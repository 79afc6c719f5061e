use std::sync::{PoisonError, RwLock};

use super::snapshot::FleetSnapshot;

/// Single-slot holder of the newest fleet snapshot. Writers race by tick
/// number: a slow computation that lands after a newer one is discarded,
/// never queued.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    inner: RwLock<Option<FleetSnapshot>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Default::default()
    }

    /// Publishes a snapshot unless one with an equal or newer tick is
    /// already in place. Returns whether the snapshot was accepted.
    pub fn publish(&self, snapshot: FleetSnapshot) -> bool {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        match guard.as_ref() {
            Some(current) if current.tick >= snapshot.tick => false,
            _ => {
                *guard = Some(snapshot);
                true
            }
        }
    }

    /// The most recent accepted snapshot, or None before the first tick.
    pub fn latest(&self) -> Option<FleetSnapshot> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

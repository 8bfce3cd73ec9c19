//! The storage seam between the core and the persistence layer.

use std::sync::Mutex;

use crate::errors::Result;
use crate::snapshot::snapshot_model::Snapshot;

/// Trait for snapshot persistence.
///
/// `load` never fails from the caller's point of view: missing or
/// corrupt data yields a default-shaped snapshot (implementations log
/// the cause). `save` is best-effort; on failure the in-memory state
/// remains authoritative for the session.
pub trait SnapshotStore: Send + Sync {
    fn load(&self) -> Snapshot;
    fn save(&self, snapshot: &Snapshot) -> Result<()>;
}

/// In-memory store. Used in tests and whenever no persistence is wanted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Snapshot>,
}

impl MemoryStore {
    pub fn new(snapshot: Snapshot) -> Self {
        MemoryStore {
            inner: Mutex::new(snapshot),
        }
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Snapshot {
        self.inner
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        if let Ok(mut guard) = self.inner.lock() {
            *guard = snapshot.clone();
        }
        Ok(())
    }
}

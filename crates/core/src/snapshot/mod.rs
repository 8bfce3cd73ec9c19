//! Snapshot module - the persisted data model and the store seam.

mod snapshot_model;
mod snapshot_store;

#[cfg(test)]
mod snapshot_tests;

pub use snapshot_model::{ExportFile, ImportMode, Snapshot};
pub use snapshot_store::{MemoryStore, SnapshotStore};

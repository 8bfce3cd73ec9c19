//! JSON file storage implementation for mesobook.
//!
//! This crate persists the snapshot defined in `mesobook-core` as a single
//! JSON document on disk. It is the only place in the workspace that touches
//! the filesystem; the core stays storage-agnostic behind the
//! `SnapshotStore` trait.

pub mod store;
pub mod transfer;

pub use store::JsonFileStore;
pub use transfer::{export_file_name, export_to_file, import_from_file};

// Re-export from mesobook-core for convenience
pub use mesobook_core::errors::{Error, Result, StorageError};
pub use mesobook_core::snapshot::{Snapshot, SnapshotStore};

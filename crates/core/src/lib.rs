//! Mesobook Core - Domain entities, services, and aggregation logic.
//!
//! This crate contains the core business logic for the mesobook budget
//! tracker: the Korean-unit amount codec, transaction records, savings
//! goals, equipment valuation, settings, record analysis, and the
//! snapshot model. It is
//! storage-agnostic and defines the `SnapshotStore` trait that is
//! implemented by the `storage-json` crate.

pub mod amount;
pub mod analysis;
pub mod constants;
pub mod equipment;
pub mod errors;
pub mod export;
pub mod goals;
pub mod ledger;
pub mod records;
pub mod settings;
pub mod snapshot;

// Re-export the state container and snapshot types
pub use ledger::Ledger;
pub use snapshot::{MemoryStore, Snapshot, SnapshotStore};

// Re-export error types
pub use errors::Error;
pub use errors::Result;

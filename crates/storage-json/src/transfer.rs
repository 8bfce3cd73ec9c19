//! Manual backup export and import.
//!
//! Unlike the snapshot store, these files are user-facing: exports are
//! pretty-printed and stamped with an export date, and imports fail loudly
//! instead of falling back to defaults.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use log::info;

use mesobook_core::errors::{Result, StorageError};
use mesobook_core::snapshot::{ExportFile, Snapshot};

/// Timestamped default file name for an export.
pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("mesobook_export_{}.json", now.format("%Y-%m-%d_%H-%M-%S"))
}

/// Writes the snapshot to a pretty-printed export file at `path`.
pub fn export_to_file(snapshot: &Snapshot, path: &Path, now: DateTime<Utc>) -> Result<()> {
    let export = ExportFile {
        snapshot: snapshot.clone(),
        export_date: now,
    };
    let json = serde_json::to_string_pretty(&export)?;
    fs::write(path, json).map_err(|e| StorageError::Write(e.to_string()))?;
    info!("exported snapshot to {}", path.display());
    Ok(())
}

/// Reads a snapshot from an export file.
///
/// The `exportDate` stamp is ignored on the way back in, so plain
/// snapshot files import just as well.
pub fn import_from_file(path: &Path) -> Result<Snapshot> {
    let raw = fs::read_to_string(path).map_err(|e| StorageError::Read(e.to_string()))?;
    let snapshot = serde_json::from_str(&raw)?;
    Ok(snapshot)
}

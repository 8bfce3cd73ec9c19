//! File-backed snapshot store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, error};

use mesobook_core::errors::{Result, StorageError};
use mesobook_core::snapshot::{Snapshot, SnapshotStore};

/// Persists the snapshot as a single JSON document at a fixed path.
///
/// Loads never fail: a missing file means a fresh install and a corrupt
/// file is logged and replaced by defaults on the next save. Writes go
/// through a sibling temp file and a rename so a crash mid-write cannot
/// truncate the previous snapshot.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Snapshot {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("no snapshot at {}, starting empty", self.path.display());
                return Snapshot::default();
            }
            Err(err) => {
                error!("failed to read snapshot {}: {err}", self.path.display());
                return Snapshot::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                error!("corrupt snapshot {}: {err}", self.path.display());
                Snapshot::default()
            }
        }
    }

    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let json = serde_json::to_string(snapshot)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| StorageError::Write(e.to_string()))?;
            }
        }

        let temp = self.temp_path();
        fs::write(&temp, json).map_err(|e| StorageError::Write(e.to_string()))?;
        fs::rename(&temp, &self.path).map_err(|e| StorageError::Write(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Utc;
    use tempfile::TempDir;

    use mesobook_core::records::{extract_tags, Record, RecordType};

    fn store_in(dir: &TempDir) -> JsonFileStore {
        JsonFileStore::new(dir.path().join("mesobook.json"))
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let snapshot = store_in(&dir).load();
        assert_eq!(snapshot, Snapshot::default());
        assert_eq!(snapshot.version, "1.0");
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut snapshot = Snapshot::default();
        snapshot.records.push(Record {
            id: 1,
            record_type: RecordType::Income,
            category: "재획".to_string(),
            amount: 45_000_000,
            memo: "#사냥".to_string(),
            tags: extract_tags("#사냥"),
            date: Utc::now(),
        });
        snapshot.settings.current_meso = 45_000_000;
        store.save(&snapshot).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.records, snapshot.records);
        assert_eq!(loaded.settings.current_meso, 45_000_000);
    }

    #[test]
    fn corrupt_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "{not json").unwrap();
        assert_eq!(store.load(), Snapshot::default());
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/dir/mesobook.json"));
        store.save(&Snapshot::default()).unwrap();
        assert_eq!(store.load(), Snapshot::default());
    }

    #[test]
    fn save_replaces_previous_content() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&Snapshot::default()).unwrap();

        let mut snapshot = Snapshot::default();
        snapshot.settings.dark_mode = true;
        store.save(&snapshot).unwrap();

        assert!(store.load().settings.dark_mode);
        assert!(!store.path().with_extension("json.tmp").exists());
    }
}

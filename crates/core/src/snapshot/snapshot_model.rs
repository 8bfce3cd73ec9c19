//! The single persisted data blob and import semantics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::SNAPSHOT_VERSION;
use crate::equipment::EquipmentBook;
use crate::goals::Goal;
use crate::records::Record;
use crate::settings::Settings;

fn default_version() -> String {
    SNAPSHOT_VERSION.to_string()
}

/// Everything the tracker persists, as one JSON document.
///
/// Unknown fields are ignored on load; missing fields default, so
/// partial or older documents still deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub records: Vec<Record>,
    pub goals: Vec<Goal>,
    pub equipment: EquipmentBook,
    pub settings: Settings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(default = "default_version")]
    pub version: String,
}

impl Default for Snapshot {
    fn default() -> Self {
        Snapshot {
            records: Vec::new(),
            goals: Vec::new(),
            equipment: EquipmentBook::default(),
            settings: Settings::default(),
            last_modified: None,
            version: default_version(),
        }
    }
}

/// How an imported snapshot is combined with the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportMode {
    /// Replace the current snapshot wholesale.
    Overwrite,
    /// Concatenate records and goals, shallow-merge equipment tabs, and
    /// take the incoming settings. Never deduplicates by id.
    Merge,
}

impl Snapshot {
    /// Combines this snapshot with an incoming one per the import mode.
    pub fn merged_with(mut self, incoming: Snapshot, mode: ImportMode) -> Snapshot {
        match mode {
            ImportMode::Overwrite => incoming,
            ImportMode::Merge => {
                self.records.extend(incoming.records);
                self.goals.extend(incoming.goals);
                self.equipment.merge_from(incoming.equipment);
                self.settings = incoming.settings;
                self.version = default_version();
                self
            }
        }
    }
}

/// Snapshot wrapper written to an export file; `export_date` records
/// when the file was produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportFile {
    #[serde(flatten)]
    pub snapshot: Snapshot,
    pub export_date: DateTime<Utc>,
}

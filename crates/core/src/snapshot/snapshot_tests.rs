//! Tests for snapshot serialization and import semantics.

use chrono::Utc;

use crate::equipment::EquipmentTab;
use crate::goals::Goal;
use crate::records::{Record, RecordType};
use crate::snapshot::*;

fn record(id: i64) -> Record {
    Record {
        id,
        record_type: RecordType::Income,
        category: "기타".to_string(),
        amount: 100,
        memo: String::new(),
        tags: Vec::new(),
        date: Utc::now(),
    }
}

fn goal(id: i64) -> Goal {
    Goal {
        id,
        name: "목표".to_string(),
        amount: 100,
        memo: String::new(),
        start_date: Utc::now(),
        achieved: false,
        completed: false,
        used_amount: 0,
        achieved_date: None,
        completed_date: None,
    }
}

#[test]
fn default_snapshot_is_empty_shaped() {
    let snapshot = Snapshot::default();
    assert!(snapshot.records.is_empty());
    assert!(snapshot.goals.is_empty());
    assert!(snapshot.equipment.main.is_empty());
    assert_eq!(snapshot.settings.current_meso, 0);
}

#[test]
fn snapshot_round_trips_through_json() {
    let mut snapshot = Snapshot::default();
    snapshot.records.push(record(1));
    snapshot.goals.push(goal(2));
    snapshot
        .equipment
        .set_slot_value(EquipmentTab::Union1, "weapon", 500)
        .unwrap();
    snapshot.last_modified = Some(Utc::now());

    let json = serde_json::to_string(&snapshot).unwrap();
    let parsed: Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, snapshot);
}

#[test]
fn legacy_document_with_flat_equipment_loads() {
    let json = r#"{
        "records": [],
        "goals": [],
        "equipment": {"weapon": 100, "hat": 50},
        "settings": {"mesoRate": 1200}
    }"#;
    let snapshot: Snapshot = serde_json::from_str(json).unwrap();
    assert_eq!(snapshot.equipment.main.get("weapon"), Some(&100));
    assert!(snapshot.equipment.union1.is_empty());
    assert_eq!(snapshot.version, "1.0");
}

#[test]
fn unknown_fields_are_ignored() {
    let json = r#"{"records": [], "exportDate": "2024-01-01T00:00:00Z", "extra": 42}"#;
    assert!(serde_json::from_str::<Snapshot>(json).is_ok());
}

#[test]
fn merge_concatenates_without_deduplication() {
    let mut current = Snapshot::default();
    current.records.push(record(1));
    current.goals.push(goal(10));
    current
        .equipment
        .set_slot_value(EquipmentTab::Main, "weapon", 100)
        .unwrap();

    let mut incoming = Snapshot::default();
    incoming.records.push(record(1)); // same id on purpose
    incoming.records.push(record(2));
    incoming.goals.push(goal(11));
    incoming
        .equipment
        .set_slot_value(EquipmentTab::Main, "weapon", 999)
        .unwrap();
    incoming.settings.current_meso = 777;

    let merged = current.merged_with(incoming, ImportMode::Merge);
    assert_eq!(merged.records.len(), 3);
    assert_eq!(merged.goals.len(), 2);
    // Incoming wins on equipment key conflicts and settings.
    assert_eq!(merged.equipment.main.get("weapon"), Some(&999));
    assert_eq!(merged.settings.current_meso, 777);
}

#[test]
fn overwrite_replaces_wholesale() {
    let mut current = Snapshot::default();
    current.records.push(record(1));

    let mut incoming = Snapshot::default();
    incoming.records.push(record(2));

    let result = current.merged_with(incoming, ImportMode::Overwrite);
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].id, 2);
}

#[test]
fn export_file_flattens_the_snapshot() {
    let export = ExportFile {
        snapshot: Snapshot::default(),
        export_date: Utc::now(),
    };
    let json = serde_json::to_value(&export).unwrap();
    assert!(json.get("records").is_some());
    assert!(json.get("exportDate").is_some());
    assert!(json.get("snapshot").is_none());

    // An export file parses back as a plain snapshot.
    assert!(serde_json::from_value::<Snapshot>(json).is_ok());
}

#[test]
fn memory_store_round_trips() {
    let store = MemoryStore::default();
    assert_eq!(store.load(), Snapshot::default());

    let mut snapshot = Snapshot::default();
    snapshot.records.push(record(1));
    store.save(&snapshot).unwrap();
    assert_eq!(store.load(), snapshot);
}

//! Equipment slot tables and the per-tab value book.

use std::collections::BTreeMap;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::{Result, ValidationError};

/// Character tabs holding independent equipment valuations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentTab {
    Main,
    Union1,
    Union2,
}

pub const ALL_TABS: [EquipmentTab; 3] = [
    EquipmentTab::Main,
    EquipmentTab::Union1,
    EquipmentTab::Union2,
];

impl EquipmentTab {
    pub fn display_name(&self) -> &'static str {
        match self {
            EquipmentTab::Main => "본캐",
            EquipmentTab::Union1 => "유니온1",
            EquipmentTab::Union2 => "유니온2",
        }
    }
}

/// Display categories for equipment subtotals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotCategory {
    Weapon,
    Armor,
    Accessory,
    Other,
}

/// Maps a slot key to its fixed category. Unknown keys yield `None` and
/// are ignored by aggregation.
pub fn slot_category(slot: &str) -> Option<SlotCategory> {
    match slot {
        "weapon" | "secondary" | "emblem" => Some(SlotCategory::Weapon),
        "hat" | "top" | "bottom" | "shoes" | "gloves" | "cape" | "overall" | "shield" => {
            Some(SlotCategory::Armor)
        }
        "face" | "eye" | "earring" | "ring1" | "ring2" | "ring3" | "ring4" | "pendant1"
        | "pendant2" | "belt" | "shoulder" | "medal" => Some(SlotCategory::Accessory),
        "mechanic" | "dragon" => Some(SlotCategory::Other),
        _ => None,
    }
}

/// Korean display name for a slot key, used by the export report.
pub fn slot_display_name(slot: &str) -> Option<&'static str> {
    let name = match slot {
        "weapon" => "무기",
        "secondary" => "보조무기",
        "emblem" => "엠블렘",
        "hat" => "모자",
        "top" => "상의",
        "bottom" => "하의",
        "shoes" => "신발",
        "gloves" => "장갑",
        "cape" => "망토",
        "overall" => "한벌옷",
        "shield" => "방패",
        "face" => "얼굴장식",
        "eye" => "눈장식",
        "earring" => "귀고리",
        "ring1" => "반지1",
        "ring2" => "반지2",
        "ring3" => "반지3",
        "ring4" => "반지4",
        "pendant1" => "펜던트1",
        "pendant2" => "펜던트2",
        "belt" => "벨트",
        "shoulder" => "어깨장식",
        "medal" => "훈장",
        "mechanic" => "기계심장",
        "dragon" => "용 장비",
        _ => return None,
    };
    Some(name)
}

/// Declared slot values partitioned across the three character tabs.
///
/// The legacy stored shape is a flat slot map without tab keys; it is
/// auto-wrapped into the `main` tab on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentBook {
    pub main: BTreeMap<String, i64>,
    pub union1: BTreeMap<String, i64>,
    pub union2: BTreeMap<String, i64>,
}

impl EquipmentBook {
    pub fn tab(&self, tab: EquipmentTab) -> &BTreeMap<String, i64> {
        match tab {
            EquipmentTab::Main => &self.main,
            EquipmentTab::Union1 => &self.union1,
            EquipmentTab::Union2 => &self.union2,
        }
    }

    pub fn tab_mut(&mut self, tab: EquipmentTab) -> &mut BTreeMap<String, i64> {
        match tab {
            EquipmentTab::Main => &mut self.main,
            EquipmentTab::Union1 => &mut self.union1,
            EquipmentTab::Union2 => &mut self.union2,
        }
    }

    /// Stores a declared value for a known slot. A value of zero removes
    /// the entry.
    pub fn set_slot_value(&mut self, tab: EquipmentTab, slot: &str, value: i64) -> Result<()> {
        if slot_category(slot).is_none() {
            return Err(ValidationError::UnknownSlot(slot.to_string()).into());
        }
        let entries = self.tab_mut(tab);
        if value == 0 {
            entries.remove(slot);
        } else {
            entries.insert(slot.to_string(), value);
        }
        Ok(())
    }

    /// Shallow-merges another book into this one, per tab; incoming
    /// values win on key conflicts.
    pub fn merge_from(&mut self, other: EquipmentBook) {
        self.main.extend(other.main);
        self.union1.extend(other.union1);
        self.union2.extend(other.union2);
    }
}

impl<'de> Deserialize<'de> for EquipmentBook {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;

        // New shape carries at least one tab key; anything else is the
        // legacy flat slot map, wrapped into the main tab.
        let tabbed = ["main", "union1", "union2"]
            .iter()
            .any(|k| raw.contains_key(*k));

        if tabbed {
            let tab = |key: &str| -> std::result::Result<BTreeMap<String, i64>, D::Error> {
                match raw.get(key) {
                    None | Some(Value::Null) => Ok(BTreeMap::new()),
                    Some(value) => coerce_slot_map(value).map_err(D::Error::custom),
                }
            };
            return Ok(EquipmentBook {
                main: tab("main")?,
                union1: tab("union1")?,
                union2: tab("union2")?,
            });
        }

        let mut main = BTreeMap::new();
        for (slot, value) in raw {
            if let Some(v) = value.as_i64() {
                main.insert(slot, v);
            }
        }
        Ok(EquipmentBook {
            main,
            ..EquipmentBook::default()
        })
    }
}

fn coerce_slot_map(value: &Value) -> std::result::Result<BTreeMap<String, i64>, String> {
    let object = value
        .as_object()
        .ok_or_else(|| format!("expected an object of slot values, got {value}"))?;
    // Non-integer values are dropped rather than failing the whole load.
    Ok(object
        .iter()
        .filter_map(|(slot, v)| v.as_i64().map(|n| (slot.clone(), n)))
        .collect())
}

//! Equipment valuation aggregates.

use serde::{Deserialize, Serialize};

use crate::equipment::equipment_model::{
    slot_category, EquipmentBook, EquipmentTab, SlotCategory, ALL_TABS,
};
use crate::settings::{meso_to_cash, Settings};

/// Valuation totals for one equipment tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabTotals {
    pub weapon: i64,
    pub armor: i64,
    pub accessory: i64,
    pub other: i64,
    /// Sum of the four category subtotals.
    pub total: i64,
    pub current_meso: i64,
    /// Current meso plus this tab's equipment value.
    pub expected_total: i64,
    /// Cash value of the expected total at the configured meso rate.
    pub expected_cash: i64,
}

/// Per-category subtotals and derived totals for one tab. Slot keys
/// outside the fixed tables are ignored.
pub fn tab_totals(book: &EquipmentBook, tab: EquipmentTab, settings: &Settings) -> TabTotals {
    let mut totals = TabTotals::default();
    for (slot, value) in book.tab(tab) {
        match slot_category(slot) {
            Some(SlotCategory::Weapon) => totals.weapon += value,
            Some(SlotCategory::Armor) => totals.armor += value,
            Some(SlotCategory::Accessory) => totals.accessory += value,
            Some(SlotCategory::Other) => totals.other += value,
            None => {}
        }
    }
    totals.total = totals.weapon + totals.armor + totals.accessory + totals.other;
    totals.current_meso = settings.current_meso;
    totals.expected_total = settings.current_meso + totals.total;
    totals.expected_cash = meso_to_cash(totals.expected_total, settings);
    totals
}

/// Portfolio-wide equipment value across all three tabs.
pub fn all_tabs_total(book: &EquipmentBook, settings: &Settings) -> i64 {
    ALL_TABS
        .iter()
        .map(|tab| tab_totals(book, *tab, settings).total)
        .sum()
}

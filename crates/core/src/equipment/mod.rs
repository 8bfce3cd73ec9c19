//! Equipment module - per-slot valuation across character tabs.

mod equipment_model;
mod equipment_service;


pub use equipment_model::{
    slot_category, slot_display_name, EquipmentBook, EquipmentTab, SlotCategory, ALL_TABS,
};
pub use equipment_service::{all_tabs_total, tab_totals, TabTotals};

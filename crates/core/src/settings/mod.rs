//! Settings module - user settings and exchange-rate conversions.

mod settings_model;
mod settings_service;


pub use settings_model::{Settings, SettingsUpdate};
pub use settings_service::{meso_to_cash, mepo_to_meso, needed_mepo, update_settings};

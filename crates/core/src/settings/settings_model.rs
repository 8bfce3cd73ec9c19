//! User settings models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// User settings persisted in the snapshot.
///
/// `current_meso` is derived-but-cached: the ledger adjusts it on every
/// record add/delete. Rates are plain decimals; a rate of zero disables
/// the corresponding conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Cash value of 1억 meso.
    pub meso_rate: Decimal,
    /// Mepo needed to buy 1억 meso.
    pub mepo_buy_rate: Decimal,
    /// Mepo received for selling 1억 meso.
    pub mepo_sell_rate: Decimal,
    pub current_mepo: Decimal,
    /// Running meso balance, never negative.
    pub current_meso: i64,
    pub dark_mode: bool,
    pub pattern_notif: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            meso_rate: Decimal::from(1000),
            mepo_buy_rate: Decimal::ZERO,
            mepo_sell_rate: Decimal::ZERO,
            current_mepo: Decimal::ZERO,
            current_meso: 0,
            dark_mode: false,
            pattern_notif: true,
        }
    }
}

/// Partial settings update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub meso_rate: Option<Decimal>,
    pub mepo_buy_rate: Option<Decimal>,
    pub mepo_sell_rate: Option<Decimal>,
    pub current_mepo: Option<Decimal>,
    pub current_meso: Option<i64>,
    pub dark_mode: Option<bool>,
    pub pattern_notif: Option<bool>,
}

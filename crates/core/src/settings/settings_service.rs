//! Settings validation and meso/mepo/cash conversions.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::amount::UNIT_EOK;
use crate::errors::{Result, ValidationError};
use crate::settings::settings_model::{Settings, SettingsUpdate};

/// Applies a partial update after validating the new values.
pub fn update_settings(settings: &mut Settings, update: SettingsUpdate) -> Result<()> {
    if let Some(rate) = update.meso_rate {
        if rate < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "meso rate must not be negative, got {rate}"
            ))
            .into());
        }
        settings.meso_rate = rate;
    }
    if let Some(meso) = update.current_meso {
        if meso < 0 {
            return Err(ValidationError::NonPositiveAmount(meso).into());
        }
        settings.current_meso = meso;
    }
    if let Some(rate) = update.mepo_buy_rate {
        settings.mepo_buy_rate = rate;
    }
    if let Some(rate) = update.mepo_sell_rate {
        settings.mepo_sell_rate = rate;
    }
    if let Some(mepo) = update.current_mepo {
        settings.current_mepo = mepo;
    }
    if let Some(dark) = update.dark_mode {
        settings.dark_mode = dark;
    }
    if let Some(notif) = update.pattern_notif {
        settings.pattern_notif = notif;
    }
    Ok(())
}

/// Cash value of a meso amount at the configured rate:
/// floor(meso / 1억 × meso_rate).
pub fn meso_to_cash(meso: i64, settings: &Settings) -> i64 {
    (Decimal::from(meso) / Decimal::from(UNIT_EOK) * settings.meso_rate)
        .floor()
        .to_i64()
        .unwrap_or(0)
}

/// Meso obtainable by selling the current mepo holdings. Zero when no
/// sell rate is configured.
pub fn mepo_to_meso(settings: &Settings) -> i64 {
    if settings.mepo_sell_rate <= Decimal::ZERO {
        return 0;
    }
    (settings.current_mepo / settings.mepo_sell_rate * Decimal::from(UNIT_EOK))
        .floor()
        .to_i64()
        .unwrap_or(0)
}

/// Mepo needed to buy the given meso amount: ceil(meso / 1억 × buy_rate).
/// Zero when the amount is non-positive or no buy rate is configured.
pub fn needed_mepo(meso: i64, settings: &Settings) -> i64 {
    if meso <= 0 || settings.mepo_buy_rate <= Decimal::ZERO {
        return 0;
    }
    (Decimal::from(meso) / Decimal::from(UNIT_EOK) * settings.mepo_buy_rate)
        .ceil()
        .to_i64()
        .unwrap_or(0)
}

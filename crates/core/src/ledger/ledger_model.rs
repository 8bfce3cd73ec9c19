//! Ledger-level input and aggregate models.

use serde::{Deserialize, Serialize};

/// Optional details for the expense record emitted when a goal is
/// finalized. Missing fields fall back to the default expense category
/// and the goal's name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalExpense {
    pub category: Option<String>,
    pub memo: Option<String>,
}

/// Portfolio-wide asset figures combining the meso balance, mepo
/// holdings, and equipment value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetSummary {
    pub current_meso: i64,
    /// Meso obtainable by selling the current mepo holdings.
    pub mepo_value: i64,
    /// Equipment value across all three tabs.
    pub equipment_total: i64,
    /// Liquid assets: current meso plus the mepo conversion value.
    pub total_assets: i64,
    /// Liquid assets plus equipment value.
    pub expected_total_assets: i64,
    /// Cash value of the liquid assets at the configured meso rate.
    pub total_assets_cash: i64,
    /// Meso still missing across unachieved goals.
    pub goal_remaining_meso: i64,
    /// Mepo needed to buy the missing meso at the configured buy rate.
    pub goal_needed_mepo: i64,
}

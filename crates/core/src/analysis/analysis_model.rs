//! Result models for record analysis and income forecasting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Income projection from the last 30 days of records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeForecast {
    /// Mean income per active day in the window.
    pub daily_average: f64,
    pub weekly: i64,
    pub monthly: i64,
    pub quarterly: i64,
    /// Percentage change between the first and second half of the
    /// daily income series.
    pub trend: f64,
    /// 0-100, derived from the coefficient of variation of daily
    /// income. Low variance means high confidence.
    pub confidence: f64,
}

/// Income aggregate for one hour of the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlySlot {
    pub hour: u32,
    pub total_income: i64,
    /// Number of records (income and expense) logged in this hour.
    pub count: usize,
    pub average_income: f64,
}

/// Hours ranked by average income. Only hours with at least one record
/// appear.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyPatterns {
    /// Top 5 hours, best first.
    pub peaks: Vec<HourlySlot>,
    /// Bottom 3 hours, worst first.
    pub valleys: Vec<HourlySlot>,
}

/// Aggregate for one day of the week (0 = Sunday).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekdayStat {
    pub weekday: u32,
    pub name: String,
    pub total_income: i64,
    pub total_expense: i64,
    pub count: usize,
    pub average_income: f64,
    pub net: i64,
}

/// Aggregate for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStat {
    pub year: i32,
    pub month: u32,
    pub income: i64,
    pub expense: i64,
    pub count: usize,
    pub net: i64,
    /// net / income × 100; zero when the month had no income.
    pub profit_rate: f64,
}

/// Week-over-week income comparison.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthStats {
    /// Percentage change; zero when the previous week had no income.
    pub growth_rate: f64,
    pub last_week_income: i64,
    pub previous_week_income: i64,
}

/// Income/expense efficiency over the last 30 days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EfficiencyStats {
    /// (income − expense) / income × 100. May be negative.
    pub profit_rate: f64,
    /// expense / income × 100.
    pub expense_ratio: f64,
    pub total_income: i64,
    pub total_expense: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Medium,
    High,
}

/// A spending pattern worth notifying the user about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SpendingAlert {
    /// The same expense category was hit repeatedly in the last week.
    #[serde(rename_all = "camelCase")]
    FrequentExpense {
        category: String,
        count: usize,
        severity: AlertSeverity,
    },
    /// A single outsized expense in the last week.
    #[serde(rename_all = "camelCase")]
    LargeExpense {
        category: String,
        amount: i64,
        date: DateTime<Utc>,
        severity: AlertSeverity,
    },
}

impl SpendingAlert {
    pub fn severity(&self) -> AlertSeverity {
        match self {
            SpendingAlert::FrequentExpense { severity, .. } => *severity,
            SpendingAlert::LargeExpense { severity, .. } => *severity,
        }
    }
}

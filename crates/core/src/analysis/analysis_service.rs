//! Pure aggregation and forecasting over record slices.
//!
//! Everything here is a function of `(&[Record], now)` so the results
//! are reproducible in tests; the ledger forwards its record list.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Timelike, Utc};

use crate::analysis::analysis_model::{
    AlertSeverity, EfficiencyStats, GrowthStats, HourlyPatterns, HourlySlot, IncomeForecast,
    MonthlyStat, SpendingAlert, WeekdayStat,
};
use crate::records::{Record, RecordType};

/// Rolling window for forecasts and efficiency stats.
const ANALYSIS_WINDOW_DAYS: i64 = 30;
/// Minimum income records before a forecast is attempted.
const MIN_FORECAST_RECORDS: usize = 3;
/// Peak/valley list sizes for hourly patterns.
const PEAK_HOURS: usize = 5;
const VALLEY_HOURS: usize = 3;
/// Weekly expense-count thresholds for alerts.
const FREQUENT_EXPENSE_MEDIUM: usize = 5;
const FREQUENT_EXPENSE_HIGH: usize = 10;
/// Single-expense amount thresholds for alerts (10억 / 50억).
const LARGE_EXPENSE_MEDIUM: i64 = 1_000_000_000;
const LARGE_EXPENSE_HIGH: i64 = 5_000_000_000;

const WEEKDAY_NAMES: [&str; 7] = [
    "일요일", "월요일", "화요일", "수요일", "목요일", "금요일", "토요일",
];

/// Income summed per calendar day, for records at or after `since`.
pub fn daily_income(records: &[Record], since: DateTime<Utc>) -> BTreeMap<NaiveDate, i64> {
    let mut daily = BTreeMap::new();
    for record in records {
        if record.record_type == RecordType::Income && record.date >= since {
            *daily.entry(record.date.date_naive()).or_insert(0) += record.amount;
        }
    }
    daily
}

/// Percentage change between the first and second half of a series.
/// Fewer than two points, or a zero first-half mean, yields 0.
pub fn analyze_trend(values: &[i64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let (first, second) = values.split_at(values.len() / 2);
    let first_avg = first.iter().sum::<i64>() as f64 / first.len() as f64;
    let second_avg = second.iter().sum::<i64>() as f64 / second.len() as f64;
    if first_avg > 0.0 {
        (second_avg - first_avg) / first_avg * 100.0
    } else {
        0.0
    }
}

/// Confidence score in [0, 100] from the coefficient of variation of
/// the daily series. Fewer than three points yields 0.
pub fn confidence(values: &[i64]) -> f64 {
    if values.len() < MIN_FORECAST_RECORDS {
        return 0.0;
    }
    let mean = values.iter().sum::<i64>() as f64 / values.len() as f64;
    let variance = values
        .iter()
        .map(|v| {
            let d = *v as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / values.len() as f64;
    let cv = if mean > 0.0 { variance.sqrt() / mean } else { 1.0 };
    ((1.0 - cv) * 100.0).clamp(0.0, 100.0)
}

fn project(daily_average: f64, days: f64, trend: f64) -> i64 {
    let base = daily_average * days;
    // Only an upward trend scales the projection; a decline keeps the
    // plain average as the floor.
    let projected = if trend > 0.0 {
        base * (1.0 + trend / 100.0)
    } else {
        base
    };
    projected.floor() as i64
}

/// Income forecast from the last 30 days of daily income.
///
/// Returns `None` with fewer than three income records overall; the
/// caller renders that as an insufficient-data state.
pub fn income_forecast(records: &[Record], now: DateTime<Utc>) -> Option<IncomeForecast> {
    let income_count = records
        .iter()
        .filter(|r| r.record_type == RecordType::Income)
        .count();
    if income_count < MIN_FORECAST_RECORDS {
        return None;
    }

    let since = now - Duration::days(ANALYSIS_WINDOW_DAYS);
    let daily: Vec<i64> = daily_income(records, since).into_values().collect();
    let daily_average = if daily.is_empty() {
        0.0
    } else {
        daily.iter().sum::<i64>() as f64 / daily.len() as f64
    };
    let trend = analyze_trend(&daily);

    Some(IncomeForecast {
        daily_average,
        weekly: project(daily_average, 7.0, trend),
        monthly: project(daily_average, 30.0, trend),
        quarterly: project(daily_average, 90.0, trend),
        trend,
        confidence: confidence(&daily),
    })
}

/// Hours of the day ranked by average income.
///
/// Counts include expense records (an hour busy with spending still
/// counts as activity); only income contributes to the averages.
pub fn hourly_patterns(records: &[Record]) -> HourlyPatterns {
    let mut income = [0i64; 24];
    let mut counts = [0usize; 24];
    for record in records {
        let hour = record.date.hour() as usize;
        counts[hour] += 1;
        if record.record_type == RecordType::Income {
            income[hour] += record.amount;
        }
    }

    let mut slots: Vec<HourlySlot> = (0..24)
        .filter(|&h| counts[h] > 0)
        .map(|h| HourlySlot {
            hour: h as u32,
            total_income: income[h],
            count: counts[h],
            average_income: income[h] as f64 / counts[h] as f64,
        })
        .collect();

    slots.sort_by(|a, b| b.average_income.total_cmp(&a.average_income));
    let peaks = slots.iter().take(PEAK_HOURS).cloned().collect();
    slots.reverse();
    let valleys = slots.into_iter().take(VALLEY_HOURS).collect();
    HourlyPatterns { peaks, valleys }
}

/// Per-weekday aggregates (0 = Sunday), best average income first.
/// All seven days are present even when empty.
pub fn weekday_patterns(records: &[Record]) -> Vec<WeekdayStat> {
    let mut income = [0i64; 7];
    let mut expense = [0i64; 7];
    let mut counts = [0usize; 7];
    for record in records {
        let day = record.date.weekday().num_days_from_sunday() as usize;
        counts[day] += 1;
        match record.record_type {
            RecordType::Income => income[day] += record.amount,
            RecordType::Expense => expense[day] += record.amount,
        }
    }

    let mut stats: Vec<WeekdayStat> = (0..7)
        .map(|d| WeekdayStat {
            weekday: d as u32,
            name: WEEKDAY_NAMES[d].to_string(),
            total_income: income[d],
            total_expense: expense[d],
            count: counts[d],
            average_income: if counts[d] > 0 {
                income[d] as f64 / counts[d] as f64
            } else {
                0.0
            },
            net: income[d] - expense[d],
        })
        .collect();
    stats.sort_by(|a, b| b.average_income.total_cmp(&a.average_income));
    stats
}

/// Per-month aggregates, most recent first, capped at six months.
pub fn monthly_patterns(records: &[Record]) -> Vec<MonthlyStat> {
    let mut months: BTreeMap<(i32, u32), MonthlyStat> = BTreeMap::new();
    for record in records {
        let key = (record.date.year(), record.date.month());
        let entry = months.entry(key).or_insert(MonthlyStat {
            year: key.0,
            month: key.1,
            income: 0,
            expense: 0,
            count: 0,
            net: 0,
            profit_rate: 0.0,
        });
        entry.count += 1;
        match record.record_type {
            RecordType::Income => entry.income += record.amount,
            RecordType::Expense => entry.expense += record.amount,
        }
    }

    months
        .into_values()
        .rev()
        .take(6)
        .map(|mut m| {
            m.net = m.income - m.expense;
            m.profit_rate = if m.income > 0 {
                m.net as f64 / m.income as f64 * 100.0
            } else {
                0.0
            };
            m
        })
        .collect()
}

/// Income of the last 7 days against the 7 days before that.
pub fn growth_rate(records: &[Record], now: DateTime<Utc>) -> GrowthStats {
    let week_ago = now - Duration::days(7);
    let two_weeks_ago = now - Duration::days(14);

    let income: Vec<&Record> = records
        .iter()
        .filter(|r| r.record_type == RecordType::Income)
        .collect();
    let last_week_income: i64 = income
        .iter()
        .filter(|r| r.date >= week_ago)
        .map(|r| r.amount)
        .sum();
    let previous_week_income: i64 = income
        .iter()
        .filter(|r| r.date >= two_weeks_ago && r.date < week_ago)
        .map(|r| r.amount)
        .sum();
    let growth_rate = if previous_week_income > 0 {
        (last_week_income - previous_week_income) as f64 / previous_week_income as f64 * 100.0
    } else {
        0.0
    };

    GrowthStats {
        growth_rate,
        last_week_income,
        previous_week_income,
    }
}

/// Profit rate and expense ratio over the last 30 days. `None` when the
/// window has no income to measure against.
pub fn efficiency(records: &[Record], now: DateTime<Utc>) -> Option<EfficiencyStats> {
    let since = now - Duration::days(ANALYSIS_WINDOW_DAYS);
    let mut total_income = 0i64;
    let mut total_expense = 0i64;
    for record in records.iter().filter(|r| r.date >= since) {
        match record.record_type {
            RecordType::Income => total_income += record.amount,
            RecordType::Expense => total_expense += record.amount,
        }
    }
    if total_income == 0 {
        return None;
    }

    let net = (total_income - total_expense) as f64;
    Some(EfficiencyStats {
        profit_rate: net / total_income as f64 * 100.0,
        expense_ratio: total_expense as f64 / total_income as f64 * 100.0,
        total_income,
        total_expense,
    })
}

/// Spending patterns from the last 7 days worth surfacing: repeated
/// expense categories and single outsized expenses.
pub fn spending_alerts(records: &[Record], now: DateTime<Utc>) -> Vec<SpendingAlert> {
    let week_ago = now - Duration::days(7);
    let recent: Vec<&Record> = records
        .iter()
        .filter(|r| r.record_type == RecordType::Expense && r.date >= week_ago)
        .collect();

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in &recent {
        *counts.entry(record.category.as_str()).or_insert(0) += 1;
    }

    let mut alerts = Vec::new();
    for (category, count) in counts {
        if count > FREQUENT_EXPENSE_HIGH {
            alerts.push(SpendingAlert::FrequentExpense {
                category: category.to_string(),
                count,
                severity: AlertSeverity::High,
            });
        } else if count > FREQUENT_EXPENSE_MEDIUM {
            alerts.push(SpendingAlert::FrequentExpense {
                category: category.to_string(),
                count,
                severity: AlertSeverity::Medium,
            });
        }
    }

    for record in recent {
        if record.amount > LARGE_EXPENSE_MEDIUM {
            alerts.push(SpendingAlert::LargeExpense {
                category: record.category.clone(),
                amount: record.amount,
                date: record.date,
                severity: if record.amount > LARGE_EXPENSE_HIGH {
                    AlertSeverity::High
                } else {
                    AlertSeverity::Medium
                },
            });
        }
    }

    alerts
}

//! Validated record creation and pure aggregation over record slices.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Months, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::MEMO_MAX_LEN;
use crate::errors::{Result, ValidationError};
use crate::records::records_model::{
    extract_tags, NewRecord, PeriodView, Record, RecordTotals, RecordType,
};

/// Builds a validated record from user input.
///
/// Rejects non-positive amounts, categories outside the fixed set for
/// the record type, and over-long memos. The caller (the ledger) is
/// responsible for id uniqueness.
pub fn create_record(input: NewRecord, id: i64, now: DateTime<Utc>) -> Result<Record> {
    if input.amount <= 0 {
        return Err(ValidationError::NonPositiveAmount(input.amount).into());
    }
    if input.category.trim().is_empty() {
        return Err(ValidationError::MissingField("category".to_string()).into());
    }
    if !input.record_type.is_valid_category(&input.category) {
        return Err(ValidationError::UnknownCategory(input.category).into());
    }
    let memo = input.memo.unwrap_or_default();
    if memo.chars().count() > MEMO_MAX_LEN {
        return Err(ValidationError::TooLong {
            field: "memo",
            max: MEMO_MAX_LEN,
        }
        .into());
    }

    Ok(Record {
        id,
        record_type: input.record_type,
        category: input.category,
        amount: input.amount,
        tags: extract_tags(&memo),
        memo,
        date: input.date.unwrap_or(now),
    })
}

/// Start of the rolling window for a period view, computed against the
/// given wall-clock instant.
pub fn period_start(view: PeriodView, now: DateTime<Utc>) -> DateTime<Utc> {
    let today = now.date_naive().and_time(NaiveTime::MIN).and_utc();
    match view {
        PeriodView::Daily => today,
        PeriodView::Weekly => today - Duration::days(7),
        PeriodView::Monthly => today.checked_sub_months(Months::new(1)).unwrap_or(today),
        PeriodView::Yearly => today.checked_sub_months(Months::new(12)).unwrap_or(today),
    }
}

/// Records whose date falls at or after the start of the view's window.
pub fn filter_by_period(records: &[Record], view: PeriodView, now: DateTime<Utc>) -> Vec<Record> {
    let start = period_start(view, now);
    records.iter().filter(|r| r.date >= start).cloned().collect()
}

/// Income/expense/net sums. An empty slice yields all zeros.
pub fn totals(records: &[Record]) -> RecordTotals {
    let mut result = RecordTotals::default();
    for record in records {
        match record.record_type {
            RecordType::Income => result.income_sum += record.amount,
            RecordType::Expense => result.expense_sum += record.amount,
        }
    }
    result.net = result.income_sum - result.expense_sum;
    result
}

/// Per-category roll-up for one record type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStat {
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub category: String,
    pub count: usize,
    pub total: i64,
}

/// Category totals grouped by (type, category), ordered by total
/// descending.
pub fn category_stats(records: &[Record]) -> Vec<CategoryStat> {
    let mut grouped: HashMap<(RecordType, &str), (usize, i64)> = HashMap::new();
    for record in records {
        let entry = grouped
            .entry((record.record_type, record.category.as_str()))
            .or_insert((0, 0));
        entry.0 += 1;
        entry.1 += record.amount;
    }

    let mut stats: Vec<CategoryStat> = grouped
        .into_iter()
        .map(|((record_type, category), (count, total))| CategoryStat {
            record_type,
            category: category.to_string(),
            count,
            total,
        })
        .collect();
    stats.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.category.cmp(&b.category)));
    stats
}

/// Top categories for one record type, largest totals first.
pub fn top_categories(records: &[Record], record_type: RecordType, limit: usize) -> Vec<CategoryStat> {
    category_stats(records)
        .into_iter()
        .filter(|s| s.record_type == record_type)
        .take(limit)
        .collect()
}

/// Optional filters for record search.
#[derive(Debug, Clone, Default)]
pub struct SearchFilters {
    pub record_type: Option<RecordType>,
    pub category: Option<String>,
    pub tag: Option<String>,
    pub date_range: Option<(DateTime<Utc>, DateTime<Utc>)>,
}

/// Text search over memo and category, narrowed by the given filters.
pub fn search_records<'a>(
    records: &'a [Record],
    query: &str,
    filters: &SearchFilters,
) -> Vec<&'a Record> {
    let query = query.to_lowercase();
    records
        .iter()
        .filter(|r| {
            query.is_empty()
                || r.memo.to_lowercase().contains(&query)
                || r.category.to_lowercase().contains(&query)
        })
        .filter(|r| filters.record_type.map_or(true, |t| r.record_type == t))
        .filter(|r| filters.category.as_deref().map_or(true, |c| r.category == c))
        .filter(|r| {
            filters
                .tag
                .as_deref()
                .map_or(true, |t| r.tags.iter().any(|tag| tag == t))
        })
        .filter(|r| {
            filters
                .date_range
                .map_or(true, |(start, end)| r.date >= start && r.date <= end)
        })
        .collect()
}

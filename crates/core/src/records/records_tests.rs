//! Tests for record creation, filtering, and aggregation.

use chrono::{Duration, TimeZone, Utc};

use crate::amount::format_amount;
use crate::errors::Error;
use crate::records::*;

fn record(record_type: RecordType, amount: i64, date: &str) -> Record {
    Record {
        id: 1,
        record_type,
        category: "기타".to_string(),
        amount,
        memo: String::new(),
        tags: Vec::new(),
        date: date.parse().unwrap(),
    }
}

fn new_record(record_type: RecordType, category: &str, amount: i64, memo: &str) -> NewRecord {
    NewRecord {
        record_type,
        category: category.to_string(),
        amount,
        memo: Some(memo.to_string()),
        date: None,
    }
}

#[test]
fn create_record_extracts_tags() {
    let now = Utc::now();
    let created = create_record(
        new_record(RecordType::Income, "재획", 50_000_000, "아케인 사냥 #주간 #재획"),
        now.timestamp_millis(),
        now,
    )
    .unwrap();
    assert_eq!(created.tags, vec!["#주간", "#재획"]);
    assert_eq!(created.date, now);
}

#[test]
fn create_record_rejects_non_positive_amount() {
    let now = Utc::now();
    let result = create_record(new_record(RecordType::Income, "재획", 0, ""), 1, now);
    assert!(matches!(result, Err(Error::Validation(_))));
}

#[test]
fn create_record_rejects_unknown_category() {
    let now = Utc::now();
    let result = create_record(new_record(RecordType::Expense, "재획", 100, ""), 1, now);
    assert!(matches!(result, Err(Error::Validation(_))));
}

#[test]
fn create_record_rejects_over_long_memo() {
    let now = Utc::now();
    let memo = "가".repeat(201);
    let result = create_record(
        new_record(RecordType::Income, "기타", 100, &memo),
        1,
        now,
    );
    assert!(matches!(result, Err(Error::Validation(_))));
}

#[test]
fn totals_for_empty_slice_are_zero() {
    assert_eq!(totals(&[]), RecordTotals::default());
}

#[test]
fn totals_scenario_with_compact_format() {
    let records = vec![
        record(RecordType::Income, 100_000_000, "2024-01-01T00:00:00Z"),
        record(RecordType::Expense, 30_000_000, "2024-01-02T00:00:00Z"),
    ];
    let t = totals(&records);
    assert_eq!(t.income_sum, 100_000_000);
    assert_eq!(t.expense_sum, 30_000_000);
    assert_eq!(t.net, 70_000_000);
    assert_eq!(format_amount(t.net), "7000만");
}

#[test]
fn filter_by_period_uses_rolling_windows() {
    let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
    let records = vec![
        record(RecordType::Income, 1, "2024-06-15T08:00:00Z"),
        record(RecordType::Income, 2, "2024-06-10T08:00:00Z"),
        record(RecordType::Income, 3, "2024-05-20T08:00:00Z"),
        record(RecordType::Income, 4, "2023-08-01T08:00:00Z"),
    ];

    assert_eq!(filter_by_period(&records, PeriodView::Daily, now).len(), 1);
    assert_eq!(filter_by_period(&records, PeriodView::Weekly, now).len(), 2);
    assert_eq!(filter_by_period(&records, PeriodView::Monthly, now).len(), 3);
    assert_eq!(filter_by_period(&records, PeriodView::Yearly, now).len(), 4);
}

#[test]
fn period_start_daily_is_start_of_today() {
    let now = Utc.with_ymd_and_hms(2024, 6, 15, 23, 59, 59).unwrap();
    let start = period_start(PeriodView::Daily, now);
    assert_eq!(start, Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap());
}

#[test]
fn category_stats_groups_and_sorts() {
    let mut a = record(RecordType::Income, 100, "2024-01-01T00:00:00Z");
    a.category = "재획".to_string();
    let mut b = record(RecordType::Income, 300, "2024-01-01T00:00:00Z");
    b.category = "보스 결정석".to_string();
    let mut c = record(RecordType::Income, 200, "2024-01-01T00:00:00Z");
    c.category = "재획".to_string();

    let stats = category_stats(&[a, b, c]);
    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0].category, "보스 결정석");
    assert_eq!(stats[0].total, 300);
    assert_eq!(stats[1].category, "재획");
    assert_eq!(stats[1].count, 2);
    assert_eq!(stats[1].total, 300);
}

#[test]
fn top_categories_limits_by_type() {
    let income = record(RecordType::Income, 100, "2024-01-01T00:00:00Z");
    let expense = record(RecordType::Expense, 500, "2024-01-01T00:00:00Z");
    let top = top_categories(&[income, expense], RecordType::Income, 5);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].record_type, RecordType::Income);
}

#[test]
fn search_matches_memo_and_filters() {
    let now = Utc::now();
    let mut a = create_record(
        new_record(RecordType::Income, "재획", 100, "주간 사냥 #재획"),
        1,
        now,
    )
    .unwrap();
    a.date = now - Duration::days(1);
    let b = create_record(new_record(RecordType::Expense, "큐브", 200, "윗잠 작"), 2, now).unwrap();
    let records = vec![a, b];

    assert_eq!(search_records(&records, "사냥", &SearchFilters::default()).len(), 1);
    assert_eq!(search_records(&records, "", &SearchFilters::default()).len(), 2);

    let filters = SearchFilters {
        tag: Some("#재획".to_string()),
        ..SearchFilters::default()
    };
    assert_eq!(search_records(&records, "", &filters).len(), 1);

    let filters = SearchFilters {
        record_type: Some(RecordType::Expense),
        ..SearchFilters::default()
    };
    assert_eq!(search_records(&records, "", &filters)[0].category, "큐브");
}

#[test]
fn record_serializes_with_original_field_names() {
    let r = record(RecordType::Income, 100, "2024-01-01T00:00:00Z");
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["type"], "income");
    assert_eq!(json["amount"], 100);
    assert!(json.get("recordType").is_none());
}

//! Records module - transaction domain models and aggregation.

mod records_model;
mod records_service;

#[cfg(test)]
mod records_tests;

pub use records_model::{
    extract_tags, strip_tags, NewRecord, PeriodView, Record, RecordTotals, RecordType,
};
pub use records_service::{
    category_stats, create_record, filter_by_period, period_start, search_records, top_categories,
    totals, CategoryStat, SearchFilters,
};

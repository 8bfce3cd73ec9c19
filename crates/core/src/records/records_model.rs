//! Transaction record domain models.

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::{EXPENSE_CATEGORIES, INCOME_CATEGORIES};

lazy_static! {
    /// `#tag` tokens inside a memo (word characters and Hangul)
    static ref RE_TAG: Regex = Regex::new(r"#[\w가-힣]+")
        .expect("Invalid regex pattern");
}

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Income,
    Expense,
}

impl RecordType {
    /// The fixed category set for this record type.
    pub fn categories(&self) -> &'static [&'static str] {
        match self {
            RecordType::Income => INCOME_CATEGORIES,
            RecordType::Expense => EXPENSE_CATEGORIES,
        }
    }

    pub fn is_valid_category(&self, category: &str) -> bool {
        self.categories().contains(&category)
    }
}

/// Domain model representing a logged income or expense.
///
/// Immutable once created except for the memo (which re-derives the tag
/// list). The id is the creation timestamp in milliseconds, kept unique
/// by the ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: i64,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub category: String,
    pub amount: i64,
    #[serde(default)]
    pub memo: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub date: DateTime<Utc>,
}

/// Input model for creating a new record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecord {
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub category: String,
    pub amount: i64,
    #[serde(default)]
    pub memo: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

/// Rolling time windows for record filtering, anchored to "now" at call
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PeriodView {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// Income/expense sums over a record slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordTotals {
    pub income_sum: i64,
    pub expense_sum: i64,
    pub net: i64,
}

/// Extracts `#tag` tokens from a memo. Cosmetic metadata, not an index.
pub fn extract_tags(memo: &str) -> Vec<String> {
    RE_TAG
        .find_iter(memo)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// The memo text with its `#tag` tokens removed.
pub fn strip_tags(memo: &str) -> String {
    RE_TAG.replace_all(memo, "").trim().to_string()
}

/// Income categories, fixed set per record type.
pub const INCOME_CATEGORIES: &[&str] = &["보스 결정석", "재획", "아이템 판매", "메포 교환", "기타"];

/// Expense categories.
pub const EXPENSE_CATEGORIES: &[&str] = &["큐브", "스타포스", "아이템 구매", "메포 교환", "기타"];

/// Fallback category used when a goal is finalized without one.
pub const DEFAULT_EXPENSE_CATEGORY: &str = "기타";

/// Maximum number of non-completed goals that may exist at once.
pub const MAX_ACTIVE_GOALS: usize = 5;

/// Maximum goal name length, in characters.
pub const GOAL_NAME_MAX_LEN: usize = 50;

/// Maximum memo length, in characters.
pub const MEMO_MAX_LEN: usize = 200;

/// Snapshot schema version written on save.
pub const SNAPSHOT_VERSION: &str = "1.0";

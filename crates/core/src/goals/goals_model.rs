//! Savings-goal domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of a goal. Linear, no back-transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    Pending,
    Achieved,
    Completed,
}

/// Domain model representing a savings goal.
///
/// Progress is measured against income recorded at or after `start_date`,
/// minus `used_amount` (the portion already consumed when the goal was
/// finalized into an expense record).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: i64,
    pub name: String,
    pub amount: i64,
    #[serde(default)]
    pub memo: String,
    pub start_date: DateTime<Utc>,
    pub achieved: bool,
    pub completed: bool,
    #[serde(default)]
    pub used_amount: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achieved_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<DateTime<Utc>>,
}

impl Goal {
    pub fn status(&self) -> GoalStatus {
        if self.completed {
            GoalStatus::Completed
        } else if self.achieved {
            GoalStatus::Achieved
        } else {
            GoalStatus::Pending
        }
    }

    /// A goal counts against the active cap until it is completed.
    pub fn is_active(&self) -> bool {
        !self.completed
    }
}

/// Input model for creating a new goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub name: String,
    pub amount: i64,
    #[serde(default)]
    pub memo: Option<String>,
}

/// Progress of a single goal at one recomputation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub goal_id: i64,
    pub target_amount: i64,
    /// Income since the start date minus the used amount. May be
    /// negative when the used amount exceeds accrued income.
    pub current_amount: i64,
    /// Percentage clamped to [0, 100], even when overachieved.
    pub progress: f64,
    pub achieved: bool,
    /// True only on the recomputation where `achieved` flipped.
    pub newly_achieved: bool,
}

/// Aggregate progress across active goals.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallProgress {
    pub total_amount: i64,
    pub current_amount: i64,
    pub progress: f64,
    pub achieved_count: usize,
    pub total_count: usize,
}

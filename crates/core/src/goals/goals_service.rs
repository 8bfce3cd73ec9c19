//! Goal creation, progress recomputation, and the achieved transition.

use chrono::{DateTime, Utc};
use log::debug;

use crate::constants::{GOAL_NAME_MAX_LEN, MAX_ACTIVE_GOALS, MEMO_MAX_LEN};
use crate::errors::{GoalError, Result, ValidationError};
use crate::goals::goals_model::{Goal, GoalProgress, NewGoal, OverallProgress};
use crate::records::{Record, RecordType};

/// Builds a validated goal from user input.
///
/// Rejects creation when the active (non-completed) goal cap is already
/// reached, or when the name/amount/memo fail basic validation.
pub fn create_goal(existing: &[Goal], input: NewGoal, id: i64, now: DateTime<Utc>) -> Result<Goal> {
    let active = existing.iter().filter(|g| g.is_active()).count();
    if active >= MAX_ACTIVE_GOALS {
        return Err(GoalError::ActiveLimitReached(MAX_ACTIVE_GOALS).into());
    }

    let name = input.name.trim().to_string();
    if name.is_empty() {
        return Err(ValidationError::MissingField("name".to_string()).into());
    }
    if name.chars().count() > GOAL_NAME_MAX_LEN {
        return Err(ValidationError::TooLong {
            field: "name",
            max: GOAL_NAME_MAX_LEN,
        }
        .into());
    }
    if input.amount <= 0 {
        return Err(ValidationError::NonPositiveAmount(input.amount).into());
    }
    let memo = input.memo.unwrap_or_default();
    if memo.chars().count() > MEMO_MAX_LEN {
        return Err(ValidationError::TooLong {
            field: "memo",
            max: MEMO_MAX_LEN,
        }
        .into());
    }

    Ok(Goal {
        id,
        name,
        amount: input.amount,
        memo,
        start_date: now,
        achieved: false,
        completed: false,
        used_amount: 0,
        achieved_date: None,
        completed_date: None,
    })
}

/// Income accrued at or after the goal's start date, minus the used
/// amount.
fn current_amount(goal: &Goal, records: &[Record]) -> i64 {
    let income: i64 = records
        .iter()
        .filter(|r| r.record_type == RecordType::Income && r.date >= goal.start_date)
        .map(|r| r.amount)
        .sum();
    income - goal.used_amount
}

fn progress_of(goal: &Goal, current: i64) -> f64 {
    if goal.amount <= 0 {
        return 0.0;
    }
    (current as f64 / goal.amount as f64 * 100.0).clamp(0.0, 100.0)
}

/// Recomputes progress for every active goal without mutating anything.
///
/// `newly_achieved` marks goals whose stored `achieved` flag is stale;
/// callers that own the goal list apply the transition via
/// [`apply_progress`].
pub fn compute_progress(goals: &[Goal], records: &[Record]) -> Vec<GoalProgress> {
    goals
        .iter()
        .filter(|g| g.is_active())
        .map(|goal| {
            let current = current_amount(goal, records);
            let achieved = goal.achieved || current >= goal.amount;
            GoalProgress {
                goal_id: goal.id,
                target_amount: goal.amount,
                current_amount: current,
                progress: progress_of(goal, current),
                achieved,
                newly_achieved: achieved && !goal.achieved,
            }
        })
        .collect()
}

/// Recomputes progress and applies the Pending -> Achieved transition to
/// the goal list. Must be re-run after every record mutation.
pub fn apply_progress(
    goals: &mut [Goal],
    records: &[Record],
    now: DateTime<Utc>,
) -> Vec<GoalProgress> {
    let progress = compute_progress(goals, records);
    for entry in progress.iter().filter(|p| p.newly_achieved) {
        if let Some(goal) = goals.iter_mut().find(|g| g.id == entry.goal_id) {
            debug!("goal {} ({}) achieved", goal.id, goal.name);
            goal.achieved = true;
            goal.achieved_date = Some(now);
        }
    }
    progress
}

/// Aggregate progress across the given per-goal entries. Overachieved
/// goals contribute at most their target to the current total.
pub fn overall_progress(progress: &[GoalProgress]) -> OverallProgress {
    if progress.is_empty() {
        return OverallProgress::default();
    }

    let total_amount: i64 = progress.iter().map(|p| p.target_amount).sum();
    let current_amount: i64 = progress
        .iter()
        .map(|p| p.current_amount.clamp(0, p.target_amount))
        .sum();
    let overall = if total_amount > 0 {
        (current_amount as f64 / total_amount as f64 * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };

    OverallProgress {
        total_amount,
        current_amount,
        progress: overall,
        achieved_count: progress.iter().filter(|p| p.achieved).count(),
        total_count: progress.len(),
    }
}

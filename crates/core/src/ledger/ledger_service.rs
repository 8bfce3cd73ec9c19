//! The state container replacing the original's module-level globals.
//!
//! All mutations flow through the `Ledger`: it keeps the running meso
//! balance in sync with record changes, re-runs goal progress after
//! every record mutation, and persists best-effort: a failed save is
//! logged and the in-memory state stays authoritative for the session.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, warn};

use crate::analysis::{income_forecast, spending_alerts, IncomeForecast, SpendingAlert};
use crate::constants::{DEFAULT_EXPENSE_CATEGORY, MEMO_MAX_LEN};
use crate::equipment::{all_tabs_total, tab_totals, EquipmentBook, EquipmentTab, TabTotals};
use crate::errors::{GoalError, RecordError, Result, ValidationError};
use crate::goals::{
    apply_progress, compute_progress, create_goal, overall_progress, Goal, GoalProgress, NewGoal,
    OverallProgress,
};
use crate::ledger::ledger_model::{AssetSummary, GoalExpense};
use crate::records::{
    create_record, extract_tags, filter_by_period, totals, NewRecord, PeriodView, Record,
    RecordTotals, RecordType,
};
use crate::settings::{
    meso_to_cash, mepo_to_meso, needed_mepo, update_settings, Settings, SettingsUpdate,
};
use crate::snapshot::{ImportMode, Snapshot, SnapshotStore};

pub struct Ledger {
    snapshot: Snapshot,
    store: Arc<dyn SnapshotStore>,
}

impl Ledger {
    /// Loads the stored snapshot and brings goal progress up to date.
    pub fn open(store: Arc<dyn SnapshotStore>) -> Self {
        let snapshot = store.load();
        let mut ledger = Ledger { snapshot, store };
        apply_progress(
            &mut ledger.snapshot.goals,
            &ledger.snapshot.records,
            Utc::now(),
        );
        ledger
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn records(&self) -> &[Record] {
        &self.snapshot.records
    }

    pub fn goals(&self) -> &[Goal] {
        &self.snapshot.goals
    }

    pub fn equipment(&self) -> &EquipmentBook {
        &self.snapshot.equipment
    }

    pub fn settings(&self) -> &Settings {
        &self.snapshot.settings
    }

    /// Creation-timestamp id, bumped past any existing id so concurrent
    /// same-millisecond creations stay unique.
    fn allocate_id(&self, now: DateTime<Utc>) -> i64 {
        let mut id = now.timestamp_millis();
        while self.snapshot.records.iter().any(|r| r.id == id)
            || self.snapshot.goals.iter().any(|g| g.id == id)
        {
            id += 1;
        }
        id
    }

    fn persist(&mut self) {
        self.snapshot.last_modified = Some(Utc::now());
        if let Err(e) = self.store.save(&self.snapshot) {
            warn!("snapshot save failed, keeping in-memory state: {e}");
        }
    }

    /// Validates and inserts a record, adjusting the meso balance.
    /// Progress update and persistence are left to the caller so that
    /// compound operations save once.
    fn insert_record(&mut self, input: NewRecord, now: DateTime<Utc>) -> Result<Record> {
        let record = create_record(input, self.allocate_id(now), now)?;
        let settings = &mut self.snapshot.settings;
        match record.record_type {
            RecordType::Income => settings.current_meso += record.amount,
            // The balance never goes negative.
            RecordType::Expense => {
                settings.current_meso = (settings.current_meso - record.amount).max(0)
            }
        }
        self.snapshot.records.push(record.clone());
        Ok(record)
    }

    /// Logs a transaction. Returns the created record.
    pub fn add_record(&mut self, input: NewRecord) -> Result<Record> {
        let now = Utc::now();
        let record = self.insert_record(input, now)?;
        apply_progress(&mut self.snapshot.goals, &self.snapshot.records, now);
        self.persist();
        Ok(record)
    }

    /// Deletes a record by id, reversing its effect on the meso balance.
    pub fn delete_record(&mut self, id: i64) -> Result<Record> {
        let index = self
            .snapshot
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(RecordError::NotFound(id))?;
        let record = self.snapshot.records.remove(index);

        let settings = &mut self.snapshot.settings;
        match record.record_type {
            RecordType::Income => {
                settings.current_meso = (settings.current_meso - record.amount).max(0)
            }
            RecordType::Expense => settings.current_meso += record.amount,
        }

        apply_progress(&mut self.snapshot.goals, &self.snapshot.records, Utc::now());
        self.persist();
        Ok(record)
    }

    /// Replaces a record's memo and re-derives its tags. Everything else
    /// is immutable after creation.
    pub fn update_record_memo(&mut self, id: i64, memo: &str) -> Result<()> {
        if memo.chars().count() > MEMO_MAX_LEN {
            return Err(ValidationError::TooLong {
                field: "memo",
                max: MEMO_MAX_LEN,
            }
            .into());
        }
        let record = self
            .snapshot
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(RecordError::NotFound(id))?;
        record.memo = memo.to_string();
        record.tags = extract_tags(memo);
        self.persist();
        Ok(())
    }

    /// Creates a savings goal, subject to the active-goal cap.
    pub fn add_goal(&mut self, input: NewGoal) -> Result<Goal> {
        let now = Utc::now();
        let goal = create_goal(&self.snapshot.goals, input, self.allocate_id(now), now)?;
        self.snapshot.goals.push(goal.clone());
        self.persist();
        Ok(goal)
    }

    /// Finalizes an achieved goal, optionally emitting a paired expense
    /// record worth the goal's remaining amount.
    ///
    /// Returns the emitted expense record, if any. Only legal from the
    /// achieved state.
    pub fn complete_goal(
        &mut self,
        id: i64,
        expense: Option<GoalExpense>,
    ) -> Result<Option<Record>> {
        let now = Utc::now();
        let index = self
            .snapshot
            .goals
            .iter()
            .position(|g| g.id == id)
            .ok_or(GoalError::NotFound(id))?;
        let (remaining, goal_name) = {
            let goal = &self.snapshot.goals[index];
            if goal.completed || !goal.achieved {
                return Err(GoalError::NotAchieved(id).into());
            }
            (goal.amount - goal.used_amount, goal.name.clone())
        };

        let mut emitted = None;
        if let Some(expense) = expense {
            if remaining > 0 {
                let input = NewRecord {
                    record_type: RecordType::Expense,
                    category: expense
                        .category
                        .unwrap_or_else(|| DEFAULT_EXPENSE_CATEGORY.to_string()),
                    amount: remaining,
                    memo: Some(expense.memo.unwrap_or(goal_name)),
                    date: None,
                };
                emitted = Some(self.insert_record(input, now)?);
            }
        }

        let goal = &mut self.snapshot.goals[index];
        goal.completed = true;
        goal.completed_date = Some(now);
        goal.used_amount = goal.amount;
        debug!("goal {} completed", id);

        apply_progress(&mut self.snapshot.goals, &self.snapshot.records, now);
        self.persist();
        Ok(emitted)
    }

    /// Deletes a goal. Legal from any state; existing records are left
    /// untouched.
    pub fn delete_goal(&mut self, id: i64) -> Result<Goal> {
        let index = self
            .snapshot
            .goals
            .iter()
            .position(|g| g.id == id)
            .ok_or(GoalError::NotFound(id))?;
        let goal = self.snapshot.goals.remove(index);
        self.persist();
        Ok(goal)
    }

    /// Stores a declared equipment value for a known slot.
    pub fn set_slot_value(&mut self, tab: EquipmentTab, slot: &str, value: i64) -> Result<()> {
        self.snapshot.equipment.set_slot_value(tab, slot, value)?;
        self.persist();
        Ok(())
    }

    /// Applies a partial settings update.
    pub fn update_settings(&mut self, update: SettingsUpdate) -> Result<()> {
        update_settings(&mut self.snapshot.settings, update)?;
        self.persist();
        Ok(())
    }

    /// Combines an imported snapshot with the current one per the chosen
    /// mode, then refreshes goal progress.
    pub fn import(&mut self, incoming: Snapshot, mode: ImportMode) {
        self.snapshot = std::mem::take(&mut self.snapshot).merged_with(incoming, mode);
        apply_progress(&mut self.snapshot.goals, &self.snapshot.records, Utc::now());
        self.persist();
    }

    // === Read-side aggregates ===

    /// Records within the rolling window of the given view.
    pub fn filtered_records(&self, view: PeriodView) -> Vec<Record> {
        filter_by_period(&self.snapshot.records, view, Utc::now())
    }

    /// Income/expense/net sums for the given view's window.
    pub fn period_totals(&self, view: PeriodView) -> RecordTotals {
        totals(&self.filtered_records(view))
    }

    /// Current per-goal progress, without mutating stored flags.
    pub fn goal_progress(&self) -> Vec<GoalProgress> {
        compute_progress(&self.snapshot.goals, &self.snapshot.records)
    }

    /// Aggregate progress across active goals.
    pub fn overall_goal_progress(&self) -> OverallProgress {
        overall_progress(&self.goal_progress())
    }

    /// Valuation totals for one equipment tab.
    pub fn tab_totals(&self, tab: EquipmentTab) -> TabTotals {
        tab_totals(&self.snapshot.equipment, tab, &self.snapshot.settings)
    }

    /// Income projection from the recent record history. `None` until
    /// enough income records exist.
    pub fn income_forecast(&self) -> Option<IncomeForecast> {
        income_forecast(&self.snapshot.records, Utc::now())
    }

    /// Spending alerts for the last week. Empty when pattern
    /// notifications are switched off in the settings.
    pub fn spending_alerts(&self) -> Vec<SpendingAlert> {
        if !self.snapshot.settings.pattern_notif {
            return Vec::new();
        }
        spending_alerts(&self.snapshot.records, Utc::now())
    }

    /// Portfolio-wide asset figures.
    pub fn asset_summary(&self) -> AssetSummary {
        let settings = &self.snapshot.settings;
        let mepo_value = mepo_to_meso(settings);
        let equipment_total = all_tabs_total(&self.snapshot.equipment, settings);
        let total_assets = settings.current_meso + mepo_value;

        let goal_remaining_meso: i64 = self
            .goal_progress()
            .iter()
            .filter(|p| !p.achieved)
            .map(|p| (p.target_amount - p.current_amount).max(0))
            .sum();

        AssetSummary {
            current_meso: settings.current_meso,
            mepo_value,
            equipment_total,
            total_assets,
            expected_total_assets: total_assets + equipment_total,
            total_assets_cash: meso_to_cash(total_assets, settings),
            goal_remaining_meso,
            goal_needed_mepo: needed_mepo(goal_remaining_meso, settings),
        }
    }
}

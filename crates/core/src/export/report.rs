//! Sectioned delimited report over a full snapshot.
//!
//! The output is a plain-text file Excel opens directly: a UTF-8 BOM,
//! a short header, then one `=== 섹션 ===` block per enabled section.

use chrono::{DateTime, Utc};

use crate::equipment::{slot_display_name, ALL_TABS};
use crate::goals::{compute_progress, Goal};
use crate::records::{category_stats, strip_tags, totals, Record, RecordType};
use crate::snapshot::Snapshot;

/// Field separator for the generated report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Semicolon,
    Tab,
}

impl Delimiter {
    fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::Semicolon => ";",
            Delimiter::Tab => "\t",
        }
    }
}

/// Section toggles and the optional date window for the report.
///
/// The date range applies to records only; goals and equipment are
/// point-in-time state and are always exported whole.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub delimiter: Delimiter,
    pub include_summary: bool,
    pub include_records: bool,
    pub include_goals: bool,
    pub include_equipment: bool,
    pub date_range: Option<(DateTime<Utc>, DateTime<Utc>)>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            delimiter: Delimiter::default(),
            include_summary: true,
            include_records: true,
            include_goals: true,
            include_equipment: true,
            date_range: None,
        }
    }
}

/// Wraps a field in double quotes, doubling any internal quotes.
fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn type_label(record_type: RecordType) -> &'static str {
    match record_type {
        RecordType::Income => "수익",
        RecordType::Expense => "지출",
    }
}

fn goal_status_label(goal: &Goal, progress: f64) -> &'static str {
    if goal.completed {
        "완료"
    } else if progress >= 100.0 {
        "달성"
    } else {
        "진행중"
    }
}

/// Builds the full report text for a snapshot.
pub fn build_report(snapshot: &Snapshot, options: &ReportOptions, now: DateTime<Utc>) -> String {
    let sep = options.delimiter.as_str();
    let mut lines: Vec<String> = Vec::new();

    lines.push("메이플 쌀먹 가계부 데이터 내보내기".to_string());
    lines.push(format!("내보낸 날짜: {}", now.format("%Y-%m-%d %H:%M:%S")));
    match options.date_range {
        Some((start, end)) => lines.push(format!(
            "데이터 기간: {} ~ {}",
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d")
        )),
        None => lines.push("데이터 기간: 전체 기간".to_string()),
    }
    lines.push(String::new());

    let records: Vec<Record> = match options.date_range {
        Some((start, end)) => snapshot
            .records
            .iter()
            .filter(|r| r.date >= start && r.date <= end)
            .cloned()
            .collect(),
        None => snapshot.records.clone(),
    };

    if options.include_summary {
        push_summary(&mut lines, snapshot, &records, sep);
    }
    if options.include_records && !records.is_empty() {
        push_records(&mut lines, &records, sep);
    }
    if options.include_goals && !snapshot.goals.is_empty() {
        push_goals(&mut lines, snapshot, sep);
    }
    if options.include_equipment {
        push_equipment(&mut lines, snapshot, sep);
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    format!("\u{feff}{}", lines.join("\n"))
}

fn push_summary(lines: &mut Vec<String>, snapshot: &Snapshot, records: &[Record], sep: &str) {
    let sums = totals(records);
    lines.push("=== 요약 정보 ===".to_string());
    lines.push(format!("현재 보유 메소{sep}{}", snapshot.settings.current_meso));
    lines.push(format!("총 수익{sep}{}", sums.income_sum));
    lines.push(format!("총 지출{sep}{}", sums.expense_sum));
    lines.push(format!("순이익{sep}{}", sums.net));
    lines.push(format!("총 기록 수{sep}{}", records.len()));
    lines.push(String::new());

    lines.push("=== 카테고리별 통계 ===".to_string());
    lines.push(["유형", "카테고리", "횟수", "총액"].join(sep));
    for stat in category_stats(records) {
        lines.push(
            [
                type_label(stat.record_type).to_string(),
                stat.category,
                stat.count.to_string(),
                stat.total.to_string(),
            ]
            .join(sep),
        );
    }
    lines.push(String::new());
}

fn push_records(lines: &mut Vec<String>, records: &[Record], sep: &str) {
    lines.push("=== 수익/지출 기록 ===".to_string());
    lines.push(["날짜", "시간", "유형", "카테고리", "금액", "메모", "태그"].join(sep));
    for record in records {
        lines.push(
            [
                record.date.format("%Y-%m-%d").to_string(),
                record.date.format("%H:%M:%S").to_string(),
                type_label(record.record_type).to_string(),
                record.category.clone(),
                record.amount.to_string(),
                quoted(&strip_tags(&record.memo)),
                record.tags.join(" "),
            ]
            .join(sep),
        );
    }
    lines.push(String::new());
}

fn push_goals(lines: &mut Vec<String>, snapshot: &Snapshot, sep: &str) {
    let progress = compute_progress(&snapshot.goals, &snapshot.records);

    lines.push("=== 목표 설정 ===".to_string());
    lines.push(["목표명", "목표 금액", "현재 금액", "진행률", "메모", "상태"].join(sep));
    for goal in &snapshot.goals {
        // Completed goals no longer accrue; they report their target.
        let (current, pct) = if goal.completed {
            (goal.amount, 100.0)
        } else {
            progress
                .iter()
                .find(|p| p.goal_id == goal.id)
                .map(|p| (p.current_amount, p.progress))
                .unwrap_or((0, 0.0))
        };
        lines.push(
            [
                goal.name.clone(),
                goal.amount.to_string(),
                current.to_string(),
                format!("{pct:.1}%"),
                quoted(&goal.memo),
                goal_status_label(goal, pct).to_string(),
            ]
            .join(sep),
        );
    }
    lines.push(String::new());
}

fn push_equipment(lines: &mut Vec<String>, snapshot: &Snapshot, sep: &str) {
    let mut rows: Vec<String> = Vec::new();
    for tab in ALL_TABS {
        for (slot, value) in snapshot.equipment.tab(tab) {
            if *value <= 0 {
                continue;
            }
            let name = slot_display_name(slot).unwrap_or(slot.as_str());
            rows.push(
                [
                    tab.display_name().to_string(),
                    name.to_string(),
                    value.to_string(),
                ]
                .join(sep),
            );
        }
    }
    if rows.is_empty() {
        return;
    }

    lines.push("=== 장비 가격 ===".to_string());
    lines.push(["캐릭터", "장비 종류", "예상 가격"].join(sep));
    lines.extend(rows);
    lines.push(String::new());
}

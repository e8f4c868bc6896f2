//! Planned-vs-logged coverage
//!
//! A planning slot with a subtask plans one task-day per calendar day it
//! spans, keyed by (day, employee, subtask). A planned task-day is logged
//! when a timesheet line matches the same key exactly. Keys deduplicate
//! globally across overlapping slots; results bucket by calendar month and
//! by ISO week.

use crate::dataset::{parse_date, RecordStore};
use chrono::{Datelike, NaiveDate};
use nasma_metrics_shared::{CoveragePeriod, PlanningCoverage};
use std::collections::{BTreeMap, HashSet};

#[derive(Default)]
struct MonthEntry {
    planned_days: u64,
    logged_days: u64,
    planned_slot_ids: HashSet<i64>,
    logged_slot_ids: HashSet<i64>,
}

#[derive(Default)]
struct WeekEntry {
    planned_days: u64,
    logged_days: u64,
}

fn iso_week_key(date: NaiveDate) -> String {
    let week = date.iso_week();
    format!("{}-W{:02}", week.year(), week.week())
}

fn coverage_pct(logged: u64, planned: u64) -> f64 {
    if planned > 0 {
        logged as f64 / planned as f64 * 100.0
    } else {
        0.0
    }
}

/// Compute coverage over an explicit window, or over the whole span of the
/// loaded planning data when no window is given.
pub fn planning_coverage(
    store: &RecordStore,
    window: Option<(NaiveDate, NaiveDate)>,
) -> PlanningCoverage {
    let window = window.or_else(|| data_window(store));
    let Some((global_start, global_end)) = window else {
        return PlanningCoverage::default();
    };

    let logged_keys: HashSet<(NaiveDate, i64, i64)> = store
        .timesheets
        .iter()
        .filter_map(|line| {
            let day = parse_date(&line.date)?;
            Some((day, line.employee_id?, line.task_id?))
        })
        .collect();

    let mut planned_keys: HashSet<(NaiveDate, i64, i64)> = HashSet::new();
    let mut months: BTreeMap<String, MonthEntry> = BTreeMap::new();
    let mut weeks: BTreeMap<String, WeekEntry> = BTreeMap::new();

    for slot in &store.planning_slots {
        let (Some(slot_start), Some(slot_end)) = (
            parse_date(&slot.start_datetime),
            parse_date(&slot.end_datetime),
        ) else {
            continue;
        };
        let (Some(employee_id), Some(subtask_id)) = (slot.employee_id, slot.subtask_id) else {
            continue;
        };

        let clamped_start = slot_start.max(global_start);
        let clamped_end = slot_end.min(global_end);
        if clamped_end < clamped_start {
            continue;
        }

        let mut day = clamped_start;
        while day <= clamped_end {
            let key = (day, employee_id, subtask_id);
            let logged = logged_keys.contains(&key);

            let month = months.entry(day.format("%Y-%m").to_string()).or_default();
            month.planned_slot_ids.insert(slot.id);
            if logged {
                month.logged_slot_ids.insert(slot.id);
            }

            let week = weeks.entry(iso_week_key(day)).or_default();

            if planned_keys.insert(key) {
                month.planned_days += 1;
                week.planned_days += 1;
                if logged {
                    month.logged_days += 1;
                    week.logged_days += 1;
                }
            }

            let Some(next) = day.succ_opt() else { break };
            day = next;
        }
    }

    let monthly = months
        .into_iter()
        .map(|(period, entry)| CoveragePeriod {
            coverage_pct: coverage_pct(entry.logged_days, entry.planned_days),
            planned_days: entry.planned_days,
            logged_days: entry.logged_days,
            planned_slots: Some(entry.planned_slot_ids.len() as u64),
            logged_slots: Some(entry.logged_slot_ids.len() as u64),
            period,
        })
        .collect();
    let weekly = weeks
        .into_iter()
        .map(|(period, entry)| CoveragePeriod {
            coverage_pct: coverage_pct(entry.logged_days, entry.planned_days),
            planned_days: entry.planned_days,
            logged_days: entry.logged_days,
            planned_slots: None,
            logged_slots: None,
            period,
        })
        .collect();

    PlanningCoverage { monthly, weekly }
}

/// Span of the loaded planning data, for windowless requests.
fn data_window(store: &RecordStore) -> Option<(NaiveDate, NaiveDate)> {
    let starts = store
        .planning_slots
        .iter()
        .filter_map(|slot| parse_date(&slot.start_datetime));
    let ends = store
        .planning_slots
        .iter()
        .filter_map(|slot| parse_date(&slot.end_datetime));
    Some((starts.min()?, ends.max()?))
}

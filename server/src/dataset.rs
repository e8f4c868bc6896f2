//! Dataset records and loading
//!
//! The metric endpoints aggregate over flat record collections loaded from
//! JSON files under the data directory. The store is the opaque data
//! source the dashboard consumes; a missing file is an empty collection,
//! not an error, so a partial dataset still serves.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use nasma_metrics_shared::{DashboardError, DashboardResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One chat message sent through the assistant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub user_name: Option<String>,
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
    pub created_at: String,
}

/// One recorded assistant request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMetric {
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub metric_type: Option<String>,
    #[serde(default)]
    pub duration_seconds: Option<f64>,
    pub created_at: String,
}

/// One issued refresh token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshToken {
    #[serde(default)]
    pub username: Option<String>,
    pub created_at: String,
}

/// One employee reference row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    #[serde(default)]
    pub department: Option<String>,
}

/// One planning slot. Only slots with both an employee and a subtask count
/// toward coverage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanningSlot {
    pub id: i64,
    pub start_datetime: String,
    pub end_datetime: String,
    #[serde(default)]
    pub employee_id: Option<i64>,
    #[serde(default)]
    pub subtask_id: Option<i64>,
}

/// One timesheet line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimesheetLine {
    pub date: String,
    #[serde(default)]
    pub employee_id: Option<i64>,
    #[serde(default)]
    pub task_id: Option<i64>,
}

/// All loaded record collections.
#[derive(Debug, Default)]
pub struct RecordStore {
    pub messages: Vec<ChatMessage>,
    pub metrics: Vec<SessionMetric>,
    pub tokens: Vec<RefreshToken>,
    pub employees: Vec<Employee>,
    pub planning_slots: Vec<PlanningSlot>,
    pub timesheets: Vec<TimesheetLine>,
}

impl RecordStore {
    /// Load every collection from `dir`. Missing files load as empty;
    /// unparseable files are errors.
    pub fn load(dir: &Path) -> DashboardResult<Self> {
        Ok(Self {
            messages: load_collection(dir, "chat_messages.json")?,
            metrics: load_collection(dir, "session_metrics.json")?,
            tokens: load_collection(dir, "refresh_tokens.json")?,
            employees: load_collection(dir, "employees.json")?,
            planning_slots: load_collection(dir, "planning_slots.json")?,
            timesheets: load_collection(dir, "timesheets.json")?,
        })
    }
}

fn load_collection<T: serde::de::DeserializeOwned>(
    dir: &Path,
    name: &str,
) -> DashboardResult<Vec<T>> {
    let path = dir.join(name);
    if !path.exists() {
        log::warn!("dataset file {} missing, loading empty", path.display());
        return Ok(Vec::new());
    }
    let raw = std::fs::read_to_string(&path).map_err(|e| DashboardError::Dataset {
        message: format!("read {}: {e}", path.display()),
    })?;
    serde_json::from_str(&raw).map_err(|e| DashboardError::Dataset {
        message: format!("parse {}: {e}", path.display()),
    })
}

/// Parse a record timestamp. Accepts RFC 3339 (with zone), a naive
/// timestamp with `T` or space separator, or a bare date.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Parse a bare date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_timestamp(raw).map(|dt| dt.date()))
}

/// Inclusive date-range filter applied to record timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DateFilter {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl DateFilter {
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Build from raw query values. A bare end date widens to 23:59:59 so
    /// it is inclusive of its whole day.
    pub fn from_params(start: Option<&str>, end: Option<&str>) -> Result<Self, String> {
        let start = match start {
            Some(raw) => Some(parse_bound(raw, false).ok_or_else(|| {
                format!("Invalid start_date: {raw}")
            })?),
            None => None,
        };
        let end = match end {
            Some(raw) => Some(
                parse_bound(raw, true).ok_or_else(|| format!("Invalid end_date: {raw}"))?,
            ),
            None => None,
        };
        Ok(Self { start, end })
    }

    /// Whether a record timestamp falls inside the range. With a filter
    /// set, records whose timestamp does not parse are excluded.
    pub fn contains(&self, raw: &str) -> bool {
        if self.is_empty() {
            return true;
        }
        let Some(ts) = parse_timestamp(raw) else {
            return false;
        };
        if let Some(start) = self.start {
            if ts < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if ts > end {
                return false;
            }
        }
        true
    }
}

fn parse_bound(raw: &str, is_end: bool) -> Option<NaiveDateTime> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return if is_end {
            date.and_hms_opt(23, 59, 59)
        } else {
            date.and_hms_opt(0, 0, 0)
        };
    }
    parse_timestamp(raw)
}

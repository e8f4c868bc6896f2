//! Row shapes for every metric endpoint
//!
//! One struct per metric. Rows have no identity beyond their position; the
//! order returned by the source is display order.

use serde::{Deserialize, Serialize};

/// Monthly active user count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActiveUsersRow {
    pub month: String,
    pub active_users: u64,
}

/// All-time request count for one request attribute.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequestCountRow {
    pub attribute: String,
    pub value: u64,
}

/// Distinct adopted-user count.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AdoptionCount {
    pub count: u64,
}

/// Per-department adoption breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DepartmentAdoptionRow {
    pub department: String,
    pub active_users: u64,
    pub total_employees: u64,
    pub adoption_rate_percent: f64,
}

/// Monthly message total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyMessageTotal {
    pub month: String,
    pub total_messages: u64,
}

/// Per-user message count within one month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserMessageCount {
    pub month: String,
    pub user_name: String,
    pub messages_sent: u64,
}

/// Message volume summary. The dashboard stat card consumes
/// `total_messages`; the monthly and per-user breakdowns feed the detail
/// table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MessagesSummary {
    pub monthly_totals: Vec<MonthlyMessageTotal>,
    pub user_breakdown: Vec<UserMessageCount>,
    pub total_messages: u64,
}

/// A user who logged hours through the assistant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogHoursRow {
    pub user_name: String,
}

/// Average handling duration per request type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequestDurationRow {
    pub metric_type: String,
    pub avg_duration_seconds: f64,
}

/// Success rate for one request family.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuccessRateRow {
    pub request_type: String,
    pub success_rate_percent: f64,
    pub successes: u64,
    pub total_events: u64,
}

/// An employee with no recorded assistant activity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InactiveEmployeeRow {
    pub department: String,
    pub user_name: String,
}

/// Per-user, per-request-type action count for the current day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityRow {
    pub user_name: String,
    pub metric_type: String,
    pub actions_today: u64,
}

/// Hand-maintained overall satisfaction score. Held as a string so values
/// like "9.62" and "N/A" both round-trip unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Satisfaction {
    pub overall_satisfaction: String,
}

/// One point of a hand-entered ease-of-use series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EasePoint {
    pub period: String,
    pub value: f64,
}

/// The two ease-of-use comparison series. A missing series deserializes as
/// empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EaseComparison {
    #[serde(default)]
    pub odoo: Vec<EasePoint>,
    #[serde(default)]
    pub nasma: Vec<EasePoint>,
}

/// Planned-vs-logged coverage for one calendar period.
///
/// `planned_slots`/`logged_slots` are only populated for monthly entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoveragePeriod {
    pub period: String,
    pub coverage_pct: f64,
    pub planned_days: u64,
    pub logged_days: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_slots: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logged_slots: Option<u64>,
}

/// Planned-vs-logged coverage, bucketed two ways.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlanningCoverage {
    pub monthly: Vec<CoveragePeriod>,
    pub weekly: Vec<CoveragePeriod>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_comparison_round_trip() {
        let data = EaseComparison {
            odoo: vec![EasePoint {
                period: "Week 1".to_string(),
                value: 6.82,
            }],
            nasma: vec![EasePoint {
                period: "Week 1".to_string(),
                value: 9.0,
            }],
        };
        let json = serde_json::to_string(&data).unwrap();
        let back: EaseComparison = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn test_coverage_slot_counts_optional() {
        let json = r#"{"period":"2025-W03","coverage_pct":50.0,"planned_days":4,"logged_days":2}"#;
        let row: CoveragePeriod = serde_json::from_str(json).unwrap();
        assert_eq!(row.planned_slots, None);
        assert_eq!(row.logged_slots, None);
    }
}

//! Per-chart rendering rules and table view-models
//!
//! Every builder is a pure function of (rows, fixed styling constants) to a
//! chart configuration or a list of row view-models; the templating layer
//! that paints them is an external collaborator. Empty input yields an
//! empty configuration, which the view layer shows as the "No data found"
//! state.

use crate::format;
use nasma_metrics_shared::{
    ActiveUsersRow, ActivityRow, ChartConfig, ChartKind, DepartmentAdoptionRow, EaseComparison,
    InactiveEmployeeRow, LogHoursRow, MessagesSummary, PlanningCoverage, RequestCountRow,
    RequestDurationRow, SeriesSpec, SuccessRateRow,
};

// Styling constants shared by every chart.
pub const PRIMARY_COLOR: &str = "#4e73df";
pub const SECONDARY_COLOR: &str = "#1cc88a";
pub const ACCENT_COLOR: &str = "#36b9cc";

/// Monthly/weekly selector for the planning-coverage chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CoverageView {
    #[default]
    Monthly,
    Weekly,
}

/// Most recent periods plotted per coverage view.
const COVERAGE_TAIL_MONTHLY: usize = 12;
const COVERAGE_TAIL_WEEKLY: usize = 20;

/// Active users per month, one bar per row.
pub fn active_users_chart(rows: &[ActiveUsersRow]) -> ChartConfig {
    let mut config = ChartConfig::new(ChartKind::Bar);
    config.labels = rows.iter().map(|r| r.month.clone()).collect();
    config.series = vec![SeriesSpec {
        name: "Active users".to_string(),
        values: rows.iter().map(|r| r.active_users as f64).collect(),
        color: PRIMARY_COLOR.to_string(),
    }];
    config
}

/// Request counts ranked by volume, plotted horizontally.
pub fn requests_chart(rows: &[RequestCountRow]) -> ChartConfig {
    let mut config = ChartConfig::new(ChartKind::HorizontalBar);
    config.labels = rows.iter().map(|r| r.attribute.clone()).collect();
    config.series = vec![SeriesSpec {
        name: "Requests".to_string(),
        values: rows.iter().map(|r| r.value as f64).collect(),
        color: ACCENT_COLOR.to_string(),
    }];
    config
}

/// Success rate per request family, capped at 100.
pub fn success_rates_chart(rows: &[SuccessRateRow]) -> ChartConfig {
    let mut config = ChartConfig::new(ChartKind::Bar);
    config.labels = rows.iter().map(|r| r.request_type.clone()).collect();
    config.series = vec![SeriesSpec {
        name: "Success rate".to_string(),
        values: rows.iter().map(|r| r.success_rate_percent).collect(),
        color: SECONDARY_COLOR.to_string(),
    }];
    config.y_max_hint = Some(100.0);
    config
}

/// The two ease-of-use series grouped by period. Labels are the union of
/// both series' periods in first-seen order; a series missing a period
/// plots 0 there.
pub fn ease_comparison_chart(data: &EaseComparison) -> ChartConfig {
    let mut labels: Vec<String> = Vec::new();
    for point in data.odoo.iter().chain(data.nasma.iter()) {
        if !labels.contains(&point.period) {
            labels.push(point.period.clone());
        }
    }

    let values_for = |points: &[nasma_metrics_shared::EasePoint]| -> Vec<f64> {
        labels
            .iter()
            .map(|label| {
                points
                    .iter()
                    .find(|p| &p.period == label)
                    .map(|p| p.value)
                    .unwrap_or(0.0)
            })
            .collect()
    };

    let mut config = ChartConfig::new(ChartKind::GroupedBar);
    config.series = vec![
        SeriesSpec {
            name: "Odoo".to_string(),
            values: values_for(&data.odoo),
            color: PRIMARY_COLOR.to_string(),
        },
        SeriesSpec {
            name: "Nasma".to_string(),
            values: values_for(&data.nasma),
            color: SECONDARY_COLOR.to_string(),
        },
    ];
    config.labels = labels;
    config.y_max_hint = Some(10.0);
    config
}

/// Planning coverage for the selected view, plotting only the most recent
/// periods (12 months or 20 weeks) with a fixed 100% axis ceiling.
pub fn coverage_chart(data: &PlanningCoverage, view: CoverageView) -> ChartConfig {
    let (entries, tail) = match view {
        CoverageView::Monthly => (&data.monthly, COVERAGE_TAIL_MONTHLY),
        CoverageView::Weekly => (&data.weekly, COVERAGE_TAIL_WEEKLY),
    };
    let start = entries.len().saturating_sub(tail);
    let recent = &entries[start..];

    let mut config = ChartConfig::new(ChartKind::Bar);
    config.labels = recent
        .iter()
        .map(|e| match view {
            CoverageView::Monthly => format::month_label(&e.period),
            CoverageView::Weekly => format::iso_week_label(&e.period),
        })
        .collect();
    config.series = vec![SeriesSpec {
        name: "Coverage".to_string(),
        values: recent.iter().map(|e| e.coverage_pct).collect(),
        color: PRIMARY_COLOR.to_string(),
    }];
    config.y_max_hint = Some(100.0);
    config
}

/// One table row, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<String>,
}

pub fn duration_rows(rows: &[RequestDurationRow]) -> Vec<TableRow> {
    rows.iter()
        .map(|r| TableRow {
            cells: vec![
                r.metric_type.clone(),
                format::format_duration(r.avg_duration_seconds),
            ],
        })
        .collect()
}

pub fn adoption_department_rows(rows: &[DepartmentAdoptionRow]) -> Vec<TableRow> {
    rows.iter()
        .map(|r| TableRow {
            cells: vec![
                r.department.clone(),
                r.active_users.to_string(),
                r.total_employees.to_string(),
                format::format_percent(r.adoption_rate_percent, 1),
            ],
        })
        .collect()
}

pub fn activity_rows(rows: &[ActivityRow]) -> Vec<TableRow> {
    rows.iter()
        .map(|r| TableRow {
            cells: vec![
                r.user_name.clone(),
                r.metric_type.clone(),
                r.actions_today.to_string(),
            ],
        })
        .collect()
}

pub fn inactive_employee_rows(rows: &[InactiveEmployeeRow]) -> Vec<TableRow> {
    rows.iter()
        .map(|r| TableRow {
            cells: vec![r.department.clone(), r.user_name.clone()],
        })
        .collect()
}

pub fn log_hours_rows(rows: &[LogHoursRow]) -> Vec<TableRow> {
    rows.iter()
        .map(|r| TableRow {
            cells: vec![r.user_name.clone()],
        })
        .collect()
}

/// Per-user monthly message counts for the messages detail table.
pub fn message_breakdown_rows(summary: &MessagesSummary) -> Vec<TableRow> {
    summary
        .user_breakdown
        .iter()
        .map(|r| TableRow {
            cells: vec![
                r.month.clone(),
                r.user_name.clone(),
                r.messages_sent.to_string(),
            ],
        })
        .collect()
}

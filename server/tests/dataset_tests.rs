//! End-to-end dataset tests: load JSON collections from disk, run the
//! aggregations the endpoints expose, and round-trip the hand-edited state.

use nasma_metrics_server::api::parse_date_filter;
use nasma_metrics_server::coverage::planning_coverage;
use nasma_metrics_server::dataset::{DateFilter, RecordStore};
use nasma_metrics_server::editable::EditableStore;
use nasma_metrics_server::metrics;
use nasma_metrics_shared::EaseComparison;
use std::fs;
use tempfile::TempDir;

fn write_dataset(dir: &TempDir) {
    fs::write(
        dir.path().join("chat_messages.json"),
        r#"[
            {"user_name": "Dana Haddad", "role": "user", "content": "please log hours", "created_at": "2025-06-02 09:15:00"},
            {"user_name": "Dana Haddad", "role": "user", "content": "thanks", "created_at": "2025-06-02 09:20:00"},
            {"user_name": "Rami Odeh", "role": "user", "content": "book time off", "created_at": "2025-06-10 14:00:00"},
            {"user_name": "Dana Haddad", "role": "assistant", "content": "done", "created_at": "2025-06-02 09:16:00"},
            {"user_name": "Rami Odeh", "role": "user", "content": "hello", "created_at": "2025-07-01 10:00:00"}
        ]"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("session_metrics.json"),
        r#"[
            {"user_name": "Dana Haddad", "metric_type": "log_hours", "duration_seconds": 40.0, "created_at": "2025-06-02 09:16:00"},
            {"user_name": "Dana Haddad", "metric_type": "log_hours", "duration_seconds": 80.0, "created_at": "2025-06-03 09:16:00"},
            {"user_name": "Rami Odeh", "metric_type": "timeoff_approval", "created_at": "2025-06-10 14:05:00"},
            {"user_name": "Rami Odeh", "metric_type": "timeoff_refusal", "created_at": "2025-06-11 14:05:00"}
        ]"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("refresh_tokens.json"),
        r#"[
            {"username": "dana.haddad", "created_at": "2025-06-01 08:00:00"},
            {"username": "dana.haddad", "created_at": "2025-06-05 08:00:00"},
            {"username": "rami.odeh", "created_at": "2025-06-02 08:00:00"}
        ]"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("employees.json"),
        r#"[
            {"name": "Dana Haddad", "department": "Engineering"},
            {"name": "Rami Odeh", "department": "Engineering"},
            {"name": "Lina Aboud", "department": "Finance"}
        ]"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("planning_slots.json"),
        r#"[
            {"id": 1, "start_datetime": "2025-06-02 09:00:00", "end_datetime": "2025-06-03 17:00:00", "employee_id": 7, "subtask_id": 42}
        ]"#,
    )
    .unwrap();
    // timesheets.json intentionally missing: a partial dataset still loads.
}

#[test]
fn loads_partial_dataset_and_aggregates() {
    let dir = TempDir::new().unwrap();
    write_dataset(&dir);
    let store = RecordStore::load(dir.path()).unwrap();

    assert_eq!(store.messages.len(), 5);
    assert!(store.timesheets.is_empty());

    let rows = metrics::active_users_by_month(&store, &DateFilter::default());
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].month, "June 2025");
    assert_eq!(rows[0].active_users, 2);
    assert_eq!(rows[1].month, "July 2025");
    assert_eq!(rows[1].active_users, 1);

    let requests = metrics::all_time_requests(&store, &DateFilter::default());
    assert_eq!(requests[0].attribute, "log_hours");
    assert_eq!(requests[0].value, 2);

    assert_eq!(metrics::adoption_count(&store, &DateFilter::default()).count, 2);

    let durations = metrics::request_durations(&store, &DateFilter::default());
    assert_eq!(durations.len(), 1);
    assert_eq!(durations[0].avg_duration_seconds, 60.0);

    let rates = metrics::request_success_rates(&store, &DateFilter::default(), &[]);
    let timeoff = rates.iter().find(|r| r.request_type == "timeoff").unwrap();
    assert_eq!(timeoff.successes, 1);
    assert_eq!(timeoff.total_events, 2);
    assert_eq!(timeoff.success_rate_percent, 50.0);

    let inactive = metrics::inactive_employees(&store, &[]);
    assert_eq!(inactive.len(), 1);
    assert_eq!(inactive[0].user_name, "Lina Aboud");
}

#[test]
fn date_filter_from_query_narrows_aggregates() {
    let dir = TempDir::new().unwrap();
    write_dataset(&dir);
    let store = RecordStore::load(dir.path()).unwrap();

    let filter =
        parse_date_filter(Some("start_date=2025-06-01&end_date=2025-06-30")).unwrap();
    let rows = metrics::active_users_by_month(&store, &filter);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].month, "June 2025");
}

#[test]
fn coverage_without_timesheets_plans_but_logs_nothing() {
    let dir = TempDir::new().unwrap();
    write_dataset(&dir);
    let store = RecordStore::load(dir.path()).unwrap();

    let coverage = planning_coverage(&store, None);
    assert_eq!(coverage.monthly.len(), 1);
    assert_eq!(coverage.monthly[0].planned_days, 2);
    assert_eq!(coverage.monthly[0].logged_days, 0);
    assert_eq!(coverage.monthly[0].coverage_pct, 0.0);
}

#[test]
fn editable_state_round_trips_next_to_dataset() {
    let dir = TempDir::new().unwrap();
    let editable = EditableStore::new(dir.path().join("state"));

    let seeded = editable.ease_comparison().unwrap();
    assert_eq!(seeded.odoo.len(), 1);

    let replacement = EaseComparison {
        odoo: Vec::new(),
        nasma: vec![nasma_metrics_shared::EasePoint {
            period: "Week 2".to_string(),
            value: 8.4,
        }],
    };
    editable.save_ease_comparison(&replacement).unwrap();
    assert_eq!(editable.ease_comparison().unwrap(), replacement);
}

#[test]
fn malformed_dataset_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("chat_messages.json"), "{not json").unwrap();
    assert!(RecordStore::load(dir.path()).is_err());
}

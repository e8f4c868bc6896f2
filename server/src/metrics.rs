//! Aggregation engine behind the metric endpoints
//!
//! Each function turns the raw record collections into one endpoint's rows:
//! counts, averages, and grouping by a key. People-derived metrics share a
//! normalization rule (lower-case, collapsed whitespace) and honor the
//! configured excluded-user list.

use crate::dataset::{parse_timestamp, DateFilter, RecordStore};
use chrono::Utc;
use nasma_metrics_shared::{
    ActiveUsersRow, ActivityRow, AdoptionCount, DepartmentAdoptionRow, InactiveEmployeeRow,
    LogHoursRow, MessagesSummary, MonthlyMessageTotal, RequestCountRow, RequestDurationRow,
    SuccessRateRow, UserMessageCount,
};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Request families tracked by the success-rate metric.
const TARGET_METRICS: [&str; 7] = [
    "log_hours",
    "timeoff_approval",
    "timeoff_refusal",
    "overtime_approval",
    "overtime_refusal",
    "reimbursement",
    "document",
];

/// Content substrings identifying a log-hours request.
const LOG_HOURS_PATTERNS: [&str; 2] = ["log hours", "log_hours"];

const UNKNOWN_DEPARTMENT: &str = "Unknown";

/// Lower-case and collapse whitespace so name matching survives formatting
/// differences between the record sources.
fn normalize_name(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn is_excluded(name: &str, excluded: &[String]) -> bool {
    let normalized = normalize_name(name);
    excluded
        .iter()
        .any(|entry| normalize_name(entry) == normalized)
}

fn month_key_and_label(created_at: &str) -> Option<(String, String)> {
    let ts = parse_timestamp(created_at)?;
    Some((
        ts.format("%Y-%m").to_string(),
        ts.format("%B %Y").to_string(),
    ))
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Distinct active users per calendar month, from user-role chat messages.
pub fn active_users_by_month(store: &RecordStore, filter: &DateFilter) -> Vec<ActiveUsersRow> {
    let mut months: BTreeMap<String, (String, BTreeSet<String>)> = BTreeMap::new();
    for message in &store.messages {
        if message.role != "user" {
            continue;
        }
        let Some(user) = message.user_name.as_deref().filter(|u| !u.is_empty()) else {
            continue;
        };
        if !filter.contains(&message.created_at) {
            continue;
        }
        let Some((key, label)) = month_key_and_label(&message.created_at) else {
            continue;
        };
        months
            .entry(key)
            .or_insert_with(|| (label, BTreeSet::new()))
            .1
            .insert(user.to_string());
    }
    months
        .into_values()
        .map(|(month, users)| ActiveUsersRow {
            month,
            active_users: users.len() as u64,
        })
        .collect()
}

/// Request counts grouped by metric type, busiest first.
pub fn all_time_requests(store: &RecordStore, filter: &DateFilter) -> Vec<RequestCountRow> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for metric in &store.metrics {
        let Some(metric_type) = metric.metric_type.as_deref().filter(|m| !m.is_empty()) else {
            continue;
        };
        if !filter.contains(&metric.created_at) {
            continue;
        }
        *counts.entry(metric_type).or_insert(0) += 1;
    }
    let mut rows: Vec<RequestCountRow> = counts
        .into_iter()
        .map(|(attribute, value)| RequestCountRow {
            attribute: attribute.to_string(),
            value,
        })
        .collect();
    rows.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.attribute.cmp(&b.attribute)));
    rows
}

/// Count of distinct users holding refresh tokens.
pub fn adoption_count(store: &RecordStore, filter: &DateFilter) -> AdoptionCount {
    let mut users: HashSet<&str> = HashSet::new();
    for token in &store.tokens {
        let Some(username) = token.username.as_deref().filter(|u| !u.is_empty()) else {
            continue;
        };
        if !filter.contains(&token.created_at) {
            continue;
        }
        users.insert(username);
    }
    AdoptionCount {
        count: users.len() as u64,
    }
}

/// Per-department adoption: distinct employees vs employees with any
/// assistant activity, name-matched case-insensitively.
pub fn adoption_by_department(
    store: &RecordStore,
    filter: &DateFilter,
    excluded: &[String],
) -> Vec<DepartmentAdoptionRow> {
    let mut departments: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for employee in &store.employees {
        let name = employee.name.trim();
        if name.is_empty() || is_excluded(name, excluded) {
            continue;
        }
        let department = employee
            .department
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(UNKNOWN_DEPARTMENT);
        departments
            .entry(department.to_string())
            .or_default()
            .insert(name.to_string());
    }

    let active = active_user_keys(store, filter);

    let mut rows: Vec<DepartmentAdoptionRow> = departments
        .into_iter()
        .map(|(department, members)| {
            let total = members.len() as u64;
            let active_count = members
                .iter()
                .filter(|name| active.contains(&normalize_name(name)))
                .count() as u64;
            let rate = if total > 0 {
                round1(active_count as f64 / total as f64 * 100.0)
            } else {
                0.0
            };
            DepartmentAdoptionRow {
                department,
                active_users: active_count,
                total_employees: total,
                adoption_rate_percent: rate,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.adoption_rate_percent
            .partial_cmp(&a.adoption_rate_percent)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| b.active_users.cmp(&a.active_users))
            .then_with(|| a.department.cmp(&b.department))
    });
    rows
}

/// Normalized user names with any session-metric activity in range.
fn active_user_keys(store: &RecordStore, filter: &DateFilter) -> HashSet<String> {
    store
        .metrics
        .iter()
        .filter(|m| filter.contains(&m.created_at))
        .filter_map(|m| m.user_name.as_deref())
        .map(normalize_name)
        .filter(|n| !n.is_empty())
        .collect()
}

/// Monthly totals, per-user breakdown, and grand total of user messages.
pub fn messages_summary(
    store: &RecordStore,
    filter: &DateFilter,
    excluded: &[String],
) -> MessagesSummary {
    let mut monthly: BTreeMap<String, (String, u64)> = BTreeMap::new();
    let mut per_user: BTreeMap<(String, String), (String, u64)> = BTreeMap::new();

    for message in &store.messages {
        if message.role != "user" {
            continue;
        }
        let Some(user) = message.user_name.as_deref().filter(|u| !u.is_empty()) else {
            continue;
        };
        if is_excluded(user, excluded) {
            continue;
        }
        if !filter.contains(&message.created_at) {
            continue;
        }
        let Some((key, label)) = month_key_and_label(&message.created_at) else {
            continue;
        };
        monthly.entry(key.clone()).or_insert_with(|| (label.clone(), 0)).1 += 1;
        per_user
            .entry((key, user.to_string()))
            .or_insert_with(|| (label, 0))
            .1 += 1;
    }

    let monthly_totals: Vec<MonthlyMessageTotal> = monthly
        .into_values()
        .map(|(month, total_messages)| MonthlyMessageTotal {
            month,
            total_messages,
        })
        .collect();
    let user_breakdown: Vec<UserMessageCount> = per_user
        .into_iter()
        .map(|((_, user_name), (month, messages_sent))| UserMessageCount {
            month,
            user_name,
            messages_sent,
        })
        .collect();
    let total_messages = monthly_totals.iter().map(|m| m.total_messages).sum();

    MessagesSummary {
        monthly_totals,
        user_breakdown,
        total_messages,
    }
}

/// Distinct users who asked the assistant to log their hours.
pub fn log_hours_users(
    store: &RecordStore,
    filter: &DateFilter,
    excluded: &[String],
) -> Vec<LogHoursRow> {
    let mut users: BTreeSet<String> = BTreeSet::new();
    for message in &store.messages {
        if message.role != "user" {
            continue;
        }
        let Some(content) = message.content.as_deref() else {
            continue;
        };
        let content = content.to_lowercase();
        if !LOG_HOURS_PATTERNS.iter().any(|p| content.contains(p)) {
            continue;
        }
        let Some(user) = message.user_name.as_deref().filter(|u| !u.is_empty()) else {
            continue;
        };
        if is_excluded(user, excluded) {
            continue;
        }
        if !filter.contains(&message.created_at) {
            continue;
        }
        users.insert(user.to_string());
    }
    users
        .into_iter()
        .map(|user_name| LogHoursRow { user_name })
        .collect()
}

/// Average handling duration per request type.
pub fn request_durations(store: &RecordStore, filter: &DateFilter) -> Vec<RequestDurationRow> {
    let mut sums: BTreeMap<&str, (f64, u64)> = BTreeMap::new();
    for metric in &store.metrics {
        let Some(metric_type) = metric.metric_type.as_deref().filter(|m| !m.is_empty()) else {
            continue;
        };
        let Some(duration) = metric.duration_seconds.filter(|d| d.is_finite()) else {
            continue;
        };
        if !filter.contains(&metric.created_at) {
            continue;
        }
        let entry = sums.entry(metric_type).or_insert((0.0, 0));
        entry.0 += duration;
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(metric_type, (sum, count))| RequestDurationRow {
            metric_type: metric_type.to_string(),
            avg_duration_seconds: sum / count as f64,
        })
        .collect()
}

fn resolve_request_type(metric: &str) -> Option<&'static str> {
    if metric.starts_with("timeoff_") {
        Some("timeoff")
    } else if metric.starts_with("overtime_") {
        Some("overtime")
    } else {
        match metric {
            "log_hours" => Some("log_hours"),
            "reimbursement" => Some("reimbursement"),
            "document" => Some("document"),
            _ => None,
        }
    }
}

fn resolve_success(metric: &str) -> Option<bool> {
    match metric {
        "timeoff_approval" | "overtime_approval" => Some(true),
        "timeoff_refusal" | "overtime_refusal" => Some(false),
        "log_hours" | "reimbursement" | "document" => Some(true),
        _ => None,
    }
}

/// Success rates for the high-impact request families.
pub fn request_success_rates(
    store: &RecordStore,
    filter: &DateFilter,
    excluded: &[String],
) -> Vec<SuccessRateRow> {
    let mut buckets: BTreeMap<&'static str, (u64, u64)> = BTreeMap::new();
    for metric in &store.metrics {
        let Some(metric_type) = metric.metric_type.as_deref() else {
            continue;
        };
        if !TARGET_METRICS.contains(&metric_type) {
            continue;
        }
        let Some(user) = metric.user_name.as_deref().filter(|u| !u.is_empty()) else {
            continue;
        };
        if is_excluded(user, excluded) {
            continue;
        }
        if !filter.contains(&metric.created_at) {
            continue;
        }
        let (Some(request_type), Some(is_success)) = (
            resolve_request_type(metric_type),
            resolve_success(metric_type),
        ) else {
            continue;
        };
        let bucket = buckets.entry(request_type).or_insert((0, 0));
        bucket.1 += 1;
        if is_success {
            bucket.0 += 1;
        }
    }

    buckets
        .into_iter()
        .map(|(request_type, (successes, total))| {
            let rate = if total > 0 {
                round1(successes as f64 / total as f64 * 100.0)
            } else {
                0.0
            };
            SuccessRateRow {
                request_type: request_type.to_string(),
                success_rate_percent: rate,
                successes,
                total_events: total,
            }
        })
        .collect()
}

/// Employees with no recorded assistant activity at all.
pub fn inactive_employees(store: &RecordStore, excluded: &[String]) -> Vec<InactiveEmployeeRow> {
    let active = active_user_keys(store, &DateFilter::default());
    let mut rows: Vec<InactiveEmployeeRow> = store
        .employees
        .iter()
        .filter_map(|employee| {
            let name = employee.name.trim();
            if name.is_empty() || is_excluded(name, excluded) {
                return None;
            }
            if active.contains(&normalize_name(name)) {
                return None;
            }
            let department = employee
                .department
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .unwrap_or(UNKNOWN_DEPARTMENT);
            Some(InactiveEmployeeRow {
                department: department.to_string(),
                user_name: name.to_string(),
            })
        })
        .collect();
    rows.sort_by(|a, b| {
        a.department
            .cmp(&b.department)
            .then_with(|| a.user_name.cmp(&b.user_name))
    });
    rows
}

/// Per-user request counts grouped by metric type. Defaults to the current
/// UTC day when no range is supplied.
pub fn activities_today(
    store: &RecordStore,
    filter: &DateFilter,
    excluded: &[String],
) -> Vec<ActivityRow> {
    let effective = if filter.is_empty() {
        let today = Utc::now().date_naive();
        DateFilter {
            start: today.and_hms_opt(0, 0, 0),
            end: today.and_hms_opt(23, 59, 59),
        }
    } else {
        *filter
    };

    let mut counts: HashMap<(String, String), u64> = HashMap::new();
    for metric in &store.metrics {
        let Some(user) = metric.user_name.as_deref().filter(|u| !u.is_empty()) else {
            continue;
        };
        let Some(metric_type) = metric.metric_type.as_deref().filter(|m| !m.is_empty()) else {
            continue;
        };
        if is_excluded(user, excluded) {
            continue;
        }
        if !effective.contains(&metric.created_at) {
            continue;
        }
        *counts
            .entry((user.to_string(), metric_type.to_string()))
            .or_insert(0) += 1;
    }

    let mut rows: Vec<ActivityRow> = counts
        .into_iter()
        .map(|((user_name, metric_type), actions_today)| ActivityRow {
            user_name,
            metric_type,
            actions_today,
        })
        .collect();
    rows.sort_by(|a, b| {
        a.user_name
            .to_lowercase()
            .cmp(&b.user_name.to_lowercase())
            .then_with(|| b.actions_today.cmp(&a.actions_today))
            .then_with(|| a.metric_type.cmp(&b.metric_type))
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{ChatMessage, Employee, RefreshToken, SessionMetric};

    fn message(user: &str, created_at: &str) -> ChatMessage {
        ChatMessage {
            user_name: Some(user.to_string()),
            role: "user".to_string(),
            content: None,
            created_at: created_at.to_string(),
        }
    }

    fn metric(user: &str, metric_type: &str, created_at: &str) -> SessionMetric {
        SessionMetric {
            user_name: Some(user.to_string()),
            metric_type: Some(metric_type.to_string()),
            duration_seconds: None,
            created_at: created_at.to_string(),
        }
    }

    #[test]
    fn test_active_users_distinct_per_month() {
        let store = RecordStore {
            messages: vec![
                message("Dana", "2025-06-02 09:00:00"),
                message("Dana", "2025-06-15 09:00:00"),
                message("Rami", "2025-06-20 09:00:00"),
                message("Dana", "2025-07-01 09:00:00"),
            ],
            ..Default::default()
        };
        let rows = active_users_by_month(&store, &DateFilter::default());
        assert_eq!(
            rows,
            vec![
                ActiveUsersRow {
                    month: "June 2025".to_string(),
                    active_users: 2,
                },
                ActiveUsersRow {
                    month: "July 2025".to_string(),
                    active_users: 1,
                },
            ]
        );
    }

    #[test]
    fn test_active_users_skips_assistant_messages() {
        let mut assistant = message("Dana", "2025-06-02 09:00:00");
        assistant.role = "assistant".to_string();
        let store = RecordStore {
            messages: vec![assistant],
            ..Default::default()
        };
        assert!(active_users_by_month(&store, &DateFilter::default()).is_empty());
    }

    #[test]
    fn test_requests_sorted_by_volume() {
        let store = RecordStore {
            metrics: vec![
                metric("Dana", "log_hours", "2025-06-01 09:00:00"),
                metric("Dana", "log_hours", "2025-06-02 09:00:00"),
                metric("Rami", "document", "2025-06-03 09:00:00"),
            ],
            ..Default::default()
        };
        let rows = all_time_requests(&store, &DateFilter::default());
        assert_eq!(rows[0].attribute, "log_hours");
        assert_eq!(rows[0].value, 2);
        assert_eq!(rows[1].attribute, "document");
    }

    #[test]
    fn test_requests_respect_date_filter() {
        let store = RecordStore {
            metrics: vec![
                metric("Dana", "log_hours", "2025-06-01 09:00:00"),
                metric("Dana", "log_hours", "2025-07-01 09:00:00"),
            ],
            ..Default::default()
        };
        let filter =
            DateFilter::from_params(Some("2025-06-01"), Some("2025-06-30")).unwrap();
        let rows = all_time_requests(&store, &filter);
        assert_eq!(rows[0].value, 1);
    }

    #[test]
    fn test_adoption_counts_distinct_usernames() {
        let store = RecordStore {
            tokens: vec![
                RefreshToken {
                    username: Some("dana".to_string()),
                    created_at: "2025-06-01 09:00:00".to_string(),
                },
                RefreshToken {
                    username: Some("dana".to_string()),
                    created_at: "2025-06-02 09:00:00".to_string(),
                },
                RefreshToken {
                    username: Some("rami".to_string()),
                    created_at: "2025-06-03 09:00:00".to_string(),
                },
                RefreshToken {
                    username: None,
                    created_at: "2025-06-04 09:00:00".to_string(),
                },
            ],
            ..Default::default()
        };
        assert_eq!(adoption_count(&store, &DateFilter::default()).count, 2);
    }

    #[test]
    fn test_adoption_by_department_rates_and_order() {
        let store = RecordStore {
            employees: vec![
                Employee {
                    name: "Dana Haddad".to_string(),
                    department: Some("Engineering".to_string()),
                },
                Employee {
                    name: "Rami Odeh".to_string(),
                    department: Some("Engineering".to_string()),
                },
                Employee {
                    name: "Lina Aboud".to_string(),
                    department: Some("Finance".to_string()),
                },
            ],
            metrics: vec![
                // Name case differs from the reference row on purpose.
                metric("dana  haddad", "log_hours", "2025-06-01 09:00:00"),
                metric("Lina Aboud", "document", "2025-06-01 10:00:00"),
            ],
            ..Default::default()
        };
        let rows = adoption_by_department(&store, &DateFilter::default(), &[]);
        assert_eq!(rows[0].department, "Finance");
        assert_eq!(rows[0].adoption_rate_percent, 100.0);
        assert_eq!(rows[1].department, "Engineering");
        assert_eq!(rows[1].active_users, 1);
        assert_eq!(rows[1].total_employees, 2);
        assert_eq!(rows[1].adoption_rate_percent, 50.0);
    }

    #[test]
    fn test_excluded_users_disappear_from_people_metrics() {
        let excluded = vec!["Test Account".to_string()];
        let store = RecordStore {
            employees: vec![Employee {
                name: "Test Account".to_string(),
                department: Some("QA".to_string()),
            }],
            messages: vec![message("Test Account", "2025-06-01 09:00:00")],
            metrics: vec![metric("Test Account", "log_hours", "2025-06-01 09:00:00")],
            ..Default::default()
        };
        assert!(adoption_by_department(&store, &DateFilter::default(), &excluded).is_empty());
        assert_eq!(
            messages_summary(&store, &DateFilter::default(), &excluded).total_messages,
            0
        );
        assert!(activities_today(&store, &DateFilter::default(), &excluded).is_empty());
        assert!(inactive_employees(&store, &excluded).is_empty());
    }

    #[test]
    fn test_messages_summary_totals_and_breakdown() {
        let store = RecordStore {
            messages: vec![
                message("Dana", "2025-06-02 09:00:00"),
                message("Dana", "2025-06-15 09:00:00"),
                message("Rami", "2025-06-20 09:00:00"),
            ],
            ..Default::default()
        };
        let summary = messages_summary(&store, &DateFilter::default(), &[]);
        assert_eq!(summary.total_messages, 3);
        assert_eq!(summary.monthly_totals.len(), 1);
        assert_eq!(summary.monthly_totals[0].total_messages, 3);
        assert_eq!(summary.user_breakdown.len(), 2);
        assert_eq!(summary.user_breakdown[0].user_name, "Dana");
        assert_eq!(summary.user_breakdown[0].messages_sent, 2);
    }

    #[test]
    fn test_log_hours_pattern_match() {
        let mut with_content = message("Dana", "2025-06-01 09:00:00");
        with_content.content = Some("Please LOG HOURS for yesterday".to_string());
        let mut underscore = message("Rami", "2025-06-01 10:00:00");
        underscore.content = Some("run log_hours".to_string());
        let mut unrelated = message("Lina", "2025-06-01 11:00:00");
        unrelated.content = Some("book a meeting room".to_string());

        let store = RecordStore {
            messages: vec![with_content, underscore, unrelated],
            ..Default::default()
        };
        let rows = log_hours_users(&store, &DateFilter::default(), &[]);
        let names: Vec<&str> = rows.iter().map(|r| r.user_name.as_str()).collect();
        assert_eq!(names, vec!["Dana", "Rami"]);
    }

    #[test]
    fn test_request_durations_average() {
        let mut fast = metric("Dana", "log_hours", "2025-06-01 09:00:00");
        fast.duration_seconds = Some(30.0);
        let mut slow = metric("Rami", "log_hours", "2025-06-01 10:00:00");
        slow.duration_seconds = Some(90.0);
        let no_duration = metric("Lina", "log_hours", "2025-06-01 11:00:00");

        let store = RecordStore {
            metrics: vec![fast, slow, no_duration],
            ..Default::default()
        };
        let rows = request_durations(&store, &DateFilter::default());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].avg_duration_seconds, 60.0);
    }

    #[test]
    fn test_success_rate_family_mapping() {
        let store = RecordStore {
            metrics: vec![
                metric("Dana", "timeoff_approval", "2025-06-01 09:00:00"),
                metric("Dana", "timeoff_approval", "2025-06-02 09:00:00"),
                metric("Rami", "timeoff_refusal", "2025-06-03 09:00:00"),
                metric("Rami", "log_hours", "2025-06-04 09:00:00"),
                // Untracked metric types never reach a family bucket.
                metric("Lina", "smalltalk", "2025-06-05 09:00:00"),
            ],
            ..Default::default()
        };
        let rows = request_success_rates(&store, &DateFilter::default(), &[]);
        assert_eq!(rows.len(), 2);
        // Families sort by name: log_hours before timeoff.
        assert_eq!(rows[0].request_type, "log_hours");
        assert_eq!(rows[0].success_rate_percent, 100.0);
        assert_eq!(rows[1].request_type, "timeoff");
        assert_eq!(rows[1].successes, 2);
        assert_eq!(rows[1].total_events, 3);
        assert_eq!(rows[1].success_rate_percent, 66.7);
    }

    #[test]
    fn test_inactive_employees_sorted() {
        let store = RecordStore {
            employees: vec![
                Employee {
                    name: "Dana Haddad".to_string(),
                    department: Some("Engineering".to_string()),
                },
                Employee {
                    name: "Lina Aboud".to_string(),
                    department: None,
                },
                Employee {
                    name: "Rami Odeh".to_string(),
                    department: Some("Engineering".to_string()),
                },
            ],
            metrics: vec![metric("Dana Haddad", "log_hours", "2025-06-01 09:00:00")],
            ..Default::default()
        };
        let rows = inactive_employees(&store, &[]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].department, "Engineering");
        assert_eq!(rows[0].user_name, "Rami Odeh");
        assert_eq!(rows[1].department, "Unknown");
        assert_eq!(rows[1].user_name, "Lina Aboud");
    }

    #[test]
    fn test_activities_default_window_is_current_utc_day() {
        let now = Utc::now().naive_utc();
        let today = now.format("%Y-%m-%d %H:%M:%S").to_string();
        let store = RecordStore {
            metrics: vec![
                metric("Dana", "log_hours", &today),
                metric("Dana", "log_hours", "2020-01-01 09:00:00"),
            ],
            ..Default::default()
        };
        let rows = activities_today(&store, &DateFilter::default(), &[]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].actions_today, 1);
    }

    #[test]
    fn test_activities_explicit_range_overrides_default() {
        let store = RecordStore {
            metrics: vec![metric("Dana", "log_hours", "2020-01-01 09:00:00")],
            ..Default::default()
        };
        let filter =
            DateFilter::from_params(Some("2020-01-01"), Some("2020-01-01")).unwrap();
        let rows = activities_today(&store, &filter, &[]);
        assert_eq!(rows.len(), 1);
    }
}

//! Pure formatting helpers shared by the chart builders and table writers

use chrono::{Datelike, NaiveDate, Weekday};
use nasma_metrics_shared::EasePoint;

/// Placeholder shown for values that cannot be formatted.
pub const PLACEHOLDER: &str = "-";

/// Format a duration in seconds as "{h}h {m}m". Durations under a minute
/// render the seconds alone; zero components are omitted. Non-finite or
/// non-positive input renders as the placeholder, never as "0h 0m".
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return PLACEHOLDER.to_string();
    }
    let total = seconds as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        if minutes > 0 {
            format!("{hours}h {minutes}m")
        } else {
            format!("{hours}h")
        }
    } else if minutes > 0 {
        format!("{minutes}m")
    } else {
        format!("{secs}s")
    }
}

/// Format a percentage with a fixed decimal count, stripping a trailing
/// all-zero fraction ("50.0%" -> "50%"). Non-numeric input renders as the
/// placeholder.
pub fn format_percent(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let mut text = format!("{value:.decimals$}");
    if text.contains('.') {
        text = text
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string();
    }
    format!("{text}%")
}

/// Average of an ease series, rounded to 2 decimal places. An empty series
/// averages to 0.
pub fn series_average(points: &[EasePoint]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    let sum: f64 = points.iter().map(|p| p.value).sum();
    (sum / points.len() as f64 * 100.0).round() / 100.0
}

/// Label a "YYYY-MM" coverage period as "Mon YY" ("2025-09" -> "Sep 25").
/// Unparseable periods pass through unchanged.
pub fn month_label(period: &str) -> String {
    let parsed = period
        .split_once('-')
        .and_then(|(y, m)| Some((y.parse::<i32>().ok()?, m.parse::<u32>().ok()?)))
        .and_then(|(y, m)| NaiveDate::from_ymd_opt(y, m, 1));
    match parsed {
        Some(date) => date.format("%b %y").to_string(),
        None => period.to_string(),
    }
}

/// Label a "YYYY-Www" coverage period with the Monday of that ISO week
/// ("2024-W01" -> "2024-01-01"). Unparseable periods pass through
/// unchanged.
pub fn iso_week_label(period: &str) -> String {
    match iso_week_monday(period) {
        Some(monday) => monday.format("%Y-%m-%d").to_string(),
        None => period.to_string(),
    }
}

/// Monday of an ISO week given a "YYYY-Www" key, per ISO-8601 week
/// numbering (week 1 contains January 4th).
pub fn iso_week_monday(period: &str) -> Option<NaiveDate> {
    let (year, week) = period.split_once("-W")?;
    let year = year.parse::<i32>().ok()?;
    let week = week.parse::<u32>().ok()?;
    NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)
}

/// ISO week key ("YYYY-Www") for a date.
pub fn iso_week_key(date: NaiveDate) -> String {
    let week = date.iso_week();
    format!("{}-W{:02}", week.year(), week.week())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_formatting() {
        assert_eq!(format_duration(3661.0), "1h 1m");
        assert_eq!(format_duration(3600.0), "1h");
        assert_eq!(format_duration(45.0), "45s");
        assert_eq!(format_duration(90.0), "1m");
        assert_eq!(format_duration(0.0), PLACEHOLDER);
        assert_eq!(format_duration(-5.0), PLACEHOLDER);
        assert_eq!(format_duration(f64::NAN), PLACEHOLDER);
        assert_eq!(format_duration(f64::INFINITY), PLACEHOLDER);
    }

    #[test]
    fn test_percent_formatting() {
        assert_eq!(format_percent(50.0, 1), "50%");
        assert_eq!(format_percent(33.333, 1), "33.3%");
        assert_eq!(format_percent(99.95, 2), "99.95%");
        assert_eq!(format_percent(f64::NAN, 1), PLACEHOLDER);
    }

    #[test]
    fn test_series_average() {
        let points = vec![
            EasePoint {
                period: "Week 1".to_string(),
                value: 6.0,
            },
            EasePoint {
                period: "Week 2".to_string(),
                value: 7.0,
            },
            EasePoint {
                period: "Week 3".to_string(),
                value: 8.5,
            },
        ];
        assert_eq!(series_average(&points), 7.17);
        assert_eq!(series_average(&[]), 0.0);
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label("2025-09"), "Sep 25");
        assert_eq!(month_label("2024-01"), "Jan 24");
        assert_eq!(month_label("garbage"), "garbage");
    }

    #[test]
    fn test_iso_week_label_anchoring() {
        // ISO week 1 of 2024 contains Jan 4; its Monday is Jan 1.
        assert_eq!(iso_week_label("2024-W01"), "2024-01-01");
        // Week 1 of 2021 starts Jan 4 itself (Jan 1-3 belong to 2020-W53).
        assert_eq!(iso_week_label("2021-W01"), "2021-01-04");
        assert_eq!(iso_week_label("not-a-week"), "not-a-week");
    }

    #[test]
    fn test_iso_week_key_round_trip() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        assert_eq!(iso_week_key(date), "2024-W01");
        let monday = iso_week_monday(&iso_week_key(date)).unwrap();
        assert_eq!(monday, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }
}

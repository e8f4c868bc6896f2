//! Date-range filter state
//!
//! Holds the current {start, end} range, derives the query string sent with
//! every metric fetch, and derives the human-readable range descriptions
//! consumed by the header and the table captions.

use chrono::NaiveDate;
use nasma_metrics_shared::{DashboardError, DashboardResult};
use url::form_urlencoded;

/// Current date-range filter. Both bounds optional; when both are present,
/// start <= end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterState {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

/// Derived display strings for the active filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterDescription {
    /// Header summary, e.g. "Showing data from 2025-06-01 to Present".
    pub summary: String,
    /// Short label for table captions, e.g. "since 2025-06-01".
    pub range_label: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Apply a new range. Rejects start > end without touching the stored
    /// filter; the error message is surfaced to the user and no fetch is
    /// issued.
    pub fn apply(
        &mut self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> DashboardResult<()> {
        if let (Some(s), Some(e)) = (start, end) {
            if s > e {
                return Err(DashboardError::InvalidFilter {
                    message: "Start date must be on or before end date".to_string(),
                });
            }
        }
        self.start = start;
        self.end = end;
        Ok(())
    }

    /// Reset to the unfiltered state.
    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
    }

    /// Serialize the filter for the metric endpoints. The start date widens
    /// to local midnight and the end date to 23:59:59.999, so an end date is
    /// inclusive of its whole day. Returns an empty string when unfiltered.
    pub fn query(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        if let Some(start) = self.start {
            // and_hms_milli_opt is infallible for these fixed components
            if let Some(dt) = start.and_hms_milli_opt(0, 0, 0, 0) {
                query.append_pair("start_date", &dt.format("%Y-%m-%dT%H:%M:%S%.3f").to_string());
            }
        }
        if let Some(end) = self.end {
            if let Some(dt) = end.and_hms_milli_opt(23, 59, 59, 999) {
                query.append_pair("end_date", &dt.format("%Y-%m-%dT%H:%M:%S%.3f").to_string());
            }
        }
        query.finish()
    }

    /// Derived header summary and table-caption label.
    pub fn describe(&self) -> FilterDescription {
        let summary = match (self.start, self.end) {
            (None, None) => "Showing all available data".to_string(),
            (start, end) => {
                let from = start
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "Beginning".to_string());
                let to = end
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "Present".to_string());
                format!("Showing data from {from} to {to}")
            }
        };
        let range_label = match (self.start, self.end) {
            (None, None) => "today".to_string(),
            (Some(s), None) => format!("since {}", s.format("%Y-%m-%d")),
            (None, Some(e)) => format!("until {}", e.format("%Y-%m-%d")),
            (Some(s), Some(e)) => {
                format!("{} – {}", s.format("%Y-%m-%d"), e.format("%Y-%m-%d"))
            }
        };
        FilterDescription {
            summary,
            range_label,
        }
    }
}

//! Chart configuration handed to the charting layer
//!
//! Rendering is a pure function of (rows, styling constants) -> ChartConfig;
//! the charting library that consumes the configuration is an external
//! collaborator.

use serde::{Deserialize, Serialize};

/// Chart kinds supported by the dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    Bar,
    HorizontalBar,
    GroupedBar,
}

/// One plotted series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeriesSpec {
    pub name: String,
    pub values: Vec<f64>,
    pub color: String,
}

/// Complete configuration for one chart slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub series: Vec<SeriesSpec>,
    /// Suggested axis ceiling (percentage charts pin this to 100).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_max_hint: Option<f64>,
}

impl ChartConfig {
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            labels: Vec::new(),
            series: Vec::new(),
            y_max_hint: None,
        }
    }

    /// True when there is nothing to plot; the view layer shows the
    /// empty-state message instead of an axis with no bars.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() || self.series.iter().all(|s| s.values.is_empty())
    }
}

//! Ease-comparison editor
//!
//! Modal editor for the two hand-entered ease-of-use series. Edits happen
//! in a local buffer seeded from the last successfully fetched series;
//! saving filters the buffer down to valid rows and submits both series in
//! a single write. The current series is only replaced after the source
//! confirms success.

use nasma_metrics_shared::{EaseComparison, EasePoint};

/// The two edited series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EaseSeries {
    Odoo,
    Nasma,
}

/// One input row: raw period text and raw value text, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorRow {
    pub period: String,
    pub value: String,
}

impl EditorRow {
    fn from_point(point: &EasePoint) -> Self {
        Self {
            period: point.period.clone(),
            value: point.value.to_string(),
        }
    }
}

/// In-memory edit buffer for both series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EaseEditor {
    pub odoo: Vec<EditorRow>,
    pub nasma: Vec<EditorRow>,
    open: bool,
}

impl EaseEditor {
    /// Open the editor seeded with one row per existing data point, or a
    /// single blank row for an empty series.
    pub fn open(current: &EaseComparison) -> Self {
        Self {
            odoo: Self::seed(&current.odoo),
            nasma: Self::seed(&current.nasma),
            open: true,
        }
    }

    fn seed(points: &[EasePoint]) -> Vec<EditorRow> {
        if points.is_empty() {
            vec![EditorRow::default()]
        } else {
            points.iter().map(EditorRow::from_point).collect()
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Close without saving; the buffer is discarded.
    pub fn cancel(&mut self) {
        self.open = false;
    }

    /// Called by the refresh cycle once a save is confirmed.
    pub(crate) fn close(&mut self) {
        self.open = false;
    }

    fn rows_mut(&mut self, series: EaseSeries) -> &mut Vec<EditorRow> {
        match series {
            EaseSeries::Odoo => &mut self.odoo,
            EaseSeries::Nasma => &mut self.nasma,
        }
    }

    /// Append a blank input row to one series.
    pub fn add_row(&mut self, series: EaseSeries) {
        self.rows_mut(series).push(EditorRow::default());
    }

    /// Delete one row's input pair. Out-of-range indices are ignored.
    pub fn remove_row(&mut self, series: EaseSeries, index: usize) {
        let rows = self.rows_mut(series);
        if index < rows.len() {
            rows.remove(index);
        }
    }

    /// Update one row in place.
    pub fn set_row(&mut self, series: EaseSeries, index: usize, period: &str, value: &str) {
        let rows = self.rows_mut(series);
        if let Some(row) = rows.get_mut(index) {
            row.period = period.to_string();
            row.value = value.to_string();
        }
    }

    /// The filtered payload a save would submit: only rows with a non-empty
    /// period and a value that parses as a finite number are kept.
    pub fn submission(&self) -> EaseComparison {
        EaseComparison {
            odoo: Self::collect(&self.odoo),
            nasma: Self::collect(&self.nasma),
        }
    }

    fn collect(rows: &[EditorRow]) -> Vec<EasePoint> {
        rows.iter()
            .filter_map(|row| {
                let period = row.period.trim();
                if period.is_empty() {
                    return None;
                }
                let value = row.value.trim().parse::<f64>().ok()?;
                if !value.is_finite() {
                    return None;
                }
                Some(EasePoint {
                    period: period.to_string(),
                    value,
                })
            })
            .collect()
    }
}

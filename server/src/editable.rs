//! Hand-edited metric state
//!
//! The satisfaction score and the ease-comparison series are maintained by
//! hand from the dashboard, not derived from records. They persist as JSON
//! files under the state directory; every write replaces the whole file
//! under a single lock.

use nasma_metrics_shared::{DashboardError, DashboardResult, EaseComparison, EasePoint, Satisfaction};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};

pub const SATISFACTION_FILE: &str = "satisfaction.json";
pub const EASE_FILE: &str = "ease_comparison.json";

const DEFAULT_SATISFACTION: &str = "9.62";

/// File-backed store for the two hand-edited metrics.
pub struct EditableStore {
    state_dir: PathBuf,
    write_lock: Mutex<()>,
}

impl EditableStore {
    pub fn new(state_dir: impl Into<PathBuf>) -> Self {
        Self {
            state_dir: state_dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Current satisfaction score, or the seed value when never saved.
    pub fn satisfaction(&self) -> DashboardResult<Satisfaction> {
        match self.read_json::<Satisfaction>(SATISFACTION_FILE)? {
            Some(data) => Ok(data),
            None => Ok(Satisfaction {
                overall_satisfaction: DEFAULT_SATISFACTION.to_string(),
            }),
        }
    }

    pub fn save_satisfaction(&self, value: &str) -> DashboardResult<()> {
        let _guard = self.write_lock.lock();
        self.write_json(
            SATISFACTION_FILE,
            &Satisfaction {
                overall_satisfaction: value.to_string(),
            },
        )
    }

    /// Current ease-comparison series. A missing file seeds the default
    /// single-point series and persists it so later edits start from it.
    pub fn ease_comparison(&self) -> DashboardResult<EaseComparison> {
        let _guard = self.write_lock.lock();
        if let Some(data) = self.read_json::<EaseComparison>(EASE_FILE)? {
            return Ok(data);
        }
        let seed = EaseComparison {
            odoo: vec![EasePoint {
                period: "Week 1".to_string(),
                value: 6.82,
            }],
            nasma: vec![EasePoint {
                period: "Week 1".to_string(),
                value: 9.0,
            }],
        };
        self.write_json(EASE_FILE, &seed)?;
        Ok(seed)
    }

    /// Replace both series atomically (single file write).
    pub fn save_ease_comparison(&self, data: &EaseComparison) -> DashboardResult<()> {
        let _guard = self.write_lock.lock();
        self.write_json(EASE_FILE, data)
    }

    fn path(&self, name: &str) -> PathBuf {
        self.state_dir.join(name)
    }

    fn read_json<T: serde::de::DeserializeOwned>(&self, name: &str) -> DashboardResult<Option<T>> {
        let path = self.path(name);
        if !path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&path).map_err(|e| DashboardError::Save {
            message: format!("read {}: {e}", path.display()),
        })?;
        let data = serde_json::from_str(&raw).map_err(|e| DashboardError::Save {
            message: format!("parse {}: {e}", path.display()),
        })?;
        Ok(Some(data))
    }

    fn write_json<T: serde::Serialize>(&self, name: &str, data: &T) -> DashboardResult<()> {
        std::fs::create_dir_all(&self.state_dir).map_err(|e| DashboardError::Save {
            message: format!("create {}: {e}", self.state_dir.display()),
        })?;
        let path = self.path(name);
        let json = serde_json::to_string_pretty(data)?;
        std::fs::write(&path, json).map_err(|e| DashboardError::Save {
            message: format!("write {}: {e}", path.display()),
        })
    }
}

impl EditableStore {
    pub fn state_dir(&self) -> &Path {
        &self.state_dir
    }
}

//! Chart registry
//!
//! One named chart instance per visualization slot. The registry owns the
//! create/destroy lifecycle so a re-render never leaks or duplicates a
//! drawing surface: any existing handle for a slot is released before the
//! replacement is bound.

use nasma_metrics_shared::{ChartConfig, DashboardResult};
use std::collections::HashMap;

/// Fixed visualization slots in the page layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartSlot {
    ActiveUsers,
    Requests,
    SuccessRates,
    EaseComparison,
    PlanningCoverage,
}

impl ChartSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartSlot::ActiveUsers => "active-users",
            ChartSlot::Requests => "requests",
            ChartSlot::SuccessRates => "success-rates",
            ChartSlot::EaseComparison => "ease-comparison",
            ChartSlot::PlanningCoverage => "planning-coverage",
        }
    }
}

/// Opaque handle to one live chart instance in the charting layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartHandle(pub u64);

/// Seam to the external charting library.
pub trait ChartBackend {
    /// Bind a new chart to a slot's drawing surface.
    fn create(&mut self, slot: &str, config: &ChartConfig) -> DashboardResult<ChartHandle>;

    /// Release a chart instance and its drawing-surface binding.
    fn destroy(&mut self, handle: ChartHandle);
}

/// Map from slot to its single live handle.
#[derive(Debug, Default)]
pub struct ChartRegistry {
    handles: HashMap<ChartSlot, ChartHandle>,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a slot: release the prior handle if present, then bind a new
    /// one. Fully replaces prior chart state, which is what makes repeated
    /// renders (filter changes, view toggles) idempotent.
    pub fn render<B: ChartBackend>(
        &mut self,
        backend: &mut B,
        slot: ChartSlot,
        config: &ChartConfig,
    ) -> DashboardResult<()> {
        if let Some(prev) = self.handles.remove(&slot) {
            backend.destroy(prev);
        }
        let handle = backend.create(slot.as_str(), config)?;
        self.handles.insert(slot, handle);
        Ok(())
    }

    /// Release one slot without replacement (view navigation away).
    pub fn release<B: ChartBackend>(&mut self, backend: &mut B, slot: ChartSlot) {
        if let Some(handle) = self.handles.remove(&slot) {
            backend.destroy(handle);
        }
    }

    /// Release every slot.
    pub fn release_all<B: ChartBackend>(&mut self, backend: &mut B) {
        for (_, handle) in self.handles.drain() {
            backend.destroy(handle);
        }
    }

    pub fn handle(&self, slot: ChartSlot) -> Option<ChartHandle> {
        self.handles.get(&slot).copied()
    }

    pub fn live_count(&self) -> usize {
        self.handles.len()
    }
}

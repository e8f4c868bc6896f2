//! Dashboard refresh cycle
//!
//! Orchestrates fetching every metric in parallel and feeding results to
//! the matching chart builder or table writer. A metric's failure results
//! in that metric's widget rendering its empty state, never in aborting
//! the others. Every render call fully replaces the prior widget state, so
//! repeated refreshes are idempotent.

use crate::ease::EaseEditor;
use crate::fetch::MetricClient;
use crate::filter::{FilterDescription, FilterState};
use crate::format;
use crate::registry::{ChartBackend, ChartRegistry, ChartSlot};
use crate::render::{self, CoverageView, TableRow};
use chrono::NaiveDate;
use nasma_metrics_shared::{ChartConfig, DashboardResult, EaseComparison, PlanningCoverage};

/// Refresh-cycle state. A cycle is entered by the initial load, a filter
/// apply, or a filter clear.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RefreshState {
    #[default]
    Idle,
    Refreshing,
}

/// Formatted table view-models, one list per table widget. An empty list is
/// the table's empty state.
#[derive(Debug, Clone, Default)]
pub struct DashboardTables {
    pub durations: Vec<TableRow>,
    pub adoption_departments: Vec<TableRow>,
    pub activities: Vec<TableRow>,
    pub inactive_employees: Vec<TableRow>,
    pub log_hours: Vec<TableRow>,
    pub message_breakdown: Vec<TableRow>,
}

/// Stat-card values. `None` is the card's empty state.
#[derive(Debug, Clone, Default)]
pub struct DashboardStats {
    pub adoption_count: Option<u64>,
    pub total_messages: Option<u64>,
    pub satisfaction: Option<String>,
}

/// The dashboard's client-side state: filter, chart registry, stat cards,
/// table view-models, and the committed copies of the editable series.
pub struct Dashboard<C: MetricClient, B: ChartBackend> {
    client: C,
    backend: B,
    filter: FilterState,
    registry: ChartRegistry,
    state: RefreshState,
    coverage_view: CoverageView,
    coverage: PlanningCoverage,
    ease: EaseComparison,
    pub tables: DashboardTables,
    pub stats: DashboardStats,
}

/// Absorb a per-metric failure into the widget's empty state.
fn absorb<T: Default>(metric: &str, result: DashboardResult<T>) -> T {
    result.unwrap_or_else(|e| {
        log::error!("{metric} fetch failed: {e}");
        T::default()
    })
}

/// Absorb a per-metric failure for stat cards, which distinguish "no value"
/// from zero.
fn absorb_opt<T>(metric: &str, result: DashboardResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("{metric} fetch failed: {e}");
            None
        }
    }
}

impl<C: MetricClient, B: ChartBackend> Dashboard<C, B> {
    pub fn new(client: C, backend: B) -> Self {
        Self {
            client,
            backend,
            filter: FilterState::new(),
            registry: ChartRegistry::new(),
            state: RefreshState::Idle,
            coverage_view: CoverageView::default(),
            coverage: PlanningCoverage::default(),
            ease: EaseComparison::default(),
            tables: DashboardTables::default(),
            stats: DashboardStats::default(),
        }
    }

    pub fn state(&self) -> RefreshState {
        self.state
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn registry(&self) -> &ChartRegistry {
        &self.registry
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn coverage_view(&self) -> CoverageView {
        self.coverage_view
    }

    /// The committed ease-comparison series (seed for the editor).
    pub fn ease(&self) -> &EaseComparison {
        &self.ease
    }

    /// Per-series averages of the committed ease data, rounded to 2
    /// decimals (0 for an empty series).
    pub fn ease_averages(&self) -> (f64, f64) {
        (
            format::series_average(&self.ease.odoo),
            format::series_average(&self.ease.nasma),
        )
    }

    /// Header summary and table-caption label for the active filter.
    pub fn captions(&self) -> FilterDescription {
        self.filter.describe()
    }

    /// Initial load: identical to a refresh with the default (empty)
    /// filter.
    pub async fn load(&mut self) {
        self.refresh().await;
    }

    /// Validate and store a new date range, then refresh everything. A
    /// rejected range surfaces the validation error without issuing any
    /// request.
    pub async fn apply_filter(
        &mut self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> DashboardResult<()> {
        self.filter.apply(start, end)?;
        self.refresh().await;
        Ok(())
    }

    /// Reset the filter and refresh everything.
    pub async fn clear_filter(&mut self) {
        self.filter.clear();
        self.refresh().await;
    }

    /// Fetch every metric concurrently and route each result to its
    /// renderer or table-writer independently.
    pub async fn refresh(&mut self) {
        self.state = RefreshState::Refreshing;
        let query = self.filter.query();

        let (
            active_users,
            requests,
            adoption,
            departments,
            messages,
            log_hours,
            durations,
            success_rates,
            inactive,
            activities,
            satisfaction,
            ease,
            coverage,
        ) = futures::join!(
            self.client.active_users(&query),
            self.client.requests(&query),
            self.client.adoption(&query),
            self.client.adoption_by_department(),
            self.client.messages(&query),
            self.client.log_hours(&query),
            self.client.request_durations(&query),
            self.client.request_success_rates(&query),
            self.client.inactive_employees(),
            self.client.activities_today(&query),
            self.client.satisfaction(),
            self.client.ease_comparison(),
            self.client.planning_coverage(),
        );

        // Charts
        let config = render::active_users_chart(&absorb("active-users", active_users));
        self.render_chart(ChartSlot::ActiveUsers, &config);

        let config = render::requests_chart(&absorb("requests", requests));
        self.render_chart(ChartSlot::Requests, &config);

        let config = render::success_rates_chart(&absorb("request-success-rates", success_rates));
        self.render_chart(ChartSlot::SuccessRates, &config);

        // The committed ease series only advances on a successful fetch;
        // a failure renders the empty state but keeps the editor seed.
        match ease {
            Ok(data) => {
                self.ease = data;
                let config = render::ease_comparison_chart(&self.ease);
                self.render_chart(ChartSlot::EaseComparison, &config);
            }
            Err(e) => {
                log::error!("ease-comparison fetch failed: {e}");
                let config = render::ease_comparison_chart(&EaseComparison::default());
                self.render_chart(ChartSlot::EaseComparison, &config);
            }
        }

        self.coverage = absorb("planning-coverage", coverage);
        let config = render::coverage_chart(&self.coverage, self.coverage_view);
        self.render_chart(ChartSlot::PlanningCoverage, &config);

        // Stat cards
        self.stats.adoption_count =
            absorb_opt("adoption", adoption).map(|payload| payload.count);
        self.stats.satisfaction =
            absorb_opt("satisfaction", satisfaction).map(|payload| payload.overall_satisfaction);

        // Tables
        let messages = absorb_opt("messages", messages);
        self.stats.total_messages = messages.as_ref().map(|summary| summary.total_messages);
        self.tables.message_breakdown = messages
            .as_ref()
            .map(render::message_breakdown_rows)
            .unwrap_or_default();

        self.tables.durations = render::duration_rows(&absorb("request-durations", durations));
        self.tables.adoption_departments =
            render::adoption_department_rows(&absorb("adoption-by-department", departments));
        self.tables.activities = render::activity_rows(&absorb("activities-today", activities));
        self.tables.inactive_employees =
            render::inactive_employee_rows(&absorb("inactive-employees", inactive));
        self.tables.log_hours = render::log_hours_rows(&absorb("log-hours", log_hours));

        self.state = RefreshState::Idle;
    }

    /// Switch the coverage chart between monthly and weekly without a
    /// fetch; re-renders from the cached payload.
    pub fn set_coverage_view(&mut self, view: CoverageView) {
        self.coverage_view = view;
        let config = render::coverage_chart(&self.coverage, view);
        self.render_chart(ChartSlot::PlanningCoverage, &config);
    }

    /// Open the ease editor seeded from the committed series.
    pub fn open_ease_editor(&self) -> EaseEditor {
        EaseEditor::open(&self.ease)
    }

    /// Submit the editor buffer. On success the committed series becomes
    /// exactly what was submitted (no re-fetch), the chart re-renders, and
    /// the editor closes. On failure everything stays as it was and the
    /// error is surfaced.
    pub async fn save_ease(&mut self, editor: &mut EaseEditor) -> DashboardResult<()> {
        let submission = editor.submission();
        self.client.save_ease_comparison(&submission).await?;
        self.ease = submission;
        let config = render::ease_comparison_chart(&self.ease);
        self.render_chart(ChartSlot::EaseComparison, &config);
        editor.close();
        Ok(())
    }

    /// Save a hand-entered satisfaction score; the stat card updates only
    /// after the source confirms.
    pub async fn save_satisfaction(&mut self, value: &str) -> DashboardResult<()> {
        self.client.save_satisfaction(value).await?;
        self.stats.satisfaction = Some(value.to_string());
        Ok(())
    }

    /// Release every chart handle (view navigation away from the page).
    pub fn teardown(&mut self) {
        self.registry.release_all(&mut self.backend);
    }

    fn render_chart(&mut self, slot: ChartSlot, config: &ChartConfig) {
        if let Err(e) = self.registry.render(&mut self.backend, slot, config) {
            log::error!("failed to render {}: {e}", slot.as_str());
        }
    }
}

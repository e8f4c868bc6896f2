//! Metric source client
//!
//! One read operation per metric, each parameterized by the serialized
//! filter where the endpoint supports it. `MetricClient` is the seam the
//! refresh cycle depends on; `HttpMetricClient` is the reqwest-backed
//! implementation.

use async_trait::async_trait;
use nasma_metrics_shared::{
    ActiveUsersRow, ActivityRow, AdoptionCount, ApiEnvelope, DashboardError, DashboardResult,
    DepartmentAdoptionRow, EaseComparison, InactiveEmployeeRow, LogHoursRow, MessagesSummary,
    PlanningCoverage, RequestCountRow, RequestDurationRow, Satisfaction, SuccessRateRow,
};

/// Read/write operations against the metric endpoints. `query` is the
/// serialized filter (possibly empty) for the endpoints that accept one.
#[async_trait]
pub trait MetricClient {
    async fn active_users(&self, query: &str) -> DashboardResult<Vec<ActiveUsersRow>>;
    async fn requests(&self, query: &str) -> DashboardResult<Vec<RequestCountRow>>;
    async fn adoption(&self, query: &str) -> DashboardResult<AdoptionCount>;
    async fn adoption_by_department(&self) -> DashboardResult<Vec<DepartmentAdoptionRow>>;
    async fn messages(&self, query: &str) -> DashboardResult<MessagesSummary>;
    async fn log_hours(&self, query: &str) -> DashboardResult<Vec<LogHoursRow>>;
    async fn request_durations(&self, query: &str) -> DashboardResult<Vec<RequestDurationRow>>;
    async fn request_success_rates(&self, query: &str) -> DashboardResult<Vec<SuccessRateRow>>;
    async fn inactive_employees(&self) -> DashboardResult<Vec<InactiveEmployeeRow>>;
    async fn activities_today(&self, query: &str) -> DashboardResult<Vec<ActivityRow>>;
    async fn satisfaction(&self) -> DashboardResult<Satisfaction>;
    async fn save_satisfaction(&self, value: &str) -> DashboardResult<()>;
    async fn ease_comparison(&self) -> DashboardResult<EaseComparison>;
    async fn save_ease_comparison(&self, data: &EaseComparison) -> DashboardResult<()>;
    async fn planning_coverage(&self) -> DashboardResult<PlanningCoverage>;
}

/// HTTP client for the dashboard API.
#[derive(Debug, Clone)]
pub struct HttpMetricClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpMetricClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str, query: &str) -> String {
        if query.is_empty() {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}{path}?{query}", self.base_url)
        }
    }

    async fn get_data<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &str,
    ) -> DashboardResult<T> {
        let url = self.url(path, query);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| DashboardError::Fetch {
                message: format!("{e} (URL: {url})"),
            })?;
        let envelope: ApiEnvelope<T> =
            response.json().await.map_err(|e| DashboardError::Decode {
                message: format!("{e} (URL: {url})"),
            })?;
        envelope.into_data()
    }

    async fn post_confirm<T: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &T,
    ) -> DashboardResult<()> {
        let url = self.url(path, "");
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| DashboardError::Fetch {
                message: format!("{e} (URL: {url})"),
            })?;
        let envelope: ApiEnvelope<serde_json::Value> =
            response.json().await.map_err(|e| DashboardError::Decode {
                message: format!("{e} (URL: {url})"),
            })?;
        envelope.confirm()
    }
}

#[async_trait]
impl MetricClient for HttpMetricClient {
    async fn active_users(&self, query: &str) -> DashboardResult<Vec<ActiveUsersRow>> {
        self.get_data("/api/active-users", query).await
    }

    async fn requests(&self, query: &str) -> DashboardResult<Vec<RequestCountRow>> {
        self.get_data("/api/requests", query).await
    }

    async fn adoption(&self, query: &str) -> DashboardResult<AdoptionCount> {
        self.get_data("/api/adoption", query).await
    }

    async fn adoption_by_department(&self) -> DashboardResult<Vec<DepartmentAdoptionRow>> {
        self.get_data("/api/adoption-by-department", "").await
    }

    async fn messages(&self, query: &str) -> DashboardResult<MessagesSummary> {
        self.get_data("/api/messages", query).await
    }

    async fn log_hours(&self, query: &str) -> DashboardResult<Vec<LogHoursRow>> {
        self.get_data("/api/log-hours", query).await
    }

    async fn request_durations(&self, query: &str) -> DashboardResult<Vec<RequestDurationRow>> {
        self.get_data("/api/request-durations", query).await
    }

    async fn request_success_rates(&self, query: &str) -> DashboardResult<Vec<SuccessRateRow>> {
        self.get_data("/api/request-success-rates", query).await
    }

    async fn inactive_employees(&self) -> DashboardResult<Vec<InactiveEmployeeRow>> {
        self.get_data("/api/inactive-employees", "").await
    }

    async fn activities_today(&self, query: &str) -> DashboardResult<Vec<ActivityRow>> {
        self.get_data("/api/activities-today", query).await
    }

    async fn satisfaction(&self) -> DashboardResult<Satisfaction> {
        self.get_data("/api/satisfaction", "").await
    }

    async fn save_satisfaction(&self, value: &str) -> DashboardResult<()> {
        self.post_confirm("/api/satisfaction", &serde_json::json!({ "value": value }))
            .await
    }

    async fn ease_comparison(&self) -> DashboardResult<EaseComparison> {
        self.get_data("/api/ease-comparison", "").await
    }

    async fn save_ease_comparison(&self, data: &EaseComparison) -> DashboardResult<()> {
        self.post_confirm("/api/ease-comparison", data).await
    }

    async fn planning_coverage(&self) -> DashboardResult<PlanningCoverage> {
        self.get_data("/api/odoo/planning-coverage", "").await
    }
}

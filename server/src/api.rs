//! Endpoint handlers
//!
//! Every endpoint returns the `{success, data, error}` envelope. Query
//! parsing failures are 400s, store failures are 500s, and each handler
//! absorbs its own errors so one endpoint's failure never affects another.

use crate::config::ServerConfig;
use crate::coverage::planning_coverage;
use crate::dataset::{parse_date, DateFilter, RecordStore};
use crate::editable::EditableStore;
use crate::metrics;
use hyper::{body::Body, Request, Response, StatusCode};
use nasma_metrics_shared::{ApiEnvelope, EaseComparison};
use serde::Deserialize;
use std::collections::HashMap;
use url::form_urlencoded;

/// Shared server state: configuration, the loaded record collections, and
/// the hand-edited metric store.
pub struct AppState {
    pub config: ServerConfig,
    pub records: RecordStore,
    pub editable: EditableStore,
}

impl AppState {
    fn excluded(&self) -> &[String] {
        &self.config.excluded_users
    }
}

/// Parse the query string into a map.
pub fn query_map(query: Option<&str>) -> HashMap<String, String> {
    match query {
        Some(query) => form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect(),
        None => HashMap::new(),
    }
}

/// Build the date filter from `start_date`/`end_date` query parameters.
pub fn parse_date_filter(query: Option<&str>) -> Result<DateFilter, String> {
    let params = query_map(query);
    DateFilter::from_params(
        params.get("start_date").map(String::as_str),
        params.get("end_date").map(String::as_str),
    )
}

fn json_response<T: serde::Serialize>(status: StatusCode, envelope: &ApiEnvelope<T>) -> Response<Body> {
    let body = serde_json::to_string(envelope).unwrap_or_else(|_| {
        r#"{"success":false,"error":"failed to serialize response"}"#.to_string()
    });
    Response::builder()
        .status(status)
        .header(hyper::header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn ok_json<T: serde::Serialize>(data: T) -> Response<Body> {
    json_response(StatusCode::OK, &ApiEnvelope::ok(data))
}

fn ok_message(message: &str) -> Response<Body> {
    json_response::<serde_json::Value>(StatusCode::OK, &ApiEnvelope::ok_message(message))
}

fn bad_request(error: String) -> Response<Body> {
    json_response::<serde_json::Value>(StatusCode::BAD_REQUEST, &ApiEnvelope::err(error))
}

fn server_error(error: String) -> Response<Body> {
    log::error!("request failed: {error}");
    json_response::<serde_json::Value>(StatusCode::INTERNAL_SERVER_ERROR, &ApiEnvelope::err(error))
}

pub fn handle_active_users(state: &AppState, query: Option<&str>) -> Response<Body> {
    match parse_date_filter(query) {
        Ok(filter) => ok_json(metrics::active_users_by_month(&state.records, &filter)),
        Err(e) => bad_request(e),
    }
}

pub fn handle_requests(state: &AppState, query: Option<&str>) -> Response<Body> {
    match parse_date_filter(query) {
        Ok(filter) => ok_json(metrics::all_time_requests(&state.records, &filter)),
        Err(e) => bad_request(e),
    }
}

pub fn handle_adoption(state: &AppState, query: Option<&str>) -> Response<Body> {
    match parse_date_filter(query) {
        Ok(filter) => ok_json(metrics::adoption_count(&state.records, &filter)),
        Err(e) => bad_request(e),
    }
}

pub fn handle_messages(state: &AppState, query: Option<&str>) -> Response<Body> {
    match parse_date_filter(query) {
        Ok(filter) => ok_json(metrics::messages_summary(
            &state.records,
            &filter,
            state.excluded(),
        )),
        Err(e) => bad_request(e),
    }
}

pub fn handle_log_hours(state: &AppState, query: Option<&str>) -> Response<Body> {
    match parse_date_filter(query) {
        Ok(filter) => ok_json(metrics::log_hours_users(
            &state.records,
            &filter,
            state.excluded(),
        )),
        Err(e) => bad_request(e),
    }
}

pub fn handle_request_durations(state: &AppState, query: Option<&str>) -> Response<Body> {
    match parse_date_filter(query) {
        Ok(filter) => ok_json(metrics::request_durations(&state.records, &filter)),
        Err(e) => bad_request(e),
    }
}

pub fn handle_request_success_rates(state: &AppState, query: Option<&str>) -> Response<Body> {
    match parse_date_filter(query) {
        Ok(filter) => ok_json(metrics::request_success_rates(
            &state.records,
            &filter,
            state.excluded(),
        )),
        Err(e) => bad_request(e),
    }
}

pub fn handle_activities_today(state: &AppState, query: Option<&str>) -> Response<Body> {
    match parse_date_filter(query) {
        Ok(filter) => ok_json(metrics::activities_today(
            &state.records,
            &filter,
            state.excluded(),
        )),
        Err(e) => bad_request(e),
    }
}

pub fn handle_adoption_by_department(state: &AppState, query: Option<&str>) -> Response<Body> {
    match parse_date_filter(query) {
        Ok(filter) => ok_json(metrics::adoption_by_department(
            &state.records,
            &filter,
            state.excluded(),
        )),
        Err(e) => bad_request(e),
    }
}

pub fn handle_inactive_employees(state: &AppState) -> Response<Body> {
    ok_json(metrics::inactive_employees(
        &state.records,
        state.excluded(),
    ))
}

pub fn handle_planning_coverage(state: &AppState, query: Option<&str>) -> Response<Body> {
    let params = query_map(query);
    let start = params.get("start_date").map(String::as_str);
    let end = params.get("end_date").map(String::as_str);
    let window = match (start, end) {
        (Some(start), Some(end)) => {
            let (Some(start), Some(end)) = (parse_date(start), parse_date(end)) else {
                return bad_request("Invalid coverage window".to_string());
            };
            if end < start {
                return bad_request("end_date must be on or after start_date".to_string());
            }
            Some((start, end))
        }
        (None, None) => None,
        _ => {
            return bad_request(
                "start_date and end_date must be supplied together".to_string(),
            )
        }
    };
    ok_json(planning_coverage(&state.records, window))
}

pub fn handle_get_satisfaction(state: &AppState) -> Response<Body> {
    match state.editable.satisfaction() {
        Ok(data) => ok_json(data),
        Err(e) => server_error(e.to_string()),
    }
}

#[derive(Debug, Deserialize)]
struct SatisfactionPayload {
    #[serde(default)]
    value: String,
}

pub async fn handle_post_satisfaction(
    state: &AppState,
    req: Request<Body>,
) -> Response<Body> {
    let payload: SatisfactionPayload = match read_json_body(req).await {
        Ok(payload) => payload,
        Err(e) => return bad_request(e),
    };
    match state.editable.save_satisfaction(&payload.value) {
        Ok(()) => ok_message("Satisfaction updated"),
        Err(e) => server_error(e.to_string()),
    }
}

pub fn handle_get_ease_comparison(state: &AppState) -> Response<Body> {
    match state.editable.ease_comparison() {
        Ok(data) => ok_json(data),
        Err(e) => server_error(e.to_string()),
    }
}

pub async fn handle_post_ease_comparison(
    state: &AppState,
    req: Request<Body>,
) -> Response<Body> {
    let payload: EaseComparison = match read_json_body(req).await {
        Ok(payload) => payload,
        Err(e) => return bad_request(e),
    };
    match state.editable.save_ease_comparison(&payload) {
        Ok(()) => ok_message("Ease comparison updated"),
        Err(e) => server_error(e.to_string()),
    }
}

async fn read_json_body<T: serde::de::DeserializeOwned>(
    req: Request<Body>,
) -> Result<T, String> {
    let bytes = hyper::body::to_bytes(req.into_body())
        .await
        .map_err(|e| format!("Failed to read request body: {e}"))?;
    serde_json::from_slice(&bytes).map_err(|e| format!("Invalid JSON body: {e}"))
}

/// Serve the dashboard page. The markup itself belongs to the template
/// layer; this just hands the file over when it is present.
pub async fn handle_index() -> Response<Body> {
    match tokio::fs::read("static/index.html").await {
        Ok(contents) => Response::builder()
            .status(StatusCode::OK)
            .header(hyper::header::CONTENT_TYPE, "text/html; charset=utf-8")
            .body(Body::from(contents))
            .unwrap(),
        Err(_) => Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Body::from("Not Found"))
            .unwrap(),
    }
}

pub fn not_found() -> Response<Body> {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .body(Body::from("Not Found"))
        .unwrap()
}

// main.rs

use std::{convert::Infallible, net::SocketAddr, sync::Arc};

use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Method, Request, Response, Server, StatusCode};

use nasma_metrics_server::api::{self, AppState};
use nasma_metrics_server::config::ServerConfig;
use nasma_metrics_server::dataset::RecordStore;
use nasma_metrics_server::editable::EditableStore;

/// Top-level service function: dispatches each API route to its handler and
/// attaches CORS headers to every response.
async fn service_handler(
    state: Arc<AppState>,
    req: Request<Body>,
) -> Result<Response<Body>, Infallible> {
    // Handle preflight OPTIONS requests.
    if req.method() == Method::OPTIONS {
        let response = Response::builder()
            .status(StatusCode::OK)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "GET, POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::empty())
            .unwrap();
        return Ok(response);
    }

    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(str::to_string);
    let query = query.as_deref();
    log::info!("{method} {path}");

    let mut response = match (&method, path.as_str()) {
        (&Method::GET, "/") => api::handle_index().await,
        (&Method::GET, "/api/active-users") => api::handle_active_users(&state, query),
        (&Method::GET, "/api/requests") => api::handle_requests(&state, query),
        (&Method::GET, "/api/adoption") => api::handle_adoption(&state, query),
        (&Method::GET, "/api/adoption-by-department") => {
            api::handle_adoption_by_department(&state, query)
        }
        (&Method::GET, "/api/messages") => api::handle_messages(&state, query),
        (&Method::GET, "/api/log-hours") => api::handle_log_hours(&state, query),
        (&Method::GET, "/api/request-durations") => {
            api::handle_request_durations(&state, query)
        }
        (&Method::GET, "/api/request-success-rates") => {
            api::handle_request_success_rates(&state, query)
        }
        (&Method::GET, "/api/inactive-employees") => api::handle_inactive_employees(&state),
        (&Method::GET, "/api/activities-today") => api::handle_activities_today(&state, query),
        (&Method::GET, "/api/satisfaction") => api::handle_get_satisfaction(&state),
        (&Method::POST, "/api/satisfaction") => {
            api::handle_post_satisfaction(&state, req).await
        }
        (&Method::GET, "/api/ease-comparison") => api::handle_get_ease_comparison(&state),
        (&Method::POST, "/api/ease-comparison") => {
            api::handle_post_ease_comparison(&state, req).await
        }
        (&Method::GET, "/api/odoo/planning-coverage") => {
            api::handle_planning_coverage(&state, query)
        }
        _ => api::not_found(),
    };

    // Attach CORS header to the response.
    response
        .headers_mut()
        .insert("Access-Control-Allow-Origin", "*".parse().unwrap());
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = ServerConfig::from_env();
    let records = RecordStore::load(&config.data_dir)?;
    log::info!(
        "loaded dataset: {} messages, {} metrics, {} tokens, {} employees, {} slots, {} timesheets",
        records.messages.len(),
        records.metrics.len(),
        records.tokens.len(),
        records.employees.len(),
        records.planning_slots.len(),
        records.timesheets.len(),
    );
    let editable = EditableStore::new(config.state_dir.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = Arc::new(AppState {
        config,
        records,
        editable,
    });

    let make_service = make_service_fn(move |_conn| {
        let state = Arc::clone(&state);
        async move {
            Ok::<_, Infallible>(service_fn(move |req| {
                service_handler(Arc::clone(&state), req)
            }))
        }
    });

    log::info!("Listening on http://{addr}");
    Server::bind(&addr).serve(make_service).await?;
    Ok(())
}

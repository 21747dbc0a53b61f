pub mod bills;
pub mod my_bills;
pub mod token;
pub mod users;

use axum::{
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::error::ApiError;
use crate::middleware::jwt_auth_middleware;
use crate::state::AppState;

/// Assemble the full application router over injected state
pub fn router(state: AppState) -> Router {
    // Everything under /my-bills/:key is owner-gated; the verifier runs
    // before any of these handlers
    let protected = Router::new()
        .route(
            "/my-bills/:key",
            get(my_bills::list_for_owner)
                .patch(my_bills::record_patch)
                .delete(my_bills::record_delete),
        )
        .route("/my-bills/summary/:email", get(my_bills::summary))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            jwt_auth_middleware,
        ));

    let mut app = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/bills/recent", get(bills::recent))
        .route("/bills", get(bills::list).post(bills::create))
        .route("/bills/:id", get(bills::get_one))
        .route("/my-bills", post(my_bills::create))
        .route("/users", post(users::register))
        .route("/jwt", post(token::issue))
        .merge(protected);

    if state.security.enable_cors {
        app = app.layer(CorsLayer::permissive());
    }

    app.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Utility Bill Management Server",
        "version": version,
        "status": "running",
        "endpoints": {
            "bills": "/bills, /bills/recent, /bills/:id (public)",
            "my_bills": "/my-bills (public create), /my-bills/:email, /my-bills/:id, /my-bills/summary/:email (bearer)",
            "users": "/users (public)",
            "jwt": "/jwt (public - token acquisition)"
        }
    }))
}

async fn health(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match state.bills.ping().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "store": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "store_error": e.to_string()
            })),
        ),
    }
}

/// Normalize a client-supplied date string to a UTC timestamp. Accepts
/// RFC 3339 or a bare `YYYY-MM-DD` day.
pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, ApiError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(DateTime::from_naive_utc_and_offset(
            day.and_time(NaiveTime::MIN),
            Utc,
        ));
    }
    Err(ApiError::bad_request(format!("Invalid date value: {}", raw)))
}

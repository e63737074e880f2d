use axum::{Json, http::StatusCode};
use serde_json::{Value, json};

/// Liveness marker for the dashboard frontend
///
/// The dashboard probes this route on startup to distinguish "API down"
/// from "API up but database empty".
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running"),
    ),
    tag = "health"
)]
pub async fn service_status() -> Json<Value> {
    Json(json!({ "message": "Loadbank telemetry API is running" }))
}

/// Health check endpoint
///
/// Returns 200 OK if the service is running. Suitable for probes.
#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = 200, description = "Service is healthy"),
    ),
    tag = "health"
)]
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

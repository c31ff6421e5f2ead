//! Endpoint handlers.
//!
//! Each handler makes at most one upstream call and turns the outcome into a
//! fixed JSON shape. Upstream bodies are relayed unchanged.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::payload::{RelayedJson, StatusPayload};
use crate::http::request::request_id;
use crate::http::server::AppState;

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// `GET /api/check-mc`: always 200, upstream document or the fallback.
pub async fn check_mc(State(state): State<AppState>, headers: HeaderMap) -> Response {
    match state.mc_status.fetch().await {
        Ok(body) => (StatusCode::OK, RelayedJson(body)).into_response(),
        Err(e) => {
            tracing::warn!(
                request_id = %request_id(&headers),
                error = %e,
                "Game server status unavailable, serving fallback"
            );
            (StatusCode::OK, Json(StatusPayload::unavailable())).into_response()
        }
    }
}

/// `POST /api/start`: power on the VM.
pub async fn start_vm(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<RelayedJson, ApiError> {
    tracing::info!(request_id = %request_id(&headers), "Starting VM");

    state.vm.start().await.map(RelayedJson).map_err(|e| {
        tracing::error!(request_id = %request_id(&headers), error = %e, "VM start failed");
        ApiError::StartFailed
    })
}

/// `GET /api/status`: current VM state.
pub async fn vm_status(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<RelayedJson, ApiError> {
    state.vm.status().await.map(RelayedJson).map_err(|e| {
        tracing::error!(request_id = %request_id(&headers), error = %e, "VM status query failed");
        ApiError::StatusFailed
    })
}

/// `GET /healthz`: liveness, no upstream call.
pub async fn healthz() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Answer for methods a route does not serve.
pub async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}

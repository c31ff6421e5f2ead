//! Front-end facing API.
//!
//! # Routes
//! ```text
//! GET  /api/check-mc   public      game server status (fallback on failure)
//! POST /api/start      x-app-auth  power on the VM
//! GET  /api/status     x-app-auth  VM status
//! GET  /healthz        public      liveness
//! ```
//!
//! Method checks run before authentication: a wrong method is a 405 whatever
//! the headers say.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod payload;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::http::server::AppState;
use self::auth::require_app_auth;
use self::handlers::*;

pub use error::{ApiError, ErrorBody};
pub use payload::{RelayedJson, StatusPayload};

pub fn router(state: AppState) -> Router {
    // The auth layer wraps only the routed method; fallbacks added after it
    // stay unauthenticated so a wrong method is always 405.
    let auth = middleware::from_fn_with_state(state.clone(), require_app_auth);

    Router::new()
        .route("/api/check-mc", get(check_mc).fallback(method_not_allowed))
        .route("/healthz", get(healthz))
        .route(
            "/api/start",
            post(start_vm)
                .route_layer(auth.clone())
                .fallback(method_not_allowed),
        )
        .route(
            "/api/status",
            get(vm_status).route_layer(auth).fallback(method_not_allowed),
        )
        .with_state(state)
}

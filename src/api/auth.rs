use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::api::error::ApiError;
use crate::http::request::request_id;
use crate::http::server::AppState;

/// Header carrying the shared secret.
pub const X_APP_AUTH: &str = "x-app-auth";

/// Reject requests whose `x-app-auth` does not match `APP_PASSWORD`.
///
/// Installed as a route layer, so unrouted methods are answered with 405
/// before this runs.
pub async fn require_app_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let presented = request
        .headers()
        .get(X_APP_AUTH)
        .and_then(|h| h.to_str().ok());

    let header_present = presented.is_some();
    let authorized = presented.is_some_and(|token| state.config.auth.app_password.matches(token));

    if authorized {
        return Ok(next.run(request).await);
    }

    tracing::warn!(
        request_id = %request_id(request.headers()),
        path = %request.uri().path(),
        header_present,
        "Rejected request with invalid app auth"
    );
    Err(ApiError::Unauthorized)
}

//! Client-facing errors and their fixed JSON bodies.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every error a privileged endpoint can answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    /// `x-app-auth` missing or wrong.
    #[error("Unauthorized")]
    Unauthorized,

    /// The start command could not be delivered.
    #[error("Gagal menyalakan server")]
    StartFailed,

    /// The VM status could not be fetched.
    #[error("Gagal mengambil status")]
    StatusFailed,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::StartFailed | ApiError::StatusFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_to_fixed_status_and_message() {
        assert_eq!(ApiError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::Unauthorized.to_string(), "Unauthorized");
        assert_eq!(ApiError::StartFailed.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ApiError::StartFailed.to_string(), "Gagal menyalakan server");
        assert_eq!(ApiError::StatusFailed.to_string(), "Gagal mengambil status");
    }

    #[tokio::test]
    async fn renders_error_object() {
        let response = ApiError::StatusFailed.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Gagal mengambil status" }));
    }
}

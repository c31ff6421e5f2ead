//! Response bodies: the status fallback and relayed upstream documents.

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Message shown by the front-end when the status API cannot be reached.
pub const STATUS_UNAVAILABLE_MESSAGE: &str = "Gagal connect ke API Python VPS";

/// Shape the front-end expects from `/api/check-mc`.
///
/// A healthy upstream body is relayed as-is; this type is only constructed
/// for the fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPayload {
    pub online: bool,
    pub players: Players,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Players {
    pub online: u32,
    pub max: u32,
}

impl StatusPayload {
    /// Offline, zero players, with the unavailable message.
    pub fn unavailable() -> Self {
        Self {
            online: false,
            players: Players::default(),
            error: Some(STATUS_UNAVAILABLE_MESSAGE.to_string()),
        }
    }
}

/// An upstream JSON document passed through byte for byte.
#[derive(Debug, Clone)]
pub struct RelayedJson(pub Bytes);

impl IntoResponse for RelayedJson {
    fn into_response(self) -> Response {
        ([(header::CONTENT_TYPE, "application/json")], self.0).into_response()
    }
}

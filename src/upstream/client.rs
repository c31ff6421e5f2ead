//! Deadline-bounded JSON exchange shared by all upstream clients.
//!
//! # Responsibilities
//! - Send one request, read the whole body, check that it is JSON
//! - Enforce a deadline over connect, headers and body transfer
//! - Record upstream metrics and map failures to [`UpstreamError`]
//!
//! # Design Decisions
//! - No retries: a failed call is reported once to the handler
//! - The deadline covers the full exchange, not only the connect phase
//! - The body is returned as received; it is parsed only to reject non-JSON,
//!   so key order and number formatting survive the relay

use std::time::{Duration, Instant};

use bytes::Bytes;
use serde::de::IgnoredAny;
use tokio::time::timeout;

use crate::observability::metrics;
use crate::upstream::error::{UpstreamError, UpstreamResult};

/// How the upstream HTTP status is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Non-2xx is a failure.
    RequireSuccess,
    /// Any status is accepted as long as the body is JSON.
    RelayAny,
}

/// Build the pooled HTTP client used for every upstream.
pub fn build_http_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(concat!("panel-proxy/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Send `request` and return its JSON body, unmodified, within `deadline`.
pub async fn exchange_json(
    upstream: &'static str,
    request: reqwest::RequestBuilder,
    deadline: Duration,
    policy: StatusPolicy,
) -> UpstreamResult<Bytes> {
    let start = Instant::now();

    let result = match timeout(deadline, send_and_read(upstream, request, policy)).await {
        Ok(result) => result,
        Err(_) => Err(UpstreamError::Timeout { upstream, deadline }),
    };

    let outcome = match &result {
        Ok(_) => "ok",
        Err(e) => e.kind(),
    };
    metrics::record_upstream(upstream, outcome, start);

    result
}

async fn send_and_read(
    upstream: &'static str,
    request: reqwest::RequestBuilder,
    policy: StatusPolicy,
) -> UpstreamResult<Bytes> {
    let response = request
        .send()
        .await
        .map_err(|source| UpstreamError::Transport { upstream, source })?;

    let status = response.status();
    if !status.is_success() {
        match policy {
            StatusPolicy::RequireSuccess => {
                return Err(UpstreamError::Status { upstream, status });
            }
            StatusPolicy::RelayAny => {
                tracing::warn!(upstream, status = %status, "Upstream returned non-success status, relaying body");
            }
        }
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|source| UpstreamError::Transport { upstream, source })?;

    serde_json::from_slice::<IgnoredAny>(&bytes)
        .map_err(|source| UpstreamError::Decode { upstream, source })?;

    Ok(bytes)
}

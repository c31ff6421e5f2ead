//! Game server status upstream (the Python status API on the VPS).

use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use url::Url;

use crate::config::StatusConfig;
use crate::upstream::client::{exchange_json, StatusPolicy};
use crate::upstream::error::{UpstreamError, UpstreamResult};

pub const UPSTREAM_NAME: &str = "mc_status";

/// Client for the status endpoint.
#[derive(Debug, Clone)]
pub struct McStatusClient {
    http: reqwest::Client,
    url: Url,
    deadline: Duration,
}

impl McStatusClient {
    pub fn new(http: reqwest::Client, config: &StatusConfig) -> UpstreamResult<Self> {
        let url = Url::parse(&config.url).map_err(|source| UpstreamError::InvalidUrl {
            url: config.url.clone(),
            source,
        })?;

        Ok(Self {
            http,
            url,
            deadline: Duration::from_millis(config.timeout_ms),
        })
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    /// Fetch the current status document.
    ///
    /// A non-success status counts as a failure.
    pub async fn fetch(&self) -> UpstreamResult<Bytes> {
        let request = self
            .http
            .get(self.url.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        exchange_json(UPSTREAM_NAME, request, self.deadline, StatusPolicy::RequireSuccess).await
    }
}

//! Upstream failure taxonomy.

use std::time::Duration;

use thiserror::Error;

/// Why an outbound call produced no usable JSON body.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Connection, TLS or body transfer failed.
    #[error("{upstream}: request failed: {source}")]
    Transport {
        upstream: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The deadline elapsed before the exchange completed.
    #[error("{upstream}: no response within {deadline:?}")]
    Timeout {
        upstream: &'static str,
        deadline: Duration,
    },

    /// The upstream answered with a non-success status.
    #[error("{upstream}: returned status {status}")]
    Status {
        upstream: &'static str,
        status: reqwest::StatusCode,
    },

    /// The body was not valid JSON.
    #[error("{upstream}: undecodable body: {source}")]
    Decode {
        upstream: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A configured URL could not be parsed.
    #[error("invalid upstream URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl UpstreamError {
    /// Short outcome label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamError::Transport { .. } => "transport",
            UpstreamError::Timeout { .. } => "timeout",
            UpstreamError::Status { .. } => "status",
            UpstreamError::Decode { .. } => "decode",
            UpstreamError::InvalidUrl { .. } => "config",
        }
    }
}

pub type UpstreamResult<T> = Result<T, UpstreamError>;

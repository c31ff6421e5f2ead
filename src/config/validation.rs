//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check required secrets and credentials are present
//! - Validate value ranges (timeouts > 0) and URLs
//! - Upstream deadlines must expire before the inbound request timeout, so
//!   failures still produce the endpoint's fixed JSON body
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::AppConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("auth.app_password is empty (set APP_PASSWORD)")]
    MissingAppPassword,

    #[error("vm.uuid is empty (set IDCLOUDHOST_VM_UUID)")]
    MissingVmUuid,

    #[error("vm.api_key is empty (set IDCLOUDHOST_API_KEY)")]
    MissingVmApiKey,

    #[error("{field} is not a valid http(s) URL: {reason}")]
    InvalidUrl { field: &'static str, reason: String },

    #[error("{field} must be greater than zero")]
    ZeroTimeout { field: &'static str },

    #[error("{field} ({deadline_ms} ms) must be shorter than timeouts.request_secs ({request_ms} ms)")]
    DeadlineNotBelowRequestTimeout {
        field: &'static str,
        deadline_ms: u64,
        request_ms: u64,
    },

    #[error("{field} is not a valid socket address: {value}")]
    InvalidAddress { field: &'static str, value: String },
}

/// Validate a loaded configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.auth.app_password.is_empty() {
        errors.push(ValidationError::MissingAppPassword);
    }
    if config.vm.uuid.trim().is_empty() {
        errors.push(ValidationError::MissingVmUuid);
    }
    if config.vm.api_key.is_empty() {
        errors.push(ValidationError::MissingVmApiKey);
    }

    check_url("status.url", &config.status.url, &mut errors);
    check_url("vm.api_base_url", &config.vm.api_base_url, &mut errors);

    if config.status.timeout_ms == 0 {
        errors.push(ValidationError::ZeroTimeout { field: "status.timeout_ms" });
    }
    if config.vm.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout { field: "vm.timeout_secs" });
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout { field: "timeouts.request_secs" });
    }

    if config.timeouts.request_secs > 0 {
        let request_ms = config.timeouts.request_secs.saturating_mul(1000);
        let deadlines = [
            ("status.timeout_ms", config.status.timeout_ms),
            ("vm.timeout_secs", config.vm.timeout_secs.saturating_mul(1000)),
        ];
        for (field, deadline_ms) in deadlines {
            if deadline_ms >= request_ms {
                errors.push(ValidationError::DeadlineNotBelowRequestTimeout {
                    field,
                    deadline_ms,
                    request_ms,
                });
            }
        }
    }

    check_addr("listener.bind_address", &config.listener.bind_address, &mut errors);
    if config.observability.metrics_enabled {
        check_addr(
            "observability.metrics_address",
            &config.observability.metrics_address,
            &mut errors,
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_url(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    match Url::parse(value) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::InvalidUrl {
            field,
            reason: format!("unsupported scheme '{}'", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError::InvalidUrl {
            field,
            reason: e.to_string(),
        }),
    }
}

fn check_addr(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}

//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the panel proxy.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::security::SharedSecret;

/// Default status endpoint of the game server VPS.
pub const DEFAULT_STATUS_URL: &str = "http://157.10.252.9:5000/status";

/// Default base URL of the IDCloudHost API.
pub const DEFAULT_VM_API_BASE: &str = "https://api.idcloudhost.com";

/// Root configuration for the panel proxy.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Shared-secret authentication for privileged endpoints.
    pub auth: AuthConfig,

    /// Game server status upstream.
    pub status: StatusConfig,

    /// VM-management upstream.
    pub vm: VmConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    #[serde(default)]
    pub security: SecurityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Authentication for `/api/start` and `/api/status`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AuthConfig {
    /// Expected value of the `x-app-auth` header (`APP_PASSWORD`).
    pub app_password: SharedSecret,
}

/// Game server status upstream.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StatusConfig {
    /// Full URL of the status endpoint.
    pub url: String,

    /// Deadline for the whole upstream exchange in milliseconds.
    pub timeout_ms: u64,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_STATUS_URL.to_string(),
            timeout_ms: 3000,
        }
    }
}

/// VM-management upstream and the credentials forwarded to it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VmConfig {
    /// API base URL, without a trailing path.
    pub api_base_url: String,

    /// Identifier of the managed VM (`IDCLOUDHOST_VM_UUID`).
    pub uuid: String,

    /// API key sent in the `apikey` header (`IDCLOUDHOST_API_KEY`).
    pub api_key: SharedSecret,

    /// Deadline for each upstream call in seconds.
    pub timeout_secs: u64,
}

impl Default for VmConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_VM_API_BASE.to_string(),
            uuid: String::new(),
            api_key: SharedSecret::default(),
            timeout_secs: 10,
        }
    }
}

/// Timeout configuration for inbound requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level used when `RUST_LOG` is not set.
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Add `Cache-Control: no-store` to responses.
    pub enable_headers: bool,
    /// Maximum inbound body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            enable_headers: true,
            max_body_size: 64 * 1024,
        }
    }
}

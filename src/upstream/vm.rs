//! IDCloudHost VM-management upstream.
//!
//! Both calls authenticate with the `apikey` header. The start action takes
//! the VM uuid as a form field, the status query takes it as a query
//! parameter. Whatever JSON the API answers with is relayed, including error
//! documents sent with a non-success status.

use std::time::Duration;

use bytes::Bytes;
use url::Url;

use crate::config::VmConfig;
use crate::security::SharedSecret;
use crate::upstream::client::{exchange_json, StatusPolicy};
use crate::upstream::error::{UpstreamError, UpstreamResult};

const START_PATH: &str = "/v1/user-resource/vm/start";
const STATUS_PATH: &str = "/v1/user-resource/vm";
const API_KEY_HEADER: &str = "apikey";

/// Client for power-on and status of the configured VM.
#[derive(Debug, Clone)]
pub struct VmClient {
    http: reqwest::Client,
    start_url: Url,
    status_url: Url,
    uuid: String,
    api_key: SharedSecret,
    deadline: Duration,
}

impl VmClient {
    pub fn new(http: reqwest::Client, config: &VmConfig) -> UpstreamResult<Self> {
        let base = Url::parse(&config.api_base_url).map_err(|source| UpstreamError::InvalidUrl {
            url: config.api_base_url.clone(),
            source,
        })?;
        let join = |path: &str| {
            base.join(path).map_err(|source| UpstreamError::InvalidUrl {
                url: format!("{}{}", config.api_base_url, path),
                source,
            })
        };

        Ok(Self {
            http,
            start_url: join(START_PATH)?,
            status_url: join(STATUS_PATH)?,
            uuid: config.uuid.clone(),
            api_key: config.api_key.clone(),
            deadline: Duration::from_secs(config.timeout_secs),
        })
    }

    /// Issue the start command. Repeated calls repeat the command upstream.
    pub async fn start(&self) -> UpstreamResult<Bytes> {
        let request = self
            .http
            .post(self.start_url.clone())
            .header(API_KEY_HEADER, self.api_key.expose())
            .form(&[("uuid", self.uuid.as_str())]);

        exchange_json("vm_start", request, self.deadline, StatusPolicy::RelayAny).await
    }

    /// Query the VM's current state.
    pub async fn status(&self) -> UpstreamResult<Bytes> {
        let request = self
            .http
            .get(self.status_url.clone())
            .header(API_KEY_HEADER, self.api_key.expose())
            .query(&[("uuid", self.uuid.as_str())]);

        exchange_json("vm_status", request, self.deadline, StatusPolicy::RelayAny).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base: &str) -> VmConfig {
        VmConfig {
            api_base_url: base.to_string(),
            uuid: "vm-1".into(),
            api_key: SharedSecret::new("key"),
            timeout_secs: 5,
        }
    }

    #[test]
    fn builds_action_urls_from_base() {
        let client = VmClient::new(reqwest::Client::new(), &config("https://api.idcloudhost.com")).unwrap();
        assert_eq!(
            client.start_url.as_str(),
            "https://api.idcloudhost.com/v1/user-resource/vm/start"
        );
        assert_eq!(
            client.status_url.as_str(),
            "https://api.idcloudhost.com/v1/user-resource/vm"
        );
        assert_eq!(client.deadline, Duration::from_secs(5));
    }

    #[test]
    fn rejects_unparsable_base() {
        let err = VmClient::new(reqwest::Client::new(), &config("::nope")).unwrap_err();
        assert_eq!(err.kind(), "config");
    }
}

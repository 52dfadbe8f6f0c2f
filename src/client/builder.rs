use crate::client::core::ApiClient;
use crate::transport::{HttpTransport, TransportConfig};
use crate::{Error, ErrorContext, Result};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Builder for [`ApiClient`].
///
/// Anything not set explicitly is read from the environment when
/// [`build`](Self::build) runs:
/// - `TTS_API_BASE_URL` (default `http://localhost:8000/api`)
/// - `TTS_HTTP_TIMEOUT_SECS` (default 120)
/// - `TTS_PROXY_URL` (unset by default)
pub struct ApiClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    proxy_url: Option<String>,
    user_agent: Option<String>,
}

impl ApiClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: None,
            proxy_url: None,
            user_agent: None,
        }
    }

    /// Base URL all endpoint paths are appended to, e.g. `http://host:8000/api`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn proxy_url(mut self, url: impl Into<String>) -> Self {
        self.proxy_url = Some(url.into());
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn build(self) -> Result<ApiClient> {
        let raw_base = self
            .base_url
            .or_else(|| env::var("TTS_API_BASE_URL").ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&raw_base).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid base URL '{}': {}", raw_base, e),
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_source("client_builder"),
            )
        })?;

        let timeout = self.timeout.unwrap_or_else(|| {
            Duration::from_secs(
                env::var("TTS_HTTP_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse::<u64>().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            )
        });

        let proxy_url = self.proxy_url.or_else(|| env::var("TTS_PROXY_URL").ok());

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("tts-api-client/{}", env!("CARGO_PKG_VERSION")));

        let transport = HttpTransport::new(&TransportConfig {
            base_url,
            timeout,
            proxy_url,
            user_agent,
        })?;

        Ok(ApiClient::from_transport(Arc::new(transport)))
    }
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

use crate::{Error, ErrorContext, Result};
use reqwest::multipart::Form;
use reqwest::{Proxy, RequestBuilder, Response};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Header carrying the per-call correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Settings used to construct an [`HttpTransport`].
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub base_url: Url,
    pub timeout: Duration,
    pub proxy_url: Option<String>,
    pub user_agent: String,
}

/// Thin wrapper over `reqwest::Client` that knows the backend base URL.
///
/// It only dispatches requests; status handling belongs to the callers.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(config: &TransportConfig) -> Result<Self> {
        if config.base_url.cannot_be_a_base() {
            return Err(Error::configuration_with_context(
                format!("base URL cannot carry path segments: {}", config.base_url),
                ErrorContext::new().with_field_path("base_url"),
            ));
        }

        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .pool_idle_timeout(Some(Duration::from_secs(90)));

        if let Some(proxy_url) = &config.proxy_url {
            let proxy = Proxy::all(proxy_url).map_err(|e| {
                Error::configuration_with_context(
                    format!("invalid proxy URL: {}", e),
                    ErrorContext::new().with_field_path("proxy_url"),
                )
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append `segments` to the base URL. Each segment is percent-encoded on
    /// its own, so a `/` inside a segment never introduces a new path level.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                Error::configuration_with_context(
                    "base URL cannot carry path segments",
                    ErrorContext::new().with_field_path("base_url"),
                )
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub async fn get(&self, segments: &[&str], request_id: &str) -> Result<Response> {
        let url = self.endpoint(segments)?;
        self.send(self.client.get(url.clone()), &url, request_id)
            .await
    }

    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
        request_id: &str,
    ) -> Result<Response> {
        let url = self.endpoint(segments)?;
        self.send(self.client.post(url.clone()).json(body), &url, request_id)
            .await
    }

    pub async fn post_multipart(
        &self,
        segments: &[&str],
        form: Form,
        request_id: &str,
    ) -> Result<Response> {
        let url = self.endpoint(segments)?;
        self.send(self.client.post(url.clone()).multipart(form), &url, request_id)
            .await
    }

    async fn send(&self, req: RequestBuilder, url: &Url, request_id: &str) -> Result<Response> {
        debug!(request_id, url = %url, "Sending request");
        req.header(REQUEST_ID_HEADER, request_id)
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}

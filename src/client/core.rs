use crate::client::builder::ApiClientBuilder;
use crate::transport::HttpTransport;
use crate::Result;
use std::sync::Arc;
use url::Url;
use uuid::Uuid;

/// Handle to the TTS backend.
///
/// Cloning is cheap and clones share one connection pool. Calls carry no
/// state between them, so a client can be used from many tasks at once.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) transport: Arc<HttpTransport>,
}

impl ApiClient {
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::new()
    }

    /// Client for `base_url` with every other setting at its default.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        ApiClientBuilder::new().base_url(base_url).build()
    }

    pub(crate) fn from_transport(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    pub fn base_url(&self) -> &Url {
        self.transport.base_url()
    }

    pub(crate) fn next_request_id() -> String {
        Uuid::new_v4().to_string()
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url().as_str())
            .finish()
    }
}

//! Mock backend setup shared by the integration tests.

#![allow(dead_code)]

use mockito::{Matcher, Server, ServerGuard};
use tts_api_client::ApiClient;

/// A mockito server plus a client pointed at its `/api` prefix.
pub struct MockBackend {
    pub server: ServerGuard,
    pub client: ApiClient,
}

impl MockBackend {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let client = ApiClient::new(format!("{}/api", server.url()))
            .expect("mock server URL should be a valid base URL");
        Self { server, client }
    }
}

/// Matches a multipart text field `name` whose value is exactly `value`.
pub fn form_field(name: &str, value: &str) -> Matcher {
    Matcher::Regex(format!(
        r#"name="{}"\r\n(?:[^\r\n]+\r\n)*\r\n{}\r\n"#,
        escape(name),
        escape(value)
    ))
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if "\\.+*?()|[]{}^$".contains(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Header sent with every request; a v4 UUID.
pub fn request_id_matcher() -> Matcher {
    Matcher::Regex("^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[0-9a-f]{4}-[0-9a-f]{12}$".to_string())
}

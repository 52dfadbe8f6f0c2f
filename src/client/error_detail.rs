//! Normalization of backend error responses into [`Error::Remote`].
//!
//! The backend reports failures as `{"detail": "..."}`. Validation failures
//! carry `detail` as a list of `{"msg": ...}` objects instead.

use crate::{Error, Result};
use bytes::Bytes;
use reqwest::Response;
use serde_json::Value;
use tracing::error;

/// Pass a 2xx response through; turn anything else into [`Error::Remote`].
///
/// The body of a failed response is read in full and reduced to a
/// human-readable message by [`error_message`].
pub(crate) async fn ensure_success(
    operation: &str,
    request_id: &str,
    response: Response,
    fallback: &str,
) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.bytes().await.map_err(|e| {
        error!(operation, request_id, status = status.as_u16(), error = %e, "Failed to read error body");
        Error::Transport(e.into())
    })?;
    let message = error_message(&body, fallback);
    error!(
        operation,
        request_id,
        status = status.as_u16(),
        message = %message,
        "Backend request failed"
    );
    Err(Error::remote(status.as_u16(), message))
}

/// Log a failure that is about to be returned to the caller.
pub(crate) fn log_failure(operation: &str, request_id: &str, err: Error) -> Error {
    error!(operation, request_id, error = %err, "Backend request failed");
    err
}

/// Read the full body of a successful response.
pub(crate) async fn read_body(
    operation: &str,
    request_id: &str,
    response: Response,
) -> Result<Bytes> {
    response
        .bytes()
        .await
        .map_err(|e| log_failure(operation, request_id, Error::Transport(e.into())))
}

/// Best available message for an error body.
///
/// Order of preference: the JSON `detail` field, the raw body text, then
/// `fallback`. The result is never empty.
pub(crate) fn error_message(body: &[u8], fallback: &str) -> String {
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        return fallback.to_string();
    }

    match serde_json::from_str::<Value>(text) {
        Ok(json) => detail(&json).unwrap_or_else(|| fallback.to_string()),
        Err(_) => text.to_string(),
    }
}

fn detail(json: &Value) -> Option<String> {
    let message = match json.get("detail")? {
        Value::String(s) => s.trim().to_string(),
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.as_str()),
                other => other.get("msg").and_then(Value::as_str),
            })
            .collect::<Vec<_>>()
            .join("; "),
        Value::Null => String::new(),
        other => other.to_string(),
    };
    if message.is_empty() {
        None
    } else {
        Some(message)
    }
}

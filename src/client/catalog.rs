//! Language and model catalog queries.

use super::core::ApiClient;
use super::error_detail::{ensure_success, log_failure, read_body};
use crate::{Error, Result};
use tracing::info;

impl ApiClient {
    /// Languages the backend can synthesize, in server order.
    pub async fn list_languages(&self) -> Result<Vec<String>> {
        let request_id = Self::next_request_id();
        let languages = self
            .fetch_string_list(
                "list_languages",
                &request_id,
                &["languages"],
                "Failed to fetch languages",
            )
            .await?;
        info!(request_id = %request_id, count = languages.len(), "Fetched languages");
        Ok(languages)
    }

    /// Model ids (`repo_id`s) available for `language`.
    ///
    /// The language is sent as one percent-encoded path segment.
    pub async fn list_models(&self, language: &str) -> Result<Vec<String>> {
        let request_id = Self::next_request_id();
        let fallback = format!("Failed to fetch models for {}", language);
        let models = self
            .fetch_string_list("list_models", &request_id, &["models", language], &fallback)
            .await?;
        info!(request_id = %request_id, language, count = models.len(), "Fetched models");
        Ok(models)
    }

    async fn fetch_string_list(
        &self,
        operation: &str,
        request_id: &str,
        segments: &[&str],
        fallback: &str,
    ) -> Result<Vec<String>> {
        let response = self
            .transport
            .get(segments, request_id)
            .await
            .map_err(|e| log_failure(operation, request_id, e))?;
        let response = ensure_success(operation, request_id, response, fallback).await?;
        let body = read_body(operation, request_id, response).await?;
        serde_json::from_slice(&body)
            .map_err(|e| log_failure(operation, request_id, Error::Serialization(e)))
    }
}

//! Document upload for server-side text extraction and chunking.

use super::core::ApiClient;
use super::error_detail::{ensure_success, log_failure, read_body};
use crate::types::{DocumentProcessResult, DocumentUpload, DEFAULT_MAX_CHUNK_LENGTH};
use crate::{Error, ErrorContext, Result};
use reqwest::multipart::{Form, Part};
use tracing::{debug, info};

impl ApiClient {
    /// Upload a document using the backend's default chunk length (5000).
    pub async fn process_document(&self, upload: DocumentUpload) -> Result<DocumentProcessResult> {
        self.process_document_with(upload, DEFAULT_MAX_CHUNK_LENGTH)
            .await
    }

    /// Upload a document and have the backend split its text into chunks of
    /// at most `max_chunk_length`.
    pub async fn process_document_with(
        &self,
        upload: DocumentUpload,
        max_chunk_length: usize,
    ) -> Result<DocumentProcessResult> {
        const OP: &str = "process_document";
        let request_id = Self::next_request_id();
        debug!(
            request_id = %request_id,
            file_name = %upload.file_name,
            size = upload.content.len(),
            max_chunk_length,
            "Uploading document"
        );

        let form = document_form(upload, max_chunk_length)
            .map_err(|e| log_failure(OP, &request_id, e))?;
        let response = self
            .transport
            .post_multipart(&["process-document"], form, &request_id)
            .await
            .map_err(|e| log_failure(OP, &request_id, e))?;
        let response =
            ensure_success(OP, &request_id, response, "Document processing failed").await?;

        let body = read_body(OP, &request_id, response).await?;
        let result: DocumentProcessResult = serde_json::from_slice(&body)
            .map_err(|e| log_failure(OP, &request_id, Error::Serialization(e)))?;
        info!(
            request_id = %request_id,
            filename = %result.filename,
            chunks = result.chunks.len(),
            "Document processed"
        );
        Ok(result)
    }
}

fn document_form(upload: DocumentUpload, max_chunk_length: usize) -> Result<Form> {
    let DocumentUpload {
        file_name,
        content,
        mime_type,
    } = upload;
    let part = Part::bytes(content)
        .file_name(file_name)
        .mime_str(&mime_type)
        .map_err(|e| {
            Error::validation_with_context(
                format!("invalid mime type '{}': {}", mime_type, e),
                ErrorContext::new()
                    .with_field_path("upload.mime_type")
                    .with_source("process_document"),
            )
        })?;
    Ok(Form::new()
        .part("file", part)
        .text("max_chunk_length", max_chunk_length.to_string()))
}

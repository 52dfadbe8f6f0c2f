//! Document upload and extraction result types.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Chunk length the backend uses when the caller does not pick one.
pub const DEFAULT_MAX_CHUNK_LENGTH: usize = 5000;

/// Document formats the backend knows how to extract text from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Pptx,
    Txt,
}

impl DocumentKind {
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let ext = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())?
            .to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "pptx" => Some(Self::Pptx),
            "txt" => Some(Self::Txt),
            _ => None,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::Pptx => {
                "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            }
            Self::Txt => "text/plain",
        }
    }
}

/// A file to send to the document processing endpoint.
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    pub file_name: String,
    pub content: Vec<u8>,
    pub mime_type: String,
}

impl DocumentUpload {
    /// Wrap in-memory bytes. The mime type is guessed from the file name.
    pub fn from_bytes(file_name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        let file_name = file_name.into();
        let mime_type = DocumentKind::from_file_name(&file_name)
            .map(|k| k.mime_type())
            .unwrap_or("application/octet-stream")
            .to_string();
        Self {
            file_name,
            content: content.into(),
            mime_type,
        }
    }

    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());
        Ok(Self::from_bytes(file_name, content))
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    pub fn kind(&self) -> Option<DocumentKind> {
        DocumentKind::from_file_name(&self.file_name)
    }
}

/// Text extracted from an uploaded document, split into synthesis chunks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentProcessResult {
    /// Leading part of the extracted text (the backend truncates it).
    #[serde(rename = "text")]
    pub text_preview: String,
    #[serde(default)]
    pub chunks: Vec<String>,
    pub filename: String,
    pub file_type: String,
}

//! # tts-api-client
//!
//! Async client for a text-to-speech and document-processing HTTP backend.
//!
//! ## Overview
//!
//! Every operation is a single request against a fixed REST endpoint under a
//! configurable base URL (default `http://localhost:8000/api`):
//!
//! | Method | Endpoint | Returns |
//! |--------|----------|---------|
//! | [`ApiClient::list_languages`] | `GET /languages` | language codes |
//! | [`ApiClient::list_models`] | `GET /models/{language}` | model ids |
//! | [`ApiClient::synthesize`] | `POST /tts` (JSON) | audio |
//! | [`ApiClient::process_document`] | `POST /process-document` (multipart) | text chunks |
//! | [`ApiClient::synthesize_chunk`] | `POST /tts-from-chunk` (multipart) | audio |
//!
//! Failures are reported through [`Error`]. A request that never got an
//! answer is [`Error::Transport`]; a non-success answer is [`Error::Remote`],
//! whose message is the backend's `detail` text when it sent one.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tts_api_client::{ApiClient, SpeechRequest};
//!
//! #[tokio::main]
//! async fn main() -> tts_api_client::Result<()> {
//!     let client = ApiClient::new("http://localhost:8000/api")?;
//!
//!     let languages = client.list_languages().await?;
//!     let models = client.list_models(&languages[0]).await?;
//!
//!     let request = SpeechRequest::new(&languages[0], &models[0], "Hello there")
//!         .with_speed(1.1);
//!     let output = client.synthesize(&request).await?;
//!     std::fs::write("hello.wav", &output.audio.data)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | [`ApiClient`] and its builder |
//! | [`types`] | Request and response types |
//! | [`batch`] | Bounded-concurrency synthesis of many chunks |
//! | [`transport`] | HTTP plumbing |

pub mod batch;
pub mod client;
pub mod transport;
pub mod types;

pub use batch::{BatchConfig, BatchResult, BatchStrategy};
pub use client::{ApiClient, ApiClientBuilder};
pub use types::{
    AudioFormat, AudioPayload, DocumentKind, DocumentProcessResult, DocumentUpload,
    SpeechRequest, SynthesisInfo, SynthesisOutput,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};

//! Client for the TTS backend.
//!
//! One [`ApiClient`] method per backend endpoint. Implementation details are
//! split into submodules under `src/client/`.

pub mod builder;
mod catalog;
pub mod core;
mod document;
mod error_detail;
mod speech;

pub use builder::{ApiClientBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use self::core::ApiClient;
pub use speech::SYNTHESIS_INFO_HEADER;

//! Batch synthesis of document chunks.
//!
//! A processed document comes back as a list of chunks, each of which has to
//! be sent to the chunk synthesis endpoint. [`ApiClient::synthesize_chunks`]
//! runs those calls with bounded concurrency and collects the outcome per
//! chunk index.
//!
//! [`ApiClient::synthesize_chunks`]: crate::ApiClient::synthesize_chunks

mod executor;

pub use executor::{BatchConfig, BatchResult, BatchStrategy};

//! HTTP transport to the TTS backend.

mod http;

pub use http::{HttpTransport, TransportConfig, TransportError, REQUEST_ID_HEADER};

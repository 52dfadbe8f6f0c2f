//! Request and response types exchanged with the TTS backend.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`SpeechRequest`] | Language, model, text, speaker and speed for one synthesis |
//! | [`AudioPayload`] | Binary audio returned by the synthesis endpoints |
//! | [`SynthesisOutput`] | Audio plus optional [`SynthesisInfo`] |
//! | [`DocumentUpload`] | File sent to the document processing endpoint |
//! | [`DocumentProcessResult`] | Extracted text preview and synthesis chunks |

pub mod document;
pub mod speech;

pub use document::{DocumentKind, DocumentProcessResult, DocumentUpload, DEFAULT_MAX_CHUNK_LENGTH};
pub use speech::{
    AudioFormat, AudioPayload, SpeechRequest, SynthesisInfo, SynthesisOutput, DEFAULT_SPEAKER_ID,
    DEFAULT_SPEED,
};

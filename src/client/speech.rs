//! Text-to-speech synthesis calls.

use super::core::ApiClient;
use super::error_detail::{ensure_success, log_failure, read_body};
use crate::types::{AudioFormat, AudioPayload, SpeechRequest, SynthesisInfo, SynthesisOutput};
use crate::Result;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::multipart::Form;
use reqwest::Response;
use tracing::{debug, info};

/// Response header that may carry JSON-encoded [`SynthesisInfo`].
pub const SYNTHESIS_INFO_HEADER: &str = "x-tts-info";

impl ApiClient {
    /// Synthesize `request.text` via a JSON `POST /tts`.
    ///
    /// The audio bytes come back unchanged. On a non-success status the
    /// error body's `detail` field (or its raw text) becomes the message of
    /// [`Error::Remote`](crate::Error::Remote).
    pub async fn synthesize(&self, request: &SpeechRequest) -> Result<SynthesisOutput> {
        const OP: &str = "synthesize";
        let request_id = Self::next_request_id();
        debug!(
            request_id = %request_id,
            language = %request.language,
            model = %request.model_id,
            text_len = request.text.len(),
            "Submitting TTS request"
        );

        let response = self
            .transport
            .post_json(&["tts"], request, &request_id)
            .await
            .map_err(|e| log_failure(OP, &request_id, e))?;
        let response = ensure_success(OP, &request_id, response, "TTS API request failed").await?;

        let info = synthesis_info(response.headers());
        let audio = read_audio(OP, &request_id, response).await?;
        info!(request_id = %request_id, audio_size = audio.len(), "TTS request completed");
        Ok(SynthesisOutput { audio, info })
    }

    /// Synthesize one document chunk via a multipart `POST /tts-from-chunk`.
    ///
    /// `request.text` is sent as the `text_chunk` field.
    pub async fn synthesize_chunk(&self, request: &SpeechRequest) -> Result<AudioPayload> {
        const OP: &str = "synthesize_chunk";
        let request_id = Self::next_request_id();
        debug!(
            request_id = %request_id,
            language = %request.language,
            model = %request.model_id,
            chunk_len = request.text.len(),
            "Submitting TTS chunk"
        );

        let form = chunk_form(request);
        let response = self
            .transport
            .post_multipart(&["tts-from-chunk"], form, &request_id)
            .await
            .map_err(|e| log_failure(OP, &request_id, e))?;
        let response =
            ensure_success(OP, &request_id, response, "TTS chunk processing failed").await?;

        let audio = read_audio(OP, &request_id, response).await?;
        info!(request_id = %request_id, audio_size = audio.len(), "TTS chunk completed");
        Ok(audio)
    }
}

fn chunk_form(request: &SpeechRequest) -> Form {
    Form::new()
        .text("language", request.language.clone())
        .text("repo_id", request.model_id.clone())
        .text("text_chunk", request.text.clone())
        .text("sid", request.speaker_id.clone())
        .text("speed", request.speed.to_string())
}

async fn read_audio(operation: &str, request_id: &str, response: Response) -> Result<AudioPayload> {
    let format = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(AudioFormat::from_content_type)
        .unwrap_or(AudioFormat::Wav);
    let data = read_body(operation, request_id, response).await?;
    Ok(AudioPayload {
        data: data.to_vec(),
        format,
    })
}

// Malformed metadata is ignored rather than failing an otherwise good synthesis.
fn synthesis_info(headers: &HeaderMap) -> Option<SynthesisInfo> {
    let raw = headers.get(SYNTHESIS_INFO_HEADER)?.to_str().ok()?;
    serde_json::from_str(raw).ok()
}

//! Synthesis request and audio output types.

use serde::{Deserialize, Serialize};

/// Speaker id the backend falls back to when none is chosen.
pub const DEFAULT_SPEAKER_ID: &str = "0";
pub const DEFAULT_SPEED: f32 = 1.0;

/// Parameters for one synthesis call.
///
/// The same value drives both the JSON `/tts` endpoint and the multipart
/// `/tts-from-chunk` endpoint; only the encoding differs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechRequest {
    pub language: String,
    #[serde(rename = "repo_id")]
    pub model_id: String,
    pub text: String,
    #[serde(rename = "sid")]
    pub speaker_id: String,
    pub speed: f32,
}

impl SpeechRequest {
    pub fn new(
        language: impl Into<String>,
        model_id: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            language: language.into(),
            model_id: model_id.into(),
            text: text.into(),
            speaker_id: DEFAULT_SPEAKER_ID.to_string(),
            speed: DEFAULT_SPEED,
        }
    }

    pub fn with_speaker(mut self, speaker_id: impl Into<String>) -> Self {
        self.speaker_id = speaker_id.into();
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Same voice settings, different text.
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..self.clone()
        }
    }
}

/// Raw audio returned by the backend. The bytes are passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioPayload {
    pub data: Vec<u8>,
    pub format: AudioFormat,
}

impl AudioPayload {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

/// Audio container formats the backend may answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Wav,
    Mp3,
    Ogg,
    Flac,
}

impl AudioFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Wav => "audio/wav",
            Self::Mp3 => "audio/mpeg",
            Self::Ogg => "audio/ogg",
            Self::Flac => "audio/flac",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
            Self::Ogg => "ogg",
            Self::Flac => "flac",
        }
    }

    /// Map a `Content-Type` value to a format. Parameters such as
    /// `; charset=...` are ignored; anything unrecognised is treated as WAV,
    /// which is what the backend writes.
    pub fn from_content_type(content_type: &str) -> Self {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase();
        match essence.as_str() {
            "audio/mpeg" | "audio/mp3" => Self::Mp3,
            "audio/ogg" | "audio/opus" => Self::Ogg,
            "audio/flac" | "audio/x-flac" => Self::Flac,
            _ => Self::Wav,
        }
    }
}

/// Optional metadata about a synthesis run.
///
/// The current backend never sends it; it is read from the `x-tts-info`
/// response header when present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisInfo {
    pub duration: Option<f64>,
    pub processing_time: Option<f64>,
    pub rtf: Option<f64>,
}

/// Result of [`crate::ApiClient::synthesize`].
#[derive(Debug, Clone)]
pub struct SynthesisOutput {
    pub audio: AudioPayload,
    pub info: Option<SynthesisInfo>,
}

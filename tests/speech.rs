//! Synthesis calls against a mock backend.

mod common;

use common::{form_field, request_id_matcher, MockBackend};
use futures::future::join_all;
use mockito::Matcher;
use tts_api_client::{AudioFormat, SpeechRequest};

const WAV_BYTES: &[u8] = b"RIFF\x24\x00\x00\x00WAVEfmt \x10\x00\x00\x00\x01\x00\x01\x00\xff\xfe";

#[tokio::test]
async fn synthesize_posts_json_and_returns_body_unchanged() {
    let mut backend = MockBackend::new().await;
    let mock = backend
        .server
        .mock("POST", "/api/tts")
        .match_header("content-type", "application/json")
        .match_header("x-request-id", request_id_matcher())
        .match_body(Matcher::Json(serde_json::json!({
            "language": "en",
            "repo_id": "m1",
            "text": "hello",
            "sid": "s0",
            "speed": 1.0
        })))
        .with_status(200)
        .with_header("content-type", "audio/wav")
        .with_body(WAV_BYTES)
        .expect(1)
        .create_async()
        .await;

    let request = SpeechRequest::new("en", "m1", "hello").with_speaker("s0");
    let output = backend.client.synthesize(&request).await.unwrap();

    assert_eq!(output.audio.data, WAV_BYTES);
    assert_eq!(output.audio.format, AudioFormat::Wav);
    assert!(output.info.is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn synthesize_reads_info_header_when_sent() {
    let mut backend = MockBackend::new().await;
    backend
        .server
        .mock("POST", "/api/tts")
        .with_status(200)
        .with_header("content-type", "audio/wav")
        .with_header("x-tts-info", r#"{"duration":1.2,"processingTime":0.3,"rtf":0.25}"#)
        .with_body(WAV_BYTES)
        .create_async()
        .await;

    let request = SpeechRequest::new("en", "m1", "hello");
    let output = backend.client.synthesize(&request).await.unwrap();
    let info = output.info.unwrap();
    assert_eq!(info.duration, Some(1.2));
    assert_eq!(info.processing_time, Some(0.3));
    assert_eq!(info.rtf, Some(0.25));
}

#[tokio::test]
async fn synthesize_error_detail_becomes_message() {
    let mut backend = MockBackend::new().await;
    backend
        .server
        .mock("POST", "/api/tts")
        .with_status(400)
        .with_header("content-type", "application/octet-stream")
        .with_body(br#"{"detail":"bad language"}"#)
        .create_async()
        .await;

    let request = SpeechRequest::new("xx", "m1", "hello");
    let err = backend.client.synthesize(&request).await.unwrap_err();
    assert_eq!(err.to_string(), "bad language");
    assert_eq!(err.status(), Some(400));
}

#[tokio::test]
async fn synthesize_non_json_error_is_used_verbatim() {
    let mut backend = MockBackend::new().await;
    backend
        .server
        .mock("POST", "/api/tts")
        .with_status(500)
        .with_header("content-type", "application/octet-stream")
        .with_body("oops")
        .create_async()
        .await;

    let request = SpeechRequest::new("en", "m1", "hello");
    let err = backend.client.synthesize(&request).await.unwrap_err();
    assert_eq!(err.to_string(), "oops");
}

#[tokio::test]
async fn synthesize_empty_error_uses_generic_message() {
    let mut backend = MockBackend::new().await;
    backend
        .server
        .mock("POST", "/api/tts")
        .with_status(500)
        .create_async()
        .await;

    let request = SpeechRequest::new("en", "m1", "hello");
    let err = backend.client.synthesize(&request).await.unwrap_err();
    assert_eq!(err.to_string(), "TTS API request failed");
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn synthesize_chunk_sends_form_fields() {
    let mut backend = MockBackend::new().await;
    let mock = backend
        .server
        .mock("POST", "/api/tts-from-chunk")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            form_field("language", "German"),
            form_field("repo_id", "csukuangfj/vits-piper-de_DE-thorsten-low"),
            form_field("text_chunk", "Kapitel eins."),
            form_field("sid", "2"),
            form_field("speed", "1.25"),
        ]))
        .with_status(200)
        .with_header("content-type", "audio/wav")
        .with_body(WAV_BYTES)
        .expect(1)
        .create_async()
        .await;

    let request = SpeechRequest::new(
        "German",
        "csukuangfj/vits-piper-de_DE-thorsten-low",
        "Kapitel eins.",
    )
    .with_speaker("2")
    .with_speed(1.25);
    let audio = backend.client.synthesize_chunk(&request).await.unwrap();

    assert_eq!(audio.data, WAV_BYTES);
    mock.assert_async().await;
}

#[tokio::test]
async fn synthesize_chunk_error_handling() {
    let mut backend = MockBackend::new().await;
    backend
        .server
        .mock("POST", "/api/tts-from-chunk")
        .match_body(form_field("text_chunk", "bad"))
        .with_status(400)
        .with_body(br#"{"detail":"Invalid speaker ID: x. Must be an integer."}"#)
        .create_async()
        .await;
    backend
        .server
        .mock("POST", "/api/tts-from-chunk")
        .match_body(form_field("text_chunk", "empty"))
        .with_status(500)
        .create_async()
        .await;

    let err = backend
        .client
        .synthesize_chunk(&SpeechRequest::new("en", "m1", "bad").with_speaker("x"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid speaker ID: x. Must be an integer.");

    let err = backend
        .client
        .synthesize_chunk(&SpeechRequest::new("en", "m1", "empty"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "TTS chunk processing failed");
}

#[tokio::test]
async fn concurrent_chunks_do_not_mix_parameters() {
    let mut backend = MockBackend::new().await;
    let n = 6;
    let mut mocks = Vec::new();
    for i in 0..n {
        let mock = backend
            .server
            .mock("POST", "/api/tts-from-chunk")
            .match_body(Matcher::AllOf(vec![
                form_field("text_chunk", &format!("chunk-{i}")),
                form_field("sid", &i.to_string()),
            ]))
            .with_status(200)
            .with_header("content-type", "audio/wav")
            .with_body(format!("audio-{i}"))
            .expect(1)
            .create_async()
            .await;
        mocks.push(mock);
    }

    let client = backend.client.clone();
    let calls = (0..n).map(|i| {
        let client = client.clone();
        async move {
            let request = SpeechRequest::new("en", "m1", format!("chunk-{i}"))
                .with_speaker(i.to_string());
            client.synthesize_chunk(&request).await
        }
    });
    let results = join_all(calls).await;

    assert_eq!(results.len(), n);
    for (i, result) in results.into_iter().enumerate() {
        let audio = result.unwrap();
        assert_eq!(audio.data, format!("audio-{i}").into_bytes());
    }
    for mock in mocks {
        mock.assert_async().await;
    }
}

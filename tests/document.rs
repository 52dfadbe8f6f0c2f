//! Document upload against a mock backend.

mod common;

use common::{form_field, MockBackend};
use mockito::Matcher;
use tts_api_client::DocumentUpload;

const RESPONSE: &str = r#"{
    "text": "Chapter one. It was a bright cold day.",
    "chunks": ["Chapter one.", "It was a bright cold day."],
    "filename": "novel.txt",
    "file_type": "txt"
}"#;

#[tokio::test]
async fn default_chunk_length_is_sent() {
    let mut backend = MockBackend::new().await;
    let mock = backend
        .server
        .mock("POST", "/api/process-document")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(
                r#"(?i)name="file"; filename="novel\.txt"\r\ncontent-type: text/plain\r\n\r\nChapter one\. It was a bright cold day\."#
                    .to_string(),
            ),
            form_field("max_chunk_length", "5000"),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(RESPONSE)
        .expect(1)
        .create_async()
        .await;

    let upload = DocumentUpload::from_bytes(
        "novel.txt",
        b"Chapter one. It was a bright cold day.".to_vec(),
    );
    let result = backend.client.process_document(upload).await.unwrap();

    assert_eq!(result.filename, "novel.txt");
    assert_eq!(result.file_type, "txt");
    assert_eq!(result.text_preview, "Chapter one. It was a bright cold day.");
    assert_eq!(
        result.chunks,
        vec!["Chapter one.", "It was a bright cold day."]
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn custom_chunk_length_is_sent() {
    let mut backend = MockBackend::new().await;
    let mock = backend
        .server
        .mock("POST", "/api/process-document")
        .match_body(form_field("max_chunk_length", "1200"))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(RESPONSE)
        .expect(1)
        .create_async()
        .await;

    let upload = DocumentUpload::from_bytes("novel.txt", b"text".to_vec());
    backend
        .client
        .process_document_with(upload, 1200)
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn unsupported_format_detail_is_surfaced() {
    let mut backend = MockBackend::new().await;
    backend
        .server
        .mock("POST", "/api/process-document")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail":"Unsupported file format: .zip"}"#)
        .create_async()
        .await;

    let upload = DocumentUpload::from_bytes("archive.zip", vec![0x50, 0x4b, 0x03, 0x04]);
    let err = backend.client.process_document(upload).await.unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.to_string(), "Unsupported file format: .zip");
}

#[tokio::test]
async fn error_without_detail_falls_back() {
    let mut backend = MockBackend::new().await;
    backend
        .server
        .mock("POST", "/api/process-document")
        .match_body(form_field("max_chunk_length", "10"))
        .with_status(502)
        .with_body("Bad Gateway")
        .create_async()
        .await;
    backend
        .server
        .mock("POST", "/api/process-document")
        .match_body(form_field("max_chunk_length", "20"))
        .with_status(500)
        .create_async()
        .await;

    let upload = DocumentUpload::from_bytes("a.txt", b"a".to_vec());
    let err = backend
        .client
        .process_document_with(upload.clone(), 10)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Bad Gateway");

    let err = backend
        .client
        .process_document_with(upload, 20)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Document processing failed");
}

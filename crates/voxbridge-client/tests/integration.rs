use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use voxbridge_client::{EndpointClient, InferenceTransport};
use voxbridge_core::{EndpointConfig, PayloadEncoding, TranscribeError, TransportError};

/// Scripted transport standing in for the remote inference service.
struct ScriptedTransport {
    response_body: Vec<u8>,
    status: String,
    requests: Mutex<Vec<(String, String, Vec<u8>)>>,
}

impl ScriptedTransport {
    fn new(response_body: &[u8]) -> Arc<Self> {
        Arc::new(Self {
            response_body: response_body.to_vec(),
            status: "InService".to_string(),
            requests: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl InferenceTransport for ScriptedTransport {
    async fn invoke(
        &self,
        endpoint_name: &str,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<Vec<u8>, TransportError> {
        self.requests.lock().unwrap().push((
            endpoint_name.to_string(),
            content_type.to_string(),
            body,
        ));
        Ok(self.response_body.clone())
    }

    async fn endpoint_status(&self, _endpoint_name: &str) -> Result<String, TransportError> {
        Ok(self.status.clone())
    }
}

fn config(encoding: PayloadEncoding) -> EndpointConfig {
    EndpointConfig {
        region: "us-west-2".to_string(),
        endpoint_name: "whisper-inference".to_string(),
        encoding,
    }
}

fn write_temp_audio(name: &str, bytes: &[u8]) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join("voxbridge_integration");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

#[tokio::test]
async fn test_transcribe_audio_file_end_to_end() {
    let audio = b"RIFF....WAVEfmt fake audio bytes";
    let path = write_temp_audio("end_to_end.wav", audio);

    let transport = ScriptedTransport::new(br#"{"text": "  the quick brown fox  "}"#);
    let client = EndpointClient::with_transport(config(PayloadEncoding::Base64), transport.clone());

    let text = client.transcribe_audio(&path).await.unwrap();
    assert_eq!(text, "the quick brown fox");

    // The exact bytes on disk reach the wire, base64-encoded, as JSON.
    let requests = transport.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let (endpoint_name, content_type, body) = &requests[0];
    assert_eq!(endpoint_name, "whisper-inference");
    assert_eq!(content_type, "application/json");
    let payload: serde_json::Value = serde_json::from_slice(body).unwrap();
    assert_eq!(payload["task"], "transcribe");
    use base64::prelude::*;
    assert_eq!(
        BASE64_STANDARD
            .decode(payload["audio"].as_str().unwrap())
            .unwrap(),
        audio,
    );

    std::fs::remove_file(&path).unwrap();
}

#[tokio::test]
async fn test_transcribe_audio_file_hex_contract() {
    let audio = [0u8, 127, 255];
    let path = write_temp_audio("hex_contract.wav", &audio);

    let transport = ScriptedTransport::new(br#"{"text": ["tran", "script"]}"#);
    let client = EndpointClient::with_transport(config(PayloadEncoding::Hex), transport.clone());

    let text = client.transcribe_audio(&path).await.unwrap();
    assert_eq!(text, "transcript");

    let requests = transport.requests.lock().unwrap();
    let payload: serde_json::Value = serde_json::from_slice(&requests[0].2).unwrap();
    assert_eq!(payload["audio_input"], hex::encode(audio));
    assert_eq!(payload["language"], "english");
    assert!(payload.get("audio").is_none());

    std::fs::remove_file(&path).unwrap();
}

#[tokio::test]
async fn test_transcribe_audio_missing_text_field_fails() {
    let path = write_temp_audio("missing_text.wav", b"bytes");

    let transport = ScriptedTransport::new(br#"{"status": "done"}"#);
    let client = EndpointClient::with_transport(config(PayloadEncoding::Base64), transport);

    let err = client.transcribe_audio(&path).await.unwrap_err();
    assert!(matches!(err, TranscribeError::MalformedResponse(_)));

    std::fs::remove_file(&path).unwrap();
}

#[tokio::test]
async fn test_uninitialized_client_never_touches_transport() {
    let client = EndpointClient::uninitialized(config(PayloadEncoding::Base64));
    assert!(!client.is_available());

    let err = client
        .transcribe_audio("/no/such/file.wav")
        .await
        .unwrap_err();
    // ClientNotInitialized, not LocalIo: precondition checked before the read
    assert!(matches!(err, TranscribeError::ClientNotInitialized));

    let (ok, message) = client.describe_status().await;
    assert!(!ok);
    assert!(message.contains("not initialized"));
}

#[tokio::test]
async fn test_concurrent_calls_share_transport() {
    let transport = ScriptedTransport::new(br#"{"text": "shared"}"#);
    let client = Arc::new(EndpointClient::with_transport(
        config(PayloadEncoding::Base64),
        transport.clone(),
    ));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let client = Arc::clone(&client);
        handles.push(tokio::spawn(async move {
            client.transcribe_bytes(b"chunk").await.unwrap()
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap(), "shared");
    }
    assert_eq!(transport.requests.lock().unwrap().len(), 8);
}

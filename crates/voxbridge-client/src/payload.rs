use base64::prelude::*;
use serde::Serialize;
use voxbridge_core::PayloadEncoding;

pub const CONTENT_TYPE_JSON: &str = "application/json";

const TASK_TRANSCRIBE: &str = "transcribe";

/// Request payload for the remote transcription endpoint.
///
/// One variant per wire encoding. The field names differ between the two
/// contract versions, so the variants are not interchangeable with the
/// remote service.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum TranscriptionRequest {
    Base64 {
        audio: String,
        task: &'static str,
    },
    Hex {
        audio_input: String,
        task: &'static str,
        language: &'static str,
    },
}

impl TranscriptionRequest {
    pub fn new(encoding: PayloadEncoding, audio: &[u8]) -> Self {
        match encoding {
            PayloadEncoding::Base64 => TranscriptionRequest::Base64 {
                audio: BASE64_STANDARD.encode(audio),
                task: TASK_TRANSCRIBE,
            },
            PayloadEncoding::Hex => TranscriptionRequest::Hex {
                audio_input: hex::encode(audio),
                task: TASK_TRANSCRIBE,
                language: "english",
            },
        }
    }

    /// Serialize to the JSON request body. String-only fields, so this
    /// cannot fail.
    pub fn to_body(&self) -> Vec<u8> {
        serde_json::to_vec(self).unwrap_or_default()
    }
}

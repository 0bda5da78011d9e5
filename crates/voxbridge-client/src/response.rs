use serde_json::Value;
use voxbridge_core::TranscribeError;

/// Normalize a raw endpoint response body into the transcript string.
///
/// The `text` field arrives either as a single string or as a sequence of
/// string fragments; fragments are concatenated in order with no separator.
/// The result is trimmed of leading and trailing whitespace.
pub fn extract_transcript(body: &[u8]) -> Result<String, TranscribeError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| TranscribeError::MalformedResponse(format!("invalid JSON: {e}")))?;

    let text = value
        .get("text")
        .ok_or_else(|| TranscribeError::MalformedResponse("no 'text' field in response".into()))?;

    let joined = match text {
        Value::String(s) => s.clone(),
        Value::Array(fragments) => {
            let mut out = String::new();
            for fragment in fragments {
                match fragment {
                    Value::String(s) => out.push_str(s),
                    other => out.push_str(&coerce_scalar(other)?),
                }
            }
            out
        }
        other => coerce_scalar(other)?,
    };

    Ok(joined.trim().to_string())
}

fn coerce_scalar(value: &Value) -> Result<String, TranscribeError> {
    match value {
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(TranscribeError::MalformedResponse(format!(
            "unexpected 'text' value: {other}",
        ))),
    }
}

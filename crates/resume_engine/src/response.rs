use reqwest::StatusCode;
use resume_core::{AnalysisResult, SubmissionError};
use serde_json::Value;

/// Shown when the service refuses the upload size and gives no reason of its own.
pub const UPLOAD_TOO_LARGE_MESSAGE: &str = "Resume is too large for the analysis service.";

/// Turns a status and raw body from `/analyze` into a result.
///
/// Any body that is not a JSON object counts as a transport failure, on the
/// error path as well as the success path.
pub fn interpret_response(
    status: StatusCode,
    body: &[u8],
) -> Result<AnalysisResult, SubmissionError> {
    // The service's size guard answers with an HTML page, not JSON.
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        let reason = serde_json::from_slice::<Value>(body)
            .ok()
            .and_then(|value| value.get("error").and_then(error_text));
        return Err(SubmissionError::ServerRejected(
            reason.unwrap_or_else(|| UPLOAD_TOO_LARGE_MESSAGE.to_string()),
        ));
    }

    let value: Value = serde_json::from_slice(body).map_err(|err| {
        SubmissionError::transport(format!("Malformed response from analysis service: {err}"))
    })?;
    if !value.is_object() {
        return Err(SubmissionError::transport(
            "Malformed response from analysis service: expected a JSON object",
        ));
    }

    // A 2xx carrying an `error` field is still a rejection.
    let error = value.get("error").and_then(error_text);
    if !status.is_success() || error.is_some() {
        return Err(SubmissionError::server_rejected(error));
    }

    serde_json::from_value(value).map_err(|err| {
        SubmissionError::transport(format!("Unexpected analysis result shape: {err}"))
    })
}

fn error_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::RequestError;

/// The `{success, data, message?}` wrapper the API puts around payloads.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Longest body excerpt carried in a protocol error.
const BODY_EXCERPT_CHARS: usize = 100;

/// Decode a response body, turning anything non-JSON into a protocol error.
pub(crate) fn parse_body(body: &str) -> Result<Value, RequestError> {
    serde_json::from_str(body).map_err(|_| {
        let excerpt: String = body.chars().take(BODY_EXCERPT_CHARS).collect();
        RequestError::protocol(format!("Invalid JSON response: {excerpt}"))
    })
}

/// Human-readable reason for a failed request: the body's `message`, then its
/// `error`, then a generic line naming the status.
pub(crate) fn error_message(status: StatusCode, body: &Value) -> String {
    ["message", "error"]
        .iter()
        .filter_map(|key| body.get(*key).and_then(Value::as_str))
        .find(|s| !s.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("API request failed with status {}", status.as_u16()))
}

/// Reduce a 2xx body to its payload.
///
/// Wrapped bodies (those carrying `success`) are unwrapped; anything else is
/// taken to be the bare payload. This is the only place response shapes are
/// reconciled.
pub(crate) fn unwrap_payload<T: DeserializeOwned>(
    status: StatusCode,
    body: Value,
) -> Result<T, RequestError> {
    let wrapped = body
        .as_object()
        .is_some_and(|obj| obj.contains_key("success"));

    if !wrapped {
        return serde_json::from_value(body)
            .map_err(|e| RequestError::protocol(format!("Unexpected response shape: {e}")));
    }

    let envelope: Envelope<T> = serde_json::from_value(body)
        .map_err(|e| RequestError::protocol(format!("Unexpected response shape: {e}")))?;

    if !envelope.success {
        return Err(RequestError::Failure {
            status: status.as_u16(),
            message: envelope
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| "Request was not successful".to_string()),
        });
    }

    envelope
        .data
        .ok_or_else(|| RequestError::protocol("Response envelope is missing `data`"))
}

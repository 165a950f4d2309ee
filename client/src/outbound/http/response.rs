//! Normalise raw HTTP responses into the transport result shape.
//!
//! Bodies are read as text first so plain-text proxy errors and empty bodies
//! stay observable. Exactly one of payload or error is produced.

use reqwest::StatusCode;
use serde_json::Value;

use crate::domain::ApiError;
use crate::domain::ports::ClientError;

/// Map a status and body text onto a JSON payload or a [`ClientError::Api`].
pub(crate) fn normalize_response(status: StatusCode, body: &str) -> Result<Value, ClientError> {
    let parsed = if body.is_empty() {
        None
    } else {
        match serde_json::from_str::<Value>(body) {
            Ok(Value::Null) => None,
            Ok(value) => Some(value),
            Err(_) => return Err(ClientError::api(ApiError::synthesized(body))),
        }
    };

    if !status.is_success() {
        let error = match parsed {
            Some(value) => ApiError::from_body(value),
            None => ApiError::synthesized(status_phrase(status)),
        };
        return Err(ClientError::api(error));
    }

    Ok(parsed.unwrap_or(Value::Null))
}

/// Canonical reason phrase, or `HTTP <code>` for unregistered statuses.
pub(crate) fn status_phrase(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map_or_else(|| format!("HTTP {}", status.as_u16()), str::to_owned)
}

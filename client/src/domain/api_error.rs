//! Error body returned by the content API.
//!
//! Failure responses share the shape `{ "error": <object-or-string>,
//! "message"?: string }`. Validation failures nest a `fieldErrors` map of
//! field name to messages inside `error`.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// Message shown when an error body carries nothing readable.
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong";

/// Structured error value reported by the content API.
///
/// # Examples
/// ```
/// use content_admin::domain::ApiError;
/// use serde_json::json;
///
/// let err = ApiError::from_body(json!({
///     "error": { "fieldErrors": { "title": ["Title is required"] } }
/// }));
/// assert_eq!(err.display_message(), "Title is required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    error: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl ApiError {
    /// Build an error from a structured body and optional message.
    pub fn new(error: Value, message: Option<String>) -> Self {
        Self { error, message }
    }

    /// Synthesise a minimal error carrying only `error.message`.
    ///
    /// Used when the response body could not be parsed or was absent.
    pub fn synthesized(message: impl Into<String>) -> Self {
        Self {
            error: json!({ "message": message.into() }),
            message: None,
        }
    }

    /// Interpret a parsed failure body.
    ///
    /// Bodies following the `{ error, message? }` convention are split into
    /// their parts; any other JSON value becomes the structured error as-is.
    pub fn from_body(body: Value) -> Self {
        match body {
            Value::Object(mut object) if object.contains_key("error") => {
                let error = object.remove("error").unwrap_or(Value::Null);
                let message = match object.remove("message") {
                    Some(Value::String(text)) => Some(text),
                    _ => None,
                };
                Self { error, message }
            }
            other => Self {
                error: other,
                message: None,
            },
        }
    }

    /// Structured error value.
    pub fn error(&self) -> &Value {
        &self.error
    }

    /// Top-level human-readable message, when the server sent one.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Field-level validation messages nested under `error.fieldErrors`.
    pub fn field_errors(&self) -> Option<&Map<String, Value>> {
        self.error.get("fieldErrors").and_then(Value::as_object)
    }

    /// Project the error onto the single string shown to an operator.
    ///
    /// Preference order: top-level `message`, the first field error, the
    /// nested `error.message`, a plain-string `error`, then a generic
    /// fallback.
    pub fn display_message(&self) -> String {
        if let Some(message) = self.message.as_deref().filter(|m| !m.is_empty()) {
            return message.to_owned();
        }
        if let Some(first) = self.first_field_error() {
            return first.to_owned();
        }
        match &self.error {
            Value::Object(object) => match object.get("message") {
                Some(Value::String(text)) if !text.is_empty() => text.clone(),
                Some(Value::String(_) | Value::Null) | None => FALLBACK_ERROR_MESSAGE.to_owned(),
                Some(other) => other.to_string(),
            },
            Value::String(text) if !text.is_empty() => text.clone(),
            _ => FALLBACK_ERROR_MESSAGE.to_owned(),
        }
    }

    fn first_field_error(&self) -> Option<&str> {
        self.field_errors()?
            .values()
            .flat_map(|value| match value {
                Value::Array(items) => items.iter().collect::<Vec<_>>(),
                other => vec![other],
            })
            .filter_map(Value::as_str)
            .next()
            .filter(|first| !first.is_empty())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_message())
    }
}

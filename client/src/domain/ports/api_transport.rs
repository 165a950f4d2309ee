//! Driven port for issuing one request against the content API.
//!
//! The domain owns the request shape and the error taxonomy. Adapters attach
//! credentials and headers, perform the network call, and normalise every
//! outcome into either a JSON payload or a [`ClientError`]; they never panic on
//! HTTP-level failures.

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use super::define_port_error;
use crate::domain::{AccessToken, ApiError};

/// HTTP verbs used by the admin endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Read a record or collection.
    Get,
    /// Create a record.
    Post,
    /// Partially update a record.
    Put,
    /// Remove a record.
    Delete,
}

impl HttpMethod {
    /// Upper-case method token as sent on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Binary file attached to a multipart form.
#[derive(Clone, PartialEq, Eq)]
pub struct FilePart {
    /// File name reported to the server.
    pub file_name: String,
    /// MIME type of the content.
    pub content_type: String,
    /// File content.
    pub bytes: Vec<u8>,
}

impl fmt::Debug for FilePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilePart")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Value of one multipart form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    /// Plain text field.
    Text(String),
    /// File upload field.
    File(FilePart),
}

/// Ordered multipart form payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartForm {
    fields: Vec<(String, FormValue)>,
}

impl MultipartForm {
    /// Empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text field.
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), FormValue::Text(value.into())));
        self
    }

    /// Append a file field.
    pub fn file(mut self, name: impl Into<String>, part: FilePart) -> Self {
        self.fields.push((name.into(), FormValue::File(part)));
        self
    }

    /// Fields in insertion order.
    pub fn fields(&self) -> &[(String, FormValue)] {
        &self.fields
    }

    /// First field with the given name.
    pub fn get(&self, name: &str) -> Option<&FormValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Text value of the named field, if it is a text field.
    pub fn text_value(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            FormValue::Text(value) => Some(value.as_str()),
            FormValue::File(_) => None,
        }
    }

    /// Field names in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.fields.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Consume the form, yielding its fields.
    pub fn into_fields(self) -> Vec<(String, FormValue)> {
        self.fields
    }
}

/// Request payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestBody {
    /// No body.
    #[default]
    Empty,
    /// JSON document sent as `application/json` text.
    Json(Value),
    /// Multipart form; the adapter must not force a JSON content type.
    Multipart(MultipartForm),
}

impl RequestBody {
    /// Whether the body is a multipart form.
    pub const fn is_multipart(&self) -> bool {
        matches!(self, Self::Multipart(_))
    }
}

/// One call against the content API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// HTTP verb.
    pub method: HttpMethod,
    /// Path and query relative to the API base URL, starting with `/`.
    pub path: String,
    /// Request payload.
    pub body: RequestBody,
    /// Bearer credential, attached when present.
    pub token: Option<AccessToken>,
}

impl ApiRequest {
    /// Request with no body and no credential.
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: RequestBody::Empty,
            token: None,
        }
    }

    /// `GET` request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    /// `DELETE` request.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Replace the body.
    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    /// Attach a JSON body.
    pub fn with_json(self, body: Value) -> Self {
        self.with_body(RequestBody::Json(body))
    }

    /// Attach a multipart body.
    pub fn with_form(self, form: MultipartForm) -> Self {
        self.with_body(RequestBody::Multipart(form))
    }

    /// Attach an optional bearer credential.
    pub fn with_token(mut self, token: Option<AccessToken>) -> Self {
        self.token = token;
        self
    }
}

define_port_error! {
    /// Failures surfaced by content API calls.
    pub enum ClientError {
        /// The API answered with a failure status or an unreadable body.
        Api { error: ApiError } =>
            "{error}",
        /// The request failed before a response was received.
        Transport { message: String } =>
            "content API transport failed: {message}",
        /// A success body did not match the expected resource shape.
        Decode { message: String } =>
            "content API response decode failed: {message}",
        /// The request could not be built before execution.
        InvalidRequest { message: String } =>
            "content API request invalid: {message}",
    }
}

impl ClientError {
    /// API error body, when the failure came from the server.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api { error } => Some(error),
            Self::Transport { .. } | Self::Decode { .. } | Self::InvalidRequest { .. } => None,
        }
    }

    /// Single string suitable for showing to an operator.
    pub fn display_message(&self) -> String {
        match self {
            Self::Api { error } => error.display_message(),
            other => other.to_string(),
        }
    }
}

impl From<ApiError> for ClientError {
    fn from(error: ApiError) -> Self {
        Self::Api { error }
    }
}

/// Port executing requests against the content API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Perform exactly one network call.
    ///
    /// Returns the parsed success body (`Value::Null` when the body was
    /// empty) or the normalised failure. No retries, timeouts or caching.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use content_admin::domain::ports::{ApiRequest, ApiTransport};
    ///
    /// let tags = transport.execute(ApiRequest::get("/api/admin/tags")).await?;
    /// assert!(tags.is_array());
    /// # Ok::<(), content_admin::domain::ports::ClientError>(())
    /// ```
    async fn execute(&self, request: ApiRequest) -> Result<Value, ClientError>;
}

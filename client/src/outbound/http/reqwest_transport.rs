//! Reqwest-backed content API transport.
//!
//! This adapter owns transport details only: URL joining, credential and
//! content-type headers, multipart encoding, and handing the raw response to
//! [`normalize_response`]. It never retries and enforces no timeout.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, Url};
use serde_json::Value;
use tracing::{debug, warn};

use super::response::normalize_response;
use crate::domain::ports::{
    ApiRequest, ApiTransport, ClientError, FormValue, HttpMethod, MultipartForm, RequestBody,
};

const JSON_CONTENT_TYPE: &str = "application/json";
const DEFAULT_USER_AGENT: &str = concat!("content-admin/", env!("CARGO_PKG_VERSION"));

/// Transport issuing requests against one content API base URL.
#[derive(Debug, Clone)]
pub struct ReqwestApiTransport {
    client: Client,
    base_url: String,
}

impl ReqwestApiTransport {
    /// Build a transport with a default reqwest client.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url) -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(DEFAULT_USER_AGENT).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Build a transport around an existing client.
    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self {
            client,
            base_url: base_url.as_str().trim_end_matches('/').to_owned(),
        }
    }

    /// Base URL without trailing slashes.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl ApiTransport for ReqwestApiTransport {
    async fn execute(&self, request: ApiRequest) -> Result<Value, ClientError> {
        let ApiRequest {
            method,
            path,
            body,
            token,
        } = request;

        let mut builder = self
            .client
            .request(to_reqwest_method(method), self.request_url(&path));
        if let Some(token) = &token {
            debug!(%method, %path, token = %token.fingerprint(), "sending authenticated request");
            builder = builder.header(AUTHORIZATION, token.bearer_header().as_str());
        } else {
            debug!(%method, %path, "sending anonymous request");
        }

        builder = match body {
            RequestBody::Multipart(form) => builder.multipart(build_multipart(form)?),
            RequestBody::Json(value) => builder
                .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
                .body(value.to_string()),
            RequestBody::Empty => builder.header(CONTENT_TYPE, JSON_CONTENT_TYPE),
        };

        let response = builder.send().await.map_err(|error| {
            warn!(%method, %path, error = %error, "content API request failed");
            map_transport_error(error)
        })?;
        let status = response.status();
        let text = response.text().await.map_err(map_transport_error)?;
        if !status.is_success() {
            warn!(%method, %path, status = status.as_u16(), "content API returned failure status");
        }

        normalize_response(status, &text)
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

fn build_multipart(form: MultipartForm) -> Result<Form, ClientError> {
    let mut multipart = Form::new();
    for (name, value) in form.into_fields() {
        multipart = match value {
            FormValue::Text(text) => multipart.text(name, text),
            FormValue::File(file) => {
                let part = Part::bytes(file.bytes)
                    .file_name(file.file_name)
                    .mime_str(&file.content_type)
                    .map_err(|error| {
                        ClientError::invalid_request(format!(
                            "invalid content type for form field {name}: {error}"
                        ))
                    })?;
                multipart.part(name, part)
            }
        };
    }
    Ok(multipart)
}

fn map_transport_error(error: reqwest::Error) -> ClientError {
    ClientError::transport(error.to_string())
}

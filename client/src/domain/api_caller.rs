//! Shared plumbing for resource services.
//!
//! Every operation asks the session for the current token, hands one request
//! to the transport, and decodes the JSON payload into the expected resource
//! type. Decoding is explicit so malformed success bodies fail as
//! [`ClientError::Decode`] instead of reaching callers half-formed.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ports::{ApiRequest, ApiTransport, ClientError, SessionProvider};

/// Body returned by delete endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteOutcome {
    /// Whether the server removed the record.
    pub success: bool,
}

pub(crate) struct ApiCaller<T, S> {
    transport: Arc<T>,
    session: Arc<S>,
}

impl<T, S> Clone for ApiCaller<T, S> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            session: Arc::clone(&self.session),
        }
    }
}

impl<T, S> ApiCaller<T, S>
where
    T: ApiTransport,
    S: SessionProvider,
{
    pub(crate) fn new(transport: Arc<T>, session: Arc<S>) -> Self {
        Self { transport, session }
    }

    pub(crate) async fn call<R>(&self, request: ApiRequest, resource: &str) -> Result<R, ClientError>
    where
        R: DeserializeOwned,
    {
        let token = self.session.access_token().await;
        let payload = self.transport.execute(request.with_token(token)).await?;
        decode_payload(payload, resource)
    }
}

pub(crate) fn decode_payload<R>(payload: Value, resource: &str) -> Result<R, ClientError>
where
    R: DeserializeOwned,
{
    serde_json::from_value(payload)
        .map_err(|error| ClientError::decode(format!("invalid {resource} payload: {error}")))
}

pub(crate) fn encode_body<B>(body: &B, resource: &str) -> Result<Value, ClientError>
where
    B: Serialize,
{
    serde_json::to_value(body).map_err(|error| {
        ClientError::invalid_request(format!("failed to encode {resource} body: {error}"))
    })
}

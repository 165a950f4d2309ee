//! Tag taxonomy operations.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::api_caller::{ApiCaller, DeleteOutcome, encode_body};
use super::ports::{ApiRequest, ApiTransport, ClientError, HttpMethod, SessionProvider, TagDirectory};
use super::{Tag, TagDraft, TagId};

const TAGS_PATH: &str = "/api/admin/tags";

/// Service wrapping the `/api/admin/tags` endpoints.
pub struct TagService<T, S> {
    caller: ApiCaller<T, S>,
}

impl<T, S> Clone for TagService<T, S> {
    fn clone(&self) -> Self {
        Self {
            caller: self.caller.clone(),
        }
    }
}

impl<T, S> TagService<T, S>
where
    T: ApiTransport,
    S: SessionProvider,
{
    /// Create a service over the given transport and session.
    pub fn new(transport: Arc<T>, session: Arc<S>) -> Self {
        Self {
            caller: ApiCaller::new(transport, session),
        }
    }

    /// Every tag, unpaginated, with usage counts.
    pub async fn list_tags(&self) -> Result<Vec<Tag>, ClientError> {
        self.caller.call(ApiRequest::get(TAGS_PATH), "tag list").await
    }

    /// Create a tag with the given display name.
    pub async fn create_tag(&self, name: &str) -> Result<Tag, ClientError> {
        debug!(name, "creating tag");
        let body = draft_body(name)?;
        self.caller
            .call(ApiRequest::new(HttpMethod::Post, TAGS_PATH).with_json(body), "tag")
            .await
    }

    /// Rename a tag.
    pub async fn update_tag(&self, id: &TagId, name: &str) -> Result<Tag, ClientError> {
        let body = draft_body(name)?;
        self.caller
            .call(
                ApiRequest::new(HttpMethod::Put, tag_path(id)).with_json(body),
                "tag",
            )
            .await
    }

    /// Delete a tag.
    pub async fn delete_tag(&self, id: &TagId) -> Result<DeleteOutcome, ClientError> {
        self.caller
            .call(ApiRequest::delete(tag_path(id)), "tag delete")
            .await
    }
}

#[async_trait]
impl<T, S> TagDirectory for TagService<T, S>
where
    T: ApiTransport,
    S: SessionProvider,
{
    async fn list_tags(&self) -> Result<Vec<Tag>, ClientError> {
        Self::list_tags(self).await
    }

    async fn create_tag(&self, name: &str) -> Result<Tag, ClientError> {
        Self::create_tag(self, name).await
    }
}

fn tag_path(id: &TagId) -> String {
    format!("{TAGS_PATH}/{id}")
}

fn draft_body(name: &str) -> Result<serde_json::Value, ClientError> {
    encode_body(
        &TagDraft {
            name: name.to_owned(),
        },
        "tag",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AccessToken;
    use crate::domain::ports::{MockApiTransport, MockSessionProvider, RequestBody};
    use serde_json::json;

    fn signed_in() -> MockSessionProvider {
        let mut session = MockSessionProvider::new();
        session
            .expect_access_token()
            .returning(|| Some(AccessToken::new("tok").expect("valid token")));
        session
    }

    fn service(transport: MockApiTransport) -> TagService<MockApiTransport, MockSessionProvider> {
        TagService::new(Arc::new(transport), Arc::new(signed_in()))
    }

    #[tokio::test]
    async fn list_tags_gets_collection_with_token() {
        let mut transport = MockApiTransport::new();
        transport
            .expect_execute()
            .withf(|request| {
                request.method == HttpMethod::Get
                    && request.path == "/api/admin/tags"
                    && request.body == RequestBody::Empty
                    && request.token.as_ref().map(AccessToken::expose) == Some("tok")
            })
            .times(1)
            .return_once(|_| {
                Ok(json!([
                    { "id": "t1", "name": "Nature", "slug": "nature", "_count": { "videos": 2, "artworks": 0 } }
                ]))
            });

        let tags = service(transport).list_tags().await.expect("list succeeds");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].id, TagId::new("t1"));
    }

    #[tokio::test]
    async fn create_tag_posts_name_as_json() {
        let mut transport = MockApiTransport::new();
        transport
            .expect_execute()
            .withf(|request| {
                request.method == HttpMethod::Post
                    && request.body == RequestBody::Json(json!({ "name": "Fine Art" }))
            })
            .times(1)
            .return_once(|_| Ok(json!({ "id": "t9", "name": "Fine Art", "slug": "fine-art" })));

        let tag = service(transport).create_tag("Fine Art").await.expect("create succeeds");
        assert_eq!(tag.slug, "fine-art");
    }

    #[tokio::test]
    async fn update_and_delete_address_the_tag_path() {
        let mut transport = MockApiTransport::new();
        transport
            .expect_execute()
            .withf(|request| request.method == HttpMethod::Put && request.path == "/api/admin/tags/t1")
            .times(1)
            .return_once(|_| Ok(json!({ "id": "t1", "name": "Flora", "slug": "flora" })));
        transport
            .expect_execute()
            .withf(|request| {
                request.method == HttpMethod::Delete && request.path == "/api/admin/tags/t1"
            })
            .times(1)
            .return_once(|_| Ok(json!({ "success": true })));

        let service = service(transport);
        let id = TagId::new("t1");
        let renamed = service.update_tag(&id, "Flora").await.expect("rename succeeds");
        assert_eq!(renamed.name, "Flora");
        let outcome = service.delete_tag(&id).await.expect("delete succeeds");
        assert!(outcome.success);
    }

    #[tokio::test]
    async fn api_errors_surface_unchanged() {
        let api_error = crate::domain::ApiError::from_body(json!({
            "error": { "message": "Tag name already exists" }
        }));
        let expected = ClientError::api(api_error.clone());
        let mut transport = MockApiTransport::new();
        transport
            .expect_execute()
            .times(1)
            .return_once(move |_| Err(ClientError::api(api_error)));

        let error = service(transport).create_tag("Nature").await.expect_err("create fails");
        assert_eq!(error, expected);
    }

    #[tokio::test]
    async fn empty_create_response_is_a_decode_error() {
        let mut transport = MockApiTransport::new();
        transport
            .expect_execute()
            .times(1)
            .return_once(|_| Ok(serde_json::Value::Null));

        let error = service(transport).create_tag("Nature").await.expect_err("create fails");
        assert!(matches!(error, ClientError::Decode { .. }));
    }
}

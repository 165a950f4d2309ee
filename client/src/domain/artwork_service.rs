//! Artwork operations. Create and update go out as multipart forms.

use std::sync::Arc;

use pagination::{Page, PageRequest};

use super::api_caller::{ApiCaller, DeleteOutcome};
use super::ports::{ApiRequest, ApiTransport, ClientError, HttpMethod, SessionProvider};
use super::{Artwork, ArtworkId, ArtworkUpdate, NewArtwork};

const ARTWORKS_PATH: &str = "/api/admin/artworks";

/// Service wrapping the `/api/admin/artworks` endpoints.
pub struct ArtworkService<T, S> {
    caller: ApiCaller<T, S>,
}

impl<T, S> ArtworkService<T, S>
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

    /// One page of artworks.
    pub async fn list_artworks(&self, request: PageRequest) -> Result<Page<Artwork>, ClientError> {
        let path = format!("{ARTWORKS_PATH}?{}", request.to_query_string());
        self.caller.call(ApiRequest::get(path), "artwork page").await
    }

    /// One artwork by identifier.
    pub async fn get_artwork(&self, id: &ArtworkId) -> Result<Artwork, ClientError> {
        self.caller
            .call(ApiRequest::get(artwork_path(id)), "artwork")
            .await
    }

    /// Create an artwork, uploading its image.
    pub async fn create_artwork(&self, artwork: &NewArtwork) -> Result<Artwork, ClientError> {
        self.caller
            .call(
                ApiRequest::new(HttpMethod::Post, ARTWORKS_PATH).with_form(artwork.to_form()),
                "artwork",
            )
            .await
    }

    /// Apply a partial update; only supplied fields become form fields.
    pub async fn update_artwork(
        &self,
        id: &ArtworkId,
        update: &ArtworkUpdate,
    ) -> Result<Artwork, ClientError> {
        self.caller
            .call(
                ApiRequest::new(HttpMethod::Put, artwork_path(id)).with_form(update.to_form()),
                "artwork",
            )
            .await
    }

    /// Delete an artwork.
    pub async fn delete_artwork(&self, id: &ArtworkId) -> Result<DeleteOutcome, ClientError> {
        self.caller
            .call(ApiRequest::delete(artwork_path(id)), "artwork delete")
            .await
    }
}

fn artwork_path(id: &ArtworkId) -> String {
    format!("{ARTWORKS_PATH}/{id}")
}

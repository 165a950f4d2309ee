//! Entry point wiring services, the tag resolver and the session together.
//!
//! The `*_with_tags` workflows mirror the editor screens: resolve the
//! comma-separated tag text first, then write the record. When resolution
//! fails the record is not touched.

use std::sync::Arc;

use super::ports::{ApiTransport, ClientError, SessionProvider};
use super::{
    Artwork, ArtworkId, ArtworkService, ArtworkUpdate, NewArtwork, NewVideo, TagId, TagResolver,
    TagService, Video, VideoId, VideoService, VideoUpdate, parse_tag_text,
};

/// Data-access layer for the content admin API.
pub struct AdminClient<T, S> {
    tags: Arc<TagService<T, S>>,
    videos: VideoService<T, S>,
    artworks: ArtworkService<T, S>,
    resolver: TagResolver<TagService<T, S>>,
    session: Arc<S>,
}

impl<T, S> AdminClient<T, S>
where
    T: ApiTransport,
    S: SessionProvider,
{
    /// Build the client over one transport and one session capability.
    pub fn new(transport: Arc<T>, session: Arc<S>) -> Self {
        let tags = Arc::new(TagService::new(Arc::clone(&transport), Arc::clone(&session)));
        Self {
            resolver: TagResolver::new(Arc::clone(&tags)),
            videos: VideoService::new(Arc::clone(&transport), Arc::clone(&session)),
            artworks: ArtworkService::new(transport, Arc::clone(&session)),
            tags,
            session,
        }
    }

    /// Tag operations.
    pub fn tags(&self) -> &TagService<T, S> {
        &self.tags
    }

    /// Video operations.
    pub fn videos(&self) -> &VideoService<T, S> {
        &self.videos
    }

    /// Artwork operations.
    pub fn artworks(&self) -> &ArtworkService<T, S> {
        &self.artworks
    }

    /// Tag name resolver.
    pub fn resolver(&self) -> &TagResolver<TagService<T, S>> {
        &self.resolver
    }

    /// Resolve comma-separated tag text into tag IDs.
    pub async fn resolve_tag_text(&self, text: &str) -> Result<Vec<TagId>, ClientError> {
        self.resolver.resolve(&parse_tag_text(text)).await
    }

    /// Resolve tag text, then create a video carrying those tags.
    pub async fn create_video_with_tags(
        &self,
        mut video: NewVideo,
        tag_text: &str,
    ) -> Result<Video, ClientError> {
        video.tag_ids = Some(self.resolve_tag_text(tag_text).await?);
        self.videos.create_video(&video).await
    }

    /// Resolve tag text, then update a video, replacing its tags.
    pub async fn update_video_with_tags(
        &self,
        id: &VideoId,
        mut update: VideoUpdate,
        tag_text: &str,
    ) -> Result<Video, ClientError> {
        update.tag_ids = Some(self.resolve_tag_text(tag_text).await?);
        self.videos.update_video(id, &update).await
    }

    /// Resolve tag text, then create an artwork carrying those tags.
    pub async fn create_artwork_with_tags(
        &self,
        mut artwork: NewArtwork,
        tag_text: &str,
    ) -> Result<Artwork, ClientError> {
        artwork.tag_ids = self.resolve_tag_text(tag_text).await?;
        self.artworks.create_artwork(&artwork).await
    }

    /// Resolve tag text, then update an artwork, replacing its tags.
    pub async fn update_artwork_with_tags(
        &self,
        id: &ArtworkId,
        mut update: ArtworkUpdate,
        tag_text: &str,
    ) -> Result<Artwork, ClientError> {
        update.tag_ids = Some(self.resolve_tag_text(tag_text).await?);
        self.artworks.update_artwork(id, &update).await
    }

    /// Drop the current session.
    pub async fn sign_out(&self) {
        self.session.invalidate().await;
    }
}

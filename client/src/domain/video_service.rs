//! Video operations. Bodies are JSON.

use std::sync::Arc;

use pagination::{Page, PageRequest};

use super::api_caller::{ApiCaller, DeleteOutcome, encode_body};
use super::ports::{ApiRequest, ApiTransport, ClientError, HttpMethod, SessionProvider};
use super::{NewVideo, Video, VideoId, VideoUpdate};

const VIDEOS_PATH: &str = "/api/admin/videos";

/// Service wrapping the `/api/admin/videos` endpoints.
pub struct VideoService<T, S> {
    caller: ApiCaller<T, S>,
}

impl<T, S> VideoService<T, S>
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

    /// One page of videos.
    pub async fn list_videos(&self, request: PageRequest) -> Result<Page<Video>, ClientError> {
        let path = format!("{VIDEOS_PATH}?{}", request.to_query_string());
        self.caller.call(ApiRequest::get(path), "video page").await
    }

    /// One video by identifier.
    pub async fn get_video(&self, id: &VideoId) -> Result<Video, ClientError> {
        self.caller.call(ApiRequest::get(video_path(id)), "video").await
    }

    /// Create a video.
    pub async fn create_video(&self, video: &NewVideo) -> Result<Video, ClientError> {
        let body = encode_body(video, "video")?;
        self.caller
            .call(
                ApiRequest::new(HttpMethod::Post, VIDEOS_PATH).with_json(body),
                "video",
            )
            .await
    }

    /// Apply a partial update; only supplied fields are sent.
    pub async fn update_video(
        &self,
        id: &VideoId,
        update: &VideoUpdate,
    ) -> Result<Video, ClientError> {
        let body = encode_body(update, "video update")?;
        self.caller
            .call(
                ApiRequest::new(HttpMethod::Put, video_path(id)).with_json(body),
                "video",
            )
            .await
    }

    /// Delete a video.
    pub async fn delete_video(&self, id: &VideoId) -> Result<DeleteOutcome, ClientError> {
        self.caller
            .call(ApiRequest::delete(video_path(id)), "video delete")
            .await
    }
}

fn video_path(id: &VideoId) -> String {
    format!("{VIDEOS_PATH}/{id}")
}

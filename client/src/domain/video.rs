//! Video records and their JSON request bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{TagAssignment, TagId, VideoId};

/// Video as returned by the admin API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    /// Stable identifier.
    pub id: VideoId,
    /// Display title.
    pub title: String,
    /// URL slug derived by the server.
    pub slug: String,
    /// Canonical YouTube URL.
    pub youtube_url: String,
    /// YouTube video identifier extracted by the server.
    pub youtube_id: String,
    /// Optional long-form description.
    pub description: Option<String>,
    /// Optional thumbnail URL.
    pub thumbnail: Option<String>,
    /// Shown in featured listings.
    pub is_featured: bool,
    /// Shown in recommendations.
    pub is_recommended: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
    /// Associated tags in server order.
    #[serde(default)]
    pub tags: Vec<TagAssignment>,
}

/// Body for creating a video.
///
/// Optional fields are omitted from the JSON document when `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVideo {
    /// Display title.
    pub title: String,
    /// YouTube URL to embed.
    pub youtube_url: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional thumbnail URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Featured flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    /// Recommended flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_recommended: Option<bool>,
    /// Tags to associate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<TagId>>,
}

impl NewVideo {
    /// Minimal body with the required fields.
    pub fn new(title: impl Into<String>, youtube_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            youtube_url: youtube_url.into(),
            ..Self::default()
        }
    }
}

/// Partial update for a video.
///
/// Only fields set to `Some` are serialised; `Some(String::new())` is sent as
/// an explicit empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoUpdate {
    /// New title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New YouTube URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube_url: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New thumbnail URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// New featured flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    /// New recommended flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_recommended: Option<bool>,
    /// Replacement tag set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<TagId>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn update_serialises_only_supplied_fields() {
        let update = VideoUpdate {
            description: Some(String::new()),
            is_featured: Some(false),
            ..VideoUpdate::default()
        };
        assert_eq!(
            serde_json::to_value(&update).expect("serialise"),
            json!({ "description": "", "isFeatured": false })
        );
    }

    #[test]
    fn new_video_omits_unset_optionals() {
        let body = NewVideo::new("Intro", "https://youtu.be/abc");
        assert_eq!(
            serde_json::to_value(&body).expect("serialise"),
            json!({ "title": "Intro", "youtubeUrl": "https://youtu.be/abc" })
        );
    }

    #[test]
    fn video_decodes_api_record() {
        let json = json!({
            "id": "v1",
            "title": "Intro",
            "slug": "intro",
            "youtubeUrl": "https://youtu.be/abc",
            "youtubeId": "abc",
            "description": null,
            "thumbnail": null,
            "isFeatured": true,
            "isRecommended": false,
            "createdAt": "2024-05-01T10:00:00.000Z",
            "updatedAt": "2024-05-02T10:00:00.000Z",
            "tags": [{ "tagId": "t1", "tag": { "id": "t1", "name": "Nature", "slug": "nature" } }]
        });
        let video: Video = serde_json::from_value(json).expect("video should decode");
        assert_eq!(video.id, VideoId::new("v1"));
        assert!(video.description.is_none());
        assert_eq!(video.tags.len(), 1);
        assert_eq!(video.tags[0].tag.name, "Nature");
    }
}

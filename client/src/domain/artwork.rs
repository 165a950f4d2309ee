//! Artwork records and their multipart request bodies.
//!
//! Artworks carry an image, so create and update go out as multipart forms.
//! Booleans are sent as `"true"`/`"false"` and tag IDs as JSON array text,
//! which is what the server's form parser expects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ports::{FilePart, MultipartForm};
use super::{ArtworkId, TagAssignment, TagId};

/// Artwork as returned by the admin API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    /// Stable identifier.
    pub id: ArtworkId,
    /// Display title.
    pub title: String,
    /// URL slug derived by the server.
    pub slug: String,
    /// Optional body text.
    pub content: Option<String>,
    /// Public URL of the stored image.
    pub image_url: String,
    /// Shown in featured listings.
    pub is_featured: bool,
    /// Visible on the public site.
    pub is_published: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
    /// Associated tags in server order.
    #[serde(default)]
    pub tags: Vec<TagAssignment>,
}

/// Fields for creating an artwork.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArtwork {
    /// Display title.
    pub title: String,
    /// Optional body text; omitted from the form when `None`.
    pub content: Option<String>,
    /// Featured flag, `false` unless set.
    pub is_featured: bool,
    /// Published flag, `true` unless cleared.
    pub is_published: bool,
    /// Tags to associate.
    pub tag_ids: Vec<TagId>,
    /// Image to upload.
    pub image: FilePart,
}

impl NewArtwork {
    /// Unfeatured, published artwork with no content or tags.
    pub fn new(title: impl Into<String>, image: FilePart) -> Self {
        Self {
            title: title.into(),
            content: None,
            is_featured: false,
            is_published: true,
            tag_ids: Vec::new(),
            image,
        }
    }

    /// Encode as the create form.
    pub fn to_form(&self) -> MultipartForm {
        let mut form = MultipartForm::new().text("title", self.title.as_str());
        if let Some(content) = &self.content {
            form = form.text("content", content.as_str());
        }
        form.text("isFeatured", self.is_featured.to_string())
            .text("isPublished", self.is_published.to_string())
            .text("tagIds", tag_ids_json(&self.tag_ids))
            .file("image", self.image.clone())
    }
}

/// Partial update for an artwork.
///
/// Presence decides inclusion: a field set to `Some` is sent even when it is
/// empty or `false`, and a `None` field is left out of the form entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtworkUpdate {
    /// New title.
    pub title: Option<String>,
    /// New body text.
    pub content: Option<String>,
    /// New featured flag.
    pub is_featured: Option<bool>,
    /// New published flag.
    pub is_published: Option<bool>,
    /// Replacement tag set.
    pub tag_ids: Option<Vec<TagId>>,
    /// Replacement image.
    pub image: Option<FilePart>,
}

impl ArtworkUpdate {
    /// Encode as the update form.
    pub fn to_form(&self) -> MultipartForm {
        let mut form = MultipartForm::new();
        if let Some(title) = &self.title {
            form = form.text("title", title.as_str());
        }
        if let Some(content) = &self.content {
            form = form.text("content", content.as_str());
        }
        if let Some(is_featured) = self.is_featured {
            form = form.text("isFeatured", is_featured.to_string());
        }
        if let Some(is_published) = self.is_published {
            form = form.text("isPublished", is_published.to_string());
        }
        if let Some(tag_ids) = &self.tag_ids {
            form = form.text("tagIds", tag_ids_json(tag_ids));
        }
        if let Some(image) = &self.image {
            form = form.file("image", image.clone());
        }
        form
    }
}

fn tag_ids_json(tag_ids: &[TagId]) -> String {
    Value::Array(
        tag_ids
            .iter()
            .map(|id| Value::String(id.as_str().to_owned()))
            .collect(),
    )
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::FormValue;
    use rstest::rstest;

    fn image() -> FilePart {
        FilePart {
            file_name: "dawn.png".to_owned(),
            content_type: "image/png".to_owned(),
            bytes: vec![0x89, b'P', b'N', b'G'],
        }
    }

    #[rstest]
    fn create_form_applies_defaults() {
        let form = NewArtwork::new("Dawn", image()).to_form();

        assert_eq!(
            form.names(),
            vec!["title", "isFeatured", "isPublished", "tagIds", "image"]
        );
        assert_eq!(form.text_value("isFeatured"), Some("false"));
        assert_eq!(form.text_value("isPublished"), Some("true"));
        assert_eq!(form.text_value("tagIds"), Some("[]"));
        assert!(matches!(form.get("image"), Some(FormValue::File(part)) if part.file_name == "dawn.png"));
    }

    #[rstest]
    fn create_form_includes_supplied_content_and_tags() {
        let artwork = NewArtwork {
            content: Some(String::new()),
            tag_ids: vec![TagId::new("t1"), TagId::new("t2")],
            ..NewArtwork::new("Dawn", image())
        };
        let form = artwork.to_form();

        assert_eq!(form.text_value("content"), Some(""));
        assert_eq!(form.text_value("tagIds"), Some(r#"["t1","t2"]"#));
    }

    #[rstest]
    fn update_with_only_featured_flag_sends_one_field() {
        let update = ArtworkUpdate {
            is_featured: Some(false),
            ..ArtworkUpdate::default()
        };
        let form = update.to_form();

        assert_eq!(form.names(), vec!["isFeatured"]);
        assert_eq!(form.text_value("isFeatured"), Some("false"));
    }

    #[rstest]
    fn update_sends_explicit_empties() {
        let update = ArtworkUpdate {
            content: Some(String::new()),
            tag_ids: Some(Vec::new()),
            ..ArtworkUpdate::default()
        };
        let form = update.to_form();

        assert_eq!(form.names(), vec!["content", "tagIds"]);
        assert_eq!(form.text_value("tagIds"), Some("[]"));
    }

    #[rstest]
    fn empty_update_sends_empty_form() {
        assert!(ArtworkUpdate::default().to_form().fields().is_empty());
    }
}

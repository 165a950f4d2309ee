//! Tag taxonomy records and free-text tag helpers.

use serde::{Deserialize, Serialize};

use super::TagId;

/// Named label attachable to videos and artworks.
///
/// `slug` is derived and owned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Stable identifier.
    pub id: TagId,
    /// Display name; the resolver treats names case-insensitively.
    pub name: String,
    /// URL slug derived from the name.
    pub slug: String,
    /// Usage counts, present on list responses.
    #[serde(rename = "_count", default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<TagUsage>,
}

/// How many records reference a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TagUsage {
    /// Videos carrying the tag.
    #[serde(default)]
    pub videos: u64,
    /// Artworks carrying the tag.
    #[serde(default)]
    pub artworks: u64,
}

/// Association between a record and a tag, with a snapshot of the tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagAssignment {
    /// Identifier of the associated tag.
    pub tag_id: TagId,
    /// Tag as it was when the record was read.
    pub tag: Tag,
}

/// Body of tag create and rename requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagDraft {
    /// Requested display name.
    pub name: String,
}

/// Split comma-separated tag text into trimmed, non-empty names.
///
/// # Examples
/// ```
/// use content_admin::domain::parse_tag_text;
///
/// assert_eq!(parse_tag_text(" tutorial, nature,, 2024 "), vec!["tutorial", "nature", "2024"]);
/// assert!(parse_tag_text(" , ").is_empty());
/// ```
pub fn parse_tag_text(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Render a record's tags as editable comma-separated text.
pub fn tag_text(assignments: &[TagAssignment]) -> String {
    assignments
        .iter()
        .map(|assignment| assignment.tag.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

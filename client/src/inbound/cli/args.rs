//! Command-line surface of the `content-admin` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::AdminSettings;

/// `content-admin` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "content-admin",
    about = "Manage videos, artworks and tags through the content admin API",
    version
)]
pub struct Cli {
    /// Content API base URL. Overrides `CONTENT_ADMIN_API_URL`.
    #[arg(long = "api-url", value_name = "url", global = true)]
    pub api_url: Option<String>,
    /// Bearer token. Overrides `CONTENT_ADMIN_ACCESS_TOKEN`.
    #[arg(long = "token", value_name = "token", global = true)]
    pub token: Option<String>,
    /// Operation to perform.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Apply command-line overrides on top of loaded settings.
    pub fn apply_overrides(&self, mut settings: AdminSettings) -> AdminSettings {
        if let Some(api_url) = &self.api_url {
            settings.api_url = Some(api_url.clone());
        }
        if let Some(token) = &self.token {
            settings.access_token = Some(token.clone());
        }
        settings
    }
}

/// Top-level resource commands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Manage the tag taxonomy.
    #[command(subcommand)]
    Tags(TagsCommand),
    /// Manage videos.
    #[command(subcommand)]
    Videos(VideosCommand),
    /// Manage artworks.
    #[command(subcommand)]
    Artworks(ArtworksCommand),
}

/// Tag operations.
#[derive(Debug, Clone, Subcommand)]
pub enum TagsCommand {
    /// List every tag with usage counts.
    List,
    /// Create a tag.
    Create {
        /// Display name.
        name: String,
    },
    /// Rename a tag.
    Rename {
        /// Tag identifier.
        id: String,
        /// New display name.
        name: String,
    },
    /// Delete a tag.
    Delete {
        /// Tag identifier.
        id: String,
    },
    /// Resolve comma-separated names to IDs, creating missing tags.
    Resolve {
        /// Comma-separated tag names.
        text: String,
    },
}

/// Paging flags shared by list commands.
#[derive(Debug, Clone, Default, Args)]
pub struct PageArgs {
    /// One-based page number.
    #[arg(long, value_name = "n")]
    pub page: Option<u32>,
    /// Records per page.
    #[arg(long = "page-size", value_name = "n")]
    pub page_size: Option<u32>,
}

/// Video operations.
#[derive(Debug, Clone, Subcommand)]
pub enum VideosCommand {
    /// List one page of videos.
    List(PageArgs),
    /// Show one video.
    Show {
        /// Video identifier.
        id: String,
    },
    /// Create a video.
    Create(VideoCreateArgs),
    /// Update selected fields of a video.
    Update(VideoUpdateArgs),
    /// Delete a video.
    Delete {
        /// Video identifier.
        id: String,
    },
}

/// Fields for `videos create`.
#[derive(Debug, Clone, Args)]
pub struct VideoCreateArgs {
    /// Display title.
    #[arg(long)]
    pub title: String,
    /// YouTube URL to embed.
    #[arg(long = "youtube-url", value_name = "url")]
    pub youtube_url: String,
    /// Long-form description.
    #[arg(long)]
    pub description: Option<String>,
    /// Thumbnail URL.
    #[arg(long, value_name = "url")]
    pub thumbnail: Option<String>,
    /// Mark as featured.
    #[arg(long)]
    pub featured: bool,
    /// Mark as recommended.
    #[arg(long)]
    pub recommended: bool,
    /// Comma-separated tag names.
    #[arg(long, value_name = "text")]
    pub tags: Option<String>,
}

/// Fields for `videos update`. Omitted flags leave the field unchanged.
#[derive(Debug, Clone, Args)]
pub struct VideoUpdateArgs {
    /// Video identifier.
    pub id: String,
    /// New title.
    #[arg(long)]
    pub title: Option<String>,
    /// New YouTube URL.
    #[arg(long = "youtube-url", value_name = "url")]
    pub youtube_url: Option<String>,
    /// New description; pass an empty string to clear it.
    #[arg(long)]
    pub description: Option<String>,
    /// New thumbnail URL; pass an empty string to clear it.
    #[arg(long, value_name = "url")]
    pub thumbnail: Option<String>,
    /// Featured flag.
    #[arg(long, value_name = "bool")]
    pub featured: Option<bool>,
    /// Recommended flag.
    #[arg(long, value_name = "bool")]
    pub recommended: Option<bool>,
    /// Replacement tag names; an empty string clears every tag.
    #[arg(long, value_name = "text")]
    pub tags: Option<String>,
}

/// Artwork operations.
#[derive(Debug, Clone, Subcommand)]
pub enum ArtworksCommand {
    /// List one page of artworks.
    List(PageArgs),
    /// Show one artwork.
    Show {
        /// Artwork identifier.
        id: String,
    },
    /// Create an artwork from an image file.
    Create(ArtworkCreateArgs),
    /// Update selected fields of an artwork.
    Update(ArtworkUpdateArgs),
    /// Delete an artwork.
    Delete {
        /// Artwork identifier.
        id: String,
    },
}

/// Fields for `artworks create`.
#[derive(Debug, Clone, Args)]
pub struct ArtworkCreateArgs {
    /// Display title.
    #[arg(long)]
    pub title: String,
    /// Image file to upload.
    #[arg(long, value_name = "path")]
    pub image: PathBuf,
    /// Body text.
    #[arg(long)]
    pub content: Option<String>,
    /// Mark as featured.
    #[arg(long)]
    pub featured: bool,
    /// Keep the artwork off the public site.
    #[arg(long)]
    pub unpublished: bool,
    /// Comma-separated tag names.
    #[arg(long, value_name = "text")]
    pub tags: Option<String>,
}

/// Fields for `artworks update`. Omitted flags are not sent.
#[derive(Debug, Clone, Args)]
pub struct ArtworkUpdateArgs {
    /// Artwork identifier.
    pub id: String,
    /// New title.
    #[arg(long)]
    pub title: Option<String>,
    /// New body text; pass an empty string to clear it.
    #[arg(long)]
    pub content: Option<String>,
    /// Featured flag.
    #[arg(long, value_name = "bool")]
    pub featured: Option<bool>,
    /// Published flag.
    #[arg(long, value_name = "bool")]
    pub published: Option<bool>,
    /// Replacement tag names; an empty string clears every tag.
    #[arg(long, value_name = "text")]
    pub tags: Option<String>,
    /// Replacement image file.
    #[arg(long, value_name = "path")]
    pub image: Option<PathBuf>,
}

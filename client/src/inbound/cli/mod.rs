//! Operator CLI over [`AdminClient`].
//!
//! Parsing lives in `args`; this module turns parsed commands into client
//! calls and renders the results as plain text.

mod args;
mod image;
mod render;

use std::io::{self, Write};
use std::path::PathBuf;

use pagination::{DEFAULT_PAGE, PageRequest, PageRequestError};

pub use self::args::{
    ArtworkCreateArgs, ArtworkUpdateArgs, ArtworksCommand, Cli, Command, PageArgs, TagsCommand,
    VideoCreateArgs, VideoUpdateArgs, VideosCommand,
};
use self::image::read_image;
use crate::domain::ports::{ApiTransport, ClientError, FilePart, SessionProvider};
use crate::domain::{
    AdminClient, ArtworkId, ArtworkUpdate, NewArtwork, NewVideo, TagId, VideoId, VideoUpdate,
};

/// Failures surfaced by CLI commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The content API call failed.
    #[error(transparent)]
    Client(#[from] ClientError),
    /// Paging flags were out of range.
    #[error(transparent)]
    Page(#[from] PageRequestError),
    /// An image file could not be read.
    #[error("failed to read image '{}': {source}", .path.display())]
    Image {
        /// Path given on the command line.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// Output could not be written.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl CliError {
    /// Message shown to the operator; API errors use their display projection.
    pub fn display_message(&self) -> String {
        match self {
            Self::Client(error) => error.display_message(),
            other => other.to_string(),
        }
    }
}

/// Execute one command against `client`, writing results to `out`.
///
/// `default_page_size` applies to list commands that omit `--page-size`.
///
/// # Errors
///
/// Returns [`CliError`] when the API call fails, flags are invalid, an image
/// cannot be read or output cannot be written.
pub async fn run<T, S, W>(
    command: Command,
    client: &AdminClient<T, S>,
    default_page_size: u32,
    out: &mut W,
) -> Result<(), CliError>
where
    T: ApiTransport,
    S: SessionProvider,
    W: Write,
{
    match command {
        Command::Tags(command) => run_tags(command, client, out).await,
        Command::Videos(command) => run_videos(command, client, default_page_size, out).await,
        Command::Artworks(command) => run_artworks(command, client, default_page_size, out).await,
    }
}

async fn run_tags<T, S, W>(
    command: TagsCommand,
    client: &AdminClient<T, S>,
    out: &mut W,
) -> Result<(), CliError>
where
    T: ApiTransport,
    S: SessionProvider,
    W: Write,
{
    let tags = client.tags();
    match command {
        TagsCommand::List => render::tags(out, &tags.list_tags().await?)?,
        TagsCommand::Create { name } => render::tag(out, &tags.create_tag(&name).await?)?,
        TagsCommand::Rename { id, name } => {
            render::tag(out, &tags.update_tag(&TagId::new(id), &name).await?)?;
        }
        TagsCommand::Delete { id } => {
            render::deleted(out, tags.delete_tag(&TagId::new(id)).await?)?;
        }
        TagsCommand::Resolve { text } => {
            render::tag_ids(out, &client.resolve_tag_text(&text).await?)?;
        }
    }
    Ok(())
}

async fn run_videos<T, S, W>(
    command: VideosCommand,
    client: &AdminClient<T, S>,
    default_page_size: u32,
    out: &mut W,
) -> Result<(), CliError>
where
    T: ApiTransport,
    S: SessionProvider,
    W: Write,
{
    let videos = client.videos();
    match command {
        VideosCommand::List(paging) => {
            let request = page_request(&paging, default_page_size)?;
            render::video_page(out, &videos.list_videos(request).await?)?;
        }
        VideosCommand::Show { id } => {
            render::video(out, &videos.get_video(&VideoId::new(id)).await?)?;
        }
        VideosCommand::Create(args) => {
            let tags = args.tags.clone();
            let video = new_video(args);
            let created = match tags {
                Some(text) => client.create_video_with_tags(video, &text).await?,
                None => videos.create_video(&video).await?,
            };
            render::video(out, &created)?;
        }
        VideosCommand::Update(args) => {
            let id = VideoId::new(args.id.as_str());
            let tags = args.tags.clone();
            let update = video_update(args);
            let updated = match tags {
                Some(text) => client.update_video_with_tags(&id, update, &text).await?,
                None => videos.update_video(&id, &update).await?,
            };
            render::video(out, &updated)?;
        }
        VideosCommand::Delete { id } => {
            render::deleted(out, videos.delete_video(&VideoId::new(id)).await?)?;
        }
    }
    Ok(())
}

async fn run_artworks<T, S, W>(
    command: ArtworksCommand,
    client: &AdminClient<T, S>,
    default_page_size: u32,
    out: &mut W,
) -> Result<(), CliError>
where
    T: ApiTransport,
    S: SessionProvider,
    W: Write,
{
    let artworks = client.artworks();
    match command {
        ArtworksCommand::List(paging) => {
            let request = page_request(&paging, default_page_size)?;
            render::artwork_page(out, &artworks.list_artworks(request).await?)?;
        }
        ArtworksCommand::Show { id } => {
            render::artwork(out, &artworks.get_artwork(&ArtworkId::new(id)).await?)?;
        }
        ArtworksCommand::Create(args) => {
            let tags = args.tags.clone();
            let artwork = new_artwork(args)?;
            let created = match tags {
                Some(text) => client.create_artwork_with_tags(artwork, &text).await?,
                None => artworks.create_artwork(&artwork).await?,
            };
            render::artwork(out, &created)?;
        }
        ArtworksCommand::Update(args) => {
            let id = ArtworkId::new(args.id.as_str());
            let tags = args.tags.clone();
            let update = artwork_update(args)?;
            let updated = match tags {
                Some(text) => client.update_artwork_with_tags(&id, update, &text).await?,
                None => artworks.update_artwork(&id, &update).await?,
            };
            render::artwork(out, &updated)?;
        }
        ArtworksCommand::Delete { id } => {
            render::deleted(out, artworks.delete_artwork(&ArtworkId::new(id)).await?)?;
        }
    }
    Ok(())
}

fn page_request(paging: &PageArgs, default_page_size: u32) -> Result<PageRequest, CliError> {
    Ok(PageRequest::new(
        paging.page.unwrap_or(DEFAULT_PAGE),
        paging.page_size.unwrap_or(default_page_size),
    )?)
}

fn new_video(args: VideoCreateArgs) -> NewVideo {
    NewVideo {
        description: args.description,
        thumbnail: args.thumbnail,
        is_featured: Some(args.featured),
        is_recommended: Some(args.recommended),
        ..NewVideo::new(args.title, args.youtube_url)
    }
}

fn video_update(args: VideoUpdateArgs) -> VideoUpdate {
    VideoUpdate {
        title: args.title,
        youtube_url: args.youtube_url,
        description: args.description,
        thumbnail: args.thumbnail,
        is_featured: args.featured,
        is_recommended: args.recommended,
        tag_ids: None,
    }
}

fn new_artwork(args: ArtworkCreateArgs) -> Result<NewArtwork, CliError> {
    let image = load_image(args.image)?;
    Ok(NewArtwork {
        content: args.content,
        is_featured: args.featured,
        is_published: !args.unpublished,
        ..NewArtwork::new(args.title, image)
    })
}

fn artwork_update(args: ArtworkUpdateArgs) -> Result<ArtworkUpdate, CliError> {
    let image = args.image.map(load_image).transpose()?;
    Ok(ArtworkUpdate {
        title: args.title,
        content: args.content,
        is_featured: args.featured,
        is_published: args.published,
        tag_ids: None,
        image,
    })
}

fn load_image(path: PathBuf) -> Result<FilePart, CliError> {
    read_image(&path).map_err(|source| CliError::Image { path, source })
}

//! Domain types, services and ports for the content admin API.
//!
//! Purpose: give callers typed operations over tags, videos and artworks
//! without exposing HTTP details. Services depend only on the ports in
//! [`ports`]; concrete adapters live under `crate::outbound`.
//!
//! Public surface:
//! - AdminClient: facade bundling every service with the tag resolver.
//! - TagService, VideoService, ArtworkService: per-resource operations.
//! - TagResolver: turns free-text tag names into tag IDs.
//! - ApiError: normalised server failure with a display projection.
//! - AccessToken: bearer credential that never prints its secret.

pub mod ports;

mod admin_client;
mod api_caller;
mod api_error;
mod artwork;
mod artwork_service;
mod auth;
mod ids;
mod tag;
mod tag_resolver;
mod tag_service;
mod video;
mod video_service;

pub use self::admin_client::AdminClient;
pub use self::api_caller::DeleteOutcome;
pub use self::api_error::{ApiError, FALLBACK_ERROR_MESSAGE};
pub use self::artwork::{Artwork, ArtworkUpdate, NewArtwork};
pub use self::artwork_service::ArtworkService;
pub use self::auth::{AccessToken, AccessTokenValidationError};
pub use self::ids::{ArtworkId, TagId, VideoId};
pub use self::tag::{Tag, TagAssignment, TagDraft, TagUsage, parse_tag_text, tag_text};
pub use self::tag_resolver::TagResolver;
pub use self::tag_service::TagService;
pub use self::video::{NewVideo, Video, VideoUpdate};
pub use self::video_service::VideoService;

//! Typed data-access layer for the content admin API.
//!
//! The crate follows a ports-and-adapters layout:
//!
//! - [`domain`]: records, per-resource services, the tag resolver and the
//!   [`domain::AdminClient`] facade, written against the ports in
//!   [`domain::ports`].
//! - [`outbound`]: the reqwest transport and the in-memory session.
//! - [`inbound`]: the operator CLI.
//! - [`config`]: OrthoConfig-backed settings.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

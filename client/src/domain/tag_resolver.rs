//! Resolve free-text tag names into tag identifiers.
//!
//! The resolver reads the whole taxonomy once per call, matches names
//! case-insensitively, and creates whatever is missing. Names are handled
//! strictly in order so a name repeated within one batch reuses the tag
//! created for its first occurrence.
//!
//! Creation is not transactional. When a create fails part-way through a
//! batch the call returns that error and tags created earlier in the same
//! batch stay on the server.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use super::ports::{ClientError, TagDirectory};
use super::{Tag, TagId};

/// Converts batches of tag names into tag identifiers.
pub struct TagResolver<D> {
    directory: Arc<D>,
}

impl<D> Clone for TagResolver<D> {
    fn clone(&self) -> Self {
        Self {
            directory: Arc::clone(&self.directory),
        }
    }
}

impl<D> TagResolver<D>
where
    D: TagDirectory,
{
    /// Create a resolver over the given tag directory.
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }

    /// Resolve `names` to tag IDs, creating tags that do not exist yet.
    ///
    /// Names are trimmed and blanks dropped; the returned IDs line up with the
    /// remaining names one-to-one, duplicates included. An empty batch
    /// returns immediately without touching the network.
    ///
    /// # Errors
    ///
    /// Returns the list error if the taxonomy cannot be read (nothing is
    /// created), or the first create error (earlier creations are kept).
    pub async fn resolve<N>(&self, names: &[N]) -> Result<Vec<TagId>, ClientError>
    where
        N: AsRef<str>,
    {
        let requested: Vec<&str> = names
            .iter()
            .map(|name| name.as_ref().trim())
            .filter(|name| !name.is_empty())
            .collect();
        if requested.is_empty() {
            return Ok(Vec::new());
        }

        debug!(requested = requested.len(), "resolving tag names");
        let existing = self.directory.list_tags().await?;
        let mut by_name: HashMap<String, Tag> = existing
            .into_iter()
            .map(|tag| (tag.name.to_lowercase(), tag))
            .collect();

        let mut ids = Vec::with_capacity(requested.len());
        let mut created = 0_usize;
        for name in requested {
            let key = name.to_lowercase();
            if let Some(tag) = by_name.get(&key) {
                ids.push(tag.id.clone());
                continue;
            }

            let tag = match self.directory.create_tag(name).await {
                Ok(tag) => tag,
                Err(error) => {
                    warn!(name, created, error = %error, "tag creation failed; earlier creations are kept");
                    return Err(error);
                }
            };
            debug!(name, id = %tag.id, "created missing tag");
            created += 1;
            ids.push(tag.id.clone());
            // The server may normalise the name; keep both spellings resolvable.
            by_name.insert(tag.name.to_lowercase(), tag.clone());
            by_name.entry(key).or_insert(tag);
        }

        Ok(ids)
    }
}

#[cfg(test)]
#[path = "tag_resolver_tests.rs"]
mod tests;

//! Port through which the tag resolver reads and grows the taxonomy.

use async_trait::async_trait;

use super::ClientError;
use crate::domain::Tag;

/// Read-all and create operations over the tag taxonomy.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TagDirectory: Send + Sync {
    /// Every existing tag, unpaginated.
    async fn list_tags(&self) -> Result<Vec<Tag>, ClientError>;

    /// Create a tag with exactly the given name.
    async fn create_tag(&self, name: &str) -> Result<Tag, ClientError>;
}

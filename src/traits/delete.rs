//! Delete trait for removing entities.

use async_trait::async_trait;

use crate::client::DocsClient;
use crate::error::Result;
use crate::traits::Resource;

/// Delete an entity by id.
#[async_trait]
pub trait Delete: Resource {
    /// # Errors
    ///
    /// Returns [`DocsError::MissingField`](crate::DocsError::MissingField)
    /// before any request when `id` is blank, or an error if the entity is
    /// not found or the request fails.
    async fn delete(client: &DocsClient, id: &str) -> Result<()> {
        client.delete(&Self::checked_path(id)?).await
    }
}

//! Update trait for modifying entities.

use async_trait::async_trait;

use crate::client::DocsClient;
use crate::error::Result;
use crate::traits::Resource;

/// Update an existing entity.
///
/// The entity must carry its id. Only fields that are set are sent.
///
/// # Example
///
/// ```ignore
/// use docsapi::{Category, DocsClient, Update};
///
/// let client = DocsClient::from_env()?;
/// let category = Category {
///     id: Some("5214c77c45667acd25394b51".to_string()),
///     name: Some("Renamed".to_string()),
///     ..Default::default()
/// };
/// let updated = category.update(&client, true).await?;
/// ```
#[async_trait]
pub trait Update: Resource {
    /// Update the entity and return it, or the server's copy when
    /// `reload` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity has no id, is not found, or the
    /// request fails.
    async fn update(self, client: &DocsClient, reload: bool) -> Result<Self> {
        client.send_update(self, reload).await
    }
}

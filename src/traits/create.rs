//! Create trait for new entities.

use async_trait::async_trait;

use crate::client::DocsClient;
use crate::error::Result;
use crate::status;
use crate::traits::Resource;

/// Create a new entity.
///
/// Without `reload` the server only reports the new id, which is assigned
/// to the entity that was sent. With `reload` the server returns the
/// stored entity, including server-side defaults, and that is returned
/// instead.
///
/// Creation is not idempotent: repeated calls create duplicates.
///
/// # Example
///
/// ```ignore
/// use docsapi::{Collection, Create, DocsClient};
///
/// let client = DocsClient::from_env()?;
/// let created = Collection::new("site-id", "Guides").create(&client, false).await?;
/// println!("new id: {:?}", created.id);
/// ```
#[async_trait]
pub trait Create: Resource {
    /// Status codes a successful create answers with.
    fn expected_status(reload: bool) -> &'static [u16] {
        if reload {
            status::OK
        } else {
            status::CREATED
        }
    }

    /// Create the entity.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    async fn create(self, client: &DocsClient, reload: bool) -> Result<Self> {
        client
            .send_create(self, reload, Self::expected_status(reload))
            .await
    }
}

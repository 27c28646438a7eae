//! List trait for fetching collections of entities.

use async_trait::async_trait;

use crate::client::DocsClient;
use crate::collection::ResourceCollection;
use crate::error::Result;
use crate::mapper::Mapped;
use crate::params::Params;

/// List entities, optionally scoped to a parent resource.
///
/// Only one page is fetched per call; pass `page` in the parameters to
/// move through results.
///
/// # Example
///
/// ```ignore
/// use docsapi::{DocsClient, Category, List, Params};
///
/// let client = DocsClient::from_env()?;
/// let categories = Category::list(&client, "collection-id", &Params::new().page(2)).await?;
/// for category in categories.hydrated().unwrap_or_default() {
///     println!("{:?}", category.name);
/// }
/// ```
#[async_trait]
pub trait List: Sized + Send {
    /// Id of the parent resource (`str`), or `()` for top-level listings.
    type Parent: ?Sized + Sync;

    /// List one page of entities.
    ///
    /// Parameters outside the operation's allow-list are dropped. When a
    /// `fields` subset is requested the payload is returned raw.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    async fn list(
        client: &DocsClient,
        parent: &Self::Parent,
        params: &Params,
    ) -> Result<Mapped<ResourceCollection<Self>>>;
}

//! Get trait for fetching single entities.

use async_trait::async_trait;

use crate::client::DocsClient;
use crate::error::Result;

/// Fetch a single entity by id (or number, where the API accepts one).
///
/// # Example
///
/// ```ignore
/// use docsapi::{DocsClient, Category, Get};
///
/// let client = DocsClient::from_env()?;
/// if let Some(category) = Category::get(&client, "5214c77c45667acd25394b51").await? {
///     println!("{:?}", category.name);
/// }
/// ```
#[async_trait]
pub trait Get: Sized {
    /// Fetch the entity.
    ///
    /// Returns `Ok(None)` when the response carried no payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn get(client: &DocsClient, id: &str) -> Result<Option<Self>>;
}

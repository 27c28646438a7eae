//! Writable entity descriptor.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{DocsError, Result};

/// An entity that can be created, updated and deleted through a top-level
/// endpoint such as `articles` or `sites`.
///
/// Serialization must only emit fields that have been set, since the same
/// representation is sent for partial updates.
pub trait Resource: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Endpoint path relative to the API base URL.
    const ENDPOINT: &'static str;

    /// Entity name used in error messages.
    const KIND: &'static str;

    /// The server-assigned id, if known.
    fn id(&self) -> Option<&str>;

    /// Record the server-assigned id.
    fn set_id(&mut self, id: String);

    /// Path of this entity type's item endpoint.
    fn item_path(id: &str) -> String {
        format!("{}/{}", Self::ENDPOINT, urlencoding::encode(id))
    }

    /// [`item_path`](Self::item_path) for a caller-supplied id, which must
    /// not be blank.
    ///
    /// # Errors
    ///
    /// Returns [`DocsError::MissingField`] when `id` is blank.
    fn checked_path(id: &str) -> Result<String> {
        require_id(Self::KIND, "id", id).map(Self::item_path)
    }
}

/// Reject a blank id before it collapses a path onto its parent endpoint.
pub(crate) fn require_id<'a>(
    entity_type: &'static str,
    field: &'static str,
    id: &'a str,
) -> Result<&'a str> {
    if id.trim().is_empty() {
        return Err(DocsError::MissingField { entity_type, field });
    }
    Ok(id)
}

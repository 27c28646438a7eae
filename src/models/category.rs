//! Category model and trait implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::client::DocsClient;
use crate::collection::ResourceCollection;
use crate::error::Result;
use crate::mapper::Mapped;
use crate::params::{Params, DEFAULT_ALLOWED};
use crate::traits::{require_id, Create, Delete, Get, List, Resource, Update};

/// A category groups articles inside a collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Category {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Collection this category belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,

    /// Position within the collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Article sort used on the public site (`popularity`, `name`, `updatedAt`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_sort: Option<String>,

    /// `public` or `private`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_count: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_article_count: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Category {
    /// A new, unsaved category.
    pub fn new(collection_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            collection_id: Some(collection_id.into()),
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

/// Position of one category, for [`update_category_order`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOrder {
    pub id: String,
    pub order: i64,
}

impl Resource for Category {
    const ENDPOINT: &'static str = "categories";
    const KIND: &'static str = "Category";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}

#[async_trait]
impl Get for Category {
    #[tracing::instrument(skip(client))]
    async fn get(client: &DocsClient, id_or_number: &str) -> Result<Option<Self>> {
        let mapped = client
            .fetch_item(&Self::checked_path(id_or_number)?, &Params::new(), &[])
            .await?;
        Ok(mapped.hydrated())
    }
}

#[async_trait]
impl List for Category {
    /// Collection id.
    type Parent = str;

    #[tracing::instrument(skip(client, params))]
    async fn list(
        client: &DocsClient,
        collection_id: &str,
        params: &Params,
    ) -> Result<Mapped<ResourceCollection<Self>>> {
        let collection_id = require_id("Category", "collectionId", collection_id)?;
        let path = format!("collections/{}/categories", urlencoding::encode(collection_id));
        client.fetch_collection(&path, params, DEFAULT_ALLOWED).await
    }
}

impl Create for Category {}
impl Update for Category {}
impl Delete for Category {}

/// Reorder the categories of a collection.
///
/// # Errors
///
/// Returns an error if the collection is not found or the request fails.
#[tracing::instrument(skip(client, order))]
pub async fn update_category_order(
    client: &DocsClient,
    collection_id: &str,
    order: &[CategoryOrder],
) -> Result<()> {
    let collection_id = require_id("Category", "collectionId", collection_id)?;
        let path = format!("collections/{}/categories", urlencoding::encode(collection_id));
    client.put(&path, json!({ "categories": order })).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hydration_leaves_missing_fields_unset() {
        let category: Category = serde_json::from_value(json!({
            "id": "5214c77d45667acd25394b53",
            "collectionId": "5214c77c45667acd25394b51",
            "name": "Getting Started",
            "articleCount": 4,
            "description": null,
            "updatedAt": "2013-08-21T12:34:12Z"
        }))
        .unwrap();

        assert_eq!(category.id.as_deref(), Some("5214c77d45667acd25394b53"));
        assert_eq!(category.article_count, Some(4));
        assert_eq!(category.description, None);
        assert_eq!(category.created_by, None);
        assert!(category.updated_at.is_some());
        assert!(category.created_at.is_none());
    }

    #[test]
    fn test_serialize_only_set_fields() {
        let category = Category::new("col-1", "FAQ");
        let body = serde_json::to_value(&category).unwrap();
        assert_eq!(body, json!({"collectionId": "col-1", "name": "FAQ"}));
    }

    #[test]
    fn test_item_path_encodes_id() {
        assert_eq!(Category::item_path("a b"), "categories/a%20b");
    }
}

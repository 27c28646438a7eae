//! Collection model and trait implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::DocsClient;
use crate::collection::ResourceCollection;
use crate::error::Result;
use crate::mapper::Mapped;
use crate::params::{Params, COLLECTION_ALLOWED};
use crate::traits::{Create, Delete, Get, List, Resource, Update};

/// A collection is the top-level grouping of categories within a site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Collection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Site this collection is published on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// `public` or `private`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_count: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_article_count: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Collection {
    /// A new, unsaved collection.
    pub fn new(site_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            site_id: Some(site_id.into()),
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Whether the collection is visible on the public site.
    pub fn is_public(&self) -> bool {
        self.visibility.as_deref() == Some("public")
    }
}

impl Resource for Collection {
    const ENDPOINT: &'static str = "collections";
    const KIND: &'static str = "Collection";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}

#[async_trait]
impl Get for Collection {
    #[tracing::instrument(skip(client))]
    async fn get(client: &DocsClient, id_or_number: &str) -> Result<Option<Self>> {
        let mapped = client
            .fetch_item(&Self::checked_path(id_or_number)?, &Params::new(), &[])
            .await?;
        Ok(mapped.hydrated())
    }
}

#[async_trait]
impl List for Collection {
    type Parent = ();

    /// Accepts `page`, `siteId`, `visibility`, `sort`, `order` and `fields`.
    #[tracing::instrument(skip(client, params))]
    async fn list(
        client: &DocsClient,
        _parent: &(),
        params: &Params,
    ) -> Result<Mapped<ResourceCollection<Self>>> {
        client
            .fetch_collection(Self::ENDPOINT, params, COLLECTION_ALLOWED)
            .await
    }
}

impl Create for Collection {}
impl Update for Collection {}
impl Delete for Collection {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collection_visibility() {
        let collection: Collection = serde_json::from_value(json!({
            "id": "5214c77c45667acd25394b51",
            "siteId": "52404efc033be6e5ba2acf2c",
            "visibility": "public",
            "name": "Help"
        }))
        .unwrap();
        assert!(collection.is_public());
        assert!(!Collection::default().is_public());
    }

    #[test]
    fn test_new_collection_body() {
        let body = serde_json::to_value(Collection::new("site-1", "Guides")).unwrap();
        assert_eq!(body, json!({"siteId": "site-1", "name": "Guides"}));
    }
}

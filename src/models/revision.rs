//! Article revision models.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::DocsClient;
use crate::collection::ResourceCollection;
use crate::error::Result;
use crate::mapper::Mapped;
use crate::params::{Params, DEFAULT_ALLOWED};
use crate::traits::{require_id, Get, List};

/// The user who authored a revision.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Person {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl Person {
    /// "First Last", skipping whichever part is missing.
    pub fn full_name(&self) -> String {
        [self.first.as_deref(), self.last.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Revision summary returned by listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArticleRevisionRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Person>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A stored revision, including the article text at that point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArticleRevision {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Person>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[async_trait]
impl List for ArticleRevisionRef {
    /// Article id.
    type Parent = str;

    #[tracing::instrument(skip(client, params))]
    async fn list(
        client: &DocsClient,
        article_id: &str,
        params: &Params,
    ) -> Result<Mapped<ResourceCollection<Self>>> {
        let article_id = require_id("ArticleRevisionRef", "articleId", article_id)?;
        let path = format!("articles/{}/revisions", urlencoding::encode(article_id));
        client.fetch_collection(&path, params, DEFAULT_ALLOWED).await
    }
}

#[async_trait]
impl Get for ArticleRevision {
    #[tracing::instrument(skip(client))]
    async fn get(client: &DocsClient, revision_id: &str) -> Result<Option<Self>> {
        let revision_id = require_id("ArticleRevision", "id", revision_id)?;
        let path = format!("revisions/{}", urlencoding::encode(revision_id));
        let mapped = client.fetch_item(&path, &Params::new(), &[]).await?;
        Ok(mapped.hydrated())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_revision_author() {
        let revision: ArticleRevision = serde_json::from_value(json!({
            "id": "5217c6e7e4b0b1ec7ac3d0a0",
            "articleId": "521632244566c845e9b8ff1e",
            "text": "<p>v2</p>",
            "createdBy": {"id": 73423, "first": "Jane", "last": "Doe"}
        }))
        .unwrap();

        let author = revision.created_by.unwrap();
        assert_eq!(author.full_name(), "Jane Doe");
        assert_eq!(author.email, None);
    }

    #[test]
    fn test_full_name_partial() {
        let person = Person {
            last: Some("Doe".to_string()),
            ..Default::default()
        };
        assert_eq!(person.full_name(), "Doe");
    }
}

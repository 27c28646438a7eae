//! Article models and trait implementations.
//!
//! [`Article`] is the full document. Listings return the lighter
//! [`ArticleRef`] and search returns [`ArticleSearch`] hits.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::client::DocsClient;
use crate::collection::ResourceCollection;
use crate::error::Result;
use crate::mapper::{self, Mapped};
use crate::models::asset::ensure_file;
use crate::params::{Params, Query, ARTICLE_ALLOWED, DEFAULT_ALLOWED, SEARCH_ALLOWED};
use crate::status;
use crate::traits::{require_id, Create, Delete, Get, List, Resource, Update};
use crate::transport::FormPart;

/// A documentation article.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Article {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// `published` or `notpublished`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_draft: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Article body (HTML).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Ids of the categories the article is filed under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,

    /// Ids of related articles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub popularity: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_count: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_published_at: Option<DateTime<Utc>>,
}

impl Article {
    /// A new, unsaved article.
    pub fn new(
        collection_id: impl Into<String>,
        name: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            collection_id: Some(collection_id.into()),
            name: Some(name.into()),
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn is_published(&self) -> bool {
        self.status.as_deref() == Some("published")
    }
}

/// Article summary returned by listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArticleRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_draft: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popularity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_published_at: Option<DateTime<Utc>>,
}

/// A search hit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArticleSearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Plain-text excerpt around the match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_draft: Option<bool>,
}

/// A local file to import as a new article.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadArticle {
    pub collection_id: String,
    pub file: PathBuf,
    pub category_id: Option<String>,
    pub slug: Option<String>,
    /// Source format, e.g. `markdown` or `html`.
    pub kind: Option<String>,
}

impl UploadArticle {
    pub fn new(collection_id: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            collection_id: collection_id.into(),
            file: file.into(),
            ..Default::default()
        }
    }

    fn form_parts(&self, reload: bool) -> Vec<FormPart> {
        let mut parts = vec![
            FormPart::text("collectionId", &self.collection_id),
            FormPart::file("file", &self.file),
        ];
        let optional = [
            ("categoryId", &self.category_id),
            ("slug", &self.slug),
            ("type", &self.kind),
        ];
        parts.extend(
            optional
                .into_iter()
                .filter_map(|(name, value)| value.as_ref().map(|v| FormPart::text(name, v))),
        );
        if reload {
            parts.push(FormPart::text("reload", "true"));
        }
        parts
    }
}

impl Resource for Article {
    const ENDPOINT: &'static str = "articles";
    const KIND: &'static str = "Article";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}

#[async_trait]
impl Get for Article {
    async fn get(client: &DocsClient, id_or_number: &str) -> Result<Option<Self>> {
        get_article(client, id_or_number, false).await
    }
}

#[async_trait]
impl Create for Article {
    fn expected_status(_reload: bool) -> &'static [u16] {
        status::OK_OR_CREATED
    }
}

impl Update for Article {}
impl Delete for Article {}

#[async_trait]
impl List for ArticleRef {
    /// Category id.
    type Parent = str;

    #[tracing::instrument(skip(client, params))]
    async fn list(
        client: &DocsClient,
        category_id: &str,
        params: &Params,
    ) -> Result<Mapped<ResourceCollection<Self>>> {
        let category_id = require_id("ArticleRef", "categoryId", category_id)?;
        let path = format!("categories/{}/articles", urlencoding::encode(category_id));
        client.fetch_collection(&path, params, DEFAULT_ALLOWED).await
    }
}

/// Fetch an article by id or number, optionally its unpublished draft.
///
/// # Errors
///
/// Returns an error if the article is not found or the request fails.
#[tracing::instrument(skip(client))]
pub async fn get_article(
    client: &DocsClient,
    id_or_number: &str,
    draft: bool,
) -> Result<Option<Article>> {
    let params = Params::new().draft(draft);
    let mapped = client
        .fetch_item(&Article::checked_path(id_or_number)?, &params, ARTICLE_ALLOWED)
        .await?;
    Ok(mapped.hydrated())
}

/// List articles related to the given article.
///
/// # Errors
///
/// Returns an error if the request fails.
#[tracing::instrument(skip(client, params))]
pub async fn get_related_articles(
    client: &DocsClient,
    article_id: &str,
    params: &Params,
) -> Result<Mapped<ResourceCollection<ArticleRef>>> {
    let article_id = require_id("Article", "articleId", article_id)?;
    let path = format!("articles/{}/related", urlencoding::encode(article_id));
    client.fetch_collection(&path, params, DEFAULT_ALLOWED).await
}

/// Search articles. Without a `query` parameter every article matches.
///
/// # Errors
///
/// Returns an error if the request fails.
#[tracing::instrument(skip(client, params))]
pub async fn search_articles(
    client: &DocsClient,
    params: &Params,
) -> Result<Mapped<ResourceCollection<ArticleSearch>>> {
    let mut params = params.clone();
    if params.sanitize(&["query"]).is_empty() {
        params = params.query("*");
    }
    client
        .fetch_collection("search/articles", &params, SEARCH_ALLOWED)
        .await
}

/// Record `count` additional views of an article.
///
/// # Errors
///
/// Returns an error if the article is not found or the request fails.
#[tracing::instrument(skip(client))]
pub async fn update_view_count(client: &DocsClient, article_id: &str, count: u64) -> Result<()> {
    let path = format!("{}/views", Article::checked_path(article_id)?);
    client.put(&path, json!({ "count": count })).await?;
    Ok(())
}

/// Save a draft of an article without publishing it.
///
/// # Errors
///
/// Returns an error if the article is not found or the request fails.
#[tracing::instrument(skip(client, text))]
pub async fn save_article_draft(client: &DocsClient, article_id: &str, text: &str) -> Result<()> {
    let path = format!("{}/drafts", Article::checked_path(article_id)?);
    client.put(&path, json!({ "text": text })).await?;
    Ok(())
}

/// Discard the draft of an article.
///
/// # Errors
///
/// Returns an error if the article is not found or the request fails.
#[tracing::instrument(skip(client))]
pub async fn delete_article_draft(client: &DocsClient, article_id: &str) -> Result<()> {
    let path = format!("{}/drafts", Article::checked_path(article_id)?);
    client.delete(&path).await
}

/// Import a local file as a new article.
///
/// With `reload` the created article is returned; otherwise `Ok(None)`
/// signals success.
///
/// # Errors
///
/// Returns [`DocsError::FileNotFound`](crate::DocsError::FileNotFound)
/// before any request when the file does not exist, or an error if the
/// upload fails.
#[tracing::instrument(skip(client, upload), fields(file = %upload.file.display()))]
pub async fn upload_article(
    client: &DocsClient,
    upload: &UploadArticle,
    reload: bool,
) -> Result<Option<Article>> {
    ensure_file(&upload.file).await?;

    let expected = if reload { status::OK } else { status::CREATED };
    let response = client
        .post_multipart("articles/upload", upload.form_parts(reload), expected)
        .await?;

    if !reload {
        return Ok(None);
    }
    Ok(mapper::map_item(&response.body, &Query::default())?.hydrated())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::FormValue;

    #[test]
    fn test_article_hydration() {
        let article: Article = serde_json::from_value(json!({
            "id": "521632244566c845e9b8ff1e",
            "number": 93,
            "status": "published",
            "name": "Welcome",
            "categories": ["5214c77d45667acd25394b53"],
            "popularity": 4.5,
            "lastPublishedAt": "2013-08-22T16:00:00Z"
        }))
        .unwrap();

        assert!(article.is_published());
        assert_eq!(article.number, Some(93));
        assert_eq!(article.categories.as_deref(), Some(&["5214c77d45667acd25394b53".to_string()][..]));
        assert_eq!(article.text, None);
        assert_eq!(article.related, None);
    }

    #[test]
    fn test_upload_form_parts() {
        let mut upload = UploadArticle::new("col-1", "/tmp/guide.md");
        upload.slug = Some("guide".to_string());

        let parts = upload.form_parts(true);
        let names: Vec<_> = parts.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["collectionId", "file", "slug", "reload"]);
        assert_eq!(parts[1].value, FormValue::File(PathBuf::from("/tmp/guide.md")));

        let names: Vec<_> = upload.form_parts(false).into_iter().map(|p| p.name).collect();
        assert!(!names.contains(&"reload".to_string()));
    }

    #[test]
    fn test_create_accepts_ok_or_created() {
        assert_eq!(Article::expected_status(false), &[200, 201]);
        assert_eq!(Article::expected_status(true), &[200, 201]);
    }
}

//! Asset uploads (article images, site logos and icons).

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::client::DocsClient;
use crate::error::{DocsError, Result};
use crate::status;
use crate::traits::require_id;
use crate::transport::FormPart;

/// A file to attach to an article.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleAsset {
    pub article_id: String,
    /// `image` or `attachment`.
    pub asset_type: String,
    pub file: PathBuf,
    /// Public link, set once uploaded.
    pub file_link: Option<String>,
}

impl ArticleAsset {
    pub fn new(
        article_id: impl Into<String>,
        asset_type: impl Into<String>,
        file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            article_id: article_id.into(),
            asset_type: asset_type.into(),
            file: file.into(),
            file_link: None,
        }
    }
}

/// A file used by site settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsAsset {
    /// `logo`, `favicon` or `touchicon`.
    pub asset_type: String,
    pub site_id: String,
    pub file: PathBuf,
    /// Public link, set once uploaded.
    pub file_link: Option<String>,
}

impl SettingsAsset {
    pub fn new(
        site_id: impl Into<String>,
        asset_type: impl Into<String>,
        file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            asset_type: asset_type.into(),
            site_id: site_id.into(),
            file: file.into(),
            file_link: None,
        }
    }
}

#[derive(Deserialize)]
struct UploadedAsset {
    filelink: Option<String>,
}

/// Fail unless `path` is an existing file.
pub(crate) async fn ensure_file(path: &Path) -> Result<()> {
    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_file() => Ok(()),
        _ => Err(DocsError::FileNotFound(path.to_path_buf())),
    }
}

async fn upload(client: &DocsClient, path: &str, parts: Vec<FormPart>) -> Result<Option<String>> {
    let response = client.post_multipart(path, parts, status::CREATED).await?;
    let file_link = serde_json::from_str::<UploadedAsset>(&response.body)
        .ok()
        .and_then(|uploaded| uploaded.filelink);
    if file_link.is_none() {
        tracing::warn!(path, "asset stored but response carried no filelink");
    }
    Ok(file_link)
}

/// Upload a file for use in an article and record its public link.
///
/// # Errors
///
/// Fails before any request when the file is missing or `article_id` or
/// `asset_type` is empty; otherwise returns an error if the upload fails.
#[tracing::instrument(skip(client, asset), fields(file = %asset.file.display()))]
pub async fn create_article_asset(
    client: &DocsClient,
    mut asset: ArticleAsset,
) -> Result<ArticleAsset> {
    ensure_file(&asset.file).await?;
    require_id("ArticleAsset", "articleId", &asset.article_id)?;
    require_id("ArticleAsset", "assetType", &asset.asset_type)?;

    let parts = vec![
        FormPart::text("articleId", &asset.article_id),
        FormPart::text("assetType", &asset.asset_type),
        FormPart::file("file", &asset.file),
    ];
    asset.file_link = upload(client, "assets/article", parts).await?;
    Ok(asset)
}

/// Upload a site settings file (logo, favicon, touch icon) and record its
/// public link.
///
/// # Errors
///
/// Fails before any request when the file is missing or `asset_type` or
/// `site_id` is empty; otherwise returns an error if the upload fails.
#[tracing::instrument(skip(client, asset), fields(file = %asset.file.display()))]
pub async fn create_settings_asset(
    client: &DocsClient,
    mut asset: SettingsAsset,
) -> Result<SettingsAsset> {
    ensure_file(&asset.file).await?;
    require_id("SettingsAsset", "assetType", &asset.asset_type)?;
    require_id("SettingsAsset", "siteId", &asset.site_id)?;

    let parts = vec![
        FormPart::text("assetType", &asset.asset_type),
        FormPart::text("siteId", &asset.site_id),
        FormPart::file("file", &asset.file),
    ];
    asset.file_link = upload(client, "assets/settings", parts).await?;
    Ok(asset)
}

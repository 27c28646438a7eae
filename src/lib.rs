//! Help Scout Docs API client library.
//!
//! A Rust library for the Docs REST API (sites, collections, categories,
//! articles, revisions and assets) using a trait-based architecture where
//! each operation (Get, List, Create, Update, Delete) is a trait that
//! entity types implement.
//!
//! # Quick Start
//!
//! ```no_run
//! use docsapi::{Article, Category, Collection, Create, DocsClient, Get, List, Params};
//!
//! #[tokio::main]
//! async fn main() -> docsapi::Result<()> {
//!     // Create client from environment variables
//!     let client = DocsClient::from_env()?;
//!
//!     // List the first page of collections
//!     let collections = Collection::list(&client, &(), &Params::new().page(1)).await?;
//!     for collection in collections.hydrated().unwrap_or_default() {
//!         println!("{:?}", collection.name);
//!     }
//!
//!     // Fetch a category and file a new article under it
//!     if let Some(category) = Category::get(&client, "5214c77d45667acd25394b53").await? {
//!         let mut article = Article::new(category.collection_id.unwrap_or_default(), "Hello", "<p>Hi</p>");
//!         article.categories = category.id.map(|id| vec![id]);
//!         let article = article.create(&client, false).await?;
//!         println!("created {:?}", article.id);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Every call goes through the same pipeline in [`DocsClient`]:
//!
//! 1. [`Params::sanitize`] reduces caller parameters to the operation's
//!    allow-list.
//! 2. A [`Transport`] performs the authenticated request.
//! 3. [`validate`] turns unexpected status codes into [`DocsError::Api`].
//! 4. Reads go through [`map_item`] / [`map_collection`]; creates read the
//!    new id with [`extract_id`] unless the entity is reloaded.
//!
//! # Configuration
//!
//! [`ClientConfig::from_env`] reads:
//!
//! - `HELPSCOUT_DOCS_API_KEY` (required) - Your Docs API key
//! - `HELPSCOUT_DOCS_API_URL` (optional) - Base URL (defaults to `https://docsapi.helpscout.net/v1/`)
//! - `HELPSCOUT_DOCS_USER_AGENT` (optional) - User agent override
//! - `HELPSCOUT_DOCS_DEBUG` / `HELPSCOUT_DOCS_DEBUG_DIR` (optional) - Request debug log

pub mod cli;
mod client;
mod collection;
mod config;
mod debug;
mod error;
mod location;
mod mapper;
mod models;
pub mod output;
mod params;
mod status;
mod traits;
mod transport;

// Re-export core types
pub use client::DocsClient;
pub use collection::ResourceCollection;
pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_API_URL, DEFAULT_TIMEOUT, USER_AGENT};
pub use debug::{DebugLog, LOG_FILE_NAME};
pub use error::{DocsError, Result};
pub use location::extract_id;
pub use mapper::{map_collection, map_item, unwrap_envelope, Mapped};
pub use params::{
    ParamValue, Params, Query, ARTICLE_ALLOWED, COLLECTION_ALLOWED, DEFAULT_ALLOWED,
    SEARCH_ALLOWED,
};
pub use status::{validate, CREATED, OK, OK_OR_CREATED};
pub use transport::{
    FormPart, FormValue, HttpMethod, HttpRequest, HttpResponse, RequestBody, ReqwestTransport,
    Transport,
};

// Re-export traits
pub use traits::{Create, Delete, Get, List, Resource, Update};

// Re-export models
pub use models::{
    // Article types
    Article,
    ArticleRef,
    ArticleSearch,
    UploadArticle,
    // Revision types
    ArticleRevision,
    ArticleRevisionRef,
    Person,
    // Category and collection types
    Category,
    CategoryOrder,
    Collection,
    // Site types
    Site,
    // Asset types
    ArticleAsset,
    SettingsAsset,
};

// Re-export convenience functions
pub use models::{
    delete_article_draft, get_article, get_related_articles, save_article_draft, search_articles,
    update_view_count, upload_article,
};
pub use models::{create_article_asset, create_settings_asset, update_category_order};

//! Wire tests for the reqwest transport.
//!
//! Uses wiremock to stand in for the Docs API and checks what actually goes
//! over HTTP: paths, query strings, auth, bodies and multipart forms.

mod common;

use common::{wire_client, API_KEY};
use docsapi::{
    create_article_asset, create_settings_asset, delete_article_draft, get_article,
    get_related_articles, search_articles, update_category_order, update_view_count,
    ArticleAsset, ArticleRevision, ArticleRevisionRef, Category, CategoryOrder, Collection,
    Create, Delete, DocsError, Get, List, Params, SettingsAsset, Site, Update,
};
use serde_json::json;
use wiremock::matchers::{
    basic_auth, body_json, body_string_contains, header, method, path, query_param,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_list_categories_sends_auth_and_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/collections/col-1/categories"))
        .and(basic_auth(API_KEY, "X"))
        .and(header("accept", "application/json"))
        .and(header("user-agent", "docsapi-tests/1.0"))
        .and(query_param("page", "2"))
        .and(query_param("sort", "name"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "categories": {
                "page": 2,
                "pages": 3,
                "count": 52,
                "items": [
                    {"id": "cat-1", "name": "FAQ", "articleCount": 4},
                    {"id": "cat-2", "name": "Billing"}
                ]
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = wire_client(&mock_server.uri());
    let params = Params::new().page(2).sort("name");
    let categories = Category::list(&client, "col-1", &params)
        .await
        .unwrap()
        .hydrated()
        .unwrap();

    assert_eq!(categories.len(), 2);
    assert_eq!(categories.page, Some(2));
    assert_eq!(categories.count, Some(52));
    assert!(categories.has_more());
    assert_eq!(categories.items[0].article_count, Some(4));
}

#[tokio::test]
async fn test_get_article_draft() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/articles/a-1"))
        .and(query_param("draft", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "article": {"id": "a-1", "name": "Welcome", "text": "<p>draft</p>"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = wire_client(&mock_server.uri());
    let article = get_article(&client, "a-1", true).await.unwrap().unwrap();

    assert_eq!(article.text.as_deref(), Some("<p>draft</p>"));
}

#[tokio::test]
async fn test_create_category_reads_location() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/categories"))
        .and(body_json(json!({"collectionId": "col-1", "name": "FAQ"})))
        .respond_with(
            ResponseTemplate::new(201)
                .insert_header("Location", "https://docsapi.helpscout.net/v1/categories/cat-9"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = wire_client(&mock_server.uri());
    let created = Category::new("col-1", "FAQ").create(&client, false).await.unwrap();

    assert_eq!(created.id.as_deref(), Some("cat-9"));
}

#[tokio::test]
async fn test_update_collection_with_reload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v1/collections/c-1"))
        .and(body_json(json!({"id": "c-1", "name": "Guides", "reload": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "collection": {"id": "c-1", "name": "Guides", "visibility": "public"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = wire_client(&mock_server.uri());
    let collection = Collection {
        id: Some("c-1".to_string()),
        name: Some("Guides".to_string()),
        ..Default::default()
    };
    let updated = collection.update(&client, true).await.unwrap();

    assert!(updated.is_public());
}

#[tokio::test]
async fn test_delete_site() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/sites/s-1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = wire_client(&mock_server.uri());
    Site::delete(&client, "s-1").await.unwrap();
}

#[tokio::test]
async fn test_search_defaults_to_wildcard() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search/articles"))
        .and(query_param("query", "*"))
        .and(query_param("collectionId", "col-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "articles": {
                "page": 1,
                "pages": 1,
                "count": 1,
                "items": [{"id": "a-1", "name": "Welcome", "preview": "Hello"}]
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = wire_client(&mock_server.uri());
    let results = search_articles(&client, &Params::new().collection_id("col-1"))
        .await
        .unwrap()
        .hydrated()
        .unwrap();

    assert_eq!(results.items[0].preview.as_deref(), Some("Hello"));
    assert!(!results.has_more());
}

#[tokio::test]
async fn test_article_write_helpers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v1/articles/a-1/views"))
        .and(body_json(json!({"count": 3})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v1/articles/a-1/drafts"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = wire_client(&mock_server.uri());
    update_view_count(&client, "a-1", 3).await.unwrap();
    delete_article_draft(&client, "a-1").await.unwrap();
}

#[tokio::test]
async fn test_update_category_order_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v1/collections/col-1/categories"))
        .and(body_json(json!({
            "categories": [{"id": "cat-2", "order": 1}, {"id": "cat-1", "order": 2}]
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = wire_client(&mock_server.uri());
    let order = [
        CategoryOrder {
            id: "cat-2".to_string(),
            order: 1,
        },
        CategoryOrder {
            id: "cat-1".to_string(),
            order: 2,
        },
    ];
    update_category_order(&client, "col-1", &order).await.unwrap();
}

#[tokio::test]
async fn test_article_asset_upload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/assets/article"))
        .and(body_string_contains("name=\"key\""))
        .and(body_string_contains(API_KEY))
        .and(body_string_contains("name=\"articleId\""))
        .and(body_string_contains("image-bytes"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "filelink": "https://d33v4339jhl8k0.cloudfront.net/docs/assets/a-1/image.png"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), "image-bytes").unwrap();

    let client = wire_client(&mock_server.uri());
    let asset = create_article_asset(&client, ArticleAsset::new("a-1", "image", file.path()))
        .await
        .unwrap();

    assert_eq!(
        asset.file_link.as_deref(),
        Some("https://d33v4339jhl8k0.cloudfront.net/docs/assets/a-1/image.png")
    );
}

#[tokio::test]
async fn test_settings_asset_expects_created() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/assets/settings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"filelink": "x"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let file = tempfile::NamedTempFile::new().unwrap();
    let client = wire_client(&mock_server.uri());
    let err = create_settings_asset(&client, SettingsAsset::new("s-1", "logo", file.path()))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(200));
}

#[tokio::test]
async fn test_error_statuses_are_mapped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/sites/locked"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/sites/busy"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let client = wire_client(&mock_server.uri());

    let err = Site::get(&client, "locked").await.unwrap_err();
    assert!(matches!(
        err,
        DocsError::Api { status: 401, ref message } if message == "Invalid API key"
    ));

    let err = Site::get(&client, "busy").await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Docs API error (429): Throttle limit reached. Too many requests"
    );
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = wire_client(&format!("http://127.0.0.1:{port}"));
    let err = Site::list(&client, &(), &Params::new()).await.unwrap_err();

    assert!(err.is_transport());
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_revisions_list_and_get() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/articles/a-1/revisions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "revisions": {
                "page": 1,
                "pages": 1,
                "count": 1,
                "items": [{
                    "id": "r-1",
                    "articleId": "a-1",
                    "createdBy": {"id": 7, "first": "Jane", "last": "Doe"},
                    "createdAt": "2014-01-02T03:04:05Z"
                }]
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/revisions/r-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "revision": {"id": "r-1", "articleId": "a-1", "text": "<p>old</p>"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = wire_client(&mock_server.uri());
    let revisions = ArticleRevisionRef::list(&client, "a-1", &Params::new())
        .await
        .unwrap()
        .hydrated()
        .unwrap();
    let author = revisions.items[0].created_by.as_ref().unwrap();
    assert_eq!(author.full_name(), "Jane Doe");

    let revision = ArticleRevision::get(&client, "r-1").await.unwrap().unwrap();
    assert_eq!(revision.text.as_deref(), Some("<p>old</p>"));
}

#[tokio::test]
async fn test_related_articles_with_fields_are_raw() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/articles/a-1/related"))
        .and(query_param("fields", "id,name"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "articles": {"page": 1, "pages": 1, "count": 1, "items": [{"id": "a-2", "name": "Next"}]}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = wire_client(&mock_server.uri());
    let related = get_related_articles(&client, "a-1", &Params::new().fields(" id , name "))
        .await
        .unwrap();

    let raw = related.raw().unwrap();
    assert_eq!(raw["items"][0]["name"], json!("Next"));
}

//! Docs API client.
//!
//! Every operation funnels through [`DocsClient`]: parameters are
//! sanitized, the request goes out through the configured [`Transport`],
//! the status is validated, and the body is mapped into models or the new
//! resource id is read from the `Location` header. Entity-specific
//! operations are implemented via traits on the model types.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::collection::ResourceCollection;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::mapper::{self, Mapped};
use crate::params::{Params, Query};
use crate::status;
use crate::traits::Resource;
use crate::transport::{FormPart, HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport};

/// Docs API client.
///
/// Cheaply cloneable; clones share the transport and configuration.
///
/// # Example
///
/// ```no_run
/// use docsapi::{ClientConfig, DocsClient};
///
/// # fn example() -> docsapi::Result<()> {
/// // Create from environment variables
/// let client = DocsClient::from_env()?;
///
/// // Or configure explicitly
/// let config = ClientConfig::builder("your-api-key")
///     .user_agent("my-app/1.0")
///     .build()?;
/// let client = DocsClient::new(config)?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct DocsClient {
    transport: Arc<dyn Transport>,
    config: Arc<ClientConfig>,
}

impl std::fmt::Debug for DocsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocsClient")
            .field("base_url", &self.config.base_url().as_str())
            .finish_non_exhaustive()
    }
}

impl DocsClient {
    /// Create a client using the reqwest transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client from environment variables.
    ///
    /// See [`ClientConfig::from_env`].
    ///
    /// # Errors
    ///
    /// Returns an error if `HELPSCOUT_DOCS_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Create a client that sends requests through `transport`.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        self.config.base_url()
    }

    /// Execute a request and check its status.
    async fn send(&self, request: HttpRequest, expected: &[u16]) -> Result<HttpResponse> {
        if request.method != HttpMethod::Get {
            if let Some(log) = self.config.debug_log() {
                let message = request.body.describe().unwrap_or_else(|| request.path.clone());
                log.record(&message).await;
            }
        }

        let kind = request.method;
        let response = self.transport.execute(request).await?;
        status::validate(response.status, kind, expected)?;
        Ok(response)
    }

    /// GET a list endpoint and map the result.
    #[tracing::instrument(skip(self, params))]
    pub async fn fetch_collection<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &Params,
        allowed: &[&str],
    ) -> Result<Mapped<ResourceCollection<T>>> {
        let query = params.sanitize(allowed);
        let response = self
            .send(HttpRequest::get(path, query.clone()), status::OK)
            .await?;
        mapper::map_collection(&response.body, &query)
    }

    /// GET a single-item endpoint and map the result.
    #[tracing::instrument(skip(self, params))]
    pub async fn fetch_item<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &Params,
        allowed: &[&str],
    ) -> Result<Mapped<T>> {
        let query = params.sanitize(allowed);
        let response = self
            .send(HttpRequest::get(path, query.clone()), status::OK)
            .await?;
        mapper::map_item(&response.body, &query)
    }

    /// POST a new entity.
    ///
    /// Without `reload` the id from the `Location` header is assigned to
    /// `entity`; a missing header leaves the id unset. With `reload` the
    /// entity in the response body is returned, falling back to the
    /// id-only path when the body carries none.
    #[tracing::instrument(skip(self, entity), fields(kind = T::KIND))]
    pub async fn send_create<T: Resource>(
        &self,
        mut entity: T,
        reload: bool,
        expected: &[u16],
    ) -> Result<T> {
        let body = request_body(&entity, reload)?;
        let response = self
            .send(HttpRequest::post_json(T::ENDPOINT, body), expected)
            .await?;

        if reload {
            if let Some(fresh) = reloaded(&response)? {
                return Ok(fresh);
            }
        }

        match response.location_id() {
            Some(id) => entity.set_id(id),
            None => tracing::debug!("create response has no Location header"),
        }
        Ok(entity)
    }

    /// PUT an existing entity to its item endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`DocsError::MissingField`](crate::DocsError::MissingField)
    /// before any request when the entity has no id.
    #[tracing::instrument(skip(self, entity), fields(kind = T::KIND))]
    pub async fn send_update<T: Resource>(&self, entity: T, reload: bool) -> Result<T> {
        let path = T::checked_path(entity.id().unwrap_or_default())?;

        let body = request_body(&entity, reload)?;
        let response = self
            .send(HttpRequest::put_json(path, body), status::OK)
            .await?;

        if reload {
            if let Some(fresh) = reloaded(&response)? {
                return Ok(fresh);
            }
        }
        Ok(entity)
    }

    /// PUT an arbitrary JSON body, expecting 200.
    #[tracing::instrument(skip(self, body))]
    pub async fn put(&self, path: &str, body: Value) -> Result<HttpResponse> {
        self.send(HttpRequest::put_json(path, body), status::OK).await
    }

    /// DELETE a resource, expecting 200.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.send(HttpRequest::delete(path), status::OK).await?;
        Ok(())
    }

    /// POST a multipart form. The API key is sent as the `key` field.
    #[tracing::instrument(skip(self, parts))]
    pub async fn post_multipart(
        &self,
        path: &str,
        parts: Vec<FormPart>,
        expected: &[u16],
    ) -> Result<HttpResponse> {
        let mut form = Vec::with_capacity(parts.len() + 1);
        form.push(FormPart::text("key", self.config.api_key()));
        form.extend(parts);

        self.send(HttpRequest::post_multipart(path, form), expected)
            .await
    }
}

/// Serialize an entity for a write, adding `reload: true` when requested.
fn request_body<T: Resource>(entity: &T, reload: bool) -> Result<Value> {
    let mut body = serde_json::to_value(entity)?;
    if reload {
        if let Value::Object(map) = &mut body {
            map.insert("reload".to_string(), Value::Bool(true));
        }
    }
    Ok(body)
}

/// The entity returned by a write that asked for a reload.
fn reloaded<T: Resource>(response: &HttpResponse) -> Result<Option<T>> {
    let fresh = mapper::map_item::<T>(&response.body, &Query::default())?.hydrated();
    if fresh.is_none() {
        tracing::warn!(kind = T::KIND, "reload requested but response carried no entity");
    }
    Ok(fresh)
}

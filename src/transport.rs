//! HTTP transport.
//!
//! Requests and responses are plain data so the orchestration in
//! [`DocsClient`](crate::DocsClient) can run against any [`Transport`].
//! [`ReqwestTransport`] is the production implementation: it applies basic
//! authentication, content negotiation, compression, timeouts and the user
//! agent, and returns the status, headers and body untouched.

use std::fmt;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{DocsError, Result};
use crate::location;
use crate::params::Query;

/// Password sent alongside the API key; the API ignores it.
const BASIC_AUTH_PASSWORD: &str = "X";

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        })
    }
}

/// Value of a multipart form field.
#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    Text(String),
    /// A local file, opened only while the request is being sent.
    File(PathBuf),
}

/// One named multipart form field.
#[derive(Debug, Clone, PartialEq)]
pub struct FormPart {
    pub name: String,
    pub value: FormValue,
}

impl FormPart {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: FormValue::Text(value.into()),
        }
    }

    pub fn file(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            value: FormValue::File(path.into()),
        }
    }
}

/// Request payload.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(Value),
    Multipart(Vec<FormPart>),
}

impl RequestBody {
    /// One-line description for the debug log. The `key` form field is
    /// masked.
    pub fn describe(&self) -> Option<String> {
        match self {
            Self::Empty => None,
            Self::Json(value) => Some(value.to_string()),
            Self::Multipart(parts) => {
                let fields: serde_json::Map<String, Value> = parts
                    .iter()
                    .map(|part| {
                        let value = match &part.value {
                            FormValue::Text(_) if part.name == "key" => "***".to_string(),
                            FormValue::Text(text) => text.clone(),
                            FormValue::File(path) => format!("@{}", path.display()),
                        };
                        (part.name.clone(), Value::String(value))
                    })
                    .collect();
                Some(Value::Object(fields).to_string())
            }
        }
    }
}

/// An HTTP request described as plain data. `path` is relative to the
/// configured base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Query,
    pub body: RequestBody,
}

impl HttpRequest {
    pub fn get(path: impl Into<String>, query: Query) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            query,
            body: RequestBody::Empty,
        }
    }

    pub fn post_json(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: HttpMethod::Post,
            path: path.into(),
            query: Query::default(),
            body: RequestBody::Json(body),
        }
    }

    pub fn put_json(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: HttpMethod::Put,
            path: path.into(),
            query: Query::default(),
            body: RequestBody::Json(body),
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Delete,
            path: path.into(),
            query: Query::default(),
            body: RequestBody::Empty,
        }
    }

    pub fn post_multipart(path: impl Into<String>, parts: Vec<FormPart>) -> Self {
        Self {
            method: HttpMethod::Post,
            path: path.into(),
            query: Query::default(),
            body: RequestBody::Multipart(parts),
        }
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Look up a header value, ignoring the case of its name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Id of a created resource, taken from the `Location` header.
    pub fn location_id(&self) -> Option<String> {
        location::extract_id(&self.headers)
    }
}

/// Performs one authenticated HTTP round trip.
///
/// Implementations must return every well-formed HTTP response, whatever
/// its status, and reserve `Err` for failures to get one (DNS, TLS,
/// refused connections, timeouts).
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// [`Transport`] backed by a `reqwest` client.
#[derive(Clone)]
pub struct ReqwestTransport {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl ReqwestTransport {
    /// Build a transport from the client configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(config.user_agent())
            .gzip(true)
            .deflate(true)
            .connect_timeout(config.timeout())
            .timeout(config.timeout())
            .build()
            .map_err(DocsError::Http)?;

        Ok(Self {
            http,
            base_url: config.base_url().clone(),
            api_key: config.api_key().to_string(),
        })
    }

    async fn multipart_form(parts: Vec<FormPart>) -> Result<Form> {
        let mut form = Form::new();
        for part in parts {
            form = match part.value {
                FormValue::Text(text) => form.text(part.name, text),
                FormValue::File(path) => form.part(part.name, file_part(&path).await?),
            };
        }
        Ok(form)
    }
}

/// Read an upload into memory. The file handle is closed on return.
async fn file_part(path: &Path) -> Result<Part> {
    let bytes = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    Ok(Part::bytes(bytes).file_name(file_name))
}

#[async_trait]
impl Transport for ReqwestTransport {
    #[tracing::instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let url = self.base_url.join(&request.path)?;

        let builder = match request.method {
            HttpMethod::Get => self.http.get(url),
            HttpMethod::Post => self.http.post(url),
            HttpMethod::Put => self.http.put(url),
            HttpMethod::Delete => self.http.delete(url),
        }
        .basic_auth(&self.api_key, Some(BASIC_AUTH_PASSWORD))
        .header(ACCEPT, "application/json");

        let builder = if request.query.is_empty() {
            builder
        } else {
            builder.query(&request.query)
        };

        let builder = match request.body {
            RequestBody::Empty if request.method == HttpMethod::Get => {
                builder.header(CONTENT_TYPE, "application/json")
            }
            RequestBody::Empty => builder,
            RequestBody::Json(body) => builder.json(&body),
            RequestBody::Multipart(parts) => builder.multipart(Self::multipart_form(parts).await?),
        };

        let response = builder.send().await.map_err(DocsError::Http)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response.text().await.map_err(DocsError::Http)?;

        tracing::debug!(status, "received response");
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

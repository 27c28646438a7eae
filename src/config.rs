//! Client configuration.
//!
//! A [`ClientConfig`] is built once and shared read-only by every request.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::debug::DebugLog;
use crate::error::{DocsError, Result};

pub const DEFAULT_API_URL: &str = "https://docsapi.helpscout.net/v1/";
pub const USER_AGENT: &str = concat!("docsapi/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Immutable settings for a [`DocsClient`](crate::DocsClient).
#[derive(Clone)]
pub struct ClientConfig {
    api_key: String,
    base_url: Url,
    user_agent: String,
    timeout: Duration,
    debug: Option<DebugLog>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

impl ClientConfig {
    /// Start building a configuration for the given API key.
    pub fn builder(api_key: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder {
            api_key: api_key.into(),
            base_url: DEFAULT_API_URL.to_string(),
            user_agent: None,
            timeout: DEFAULT_TIMEOUT,
            debug: None,
        }
    }

    /// Build a configuration from environment variables.
    ///
    /// - `HELPSCOUT_DOCS_API_KEY` (required)
    /// - `HELPSCOUT_DOCS_API_URL`
    /// - `HELPSCOUT_DOCS_USER_AGENT`
    /// - `HELPSCOUT_DOCS_DEBUG` (any non-empty value enables the debug log)
    /// - `HELPSCOUT_DOCS_DEBUG_DIR`
    ///
    /// # Errors
    ///
    /// Returns an error if `HELPSCOUT_DOCS_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("HELPSCOUT_DOCS_API_KEY").map_err(|_| {
            DocsError::ConfigMissing(
                "HELPSCOUT_DOCS_API_KEY environment variable not set".to_string(),
            )
        })?;

        let mut builder = Self::builder(api_key);
        if let Ok(url) = env::var("HELPSCOUT_DOCS_API_URL") {
            builder = builder.base_url(url);
        }
        if let Ok(ua) = env::var("HELPSCOUT_DOCS_USER_AGENT") {
            builder = builder.user_agent(ua);
        }
        let debug_dir = env::var_os("HELPSCOUT_DOCS_DEBUG_DIR").map(PathBuf::from);
        let debug_on = env::var("HELPSCOUT_DOCS_DEBUG").is_ok_and(|v| !v.is_empty());
        if debug_on || debug_dir.is_some() {
            builder = builder.debug(debug_dir);
        }

        builder.build()
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn debug_log(&self) -> Option<&DebugLog> {
        self.debug.as_ref()
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug)]
#[must_use]
pub struct ClientConfigBuilder {
    api_key: String,
    base_url: String,
    user_agent: Option<String>,
    timeout: Duration,
    debug: Option<Option<PathBuf>>,
}

impl ClientConfigBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the user agent. Blank values are ignored.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        let user_agent = user_agent.into();
        let user_agent = user_agent.trim();
        if !user_agent.is_empty() {
            self.user_agent = Some(user_agent.to_string());
        }
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enable the request debug log, optionally writing into `dir`.
    pub fn debug(mut self, dir: Option<PathBuf>) -> Self {
        self.debug = Some(dir);
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is blank or the base URL is invalid.
    pub fn build(self) -> Result<ClientConfig> {
        let api_key = self.api_key.trim();
        if api_key.is_empty() {
            return Err(DocsError::ConfigMissing("API key is empty".to_string()));
        }

        // Ensure base URL ends with /
        let base_url = if self.base_url.ends_with('/') {
            self.base_url
        } else {
            format!("{}/", self.base_url)
        };

        Ok(ClientConfig {
            api_key: api_key.to_string(),
            base_url: Url::parse(&base_url)?,
            user_agent: self.user_agent.unwrap_or_else(|| USER_AGENT.to_string()),
            timeout: self.timeout,
            debug: self.debug.map(|dir| DebugLog::new(dir.as_deref())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_key_rejected() {
        let err = ClientConfig::builder("  ").build().unwrap_err();
        assert!(matches!(err, DocsError::ConfigMissing(_)));
        assert!(err.is_precondition());
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::builder("key").build().unwrap();
        assert_eq!(config.base_url().as_str(), DEFAULT_API_URL);
        assert_eq!(config.user_agent(), USER_AGENT);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.debug_log().is_none());
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let a = ClientConfig::builder("key")
            .base_url("http://localhost:1234/v1")
            .build()
            .unwrap();
        let b = ClientConfig::builder("key")
            .base_url("http://localhost:1234/v1/")
            .build()
            .unwrap();
        assert_eq!(a.base_url(), b.base_url());
    }

    #[test]
    fn test_blank_user_agent_ignored() {
        let config = ClientConfig::builder("key").user_agent("   ").build().unwrap();
        assert_eq!(config.user_agent(), USER_AGENT);

        let config = ClientConfig::builder("key")
            .user_agent(" my-app/2.0 ")
            .build()
            .unwrap();
        assert_eq!(config.user_agent(), "my-app/2.0");
    }

    #[test]
    fn test_debug_output_hides_key() {
        let config = ClientConfig::builder("secret-key").build().unwrap();
        let debug = format!("{config:?}");
        assert!(debug.contains("ClientConfig"));
        assert!(!debug.contains("secret-key"));
    }

    #[test]
    fn test_invalid_base_url() {
        let err = ClientConfig::builder("key").base_url("not a url").build().unwrap_err();
        assert!(matches!(err, DocsError::Url(_)));
    }
}

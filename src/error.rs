//! Error types for Docs API operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during Docs API operations.
#[derive(Debug, Error)]
pub enum DocsError {
    /// Configuration is missing or incomplete (e.g. no API key).
    #[error("Docs API configuration required: {0}")]
    ConfigMissing(String),

    /// A file scheduled for upload does not exist locally.
    #[error("Unable to locate file: {}", .0.display())]
    FileNotFound(PathBuf),

    /// A field required before the request can be sent is empty.
    #[error("{entity_type} {field} is empty or not provided")]
    MissingField {
        entity_type: &'static str,
        field: &'static str,
    },

    /// An argument cannot be used for the requested operation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The API answered with a status code the operation did not expect.
    #[error("Docs API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Transport failure reported by a non-reqwest transport.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Local I/O error, e.g. while reading an upload.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl DocsError {
    /// HTTP status carried by an API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True for failures raised before any network call was made.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::ConfigMissing(_)
                | Self::FileNotFound(_)
                | Self::MissingField { .. }
                | Self::InvalidArgument(_)
        )
    }

    /// True for network, TLS or timeout failures.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Transport(_) | Self::Io(_))
    }
}

/// Result type alias for Docs API operations.
pub type Result<T> = core::result::Result<T, DocsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_classification() {
        assert!(DocsError::ConfigMissing("key".into()).is_precondition());
        assert!(DocsError::FileNotFound(PathBuf::from("/nope")).is_precondition());
        assert!(DocsError::MissingField {
            entity_type: "Article",
            field: "id"
        }
        .is_precondition());
        assert!(!DocsError::Api {
            status: 404,
            message: "x".into()
        }
        .is_precondition());
    }

    #[test]
    fn test_api_error_status() {
        let err = DocsError::Api {
            status: 429,
            message: "Throttle limit reached. Too many requests".into(),
        };
        assert_eq!(err.status(), Some(429));
        assert!(!err.is_transport());
        assert!(DocsError::Transport("refused".into()).is_transport());
    }

    #[test]
    fn test_missing_field_message() {
        let err = DocsError::MissingField {
            entity_type: "ArticleAsset",
            field: "assetType",
        };
        assert_eq!(err.to_string(), "ArticleAsset assetType is empty or not provided");
    }
}

//! HTTP status validation.
//!
//! Every response goes through [`validate`] before its body is looked at.

use crate::error::{DocsError, Result};
use crate::transport::HttpMethod;

/// Expected status for reads, updates and deletes.
pub const OK: &[u16] = &[200];

/// Expected status for a plain create.
pub const CREATED: &[u16] = &[201];

/// Create endpoints that answer 200 or 201 regardless of reload.
pub const OK_OR_CREATED: &[u16] = &[200, 201];

/// Check `status` against the codes the operation expects.
///
/// # Errors
///
/// Returns [`DocsError::Api`] carrying the observed status and a message.
pub fn validate(status: u16, kind: HttpMethod, expected: &[u16]) -> Result<()> {
    if expected.contains(&status) {
        return Ok(());
    }

    let message = match status {
        400 => "The request was not formatted correctly".to_string(),
        401 => "Invalid API key".to_string(),
        402 => "API key suspended".to_string(),
        403 => "Access denied".to_string(),
        404 => format!("Resource not found [{kind}]"),
        405 => "Invalid method type".to_string(),
        429 => "Throttle limit reached. Too many requests".to_string(),
        500 => "Application error or server error".to_string(),
        503 => "Service Temporarily Unavailable".to_string(),
        _ => format!(
            "Method {kind} returned status code {status} but we expected code(s) {}",
            expected
                .iter()
                .map(u16::to_string)
                .collect::<Vec<_>>()
                .join(",")
        ),
    };

    tracing::debug!(status, %kind, %message, "unexpected response status");
    Err(DocsError::Api { status, message })
}

//! Identifier extraction from creation responses.

/// Extract the id of a newly created resource from its `Location` header.
///
/// The header name is matched case-insensitively and the id is the last
/// path segment of its value. Returns `None` when the header is missing
/// or has no usable final segment.
///
/// ```
/// let headers = vec![(
///     "location".to_string(),
///     "https://docsapi.helpscout.net/v1/articles/999".to_string(),
/// )];
/// assert_eq!(docsapi::extract_id(&headers).as_deref(), Some("999"));
/// ```
pub fn extract_id(headers: &[(String, String)]) -> Option<String> {
    let location = headers
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case("location"))
        .map(|(_, value)| value.trim())?;

    let id = location
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|id| !id.is_empty())?;

    Some(id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(name: &str, value: &str) -> Vec<(String, String)> {
        vec![(name.to_string(), value.to_string())]
    }

    #[test]
    fn test_last_segment() {
        let headers = header("Location", "https://api/v1/articles/999");
        assert_eq!(extract_id(&headers).as_deref(), Some("999"));
    }

    #[test]
    fn test_case_insensitive_name() {
        let headers = header("LOCATION", "https://api/v1/categories/abc123");
        assert_eq!(extract_id(&headers).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_trailing_slash() {
        let headers = header("location", "https://api/v1/sites/5214/");
        assert_eq!(extract_id(&headers).as_deref(), Some("5214"));
    }

    #[test]
    fn test_bare_id() {
        let headers = header("location", "77");
        assert_eq!(extract_id(&headers).as_deref(), Some("77"));
    }

    #[test]
    fn test_missing_header() {
        let headers = header("content-type", "application/json");
        assert_eq!(extract_id(&headers), None);
        assert_eq!(extract_id(&[]), None);
    }

    #[test]
    fn test_empty_header() {
        assert_eq!(extract_id(&header("location", "")), None);
        assert_eq!(extract_id(&header("location", "/")), None);
    }
}

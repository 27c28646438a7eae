//! Query parameter sanitization.
//!
//! Every read operation accepts a loosely typed [`Params`] map and reduces it
//! to a [`Query`] against the operation's allow-list before anything reaches
//! the wire. Unknown keys and empty values are dropped silently.

use serde::Serialize;

/// Parameters accepted by most list operations.
pub const DEFAULT_ALLOWED: &[&str] = &["page", "sort", "order", "status", "query", "fields"];

/// Parameters accepted when listing collections.
pub const COLLECTION_ALLOWED: &[&str] = &["page", "siteId", "visibility", "sort", "order", "fields"];

/// Parameters accepted by article search.
pub const SEARCH_ALLOWED: &[&str] = &[
    "query",
    "page",
    "collectionId",
    "siteId",
    "status",
    "visibility",
    "fields",
];

/// Parameters accepted when fetching a single article.
pub const ARTICLE_ALLOWED: &[&str] = &["draft"];

/// Integer prefix of `s`, ignoring leading whitespace: `"2abc"` is 2, `"abc"`
/// is 0.
fn leading_int(s: &str) -> i64 {
    let s = s.trim_start();
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..end].parse::<i64>().map_or(0, |n| sign * n)
}

/// A raw, caller-supplied parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Null,
    Bool(bool),
    Int(i64),
    Text(String),
    List(Vec<String>),
}

impl ParamValue {
    fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(b) => !b,
            Self::Int(i) => *i == 0,
            Self::Text(s) => s.is_empty(),
            Self::List(l) => l.is_empty(),
        }
    }

    fn as_page(&self) -> Option<i64> {
        let page = match self {
            Self::Int(i) => *i,
            Self::Bool(true) => 1,
            Self::Text(s) => leading_int(s),
            _ => 0,
        };
        (page >= 1).then_some(page)
    }

    fn into_string(self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            Self::Text(s) => s,
            Self::List(l) => l.join(","),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u32> for ParamValue {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(v: Vec<String>) -> Self {
        Self::List(v)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(v: Vec<&str>) -> Self {
        Self::List(v.into_iter().map(String::from).collect())
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// Caller-supplied request parameters, in insertion order.
///
/// # Example
///
/// ```
/// use docsapi::Params;
///
/// let query = Params::new()
///     .page(0)
///     .sort("order")
///     .insert("bogus", "x")
///     .sanitize(&["page", "sort", "order"]);
///
/// assert_eq!(query.pairs(), &[("sort".to_string(), "order".to_string())]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any earlier value under the same key.
    #[must_use]
    pub fn insert(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    #[must_use]
    pub fn page(self, page: impl Into<ParamValue>) -> Self {
        self.insert("page", page)
    }

    #[must_use]
    pub fn sort(self, sort: impl Into<ParamValue>) -> Self {
        self.insert("sort", sort)
    }

    #[must_use]
    pub fn order(self, order: impl Into<ParamValue>) -> Self {
        self.insert("order", order)
    }

    #[must_use]
    pub fn status(self, status: impl Into<ParamValue>) -> Self {
        self.insert("status", status)
    }

    #[must_use]
    pub fn query(self, query: impl Into<ParamValue>) -> Self {
        self.insert("query", query)
    }

    #[must_use]
    pub fn visibility(self, visibility: impl Into<ParamValue>) -> Self {
        self.insert("visibility", visibility)
    }

    /// Restrict the response to a subset of fields. Accepts a
    /// comma-separated string or a list.
    #[must_use]
    pub fn fields(self, fields: impl Into<ParamValue>) -> Self {
        self.insert("fields", fields)
    }

    #[must_use]
    pub fn site_id(self, site_id: impl Into<ParamValue>) -> Self {
        self.insert("siteId", site_id)
    }

    #[must_use]
    pub fn collection_id(self, collection_id: impl Into<ParamValue>) -> Self {
        self.insert("collectionId", collection_id)
    }

    #[must_use]
    pub fn draft(self, draft: bool) -> Self {
        self.insert("draft", draft)
    }

    /// Reduce these parameters to the subset `allowed` accepts.
    ///
    /// Keys outside the allow-list and empty values are dropped. `page`
    /// becomes an integer and is dropped below 1. `fields` is split on
    /// commas, trimmed and re-joined, dropping empty selectors; order and
    /// duplicates are preserved.
    pub fn sanitize(&self, allowed: &[&str]) -> Query {
        let mut pairs = Vec::new();

        for (key, value) in &self.entries {
            let key = key.trim();
            if !allowed.contains(&key) || value.is_empty() {
                continue;
            }

            let value = match key {
                "page" => match value.as_page() {
                    Some(page) => page.to_string(),
                    None => continue,
                },
                "fields" => match normalize_fields(value) {
                    Some(fields) => fields,
                    None => continue,
                },
                _ => value.clone().into_string(),
            };

            pairs.push((key.to_string(), value));
        }

        Query { pairs }
    }
}

fn normalize_fields(value: &ParamValue) -> Option<String> {
    let selectors: Vec<&str> = match value {
        ParamValue::Text(s) => s.split(',').collect(),
        ParamValue::List(l) => l.iter().map(String::as_str).collect(),
        _ => return None,
    };

    let selectors: Vec<&str> = selectors
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    (!selectors.is_empty()).then(|| selectors.join(","))
}

/// Sanitized query parameters, ready for the transport.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the caller asked for a field subset.
    pub fn has_fields(&self) -> bool {
        self.get("fields").is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl From<Query> for Params {
    fn from(query: Query) -> Self {
        Self {
            entries: query
                .pairs
                .into_iter()
                .map(|(k, v)| (k, ParamValue::Text(v)))
                .collect(),
        }
    }
}

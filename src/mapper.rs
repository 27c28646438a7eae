//! Response envelope decoding and model hydration.
//!
//! Every read endpoint wraps its payload in a single-key object whose key
//! depends on the endpoint (`{"article": {...}}`, `{"categories": [...]}`).
//! The key is ignored; its value is either returned as raw JSON (when the
//! caller asked for a field subset) or hydrated into typed models.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::collection::ResourceCollection;
use crate::error::Result;
use crate::params::Query;

/// Outcome of mapping a response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Mapped<T> {
    /// The response carried no payload.
    Absent,
    /// The payload, undecoded, because a field subset was requested.
    Raw(Value),
    /// The payload hydrated into models.
    Hydrated(T),
}

impl<T> Mapped<T> {
    /// The hydrated value, if any.
    pub fn hydrated(self) -> Option<T> {
        match self {
            Self::Hydrated(value) => Some(value),
            _ => None,
        }
    }

    /// The raw payload, if a field subset was requested.
    pub fn raw(self) -> Option<Value> {
        match self {
            Self::Raw(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Mapped<U> {
        match self {
            Self::Absent => Mapped::Absent,
            Self::Raw(value) => Mapped::Raw(value),
            Self::Hydrated(value) => Mapped::Hydrated(f(value)),
        }
    }
}

/// Decode `body` and return the value under its first key.
///
/// Returns `None` for bodies that are not JSON objects, empty objects, and
/// payloads that are `null`, `false`, `0`, `""` or `"0"`.
pub fn unwrap_envelope(body: &str) -> Option<Value> {
    if body.trim().is_empty() {
        return None;
    }

    let decoded: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, "response body is not valid JSON");
            return None;
        }
    };

    let Value::Object(envelope) = decoded else {
        return None;
    };

    match envelope.into_iter().next() {
        Some((_, payload)) if !is_blank(&payload) => Some(payload),
        _ => None,
    }
}

/// Scalars the API uses to say "nothing here". Empty arrays are not blank.
fn is_blank(payload: &Value) -> bool {
    match payload {
        Value::Null | Value::Bool(false) => true,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        _ => false,
    }
}

/// Map a single-item response.
///
/// # Errors
///
/// Returns an error if the payload cannot be hydrated into `T`.
pub fn map_item<T: DeserializeOwned>(body: &str, query: &Query) -> Result<Mapped<T>> {
    let Some(payload) = unwrap_envelope(body) else {
        tracing::warn!("response carried no payload");
        return Ok(Mapped::Absent);
    };

    if query.has_fields() {
        return Ok(Mapped::Raw(payload));
    }

    Ok(Mapped::Hydrated(serde_json::from_value(payload)?))
}

#[derive(Deserialize)]
struct PagedPayload<T> {
    #[serde(default)]
    page: Option<u32>,
    #[serde(default)]
    pages: Option<u32>,
    #[serde(default)]
    count: Option<u64>,
    items: Vec<T>,
}

/// Map a list response.
///
/// The payload may be a bare array or a paged object with an `items` array.
///
/// # Errors
///
/// Returns an error if the payload is not a list or an element cannot be
/// hydrated into `T`.
pub fn map_collection<T: DeserializeOwned>(
    body: &str,
    query: &Query,
) -> Result<Mapped<ResourceCollection<T>>> {
    let Some(payload) = unwrap_envelope(body) else {
        tracing::warn!("response carried no payload");
        return Ok(Mapped::Absent);
    };

    if query.has_fields() {
        return Ok(Mapped::Raw(payload));
    }

    let is_paged = payload
        .as_object()
        .is_some_and(|object| object.get("items").is_some_and(Value::is_array));

    let collection = if is_paged {
        let paged: PagedPayload<T> = serde_json::from_value(payload)?;
        ResourceCollection::new(paged.items).with_paging(paged.page, paged.pages, paged.count)
    } else {
        ResourceCollection::new(serde_json::from_value(payload)?)
    };

    Ok(Mapped::Hydrated(collection))
}

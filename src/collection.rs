//! Ordered collections of hydrated resources.

use serde::Serialize;

/// Resources returned by a list endpoint, in server order.
///
/// Paged endpoints also report the page number, the page count and the
/// total item count; bare array payloads leave those unset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound = "T: Serialize")]
pub struct ResourceCollection<T> {
    /// The items, in the order the server returned them.
    pub items: Vec<T>,
    /// Current page number (1-indexed), if reported.
    pub page: Option<u32>,
    /// Total number of pages, if reported.
    pub pages: Option<u32>,
    /// Total number of items across all pages, if reported.
    pub count: Option<u64>,
}

impl<T> ResourceCollection<T> {
    /// Create a collection with no paging information.
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            page: None,
            pages: None,
            count: None,
        }
    }

    /// Attach paging information.
    #[must_use]
    pub fn with_paging(mut self, page: Option<u32>, pages: Option<u32>, count: Option<u64>) -> Self {
        self.page = page;
        self.pages = pages;
        self.count = count;
        self
    }

    /// Whether the server reported pages after this one.
    #[must_use]
    pub fn has_more(&self) -> bool {
        matches!((self.page, self.pages), (Some(page), Some(pages)) if page < pages)
    }

    /// Map the items to a different type.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> ResourceCollection<U> {
        ResourceCollection {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            pages: self.pages,
            count: self.count,
        }
    }

    /// Returns true if this collection has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns an iterator over the items.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for ResourceCollection<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> IntoIterator for ResourceCollection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ResourceCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_more() {
        let c = ResourceCollection::new(vec![1, 2]).with_paging(Some(1), Some(3), Some(120));
        assert!(c.has_more());

        let c = ResourceCollection::new(vec![1]).with_paging(Some(3), Some(3), Some(101));
        assert!(!c.has_more());

        // Bare arrays carry no paging hints.
        assert!(!ResourceCollection::new(vec![1; 50]).has_more());
    }

    #[test]
    fn test_map_keeps_order_and_paging() {
        let c = ResourceCollection::new(vec![1, 2, 3]).with_paging(Some(2), Some(4), None);
        let mapped = c.map(|x| x * 10);
        assert_eq!(mapped.items, vec![10, 20, 30]);
        assert_eq!(mapped.page, Some(2));
        assert_eq!(mapped.pages, Some(4));
    }
}

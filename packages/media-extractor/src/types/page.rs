//! Pages of list items and the identity shared by every info aggregate.

use serde::{Deserialize, Serialize};

use crate::error::{ExtractionError, Result};
use crate::traits::extractor::Extractor;

/// One page of a paginated listing.
///
/// `next_page_url` is an opaque, service-defined cursor; it is empty exactly
/// when there is no further page. Errors are the ones captured while
/// collecting this page only.
#[derive(Debug)]
pub struct InfoItemsPage<T> {
    items: Vec<T>,
    next_page_url: String,
    errors: Vec<ExtractionError>,
}

impl<T> InfoItemsPage<T> {
    pub fn new(items: Vec<T>, next_page_url: impl Into<String>, errors: Vec<ExtractionError>) -> Self {
        Self {
            items,
            next_page_url: next_page_url.into(),
            errors,
        }
    }

    /// A page with no items and no continuation.
    pub fn empty() -> Self {
        Self::new(Vec::new(), String::new(), Vec::new())
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn next_page_url(&self) -> &str {
        &self.next_page_url
    }

    pub fn has_next_page(&self) -> bool {
        !self.next_page_url.is_empty()
    }

    pub fn errors(&self) -> &[ExtractionError] {
        &self.errors
    }

    pub fn into_parts(self) -> (Vec<T>, String, Vec<ExtractionError>) {
        (self.items, self.next_page_url, self.errors)
    }
}

/// Identity of a fetched resource. Failing to derive any of it is fatal to
/// the info being built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoIdentity {
    pub service_id: u32,
    pub id: String,
    pub url: String,
    pub original_url: String,
    pub name: String,
}

impl InfoIdentity {
    /// Read the identity from an extractor whose page was already fetched.
    pub fn from_extractor<E: Extractor + ?Sized>(extractor: &E) -> Result<Self> {
        Ok(Self {
            service_id: extractor.service_id(),
            id: extractor.id()?,
            url: extractor.url()?,
            original_url: extractor.original_url()?,
            name: extractor.name()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cursor_means_last_page() {
        let last: InfoItemsPage<u8> = InfoItemsPage::new(vec![1, 2], "", vec![]);
        assert!(!last.has_next_page());

        let more: InfoItemsPage<u8> = InfoItemsPage::new(vec![1], "cursor:2", vec![]);
        assert!(more.has_next_page());
        assert_eq!(more.next_page_url(), "cursor:2");
    }

    #[test]
    fn test_into_parts_keeps_errors() {
        let page: InfoItemsPage<u8> =
            InfoItemsPage::new(vec![7], "", vec![ExtractionError::parsing("no name")]);
        let (items, next, errors) = page.into_parts();

        assert_eq!(items, vec![7]);
        assert!(next.is_empty());
        assert_eq!(errors.len(), 1);
    }
}

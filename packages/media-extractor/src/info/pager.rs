//! Following page cursors.

use std::collections::HashSet;
use std::marker::PhantomData;
use tracing::warn;

use crate::error::Result;
use crate::traits::extractor::ListExtractor;
use crate::types::page::InfoItemsPage;

enum Cursor {
    Initial,
    Page(String),
}

/// Iterator over the pages of a listing.
///
/// Ends after the page whose cursor is empty, after the first error, or when
/// a cursor repeats (a service looping back to an earlier page).
pub struct PageIter<'a, T, E: ?Sized> {
    extractor: &'a E,
    next: Option<Cursor>,
    seen: HashSet<String>,
    _item: PhantomData<fn() -> T>,
}

impl<'a, T, E> Iterator for PageIter<'a, T, E>
where
    E: ListExtractor<T> + ?Sized,
{
    type Item = Result<InfoItemsPage<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = match self.next.take()? {
            Cursor::Initial => self.extractor.initial_page(),
            Cursor::Page(page_url) => self.extractor.page(&page_url),
        };

        if let Ok(page) = &result {
            let next_page_url = page.next_page_url();
            if !page.has_next_page() {
                self.next = None;
            } else if self.seen.insert(next_page_url.to_string()) {
                self.next = Some(Cursor::Page(next_page_url.to_string()));
            } else {
                warn!(
                    url = %self.extractor.link_handler().url,
                    cursor = next_page_url,
                    "Page cursor repeated, stopping"
                );
                self.next = None;
            }
        }

        Some(result)
    }
}

/// Pages of a fetched extractor, starting with its initial page.
pub fn pages<T, E>(extractor: &E) -> PageIter<'_, T, E>
where
    E: ListExtractor<T> + ?Sized,
{
    PageIter {
        extractor,
        next: Some(Cursor::Initial),
        seen: HashSet::new(),
        _item: PhantomData,
    }
}

/// Pages starting at a cursor; the extractor does not need to be fetched.
pub fn pages_from<'a, T, E>(extractor: &'a E, page_url: &str) -> PageIter<'a, T, E>
where
    E: ListExtractor<T> + ?Sized,
{
    PageIter {
        extractor,
        next: Some(Cursor::Page(page_url.to_string())),
        seen: HashSet::from([page_url.to_string()]),
        _item: PhantomData,
    }
}

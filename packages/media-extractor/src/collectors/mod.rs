//! Error-isolating collection of list items.
//!
//! A collector turns item extractors into normalized items without ever
//! aborting the batch:
//!
//! 1. identity fields (`url`, `name`) are read first; a failure drops the
//!    item and records the error
//! 2. every optional field is read through the [`ErrorLog`]; a failure is
//!    recorded and the field stays `None`
//! 3. the item is appended
//!
//! `commit` never returns an error. Items keep source order and errors keep
//! the order in which fields and items were attempted.

pub mod channel;
pub mod comments;
pub mod error_log;
pub mod playlist;
pub mod search;
pub mod stream;

pub use channel::ChannelInfoItemsCollector;
pub use comments::CommentsInfoItemsCollector;
pub use error_log::{try_field, ErrorLog};
pub use playlist::PlaylistInfoItemsCollector;
pub use search::{AnyItemExtractor, InfoItemsSearchCollector};
pub use stream::StreamInfoItemsCollector;

use tracing::warn;

use crate::error::{ExtractionError, Result};
use crate::types::page::InfoItemsPage;

/// An item that can be built from an item extractor of kind `E`.
///
/// Returns `Err` only for identity failures; optional-field failures go to
/// `errors`.
pub trait CollectItem<E: ?Sized>: Sized {
    fn collect(service_id: u32, extractor: &E, errors: &mut ErrorLog) -> Result<Self>;
}

/// Accumulates items of type `I` plus every error captured along the way.
#[derive(Debug)]
pub struct InfoItemsCollector<I> {
    service_id: u32,
    items: Vec<I>,
    errors: ErrorLog,
}

impl<I> InfoItemsCollector<I> {
    pub fn new(service_id: u32) -> Self {
        Self {
            service_id,
            items: Vec::new(),
            errors: ErrorLog::new(),
        }
    }

    pub fn service_id(&self) -> u32 {
        self.service_id
    }

    /// Extract one item. Failures end up in `errors()`, never in the return value.
    pub fn commit<E: ?Sized>(&mut self, extractor: &E)
    where
        I: CollectItem<E>,
    {
        match I::collect(self.service_id, extractor, &mut self.errors) {
            Ok(item) => self.items.push(item),
            Err(err) => {
                warn!(
                    service_id = self.service_id,
                    error = %err,
                    "Dropping item without identity"
                );
                self.errors.push(err);
            }
        }
    }

    /// Append an item built elsewhere.
    pub fn add_item(&mut self, item: I) {
        self.items.push(item);
    }

    pub fn add_error(&mut self, error: ExtractionError) {
        self.errors.push(error);
    }

    pub fn items(&self) -> &[I] {
        &self.items
    }

    pub fn errors(&self) -> &[ExtractionError] {
        self.errors.errors()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Clear items and errors so the collector can be reused for the next page.
    pub fn reset(&mut self) {
        self.items.clear();
        self.errors.clear();
    }

    pub fn into_page(self, next_page_url: impl Into<String>) -> InfoItemsPage<I> {
        InfoItemsPage::new(self.items, next_page_url, self.errors.into_vec())
    }

    pub fn into_parts(self) -> (Vec<I>, Vec<ExtractionError>) {
        (self.items, self.errors.into_vec())
    }
}

//! Info aggregation: one rich record per fetched resource.
//!
//! Builders take an extractor whose page is already fetched:
//!
//! 1. identity (service id, id, urls, name) is read first; failure is fatal
//! 2. each enrichment field is read through an [`ErrorLog`]; failures are
//!    recorded and the field keeps its default
//! 3. list infos read the first page of items and merge that page's errors
//!
//! An info is always returned with its error list. Callers judge completeness
//! from `errors()`, not from the `Result`.
//!
//! [`ErrorLog`]: crate::collectors::ErrorLog

pub mod channel;
pub mod comments;
pub mod helper;
pub mod kiosk;
pub mod pager;
pub mod playlist;
pub mod search;
pub mod stream;

pub use channel::ChannelInfo;
pub use comments::CommentsInfo;
pub use helper::items_page_or_log_error;
pub use kiosk::KioskInfo;
pub use pager::{pages, pages_from, PageIter};
pub use playlist::PlaylistInfo;
pub use search::SearchInfo;
pub use stream::StreamInfo;

use serde::Serialize;

use crate::collectors::ErrorLog;
use crate::error::ExtractionError;
use crate::traits::extractor::ListExtractor;
use crate::types::page::InfoIdentity;

/// Accessors shared by every info aggregate.
pub trait Info {
    fn identity(&self) -> &InfoIdentity;

    /// Failures captured while building; empty when every field was derived.
    fn errors(&self) -> &[ExtractionError];

    fn service_id(&self) -> u32 {
        self.identity().service_id
    }

    fn id(&self) -> &str {
        &self.identity().id
    }

    fn url(&self) -> &str {
        &self.identity().url
    }

    fn original_url(&self) -> &str {
        &self.identity().original_url
    }

    fn name(&self) -> &str {
        &self.identity().name
    }

    fn is_complete(&self) -> bool {
        self.errors().is_empty()
    }
}

/// Identity, filters and first page shared by the paginated infos.
#[derive(Debug, Serialize)]
pub struct ListInfo<T> {
    #[serde(flatten)]
    pub identity: InfoIdentity,
    pub content_filters: Vec<String>,
    pub sort_filter: String,
    pub related_items: Vec<T>,
    /// Cursor for `more_items`; empty when the first page was the last.
    pub next_page_url: String,
    #[serde(skip)]
    pub errors: Vec<ExtractionError>,
}

impl<T> ListInfo<T> {
    /// Finish a list info: read the first page and merge its errors after the
    /// ones already in `errors`.
    pub fn with_first_page<E: ListExtractor<T> + ?Sized>(
        identity: InfoIdentity,
        extractor: &E,
        mut errors: ErrorLog,
    ) -> Self {
        let (related_items, next_page_url) = items_page_or_log_error(extractor, &mut errors);
        let base = extractor.base();

        Self {
            identity,
            content_filters: base.content_filters().to_vec(),
            sort_filter: base.sort_filter().to_string(),
            related_items,
            next_page_url,
            errors: errors.into_vec(),
        }
    }

    pub fn has_next_page(&self) -> bool {
        !self.next_page_url.is_empty()
    }
}

impl<T> Info for ListInfo<T> {
    fn identity(&self) -> &InfoIdentity {
        &self.identity
    }

    fn errors(&self) -> &[ExtractionError] {
        &self.errors
    }
}

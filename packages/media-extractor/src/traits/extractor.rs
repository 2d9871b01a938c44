//! Extractor capability contracts.
//!
//! An extractor is bound to one resource at construction. It follows a
//! two-phase contract:
//!
//! 1. `fetch_page()` downloads and parses the page, once per instance
//! 2. accessors read the fetched state; each one fails on its own with a
//!    parsing error without affecting the others
//!
//! Service scrapers implement `on_fetch_page` plus the accessors and embed an
//! [`ExtractorBase`] for the shared bookkeeping.

use std::sync::Arc;
use tracing::debug;

use crate::error::{ExtractionError, Result};
use crate::traits::downloader::Downloader;
use crate::types::config::{ExtractorContext, Localization};
use crate::types::item::{CommentsInfoItem, InfoItem, StreamInfoItem};
use crate::types::link::{LinkHandler, ListLinkHandler};
use crate::types::page::InfoItemsPage;

/// State every extractor carries: what it extracts, for which service, with
/// which context, and whether the page was fetched.
#[derive(Debug, Clone)]
pub struct ExtractorBase {
    service_id: u32,
    link_handler: LinkHandler,
    content_filters: Vec<String>,
    sort_filter: String,
    context: ExtractorContext,
    page_fetched: bool,
}

impl ExtractorBase {
    /// Base for a single-resource extractor (streams).
    pub fn new(service_id: u32, link_handler: LinkHandler, context: ExtractorContext) -> Self {
        Self {
            service_id,
            link_handler,
            content_filters: Vec::new(),
            sort_filter: String::new(),
            context,
            page_fetched: false,
        }
    }

    /// Base for a list extractor, keeping the handler's filters.
    pub fn for_list(service_id: u32, handler: ListLinkHandler, context: ExtractorContext) -> Self {
        let link_handler = handler.to_link_handler();
        Self {
            service_id,
            link_handler,
            content_filters: handler.content_filters,
            sort_filter: handler.sort_filter,
            context,
            page_fetched: false,
        }
    }

    pub fn service_id(&self) -> u32 {
        self.service_id
    }

    pub fn link_handler(&self) -> &LinkHandler {
        &self.link_handler
    }

    /// The list link handler this extractor was built from.
    pub fn list_link_handler(&self) -> ListLinkHandler {
        ListLinkHandler::from(self.link_handler.clone())
            .with_content_filters(self.content_filters.clone())
            .with_sort_filter(self.sort_filter.clone())
    }

    pub fn content_filters(&self) -> &[String] {
        &self.content_filters
    }

    pub fn sort_filter(&self) -> &str {
        &self.sort_filter
    }

    pub fn context(&self) -> &ExtractorContext {
        &self.context
    }

    pub fn is_page_fetched(&self) -> bool {
        self.page_fetched
    }

    fn mark_page_fetched(&mut self) {
        self.page_fetched = true;
    }
}

/// A stateful extractor bound to one resource.
///
/// Not meant to be shared between threads while fetching; confine an
/// instance to one thread (it is `Send`, so it can be moved).
pub trait Extractor: Send {
    fn base(&self) -> &ExtractorBase;

    fn base_mut(&mut self) -> &mut ExtractorBase;

    /// Download and parse the page. Called at most once by `fetch_page`.
    fn on_fetch_page(&mut self, downloader: &dyn Downloader) -> Result<()>;

    /// Display name of the resource.
    fn name(&self) -> Result<String>;

    /// Fetch the page if it was not fetched yet.
    ///
    /// A second call is a no-op. Fails with a transport error when the page
    /// cannot be downloaded, or an extraction error when it is unrecognisable.
    fn fetch_page(&mut self) -> Result<()> {
        if self.base().is_page_fetched() {
            return Ok(());
        }

        let downloader = Arc::clone(self.base().context().downloader());
        debug!(
            url = %self.base().link_handler().url,
            service_id = self.base().service_id(),
            downloader = downloader.name(),
            "Fetching page"
        );

        self.on_fetch_page(downloader.as_ref())?;
        self.base_mut().mark_page_fetched();
        Ok(())
    }

    /// Fail unless `fetch_page` already succeeded.
    fn assert_page_fetched(&self) -> Result<()> {
        if self.base().is_page_fetched() {
            Ok(())
        } else {
            Err(ExtractionError::PageNotFetched {
                url: self.base().link_handler().url.clone(),
            })
        }
    }

    fn service_id(&self) -> u32 {
        self.base().service_id()
    }

    fn link_handler(&self) -> &LinkHandler {
        self.base().link_handler()
    }

    fn localization(&self) -> &Localization {
        self.base().context().localization()
    }

    fn downloader(&self) -> &dyn Downloader {
        self.base().context().downloader().as_ref()
    }

    fn id(&self) -> Result<String> {
        Ok(self.link_handler().id.clone())
    }

    fn url(&self) -> Result<String> {
        Ok(self.link_handler().url.clone())
    }

    fn original_url(&self) -> Result<String> {
        Ok(self.link_handler().original_url.clone())
    }
}

/// An extractor over a paginated listing.
///
/// `initial_page` requires a fetched page. `page` does not: it fetches the
/// given cursor directly so a listing can be continued from a fresh instance.
pub trait ListExtractor<T>: Extractor {
    /// Items of the page fetched by `fetch_page`.
    fn initial_page(&self) -> Result<InfoItemsPage<T>>;

    /// Items at an opaque cursor previously returned in `next_page_url`.
    fn page(&self, page_url: &str) -> Result<InfoItemsPage<T>>;

    /// Cursor of the page after the initial one; empty when there is none.
    fn next_page_url(&self) -> Result<String>;

    fn has_next_page(&self) -> Result<bool> {
        Ok(!self.next_page_url()?.is_empty())
    }
}

/// A playlist.
pub trait PlaylistExtractor: ListExtractor<StreamInfoItem> {
    fn thumbnail_url(&self) -> Result<String>;
    fn banner_url(&self) -> Result<String>;
    fn uploader_url(&self) -> Result<String>;
    fn uploader_name(&self) -> Result<String>;
    fn uploader_avatar_url(&self) -> Result<String>;
    fn stream_count(&self) -> Result<u64>;
}

/// A channel and its uploads.
pub trait ChannelExtractor: ListExtractor<StreamInfoItem> {
    fn avatar_url(&self) -> Result<String>;
    fn banner_url(&self) -> Result<String>;
    fn feed_url(&self) -> Result<String>;
    fn subscriber_count(&self) -> Result<u64>;
    fn description(&self) -> Result<String>;
}

/// A curated, service-provided feed such as "trending".
pub trait KioskExtractor: ListExtractor<StreamInfoItem> {
    /// The kiosk type this extractor was created for.
    fn kiosk_id(&self) -> &str;
}

/// Comments of a stream.
pub trait CommentsExtractor: ListExtractor<CommentsInfoItem> {}

/// Search results of mixed item kinds.
pub trait SearchExtractor: ListExtractor<InfoItem> {
    /// The query; for search handlers the link handler id is the search string.
    fn search_string(&self) -> String {
        self.link_handler().id.clone()
    }

    /// "Did you mean" suggestion; empty when the service offers none.
    fn search_suggestion(&self) -> Result<String>;
}

use serde::Serialize;

use super::{Info, ListInfo};
use crate::collectors::ErrorLog;
use crate::error::{ExtractionError, Result};
use crate::traits::extractor::SearchExtractor;
use crate::traits::service::StreamingService;
use crate::types::config::ExtractorContext;
use crate::types::item::InfoItem;
use crate::types::page::{InfoIdentity, InfoItemsPage};

/// Search results of mixed kinds, first page.
#[derive(Debug, Serialize)]
pub struct SearchInfo {
    #[serde(flatten)]
    pub list: ListInfo<InfoItem>,
    pub search_string: String,
    pub search_suggestion: String,
}

impl SearchInfo {
    pub fn from_extractor<E: SearchExtractor + ?Sized>(extractor: &E) -> Result<Self> {
        let identity = InfoIdentity::from_extractor(extractor)?;
        let mut errors = ErrorLog::new();

        let search_suggestion =
            errors.field_or_default("search_suggestion", || extractor.search_suggestion());

        Ok(Self {
            search_string: extractor.search_string(),
            list: ListInfo::with_first_page(identity, extractor, errors),
            search_suggestion,
        })
    }

    /// Search results for a search URL of the service.
    pub fn get_info(service: &dyn StreamingService, url: &str, ctx: &ExtractorContext) -> Result<Self> {
        let mut extractor = service.search_extractor_for_url(url, ctx)?;
        extractor.fetch_page()?;
        Self::from_extractor(&*extractor)
    }

    /// Search results for a query with optional filters.
    pub fn search(
        service: &dyn StreamingService,
        query: &str,
        content_filters: Vec<String>,
        sort_filter: String,
        ctx: &ExtractorContext,
    ) -> Result<Self> {
        let mut extractor =
            service.search_extractor_for_query(query, content_filters, sort_filter, ctx)?;
        extractor.fetch_page()?;
        Self::from_extractor(&*extractor)
    }

    pub fn more_items(
        service: &dyn StreamingService,
        url: &str,
        page_url: &str,
        ctx: &ExtractorContext,
    ) -> Result<InfoItemsPage<InfoItem>> {
        service.search_extractor_for_url(url, ctx)?.page(page_url)
    }

    pub fn items(&self) -> &[InfoItem] {
        &self.list.related_items
    }

    pub fn next_page_url(&self) -> &str {
        &self.list.next_page_url
    }
}

impl Info for SearchInfo {
    fn identity(&self) -> &InfoIdentity {
        &self.list.identity
    }

    fn errors(&self) -> &[ExtractionError] {
        &self.list.errors
    }
}

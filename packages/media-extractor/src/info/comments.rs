use serde::Serialize;

use super::{Info, ListInfo};
use crate::collectors::ErrorLog;
use crate::error::{ExtractionError, Result};
use crate::traits::extractor::CommentsExtractor;
use crate::traits::service::StreamingService;
use crate::types::config::ExtractorContext;
use crate::types::item::CommentsInfoItem;
use crate::types::page::{InfoIdentity, InfoItemsPage};

/// Comments of a stream, first page.
#[derive(Debug, Serialize)]
pub struct CommentsInfo {
    #[serde(flatten)]
    pub list: ListInfo<CommentsInfoItem>,
}

impl CommentsInfo {
    pub fn from_extractor<E: CommentsExtractor + ?Sized>(extractor: &E) -> Result<Self> {
        let identity = InfoIdentity::from_extractor(extractor)?;
        Ok(Self {
            list: ListInfo::with_first_page(identity, extractor, ErrorLog::new()),
        })
    }

    /// Fails with `Unsupported` for services without comments.
    pub fn get_info(service: &dyn StreamingService, url: &str, ctx: &ExtractorContext) -> Result<Self> {
        let mut extractor = service.comments_extractor_for_url(url, ctx)?;
        extractor.fetch_page()?;
        Self::from_extractor(&*extractor)
    }

    pub fn more_items(
        service: &dyn StreamingService,
        url: &str,
        page_url: &str,
        ctx: &ExtractorContext,
    ) -> Result<InfoItemsPage<CommentsInfoItem>> {
        service.comments_extractor_for_url(url, ctx)?.page(page_url)
    }

    pub fn comments(&self) -> &[CommentsInfoItem] {
        &self.list.related_items
    }

    pub fn next_page_url(&self) -> &str {
        &self.list.next_page_url
    }
}

impl Info for CommentsInfo {
    fn identity(&self) -> &InfoIdentity {
        &self.list.identity
    }

    fn errors(&self) -> &[ExtractionError] {
        &self.list.errors
    }
}

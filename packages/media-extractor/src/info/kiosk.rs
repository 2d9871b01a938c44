use serde::Serialize;

use super::{Info, ListInfo};
use crate::collectors::ErrorLog;
use crate::error::{ExtractionError, Result};
use crate::registry::services::ServiceList;
use crate::traits::extractor::KioskExtractor;
use crate::traits::service::StreamingService;
use crate::types::config::ExtractorContext;
use crate::types::item::StreamInfoItem;
use crate::types::page::{InfoIdentity, InfoItemsPage};

/// A curated feed and its first page of streams.
#[derive(Debug, Serialize)]
pub struct KioskInfo {
    #[serde(flatten)]
    pub list: ListInfo<StreamInfoItem>,
    pub kiosk_id: String,
}

impl KioskInfo {
    /// Build from an extractor whose page is already fetched.
    pub fn from_extractor<E: KioskExtractor + ?Sized>(extractor: &E) -> Result<Self> {
        let identity = InfoIdentity::from_extractor(extractor)?;

        Ok(Self {
            list: ListInfo::with_first_page(identity, extractor, ErrorLog::new()),
            kiosk_id: extractor.kiosk_id().to_string(),
        })
    }

    /// Resolve the kiosk accepting `url` in the service's kiosk list and build its info.
    pub fn get_info(service: &dyn StreamingService, url: &str, ctx: &ExtractorContext) -> Result<Self> {
        let mut extractor = service.kiosk_list().extractor_by_url(url, None, ctx)?;
        extractor.fetch_page()?;
        Self::from_extractor(&*extractor)
    }

    pub fn get_info_by_url(services: &ServiceList, url: &str, ctx: &ExtractorContext) -> Result<Self> {
        let service = services.service_by_url(url)?;
        Self::get_info(&**service, url, ctx)
    }

    /// The service's default kiosk, if it has any kiosk at all.
    pub fn default_kiosk(service: &dyn StreamingService, ctx: &ExtractorContext) -> Result<Option<Self>> {
        let Some(mut extractor) = service.kiosk_list().default_kiosk_extractor(None, ctx)? else {
            return Ok(None);
        };
        extractor.fetch_page()?;
        Self::from_extractor(&*extractor).map(Some)
    }

    /// Page at `page_url`, without fetching the kiosk's first page.
    pub fn more_items(
        service: &dyn StreamingService,
        url: &str,
        page_url: &str,
        ctx: &ExtractorContext,
    ) -> Result<InfoItemsPage<StreamInfoItem>> {
        service
            .kiosk_list()
            .extractor_by_url(url, Some(page_url), ctx)?
            .page(page_url)
    }

    pub fn related_items(&self) -> &[StreamInfoItem] {
        &self.list.related_items
    }

    pub fn next_page_url(&self) -> &str {
        &self.list.next_page_url
    }
}

impl Info for KioskInfo {
    fn identity(&self) -> &InfoIdentity {
        &self.list.identity
    }

    fn errors(&self) -> &[ExtractionError] {
        &self.list.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::downloaders::MockDownloader;
    use crate::testing::{FixtureDocument, FixtureItem, FixtureService};
    use std::sync::Arc;

    #[test]
    fn test_more_items_continues_the_matching_kiosk() {
        let downloader = MockDownloader::new().with_response(
            "cursor:r2",
            FixtureDocument::page(
                vec![
                    FixtureItem::stream("https://alpha.example.com/watch?v=r1", "r1"),
                    FixtureItem::stream("https://alpha.example.com/watch?v=r2", "r2"),
                ],
                "cursor:r3",
            )
            .to_json(),
        );
        let ctx = ExtractorContext::new(Arc::new(downloader.clone()));
        let service = FixtureService::new(0, "Alpha", "alpha.example.com").unwrap();

        let page =
            KioskInfo::more_items(&service, "https://alpha.example.com/feed/recent", "cursor:r2", &ctx)
                .unwrap();

        assert_eq!(page.items().len(), 2);
        assert_eq!(page.next_page_url(), "cursor:r3");
        assert_eq!(downloader.calls_for("https://alpha.example.com/feed/recent"), 0);
    }

    #[test]
    fn test_more_items_rejects_unknown_kiosk_url() {
        let ctx = ExtractorContext::new(Arc::new(MockDownloader::new()));
        let service = FixtureService::new(0, "Alpha", "alpha.example.com").unwrap();

        let err = KioskInfo::more_items(&service, "https://alpha.example.com/feed/nope", "cursor:1", &ctx)
            .unwrap_err();

        assert!(matches!(err, ExtractionError::NoMatchingExtractor { .. }));
    }
}

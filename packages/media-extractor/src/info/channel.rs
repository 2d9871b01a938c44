use serde::Serialize;

use super::{Info, ListInfo};
use crate::collectors::ErrorLog;
use crate::error::{ExtractionError, Result};
use crate::registry::services::ServiceList;
use crate::traits::extractor::ChannelExtractor;
use crate::traits::service::StreamingService;
use crate::types::config::ExtractorContext;
use crate::types::item::StreamInfoItem;
use crate::types::page::{InfoIdentity, InfoItemsPage};

/// A channel with its first page of uploads.
#[derive(Debug, Serialize)]
pub struct ChannelInfo {
    #[serde(flatten)]
    pub list: ListInfo<StreamInfoItem>,
    pub avatar_url: String,
    pub banner_url: String,
    pub feed_url: String,
    pub subscriber_count: u64,
    pub description: String,
}

impl ChannelInfo {
    /// Build from an extractor whose page is already fetched.
    pub fn from_extractor<E: ChannelExtractor + ?Sized>(extractor: &E) -> Result<Self> {
        let identity = InfoIdentity::from_extractor(extractor)?;
        let mut errors = ErrorLog::new();

        let avatar_url = errors.field_or_default("avatar_url", || extractor.avatar_url());
        let banner_url = errors.field_or_default("banner_url", || extractor.banner_url());
        let feed_url = errors.field_or_default("feed_url", || extractor.feed_url());
        let subscriber_count =
            errors.field_or_default("subscriber_count", || extractor.subscriber_count());
        let description = errors.field_or_default("description", || extractor.description());

        Ok(Self {
            list: ListInfo::with_first_page(identity, extractor, errors),
            avatar_url,
            banner_url,
            feed_url,
            subscriber_count,
            description,
        })
    }

    pub fn get_info(service: &dyn StreamingService, url: &str, ctx: &ExtractorContext) -> Result<Self> {
        let mut extractor = service.channel_extractor_for_url(url, ctx)?;
        extractor.fetch_page()?;
        Self::from_extractor(&*extractor)
    }

    pub fn get_info_by_url(services: &ServiceList, url: &str, ctx: &ExtractorContext) -> Result<Self> {
        let service = services.service_by_url(url)?;
        Self::get_info(&**service, url, ctx)
    }

    /// Page at `page_url`, without fetching the channel page.
    pub fn more_items(
        service: &dyn StreamingService,
        url: &str,
        page_url: &str,
        ctx: &ExtractorContext,
    ) -> Result<InfoItemsPage<StreamInfoItem>> {
        service.channel_extractor_for_url(url, ctx)?.page(page_url)
    }

    pub fn related_items(&self) -> &[StreamInfoItem] {
        &self.list.related_items
    }

    pub fn next_page_url(&self) -> &str {
        &self.list.next_page_url
    }
}

impl Info for ChannelInfo {
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
    use serde_json::json;
    use std::sync::Arc;

    const CHANNEL_URL: &str = "https://alpha.example.com/channel/UC1";

    fn channel_document() -> FixtureDocument {
        FixtureDocument::new("Fixture Channel")
            .with_field("avatar_url", json!("https://img.example.com/avatar.jpg"))
            .with_field("feed_url", json!("https://alpha.example.com/feeds/UC1.xml"))
            .with_field("description", json!("Videos about fixtures"))
            .with_item(FixtureItem::stream("https://alpha.example.com/watch?v=c1", "c1"))
            .with_item(FixtureItem::stream("https://alpha.example.com/watch?v=c2", "c2"))
            .with_next_page("cursor:2")
    }

    #[test]
    fn test_missing_banner_and_subscribers_are_recorded() {
        let downloader = MockDownloader::new().with_response(CHANNEL_URL, channel_document().to_json());
        let ctx = ExtractorContext::new(Arc::new(downloader));
        let service = FixtureService::new(0, "Alpha", "alpha.example.com").unwrap();

        let info = ChannelInfo::get_info(&service, CHANNEL_URL, &ctx).unwrap();

        assert_eq!(info.name(), "Fixture Channel");
        assert_eq!(info.id(), "UC1");
        assert_eq!(info.banner_url, "");
        assert_eq!(info.subscriber_count, 0);
        assert_eq!(info.errors().len(), 2);
        assert_eq!(info.avatar_url, "https://img.example.com/avatar.jpg");
        assert_eq!(info.description, "Videos about fixtures");

        let names: Vec<&str> = info.related_items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["c1", "c2"]);
        assert_eq!(info.next_page_url(), "cursor:2");
    }

    #[test]
    fn test_unreadable_first_page_is_not_fatal() {
        let document = channel_document()
            .with_field("banner_url", json!("https://img.example.com/banner.jpg"))
            .with_field("subscriber_count", json!(12))
            .with_page_error("video tab failed to render");
        let downloader = MockDownloader::new().with_response(CHANNEL_URL, document.to_json());
        let ctx = ExtractorContext::new(Arc::new(downloader));
        let service = FixtureService::new(0, "Alpha", "alpha.example.com").unwrap();

        let info = ChannelInfo::get_info(&service, CHANNEL_URL, &ctx).unwrap();

        assert_eq!(info.subscriber_count, 12);
        assert!(info.related_items().is_empty());
        assert_eq!(info.next_page_url(), "");
        assert_eq!(info.errors().len(), 1);
        assert!(matches!(
            info.errors().last(),
            Some(ExtractionError::Extraction(message)) if message == "video tab failed to render"
        ));
    }

    #[test]
    fn test_more_items_reads_only_the_cursor() {
        let downloader = MockDownloader::new().with_response(
            "cursor:2",
            FixtureDocument::page(
                vec![FixtureItem::stream("https://alpha.example.com/watch?v=c3", "c3")],
                "",
            )
            .to_json(),
        );
        let ctx = ExtractorContext::new(Arc::new(downloader.clone()));
        let service = FixtureService::new(0, "Alpha", "alpha.example.com").unwrap();

        let page = ChannelInfo::more_items(&service, CHANNEL_URL, "cursor:2", &ctx).unwrap();

        assert_eq!(page.items()[0].name, "c3");
        assert!(!page.has_next_page());
        assert_eq!(downloader.download_calls(), vec!["cursor:2".to_string()]);
    }
}

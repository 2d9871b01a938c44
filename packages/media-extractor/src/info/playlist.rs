use serde::Serialize;

use super::{Info, ListInfo};
use crate::collectors::ErrorLog;
use crate::error::{ExtractionError, Result};
use crate::registry::services::ServiceList;
use crate::traits::extractor::PlaylistExtractor;
use crate::traits::service::StreamingService;
use crate::types::config::ExtractorContext;
use crate::types::item::StreamInfoItem;
use crate::types::page::{InfoIdentity, InfoItemsPage};

/// A playlist with its first page of streams.
#[derive(Debug, Serialize)]
pub struct PlaylistInfo {
    #[serde(flatten)]
    pub list: ListInfo<StreamInfoItem>,
    pub thumbnail_url: String,
    pub banner_url: String,
    pub uploader_url: String,
    pub uploader_name: String,
    pub uploader_avatar_url: String,
    pub stream_count: u64,
}

impl PlaylistInfo {
    /// Build from an extractor whose page is already fetched.
    pub fn from_extractor<E: PlaylistExtractor + ?Sized>(extractor: &E) -> Result<Self> {
        let identity = InfoIdentity::from_extractor(extractor)?;
        let mut errors = ErrorLog::new();

        let stream_count = errors.field_or_default("stream_count", || extractor.stream_count());
        let thumbnail_url = errors.field_or_default("thumbnail_url", || extractor.thumbnail_url());
        let uploader_url = errors.field_or_default("uploader_url", || extractor.uploader_url());
        let uploader_name = errors.field_or_default("uploader_name", || extractor.uploader_name());
        let uploader_avatar_url =
            errors.field_or_default("uploader_avatar_url", || extractor.uploader_avatar_url());
        let banner_url = errors.field_or_default("banner_url", || extractor.banner_url());

        Ok(Self {
            list: ListInfo::with_first_page(identity, extractor, errors),
            thumbnail_url,
            banner_url,
            uploader_url,
            uploader_name,
            uploader_avatar_url,
            stream_count,
        })
    }

    /// Resolve the playlist extractor for `url`, fetch it and build the info.
    pub fn get_info(service: &dyn StreamingService, url: &str, ctx: &ExtractorContext) -> Result<Self> {
        let mut extractor = service.playlist_extractor_for_url(url, ctx)?;
        extractor.fetch_page()?;
        Self::from_extractor(&*extractor)
    }

    /// Like [`get_info`](Self::get_info), picking the service that accepts `url`.
    pub fn get_info_by_url(services: &ServiceList, url: &str, ctx: &ExtractorContext) -> Result<Self> {
        let service = services.service_by_url(url)?;
        Self::get_info(&**service, url, ctx)
    }

    /// Page at `page_url`, without fetching the playlist's first page.
    pub fn more_items(
        service: &dyn StreamingService,
        url: &str,
        page_url: &str,
        ctx: &ExtractorContext,
    ) -> Result<InfoItemsPage<StreamInfoItem>> {
        service.playlist_extractor_for_url(url, ctx)?.page(page_url)
    }

    pub fn related_items(&self) -> &[StreamInfoItem] {
        &self.list.related_items
    }

    pub fn next_page_url(&self) -> &str {
        &self.list.next_page_url
    }
}

impl Info for PlaylistInfo {
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
    use crate::testing::{FixtureDocument, FixtureExtractor, FixtureItem};
    use crate::traits::extractor::Extractor;
    use serde_json::json;
    use std::sync::Arc;

    fn fetched_playlist(document: FixtureDocument) -> FixtureExtractor {
        let downloader = MockDownloader::new()
            .with_response("https://example.com/playlist?list=PL1", document.to_json());
        let ctx = ExtractorContext::new(Arc::new(downloader));
        let mut extractor = FixtureExtractor::playlist("https://example.com/playlist?list=PL1", "PL1", ctx);
        extractor.fetch_page().unwrap();
        extractor
    }

    #[test]
    fn test_banner_failure_is_recorded_not_fatal() {
        let document = FixtureDocument::new("Mix")
            .with_field("thumbnail_url", json!("https://img.example.com/pl.jpg"))
            .with_field("uploader_url", json!("https://example.com/channel/u"))
            .with_field("uploader_name", json!("Uploader"))
            .with_field("uploader_avatar_url", json!("https://img.example.com/u.jpg"))
            .with_field("stream_count", json!(2))
            .with_item(FixtureItem::stream("https://example.com/watch?v=a", "a"))
            .with_item(FixtureItem::stream("https://example.com/watch?v=b", "b"));

        let info = PlaylistInfo::from_extractor(&fetched_playlist(document)).unwrap();

        assert_eq!(info.banner_url, "");
        assert_eq!(info.errors().len(), 1);
        assert_eq!(info.uploader_name, "Uploader");
        assert_eq!(info.stream_count, 2);
        assert_eq!(info.related_items().len(), 2);
        assert_eq!(info.name(), "Mix");
        assert!(!info.list.has_next_page());
    }

    #[test]
    fn test_unfetched_extractor_has_no_identity_page() {
        let ctx = ExtractorContext::new(Arc::new(MockDownloader::new()));
        let extractor = FixtureExtractor::playlist("https://example.com/playlist?list=PL1", "PL1", ctx);

        let err = PlaylistInfo::from_extractor(&extractor).unwrap_err();
        assert!(matches!(err, ExtractionError::PageNotFetched { .. }));
    }
}

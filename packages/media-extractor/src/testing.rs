//! Testing utilities: a JSON-backed fixture service.
//!
//! Pages are JSON [`FixtureDocument`]s served by a
//! [`MockDownloader`](crate::downloaders::MockDownloader), so the whole
//! framework (registries, collectors, info builders, pagination) can be
//! exercised without network access or a real scraper.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::collectors::{
    AnyItemExtractor, CommentsInfoItemsCollector, InfoItemsSearchCollector, StreamInfoItemsCollector,
};
use crate::error::{ExtractionError, Result};
use crate::handlers::PatternLinkHandlerFactory;
use crate::registry::kiosk::{KioskList, KioskRequest};
use crate::traits::downloader::Downloader;
use crate::traits::extractor::{
    ChannelExtractor, CommentsExtractor, Extractor, ExtractorBase, KioskExtractor, ListExtractor,
    PlaylistExtractor, SearchExtractor,
};
use crate::traits::item::{
    ChannelInfoItemExtractor, CommentsInfoItemExtractor, InfoItemExtractor,
    PlaylistInfoItemExtractor, StreamInfoItemExtractor,
};
use crate::traits::link_handler::{LinkHandlerFactory, ListLinkHandlerFactory};
use crate::traits::service::{MediaCapability, ServiceInfo, StreamingService};
use crate::traits::stream::{StreamExtractor, NO_AGE_LIMIT};
use crate::types::config::ExtractorContext;
use crate::types::item::{CommentsInfoItem, InfoItem, InfoType, StreamInfoItem};
use crate::types::link::{LinkHandler, ListLinkHandler};
use crate::types::media::{AudioStream, StreamType, SubtitlesStream, VideoStream};
use crate::types::page::InfoItemsPage;

/// Kiosks every fixture service registers, in order.
pub const FIXTURE_KIOSKS: [&str; 2] = ["trending", "recent"];

fn required<T: Clone>(value: &Option<T>, field: &str) -> Result<T> {
    value
        .clone()
        .ok_or_else(|| ExtractionError::parsing(format!("missing {field}")))
}

/// One list entry of a fixture page. Absent fields make their getter fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureItem {
    pub kind: InfoType,
    pub name: Option<String>,
    pub url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub stream_type: Option<StreamType>,
    pub duration: Option<u64>,
    pub view_count: Option<u64>,
    pub uploader_name: Option<String>,
    pub uploader_url: Option<String>,
    pub upload_date: Option<String>,
    pub description: Option<String>,
    pub subscriber_count: Option<u64>,
    pub stream_count: Option<u64>,
    pub comment_id: Option<String>,
    pub comment_text: Option<String>,
    pub author_name: Option<String>,
    pub author_thumbnail: Option<String>,
    pub author_endpoint: Option<String>,
    pub published_time: Option<String>,
    pub like_count: Option<u64>,
}

impl Default for FixtureItem {
    fn default() -> Self {
        Self {
            kind: InfoType::Stream,
            name: None,
            url: None,
            thumbnail_url: None,
            stream_type: None,
            duration: None,
            view_count: None,
            uploader_name: None,
            uploader_url: None,
            upload_date: None,
            description: None,
            subscriber_count: None,
            stream_count: None,
            comment_id: None,
            comment_text: None,
            author_name: None,
            author_thumbnail: None,
            author_endpoint: None,
            published_time: None,
            like_count: None,
        }
    }
}

impl FixtureItem {
    fn identified(kind: InfoType, url: &str, name: &str) -> Self {
        Self {
            kind,
            name: Some(name.to_string()),
            url: Some(url.to_string()),
            thumbnail_url: Some(format!("{url}/thumbnail.jpg")),
            ..Self::default()
        }
    }

    /// A stream entry with every field present.
    pub fn stream(url: &str, name: &str) -> Self {
        Self {
            stream_type: Some(StreamType::VideoStream),
            duration: Some(212),
            view_count: Some(1_000),
            uploader_name: Some("Fixture Uploader".into()),
            uploader_url: Some("https://example.com/channel/fixture".into()),
            upload_date: Some("2019-03-01".into()),
            ..Self::identified(InfoType::Stream, url, name)
        }
    }

    /// A playlist entry with every field present.
    pub fn playlist(url: &str, name: &str) -> Self {
        Self {
            uploader_name: Some("Fixture Uploader".into()),
            stream_count: Some(10),
            ..Self::identified(InfoType::Playlist, url, name)
        }
    }

    /// A channel entry with every field present.
    pub fn channel(url: &str, name: &str) -> Self {
        Self {
            description: Some("A fixture channel".into()),
            subscriber_count: Some(5_000),
            stream_count: Some(42),
            ..Self::identified(InfoType::Channel, url, name)
        }
    }

    /// A comment with every field present.
    pub fn comment(url: &str, name: &str) -> Self {
        Self {
            comment_id: Some(format!("{name}-id")),
            comment_text: Some(format!("{name} says hi")),
            author_name: Some(name.to_string()),
            author_thumbnail: Some("https://img.example.com/author.jpg".into()),
            author_endpoint: Some("https://example.com/channel/author".into()),
            published_time: Some("2 days ago".into()),
            like_count: Some(3),
            ..Self::identified(InfoType::Comment, url, name)
        }
    }

    /// Drop a field so its getter fails.
    pub fn without(mut self, field: &str) -> Self {
        match field {
            "name" => self.name = None,
            "url" => self.url = None,
            "thumbnail_url" => self.thumbnail_url = None,
            "stream_type" => self.stream_type = None,
            "duration" => self.duration = None,
            "view_count" => self.view_count = None,
            "uploader_name" => self.uploader_name = None,
            "uploader_url" => self.uploader_url = None,
            "upload_date" => self.upload_date = None,
            "description" => self.description = None,
            "subscriber_count" => self.subscriber_count = None,
            "stream_count" => self.stream_count = None,
            "comment_id" => self.comment_id = None,
            "comment_text" => self.comment_text = None,
            "author_name" => self.author_name = None,
            "author_thumbnail" => self.author_thumbnail = None,
            "author_endpoint" => self.author_endpoint = None,
            "published_time" => self.published_time = None,
            "like_count" => self.like_count = None,
            _ => {}
        }
        self
    }

    /// The item as an extractor of its own kind.
    pub fn as_any(&self) -> AnyItemExtractor<'_> {
        match self.kind {
            InfoType::Stream => AnyItemExtractor::Stream(self),
            InfoType::Playlist => AnyItemExtractor::Playlist(self),
            InfoType::Channel => AnyItemExtractor::Channel(self),
            InfoType::Comment => AnyItemExtractor::Comment(self),
        }
    }
}

impl InfoItemExtractor for FixtureItem {
    fn name(&self) -> Result<String> {
        required(&self.name, "name")
    }

    fn url(&self) -> Result<String> {
        required(&self.url, "url")
    }

    fn thumbnail_url(&self) -> Result<String> {
        required(&self.thumbnail_url, "thumbnail_url")
    }
}

impl StreamInfoItemExtractor for FixtureItem {
    fn stream_type(&self) -> Result<StreamType> {
        required(&self.stream_type, "stream_type")
    }

    fn duration(&self) -> Result<u64> {
        required(&self.duration, "duration")
    }

    fn view_count(&self) -> Result<u64> {
        required(&self.view_count, "view_count")
    }

    fn uploader_name(&self) -> Result<String> {
        required(&self.uploader_name, "uploader_name")
    }

    fn uploader_url(&self) -> Result<String> {
        required(&self.uploader_url, "uploader_url")
    }

    fn upload_date(&self) -> Result<String> {
        required(&self.upload_date, "upload_date")
    }
}

impl PlaylistInfoItemExtractor for FixtureItem {
    fn uploader_name(&self) -> Result<String> {
        required(&self.uploader_name, "uploader_name")
    }

    fn stream_count(&self) -> Result<u64> {
        required(&self.stream_count, "stream_count")
    }
}

impl ChannelInfoItemExtractor for FixtureItem {
    fn description(&self) -> Result<String> {
        required(&self.description, "description")
    }

    fn subscriber_count(&self) -> Result<u64> {
        required(&self.subscriber_count, "subscriber_count")
    }

    fn stream_count(&self) -> Result<u64> {
        required(&self.stream_count, "stream_count")
    }
}

impl CommentsInfoItemExtractor for FixtureItem {
    fn comment_id(&self) -> Result<String> {
        required(&self.comment_id, "comment_id")
    }

    fn comment_text(&self) -> Result<String> {
        required(&self.comment_text, "comment_text")
    }

    fn author_name(&self) -> Result<String> {
        required(&self.author_name, "author_name")
    }

    fn author_thumbnail(&self) -> Result<String> {
        required(&self.author_thumbnail, "author_thumbnail")
    }

    fn author_endpoint(&self) -> Result<String> {
        required(&self.author_endpoint, "author_endpoint")
    }

    fn published_time(&self) -> Result<String> {
        required(&self.published_time, "published_time")
    }

    fn like_count(&self) -> Result<u64> {
        required(&self.like_count, "like_count")
    }
}

/// A fixture page: resource name, named fields, list items and cursor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureDocument {
    pub name: Option<String>,
    pub fields: BTreeMap<String, Value>,
    pub items: Vec<FixtureItem>,
    pub next_page_url: String,
    /// Message a service would show instead of the content
    pub error_message: Option<String>,
    /// When set, the first page of the listing cannot be read
    pub page_error: Option<String>,
}

impl FixtureDocument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// A continuation page: items only, no resource metadata.
    pub fn page(items: Vec<FixtureItem>, next_page_url: impl Into<String>) -> Self {
        Self {
            items,
            next_page_url: next_page_url.into(),
            ..Self::default()
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    pub fn with_item(mut self, item: FixtureItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_next_page(mut self, next_page_url: impl Into<String>) -> Self {
        self.next_page_url = next_page_url.into();
        self
    }

    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Metadata stays readable but the first page of items fails.
    pub fn with_page_error(mut self, message: impl Into<String>) -> Self {
        self.page_error = Some(message.into());
        self
    }

    /// Body to register with a mock downloader.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Parse a downloaded body; anything else than a fixture document is an
    /// unrecognised page.
    pub fn parse(body: &str) -> Result<Self> {
        serde_json::from_str(body)
            .map_err(|e| ExtractionError::Extraction(format!("unrecognised fixture page: {e}")))
    }

    fn value<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let value = self
            .fields
            .get(key)
            .ok_or_else(|| ExtractionError::parsing(format!("missing {key}")))?;
        serde_json::from_value(value.clone())
            .map_err(|e| ExtractionError::parsing_with(format!("malformed {key}"), e))
    }

    fn value_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T> {
        if self.fields.contains_key(key) {
            self.value(key)
        } else {
            Ok(T::default())
        }
    }
}

/// Extractor over fixture documents, implementing every extractor contract.
pub struct FixtureExtractor {
    base: ExtractorBase,
    kiosk_id: String,
    document: Option<FixtureDocument>,
}

impl FixtureExtractor {
    pub fn from_handler(service_id: u32, handler: LinkHandler, ctx: ExtractorContext) -> Self {
        Self {
            base: ExtractorBase::new(service_id, handler, ctx),
            kiosk_id: String::new(),
            document: None,
        }
    }

    pub fn from_list_handler(service_id: u32, handler: ListLinkHandler, ctx: ExtractorContext) -> Self {
        Self {
            base: ExtractorBase::for_list(service_id, handler, ctx),
            kiosk_id: String::new(),
            document: None,
        }
    }

    pub fn from_kiosk_request(request: KioskRequest) -> Self {
        Self {
            base: ExtractorBase::for_list(request.service_id, request.handler, request.context),
            kiosk_id: request.kiosk_id,
            document: None,
        }
    }

    /// Stream extractor for `url` (taken as canonical) on service 0.
    pub fn stream(url: &str, id: &str, ctx: ExtractorContext) -> Self {
        Self::from_handler(0, LinkHandler::new(url, url, id), ctx)
    }

    /// List extractor for `url` (taken as canonical) on service 0.
    pub fn playlist(url: &str, id: &str, ctx: ExtractorContext) -> Self {
        Self::from_list_handler(0, ListLinkHandler::new(url, url, id), ctx)
    }

    /// The fetched document, as long as its first page is readable.
    fn first_page(&self) -> Result<&FixtureDocument> {
        let document = self.document()?;
        match &document.page_error {
            Some(message) => Err(ExtractionError::Extraction(message.clone())),
            None => Ok(document),
        }
    }

    pub fn document(&self) -> Result<&FixtureDocument> {
        self.assert_page_fetched()?;
        self.document
            .as_ref()
            .ok_or_else(|| ExtractionError::PageNotFetched {
                url: self.base.link_handler().url.clone(),
            })
    }

    fn load_page(&self, page_url: &str) -> Result<FixtureDocument> {
        let body = self
            .base
            .context()
            .downloader()
            .download(page_url, self.base.context().localization())?;
        FixtureDocument::parse(&body)
    }

    fn stream_page(&self, document: &FixtureDocument) -> InfoItemsPage<StreamInfoItem> {
        let mut collector = StreamInfoItemsCollector::new(self.base.service_id());
        for item in &document.items {
            collector.commit(item);
        }
        collector.into_page(document.next_page_url.clone())
    }

    fn comments_page(&self, document: &FixtureDocument) -> InfoItemsPage<CommentsInfoItem> {
        let mut collector = CommentsInfoItemsCollector::new(self.base.service_id());
        for item in &document.items {
            collector.commit(item);
        }
        collector.into_page(document.next_page_url.clone())
    }

    fn search_page(&self, document: &FixtureDocument) -> InfoItemsPage<InfoItem> {
        let mut collector = InfoItemsSearchCollector::new(self.base.service_id());
        for item in &document.items {
            collector.commit(&item.as_any());
        }
        collector.into_page(document.next_page_url.clone())
    }
}

impl Extractor for FixtureExtractor {
    fn base(&self) -> &ExtractorBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ExtractorBase {
        &mut self.base
    }

    fn on_fetch_page(&mut self, downloader: &dyn Downloader) -> Result<()> {
        let body = downloader.download(
            &self.base.link_handler().url,
            self.base.context().localization(),
        )?;
        self.document = Some(FixtureDocument::parse(&body)?);
        Ok(())
    }

    fn name(&self) -> Result<String> {
        required(&self.document()?.name, "name")
    }
}

impl ListExtractor<StreamInfoItem> for FixtureExtractor {
    fn initial_page(&self) -> Result<InfoItemsPage<StreamInfoItem>> {
        Ok(self.stream_page(self.first_page()?))
    }

    fn page(&self, page_url: &str) -> Result<InfoItemsPage<StreamInfoItem>> {
        Ok(self.stream_page(&self.load_page(page_url)?))
    }

    fn next_page_url(&self) -> Result<String> {
        Ok(self.document()?.next_page_url.clone())
    }
}

impl ListExtractor<CommentsInfoItem> for FixtureExtractor {
    fn initial_page(&self) -> Result<InfoItemsPage<CommentsInfoItem>> {
        Ok(self.comments_page(self.first_page()?))
    }

    fn page(&self, page_url: &str) -> Result<InfoItemsPage<CommentsInfoItem>> {
        Ok(self.comments_page(&self.load_page(page_url)?))
    }

    fn next_page_url(&self) -> Result<String> {
        Ok(self.document()?.next_page_url.clone())
    }
}

impl ListExtractor<InfoItem> for FixtureExtractor {
    fn initial_page(&self) -> Result<InfoItemsPage<InfoItem>> {
        Ok(self.search_page(self.first_page()?))
    }

    fn page(&self, page_url: &str) -> Result<InfoItemsPage<InfoItem>> {
        Ok(self.search_page(&self.load_page(page_url)?))
    }

    fn next_page_url(&self) -> Result<String> {
        Ok(self.document()?.next_page_url.clone())
    }
}

impl StreamExtractor for FixtureExtractor {
    fn upload_date(&self) -> Result<String> {
        self.document()?.value("upload_date")
    }

    fn thumbnail_url(&self) -> Result<String> {
        self.document()?.value("thumbnail_url")
    }

    fn description(&self) -> Result<String> {
        self.document()?.value("description")
    }

    fn age_limit(&self) -> Result<u32> {
        let document = self.document()?;
        if document.fields.contains_key("age_limit") {
            document.value("age_limit")
        } else {
            Ok(NO_AGE_LIMIT)
        }
    }

    fn length(&self) -> Result<u64> {
        self.document()?.value("length")
    }

    fn view_count(&self) -> Result<u64> {
        self.document()?.value("view_count")
    }

    fn like_count(&self) -> Result<u64> {
        self.document()?.value("like_count")
    }

    fn dislike_count(&self) -> Result<u64> {
        self.document()?.value("dislike_count")
    }

    fn uploader_url(&self) -> Result<String> {
        self.document()?.value("uploader_url")
    }

    fn uploader_name(&self) -> Result<String> {
        self.document()?.value("uploader_name")
    }

    fn uploader_avatar_url(&self) -> Result<String> {
        self.document()?.value("uploader_avatar_url")
    }

    fn dash_mpd_url(&self) -> Result<String> {
        self.document()?.value_or_default("dash_mpd_url")
    }

    fn hls_url(&self) -> Result<String> {
        self.document()?.value_or_default("hls_url")
    }

    fn audio_streams(&self) -> Result<Vec<AudioStream>> {
        self.document()?.value_or_default("audio_streams")
    }

    fn video_streams(&self) -> Result<Vec<VideoStream>> {
        self.document()?.value_or_default("video_streams")
    }

    fn video_only_streams(&self) -> Result<Vec<VideoStream>> {
        self.document()?.value_or_default("video_only_streams")
    }

    fn subtitles_default(&self) -> Result<Vec<SubtitlesStream>> {
        self.document()?.value_or_default("subtitles")
    }

    fn stream_type(&self) -> Result<StreamType> {
        self.document()?.value("stream_type")
    }

    fn related_streams(&self) -> Result<StreamInfoItemsCollector> {
        let mut collector = StreamInfoItemsCollector::new(self.base.service_id());
        for item in &self.document()?.items {
            collector.commit(item);
        }
        Ok(collector)
    }

    fn error_message(&self) -> Option<String> {
        self.document.as_ref().and_then(|document| document.error_message.clone())
    }
}

impl PlaylistExtractor for FixtureExtractor {
    fn thumbnail_url(&self) -> Result<String> {
        self.document()?.value("thumbnail_url")
    }

    fn banner_url(&self) -> Result<String> {
        self.document()?.value("banner_url")
    }

    fn uploader_url(&self) -> Result<String> {
        self.document()?.value("uploader_url")
    }

    fn uploader_name(&self) -> Result<String> {
        self.document()?.value("uploader_name")
    }

    fn uploader_avatar_url(&self) -> Result<String> {
        self.document()?.value("uploader_avatar_url")
    }

    fn stream_count(&self) -> Result<u64> {
        self.document()?.value("stream_count")
    }
}

impl ChannelExtractor for FixtureExtractor {
    fn avatar_url(&self) -> Result<String> {
        self.document()?.value("avatar_url")
    }

    fn banner_url(&self) -> Result<String> {
        self.document()?.value("banner_url")
    }

    fn feed_url(&self) -> Result<String> {
        self.document()?.value("feed_url")
    }

    fn subscriber_count(&self) -> Result<u64> {
        self.document()?.value("subscriber_count")
    }

    fn description(&self) -> Result<String> {
        self.document()?.value("description")
    }
}

impl KioskExtractor for FixtureExtractor {
    fn kiosk_id(&self) -> &str {
        &self.kiosk_id
    }
}

impl CommentsExtractor for FixtureExtractor {}

impl SearchExtractor for FixtureExtractor {
    fn search_suggestion(&self) -> Result<String> {
        self.document()?.value_or_default("search_suggestion")
    }
}

fn fixture_kiosk(request: KioskRequest) -> Result<Box<dyn KioskExtractor>> {
    let extractor: Box<dyn KioskExtractor> = Box::new(FixtureExtractor::from_kiosk_request(request));
    Ok(extractor)
}

/// A streaming service on one host whose pages are fixture documents.
///
/// URL layout (`{host}` is the configured host):
///
/// | Resource | URL |
/// |----------|-----|
/// | stream   | `https://{host}/watch?v={id}` |
/// | channel  | `https://{host}/channel/{id}` |
/// | playlist | `https://{host}/playlist?list={id}` |
/// | search   | `https://{host}/search?q={query}` |
/// | comments | `https://{host}/comments?v={id}` |
/// | kiosk    | `https://{host}/feed/{trending,recent}` |
pub struct FixtureService {
    service_id: u32,
    info: ServiceInfo,
    stream: PatternLinkHandlerFactory,
    channel: PatternLinkHandlerFactory,
    playlist: PatternLinkHandlerFactory,
    search: PatternLinkHandlerFactory,
    comments: PatternLinkHandlerFactory,
    kiosks: KioskList,
}

impl FixtureService {
    pub fn new(service_id: u32, name: &str, host: &str) -> Result<Self> {
        let escaped = regex::escape(host);
        let factory = |path_pattern: &str, template: &str| {
            PatternLinkHandlerFactory::new(
                &format!(r"^https?://{escaped}{path_pattern}"),
                format!("https://{host}{template}"),
            )
        };

        let mut kiosks = KioskList::new(service_id);
        for kiosk in FIXTURE_KIOSKS {
            let handler_factory = factory(&format!("/feed/({kiosk})$"), "/feed/{id}")?;
            kiosks.add_kiosk_entry(fixture_kiosk, Arc::new(handler_factory), kiosk)?;
        }
        kiosks.set_default_kiosk(FIXTURE_KIOSKS[0])?;

        Ok(Self {
            service_id,
            info: ServiceInfo::new(
                name,
                vec![MediaCapability::Audio, MediaCapability::Video, MediaCapability::Comments],
            ),
            stream: factory(r"/watch\?v=([\w-]+)", "/watch?v={id}")?,
            channel: factory(r"/channel/([\w-]+)", "/channel/{id}")?,
            playlist: factory(r"/playlist\?list=([\w-]+)", "/playlist?list={id}")?,
            search: factory(r"/search\?q=([^&]+)", "/search?q={id}")?
                .with_content_filters(["videos", "channels", "playlists"])
                .with_sort_filters(["relevance", "date"]),
            comments: factory(r"/comments\?v=([\w-]+)", "/comments?v={id}")?,
            kiosks,
        })
    }
}

impl StreamingService for FixtureService {
    fn service_id(&self) -> u32 {
        self.service_id
    }

    fn service_info(&self) -> &ServiceInfo {
        &self.info
    }

    fn stream_lh_factory(&self) -> &dyn LinkHandlerFactory {
        &self.stream
    }

    fn channel_lh_factory(&self) -> &dyn ListLinkHandlerFactory {
        &self.channel
    }

    fn playlist_lh_factory(&self) -> &dyn ListLinkHandlerFactory {
        &self.playlist
    }

    fn search_lh_factory(&self) -> &dyn ListLinkHandlerFactory {
        &self.search
    }

    fn comments_lh_factory(&self) -> Option<&dyn ListLinkHandlerFactory> {
        Some(&self.comments)
    }

    fn kiosk_list(&self) -> &KioskList {
        &self.kiosks
    }

    fn stream_extractor(
        &self,
        handler: LinkHandler,
        ctx: &ExtractorContext,
    ) -> Result<Box<dyn StreamExtractor>> {
        Ok(Box::new(FixtureExtractor::from_handler(self.service_id, handler, ctx.clone())))
    }

    fn playlist_extractor(
        &self,
        handler: ListLinkHandler,
        ctx: &ExtractorContext,
    ) -> Result<Box<dyn PlaylistExtractor>> {
        Ok(Box::new(FixtureExtractor::from_list_handler(self.service_id, handler, ctx.clone())))
    }

    fn channel_extractor(
        &self,
        handler: ListLinkHandler,
        ctx: &ExtractorContext,
    ) -> Result<Box<dyn ChannelExtractor>> {
        Ok(Box::new(FixtureExtractor::from_list_handler(self.service_id, handler, ctx.clone())))
    }

    fn search_extractor(
        &self,
        handler: ListLinkHandler,
        ctx: &ExtractorContext,
    ) -> Result<Box<dyn SearchExtractor>> {
        Ok(Box::new(FixtureExtractor::from_list_handler(self.service_id, handler, ctx.clone())))
    }

    fn comments_extractor(
        &self,
        handler: ListLinkHandler,
        ctx: &ExtractorContext,
    ) -> Result<Box<dyn CommentsExtractor>> {
        Ok(Box::new(FixtureExtractor::from_list_handler(self.service_id, handler, ctx.clone())))
    }
}

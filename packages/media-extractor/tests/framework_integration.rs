//! Integration tests for the extraction framework.
//!
//! These tests drive a fixture service end to end:
//! 1. Resolve a URL to a service
//! 2. Create and fetch an extractor
//! 3. Build the info record, collecting per-field errors
//! 4. Follow page cursors

use media_extractor::{
    error::DownloadResult,
    info::pages_from,
    testing::{FixtureDocument, FixtureExtractor, FixtureItem, FixtureService},
    types::item::InfoType,
    AudioStream, CommentsInfo, Downloader, ExtractionError, Extractor, ExtractorContext, Info,
    KioskInfo, Localization, MediaFormat, MockDownloader, PlaylistInfo, SearchInfo, ServiceList,
    StreamInfo, StreamType, StreamingService, UrlTimestamp,
};
use mockall::mock;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

const PLAYLIST_URL: &str = "https://alpha.example.com/playlist?list=PL1";
const STREAM_URL: &str = "https://alpha.example.com/watch?v=abc";

mock! {
    pub Transport {}

    impl Downloader for Transport {
        fn download(&self, url: &str, localization: &Localization) -> DownloadResult<String>;
        fn download_with_headers(
            &self,
            url: &str,
            headers: &HashMap<String, String>,
        ) -> DownloadResult<String>;
        fn name(&self) -> &'static str;
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Helper to create the two-service registry used by most tests.
fn services() -> ServiceList {
    ServiceList::new()
        .with_service(Arc::new(FixtureService::new(0, "Alpha", "alpha.example.com").unwrap()))
        .unwrap()
        .with_service(Arc::new(FixtureService::new(1, "Beta", "beta.example.com").unwrap()))
        .unwrap()
}

fn alpha() -> FixtureService {
    FixtureService::new(0, "Alpha", "alpha.example.com").unwrap()
}

fn context(downloader: &MockDownloader) -> ExtractorContext {
    ExtractorContext::new(Arc::new(downloader.clone()))
}

fn stream_items(prefix: &str, count: usize) -> Vec<FixtureItem> {
    (0..count)
        .map(|i| {
            FixtureItem::stream(
                &format!("https://alpha.example.com/watch?v={prefix}{i}"),
                &format!("{prefix} {i}"),
            )
        })
        .collect()
}

fn playlist_document() -> FixtureDocument {
    let mut document = FixtureDocument::new("Road trip")
        .with_field("thumbnail_url", json!("https://img.example.com/pl.jpg"))
        .with_field("uploader_url", json!("https://alpha.example.com/channel/u1"))
        .with_field("uploader_name", json!("Uploader"))
        .with_field("uploader_avatar_url", json!("https://img.example.com/u1.jpg"))
        .with_field("stream_count", json!(5))
        .with_next_page("cursor:2");
    for item in stream_items("first", 3) {
        document = document.with_item(item);
    }
    document
}

fn audio_only_stream_document() -> FixtureDocument {
    let audio = vec![AudioStream::new(
        "https://cdn.example.com/abc.m4a",
        MediaFormat::M4a,
        128,
    )];

    FixtureDocument::new("A song")
        .with_field("stream_type", json!(StreamType::AudioStream))
        .with_field("audio_streams", serde_json::to_value(audio).unwrap())
        .with_field("thumbnail_url", json!("https://img.example.com/abc.jpg"))
        .with_field("description", json!("Live at the park"))
        .with_field("upload_date", json!("2019-03-01"))
        .with_field("length", json!(212))
        .with_field("view_count", json!(1200))
        .with_field("like_count", json!(30))
        .with_field("dislike_count", json!(1))
        .with_field("uploader_url", json!("https://alpha.example.com/channel/u1"))
        .with_field("uploader_name", json!("Uploader"))
        .with_field("uploader_avatar_url", json!("https://img.example.com/u1.jpg"))
        .with_item(FixtureItem::stream("https://alpha.example.com/watch?v=next", "Next"))
}

#[test]
fn test_playlist_with_missing_banner_is_partial() {
    init_tracing();
    let downloader = MockDownloader::new().with_response(PLAYLIST_URL, playlist_document().to_json());

    let info = PlaylistInfo::get_info_by_url(&services(), PLAYLIST_URL, &context(&downloader)).unwrap();

    assert_eq!(info.name(), "Road trip");
    assert_eq!(info.id(), "PL1");
    assert_eq!(info.service_id(), 0);
    assert_eq!(info.uploader_name, "Uploader");
    assert_eq!(info.banner_url, "");
    assert_eq!(info.errors().len(), 1);
    assert!(matches!(info.errors()[0], ExtractionError::Parsing { .. }));
    assert!(!info.is_complete());
    assert_eq!(info.related_items().len(), 3);
    assert_eq!(info.next_page_url(), "cursor:2");
}

#[test]
fn test_item_failures_do_not_abort_the_page() {
    let document = FixtureDocument::new("Mixed quality")
        .with_field("banner_url", json!("https://img.example.com/banner.jpg"))
        .with_item(FixtureItem::stream("https://alpha.example.com/watch?v=a", "A"))
        .with_item(FixtureItem::stream("https://alpha.example.com/watch?v=b", "B").without("name"))
        .with_item(FixtureItem::stream("https://alpha.example.com/watch?v=c", "C").without("duration"));
    let downloader = MockDownloader::new().with_response(PLAYLIST_URL, document.to_json());

    let info = PlaylistInfo::get_info(&alpha(), PLAYLIST_URL, &context(&downloader)).unwrap();

    let names: Vec<&str> = info.related_items().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["A", "C"]);
    assert_eq!(info.related_items()[1].duration, None);
    assert_eq!(info.related_items()[0].duration, Some(212));

    // five missing playlist fields, then one dropped item and one missing duration
    assert_eq!(info.errors().len(), 7);
    assert!(!info.list.has_next_page());
}

#[test]
fn test_more_items_does_not_fetch_first_page() {
    let downloader = MockDownloader::new()
        .with_response(PLAYLIST_URL, playlist_document().to_json())
        .with_response(
            "cursor:2",
            FixtureDocument::page(stream_items("second", 2), "cursor:3").to_json(),
        );

    let page = PlaylistInfo::more_items(&alpha(), PLAYLIST_URL, "cursor:2", &context(&downloader)).unwrap();

    assert_eq!(page.items().len(), 2);
    assert_eq!(page.next_page_url(), "cursor:3");
    assert_eq!(downloader.calls_for(PLAYLIST_URL), 0);
    assert_eq!(downloader.download_calls(), vec!["cursor:2".to_string()]);
}

#[test]
fn test_pagination_ends_on_empty_cursor() {
    let downloader = MockDownloader::new()
        .with_response(PLAYLIST_URL, playlist_document().to_json())
        .with_response(
            "cursor:2",
            FixtureDocument::page(stream_items("second", 2), "cursor:3").to_json(),
        )
        .with_response("cursor:3", FixtureDocument::page(stream_items("third", 1), "").to_json());

    let service = alpha();
    let mut extractor = service
        .playlist_extractor_for_url(PLAYLIST_URL, &context(&downloader))
        .unwrap();
    extractor.fetch_page().unwrap();

    let sizes: Vec<usize> = media_extractor::pages::<media_extractor::StreamInfoItem, _>(&*extractor)
        .map(|page| page.unwrap().items().len())
        .collect();

    assert_eq!(sizes, vec![3, 2, 1]);
    assert_eq!(downloader.call_count(), 3);
}

#[test]
fn test_pagination_stops_on_repeated_cursor() {
    init_tracing();
    let downloader = MockDownloader::new()
        .with_response("cursor:a", FixtureDocument::page(stream_items("a", 1), "cursor:b").to_json())
        .with_response("cursor:b", FixtureDocument::page(stream_items("b", 1), "cursor:a").to_json());

    let extractor = FixtureExtractor::playlist(PLAYLIST_URL, "PL1", context(&downloader));
    let pages: Vec<_> = pages_from::<media_extractor::StreamInfoItem, _>(&extractor, "cursor:a").collect();

    assert_eq!(pages.len(), 2);
    assert!(pages.iter().all(Result::is_ok));
    assert_eq!(downloader.calls_for("cursor:a"), 1);
}

#[test]
fn test_pagination_stops_after_error() {
    let downloader = MockDownloader::new()
        .with_response("cursor:a", FixtureDocument::page(stream_items("a", 1), "cursor:gone").to_json());

    let extractor = FixtureExtractor::playlist(PLAYLIST_URL, "PL1", context(&downloader));
    let pages: Vec<_> = pages_from::<media_extractor::StreamInfoItem, _>(&extractor, "cursor:a").collect();

    assert_eq!(pages.len(), 2);
    let err = pages[1].as_ref().unwrap_err();
    assert!(err.is_transport());
}

#[test]
fn test_default_kiosk_info() {
    let feed = FixtureDocument::new("Trending")
        .with_item(FixtureItem::stream("https://alpha.example.com/watch?v=t1", "T1"));
    let downloader =
        MockDownloader::new().with_response("https://alpha.example.com/feed/trending", feed.to_json());

    let service = alpha();
    let info = KioskInfo::default_kiosk(&service, &context(&downloader))
        .unwrap()
        .unwrap();

    assert_eq!(info.kiosk_id, "trending");
    assert_eq!(info.name(), "Trending");
    assert_eq!(info.related_items().len(), 1);
    assert!(info.is_complete());
    assert_eq!(service.kiosk_list().available_kiosks(), vec!["trending", "recent"]);
}

#[test]
fn test_kiosk_url_resolves_to_its_service() {
    let feed = FixtureDocument::new("Recent").with_next_page("cursor:r2");
    let downloader =
        MockDownloader::new().with_response("https://beta.example.com/feed/recent", feed.to_json());

    let info = KioskInfo::get_info_by_url(
        &services(),
        "https://beta.example.com/feed/recent",
        &context(&downloader),
    )
    .unwrap();

    assert_eq!(info.service_id(), 1);
    assert_eq!(info.kiosk_id, "recent");
    assert_eq!(info.next_page_url(), "cursor:r2");
}

#[test]
fn test_service_resolution() {
    let services = services();

    assert_eq!(
        services.service_by_url("https://beta.example.com/channel/xyz").unwrap().name(),
        "Beta"
    );
    assert!(matches!(
        services.service_by_url("https://gamma.example.com/watch?v=abc"),
        Err(ExtractionError::NoMatchingExtractor { .. })
    ));
    assert!(services.service_by_name("BETA").is_ok());
}

#[test]
fn test_stream_info_with_url_timestamp() {
    let downloader = MockDownloader::new().with_response(STREAM_URL, audio_only_stream_document().to_json());

    let info = StreamInfo::get_info_by_url(
        &services(),
        "https://alpha.example.com/watch?v=abc&t=174",
        &context(&downloader),
    )
    .unwrap();

    assert_eq!(info.url(), STREAM_URL);
    assert_eq!(info.original_url(), "https://alpha.example.com/watch?v=abc&t=174");
    assert_eq!(info.start_position, UrlTimestamp::At(174));
    assert_eq!(info.start_seconds(), Some(174));
    assert_eq!(info.stream_type, StreamType::AudioStream);
    assert_eq!(info.audio_streams.len(), 1);
    assert_eq!(info.duration, 212);
    assert_eq!(info.related_streams.len(), 1);
    assert!(info.parsed_upload_date.is_some());
    assert!(info.is_complete(), "unexpected errors: {:?}", info.errors());
}

#[test]
fn test_stream_without_media_fails() {
    let document = FixtureDocument::new("Nothing here").with_field("stream_type", json!("video_stream"));
    let downloader = MockDownloader::new().with_response(STREAM_URL, document.to_json());

    let err = StreamInfo::get_info(&alpha(), STREAM_URL, &context(&downloader)).unwrap_err();

    assert!(matches!(err, ExtractionError::NoStreams { .. }));
}

#[test]
fn test_stream_with_service_message_is_not_available() {
    let document = FixtureDocument::new("Private video")
        .with_field("stream_type", json!("video_stream"))
        .with_error_message("This video is private");
    let downloader = MockDownloader::new().with_response(STREAM_URL, document.to_json());

    let err = StreamInfo::get_info(&alpha(), STREAM_URL, &context(&downloader)).unwrap_err();

    match err {
        ExtractionError::ContentNotAvailable { reason } => assert_eq!(reason, "This video is private"),
        other => panic!("expected ContentNotAvailable, got {other:?}"),
    }
}

#[test]
fn test_search_with_filters_collects_mixed_items() {
    let service = alpha();
    let handler = service
        .search_lh_factory()
        .from_query("rust", vec!["videos".to_string()], "date".to_string())
        .unwrap();

    let results = FixtureDocument::new("rust")
        .with_field("search_suggestion", json!("rust lang"))
        .with_item(FixtureItem::stream("https://alpha.example.com/watch?v=r1", "R1"))
        .with_item(FixtureItem::channel("https://alpha.example.com/channel/rc", "Rust Channel"))
        .with_item(FixtureItem::playlist("https://alpha.example.com/playlist?list=rp", "Rust Playlist"));
    let downloader = MockDownloader::new().with_response(handler.url.clone(), results.to_json());

    let info = SearchInfo::search(
        &service,
        "rust",
        vec!["videos".to_string()],
        "date".to_string(),
        &context(&downloader),
    )
    .unwrap();

    assert_eq!(info.search_string, "rust");
    assert_eq!(info.search_suggestion, "rust lang");
    assert_eq!(info.list.content_filters, vec!["videos"]);
    assert_eq!(info.list.sort_filter, "date");
    let kinds: Vec<InfoType> = info.items().iter().map(|i| i.info_type()).collect();
    assert_eq!(kinds, vec![InfoType::Stream, InfoType::Channel, InfoType::Playlist]);
    assert!(info.is_complete());
}

#[test]
fn test_comments() {
    let url = "https://alpha.example.com/comments?v=abc";
    let comments = FixtureDocument::new("Comments")
        .with_item(FixtureItem::comment(url, "alice"))
        .with_item(FixtureItem::comment(url, "bob").without("like_count"));
    let downloader = MockDownloader::new().with_response(url, comments.to_json());

    let info = CommentsInfo::get_info(&alpha(), url, &context(&downloader)).unwrap();

    assert_eq!(info.comments().len(), 2);
    assert_eq!(info.comments()[0].comment_text.as_deref(), Some("alice says hi"));
    assert_eq!(info.comments()[1].like_count, None);
    assert_eq!(info.errors().len(), 1);
}

#[test]
fn test_transport_failure_is_fatal() {
    let downloader = MockDownloader::new();

    let err = PlaylistInfo::get_info(&alpha(), PLAYLIST_URL, &context(&downloader)).unwrap_err();

    assert!(err.is_transport());
}

#[test]
fn test_fetch_page_downloads_once() {
    let body = playlist_document().to_json();
    let mut transport = MockTransport::new();
    transport.expect_name().return_const("transport");
    transport
        .expect_download()
        .withf(|url, _| url == PLAYLIST_URL)
        .times(1)
        .returning(move |_, _| Ok(body.clone()));

    let ctx = ExtractorContext::new(Arc::new(transport));
    let mut extractor = FixtureExtractor::playlist(PLAYLIST_URL, "PL1", ctx);

    extractor.fetch_page().unwrap();
    extractor.fetch_page().unwrap();

    assert!(extractor.base().is_page_fetched());
    assert_eq!(extractor.name().unwrap(), "Road trip");
}

#[test]
fn test_localization_reaches_the_downloader() {
    let body = playlist_document().to_json();
    let mut transport = MockTransport::new();
    transport.expect_name().return_const("transport");
    transport
        .expect_download()
        .withf(|_, localization| localization.language == "de")
        .times(1)
        .returning(move |_, _| Ok(body.clone()));

    let ctx = ExtractorContext::new(Arc::new(transport))
        .with_localization(Localization::new("DE", "de"));

    let info = PlaylistInfo::get_info(&alpha(), PLAYLIST_URL, &ctx).unwrap();
    assert_eq!(info.name(), "Road trip");
}

//! Service-Agnostic Media Extraction Framework
//!
//! The scaffolding shared by per-site scrapers of streaming platforms:
//! scrapers implement the extractor traits for their site, and the
//! framework turns them into info records, paginates their lists and
//! registers them by service and kiosk.
//!
//! # Design Philosophy
//!
//! - One missing field never sinks a whole record: per-field failures are
//!   recorded next to the partial result
//! - Identity (id, url, name) is the only mandatory part of anything
//! - Transport is injected, never global
//! - Everything is synchronous; concurrency is the caller's business
//!
//! # Usage
//!
//! ```rust,ignore
//! use media_extractor::{ExtractorContext, HttpDownloader, PlaylistInfo, ServiceList};
//! use std::sync::Arc;
//!
//! let services = ServiceList::new().with_service(Arc::new(MySiteService::new()?))?;
//! let ctx = ExtractorContext::new(Arc::new(HttpDownloader::new()?));
//!
//! let playlist = PlaylistInfo::get_info_by_url(&services, "https://mysite.example/playlist?list=PL1", &ctx)?;
//! for error in playlist.errors() {
//!     tracing::warn!("partial playlist: {}", error);
//! }
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Extractor, item extractor, link handler and service contracts
//! - [`types`] - Link handlers, items, pages, media descriptors, configuration
//! - [`collectors`] - Error-isolating item collection
//! - [`info`] - Info builders and pagination
//! - [`registry`] - Kiosk and service registries
//! - [`handlers`] - Regex-driven link handler factory
//! - [`downloaders`] - HTTP and mock downloaders
//! - [`utils`] - Parsing helpers (regex groups, numbers, dates, URL timestamps)
//! - [`testing`] - JSON fixture service for tests

pub mod collectors;
pub mod downloaders;
pub mod error;
pub mod handlers;
pub mod info;
pub mod registry;
pub mod testing;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export core types at crate root
pub use collectors::{
    ChannelInfoItemsCollector, CommentsInfoItemsCollector, ErrorLog, InfoItemsCollector,
    InfoItemsSearchCollector, PlaylistInfoItemsCollector, StreamInfoItemsCollector,
};
pub use downloaders::{HttpDownloader, MockDownloader};
pub use error::{DownloadError, ExtractionError, Result};
pub use handlers::PatternLinkHandlerFactory;
pub use info::{
    pages, ChannelInfo, CommentsInfo, Info, KioskInfo, ListInfo, PlaylistInfo, SearchInfo,
    StreamInfo,
};
pub use registry::{KioskList, ServiceList};
pub use traits::{
    ChannelExtractor, CommentsExtractor, Downloader, Extractor, KioskExtractor,
    LinkHandlerFactory, ListExtractor, ListLinkHandlerFactory, PlaylistExtractor, SearchExtractor,
    StreamExtractor, StreamingService,
};
pub use types::{
    config::{ExtractorContext, HttpDownloaderConfig, Localization},
    item::{ChannelInfoItem, CommentsInfoItem, InfoItem, InfoType, PlaylistInfoItem, StreamInfoItem},
    link::{LinkHandler, ListLinkHandler},
    media::{AudioStream, MediaFormat, StreamType, SubtitlesStream, VideoStream},
    page::{InfoIdentity, InfoItemsPage},
};
pub use utils::timestamp::UrlTimestamp;

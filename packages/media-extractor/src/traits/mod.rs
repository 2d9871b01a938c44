//! Core traits for the extraction framework.
//!
//! These traits define the seams between the framework and per-service code:
//! - `Downloader` - blocking page fetch
//! - `LinkHandlerFactory` - URL and id recognition
//! - `Extractor` and its variants - two-phase resource extraction
//! - item extractors - one entry of a listing
//! - `StreamingService` - one supported site

pub mod downloader;
pub mod extractor;
pub mod item;
pub mod link_handler;
pub mod service;
pub mod stream;

pub use downloader::Downloader;
pub use extractor::{
    ChannelExtractor, CommentsExtractor, Extractor, ExtractorBase, KioskExtractor, ListExtractor,
    PlaylistExtractor, SearchExtractor,
};
pub use item::{
    ChannelInfoItemExtractor, CommentsInfoItemExtractor, InfoItemExtractor,
    PlaylistInfoItemExtractor, StreamInfoItemExtractor,
};
pub use link_handler::{LinkHandlerFactory, ListLinkHandlerFactory};
pub use service::{LinkType, MediaCapability, ServiceInfo, StreamingService};
pub use stream::{StreamExtractor, NO_AGE_LIMIT};

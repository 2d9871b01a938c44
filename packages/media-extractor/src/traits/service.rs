//! Streaming service contract.
//!
//! One implementation per supported site. A service hands out link handler
//! factories and extractors, and owns the [`KioskList`] of its curated feeds.

use serde::{Deserialize, Serialize};

use crate::error::{ExtractionError, Result};
use crate::registry::kiosk::KioskList;
use crate::traits::extractor::{
    ChannelExtractor, CommentsExtractor, PlaylistExtractor, SearchExtractor,
};
use crate::traits::link_handler::{LinkHandlerFactory, ListLinkHandlerFactory};
use crate::traits::stream::StreamExtractor;
use crate::types::config::ExtractorContext;
use crate::types::link::{LinkHandler, ListLinkHandler};

/// Kind of media a service offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaCapability {
    Audio,
    Video,
    Live,
    Comments,
}

/// Static description of a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub media_capabilities: Vec<MediaCapability>,
}

impl ServiceInfo {
    pub fn new(name: impl Into<String>, media_capabilities: Vec<MediaCapability>) -> Self {
        Self {
            name: name.into(),
            media_capabilities,
        }
    }

    pub fn supports(&self, capability: MediaCapability) -> bool {
        self.media_capabilities.contains(&capability)
    }
}

/// What a URL points at, as far as one service can tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkType {
    None,
    Stream,
    Channel,
    Playlist,
}

/// A supported content-streaming site.
///
/// Services are registered once at startup and shared read-only afterwards,
/// so they must be `Send + Sync`. Extractors they create are owned by the
/// caller and confined to one thread.
pub trait StreamingService: Send + Sync {
    /// Stable id, unique within a [`ServiceList`](crate::registry::services::ServiceList).
    fn service_id(&self) -> u32;

    fn service_info(&self) -> &ServiceInfo;

    fn stream_lh_factory(&self) -> &dyn LinkHandlerFactory;

    fn channel_lh_factory(&self) -> &dyn ListLinkHandlerFactory;

    fn playlist_lh_factory(&self) -> &dyn ListLinkHandlerFactory;

    fn search_lh_factory(&self) -> &dyn ListLinkHandlerFactory;

    /// Services without comments keep the default.
    fn comments_lh_factory(&self) -> Option<&dyn ListLinkHandlerFactory> {
        None
    }

    fn kiosk_list(&self) -> &KioskList;

    fn stream_extractor(
        &self,
        handler: LinkHandler,
        ctx: &ExtractorContext,
    ) -> Result<Box<dyn StreamExtractor>>;

    fn playlist_extractor(
        &self,
        handler: ListLinkHandler,
        ctx: &ExtractorContext,
    ) -> Result<Box<dyn PlaylistExtractor>>;

    fn channel_extractor(
        &self,
        handler: ListLinkHandler,
        ctx: &ExtractorContext,
    ) -> Result<Box<dyn ChannelExtractor>>;

    fn search_extractor(
        &self,
        handler: ListLinkHandler,
        ctx: &ExtractorContext,
    ) -> Result<Box<dyn SearchExtractor>>;

    fn comments_extractor(
        &self,
        _handler: ListLinkHandler,
        _ctx: &ExtractorContext,
    ) -> Result<Box<dyn CommentsExtractor>> {
        Err(ExtractionError::Unsupported {
            capability: "comments",
            service_id: self.service_id(),
        })
    }

    fn name(&self) -> &str {
        &self.service_info().name
    }

    fn stream_extractor_for_url(
        &self,
        url: &str,
        ctx: &ExtractorContext,
    ) -> Result<Box<dyn StreamExtractor>> {
        let handler = self.stream_lh_factory().from_url(url)?;
        self.stream_extractor(handler, ctx)
    }

    fn playlist_extractor_for_url(
        &self,
        url: &str,
        ctx: &ExtractorContext,
    ) -> Result<Box<dyn PlaylistExtractor>> {
        let handler = self.playlist_lh_factory().from_list_url(url)?;
        self.playlist_extractor(handler, ctx)
    }

    fn channel_extractor_for_url(
        &self,
        url: &str,
        ctx: &ExtractorContext,
    ) -> Result<Box<dyn ChannelExtractor>> {
        let handler = self.channel_lh_factory().from_list_url(url)?;
        self.channel_extractor(handler, ctx)
    }

    fn search_extractor_for_url(
        &self,
        url: &str,
        ctx: &ExtractorContext,
    ) -> Result<Box<dyn SearchExtractor>> {
        let handler = self.search_lh_factory().from_list_url(url)?;
        self.search_extractor(handler, ctx)
    }

    /// Search extractor for a query with optional filters.
    fn search_extractor_for_query(
        &self,
        query: &str,
        content_filters: Vec<String>,
        sort_filter: String,
        ctx: &ExtractorContext,
    ) -> Result<Box<dyn SearchExtractor>> {
        let handler = self
            .search_lh_factory()
            .from_query(query, content_filters, sort_filter)?;
        self.search_extractor(handler, ctx)
    }

    fn comments_extractor_for_url(
        &self,
        url: &str,
        ctx: &ExtractorContext,
    ) -> Result<Box<dyn CommentsExtractor>> {
        let factory = self
            .comments_lh_factory()
            .ok_or(ExtractionError::Unsupported {
                capability: "comments",
                service_id: self.service_id(),
            })?;
        let handler = factory.from_list_url(url)?;
        self.comments_extractor(handler, ctx)
    }

    /// Classify a URL by the first factory that accepts it.
    fn link_type(&self, url: &str) -> LinkType {
        if self.stream_lh_factory().accept_url(url) {
            LinkType::Stream
        } else if self.channel_lh_factory().accept_url(url) {
            LinkType::Channel
        } else if self.playlist_lh_factory().accept_url(url) {
            LinkType::Playlist
        } else {
            LinkType::None
        }
    }
}

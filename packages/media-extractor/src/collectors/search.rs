//! Mixed-item collection for search results.

use super::{CollectItem, ErrorLog, InfoItemsCollector};
use crate::error::Result;
use crate::traits::item::{
    ChannelInfoItemExtractor, CommentsInfoItemExtractor, PlaylistInfoItemExtractor,
    StreamInfoItemExtractor,
};
use crate::types::item::{
    ChannelInfoItem, CommentsInfoItem, InfoItem, PlaylistInfoItem, StreamInfoItem,
};

/// Collector of search results, which mix every item kind.
pub type InfoItemsSearchCollector = InfoItemsCollector<InfoItem>;

/// An item extractor of any kind, tagged by variant.
#[derive(Clone, Copy)]
pub enum AnyItemExtractor<'a> {
    Stream(&'a dyn StreamInfoItemExtractor),
    Playlist(&'a dyn PlaylistInfoItemExtractor),
    Channel(&'a dyn ChannelInfoItemExtractor),
    Comment(&'a dyn CommentsInfoItemExtractor),
}

impl<'a> CollectItem<AnyItemExtractor<'a>> for InfoItem {
    fn collect(service_id: u32, extractor: &AnyItemExtractor<'a>, errors: &mut ErrorLog) -> Result<Self> {
        match *extractor {
            AnyItemExtractor::Stream(e) => {
                StreamInfoItem::collect(service_id, e, errors).map(InfoItem::Stream)
            }
            AnyItemExtractor::Playlist(e) => {
                PlaylistInfoItem::collect(service_id, e, errors).map(InfoItem::Playlist)
            }
            AnyItemExtractor::Channel(e) => {
                ChannelInfoItem::collect(service_id, e, errors).map(InfoItem::Channel)
            }
            AnyItemExtractor::Comment(e) => {
                CommentsInfoItem::collect(service_id, e, errors).map(InfoItem::Comment)
            }
        }
    }
}

impl InfoItemsCollector<InfoItem> {
    pub fn commit_stream(&mut self, extractor: &dyn StreamInfoItemExtractor) {
        self.commit(&AnyItemExtractor::Stream(extractor));
    }

    pub fn commit_playlist(&mut self, extractor: &dyn PlaylistInfoItemExtractor) {
        self.commit(&AnyItemExtractor::Playlist(extractor));
    }

    pub fn commit_channel(&mut self, extractor: &dyn ChannelInfoItemExtractor) {
        self.commit(&AnyItemExtractor::Channel(extractor));
    }

    pub fn commit_comment(&mut self, extractor: &dyn CommentsInfoItemExtractor) {
        self.commit(&AnyItemExtractor::Comment(extractor));
    }

    /// Stream results only, in source order.
    pub fn stream_items(&self) -> Vec<&StreamInfoItem> {
        self.items().iter().filter_map(InfoItem::as_stream).collect()
    }

    /// Playlist results only, in source order.
    pub fn playlist_items(&self) -> Vec<&PlaylistInfoItem> {
        self.items().iter().filter_map(InfoItem::as_playlist).collect()
    }

    /// Channel results only, in source order.
    pub fn channel_items(&self) -> Vec<&ChannelInfoItem> {
        self.items().iter().filter_map(InfoItem::as_channel).collect()
    }
}

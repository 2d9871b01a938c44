//! Channel item collection.

use super::{CollectItem, ErrorLog, InfoItemsCollector};
use crate::error::Result;
use crate::traits::item::ChannelInfoItemExtractor;
use crate::types::item::ChannelInfoItem;

pub type ChannelInfoItemsCollector = InfoItemsCollector<ChannelInfoItem>;

impl<E: ChannelInfoItemExtractor + ?Sized> CollectItem<E> for ChannelInfoItem {
    fn collect(service_id: u32, extractor: &E, errors: &mut ErrorLog) -> Result<Self> {
        let url = extractor.url()?;
        let name = extractor.name()?;
        let mut item = ChannelInfoItem::new(service_id, url, name);

        item.description = errors.field("description", || extractor.description());
        item.subscriber_count = errors.field("subscriber_count", || extractor.subscriber_count());
        item.stream_count = errors.field("stream_count", || extractor.stream_count());
        item.thumbnail_url = errors.field("thumbnail_url", || extractor.thumbnail_url());

        Ok(item)
    }
}

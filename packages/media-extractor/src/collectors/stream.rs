//! Stream item collection.

use super::{CollectItem, ErrorLog, InfoItemsCollector};
use crate::error::Result;
use crate::traits::item::StreamInfoItemExtractor;
use crate::types::item::StreamInfoItem;

pub type StreamInfoItemsCollector = InfoItemsCollector<StreamInfoItem>;

impl<E: StreamInfoItemExtractor + ?Sized> CollectItem<E> for StreamInfoItem {
    fn collect(service_id: u32, extractor: &E, errors: &mut ErrorLog) -> Result<Self> {
        let url = extractor.url()?;
        let name = extractor.name()?;
        let mut item = StreamInfoItem::new(service_id, url, name);

        item.stream_type = errors.field("stream_type", || extractor.stream_type());
        item.duration = errors.field("duration", || extractor.duration());
        item.uploader_name = errors.field("uploader_name", || extractor.uploader_name());
        item.upload_date = errors.field("upload_date", || extractor.upload_date());
        item.view_count = errors.field("view_count", || extractor.view_count());
        item.thumbnail_url = errors.field("thumbnail_url", || extractor.thumbnail_url());
        item.uploader_url = errors.field("uploader_url", || extractor.uploader_url());

        Ok(item)
    }
}

impl InfoItemsCollector<StreamInfoItem> {
    /// Collected stream items in source order.
    pub fn stream_items(&self) -> &[StreamInfoItem] {
        self.items()
    }
}

//! Comment collection.

use super::{CollectItem, ErrorLog, InfoItemsCollector};
use crate::error::Result;
use crate::traits::item::CommentsInfoItemExtractor;
use crate::types::item::CommentsInfoItem;

pub type CommentsInfoItemsCollector = InfoItemsCollector<CommentsInfoItem>;

impl<E: CommentsInfoItemExtractor + ?Sized> CollectItem<E> for CommentsInfoItem {
    fn collect(service_id: u32, extractor: &E, errors: &mut ErrorLog) -> Result<Self> {
        let url = extractor.url()?;
        let name = extractor.name()?;
        let mut item = CommentsInfoItem::new(service_id, url, name);

        item.comment_id = errors.field("comment_id", || extractor.comment_id());
        item.comment_text = errors.field("comment_text", || extractor.comment_text());
        item.author_name = errors.field("author_name", || extractor.author_name());
        item.author_thumbnail = errors.field("author_thumbnail", || extractor.author_thumbnail());
        item.author_endpoint = errors.field("author_endpoint", || extractor.author_endpoint());
        item.published_time = errors.field("published_time", || extractor.published_time());
        item.like_count = errors.field("like_count", || extractor.like_count());
        item.thumbnail_url = errors.field("thumbnail_url", || extractor.thumbnail_url());

        Ok(item)
    }
}

impl InfoItemsCollector<CommentsInfoItem> {
    /// Collected comments in source order.
    pub fn comments_items(&self) -> &[CommentsInfoItem] {
        self.items()
    }
}

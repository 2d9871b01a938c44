//! Playlist item collection.

use super::{CollectItem, ErrorLog, InfoItemsCollector};
use crate::error::Result;
use crate::traits::item::PlaylistInfoItemExtractor;
use crate::types::item::PlaylistInfoItem;

pub type PlaylistInfoItemsCollector = InfoItemsCollector<PlaylistInfoItem>;

impl<E: PlaylistInfoItemExtractor + ?Sized> CollectItem<E> for PlaylistInfoItem {
    fn collect(service_id: u32, extractor: &E, errors: &mut ErrorLog) -> Result<Self> {
        let url = extractor.url()?;
        let name = extractor.name()?;
        let mut item = PlaylistInfoItem::new(service_id, url, name);

        item.uploader_name = errors.field("uploader_name", || extractor.uploader_name());
        item.stream_count = errors.field("stream_count", || extractor.stream_count());
        item.thumbnail_url = errors.field("thumbnail_url", || extractor.thumbnail_url());

        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractionError;
    use crate::traits::item::InfoItemExtractor;

    struct NoThumbnail;

    impl InfoItemExtractor for NoThumbnail {
        fn name(&self) -> Result<String> {
            Ok("Mix".into())
        }

        fn url(&self) -> Result<String> {
            Ok("https://example.com/playlist?list=mix".into())
        }

        fn thumbnail_url(&self) -> Result<String> {
            Err(ExtractionError::parsing("no thumbnail"))
        }
    }

    impl PlaylistInfoItemExtractor for NoThumbnail {
        fn uploader_name(&self) -> Result<String> {
            Ok("Someone".into())
        }

        fn stream_count(&self) -> Result<u64> {
            Ok(25)
        }
    }

    #[test]
    fn test_thumbnail_failure_keeps_item() {
        let mut collector = PlaylistInfoItemsCollector::new(2);
        collector.commit(&NoThumbnail);

        let item = &collector.items()[0];
        assert_eq!(item.stream_count, Some(25));
        assert_eq!(item.uploader_name.as_deref(), Some("Someone"));
        assert_eq!(item.thumbnail_url, None);
        assert_eq!(collector.errors().len(), 1);
    }
}

//! Per-item extractors: read one entry of a listing.
//!
//! `url` and `name` are the item's identity; a failure there drops the item.
//! Every other accessor is optional and a failure only loses that field.

use crate::error::Result;
use crate::types::media::StreamType;

/// Accessors shared by every kind of list entry.
pub trait InfoItemExtractor {
    fn name(&self) -> Result<String>;
    fn url(&self) -> Result<String>;
    fn thumbnail_url(&self) -> Result<String>;
}

pub trait StreamInfoItemExtractor: InfoItemExtractor {
    fn stream_type(&self) -> Result<StreamType>;
    /// Length in seconds
    fn duration(&self) -> Result<u64>;
    fn view_count(&self) -> Result<u64>;
    fn uploader_name(&self) -> Result<String>;
    fn uploader_url(&self) -> Result<String>;
    fn upload_date(&self) -> Result<String>;
}

pub trait PlaylistInfoItemExtractor: InfoItemExtractor {
    fn uploader_name(&self) -> Result<String>;
    fn stream_count(&self) -> Result<u64>;
}

pub trait ChannelInfoItemExtractor: InfoItemExtractor {
    fn description(&self) -> Result<String>;
    fn subscriber_count(&self) -> Result<u64>;
    fn stream_count(&self) -> Result<u64>;
}

pub trait CommentsInfoItemExtractor: InfoItemExtractor {
    fn comment_id(&self) -> Result<String>;
    fn comment_text(&self) -> Result<String>;
    fn author_name(&self) -> Result<String>;
    fn author_thumbnail(&self) -> Result<String>;
    fn author_endpoint(&self) -> Result<String>;
    fn published_time(&self) -> Result<String>;
    fn like_count(&self) -> Result<u64>;
}

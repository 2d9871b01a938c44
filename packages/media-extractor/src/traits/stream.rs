//! Stream extractor contract.

use crate::collectors::StreamInfoItemsCollector;
use crate::error::Result;
use crate::traits::extractor::Extractor;
use crate::types::item::StreamInfoItem;
use crate::types::media::{AudioStream, MediaFormat, StreamType, SubtitlesStream, VideoStream};
use crate::utils::timestamp::{timestamp_seconds, UrlTimestamp, DEFAULT_TIMESTAMP_PATTERN};

/// Age limit reported by streams without any restriction.
pub const NO_AGE_LIMIT: u32 = 0;

/// Extracts the full description of one stream.
///
/// Optional capabilities (DASH, HLS, subtitles, related streams) have empty
/// defaults so scrapers only override what their service offers.
pub trait StreamExtractor: Extractor {
    /// Upload date as the service renders it.
    fn upload_date(&self) -> Result<String>;

    fn thumbnail_url(&self) -> Result<String>;

    fn description(&self) -> Result<String>;

    fn age_limit(&self) -> Result<u32> {
        Ok(NO_AGE_LIMIT)
    }

    /// Length in seconds; 0 for live streams.
    fn length(&self) -> Result<u64>;

    /// Start offset encoded in the URL the stream was requested with.
    fn timestamp(&self) -> Result<UrlTimestamp> {
        timestamp_seconds(&self.link_handler().original_url, DEFAULT_TIMESTAMP_PATTERN)
    }

    fn view_count(&self) -> Result<u64>;

    fn like_count(&self) -> Result<u64>;

    fn dislike_count(&self) -> Result<u64>;

    fn uploader_url(&self) -> Result<String>;

    fn uploader_name(&self) -> Result<String>;

    fn uploader_avatar_url(&self) -> Result<String>;

    /// DASH manifest URL; empty when the service has none.
    fn dash_mpd_url(&self) -> Result<String> {
        Ok(String::new())
    }

    /// HLS playlist URL; empty when the service has none.
    fn hls_url(&self) -> Result<String> {
        Ok(String::new())
    }

    fn audio_streams(&self) -> Result<Vec<AudioStream>>;

    fn video_streams(&self) -> Result<Vec<VideoStream>>;

    fn video_only_streams(&self) -> Result<Vec<VideoStream>>;

    fn subtitles_default(&self) -> Result<Vec<SubtitlesStream>> {
        Ok(Vec::new())
    }

    /// Subtitles in one format.
    fn subtitles(&self, format: MediaFormat) -> Result<Vec<SubtitlesStream>> {
        Ok(self
            .subtitles_default()?
            .into_iter()
            .filter(|subtitles| subtitles.format == format)
            .collect())
    }

    /// Failure to determine the stream type is fatal to the whole stream info.
    fn stream_type(&self) -> Result<StreamType>;

    /// The stream the service would autoplay next.
    fn next_stream(&self) -> Result<Option<StreamInfoItem>> {
        Ok(None)
    }

    /// Related streams, collected with per-item error isolation.
    fn related_streams(&self) -> Result<StreamInfoItemsCollector> {
        Ok(StreamInfoItemsCollector::new(self.service_id()))
    }

    /// Message the service shows instead of the content (e.g. "This video is
    /// private"), if any.
    fn error_message(&self) -> Option<String> {
        None
    }
}

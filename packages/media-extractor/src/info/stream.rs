use chrono::NaiveDate;
use serde::Serialize;
use tracing::warn;

use super::Info;
use crate::collectors::ErrorLog;
use crate::error::{ExtractionError, Result};
use crate::registry::services::ServiceList;
use crate::traits::service::StreamingService;
use crate::traits::stream::StreamExtractor;
use crate::types::config::ExtractorContext;
use crate::types::item::StreamInfoItem;
use crate::types::media::{AudioStream, StreamType, SubtitlesStream, VideoStream};
use crate::types::page::InfoIdentity;
use crate::utils::dates::parse_upload_date;
use crate::utils::timestamp::UrlTimestamp;

/// Everything known about one stream.
#[derive(Debug, Serialize)]
pub struct StreamInfo {
    #[serde(flatten)]
    pub identity: InfoIdentity,
    pub stream_type: StreamType,
    pub thumbnail_url: String,
    /// Upload date as the service renders it
    pub upload_date: String,
    /// `upload_date` parsed, when it is in a known format
    pub parsed_upload_date: Option<NaiveDate>,
    /// Length in seconds
    pub duration: u64,
    pub age_limit: u32,
    /// Start offset requested by the URL
    pub start_position: UrlTimestamp,
    pub view_count: u64,
    pub like_count: u64,
    pub dislike_count: u64,
    pub uploader_url: String,
    pub uploader_name: String,
    pub uploader_avatar_url: String,
    pub description: String,
    pub dash_mpd_url: String,
    pub hls_url: String,
    pub audio_streams: Vec<AudioStream>,
    pub video_streams: Vec<VideoStream>,
    pub video_only_streams: Vec<VideoStream>,
    pub subtitles: Vec<SubtitlesStream>,
    pub next_video: Option<StreamInfoItem>,
    pub related_streams: Vec<StreamInfoItem>,
    #[serde(skip)]
    pub errors: Vec<ExtractionError>,
}

impl StreamInfo {
    /// Build from an extractor whose page is already fetched.
    ///
    /// Identity and stream type are fatal. A stream with no audio, video or
    /// DASH manifest fails with `NoStreams`.
    pub fn from_extractor<E: StreamExtractor + ?Sized>(extractor: &E) -> Result<Self> {
        let identity = InfoIdentity::from_extractor(extractor)?;
        let stream_type = extractor.stream_type()?;
        let mut errors = ErrorLog::new();

        let audio_streams = errors.field_or_default("audio_streams", || extractor.audio_streams());
        let video_streams = errors.field_or_default("video_streams", || extractor.video_streams());
        let video_only_streams =
            errors.field_or_default("video_only_streams", || extractor.video_only_streams());
        let dash_mpd_url = errors.field_or_default("dash_mpd_url", || extractor.dash_mpd_url());

        if audio_streams.is_empty()
            && video_streams.is_empty()
            && video_only_streams.is_empty()
            && dash_mpd_url.is_empty()
        {
            let reason = errors
                .errors()
                .first()
                .map(ToString::to_string)
                .unwrap_or_else(|| "no audio, video or DASH streams found".to_string());
            return Err(ExtractionError::NoStreams { reason });
        }

        let hls_url = errors.field_or_default("hls_url", || extractor.hls_url());
        let thumbnail_url = errors.field_or_default("thumbnail_url", || extractor.thumbnail_url());
        let duration = errors.field_or_default("length", || extractor.length());
        let uploader_name = errors.field_or_default("uploader_name", || extractor.uploader_name());
        let uploader_url = errors.field_or_default("uploader_url", || extractor.uploader_url());
        let uploader_avatar_url =
            errors.field_or_default("uploader_avatar_url", || extractor.uploader_avatar_url());
        let description = errors.field_or_default("description", || extractor.description());
        let view_count = errors.field_or_default("view_count", || extractor.view_count());
        let upload_date = errors.field_or_default("upload_date", || extractor.upload_date());
        let start_position = errors
            .field("timestamp", || extractor.timestamp())
            .unwrap_or(UrlTimestamp::Absent);
        let age_limit = errors.field_or_default("age_limit", || extractor.age_limit());
        let like_count = errors.field_or_default("like_count", || extractor.like_count());
        let dislike_count = errors.field_or_default("dislike_count", || extractor.dislike_count());
        let subtitles = errors.field_or_default("subtitles", || extractor.subtitles_default());
        let next_video = errors.field("next_stream", || extractor.next_stream()).flatten();

        let related_streams = match errors.field("related_streams", || extractor.related_streams()) {
            Some(collector) => {
                let (items, item_errors) = collector.into_parts();
                errors.extend(item_errors);
                items
            }
            None => Vec::new(),
        };

        let parsed_upload_date = parse_upload_date(&upload_date).ok();

        Ok(Self {
            identity,
            stream_type,
            thumbnail_url,
            upload_date,
            parsed_upload_date,
            duration,
            age_limit,
            start_position,
            view_count,
            like_count,
            dislike_count,
            uploader_url,
            uploader_name,
            uploader_avatar_url,
            description,
            dash_mpd_url,
            hls_url,
            audio_streams,
            video_streams,
            video_only_streams,
            subtitles,
            next_video,
            related_streams,
            errors: errors.into_vec(),
        })
    }

    /// Resolve, fetch and build.
    ///
    /// When no stream can be found and the service explains why (private,
    /// removed, region-blocked), the explanation is returned as
    /// `ContentNotAvailable` instead of `NoStreams`.
    pub fn get_info(service: &dyn StreamingService, url: &str, ctx: &ExtractorContext) -> Result<Self> {
        let mut extractor = service.stream_extractor_for_url(url, ctx)?;
        extractor.fetch_page()?;

        match Self::from_extractor(&*extractor) {
            Err(ExtractionError::NoStreams { reason }) => match extractor.error_message() {
                Some(message) => {
                    warn!(url = %url, reason = %reason, "Content not available: {}", message);
                    Err(ExtractionError::ContentNotAvailable { reason: message })
                }
                None => Err(ExtractionError::NoStreams { reason }),
            },
            other => other,
        }
    }

    pub fn get_info_by_url(services: &ServiceList, url: &str, ctx: &ExtractorContext) -> Result<Self> {
        let service = services.service_by_url(url)?;
        Self::get_info(&**service, url, ctx)
    }

    /// Start offset in seconds, if the URL requested one.
    pub fn start_seconds(&self) -> Option<u64> {
        self.start_position.seconds()
    }
}

impl Info for StreamInfo {
    fn identity(&self) -> &InfoIdentity {
        &self.identity
    }

    fn errors(&self) -> &[ExtractionError] {
        &self.errors
    }
}

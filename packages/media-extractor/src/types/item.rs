//! Info items - lightweight summaries of resources as seen in a list.
//!
//! Every item carries service id, url and name. Everything else is optional
//! and stays `None` when the scraper could not derive it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::media::StreamType;
use crate::utils::dates::parse_upload_date;

/// Variant tag of an [`InfoItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfoType {
    Stream,
    Playlist,
    Channel,
    Comment,
}

/// Summary of a video or audio stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamInfoItem {
    pub service_id: u32,
    pub url: String,
    pub name: String,
    pub thumbnail_url: Option<String>,
    pub stream_type: Option<StreamType>,
    /// Length in seconds
    pub duration: Option<u64>,
    pub view_count: Option<u64>,
    pub uploader_name: Option<String>,
    pub uploader_url: Option<String>,
    /// Upload date as the service renders it
    pub upload_date: Option<String>,
}

impl StreamInfoItem {
    pub fn new(service_id: u32, url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            service_id,
            url: url.into(),
            name: name.into(),
            thumbnail_url: None,
            stream_type: None,
            duration: None,
            view_count: None,
            uploader_name: None,
            uploader_url: None,
            upload_date: None,
        }
    }

    /// Upload date parsed into a calendar date, if the text is in a known format.
    pub fn parsed_upload_date(&self) -> Option<NaiveDate> {
        self.upload_date
            .as_deref()
            .and_then(|text| parse_upload_date(text).ok())
    }
}

/// Summary of a playlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistInfoItem {
    pub service_id: u32,
    pub url: String,
    pub name: String,
    pub thumbnail_url: Option<String>,
    pub uploader_name: Option<String>,
    pub stream_count: Option<u64>,
}

impl PlaylistInfoItem {
    pub fn new(service_id: u32, url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            service_id,
            url: url.into(),
            name: name.into(),
            thumbnail_url: None,
            uploader_name: None,
            stream_count: None,
        }
    }
}

/// Summary of a channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelInfoItem {
    pub service_id: u32,
    pub url: String,
    pub name: String,
    pub thumbnail_url: Option<String>,
    pub description: Option<String>,
    pub subscriber_count: Option<u64>,
    pub stream_count: Option<u64>,
}

impl ChannelInfoItem {
    pub fn new(service_id: u32, url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            service_id,
            url: url.into(),
            name: name.into(),
            thumbnail_url: None,
            description: None,
            subscriber_count: None,
            stream_count: None,
        }
    }
}

/// A single comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentsInfoItem {
    pub service_id: u32,
    pub url: String,
    pub name: String,
    pub thumbnail_url: Option<String>,
    pub comment_id: Option<String>,
    pub comment_text: Option<String>,
    pub author_name: Option<String>,
    pub author_thumbnail: Option<String>,
    pub author_endpoint: Option<String>,
    /// Publish time as the service renders it
    pub published_time: Option<String>,
    pub like_count: Option<u64>,
}

impl CommentsInfoItem {
    pub fn new(service_id: u32, url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            service_id,
            url: url.into(),
            name: name.into(),
            thumbnail_url: None,
            comment_id: None,
            comment_text: None,
            author_name: None,
            author_thumbnail: None,
            author_endpoint: None,
            published_time: None,
            like_count: None,
        }
    }
}

/// Any list entry: a closed set of variants sharing service id, url and name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "info_type", rename_all = "snake_case")]
pub enum InfoItem {
    Stream(StreamInfoItem),
    Playlist(PlaylistInfoItem),
    Channel(ChannelInfoItem),
    Comment(CommentsInfoItem),
}

impl InfoItem {
    pub fn info_type(&self) -> InfoType {
        match self {
            Self::Stream(_) => InfoType::Stream,
            Self::Playlist(_) => InfoType::Playlist,
            Self::Channel(_) => InfoType::Channel,
            Self::Comment(_) => InfoType::Comment,
        }
    }

    pub fn service_id(&self) -> u32 {
        match self {
            Self::Stream(item) => item.service_id,
            Self::Playlist(item) => item.service_id,
            Self::Channel(item) => item.service_id,
            Self::Comment(item) => item.service_id,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Self::Stream(item) => &item.url,
            Self::Playlist(item) => &item.url,
            Self::Channel(item) => &item.url,
            Self::Comment(item) => &item.url,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Stream(item) => &item.name,
            Self::Playlist(item) => &item.name,
            Self::Channel(item) => &item.name,
            Self::Comment(item) => &item.name,
        }
    }

    pub fn thumbnail_url(&self) -> Option<&str> {
        match self {
            Self::Stream(item) => item.thumbnail_url.as_deref(),
            Self::Playlist(item) => item.thumbnail_url.as_deref(),
            Self::Channel(item) => item.thumbnail_url.as_deref(),
            Self::Comment(item) => item.thumbnail_url.as_deref(),
        }
    }

    pub fn as_stream(&self) -> Option<&StreamInfoItem> {
        match self {
            Self::Stream(item) => Some(item),
            _ => None,
        }
    }

    pub fn as_playlist(&self) -> Option<&PlaylistInfoItem> {
        match self {
            Self::Playlist(item) => Some(item),
            _ => None,
        }
    }

    pub fn as_channel(&self) -> Option<&ChannelInfoItem> {
        match self {
            Self::Channel(item) => Some(item),
            _ => None,
        }
    }

    pub fn as_comment(&self) -> Option<&CommentsInfoItem> {
        match self {
            Self::Comment(item) => Some(item),
            _ => None,
        }
    }
}

impl From<StreamInfoItem> for InfoItem {
    fn from(item: StreamInfoItem) -> Self {
        Self::Stream(item)
    }
}

impl From<PlaylistInfoItem> for InfoItem {
    fn from(item: PlaylistInfoItem) -> Self {
        Self::Playlist(item)
    }
}

impl From<ChannelInfoItem> for InfoItem {
    fn from(item: ChannelInfoItem) -> Self {
        Self::Channel(item)
    }
}

impl From<CommentsInfoItem> for InfoItem {
    fn from(item: CommentsInfoItem) -> Self {
        Self::Comment(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_identity_accessors() {
        let item: InfoItem = ChannelInfoItem::new(3, "https://example.com/c/1", "Channel One").into();

        assert_eq!(item.info_type(), InfoType::Channel);
        assert_eq!(item.service_id(), 3);
        assert_eq!(item.url(), "https://example.com/c/1");
        assert_eq!(item.name(), "Channel One");
        assert_eq!(item.thumbnail_url(), None);
        assert!(item.as_channel().is_some());
        assert!(item.as_stream().is_none());
    }

    #[test]
    fn test_serde_tag() {
        let mut stream = StreamInfoItem::new(0, "https://example.com/v/1", "Video");
        stream.duration = Some(63);

        let json = serde_json::to_value(InfoItem::from(stream.clone())).unwrap();
        assert_eq!(json["info_type"], "stream");
        assert_eq!(json["duration"], 63);

        let back: InfoItem = serde_json::from_value(json).unwrap();
        assert_eq!(back.as_stream(), Some(&stream));
    }

    #[test]
    fn test_parsed_upload_date() {
        let mut stream = StreamInfoItem::new(0, "u", "n");
        assert_eq!(stream.parsed_upload_date(), None);

        stream.upload_date = Some("24.12.2018".into());
        assert_eq!(stream.parsed_upload_date(), NaiveDate::from_ymd_opt(2018, 12, 24));
    }
}

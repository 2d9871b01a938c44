//! Media formats and playable stream descriptors.

use serde::{Deserialize, Serialize};

/// Container or subtitle format of a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaFormat {
    // video
    Mpeg4,
    V3gpp,
    Webm,
    // audio
    M4a,
    Webma,
    Mp3,
    Opus,
    // subtitles
    Vtt,
    Ttml,
    Transcript1,
    Transcript2,
    Transcript3,
    Srt,
}

impl MediaFormat {
    /// Every known format.
    pub const ALL: [MediaFormat; 13] = [
        Self::Mpeg4,
        Self::V3gpp,
        Self::Webm,
        Self::M4a,
        Self::Webma,
        Self::Mp3,
        Self::Opus,
        Self::Vtt,
        Self::Ttml,
        Self::Transcript1,
        Self::Transcript2,
        Self::Transcript3,
        Self::Srt,
    ];

    /// Stable numeric id.
    pub fn id(self) -> u32 {
        match self {
            Self::Mpeg4 => 0x0,
            Self::V3gpp => 0x10,
            Self::Webm => 0x20,
            Self::M4a => 0x100,
            Self::Webma => 0x200,
            Self::Mp3 => 0x300,
            Self::Opus => 0x400,
            Self::Vtt => 0x1000,
            Self::Ttml => 0x2000,
            Self::Transcript1 => 0x3000,
            Self::Transcript2 => 0x4000,
            Self::Transcript3 => 0x5000,
            Self::Srt => 0x6000,
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Mpeg4 => "MPEG-4",
            Self::V3gpp => "3GPP",
            Self::Webm | Self::Webma => "WebM",
            Self::M4a => "m4a",
            Self::Mp3 => "MP3",
            Self::Opus => "opus",
            Self::Vtt => "WebVTT",
            Self::Ttml => "Timed Text Markup Language",
            Self::Transcript1 => "TranScript v1",
            Self::Transcript2 => "TranScript v2",
            Self::Transcript3 => "TranScript v3",
            Self::Srt => "SubRip file format",
        }
    }

    /// File suffix without the dot.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Mpeg4 => "mp4",
            Self::V3gpp => "3gp",
            Self::Webm | Self::Webma => "webm",
            Self::M4a => "m4a",
            Self::Mp3 => "mp3",
            Self::Opus => "opus",
            Self::Vtt => "vtt",
            Self::Ttml => "ttml",
            Self::Transcript1 => "srv1",
            Self::Transcript2 => "srv2",
            Self::Transcript3 => "srv3",
            Self::Srt => "srt",
        }
    }

    /// MIME type.
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Mpeg4 => "video/mp4",
            Self::V3gpp => "video/3gpp",
            Self::Webm => "video/webm",
            Self::M4a => "audio/mp4",
            Self::Webma => "audio/webm",
            Self::Mp3 => "audio/mpeg",
            Self::Opus => "audio/opus",
            Self::Vtt => "text/vtt",
            Self::Ttml => "application/ttml+xml",
            Self::Transcript1 | Self::Transcript2 | Self::Transcript3 => "text/xml",
            Self::Srt => "text/srt",
        }
    }

    /// Look a format up by numeric id.
    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.id() == id)
    }

    /// Look a format up by suffix. Ambiguous suffixes resolve to the first (video) format.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.suffix().eq_ignore_ascii_case(suffix))
    }

    /// Look a format up by MIME type.
    pub fn from_mime_type(mime_type: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.mime_type().eq_ignore_ascii_case(mime_type))
    }
}

/// Kind of a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamType {
    #[default]
    None,
    VideoStream,
    AudioStream,
    LiveStream,
    AudioLiveStream,
    FileStream,
}

impl StreamType {
    /// True for live video and live audio.
    pub fn is_live(self) -> bool {
        matches!(self, Self::LiveStream | Self::AudioLiveStream)
    }
}

/// An audio-only stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioStream {
    pub url: String,
    pub format: MediaFormat,
    /// Average bitrate in kbit/s, 0 when unknown
    #[serde(default)]
    pub average_bitrate: u32,
}

impl AudioStream {
    pub fn new(url: impl Into<String>, format: MediaFormat, average_bitrate: u32) -> Self {
        Self {
            url: url.into(),
            format,
            average_bitrate,
        }
    }
}

/// A video stream, with or without muxed audio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoStream {
    pub url: String,
    pub format: MediaFormat,
    /// e.g. `720p60`
    pub resolution: String,
    #[serde(default)]
    pub video_only: bool,
}

impl VideoStream {
    pub fn new(url: impl Into<String>, format: MediaFormat, resolution: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            format,
            resolution: resolution.into(),
            video_only: false,
        }
    }

    /// Mark the stream as carrying no audio track.
    pub fn video_only(mut self) -> Self {
        self.video_only = true;
        self
    }
}

/// A subtitle track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtitlesStream {
    pub url: String,
    pub format: MediaFormat,
    pub language_code: String,
    #[serde(default)]
    pub auto_generated: bool,
}

impl SubtitlesStream {
    pub fn new(url: impl Into<String>, format: MediaFormat, language_code: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            format,
            language_code: language_code.into(),
            auto_generated: false,
        }
    }
}

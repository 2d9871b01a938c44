//! Typed errors for the extraction framework.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can tell
//! recoverable field failures apart from fatal page, transport and
//! configuration failures.

use thiserror::Error;

/// Boxed foreign error carried as a `#[source]`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised by extractors, builders and registries.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// A single field could not be derived from the fetched page
    #[error("parsing error: {message}")]
    Parsing {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// The page structure was not recognised
    #[error("extraction failed: {0}")]
    Extraction(String),

    /// The service reports the content as blocked, removed or private
    #[error("content not available: {reason}")]
    ContentNotAvailable { reason: String },

    /// A stream page yielded neither audio, video nor a DASH manifest
    #[error("could not get any stream: {reason}")]
    NoStreams { reason: String },

    /// No registered link handler accepts the URL
    #[error("no extractor accepts url: {url}")]
    NoMatchingExtractor { url: String },

    /// An accessor was called before `fetch_page` succeeded
    #[error("page not fetched yet: {url}")]
    PageNotFetched { url: String },

    /// The service has no extractor for this kind of resource
    #[error("{capability} not supported by service {service_id}")]
    Unsupported {
        capability: &'static str,
        service_id: u32,
    },

    /// Network or IO failure inside the downloader
    #[error("transport error: {0}")]
    Transport(#[from] DownloadError),

    /// A kiosk id was registered twice
    #[error("kiosk with type {id} already exists")]
    KioskAlreadyExists { id: String },

    /// Lookup of a kiosk id that was never registered
    #[error("no kiosk found with the type: {id}")]
    UnknownKiosk { id: String },

    /// Lookup of a service id or name that was never registered
    #[error("no service found: {id}")]
    UnknownService { id: String },

    /// A service id was registered twice
    #[error("service with id {id} already registered")]
    ServiceAlreadyExists { id: u32 },

    /// A regular expression could not be compiled
    #[error("invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl ExtractionError {
    /// Field-level parsing failure without an underlying cause.
    pub fn parsing(message: impl Into<String>) -> Self {
        Self::Parsing {
            message: message.into(),
            source: None,
        }
    }

    /// Field-level parsing failure wrapping the error that caused it.
    pub fn parsing_with(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Parsing {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// True for failures that only affect one field and are captured rather than raised.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Parsing { .. })
    }

    /// True for downloader failures.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// True for registry misconfiguration (duplicate or unknown ids).
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::KioskAlreadyExists { .. }
                | Self::UnknownKiosk { .. }
                | Self::UnknownService { .. }
                | Self::ServiceAlreadyExists { .. }
                | Self::InvalidPattern { .. }
        )
    }
}

/// Errors that can occur while downloading a page.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[source] BoxError),

    /// Server answered with a non-success status
    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// The service answered with a captcha challenge instead of content
    #[error("reCAPTCHA challenge for {url}")]
    ReCaptcha { url: String },

    /// Invalid URL format
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Result type alias for download operations.
pub type DownloadResult<T> = std::result::Result<T, DownloadError>;

//! Configuration types threaded through every extraction call.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::ExtractionError;
use crate::traits::downloader::Downloader;

/// Country and language a service should localize its pages for.
///
/// The framework does not interpret these values; they are handed to the
/// downloader and to service scrapers untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Localization {
    /// Country code, e.g. `GB` (may be empty)
    pub country: String,

    /// Language code, e.g. `en`
    pub language: String,
}

impl Localization {
    /// Create a localization from a country and a language code.
    pub fn new(country: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            language: language.into(),
        }
    }

    /// Value for an `Accept-Language` header.
    pub fn accept_language(&self) -> String {
        if self.country.is_empty() {
            self.language.clone()
        } else {
            format!("{}, {};q=0.9", self, self.language)
        }
    }
}

impl Default for Localization {
    fn default() -> Self {
        Self::new("GB", "en")
    }
}

impl fmt::Display for Localization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.country.is_empty() {
            write!(f, "{}", self.language)
        } else {
            write!(f, "{}-{}", self.language, self.country)
        }
    }
}

impl FromStr for Localization {
    type Err = ExtractionError;

    /// Parses `language`, `language-COUNTRY` or `language_COUNTRY`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().splitn(2, ['-', '_']);
        let language = parts.next().unwrap_or_default();
        let country = parts.next().unwrap_or_default();

        let valid = |part: &str| part.chars().all(|c| c.is_ascii_alphabetic());
        if language.is_empty() || !valid(language) || !valid(country) {
            return Err(ExtractionError::parsing(format!("invalid localization: {s:?}")));
        }

        Ok(Self::new(country.to_ascii_uppercase(), language.to_ascii_lowercase()))
    }
}

/// Explicit configuration for one extraction: the downloader to fetch with
/// and the localization to request.
///
/// Cheap to clone; extractors keep their own copy.
#[derive(Clone)]
pub struct ExtractorContext {
    downloader: Arc<dyn Downloader>,
    localization: Localization,
}

impl ExtractorContext {
    /// Create a context with the default localization.
    pub fn new(downloader: Arc<dyn Downloader>) -> Self {
        Self {
            downloader,
            localization: Localization::default(),
        }
    }

    /// Set the localization.
    pub fn with_localization(mut self, localization: Localization) -> Self {
        self.localization = localization;
        self
    }

    /// The downloader used for every fetch.
    pub fn downloader(&self) -> &Arc<dyn Downloader> {
        &self.downloader
    }

    /// The requested localization.
    pub fn localization(&self) -> &Localization {
        &self.localization
    }
}

impl fmt::Debug for ExtractorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractorContext")
            .field("downloader", &self.downloader.name())
            .field("localization", &self.localization)
            .finish()
    }
}

/// Configuration for the blocking HTTP downloader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpDownloaderConfig {
    /// User agent sent with every request.
    pub user_agent: String,

    /// Request timeout in seconds.
    ///
    /// Transport setting only; the framework itself never retries.
    pub timeout_secs: u64,

    /// Extra headers sent with every request.
    pub headers: BTreeMap<String, String>,
}

impl Default for HttpDownloaderConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:128.0) Gecko/20100101 Firefox/128.0"
                .to_string(),
            timeout_secs: 30,
            headers: BTreeMap::new(),
        }
    }
}

impl HttpDownloaderConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_secs = seconds;
        self
    }

    /// Add a header sent with every request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::downloaders::MockDownloader;

    #[test]
    fn test_localization_parse_and_display() {
        let loc: Localization = "en-GB".parse().unwrap();
        assert_eq!(loc, Localization::new("GB", "en"));
        assert_eq!(loc.to_string(), "en-GB");

        let underscored: Localization = "de_at".parse().unwrap();
        assert_eq!(underscored, Localization::new("AT", "de"));

        let language_only: Localization = "fr".parse().unwrap();
        assert_eq!(language_only.to_string(), "fr");
    }

    #[test]
    fn test_localization_rejects_garbage() {
        assert!("".parse::<Localization>().is_err());
        assert!("en-G8".parse::<Localization>().is_err());
    }

    #[test]
    fn test_accept_language() {
        assert_eq!(Localization::default().accept_language(), "en-GB, en;q=0.9");
        assert_eq!(Localization::new("", "nl").accept_language(), "nl");
    }

    #[test]
    fn test_context_localization() {
        let ctx = ExtractorContext::new(Arc::new(MockDownloader::new()))
            .with_localization(Localization::new("DE", "de"));

        assert_eq!(ctx.localization().to_string(), "de-DE");
        assert_eq!(ctx.downloader().name(), "mock");
    }

    #[test]
    fn test_http_config_deserializes_with_defaults() {
        let config: HttpDownloaderConfig = serde_json::from_str(r#"{"timeout_secs": 5}"#).unwrap();

        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.user_agent, HttpDownloaderConfig::default().user_agent);
        assert!(config.headers.is_empty());
    }
}

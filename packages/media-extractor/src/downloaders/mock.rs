//! Mock downloader for testing.
//!
//! Serves canned bodies by URL and records every request.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::{DownloadError, DownloadResult};
use crate::traits::downloader::Downloader;
use crate::types::config::Localization;

/// Canned failure returned for a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFailure {
    Status(u16),
    ReCaptcha,
}

/// Mock downloader for testing.
///
/// URLs without a canned body answer with HTTP 404. Clones share responses
/// and the call log, so a test can keep one handle while the extractor owns
/// another.
///
/// # Example
///
/// ```rust
/// use media_extractor::downloaders::MockDownloader;
///
/// let mock = MockDownloader::new()
///     .with_response("https://example.com/watch?v=abc", r#"{"name": "A video"}"#);
///
/// // Extractors built with this downloader will receive the canned body
/// ```
#[derive(Default)]
pub struct MockDownloader {
    responses: Arc<RwLock<HashMap<String, String>>>,
    failures: Arc<RwLock<HashMap<String, MockFailure>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockDownloader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a body served for `url`.
    pub fn add_response(&self, url: impl Into<String>, body: impl Into<String>) {
        self.responses
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(url.into(), body.into());
    }

    /// Builder-style [`add_response`](Self::add_response).
    pub fn with_response(self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.add_response(url, body);
        self
    }

    /// Make requests for `url` fail.
    pub fn with_failure(self, url: impl Into<String>, failure: MockFailure) -> Self {
        self.failures
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(url.into(), failure);
        self
    }

    /// Get the number of downloads performed.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Get the URLs requested, in order.
    pub fn download_calls(&self) -> Vec<String> {
        self.calls.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Number of downloads of one URL.
    pub fn calls_for(&self, url: &str) -> usize {
        self.calls
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|called| called.as_str() == url)
            .count()
    }

    /// Clear all recorded calls.
    pub fn reset_calls(&self) {
        self.calls.write().unwrap_or_else(PoisonError::into_inner).clear();
    }

    /// Clear responses, failures and calls.
    pub fn reset(&self) {
        self.responses.write().unwrap_or_else(PoisonError::into_inner).clear();
        self.failures.write().unwrap_or_else(PoisonError::into_inner).clear();
        self.reset_calls();
    }

    fn respond(&self, url: &str) -> DownloadResult<String> {
        self.calls
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(url.to_string());

        let failure = self
            .failures
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(url)
            .copied();
        match failure {
            Some(MockFailure::Status(status)) => {
                return Err(DownloadError::Status {
                    status,
                    url: url.to_string(),
                })
            }
            Some(MockFailure::ReCaptcha) => {
                return Err(DownloadError::ReCaptcha { url: url.to_string() })
            }
            None => {}
        }

        self.responses
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(url)
            .cloned()
            .ok_or_else(|| DownloadError::Status {
                status: 404,
                url: url.to_string(),
            })
    }
}

impl Clone for MockDownloader {
    fn clone(&self) -> Self {
        Self {
            responses: Arc::clone(&self.responses),
            failures: Arc::clone(&self.failures),
            calls: Arc::clone(&self.calls),
        }
    }
}

impl Downloader for MockDownloader {
    fn download(&self, url: &str, _localization: &Localization) -> DownloadResult<String> {
        self.respond(url)
    }

    fn download_with_headers(
        &self,
        url: &str,
        _headers: &HashMap<String, String>,
    ) -> DownloadResult<String> {
        self.respond(url)
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canned_response() {
        let mock = MockDownloader::new().with_response("https://example.com/a", "body");

        let body = mock.download("https://example.com/a", &Localization::default()).unwrap();
        assert_eq!(body, "body");
    }

    #[test]
    fn test_missing_url_is_404() {
        let mock = MockDownloader::new();

        let err = mock
            .download("https://example.com/missing", &Localization::default())
            .unwrap_err();
        assert!(matches!(err, DownloadError::Status { status: 404, .. }));
    }

    #[test]
    fn test_failures() {
        let mock = MockDownloader::new()
            .with_response("https://example.com/a", "body")
            .with_failure("https://example.com/a", MockFailure::ReCaptcha);

        let err = mock
            .download_with_headers("https://example.com/a", &HashMap::new())
            .unwrap_err();
        assert!(matches!(err, DownloadError::ReCaptcha { .. }));
    }

    #[test]
    fn test_call_tracking_shared_between_clones() {
        let mock = MockDownloader::new().with_response("https://example.com/a", "body");
        let handle = mock.clone();

        mock.download("https://example.com/a", &Localization::default()).unwrap();
        let _ = mock.download("https://example.com/b", &Localization::default());

        assert_eq!(handle.call_count(), 2);
        assert_eq!(handle.calls_for("https://example.com/a"), 1);
        assert_eq!(
            handle.download_calls(),
            vec!["https://example.com/a".to_string(), "https://example.com/b".to_string()]
        );

        handle.reset();
        assert_eq!(mock.call_count(), 0);
    }
}

//! Downloader trait - the transport every extractor fetches through.

use std::collections::HashMap;

use crate::error::DownloadResult;
use crate::types::config::Localization;

/// Blocking page downloader.
///
/// Implementations:
/// - `HttpDownloader` - reqwest-based HTTP client
/// - `MockDownloader` - canned responses for tests
///
/// Calls block the current thread. Timeouts and retries are the
/// implementation's (or the caller's) business, never the framework's.
pub trait Downloader: Send + Sync {
    /// Download a page, asking the service for the given localization.
    fn download(&self, url: &str, localization: &Localization) -> DownloadResult<String>;

    /// Download a page with custom request headers.
    fn download_with_headers(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
    ) -> DownloadResult<String>;

    /// Get the downloader name (for logging/debugging).
    fn name(&self) -> &'static str {
        "unknown"
    }
}

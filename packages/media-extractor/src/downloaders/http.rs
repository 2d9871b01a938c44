//! Blocking HTTP downloader built on reqwest.

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::StatusCode;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::error::{DownloadError, DownloadResult};
use crate::traits::downloader::Downloader;
use crate::types::config::{HttpDownloaderConfig, Localization};

/// Downloader that fetches pages over HTTP.
///
/// # Example
///
/// ```rust,ignore
/// use media_extractor::{ExtractorContext, HttpDownloader, HttpDownloaderConfig};
/// use std::sync::Arc;
///
/// let downloader = HttpDownloader::with_config(HttpDownloaderConfig::new().with_timeout(10))?;
/// let ctx = ExtractorContext::new(Arc::new(downloader));
/// ```
pub struct HttpDownloader {
    client: Client,
    config: HttpDownloaderConfig,
}

impl HttpDownloader {
    /// Create a downloader with default settings.
    pub fn new() -> DownloadResult<Self> {
        Self::with_config(HttpDownloaderConfig::default())
    }

    /// Create a downloader from explicit configuration.
    pub fn with_config(config: HttpDownloaderConfig) -> DownloadResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DownloadError::Http(Box::new(e)))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &HttpDownloaderConfig {
        &self.config
    }

    fn request(&self, url: &str) -> DownloadResult<RequestBuilder> {
        let parsed = Url::parse(url).map_err(|_| DownloadError::InvalidUrl {
            url: url.to_string(),
        })?;

        let mut request = self
            .client
            .get(parsed)
            .header(USER_AGENT, &self.config.user_agent);
        for (name, value) in &self.config.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        Ok(request)
    }

    fn send(&self, url: &str, request: RequestBuilder) -> DownloadResult<String> {
        debug!(url = %url, "HTTP download starting");
        let response = request.send().map_err(|e| {
            warn!(url = %url, error = %e, "HTTP request failed");
            DownloadError::Http(Box::new(e))
        })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            warn!(url = %url, "Service answered with a captcha challenge");
            return Err(DownloadError::ReCaptcha {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(DownloadError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.text().map_err(|e| DownloadError::Http(Box::new(e)))
    }
}

impl Downloader for HttpDownloader {
    fn download(&self, url: &str, localization: &Localization) -> DownloadResult<String> {
        let request = self
            .request(url)?
            .header(ACCEPT_LANGUAGE, localization.accept_language());
        self.send(url, request)
    }

    fn download_with_headers(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
    ) -> DownloadResult<String> {
        let mut request = self.request(url)?;
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }
        self.send(url, request)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

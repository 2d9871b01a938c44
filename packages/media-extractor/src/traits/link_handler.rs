//! Link handler factories: turn URLs and ids into resolved identities.
//!
//! The URL rules themselves belong to each service; the framework only
//! relies on `accept_url`, `from_url` and `from_id`.

use crate::error::{ExtractionError, Result};
use crate::types::link::{LinkHandler, ListLinkHandler};

/// Recognises the URLs of one resource kind of one service.
pub trait LinkHandlerFactory: Send + Sync {
    /// Extract the service-specific id from an accepted URL.
    fn id_from_url(&self, url: &str) -> Result<String>;

    /// Build the canonical URL for an id.
    fn url_from_id(&self, id: &str) -> Result<String>;

    /// Whether this factory handles the URL.
    fn accept_url(&self, url: &str) -> bool;

    /// Resolve a URL into a link handler.
    fn from_url(&self, url: &str) -> Result<LinkHandler> {
        if !self.accept_url(url) {
            return Err(ExtractionError::parsing(format!(
                "malformed unacceptable url: {url}"
            )));
        }
        let id = self.id_from_url(url)?;
        let canonical = self.url_from_id(&id)?;
        Ok(LinkHandler::new(url, canonical, id))
    }

    /// Resolve an id into a link handler whose original URL is the canonical one.
    fn from_id(&self, id: &str) -> Result<LinkHandler> {
        let url = self.url_from_id(id)?;
        Ok(LinkHandler::new(url.clone(), url, id))
    }
}

/// Link handler factory for paginated resources, aware of list filters.
pub trait ListLinkHandlerFactory: LinkHandlerFactory {
    /// Build the canonical URL for an id with filters applied.
    ///
    /// Services without filter support can keep the default, which ignores them.
    fn list_url(&self, id: &str, _content_filters: &[String], _sort_filter: &str) -> Result<String> {
        self.url_from_id(id)
    }

    /// Content filters this service understands.
    fn available_content_filters(&self) -> Vec<String> {
        Vec::new()
    }

    /// Sort filters this service understands.
    fn available_sort_filters(&self) -> Vec<String> {
        Vec::new()
    }

    /// Resolve a URL into a list link handler without filters.
    fn from_list_url(&self, url: &str) -> Result<ListLinkHandler> {
        self.from_url(url).map(ListLinkHandler::from)
    }

    /// Resolve an id into a list link handler without filters.
    fn from_list_id(&self, id: &str) -> Result<ListLinkHandler> {
        self.from_id(id).map(ListLinkHandler::from)
    }

    /// Resolve an id (or search string) with filters.
    fn from_query(
        &self,
        id: &str,
        content_filters: Vec<String>,
        sort_filter: String,
    ) -> Result<ListLinkHandler> {
        let url = self.list_url(id, &content_filters, &sort_filter)?;
        Ok(ListLinkHandler::new(url.clone(), url, id)
            .with_content_filters(content_filters)
            .with_sort_filter(sort_filter))
    }
}

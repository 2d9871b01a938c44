//! Link handlers - the resolved identity of a resource to extract.

use serde::{Deserialize, Serialize};

/// Resolved identity of a single resource.
///
/// Produced by a [`LinkHandlerFactory`](crate::traits::link_handler::LinkHandlerFactory)
/// and shared read-only by the extractor and the info built from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkHandler {
    /// URL exactly as the caller supplied it
    pub original_url: String,

    /// Canonical URL rebuilt from the id
    pub url: String,

    /// Service-specific id
    pub id: String,
}

impl LinkHandler {
    /// Create a new link handler.
    pub fn new(
        original_url: impl Into<String>,
        url: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            original_url: original_url.into(),
            url: url.into(),
            id: id.into(),
        }
    }

    /// Base URL (`scheme://host`) of the canonical URL.
    pub fn base_url(&self) -> Option<String> {
        url::Url::parse(&self.url)
            .ok()
            .and_then(|u| u.host_str().map(|host| format!("{}://{}", u.scheme(), host)))
    }
}

/// Link handler for paginated resources (playlists, channels, kiosks,
/// comments, searches), carrying the filters the list was requested with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListLinkHandler {
    /// URL exactly as the caller supplied it
    pub original_url: String,

    /// Canonical URL rebuilt from id and filters
    pub url: String,

    /// Service-specific id (the query string for searches)
    pub id: String,

    /// Content filters applied to the list
    #[serde(default)]
    pub content_filters: Vec<String>,

    /// Sort filter applied to the list (empty for service default)
    #[serde(default)]
    pub sort_filter: String,
}

impl ListLinkHandler {
    /// Create a list link handler without filters.
    pub fn new(
        original_url: impl Into<String>,
        url: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            original_url: original_url.into(),
            url: url.into(),
            id: id.into(),
            content_filters: Vec::new(),
            sort_filter: String::new(),
        }
    }

    /// Set the content filters.
    pub fn with_content_filters(mut self, filters: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.content_filters = filters.into_iter().map(Into::into).collect();
        self
    }

    /// Set the sort filter.
    pub fn with_sort_filter(mut self, sort_filter: impl Into<String>) -> Self {
        self.sort_filter = sort_filter.into();
        self
    }

    /// The plain link handler (filters dropped).
    pub fn to_link_handler(&self) -> LinkHandler {
        LinkHandler::new(self.original_url.clone(), self.url.clone(), self.id.clone())
    }
}

impl From<LinkHandler> for ListLinkHandler {
    fn from(handler: LinkHandler) -> Self {
        Self::new(handler.original_url, handler.url, handler.id)
    }
}

//! Regex-driven link handler factory.
//!
//! Covers services whose resource URLs are recognised by one pattern with
//! the id in its first capture group, and rebuilt from a URL template.

use regex::Regex;
use url::form_urlencoded;

use crate::error::{ExtractionError, Result};
use crate::traits::link_handler::{LinkHandlerFactory, ListLinkHandlerFactory};
use crate::utils::parser::compile;

/// Placeholder replaced by the (URL-encoded) id in URL templates.
pub const ID_PLACEHOLDER: &str = "{id}";

#[derive(Debug, Clone)]
pub struct PatternLinkHandlerFactory {
    pattern: Regex,
    url_template: String,
    content_filters: Vec<String>,
    sort_filters: Vec<String>,
}

impl PatternLinkHandlerFactory {
    /// `pattern` must capture the id in group 1; `url_template` must contain `{id}`.
    pub fn new(pattern: &str, url_template: impl Into<String>) -> Result<Self> {
        let url_template = url_template.into();
        if !url_template.contains(ID_PLACEHOLDER) {
            return Err(ExtractionError::Extraction(format!(
                "url template without {ID_PLACEHOLDER}: {url_template}"
            )));
        }

        Ok(Self {
            pattern: compile(pattern)?,
            url_template,
            content_filters: Vec::new(),
            sort_filters: Vec::new(),
        })
    }

    /// Declare the content filters the service understands.
    pub fn with_content_filters(mut self, filters: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.content_filters = filters.into_iter().map(Into::into).collect();
        self
    }

    /// Declare the sort filters the service understands.
    pub fn with_sort_filters(mut self, filters: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.sort_filters = filters.into_iter().map(Into::into).collect();
        self
    }
}

impl LinkHandlerFactory for PatternLinkHandlerFactory {
    fn id_from_url(&self, url: &str) -> Result<String> {
        let encoded = self
            .pattern
            .captures(url)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str())
            .ok_or_else(|| ExtractionError::parsing(format!("no id in url: {url}")))?;

        Ok(form_urlencoded::parse(format!("id={encoded}").as_bytes())
            .next()
            .map(|(_, id)| id.into_owned())
            .unwrap_or_default())
    }

    fn url_from_id(&self, id: &str) -> Result<String> {
        if id.is_empty() {
            return Err(ExtractionError::parsing("empty id"));
        }
        let encoded: String = form_urlencoded::byte_serialize(id.as_bytes()).collect();
        Ok(self.url_template.replace(ID_PLACEHOLDER, &encoded))
    }

    fn accept_url(&self, url: &str) -> bool {
        self.pattern.is_match(url)
    }
}

impl ListLinkHandlerFactory for PatternLinkHandlerFactory {
    /// Filters are appended as `filter` / `sort` query parameters.
    fn list_url(&self, id: &str, content_filters: &[String], sort_filter: &str) -> Result<String> {
        let base = self.url_from_id(id)?;
        let mut url = url::Url::parse(&base)
            .map_err(|e| ExtractionError::parsing_with(format!("invalid list url {base}"), e))?;

        {
            let mut query = url.query_pairs_mut();
            for filter in content_filters {
                query.append_pair("filter", filter);
            }
            if !sort_filter.is_empty() {
                query.append_pair("sort", sort_filter);
            }
        }

        let url = url.to_string();
        // an untouched query leaves a dangling '?'
        Ok(url.strip_suffix('?').map(str::to_string).unwrap_or(url))
    }

    fn available_content_filters(&self) -> Vec<String> {
        self.content_filters.clone()
    }

    fn available_sort_filters(&self) -> Vec<String> {
        self.sort_filters.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn watch() -> PatternLinkHandlerFactory {
        PatternLinkHandlerFactory::new(
            r"^https?://(?:www\.|m\.)?example\.com/watch\?v=([\w-]+)",
            "https://www.example.com/watch?v={id}",
        )
        .unwrap()
    }

    fn search() -> PatternLinkHandlerFactory {
        PatternLinkHandlerFactory::new(
            r"^https://www\.example\.com/search\?q=([^&]+)",
            "https://www.example.com/search?q={id}",
        )
        .unwrap()
        .with_content_filters(["videos", "channels"])
    }

    #[test]
    fn test_from_url_canonicalises() {
        let handler = watch().from_url("https://m.example.com/watch?v=abc-1&t=10").unwrap();

        assert_eq!(handler.id, "abc-1");
        assert_eq!(handler.url, "https://www.example.com/watch?v=abc-1");
        assert_eq!(handler.original_url, "https://m.example.com/watch?v=abc-1&t=10");
    }

    #[test]
    fn test_rejects_foreign_url() {
        let factory = watch();
        assert!(!factory.accept_url("https://other.org/watch?v=abc"));
        assert!(factory.from_url("https://other.org/watch?v=abc").is_err());
    }

    #[test]
    fn test_from_id() {
        let handler = watch().from_id("xyz").unwrap();
        assert_eq!(handler.original_url, handler.url);
        assert!(watch().from_id("").is_err());
    }

    #[test]
    fn test_search_query_round_trip() {
        let factory = search();
        let handler = factory
            .from_query("rust lang", vec!["videos".into()], "date".into())
            .unwrap();

        assert_eq!(handler.id, "rust lang");
        assert_eq!(
            handler.url,
            "https://www.example.com/search?q=rust+lang&filter=videos&sort=date"
        );
        assert_eq!(factory.id_from_url(&handler.url).unwrap(), "rust lang");
        assert_eq!(factory.available_content_filters(), vec!["videos", "channels"]);
    }

    #[test]
    fn test_template_requires_placeholder() {
        assert!(PatternLinkHandlerFactory::new(r"(x)", "https://example.com/").is_err());
        assert!(matches!(
            PatternLinkHandlerFactory::new(r"(x", "https://example.com/{id}"),
            Err(ExtractionError::InvalidPattern { .. })
        ));
    }
}

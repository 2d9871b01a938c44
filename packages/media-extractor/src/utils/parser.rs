//! Regex and query-string helpers shared by scrapers.

use regex::Regex;
use std::collections::HashMap;

use crate::error::{ExtractionError, Result};

/// Compile a pattern, mapping failures to [`ExtractionError::InvalidPattern`].
pub fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| ExtractionError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Capture group `group` of the first match of `pattern` in `input`.
///
/// `Ok(None)` when the pattern does not match or the group did not take part
/// in the match.
pub fn match_group(pattern: &str, input: &str, group: usize) -> Result<Option<String>> {
    let regex = compile(pattern)?;
    Ok(regex
        .captures(input)
        .and_then(|captures| captures.get(group))
        .map(|m| m.as_str().to_string()))
}

/// First capture group of `pattern` in `input`; a missing match is a parsing error.
pub fn match_group1(pattern: &str, input: &str) -> Result<String> {
    match_group(pattern, input, 1)?.ok_or_else(|| {
        ExtractionError::parsing(format!("failed to find pattern {pattern:?}"))
    })
}

/// Whether `pattern` matches anywhere in `input`.
pub fn is_match(pattern: &str, input: &str) -> Result<bool> {
    Ok(compile(pattern)?.is_match(input))
}

/// Decode the query string of a URL into a map. Later keys win.
pub fn parse_query(url: &str) -> Result<HashMap<String, String>> {
    let parsed = url::Url::parse(url)
        .map_err(|e| ExtractionError::parsing_with(format!("could not parse url {url}"), e))?;
    Ok(parsed.query_pairs().into_owned().collect())
}

/// A single query parameter of a URL, if present.
pub fn query_param(url: &str, name: &str) -> Result<Option<String>> {
    Ok(parse_query(url)?.remove(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_group1() {
        let id = match_group1(r"[?&]v=([\w-]+)", "https://example.com/watch?v=abc-123&t=4").unwrap();
        assert_eq!(id, "abc-123");
    }

    #[test]
    fn test_match_group1_no_match_is_parsing_error() {
        let err = match_group1(r"v=(\w+)", "https://example.com/").unwrap_err();
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_invalid_pattern() {
        let err = match_group(r"(unclosed", "x", 1).unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidPattern { .. }));
    }

    #[test]
    fn test_optional_group_not_participating() {
        let group = match_group(r"a(b)?c", "ac", 1).unwrap();
        assert_eq!(group, None);
    }

    #[test]
    fn test_query_param() {
        let url = "https://example.com/search?q=rust%20lang&page=2";
        assert_eq!(query_param(url, "q").unwrap().as_deref(), Some("rust lang"));
        assert_eq!(query_param(url, "missing").unwrap(), None);
        assert!(parse_query("not a url").is_err());
    }
}

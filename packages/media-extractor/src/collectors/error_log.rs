//! The fallible-field primitive.
//!
//! Collectors and info builders read every optional field through an
//! [`ErrorLog`]: a failing getter yields no value and its error is recorded,
//! so one broken field never stops the remaining ones.

use tracing::debug;

use crate::error::{ExtractionError, Result};

/// Evaluate one field getter, splitting the outcome into value and captured error.
pub fn try_field<T>(getter: impl FnOnce() -> Result<T>) -> (Option<T>, Option<ExtractionError>) {
    match getter() {
        Ok(value) => (Some(value), None),
        Err(err) => (None, Some(err)),
    }
}

/// Ordered accumulator of captured errors.
#[derive(Debug, Default)]
pub struct ErrorLog {
    errors: Vec<ExtractionError>,
}

impl ErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read an optional field. On failure the error is recorded and `None` returned.
    pub fn field<T>(&mut self, name: &'static str, getter: impl FnOnce() -> Result<T>) -> Option<T> {
        let (value, error) = try_field(getter);
        if let Some(err) = error {
            debug!(field = name, error = %err, "Field extraction failed");
            self.errors.push(err);
        }
        value
    }

    /// Read a field that falls back to its type default (empty string, zero).
    pub fn field_or_default<T: Default>(
        &mut self,
        name: &'static str,
        getter: impl FnOnce() -> Result<T>,
    ) -> T {
        self.field(name, getter).unwrap_or_default()
    }

    pub fn push(&mut self, error: ExtractionError) {
        self.errors.push(error);
    }

    pub fn extend(&mut self, errors: impl IntoIterator<Item = ExtractionError>) {
        self.errors.extend(errors);
    }

    pub fn errors(&self) -> &[ExtractionError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn into_vec(self) -> Vec<ExtractionError> {
        self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_records_failure_and_continues() {
        let mut log = ErrorLog::new();

        let banner: Option<String> = log.field("banner_url", || Err(ExtractionError::parsing("no banner")));
        let count = log.field("stream_count", || Ok(12u64));

        assert_eq!(banner, None);
        assert_eq!(count, Some(12));
        assert_eq!(log.len(), 1);
        assert_eq!(log.errors()[0].to_string(), "parsing error: no banner");
    }

    #[test]
    fn test_field_or_default() {
        let mut log = ErrorLog::new();

        let name: String = log.field_or_default("uploader_name", || {
            Err(ExtractionError::parsing("no uploader"))
        });

        assert_eq!(name, "");
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_try_field() {
        let (value, error) = try_field(|| Ok::<_, ExtractionError>("x"));
        assert_eq!(value, Some("x"));
        assert!(error.is_none());

        let (value, error) = try_field::<u8>(|| Err(ExtractionError::parsing("bad")));
        assert!(value.is_none());
        assert!(error.is_some());
    }

    #[test]
    fn test_errors_keep_attempt_order() {
        let mut log = ErrorLog::new();
        log.field::<u8>("a", || Err(ExtractionError::parsing("first")));
        log.push(ExtractionError::Extraction("second".into()));
        log.extend([ExtractionError::parsing("third")]);

        let messages: Vec<String> = log.into_vec().iter().map(ToString::to_string).collect();
        assert_eq!(
            messages,
            vec!["parsing error: first", "extraction failed: second", "parsing error: third"]
        );
    }
}

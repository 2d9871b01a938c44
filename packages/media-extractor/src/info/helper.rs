//! First-page retrieval for info builders.

use tracing::warn;

use crate::collectors::ErrorLog;
use crate::traits::extractor::ListExtractor;

/// Items and cursor of the extractor's initial page.
///
/// The page's own errors are appended to `errors`. A failure to produce the
/// page at all is recorded as one error and yields an empty, final page.
pub fn items_page_or_log_error<T, E>(extractor: &E, errors: &mut ErrorLog) -> (Vec<T>, String)
where
    E: ListExtractor<T> + ?Sized,
{
    match extractor.initial_page() {
        Ok(page) => {
            let (items, next_page_url, page_errors) = page.into_parts();
            errors.extend(page_errors);
            (items, next_page_url)
        }
        Err(err) => {
            warn!(
                url = %extractor.link_handler().url,
                service_id = extractor.service_id(),
                error = %err,
                "Could not get first page of items"
            );
            errors.push(err);
            (Vec::new(), String::new())
        }
    }
}

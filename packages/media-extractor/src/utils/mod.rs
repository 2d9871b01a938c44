//! Parsing helpers for scrapers: regex groups, query strings, counts, dates
//! and URL timestamps.

pub mod dates;
pub mod numbers;
pub mod parser;
pub mod timestamp;

pub use dates::parse_upload_date;
pub use numbers::{mixed_number_word_to_long, remove_non_digit_characters};
pub use parser::{match_group, match_group1};
pub use timestamp::{timestamp_seconds, UrlTimestamp, DEFAULT_TIMESTAMP_PATTERN};

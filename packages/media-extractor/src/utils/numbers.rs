//! Count parsing for the way services render numbers ("1.2K views").

use crate::error::{ExtractionError, Result};

/// Drop everything that is not an ASCII digit.
pub fn remove_non_digit_characters(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// Parse a rendered count into a number.
///
/// Accepts plain digits with separators (`"12,345 views"`) and abbreviated
/// counts with a `K`, `M` or `B` multiplier (`"1.2K"`, `"3,5M"`).
pub fn mixed_number_word_to_long(text: &str) -> Result<u64> {
    let trimmed = text.trim();
    let number_len = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == ','))
        .unwrap_or(trimmed.len());
    let (number, rest) = trimmed.split_at(number_len);

    let mut suffix = rest.chars();
    let unit = suffix.next().map(|c| c.to_ascii_uppercase());
    // a multiplier is a lone letter glued to the number, not the start of a word
    let unit = unit.filter(|_| !suffix.next().is_some_and(char::is_alphabetic));

    let multiplier = match unit {
        Some('K') => 1_000.0,
        Some('M') => 1_000_000.0,
        Some('B') => 1_000_000_000.0,
        _ => {
            let digits = remove_non_digit_characters(trimmed);
            return digits.parse().map_err(|e| {
                ExtractionError::parsing_with(format!("could not parse count {text:?}"), e)
            });
        }
    };

    let value: f64 = number.replace(',', ".").parse().map_err(|e| {
        ExtractionError::parsing_with(format!("could not parse count {text:?}"), e)
    })?;

    Ok((value * multiplier).round() as u64)
}

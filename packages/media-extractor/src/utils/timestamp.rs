//! Start offsets encoded in stream URLs (`#t=`, `&t=`, `?t=`).

use serde::{Deserialize, Serialize};

use crate::error::{ExtractionError, Result};
use crate::utils::parser::{compile, match_group};

/// Matches the common `t=` fragment forms, e.g. `&t=174` or `?t=1h2m3s`.
pub const DEFAULT_TIMESTAMP_PATTERN: &str = r"((#|&|\?)t=\d{0,3}h?\d{0,3}m?\d{1,3}s?)";

/// Outcome of looking for a start offset in a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrlTimestamp {
    /// The service pattern could not be evaluated at all
    NotApplicable,
    /// The URL carries no offset
    Absent,
    /// Offset in seconds
    At(u64),
}

impl UrlTimestamp {
    /// Offset in seconds when one is present.
    pub fn seconds(self) -> Option<u64> {
        match self {
            Self::At(seconds) => Some(seconds),
            Self::NotApplicable | Self::Absent => None,
        }
    }

    /// Integer encoding used by older clients: `-2` not applicable, `0` absent.
    pub fn as_legacy_seconds(self) -> i64 {
        match self {
            Self::NotApplicable => -2,
            Self::Absent => 0,
            Self::At(seconds) => i64::try_from(seconds).unwrap_or(i64::MAX),
        }
    }
}

/// Derive the start offset of `url` using a service-specific fragment pattern.
///
/// The fragment's `h`, `m` and `s` components are read independently; when
/// none is present the fragment is read as plain `t=<seconds>`. A fragment
/// whose numbers cannot be parsed is an error.
pub fn timestamp_seconds(url: &str, pattern: &str) -> Result<UrlTimestamp> {
    let fragment = match compile(pattern) {
        Ok(regex) => regex
            .captures(url)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str().to_string()),
        Err(_) => return Ok(UrlTimestamp::NotApplicable),
    };

    let fragment = match fragment {
        Some(fragment) if !fragment.is_empty() => fragment,
        _ => return Ok(UrlTimestamp::Absent),
    };

    let hours = match_group(r"(\d{1,3})h", &fragment, 1)?;
    let minutes = match_group(r"(\d{1,3})m", &fragment, 1)?;
    let mut seconds = match_group(r"(\d{1,3})s", &fragment, 1)?;

    if hours.is_none() && minutes.is_none() && seconds.is_none() {
        seconds = match_group(r"t=(\d+)", &fragment, 1)?;
    }

    let seconds = component(seconds.as_deref(), 1, &fragment)?;
    let minutes = component(minutes.as_deref(), 60, &fragment)?;
    let hours = component(hours.as_deref(), 3600, &fragment)?;

    let total = seconds
        .checked_add(minutes)
        .and_then(|sum| sum.checked_add(hours))
        .ok_or_else(|| ExtractionError::parsing(format!("timestamp out of range: {fragment}")))?;

    Ok(UrlTimestamp::At(total))
}

fn component(digits: Option<&str>, factor: u64, fragment: &str) -> Result<u64> {
    let Some(digits) = digits else {
        return Ok(0);
    };
    let value: u64 = digits.parse().map_err(|e| {
        ExtractionError::parsing_with(format!("could not get timestamp from {fragment}"), e)
    })?;
    value
        .checked_mul(factor)
        .ok_or_else(|| ExtractionError::parsing(format!("timestamp out of range: {fragment}")))
}

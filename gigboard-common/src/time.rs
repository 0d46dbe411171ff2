//! Start-time parsing and display formatting

use crate::{Error, Result};
use chrono::NaiveDateTime;

/// Formats accepted from the show-creation form, tried in order
const ACCEPTED_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a start time submitted through a form.
///
/// Rejects anything outside the accepted formats so a malformed date
/// fails the enclosing write unit instead of being stored verbatim.
pub fn parse_start_time(value: &str) -> Result<NaiveDateTime> {
    let trimmed = value.trim();
    for format in ACCEPTED_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(parsed);
        }
    }
    Err(Error::InvalidInput(format!(
        "Unrecognized start time: {value}"
    )))
}

/// Format a start time for display: `MM/DD/YYYY, HH:MM` (24-hour, zero-padded)
pub fn format_start_time(value: NaiveDateTime) -> String {
    value.format("%m/%d/%Y, %H:%M").to_string()
}

//! Expiration-date parsing and comparison.
//!
//! Registry feeds disagree on date formats. `YYYY-MM-DD` is the common case
//! and is tried first; RFC 3339 timestamps and a handful of other layouts
//! are accepted as fallbacks. Anything else is unparseable, and unparseable
//! never counts as non-expiring.

use chrono::{DateTime, NaiveDate};

/// Rendered in place of an expiration date that failed to parse.
pub const INVALID_DATE: &str = "Invalid date";
/// Rendered when a credential carries no expiration date at all.
pub const NO_EXPIRATION: &str = "No expiration date";

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",  // US: 01/15/2024
    "%m-%d-%Y",
    "%d-%b-%Y",  // 15-Jan-2024
    "%b %d, %Y", // Jan 15, 2024
];

/// Parse a date string into a calendar date, or `None` if no known layout
/// matches.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    // Timestamped feeds send RFC 3339; only the date part matters here.
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(timestamp.date_naive());
    }
    None
}

/// Whether an expiration value still holds as of the evaluation date.
///
/// An absent expiration is non-expiring. A present one must parse and lie
/// strictly after `as_of`; an expiration on the evaluation date itself has
/// already lapsed.
pub fn is_unexpired(expiration: Option<&str>, as_of: NaiveDate) -> bool {
    match expiration {
        None => true,
        Some(value) => match parse_date(value) {
            Some(date) => date > as_of,
            None => false,
        },
    }
}

/// Display form of an expiration value: `YYYY-MM-DD` when parseable,
/// [`INVALID_DATE`] when not, [`NO_EXPIRATION`] when absent.
pub fn format_expiration(expiration: Option<&str>) -> String {
    match expiration {
        None => NO_EXPIRATION.to_string(),
        Some(value) => match parse_date(value) {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => INVALID_DATE.to_string(),
        },
    }
}

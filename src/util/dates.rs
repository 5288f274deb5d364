//! Date display formatting for backend date strings.
//!
//! The backend sends ISO dates (`2024-01-01`) or full RFC 3339 timestamps.
//! The product renders them in the short locale form without zero padding
//! (`1/1/2024`), matching how the rest of the marketplace displays dates.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use chrono::{DateTime, Datelike, NaiveDate};

/// Format a backend date string as `M/D/YYYY`.
///
/// Unparseable input passes through unchanged so a malformed record still
/// renders something instead of breaking the card.
pub fn format_display_date(raw: &str) -> String {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return short_date(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return short_date(stamp.date_naive());
    }
    raw.to_owned()
}

fn short_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

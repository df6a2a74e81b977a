//! Clock access and date formatting.
//!
//! Views take the current time as a parameter so deadline arithmetic stays
//! testable; only this module talks to the browser clock.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use chrono::{DateTime, Utc};

/// Current wall-clock time.
pub fn now_utc() -> DateTime<Utc> {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let ms = js_sys::Date::now() as i64;
        DateTime::from_timestamp_millis(ms).unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Utc::now()
    }
}

/// Long human date, e.g. `August 22, 2026`.
pub fn format_long_date(date: DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Short date for table cells, e.g. `Aug 22, 2026`.
pub fn format_short_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

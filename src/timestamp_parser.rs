use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Handles parsing the start-time strings found in trip datasets
pub struct TimestampParser;

impl TimestampParser {
    const FORMATS: [&'static str; 3] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];

    /// Parse a timestamp string into a local (naive) date-time.
    /// Offsets are dropped; trip data is recorded in the city's local time.
    pub fn parse(timestamp_str: &str) -> Option<NaiveDateTime> {
        let timestamp = timestamp_str.trim();

        for format in Self::FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(timestamp, format) {
                return Some(naive);
            }
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
            return Some(dt.naive_local());
        }

        // Bare dates mean midnight
        NaiveDate::parse_from_str(timestamp, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
    }
}

//! Shared utility functions for WQP crates.

/// Date utility functions
pub mod dates {
    use crate::error::DateError;
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

    /// Calendar date format used by the station-data endpoint: "YYYY-MM-DD"
    pub const DATE_FORMAT: &str = "%Y-%m-%d";

    /// ISO-8601 timestamp format handed to the chart: "YYYY-MM-DDTHH:MM:SS"
    pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)?)
    }

    /// Parse a time-of-day column.
    ///
    /// Accepts "HH:MM:SS" and "HH:MM". A blank column means midnight.
    pub fn parse_time(s: &str) -> anyhow::Result<NaiveTime> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(NaiveTime::MIN);
        }
        NaiveTime::parse_from_str(s, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
            .map_err(|_| anyhow::Error::new(DateError(format!("unrecognised time of day '{}'", s))))
    }

    /// Combine separate date and time columns into one timestamp.
    pub fn parse_timestamp(date: &str, time: &str) -> anyhow::Result<NaiveDateTime> {
        if date.trim().is_empty() {
            return Err(anyhow::Error::new(DateError("missing date".to_string())));
        }
        let date = parse_date(date)?;
        let time = parse_time(time)?;
        Ok(date.and_time(time))
    }

    /// Format a timestamp as "YYYY-MM-DDTHH:MM:SS"
    pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
        timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

}

/// Error types
pub mod error {
    use std::fmt;

    #[derive(Debug)]
    pub struct DateError(pub String);

    impl fmt::Display for DateError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Date error: {}", self.0)
        }
    }

    impl std::error::Error for DateError {}
}

//! Server-side timestamp helpers.
//!
//! Timestamps are assigned in local server time with no zone offset and
//! rendered on the wire at second precision.

use chrono::{Local, NaiveDateTime};

/// Wire format for message timestamps (second precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local date-time, full precision.
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Render a timestamp in the wire format. Sub-second precision is discarded.
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

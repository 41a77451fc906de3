use chrono::DateTime;
use derive_more::{AsRef, Debug, Display};

// Timestamp format for log entries: 2024-01-01 10:15 +00:00
const SOURCE_FORMAT: &str = "%Y-%m-%d %H:%M %:z";
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";
const INVALID_MINUTE: &str = "invalid date";

const UNKNOWN_ENDPOINT: &str = "Unknown";

/// Grouping key for the endpoint table: the method token of a record, or
/// `"Unknown"` for a record that has none.
#[derive(Debug, Display, AsRef, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint(String);

impl Endpoint {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Option<&str>> for Endpoint {
    fn from(method: Option<&str>) -> Self {
        Self(method.unwrap_or(UNKNOWN_ENDPOINT).to_string())
    }
}

/// Minute-granularity display form of a raw timestamp. The embedded offset
/// must parse but is not reprojected; the wall-clock date and hour:minute
/// render as given, seconds and offset dropped.
#[derive(Debug, Display, AsRef, Clone, PartialEq, Eq, Hash)]
pub struct Minute(String);

impl Minute {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for Minute {
    fn from(raw: &str) -> Self {
        match DateTime::parse_from_str(raw, SOURCE_FORMAT) {
            Ok(moment) => Self(moment.format(DISPLAY_FORMAT).to_string()),
            Err(_) => Self(INVALID_MINUTE.to_string()),
        }
    }
}

/// Grouping key for the status table. A record without a status lands in
/// the `0` bucket, shared with a literal status of zero.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Status(u16);

impl Status {
    pub fn as_u16(self) -> u16 {
        self.0
    }
}

impl From<Option<u16>> for Status {
    fn from(status: Option<u16>) -> Self {
        Self(status.unwrap_or(0))
    }
}

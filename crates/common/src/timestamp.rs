//! Wire encoding of event timestamps.
//!
//! Events carry their `occurredOn` field as `YYYY-MM-DD HH:MM:SS` in UTC.
//! Sub-second precision is dropped on the wire.

use chrono::{DateTime, NaiveDateTime, Utc};

/// `strftime` pattern for the `occurredOn` field.
pub const OCCURRED_ON_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats a timestamp in the `occurredOn` wire format.
pub fn format(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(OCCURRED_ON_FORMAT).to_string()
}

/// Parses a timestamp written in the `occurredOn` wire format.
pub fn parse(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, OCCURRED_ON_FORMAT).map(|naive| naive.and_utc())
}

/// Serde adapter for `#[serde(with = "common::timestamp::occurred_on")]`.
pub mod occurred_on {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(
        timestamp: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format(timestamp))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse(&raw).map_err(D::Error::custom)
    }
}

//! Serde adapter for Jira's fixed-offset timestamps.
//!
//! Jira reads and writes timestamps as `2024-07-12T10:00:00.000+0300`. The
//! adapter keeps that format at the API boundary; the rest of the crate works
//! with `DateTime<Local>`.

use chrono::{DateTime, FixedOffset, Local, TimeZone};
use serde::{Deserialize, Deserializer, Serializer};

pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

pub fn format<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    timestamp.format(FORMAT).to_string()
}

pub fn parse(value: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_str(value, FORMAT)
}

/// Parses and converts to the local time zone.
pub fn parse_local(value: &str) -> Result<DateTime<Local>, chrono::ParseError> {
    parse(value).map(|timestamp| timestamp.with_timezone(&Local))
}

pub fn serialize<S>(timestamp: &DateTime<Local>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(timestamp))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Local>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_local(&value).map_err(serde::de::Error::custom)
}

pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<DateTime<Local>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(value) => parse_local(&value).map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

//! The event record read from one CSV row.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer};

/// One row of the input file.
///
/// Columns are matched by header name, so their order in the file does not
/// matter. Timestamps carry no timezone; their components are written out
/// as-is.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EventRecord {
    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "Description")]
    pub description: String,

    #[serde(rename = "StartDate", deserialize_with = "deserialize_timestamp")]
    pub start: NaiveDateTime,

    #[serde(rename = "EndDate", deserialize_with = "deserialize_timestamp")]
    pub end: NaiveDateTime,

    #[serde(rename = "Location")]
    pub location: String,
}

/// Date + time layouts accepted for StartDate/EndDate, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%m-%d-%Y %I:%M %p",
    "%m-%d-%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %I:%M:%S %p",
    "%m-%d-%Y %H:%M",
    "%m-%d-%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Date-only layouts; the time defaults to midnight.
const DATE_FORMATS: &[&str] = &["%m-%d-%Y", "%m/%d/%Y", "%Y-%m-%d"];

/// Parse a timestamp the way the input files write them, independent of the
/// machine's locale (e.g. "01-01-2022 12:00 PM").
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
                .map(|d| d.and_time(NaiveTime::MIN))
        })
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid date/time '{}'", raw)))
}

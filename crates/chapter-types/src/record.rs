use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Opaque record identifier; content files use either numbers or strings
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Number(n)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        RecordId::Text(s)
    }
}

/// A record whose date field could not be read as a calendar date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidDate {
    pub id: RecordId,
    pub value: String,
}

impl fmt::Display for InvalidDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Record {} has an invalid date: '{}'", self.id, self.value)
    }
}

impl std::error::Error for InvalidDate {}

/// Parse a content date into a local calendar date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (converted to the local date),
/// and zone-less `YYYY-MM-DDTHH:MM[:SS]` timestamps read as local time.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Local).date_naive());
    }

    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.date())
}

/// Read a date field without failing the surrounding document.
///
/// Strings pass through, `null` becomes empty and any other JSON value keeps
/// its literal text, so a bad date shows up later as an `InvalidDate`.
pub fn lenient_date<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Content item with an identity and a calendar date
pub trait Dated {
    fn id(&self) -> &RecordId;

    /// Raw date string as it appears in the content file
    fn date_str(&self) -> &str;

    fn calendar_date(&self) -> Result<NaiveDate, InvalidDate> {
        parse_calendar_date(self.date_str()).ok_or_else(|| InvalidDate {
            id: self.id().clone(),
            value: self.date_str().to_string(),
        })
    }
}

impl<T: Dated + ?Sized> Dated for &T {
    fn id(&self) -> &RecordId {
        (**self).id()
    }

    fn date_str(&self) -> &str {
        (**self).date_str()
    }
}

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use kernel::model::id::EventId;
use serde::{Deserialize, Deserializer};
use shared::error::{AppError, AppResult};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M:%S";
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

// 日時は利用者のローカル時刻で表示する
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format(DATETIME_FORMAT).to_string()
}

pub fn parse_date(field: &str, value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| {
        AppError::InvalidInput(format!("Invalid date/time format for '{field}': {e}"))
    })
}

// <input type="time"> は秒を省略して送ってくるため HH:MM も受け付ける
pub fn parse_time(field: &str, value: &str) -> AppResult<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|e| {
            AppError::InvalidInput(format!("Invalid date/time format for '{field}': {e}"))
        })
}

/// Accepts RFC 3339, or a local `YYYY-MM-DD HH:MM:SS` (a `T` separator is
/// also fine).
pub fn parse_timestamp(field: &str, value: &str) -> AppResult<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(value) {
        return Ok(at.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, DATETIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .and_then(|naive| Local.from_local_datetime(&naive).single())
        .map(|at| at.with_timezone(&Utc))
        .ok_or_else(|| AppError::InvalidInput(format!("Invalid date/time format for '{field}'")))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i64),
    String(String),
}

/// `event_id` may arrive either as a JSON number or as a numeric string.
pub fn deserialize_event_id<'de, D>(deserializer: D) -> Result<Option<EventId>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => Ok(Some(EventId::new(n))),
        Some(NumberOrString::String(s)) if s.trim().is_empty() => Ok(None),
        Some(NumberOrString::String(s)) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

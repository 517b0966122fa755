use garde::Validate;
use kernel::model::{
    event::{
        event::{CreateEvent, UpdateEvent},
        Event, EventReport,
    },
    id::EventId,
    patch::Patch,
};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};

use super::format::{
    deserialize_event_id, format_date, format_time, format_timestamp, parse_date, parse_time,
};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[garde(required, length(min = 1))]
    pub event_name: Option<String>,
    #[garde(required, length(min = 1))]
    pub event_description: Option<String>,
    #[garde(skip)]
    pub speaker: Option<String>,
    #[garde(required, length(min = 1))]
    pub location: Option<String>,
    #[garde(required, length(min = 1))]
    pub event_date: Option<String>,
    #[garde(required, length(min = 1))]
    pub start_time: Option<String>,
    #[garde(required, length(min = 1))]
    pub end_time: Option<String>,
}

// validate 済みの前提で変換する
impl TryFrom<CreateEventRequest> for CreateEvent {
    type Error = AppError;
    fn try_from(value: CreateEventRequest) -> AppResult<Self> {
        let CreateEventRequest {
            event_name,
            event_description,
            speaker,
            location,
            event_date,
            start_time,
            end_time,
        } = value;
        Ok(CreateEvent::new(
            event_name.unwrap_or_default(),
            event_description.unwrap_or_default(),
            speaker.unwrap_or_default(),
            location.unwrap_or_default(),
            parse_date("event_date", &event_date.unwrap_or_default())?,
            parse_time("start_time", &start_time.unwrap_or_default())?,
            parse_time("end_time", &end_time.unwrap_or_default())?,
        ))
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateEventRequest {
    #[serde(default, deserialize_with = "deserialize_event_id")]
    pub event_id: Option<EventId>,
    #[serde(default)]
    pub event_name: Patch<String>,
    #[serde(default)]
    pub event_description: Patch<String>,
    #[serde(default)]
    pub speaker: Patch<String>,
    #[serde(default)]
    pub location: Patch<String>,
    #[serde(default)]
    pub event_date: Patch<String>,
    #[serde(default)]
    pub start_time: Patch<String>,
    #[serde(default)]
    pub end_time: Patch<String>,
    #[serde(default)]
    pub qr_code: Patch<String>,
}

// null を許さない項目に null が送られてきた場合は検証エラーにする
fn non_null<T>(field: &str, patch: Patch<T>) -> AppResult<Patch<T>> {
    match patch {
        Patch::Null => Err(AppError::InvalidInput(format!("'{field}' cannot be null"))),
        other => Ok(other),
    }
}

fn non_empty(field: &str, patch: Patch<String>) -> AppResult<Patch<String>> {
    match non_null(field, patch)? {
        Patch::Value(v) if v.trim().is_empty() => {
            Err(AppError::InvalidInput(format!("'{field}' cannot be empty")))
        }
        other => Ok(other),
    }
}

fn parse_patch<T>(
    field: &str,
    patch: Patch<String>,
    parse: fn(&str, &str) -> AppResult<T>,
) -> AppResult<Patch<T>> {
    match non_null(field, patch)? {
        Patch::Value(v) => parse(field, &v).map(Patch::Value),
        Patch::Absent => Ok(Patch::Absent),
        Patch::Null => Ok(Patch::Null),
    }
}

impl TryFrom<UpdateEventRequest> for UpdateEvent {
    type Error = AppError;
    fn try_from(value: UpdateEventRequest) -> AppResult<Self> {
        let UpdateEventRequest {
            event_id,
            event_name,
            event_description,
            speaker,
            location,
            event_date,
            start_time,
            end_time,
            qr_code,
        } = value;
        let event_id =
            event_id.ok_or_else(|| AppError::InvalidInput("'event_id' is required".into()))?;
        Ok(UpdateEvent {
            event_id,
            event_name: non_empty("event_name", event_name)?,
            event_description: non_empty("event_description", event_description)?,
            speaker,
            location: non_empty("location", location)?,
            event_date: parse_patch("event_date", event_date, parse_date)?,
            start_time: parse_patch("start_time", start_time, parse_time)?,
            end_time: parse_patch("end_time", end_time, parse_time)?,
            qr_code,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EventResponse {
    pub event_id: EventId,
    pub event_name: String,
    pub event_description: String,
    pub speaker: String,
    pub location: String,
    pub event_date: String,
    pub start_time: String,
    pub end_time: String,
    pub qr_code: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Event> for EventResponse {
    fn from(value: Event) -> Self {
        let Event {
            event_id,
            event_name,
            event_description,
            speaker,
            location,
            event_date,
            start_time,
            end_time,
            qr_code,
            created_at,
            updated_at,
        } = value;
        Self {
            event_id,
            event_name,
            event_description,
            speaker,
            location,
            event_date: format_date(event_date),
            start_time: format_time(start_time),
            end_time: format_time(end_time),
            qr_code,
            created_at: format_timestamp(created_at),
            updated_at: format_timestamp(updated_at),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedEventResponse {
    pub message: String,
    pub event_id: EventId,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QrCodeResponse {
    pub event_name: String,
    pub qr_code: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportResponse {
    pub total_events: i64,
    pub upcoming_events: i64,
    pub completed_events: i64,
}

impl From<EventReport> for ReportResponse {
    fn from(value: EventReport) -> Self {
        let EventReport {
            total_events,
            upcoming_events,
            completed_events,
        } = value;
        Self {
            total_events,
            upcoming_events,
            completed_events,
        }
    }
}

use kernel::model::{
    event::{Event, EventReport},
    id::EventId,
};
use sqlx::types::chrono::{DateTime, NaiveDate, NaiveTime, Utc};

#[derive(sqlx::FromRow)]
pub struct EventRow {
    pub event_id: EventId,
    pub event_name: String,
    pub event_description: String,
    pub speaker: String,
    pub location: String,
    pub event_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub qr_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<EventRow> for Event {
    fn from(value: EventRow) -> Self {
        let EventRow {
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
        Event {
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
        }
    }
}

// レポート集計用の型
#[derive(sqlx::FromRow)]
pub struct EventReportRow {
    pub total_events: i64,
    pub upcoming_events: i64,
    pub completed_events: i64,
}

impl From<EventReportRow> for EventReport {
    fn from(value: EventReportRow) -> Self {
        let EventReportRow {
            total_events,
            upcoming_events,
            completed_events,
        } = value;
        EventReport {
            total_events,
            upcoming_events,
            completed_events,
        }
    }
}

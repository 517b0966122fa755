use crate::model::id::EventId;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
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

impl Event {
    /// QR コードに埋め込む文字列 `"{event_id},{event_name},{location}"`
    pub fn qr_payload(&self) -> String {
        format!("{},{},{}", self.event_id, self.event_name, self.location)
    }
}

/// Event counts relative to a given day. Events held on that day are only
/// part of `total_events`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventReport {
    pub total_events: i64,
    pub upcoming_events: i64,
    pub completed_events: i64,
}

impl EventReport {
    /// Counts in memory what the adapter's report query aggregates in SQL.
    /// Used where no database is behind the repository.
    pub fn tally(dates: impl IntoIterator<Item = NaiveDate>, today: NaiveDate) -> Self {
        dates
            .into_iter()
            .fold(Self::default(), |mut report, date| {
                report.total_events += 1;
                if date > today {
                    report.upcoming_events += 1;
                } else if date < today {
                    report.completed_events += 1;
                }
                report
            })
    }
}

use crate::model::{id::EventId, patch::Patch};
use chrono::{NaiveDate, NaiveTime};
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateEvent {
    pub event_name: String,
    pub event_description: String,
    pub speaker: String,
    pub location: String,
    pub event_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

// 送られてこなかった項目は Patch::Absent のまま、既存の値を保持する
#[derive(Debug)]
pub struct UpdateEvent {
    pub event_id: EventId,
    pub event_name: Patch<String>,
    pub event_description: Patch<String>,
    pub speaker: Patch<String>,
    pub location: Patch<String>,
    pub event_date: Patch<NaiveDate>,
    pub start_time: Patch<NaiveTime>,
    pub end_time: Patch<NaiveTime>,
    pub qr_code: Patch<String>,
}

#[derive(Debug, new)]
pub struct DeleteEvent {
    pub event_id: EventId,
}

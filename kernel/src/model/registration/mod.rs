use crate::model::id::{EventId, RegistrationId, StudentId};
use chrono::{DateTime, Utc};

pub mod event;

pub const REGISTERED_STATUS: &str = "registered";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub registration_id: RegistrationId,
    pub event_id: EventId,
    pub student_id: StudentId,
    pub fullname: String,
    pub year_and_block: String,
    pub department: String,
    pub registration_date: DateTime<Utc>,
    pub registration_status: String,
}

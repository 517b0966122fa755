use kernel::model::{
    id::{EventId, RegistrationId, StudentId},
    registration::Registration,
};
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct RegistrationRow {
    pub registration_id: RegistrationId,
    pub event_id: EventId,
    pub student_id: StudentId,
    pub fullname: String,
    pub year_and_block: String,
    pub department: String,
    pub registration_date: DateTime<Utc>,
    pub registration_status: String,
}

impl From<RegistrationRow> for Registration {
    fn from(value: RegistrationRow) -> Self {
        let RegistrationRow {
            registration_id,
            event_id,
            student_id,
            fullname,
            year_and_block,
            department,
            registration_date,
            registration_status,
        } = value;
        Registration {
            registration_id,
            event_id,
            student_id,
            fullname,
            year_and_block,
            department,
            registration_date,
            registration_status,
        }
    }
}

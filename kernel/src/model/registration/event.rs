use crate::model::id::{EventId, StudentId};
use chrono::{DateTime, Utc};
use derive_new::new;

// registration_date は呼び出し側ではなくサーバー側の現在時刻
#[derive(Debug, new)]
pub struct CreateRegistration {
    pub event_id: EventId,
    pub student_id: StudentId,
    pub fullname: String,
    pub year_and_block: String,
    pub department: String,
    pub registered_at: DateTime<Utc>,
}

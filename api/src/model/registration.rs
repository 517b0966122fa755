use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    id::{EventId, RegistrationId, StudentId},
    registration::{event::CreateRegistration, Registration},
};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};

use super::format::{deserialize_event_id, format_timestamp};

#[derive(Deserialize, Validate)]
pub struct RegisterRequest {
    #[garde(required, length(min = 1))]
    student_id: Option<String>,
    #[garde(required, length(min = 1))]
    fullname: Option<String>,
    #[garde(required, length(min = 1))]
    year_and_block: Option<String>,
    #[garde(required, length(min = 1))]
    department: Option<String>,
    #[serde(default, deserialize_with = "deserialize_event_id")]
    #[garde(required)]
    event_id: Option<EventId>,
}

impl RegisterRequest {
    // validate 済みの前提で変換する
    pub fn into_event(self, registered_at: DateTime<Utc>) -> AppResult<CreateRegistration> {
        let missing = |field: &str| AppError::InvalidInput(format!("'{field}' is required"));
        Ok(CreateRegistration::new(
            self.event_id.ok_or_else(|| missing("event_id"))?,
            StudentId::new(self.student_id.ok_or_else(|| missing("student_id"))?),
            self.fullname.ok_or_else(|| missing("fullname"))?,
            self.year_and_block.ok_or_else(|| missing("year_and_block"))?,
            self.department.ok_or_else(|| missing("department"))?,
            registered_at,
        ))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegistrationResponse {
    pub registration_id: RegistrationId,
    pub event_id: EventId,
    pub student_id: StudentId,
    pub fullname: String,
    pub year_and_block: String,
    pub department: String,
    pub registration_date: String,
    pub registration_status: String,
}

impl From<Registration> for RegistrationResponse {
    fn from(value: Registration) -> Self {
        let Registration {
            registration_id,
            event_id,
            student_id,
            fullname,
            year_and_block,
            department,
            registration_date,
            registration_status,
        } = value;
        Self {
            registration_id,
            event_id,
            student_id,
            fullname,
            year_and_block,
            department,
            registration_date: format_timestamp(registration_date),
            registration_status,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegistrationCountResponse {
    pub event_id: EventId,
    pub registration_count: i64,
}

use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    attendance::{event::RecordAttendance, Attendance, AttendanceOutcome},
    id::{AttendanceId, EventId, StudentId},
    participant::Participant,
};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};

use super::format::{deserialize_event_id, format_timestamp, parse_timestamp};

#[derive(Deserialize, Validate)]
pub struct RecordAttendanceRequest {
    #[serde(default, deserialize_with = "deserialize_event_id")]
    #[garde(required)]
    event_id: Option<EventId>,
    #[garde(required, length(min = 1))]
    student_id: Option<String>,
    #[garde(required, length(min = 1))]
    fullname: Option<String>,
    #[garde(required, length(min = 1))]
    year_and_block: Option<String>,
    #[garde(required, length(min = 1))]
    department: Option<String>,
    #[garde(skip)]
    check_in: Option<String>,
    #[garde(skip)]
    status: Option<String>,
}

impl RecordAttendanceRequest {
    // validate 済みの前提で変換する
    pub fn into_event(self, recorded_at: DateTime<Utc>) -> AppResult<RecordAttendance> {
        let missing = |field: &str| AppError::InvalidInput(format!("'{field}' is required"));
        let check_in = self
            .check_in
            .filter(|v| !v.trim().is_empty())
            .map(|v| parse_timestamp("check_in", &v))
            .transpose()?;
        Ok(RecordAttendance::new(
            self.event_id.ok_or_else(|| missing("event_id"))?,
            StudentId::new(self.student_id.ok_or_else(|| missing("student_id"))?),
            self.fullname.ok_or_else(|| missing("fullname"))?,
            self.year_and_block.ok_or_else(|| missing("year_and_block"))?,
            self.department.ok_or_else(|| missing("department"))?,
            check_in,
            self.status.filter(|v| !v.trim().is_empty()),
            recorded_at,
        ))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AttendanceResponse {
    pub attendance_id: AttendanceId,
    pub event_id: EventId,
    pub student_id: StudentId,
    pub fullname: String,
    pub year_and_block: String,
    pub department: String,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub status: String,
}

impl From<Attendance> for AttendanceResponse {
    fn from(value: Attendance) -> Self {
        let Attendance {
            attendance_id,
            event_id,
            student_id,
            full_name,
            year_and_block,
            department,
            check_in,
            check_out,
            status,
        } = value;
        Self {
            attendance_id,
            event_id,
            student_id,
            fullname: full_name,
            year_and_block,
            department,
            check_in: check_in.map(format_timestamp),
            check_out: check_out.map(format_timestamp),
            status,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecordAttendanceResponse {
    pub message: String,
    pub attendance: AttendanceResponse,
}

impl From<AttendanceOutcome> for RecordAttendanceResponse {
    fn from(value: AttendanceOutcome) -> Self {
        let (message, attendance) = match value {
            AttendanceOutcome::CheckedIn(a) => ("Check-in recorded", a),
            AttendanceOutcome::CheckedOut(a) => ("Check-out recorded", a),
        };
        Self {
            message: message.into(),
            attendance: attendance.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ParticipantAttendanceResponse {
    pub participant_id: StudentId,
    pub name: String,
    pub check_in: Option<String>,
    pub status: String,
}

impl ParticipantAttendanceResponse {
    pub fn new(participant: &Participant, attendance: Attendance) -> Self {
        Self {
            participant_id: participant.student_id.clone(),
            name: participant.full_name(),
            check_in: attendance.check_in.map(format_timestamp),
            status: attendance.status,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EventAttendanceResponse {
    pub event_id: EventId,
    pub attendance: Vec<ParticipantAttendanceResponse>,
}

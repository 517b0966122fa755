use crate::model::id::{AttendanceId, EventId, StudentId};
use chrono::{DateTime, Utc};
use shared::error::{AppError, AppResult};

pub mod event;

// 初回チェックイン時に status が指定されなかった場合の値。
// チェックインと組み合わせると矛盾して見えるが、既存の挙動としてそのまま残す
pub const DEFAULT_ATTENDANCE_STATUS: &str = "Absent";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attendance {
    pub attendance_id: AttendanceId,
    pub event_id: EventId,
    pub student_id: StudentId,
    pub full_name: String,
    pub year_and_block: String,
    pub department: String,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
    pub status: String,
}

/// Where a `(event_id, student_id)` pair is in its attendance lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceState {
    Unseen,
    CheckedIn(AttendanceId),
    CheckedOut,
}

/// The single write a scan is allowed to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceStep {
    CheckIn,
    CheckOut(AttendanceId),
}

impl AttendanceState {
    pub fn of(record: Option<&Attendance>) -> Self {
        match record {
            None => AttendanceState::Unseen,
            Some(a) if a.check_out.is_none() => AttendanceState::CheckedIn(a.attendance_id),
            Some(_) => AttendanceState::CheckedOut,
        }
    }

    pub fn next_step(self) -> AppResult<AttendanceStep> {
        match self {
            AttendanceState::Unseen => Ok(AttendanceStep::CheckIn),
            AttendanceState::CheckedIn(id) => Ok(AttendanceStep::CheckOut(id)),
            AttendanceState::CheckedOut => Err(attendance_completed()),
        }
    }
}

pub fn attendance_completed() -> AppError {
    AppError::Conflict("Attendance already completed for this event".into())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttendanceOutcome {
    CheckedIn(Attendance),
    CheckedOut(Attendance),
}

impl AttendanceOutcome {
    pub fn attendance(&self) -> &Attendance {
        match self {
            AttendanceOutcome::CheckedIn(a) | AttendanceOutcome::CheckedOut(a) => a,
        }
    }
}

use crate::model::{
    attendance::{Attendance, DEFAULT_ATTENDANCE_STATUS},
    id::{AttendanceId, EventId, StudentId},
};
use chrono::{DateTime, Utc};
use derive_new::new;

#[derive(Debug, Clone, new)]
pub struct RecordAttendance {
    pub event_id: EventId,
    pub student_id: StudentId,
    pub full_name: String,
    pub year_and_block: String,
    pub department: String,
    pub check_in: Option<DateTime<Utc>>,
    pub status: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

impl RecordAttendance {
    /// The row inserted on the first scan.
    pub fn check_in_row(&self, attendance_id: AttendanceId) -> Attendance {
        Attendance {
            attendance_id,
            event_id: self.event_id,
            student_id: self.student_id.clone(),
            full_name: self.full_name.clone(),
            year_and_block: self.year_and_block.clone(),
            department: self.department.clone(),
            check_in: Some(self.check_in.unwrap_or(self.recorded_at)),
            check_out: None,
            status: self
                .status
                .clone()
                .unwrap_or_else(|| DEFAULT_ATTENDANCE_STATUS.to_string()),
        }
    }
}

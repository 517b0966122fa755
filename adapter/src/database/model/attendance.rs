use kernel::model::{
    attendance::Attendance,
    id::{AttendanceId, EventId, StudentId},
};
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct AttendanceRow {
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

impl From<AttendanceRow> for Attendance {
    fn from(value: AttendanceRow) -> Self {
        let AttendanceRow {
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
        Attendance {
            attendance_id,
            event_id,
            student_id,
            full_name,
            year_and_block,
            department,
            check_in,
            check_out,
            status,
        }
    }
}

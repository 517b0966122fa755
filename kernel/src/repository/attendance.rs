use crate::model::{
    attendance::{event::RecordAttendance, Attendance, AttendanceOutcome},
    id::EventId,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    /// Applies one scan to the `(event_id, student_id)` pair: the first
    /// scan checks in, the second checks out, any later scan is a
    /// `Conflict`. Concurrent scans of the same pair never produce a second
    /// row or a second check-out.
    async fn record(&self, event: RecordAttendance) -> AppResult<AttendanceOutcome>;
    async fn find_by_event_id(&self, event_id: EventId) -> AppResult<Vec<Attendance>>;
}

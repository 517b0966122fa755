use crate::database::{model::attendance::AttendanceRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    attendance::{
        attendance_completed, event::RecordAttendance, Attendance, AttendanceOutcome,
        AttendanceState, AttendanceStep,
    },
    id::{AttendanceId, EventId},
};
use kernel::repository::attendance::AttendanceRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct AttendanceRepositoryImpl {
    db: ConnectionPool,
}

const ATTENDANCE_COLUMNS: &str = r#"
    attendance_id,
    event_id,
    student_id,
    full_name,
    year_and_block,
    department,
    check_in,
    check_out,
    status
"#;

#[async_trait]
impl AttendanceRepository for AttendanceRepositoryImpl {
    #[tracing::instrument(
        skip(self, event),
        fields(event_id = %event.event_id, student_id = %event.student_id)
    )]
    async fn record(&self, event: RecordAttendance) -> AppResult<AttendanceOutcome> {
        let mut tx = self.db.begin().await?;

        let event_row: Option<EventId> =
            sqlx::query_scalar("SELECT event_id FROM events WHERE event_id = $1")
                .bind(event.event_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;

        if event_row.is_none() {
            return Err(AppError::EntityNotFound(format!(
                "Event ({}) not found",
                event.event_id
            )));
        }

        // 同じ組み合わせへの同時スキャンはこの行ロックで直列化される
        let existing: Option<Attendance> = sqlx::query_as::<_, AttendanceRow>(&format!(
            r#"
                SELECT {ATTENDANCE_COLUMNS}
                FROM attendance
                WHERE event_id = $1 AND student_id = $2
                FOR UPDATE
            "#
        ))
        .bind(event.event_id)
        .bind(&event.student_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?
        .map(Attendance::from);

        let outcome = match AttendanceState::of(existing.as_ref()).next_step()? {
            AttendanceStep::CheckIn => {
                let attendance = event.check_in_row(AttendanceId::new());
                // まだ行がない状態で同時に挿入された場合は、先にコミットした側だけが成功する
                let inserted: Option<AttendanceRow> = sqlx::query_as(&format!(
                    r#"
                        INSERT INTO attendance
                        (attendance_id, event_id, student_id, full_name, year_and_block,
                        department, check_in, check_out, status)
                        VALUES ($1, $2, $3, $4, $5, $6, $7, NULL, $8)
                        ON CONFLICT (event_id, student_id) DO NOTHING
                        RETURNING {ATTENDANCE_COLUMNS}
                    "#
                ))
                .bind(attendance.attendance_id)
                .bind(attendance.event_id)
                .bind(&attendance.student_id)
                .bind(&attendance.full_name)
                .bind(&attendance.year_and_block)
                .bind(&attendance.department)
                .bind(attendance.check_in)
                .bind(&attendance.status)
                .fetch_optional(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;

                let Some(row) = inserted else {
                    return Err(AppError::Conflict(
                        "Attendance for this participant was recorded concurrently".into(),
                    ));
                };
                AttendanceOutcome::CheckedIn(row.into())
            }
            AttendanceStep::CheckOut(attendance_id) => {
                let updated: Option<AttendanceRow> = sqlx::query_as(&format!(
                    r#"
                        UPDATE attendance
                        SET check_out = $2
                        WHERE attendance_id = $1 AND check_out IS NULL
                        RETURNING {ATTENDANCE_COLUMNS}
                    "#
                ))
                .bind(attendance_id)
                .bind(event.recorded_at)
                .fetch_optional(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;

                let Some(row) = updated else {
                    return Err(attendance_completed());
                };
                AttendanceOutcome::CheckedOut(row.into())
            }
        };

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(outcome)
    }

    async fn find_by_event_id(&self, event_id: EventId) -> AppResult<Vec<Attendance>> {
        sqlx::query_as::<_, AttendanceRow>(&format!(
            r#"
                SELECT {ATTENDANCE_COLUMNS}
                FROM attendance
                WHERE event_id = $1
                ORDER BY check_in ASC NULLS LAST
            "#
        ))
        .bind(event_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Attendance::from).collect())
        .map_err(AppError::SpecificOperationError)
    }
}

use crate::database::{
    model::event::{EventReportRow, EventRow},
    ConnectionPool,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use derive_new::new;
use kernel::model::{
    event::{
        event::{CreateEvent, DeleteEvent, UpdateEvent},
        Event, EventReport,
    },
    id::EventId,
};
use kernel::repository::event::EventRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct EventRepositoryImpl {
    db: ConnectionPool,
}

const SELECT_EVENTS: &str = r#"
    SELECT
        event_id,
        event_name,
        event_description,
        speaker,
        location,
        event_date,
        start_time,
        end_time,
        qr_code,
        created_at,
        updated_at
    FROM events
"#;

#[async_trait]
impl EventRepository for EventRepositoryImpl {
    #[tracing::instrument(skip(self, event), fields(event_name = %event.event_name))]
    async fn create(&self, event: CreateEvent) -> AppResult<EventId> {
        let event_id: EventId = sqlx::query_scalar(
            r#"
                INSERT INTO events
                (event_name, event_description, speaker, location,
                event_date, start_time, end_time)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING event_id
            "#,
        )
        .bind(&event.event_name)
        .bind(&event.event_description)
        .bind(&event.speaker)
        .bind(&event.location)
        .bind(event.event_date)
        .bind(event.start_time)
        .bind(event.end_time)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(event_id)
    }

    async fn find_all(&self) -> AppResult<Vec<Event>> {
        let rows: Vec<EventRow> =
            sqlx::query_as(&format!("{SELECT_EVENTS} ORDER BY event_date ASC, event_id ASC"))
                .fetch_all(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn find_by_id(&self, event_id: EventId) -> AppResult<Option<Event>> {
        let row: Option<EventRow> = sqlx::query_as(&format!("{SELECT_EVENTS} WHERE event_id = $1"))
            .bind(event_id)
            .fetch_optional(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Event::from))
    }

    #[tracing::instrument(skip(self, event), fields(event_id = %event.event_id))]
    async fn update(&self, event: UpdateEvent) -> AppResult<()> {
        // Patch::Absent の項目は COALESCE / CASE で既存の値のままにする。
        // speaker と qr_code だけは null を受け付ける
        let speaker = event.speaker.into_nullable();
        let qr_code = event.qr_code.into_nullable();

        let res = sqlx::query(
            r#"
                UPDATE events
                SET
                    event_name = COALESCE($2, event_name),
                    event_description = COALESCE($3, event_description),
                    speaker = CASE WHEN $4 THEN COALESCE($5, '') ELSE speaker END,
                    location = COALESCE($6, location),
                    event_date = COALESCE($7, event_date),
                    start_time = COALESCE($8, start_time),
                    end_time = COALESCE($9, end_time),
                    qr_code = CASE WHEN $10 THEN $11 ELSE qr_code END
                WHERE event_id = $1
            "#,
        )
        .bind(event.event_id)
        .bind(event.event_name.into_nullable().flatten())
        .bind(event.event_description.into_nullable().flatten())
        .bind(speaker.is_some())
        .bind(speaker.flatten())
        .bind(event.location.into_nullable().flatten())
        .bind(event.event_date.into_nullable().flatten())
        .bind(event.start_time.into_nullable().flatten())
        .bind(event.end_time.into_nullable().flatten())
        .bind(qr_code.is_some())
        .bind(qr_code.flatten())
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("Event not found".into()));
        }

        Ok(())
    }

    #[tracing::instrument(skip(self), fields(event_id = %event.event_id))]
    async fn delete(&self, event: DeleteEvent) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        // 外部キーは ON DELETE CASCADE だが、関連レコードの削除を明示しておく
        for table in ["attendance", "event_registrations"] {
            sqlx::query(&format!("DELETE FROM {table} WHERE event_id = $1"))
                .bind(event.event_id)
                .execute(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;
        }

        let res = sqlx::query("DELETE FROM events WHERE event_id = $1")
            .bind(event.event_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("Event not found".into()));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }

    async fn report(&self, today: NaiveDate) -> AppResult<EventReport> {
        // 当日開催のイベントは total にのみ数える
        let row: EventReportRow = sqlx::query_as(
            r#"
                SELECT
                    COUNT(*) AS total_events,
                    COUNT(*) FILTER (WHERE event_date > $1) AS upcoming_events,
                    COUNT(*) FILTER (WHERE event_date < $1) AS completed_events
                FROM events
            "#,
        )
        .bind(today)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.into())
    }
}

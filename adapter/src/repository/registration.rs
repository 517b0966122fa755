use crate::database::{
    map_unique_violation, model::registration::RegistrationRow, ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{EventId, RegistrationId},
    registration::{event::CreateRegistration, Registration, REGISTERED_STATUS},
};
use kernel::repository::registration::RegistrationRepository;
use shared::error::{AppError, AppResult};

const ALREADY_REGISTERED: &str = "You are already registered for this event";

#[derive(new)]
pub struct RegistrationRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl RegistrationRepository for RegistrationRepositoryImpl {
    #[tracing::instrument(
        skip(self, event),
        fields(event_id = %event.event_id, student_id = %event.student_id)
    )]
    async fn create(&self, event: CreateRegistration) -> AppResult<RegistrationId> {
        let mut tx = self.db.begin().await?;

        // 事前のチェックとして、以下を調べる。
        // - 指定のイベントが存在するか
        // - 同じ学籍番号で既に登録されていないか
        {
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

            let existing: Option<RegistrationId> = sqlx::query_scalar(
                r#"
                    SELECT registration_id FROM event_registrations
                    WHERE event_id = $1 AND student_id = $2
                "#,
            )
            .bind(event.event_id)
            .bind(&event.student_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            if existing.is_some() {
                return Err(AppError::DuplicateEntry(ALREADY_REGISTERED.into()));
            }
        }

        // 同時に登録された場合は一意制約違反として同じエラーを返す
        let registration_id = RegistrationId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO event_registrations
                (registration_id, event_id, student_id, fullname, year_and_block,
                department, registration_date, registration_status)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(registration_id)
        .bind(event.event_id)
        .bind(&event.student_id)
        .bind(&event.fullname)
        .bind(&event.year_and_block)
        .bind(&event.department)
        .bind(event.registered_at)
        .bind(REGISTERED_STATUS)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, ALREADY_REGISTERED))?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No registration record has been created".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(registration_id)
    }

    async fn find_by_event_id(&self, event_id: EventId) -> AppResult<Vec<Registration>> {
        sqlx::query_as::<_, RegistrationRow>(
            r#"
                SELECT
                    registration_id,
                    event_id,
                    student_id,
                    fullname,
                    year_and_block,
                    department,
                    registration_date,
                    registration_status
                FROM event_registrations
                WHERE event_id = $1
                ORDER BY registration_date ASC
            "#,
        )
        .bind(event_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Registration::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn count_by_event_id(&self, event_id: EventId) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM event_registrations WHERE event_id = $1")
            .bind(event_id)
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)
    }
}

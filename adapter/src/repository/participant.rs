use crate::{
    credential::hash_password,
    database::{map_unique_violation, model::participant::ParticipantRow, ConnectionPool},
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::StudentId,
    participant::{event::CreateParticipant, Participant},
};
use kernel::repository::participant::ParticipantRepository;
use shared::error::{AppError, AppResult};

const DUPLICATE_PARTICIPANT: &str = "Student ID or Email is already registered";

#[derive(new)]
pub struct ParticipantRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ParticipantRepository for ParticipantRepositoryImpl {
    #[tracing::instrument(skip(self, event), fields(student_id = %event.student_id))]
    async fn create(&self, event: CreateParticipant) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        let existing: Option<StudentId> = sqlx::query_scalar(
            r#"
                SELECT student_id FROM participants
                WHERE student_id = $1 OR email = $2
                LIMIT 1
            "#,
        )
        .bind(&event.student_id)
        .bind(&event.email)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if existing.is_some() {
            return Err(AppError::DuplicateEntry(DUPLICATE_PARTICIPANT.into()));
        }

        let password_hash = hash_password(&event.password)?;
        let res = sqlx::query(
            r#"
                INSERT INTO participants
                (student_id, password_hash, first_name, last_name, email, department)
                VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&event.student_id)
        .bind(&password_hash)
        .bind(&event.first_name)
        .bind(&event.last_name)
        .bind(&event.email)
        .bind(&event.department)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, DUPLICATE_PARTICIPANT))?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No participant record has been created".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }

    async fn find_by_id(&self, student_id: &StudentId) -> AppResult<Option<Participant>> {
        let row: Option<ParticipantRow> = sqlx::query_as(
            r#"
                SELECT student_id, first_name, last_name, email, department
                FROM participants
                WHERE student_id = $1
            "#,
        )
        .bind(student_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Participant::from))
    }
}

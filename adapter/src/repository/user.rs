use crate::{
    credential::hash_password,
    database::{map_unique_violation, model::user::UserRow, ConnectionPool},
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::UserId,
    user::{event::CreateUser, User},
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

const DUPLICATE_USER: &str = "Username or Email is already registered";

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    #[tracing::instrument(skip(self, event), fields(username = %event.username))]
    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let mut tx = self.db.begin().await?;

        let existing: Option<UserId> = sqlx::query_scalar(
            r#"
                SELECT user_id FROM users
                WHERE username = $1 OR email = $2
                LIMIT 1
            "#,
        )
        .bind(&event.username)
        .bind(&event.email)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if existing.is_some() {
            return Err(AppError::DuplicateEntry(DUPLICATE_USER.into()));
        }

        let user_id = UserId::new();
        let password_hash = hash_password(&event.password)?;
        let row: UserRow = sqlx::query_as(
            r#"
                INSERT INTO users (user_id, username, email, password_hash, role)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING user_id, username, email, role, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(&event.username)
        .bind(&event.email)
        .bind(&password_hash)
        .bind(event.role.as_ref())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, DUPLICATE_USER))?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        User::try_from(row)
    }

    async fn find_current_user(&self, user_id: UserId) -> AppResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT user_id, username, email, role, created_at, updated_at
                FROM users
                WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(User::try_from).transpose()
    }
}

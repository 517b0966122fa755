use std::sync::Arc;

use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        auth::{event::CreateToken, AccessToken, Principal},
        id::{StudentId, UserId},
    },
    repository::auth::AuthRepository,
};
use shared::error::{AppError, AppResult};

use crate::{
    credential::verify_password,
    database::{
        model::{
            auth::{from, AuthorizationKey},
            participant::ParticipantCredentialRow,
            user::UserCredentialRow,
        },
        ConnectionPool,
    },
    redis::RedisClient,
};

#[derive(new)]
pub struct AuthRepositoryImpl {
    db: ConnectionPool,
    kv: Arc<RedisClient>,
    ttl: u64,
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn fetch_principal_from_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<Principal>> {
        let key: AuthorizationKey = access_token.into();
        self.kv
            .get(&key)
            .await
            .map(|x| x.map(|principal| principal.into_inner()))
    }

    async fn verify_participant(
        &self,
        student_id: &StudentId,
        password: &str,
    ) -> AppResult<StudentId> {
        let row: Option<ParticipantCredentialRow> = sqlx::query_as(
            r#"
                SELECT student_id, password_hash FROM participants
                WHERE student_id = $1
            "#,
        )
        .bind(student_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(row) = row else {
            return Err(AppError::UnauthenticatedError);
        };
        if !verify_password(password, &row.password_hash)? {
            return Err(AppError::UnauthenticatedError);
        }
        Ok(row.student_id)
    }

    async fn verify_user(&self, username: &str, password: &str) -> AppResult<UserId> {
        let row: Option<UserCredentialRow> = sqlx::query_as(
            r#"
                SELECT user_id, password_hash FROM users
                WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(row) = row else {
            return Err(AppError::UnauthenticatedError);
        };
        if !verify_password(password, &row.password_hash)? {
            return Err(AppError::UnauthenticatedError);
        }
        Ok(row.user_id)
    }

    async fn create_token(&self, event: CreateToken) -> AppResult<AccessToken> {
        let (key, value) = from(event);
        self.kv.set_ex(&key, &value, self.ttl).await?;
        Ok(key.into())
    }

    async fn delete_token(&self, access_token: AccessToken) -> AppResult<()> {
        let key: AuthorizationKey = access_token.into();
        self.kv.delete(&key).await
    }
}

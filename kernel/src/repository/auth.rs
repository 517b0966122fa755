use crate::model::{
    auth::{event::CreateToken, AccessToken, Principal},
    id::{StudentId, UserId},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn fetch_principal_from_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<Principal>>;
    // 該当者がいない場合もパスワード不一致の場合も同じ UnauthenticatedError を返す
    async fn verify_participant(&self, student_id: &StudentId, password: &str)
        -> AppResult<StudentId>;
    async fn verify_user(&self, username: &str, password: &str) -> AppResult<UserId>;
    async fn create_token(&self, event: CreateToken) -> AppResult<AccessToken>;
    async fn delete_token(&self, access_token: AccessToken) -> AppResult<()>;
}

use crate::model::{
    id::{EventId, RegistrationId},
    registration::{event::CreateRegistration, Registration},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    // 同じ (event_id, student_id) の登録が既にあれば DuplicateEntry を返す
    async fn create(&self, event: CreateRegistration) -> AppResult<RegistrationId>;
    async fn find_by_event_id(&self, event_id: EventId) -> AppResult<Vec<Registration>>;
    async fn count_by_event_id(&self, event_id: EventId) -> AppResult<i64>;
}

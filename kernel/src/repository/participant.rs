use crate::model::{
    id::StudentId,
    participant::{event::CreateParticipant, Participant},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    // student_id か email が既に使われていれば DuplicateEntry を返す
    async fn create(&self, event: CreateParticipant) -> AppResult<()>;
    async fn find_by_id(&self, student_id: &StudentId) -> AppResult<Option<Participant>>;
}

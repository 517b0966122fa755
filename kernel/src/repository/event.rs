use crate::model::{
    event::{
        event::{CreateEvent, DeleteEvent, UpdateEvent},
        Event, EventReport,
    },
    id::EventId,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use shared::error::AppResult;

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: CreateEvent) -> AppResult<EventId>;
    async fn find_all(&self) -> AppResult<Vec<Event>>;
    async fn find_by_id(&self, event_id: EventId) -> AppResult<Option<Event>>;
    // 送られてきた項目だけを更新する
    async fn update(&self, event: UpdateEvent) -> AppResult<()>;
    // 参加登録・出席記録もあわせて削除する
    async fn delete(&self, event: DeleteEvent) -> AppResult<()>;
    async fn report(&self, today: NaiveDate) -> AppResult<EventReport>;
}

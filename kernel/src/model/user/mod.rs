use crate::model::{id::UserId, role::Role};
use chrono::{DateTime, Utc};

pub mod event;

// パスワードのダイジェストは持たない公開用の射影
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

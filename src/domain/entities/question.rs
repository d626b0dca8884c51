use chrono::{DateTime, Utc};

use crate::domain::entities::{id::Id, user::User};

#[derive(Debug, Clone)]
pub struct Question {
    pub id: Id<Question>,
    pub user_id: Id<User>,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

use chrono::{DateTime, Utc};

use crate::domain::entities::{id::Id, question::Question};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: Id<Comment>,
    pub question_id: Id<Question>,
    pub name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

use chrono::{DateTime, Utc};

use crate::domain::entities::comment::Comment;

#[derive(Debug, Clone)]
pub struct CommentDTO {
    pub id: String,
    pub question_id: String,
    pub name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentDTO {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            question_id: comment.question_id.to_string(),
            name: comment.name,
            content: comment.content,
            created_at: comment.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct QuestionDetailDTO {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub total_likes: i64,
    pub comments: Vec<CommentDTO>,
}

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::dto::question::{CommentDTO, QuestionDetailDTO};

#[derive(Debug, Serialize, ToSchema)]
pub struct CommentResponse {
    pub id: String,
    pub question_id: String,
    pub name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionResponse {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub total_likes: i64,
    pub comments: Vec<CommentResponse>,
}

impl From<CommentDTO> for CommentResponse {
    fn from(dto: CommentDTO) -> Self {
        Self {
            id: dto.id,
            question_id: dto.question_id,
            name: dto.name,
            content: dto.content,
            created_at: dto.created_at,
        }
    }
}

impl From<QuestionDetailDTO> for QuestionResponse {
    fn from(dto: QuestionDetailDTO) -> Self {
        Self {
            id: dto.id,
            user_id: dto.user_id,
            title: dto.title,
            content: dto.content,
            created_at: dto.created_at,
            total_likes: dto.total_likes,
            comments: dto.comments.into_iter().map(Into::into).collect(),
        }
    }
}

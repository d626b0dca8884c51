use std::sync::Arc;

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::id::IdDTO;
use crate::application::dto::question::QuestionDetailDTO;
use crate::application::interface::gateway::question::{CommentReader, QuestionReader};
use crate::domain::entities::id::Id;
use crate::domain::entities::question::Question;

#[derive(Clone)]
pub struct GetQuestionInteractor {
    question_reader: Arc<dyn QuestionReader>,
    comment_reader: Arc<dyn CommentReader>,
}

impl GetQuestionInteractor {
    pub fn new(question_reader: Arc<dyn QuestionReader>, comment_reader: Arc<dyn CommentReader>) -> Self {
        Self {
            question_reader,
            comment_reader,
        }
    }

    pub async fn execute(&self, dto: IdDTO) -> AppResult<QuestionDetailDTO> {
        let question_id: Id<Question> = dto.id.try_into()?;
        let question = self
            .question_reader
            .find_by_id(&question_id)
            .await?
            .ok_or(AppError::QuestionNotFound)?;
        // Likes are counted on every read, never cached on the row.
        let total_likes = self.question_reader.count_likes(&question_id).await?;
        let comments = self.comment_reader.list_by_question(&question_id).await?;

        Ok(QuestionDetailDTO {
            id: question.id.to_string(),
            user_id: question.user_id.to_string(),
            title: question.title,
            content: question.content,
            created_at: question.created_at,
            total_likes,
            comments: comments.into_iter().map(Into::into).collect(),
        })
    }
}

use crate::{
    application::app_error::AppResult,
    domain::entities::{comment::Comment, id::Id, question::Question},
};
use async_trait::async_trait;

#[async_trait]
pub trait QuestionReader: Send + Sync {
    async fn find_by_id(&self, question_id: &Id<Question>) -> AppResult<Option<Question>>;
    async fn count_likes(&self, question_id: &Id<Question>) -> AppResult<i64>;
}

#[async_trait]
pub trait CommentReader: Send + Sync {
    /// Newest first.
    async fn list_by_question(&self, question_id: &Id<Question>) -> AppResult<Vec<Comment>>;
}

use async_trait::async_trait;
use futures::FutureExt;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::question::{CommentReader, QuestionReader};
use crate::domain::entities::comment::Comment;
use crate::domain::entities::id::Id;
use crate::domain::entities::question::Question;

#[derive(Clone)]
pub struct QuestionGateway {
    session: SqlxSession,
}

impl QuestionGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }

    fn map_question(row: PgRow) -> AppResult<Question> {
        Ok(Question {
            id: Id::new(row.try_get("id")?),
            user_id: Id::new(row.try_get("user_id")?),
            title: row.try_get("title")?,
            content: row.try_get("content")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[async_trait]
impl QuestionReader for QuestionGateway {
    async fn find_by_id(&self, question_id: &Id<Question>) -> AppResult<Option<Question>> {
        self.session
            .with_tx(|tx| {
                let question_id = question_id.value;
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT
                                id, user_id, title, content, created_at
                            FROM
                                questions
                            WHERE id = $1
                        "#,
                    )
                    .bind(question_id)
                    .fetch_optional(tx.as_mut())
                    .await?;

                    result.map(Self::map_question).transpose()
                }
                .boxed()
            })
            .await
    }

    async fn count_likes(&self, question_id: &Id<Question>) -> AppResult<i64> {
        self.session
            .with_tx(|tx| {
                let question_id = question_id.value;
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT
                                COUNT(*) AS total_likes
                            FROM
                                question_likes
                            WHERE question_id = $1
                        "#,
                    )
                    .bind(question_id)
                    .fetch_one(tx.as_mut())
                    .await?;
                    let total_likes: i64 = result.try_get("total_likes")?;
                    Ok(total_likes)
                }
                .boxed()
            })
            .await
    }
}

#[derive(Clone)]
pub struct CommentGateway {
    session: SqlxSession,
}

impl CommentGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl CommentReader for CommentGateway {
    async fn list_by_question(&self, question_id: &Id<Question>) -> AppResult<Vec<Comment>> {
        self.session
            .with_tx(|tx| {
                let question_id = question_id.value;
                async move {
                    let rows = sqlx::query(
                        r#"
                            SELECT
                                id, question_id, name, content, created_at
                            FROM
                                comments
                            WHERE question_id = $1
                            ORDER BY created_at DESC
                        "#,
                    )
                    .bind(question_id)
                    .fetch_all(tx.as_mut())
                    .await?;

                    rows.into_iter()
                        .map(|row| -> AppResult<Comment> {
                            Ok(Comment {
                                id: Id::new(row.try_get("id")?),
                                question_id: Id::new(row.try_get("question_id")?),
                                name: row.try_get("name")?,
                                content: row.try_get("content")?,
                                created_at: row.try_get("created_at")?,
                            })
                        })
                        .collect()
                }
                .boxed()
            })
            .await
    }
}

use async_trait::async_trait;
use futures::FutureExt;
use sqlx::Row;
use uuid::Uuid;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::{AppError, AppResult};
use crate::application::interface::gateway::user::{UserReader, UserWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;

#[derive(Clone)]
pub struct UserGateway {
    session: SqlxSession,
}

impl UserGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }
}

// A registration that passed `is_user` can still lose the race to a
// concurrent one; the UNIQUE constraint decides and it is a conflict.
fn map_insert_error(err: sqlx::Error) -> AppError {
    match err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => AppError::UserAlreadyExists,
        other => other.into(),
    }
}

#[async_trait]
impl UserWriter for UserGateway {
    async fn insert(&self, user: User) -> AppResult<Id<User>> {
        self.session
            .with_tx(|tx| {
                async move {
                    let result = sqlx::query(
                        r#"
                            INSERT INTO users
                                (id, username, email, password, created_at, updated_at)
                            VALUES
                                ($1, $2, $3, $4, $5, $6)
                            RETURNING
                                id
                        "#,
                    )
                    .bind(user.id.value)
                    .bind(&user.username)
                    .bind(&user.email)
                    .bind(&user.password)
                    .bind(user.created_at)
                    .bind(user.updated_at)
                    .fetch_one(tx.as_mut())
                    .await
                    .map_err(map_insert_error)?;
                    let id: Uuid = result.try_get("id")?;
                    Ok(Id::new(id))
                }
                .boxed()
            })
            .await
    }
}

#[async_trait]
impl UserReader for UserGateway {
    async fn is_user(&self, username: &str, email: &str) -> AppResult<bool> {
        self.session
            .with_tx(|tx| {
                let username = username.to_owned();
                let email = email.to_owned();
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT EXISTS(
                                SELECT
                                    id
                                FROM
                                    users
                                WHERE username = $1 OR email = $2
                            ) AS is_user
                        "#,
                    )
                    .bind(&username)
                    .bind(&email)
                    .fetch_one(tx.as_mut())
                    .await?;
                    let is_user: bool = result.try_get("is_user")?;
                    Ok(is_user)
                }
                .boxed()
            })
            .await
    }
}

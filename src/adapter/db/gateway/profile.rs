use async_trait::async_trait;
use futures::FutureExt;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::profile::{ProfileReader, ProfileWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::media::MediaPath;
use crate::domain::entities::profile::Profile;
use crate::domain::entities::user::User;

#[derive(Clone)]
pub struct ProfileGateway {
    session: SqlxSession,
}

impl ProfileGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }

    fn map_profile(row: PgRow) -> AppResult<Profile> {
        let image: String = row.try_get("image")?;
        Ok(Profile {
            id: Id::new(row.try_get("id")?),
            user_id: Id::new(row.try_get("user_id")?),
            bio: row.try_get("bio")?,
            phone: row.try_get("phone")?,
            image: MediaPath::parse(image)?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl ProfileWriter for ProfileGateway {
    async fn insert(&self, profile: Profile) -> AppResult<Id<Profile>> {
        self.session
            .with_tx(|tx| {
                async move {
                    let result = sqlx::query(
                        r#"
                            INSERT INTO profiles
                                (id, user_id, bio, phone, image, created_at, updated_at)
                            VALUES
                                ($1, $2, $3, $4, $5, $6, $7)
                            RETURNING
                                id
                        "#,
                    )
                    .bind(profile.id.value)
                    .bind(profile.user_id.value)
                    .bind(&profile.bio)
                    .bind(profile.phone)
                    .bind(profile.image.as_str())
                    .bind(profile.created_at)
                    .bind(profile.updated_at)
                    .fetch_one(tx.as_mut())
                    .await?;
                    let id: Uuid = result.try_get("id")?;
                    Ok(Id::new(id))
                }
                .boxed()
            })
            .await
    }

    async fn update(&self, profile: Profile) -> AppResult<Id<Profile>> {
        self.session
            .with_tx(|tx| {
                async move {
                    let result = sqlx::query(
                        r#"
                            UPDATE
                                profiles
                            SET
                                bio = $2, phone = $3, image = $4, updated_at = $5
                            WHERE
                                id = $1
                            RETURNING
                                id
                        "#,
                    )
                    .bind(profile.id.value)
                    .bind(&profile.bio)
                    .bind(profile.phone)
                    .bind(profile.image.as_str())
                    .bind(profile.updated_at)
                    .fetch_one(tx.as_mut())
                    .await?;
                    let id: Uuid = result.try_get("id")?;
                    Ok(Id::new(id))
                }
                .boxed()
            })
            .await
    }
}

#[async_trait]
impl ProfileReader for ProfileGateway {
    async fn find_by_user_id(&self, user_id: &Id<User>) -> AppResult<Option<Profile>> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT
                                id, user_id, bio, phone, image, created_at, updated_at
                            FROM
                                profiles
                            WHERE user_id = $1
                        "#,
                    )
                    .bind(user_id)
                    .fetch_optional(tx.as_mut())
                    .await?;

                    result.map(Self::map_profile).transpose()
                }
                .boxed()
            })
            .await
    }

    async fn find_by_user_id_for_update(&self, user_id: &Id<User>) -> AppResult<Option<Profile>> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT
                                id, user_id, bio, phone, image, created_at, updated_at
                            FROM
                                profiles
                            WHERE user_id = $1
                            FOR UPDATE
                        "#,
                    )
                    .bind(user_id)
                    .fetch_optional(tx.as_mut())
                    .await?;

                    result.map(Self::map_profile).transpose()
                }
                .boxed()
            })
            .await
    }
}

use crate::{
    application::app_error::AppResult,
    domain::entities::{id::Id, profile::Profile, user::User},
};
use async_trait::async_trait;

#[async_trait]
pub trait ProfileWriter: Send + Sync {
    async fn insert(&self, profile: Profile) -> AppResult<Id<Profile>>;
    async fn update(&self, profile: Profile) -> AppResult<Id<Profile>>;
}

#[async_trait]
pub trait ProfileReader: Send + Sync {
    async fn find_by_user_id(&self, user_id: &Id<User>) -> AppResult<Option<Profile>>;
    /// Same as `find_by_user_id`, but the row stays locked until the session
    /// commits or rolls back.
    async fn find_by_user_id_for_update(&self, user_id: &Id<User>) -> AppResult<Option<Profile>>;
}

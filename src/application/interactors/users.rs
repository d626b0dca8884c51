use std::sync::Arc;

use tracing::{info, warn};

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::id::IdDTO;
use crate::application::dto::user::CreateUserDTO;
use crate::application::interactors::profile::ProfileImageHook;
use crate::application::interface::crypto::CredentialsHasher;
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::profile::ProfileWriter;
use crate::application::interface::gateway::user::{UserReader, UserWriter};
use crate::domain::entities::media::MediaPath;
use crate::domain::entities::profile::Profile;
use crate::domain::entities::user::User;

#[derive(Clone)]
pub struct CreateUserInteractor {
    db_session: Arc<dyn DBSession>,
    user_reader: Arc<dyn UserReader>,
    user_writer: Arc<dyn UserWriter>,
    profile_writer: Arc<dyn ProfileWriter>,
    hasher: Arc<dyn CredentialsHasher>,
    image_hook: ProfileImageHook,
    default_image: MediaPath,
}

impl CreateUserInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        user_reader: Arc<dyn UserReader>,
        user_writer: Arc<dyn UserWriter>,
        profile_writer: Arc<dyn ProfileWriter>,
        hasher: Arc<dyn CredentialsHasher>,
        image_hook: ProfileImageHook,
        default_image: MediaPath,
    ) -> Self {
        Self {
            db_session,
            user_reader,
            user_writer,
            profile_writer,
            hasher,
            image_hook,
            default_image,
        }
    }

    /// Registers the user together with a profile pointing at the default
    /// image.
    pub async fn execute(&self, dto: CreateUserDTO) -> AppResult<IdDTO> {
        if self.user_reader.is_user(&dto.username, &dto.email).await? {
            warn!("Registration attempt with taken username or email: {}", dto.username);
            return Err(AppError::UserAlreadyExists);
        }

        let hashed_password = self.hasher.hash_password(&dto.password).await?;
        let user = User::new(dto.username, dto.email, hashed_password);
        let profile = Profile::new(user.id.clone(), String::new(), None, self.default_image.clone());

        if let Err(e) = self.persist(user.clone(), profile).await {
            if let Err(rollback_err) = self.db_session.rollback().await {
                warn!("Rollback failed: {}", rollback_err);
            }
            return Err(e);
        }

        info!("User {} registered", user.username);
        Ok(IdDTO {
            id: user.id.to_string(),
        })
    }

    async fn persist(&self, user: User, profile: Profile) -> AppResult<()> {
        self.user_writer.insert(user).await?;
        self.profile_writer.insert(profile.clone()).await?;
        self.image_hook.after_save(&profile, None).await?;
        self.db_session.commit().await?;
        Ok(())
    }
}

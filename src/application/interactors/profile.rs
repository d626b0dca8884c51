use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::id::IdDTO;
use crate::application::dto::profile::{ProfileDTO, UpdateProfileDTO};
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::profile::{ProfileReader, ProfileWriter};
use crate::application::interface::image::{ImageNormalizer, NormalizeOutcome};
use crate::application::interface::storage::MediaStorage;
use crate::domain::entities::id::Id;
use crate::domain::entities::media::MediaPath;
use crate::domain::entities::profile::Profile;
use crate::domain::entities::user::User;

/// Post-persist step for profiles: after the row is written, the stored
/// avatar is shrunk in place to fit the avatar box.
#[derive(Clone)]
pub struct ProfileImageHook {
    storage: Arc<dyn MediaStorage>,
    normalizer: Arc<dyn ImageNormalizer>,
}

impl ProfileImageHook {
    pub fn new(storage: Arc<dyn MediaStorage>, normalizer: Arc<dyn ImageNormalizer>) -> Self {
        Self { storage, normalizer }
    }

    /// `previous_image` is the reference stored before this save, `None` for
    /// a fresh profile. An unchanged reference skips the decode entirely.
    pub async fn after_save(
        &self,
        profile: &Profile,
        previous_image: Option<&MediaPath>,
    ) -> AppResult<Option<NormalizeOutcome>> {
        if previous_image == Some(&profile.image) {
            debug!("Image of profile {} unchanged, skipping normalization", profile.id);
            return Ok(None);
        }

        let path = self.storage.resolve(&profile.image);
        let outcome = self.normalizer.normalize(&path).await?;
        match outcome {
            NormalizeOutcome::Resized { from, to } => info!(
                "Resized image {} of profile {} from {}x{} to {}x{}",
                profile.image, profile.id, from.0, from.1, to.0, to.1
            ),
            NormalizeOutcome::Unchanged { width, height } => debug!(
                "Image {} of profile {} already fits ({}x{})",
                profile.image, profile.id, width, height
            ),
        }
        Ok(Some(outcome))
    }
}

#[derive(Clone)]
pub struct GetProfileInteractor {
    profile_reader: Arc<dyn ProfileReader>,
}

impl GetProfileInteractor {
    pub fn new(profile_reader: Arc<dyn ProfileReader>) -> Self {
        Self { profile_reader }
    }

    pub async fn execute(&self, dto: IdDTO) -> AppResult<ProfileDTO> {
        let user_id: Id<User> = dto.id.try_into()?;
        let profile = self
            .profile_reader
            .find_by_user_id(&user_id)
            .await?
            .ok_or(AppError::ProfileNotFound)?;
        Ok(profile.into())
    }
}

#[derive(Clone)]
pub struct UpdateProfileInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    profile_writer: Arc<dyn ProfileWriter>,
    storage: Arc<dyn MediaStorage>,
    image_hook: ProfileImageHook,
    default_image: MediaPath,
}

impl UpdateProfileInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_reader: Arc<dyn ProfileReader>,
        profile_writer: Arc<dyn ProfileWriter>,
        storage: Arc<dyn MediaStorage>,
        image_hook: ProfileImageHook,
        default_image: MediaPath,
    ) -> Self {
        Self {
            db_session,
            profile_reader,
            profile_writer,
            storage,
            image_hook,
            default_image,
        }
    }

    pub async fn execute(&self, dto: UpdateProfileDTO) -> AppResult<ProfileDTO> {
        let user_id: Id<User> = dto.user_id.try_into()?;

        // Stored before the row lock is taken so the lock only spans the
        // update, the resize and the commit.
        let uploaded = match dto.image {
            Some(data) => Some(self.store_upload(data).await?),
            None => None,
        };

        let (profile, previous_image) = match self
            .update_locked(&user_id, dto.bio, dto.phone, uploaded.as_ref())
            .await
        {
            Ok(saved) => saved,
            Err(e) => {
                warn!("Profile update of user {} failed: {}", user_id, e);
                self.discard(uploaded.as_ref()).await;
                return Err(e);
            }
        };

        if uploaded.is_some() && previous_image != self.default_image {
            if let Err(e) = self.storage.delete(&previous_image).await {
                warn!("Failed to delete replaced image {}: {}", previous_image, e);
            }
        }

        info!("Profile of user {} updated", user_id);
        Ok(profile.into())
    }

    // The row stays locked from the read until commit, so concurrent updates
    // of one profile are serialized and each one sees the image the previous
    // one committed. Row first, then the file transform, then commit.
    async fn update_locked(
        &self,
        user_id: &Id<User>,
        bio: Option<String>,
        phone: Option<Option<i64>>,
        uploaded: Option<&MediaPath>,
    ) -> AppResult<(Profile, MediaPath)> {
        let mut profile = self
            .profile_reader
            .find_by_user_id_for_update(user_id)
            .await?
            .ok_or(AppError::ProfileNotFound)?;
        let previous_image = profile.image.clone();

        if let Some(bio) = bio {
            profile.bio = bio;
        }
        if let Some(phone) = phone {
            profile.phone = phone;
        }
        if let Some(path) = uploaded {
            profile.image = path.clone();
        }
        profile.touch();

        self.profile_writer.update(profile.clone()).await?;
        self.image_hook.after_save(&profile, Some(&previous_image)).await?;
        self.db_session.commit().await?;
        Ok((profile, previous_image))
    }

    async fn store_upload(&self, data: Bytes) -> AppResult<MediaPath> {
        let detected = self
            .storage
            .detect_image(&data)
            .ok_or(AppError::UnsupportedImageFormat)?;
        let path = MediaPath::profile_pic(&format!("{}.{}", Uuid::now_v7(), detected.ext))?;
        self.storage.save(&path, data).await?;
        Ok(path)
    }

    async fn discard(&self, uploaded: Option<&MediaPath>) {
        if let Err(e) = self.db_session.rollback().await {
            warn!("Rollback failed: {}", e);
        }
        if let Some(path) = uploaded {
            if let Err(e) = self.storage.delete(path).await {
                warn!("Failed to delete rejected upload {}: {}", path, e);
            }
        }
    }
}

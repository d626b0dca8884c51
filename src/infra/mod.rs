use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use crate::adapter::crypto::argon2::ArgonPasswordHasher;
use crate::adapter::image::thumbnail::ThumbnailNormalizer;
use crate::adapter::storage::local::LocalMediaStorage;
use crate::domain::entities::media::{MediaPath, PROFILE_PIC_DIR};
use crate::infra::config::AppConfig;
use crate::infra::db::init_db;
use crate::infra::state::AppState;

pub mod app;
pub mod config;
pub mod db;
pub mod setup;
pub mod state;

fn argon2_password_hasher() -> ArgonPasswordHasher {
    ArgonPasswordHasher::default()
}

async fn local_media_storage(config: &AppConfig) -> anyhow::Result<LocalMediaStorage> {
    let storage = LocalMediaStorage::new(&config.media.root);
    storage.ensure_dir(PROFILE_PIC_DIR).await?;
    info!("Media root at {}", storage.root().display());
    Ok(storage)
}

fn default_image(config: &AppConfig) -> anyhow::Result<MediaPath> {
    let image = MediaPath::parse(config.media.default_image.as_str())?;
    let resolved = Path::new(&config.media.root).join(image.as_str());
    if !resolved.is_file() {
        warn!(
            "Default profile image {} is missing, new profiles will fail to register",
            resolved.display()
        );
    }
    Ok(image)
}

pub async fn init_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let pool = init_db(config).await?;
    let password_hasher = argon2_password_hasher();
    let storage = local_media_storage(config).await?;
    let default_image = default_image(config)?;

    Ok(AppState {
        pool,
        hasher: Arc::new(password_hasher),
        config: Arc::new(config.clone()),
        storage: Arc::new(storage),
        normalizer: Arc::new(ThumbnailNormalizer::default()),
        default_image,
    })
}

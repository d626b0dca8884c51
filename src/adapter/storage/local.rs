use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use image::ImageFormat;
use tracing::{info, warn};
use uuid::Uuid;

use crate::application::app_error::{AppError, AppResult};
use crate::application::interface::storage::{DetectedImage, MediaStorage, StoredFile};
use crate::domain::entities::media::MediaPath;

const OCTET_STREAM: &str = "application/octet-stream";

/// Media files on the local filesystem under a single root directory.
pub struct LocalMediaStorage {
    root: PathBuf,
}

impl LocalMediaStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub async fn ensure_dir(&self, relative: &str) -> AppResult<()> {
        let dir = self.root.join(relative);
        tokio::fs::create_dir_all(&dir).await.map_err(|e| {
            warn!("Failed to create media dir {}: {}", dir.display(), e);
            AppError::StorageError(e.to_string())
        })
    }
}

#[async_trait]
impl MediaStorage for LocalMediaStorage {
    fn resolve(&self, path: &MediaPath) -> PathBuf {
        self.root.join(path.as_str())
    }

    async fn save(&self, path: &MediaPath, data: Bytes) -> AppResult<()> {
        let target = self.resolve(path);
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::StorageError(e.to_string()))?;
        }

        // Write aside, then rename over the target.
        let tmp = target.with_file_name(format!(".{}.{}.part", path.file_name(), Uuid::now_v7().simple()));
        if let Err(e) = tokio::fs::write(&tmp, &data).await {
            warn!("Failed to write {}: {}", tmp.display(), e);
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(AppError::StorageError(e.to_string()));
        }
        if let Err(e) = tokio::fs::rename(&tmp, &target).await {
            warn!("Failed to move {} into place: {}", tmp.display(), e);
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(AppError::StorageError(e.to_string()));
        }

        info!("Stored media/{} ({} bytes)", path, data.len());
        Ok(())
    }

    async fn read(&self, path: &MediaPath) -> AppResult<StoredFile> {
        let data = tokio::fs::read(self.resolve(path)).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => AppError::StorageNotFound,
            _ => {
                warn!("Failed to read media/{}: {}", path, e);
                AppError::StorageError(e.to_string())
            }
        })?;

        let content_type = self
            .detect_image(&data)
            .map(|detected| detected.content_type)
            .unwrap_or(OCTET_STREAM)
            .to_string();

        Ok(StoredFile {
            data: Bytes::from(data),
            content_type,
        })
    }

    async fn delete(&self, path: &MediaPath) -> AppResult<()> {
        match tokio::fs::remove_file(self.resolve(path)).await {
            Ok(()) => {
                info!("Deleted media/{}", path);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => {
                warn!("Failed to delete media/{}: {}", path, e);
                Err(AppError::StorageError(e.to_string()))
            }
        }
    }

    fn detect_image(&self, data: &[u8]) -> Option<DetectedImage> {
        let (content_type, ext) = match image::guess_format(data).ok()? {
            ImageFormat::Png => ("image/png", "png"),
            ImageFormat::Jpeg => ("image/jpeg", "jpg"),
            ImageFormat::Gif => ("image/gif", "gif"),
            ImageFormat::WebP => ("image/webp", "webp"),
            ImageFormat::Bmp => ("image/bmp", "bmp"),
            _ => return None,
        };
        Some(DetectedImage { content_type, ext })
    }
}

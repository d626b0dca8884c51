use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;

use crate::application::app_error::AppResult;
use crate::domain::entities::media::MediaPath;

pub struct StoredFile {
    pub data: Bytes,
    pub content_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectedImage {
    pub content_type: &'static str,
    pub ext: &'static str,
}

#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// Absolute filesystem location of `path`; the file may not exist yet.
    fn resolve(&self, path: &MediaPath) -> PathBuf;
    async fn save(&self, path: &MediaPath, data: Bytes) -> AppResult<()>;
    async fn read(&self, path: &MediaPath) -> AppResult<StoredFile>;
    async fn delete(&self, path: &MediaPath) -> AppResult<()>;
    fn detect_image(&self, data: &[u8]) -> Option<DetectedImage>;
}

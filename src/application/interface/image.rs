use std::path::Path;

use async_trait::async_trait;

use crate::application::app_error::AppResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeOutcome {
    Unchanged { width: u32, height: u32 },
    Resized { from: (u32, u32), to: (u32, u32) },
}

#[async_trait]
pub trait ImageNormalizer: Send + Sync {
    /// Shrinks the image stored at `path` in place so that it fits the
    /// configured bounding box. Images already inside the box are not touched.
    async fn normalize(&self, path: &Path) -> AppResult<NormalizeOutcome>;
}

use std::sync::Arc;

use crate::application::app_error::AppResult;
use crate::application::dto::media::{GetMediaFileDTO, MediaFileDTO};
use crate::application::interface::storage::MediaStorage;
use crate::domain::entities::media::MediaPath;

#[derive(Clone)]
pub struct GetMediaFileInteractor {
    storage: Arc<dyn MediaStorage>,
}

impl GetMediaFileInteractor {
    pub fn new(storage: Arc<dyn MediaStorage>) -> Self {
        Self { storage }
    }

    pub async fn execute(&self, dto: GetMediaFileDTO) -> AppResult<MediaFileDTO> {
        let path = MediaPath::parse(dto.path)?;
        let file = self.storage.read(&path).await?;
        Ok(MediaFileDTO {
            data: file.data,
            content_type: file.content_type,
        })
    }
}

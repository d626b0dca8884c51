use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::profile::ProfileDTO;
use crate::domain::entities::profile::MAX_BIO_LENGTH;

/// Multipart body of a profile update. Every part is optional.
#[derive(Debug, Default, Validate, ToSchema)]
pub struct UpdateProfileForm {
    #[validate(length(max = MAX_BIO_LENGTH, message = "Bio must be at most 1000 characters"))]
    pub bio: Option<String>,
    /// Digits only. An empty value clears the stored phone.
    pub phone: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Bytes>,
}

impl UpdateProfileForm {
    pub fn parse_phone(&self) -> AppResult<Option<Option<i64>>> {
        let Some(raw) = self.phone.as_deref() else {
            return Ok(None);
        };
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Some(None));
        }
        if !raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(AppError::InvalidFormField(
                "phone must contain digits only".to_string(),
            ));
        }
        raw.parse::<i64>()
            .map(|phone| Some(Some(phone)))
            .map_err(|_| AppError::InvalidFormField("phone is out of range".to_string()))
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub id: String,
    pub user_id: String,
    pub bio: String,
    pub phone: Option<i64>,
    pub image: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProfileDTO> for ProfileResponse {
    fn from(dto: ProfileDTO) -> Self {
        Self {
            id: dto.id,
            user_id: dto.user_id,
            bio: dto.bio,
            phone: dto.phone,
            image: dto.image,
            image_url: dto.image_url,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateProfileResponse {
    pub message: String,
    pub data: ProfileResponse,
}

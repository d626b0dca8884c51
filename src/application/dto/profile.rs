use bytes::Bytes;
use chrono::{DateTime, Utc};

use crate::domain::entities::profile::Profile;

#[derive(Debug, Clone)]
pub struct UpdateProfileDTO {
    pub user_id: String,
    pub bio: Option<String>,
    /// `Some(None)` clears the stored phone.
    pub phone: Option<Option<i64>>,
    pub image: Option<Bytes>,
}

#[derive(Debug, Clone)]
pub struct ProfileDTO {
    pub id: String,
    pub user_id: String,
    pub bio: String,
    pub phone: Option<i64>,
    pub image: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Profile> for ProfileDTO {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id.to_string(),
            user_id: profile.user_id.to_string(),
            bio: profile.bio,
            phone: profile.phone,
            image_url: profile.image.to_url(),
            image: profile.image.as_str().to_string(),
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

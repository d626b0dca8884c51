use chrono::{DateTime, Utc};

use crate::domain::entities::{id::Id, media::MediaPath, user::User};

pub const MAX_BIO_LENGTH: u64 = 1000;

/// Side of the square box every stored avatar has to fit in.
pub const AVATAR_MAX_DIMENSION: u32 = 300;

#[derive(Debug, Clone)]
pub struct Profile {
    pub id: Id<Profile>,
    pub user_id: Id<User>,
    pub bio: String,
    pub phone: Option<i64>,
    pub image: MediaPath,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// The caller decides the initial image; new accounts get the configured
    /// placeholder.
    pub fn new(user_id: Id<User>, bio: String, phone: Option<i64>, image: MediaPath) -> Self {
        let now = Utc::now();
        Self {
            id: Id::generate(),
            user_id,
            bio,
            phone,
            image,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

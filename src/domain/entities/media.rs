use std::fmt;

use crate::application::app_error::{AppError, AppResult};

pub const PROFILE_PIC_DIR: &str = "profile_pic";

/// Relative location of a stored file under the media root, e.g.
/// `profile_pic/0199...png`. Never absolute, never escapes the root, and never
/// names a hidden file, so in-flight `.part`/`.tmp` writes are not reachable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaPath(String);

impl MediaPath {
    pub fn parse(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        if value.is_empty() || value.starts_with('/') || value.contains('\\') || value.contains('\0') {
            return Err(AppError::InvalidMediaPath(value));
        }
        let has_bad_segment = value
            .split('/')
            .any(|segment| segment.is_empty() || segment.starts_with('.'));
        if has_bad_segment {
            return Err(AppError::InvalidMediaPath(value));
        }
        Ok(Self(value))
    }

    pub fn profile_pic(file_name: &str) -> AppResult<Self> {
        Self::parse(format!("{}/{}", PROFILE_PIC_DIR, file_name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    pub fn to_url(&self) -> String {
        format!("/media/{}", self.0)
    }
}

impl fmt::Display for MediaPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

use axum::extract::multipart::MultipartError;
use axum::extract::rejection::JsonRejection;
use axum::http::header::InvalidHeaderValue;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Validation failed: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Invalid JSON body: {0}")]
    JsonRejection(#[from] JsonRejection),

    #[error("Invalid multipart body: {0}")]
    MultipartError(#[from] MultipartError),

    #[error("Invalid form field: {0}")]
    InvalidFormField(String),

    #[error("Invalid header value")]
    InvalidHeaderValue(#[from] InvalidHeaderValue),

    #[error("Failed to hash password")]
    PasswordHashError,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Question not found")]
    QuestionNotFound,

    #[error("Unsupported image format")]
    UnsupportedImageFormat,

    #[error("Failed to decode image: {0}")]
    ImageDecodeError(String),

    #[error("Failed to write image: {0}")]
    ImageWriteError(String),

    #[error("Invalid media path: {0}")]
    InvalidMediaPath(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Stored file not found")]
    StorageNotFound,

    #[error("Blocking task failed: {0}")]
    TaskError(String),
}

pub type AppResult<T> = Result<T, AppError>;

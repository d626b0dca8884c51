use crate::application::app_error::AppError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidId(_)
            | AppError::ValidationError(_)
            | AppError::JsonRejection(_)
            | AppError::MultipartError(_)
            | AppError::InvalidFormField(_)
            | AppError::UnsupportedImageFormat
            | AppError::ImageDecodeError(_)
            | AppError::InvalidMediaPath(_) => StatusCode::BAD_REQUEST,
            AppError::ProfileNotFound | AppError::QuestionNotFound | AppError::StorageNotFound => {
                StatusCode::NOT_FOUND
            }
            AppError::UserAlreadyExists => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = if status.is_server_error() {
            error!("Request failed: {}", self);
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        } else {
            self.to_string()
        };

        let body = Json(ErrorResponse { error: message });

        (status, body).into_response()
    }
}

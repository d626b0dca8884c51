use axum::extract::{Multipart, Path};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracing::debug;
use validator::Validate;

use crate::adapter::http::app_error_impl::ErrorResponse;
use crate::adapter::http::schema::profile::{ProfileResponse, UpdateProfileForm, UpdateProfileResponse};
use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::id::IdDTO;
use crate::application::dto::profile::UpdateProfileDTO;
use crate::application::interactors::profile::{GetProfileInteractor, UpdateProfileInteractor};

#[utoipa::path(
    get,
    path = "/users/{user_id}/profile",
    tag = "Profiles",
    params(("user_id" = String, Path, description = "Owner of the profile")),
    responses(
        (
            status = 200,
            description = "Profile of the user",
            body = ProfileResponse,
            example = json!(
                {
                    "id": "019c47ec-5a10-7c2e-9a41-1f0e5b7d3c11",
                    "user_id": "019c47ec-183d-744e-b11d-cd409015bf13",
                    "bio": "",
                    "phone": null,
                    "image": "profile_pic/default.jpg",
                    "image_url": "/media/profile_pic/default.jpg",
                    "created_at": "2025-01-01T12:00:00Z",
                    "updated_at": "2025-01-01T12:00:00Z"
                }
            )
        ),
        (
            status = 400,
            description = "Malformed user id",
            body = ErrorResponse,
            example = json!({"error": "Invalid id: abc"})
        ),
        (
            status = 404,
            description = "Profile not found",
            body = ErrorResponse,
            example = json!({"error": "Profile not found"})
        )
    )
)]
pub async fn get_profile(
    interactor: GetProfileInteractor,
    Path(user_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let profile = interactor.execute(IdDTO { id: user_id }).await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(profile))))
}

#[utoipa::path(
    put,
    path = "/users/{user_id}/profile",
    tag = "Profiles",
    params(("user_id" = String, Path, description = "Owner of the profile")),
    request_body(content = UpdateProfileForm, content_type = "multipart/form-data"),
    responses(
        (
            status = 200,
            description = "Profile updated, uploaded image normalized",
            body = UpdateProfileResponse
        ),
        (
            status = 400,
            description = "Invalid form field, unsupported or undecodable image",
            body = ErrorResponse,
            example = json!({"error": "Unsupported image format"})
        ),
        (
            status = 404,
            description = "Profile not found",
            body = ErrorResponse,
            example = json!({"error": "Profile not found"})
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
            example = json!({"error": "Internal Server Error"})
        )
    )
)]
pub async fn update_profile(
    interactor: UpdateProfileInteractor,
    Path(user_id): Path<String>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let form = read_form(multipart).await?;
    form.validate()?;

    let dto = UpdateProfileDTO {
        user_id,
        phone: form.parse_phone()?,
        bio: form.bio,
        image: form.image,
    };
    let profile = interactor.execute(dto).await?;
    Ok((
        StatusCode::OK,
        Json(UpdateProfileResponse {
            message: "Profile updated successfully".to_string(),
            data: profile.into(),
        }),
    ))
}

async fn read_form(mut multipart: Multipart) -> AppResult<UpdateProfileForm> {
    let mut form = UpdateProfileForm::default();
    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        match name.as_str() {
            "bio" => form.bio = Some(field.text().await?),
            "phone" => form.phone = Some(field.text().await?),
            "image" => {
                let data = field.bytes().await?;
                // browsers send an empty part when no file was picked
                if !data.is_empty() {
                    form.image = Some(data);
                }
            }
            other => {
                debug!("Ignoring unknown form field {}", other);
            }
        }
    }
    if form.bio.is_none() && form.phone.is_none() && form.image.is_none() {
        return Err(AppError::InvalidFormField(
            "expected at least one of bio, phone, image".to_string(),
        ));
    }
    Ok(form)
}

use crate::{
    adapter::http::{
        app_error_impl::ErrorResponse,
        schema::{id::IdResponse, user::CreateUserRequest},
        validation::ValidJson,
    },
    application::{
        app_error::AppResult, dto::user::CreateUserDTO, interactors::users::CreateUserInteractor,
    },
};
use axum::{Json, http::StatusCode, response::IntoResponse};

#[utoipa::path(
    post,
    path = "/users/register",
    tag = "Users",
    request_body(
        content = CreateUserRequest,
        example = json!(
            {
                "username": "alice_wonder",
                "email": "alice@example.com",
                "password": "Password123!"
            }
        )
    ),
    responses(
        (
            status = 201,
            description = "User and profile created",
            body = IdResponse,
            example = json!(
                {
                    "id": "019c47ec-183d-744e-b11d-cd409015bf13"
                }
            )
        ),
        (
            status = 400,
            description = "Validation error",
            body = ErrorResponse,
            example = json!(
                {
                    "error": "Validation failed: password: Password must be at least 8 characters long"
                }
            )
        ),
        (
            status = 409,
            description = "Username or email already taken",
            body = ErrorResponse,
            example = json!(
                {
                    "error": "User already exists"
                }
            )
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
            example = json!(
                {
                    "error": "Internal Server Error"
                }
            )
        )
    )
)]
pub async fn register(
    interactor: CreateUserInteractor,
    ValidJson(payload): ValidJson<CreateUserRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = CreateUserDTO {
        username: payload.username,
        email: payload.email.to_string(),
        password: payload.password.value().to_string(),
    };
    let user_id = interactor.execute(dto).await?;
    let response = IdResponse { id: user_id.id };
    Ok((StatusCode::CREATED, Json(response)))
}

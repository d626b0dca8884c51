use axum::{response::Html, Json};
use utoipa::{openapi::OpenApi as OpenApiDoc, OpenApi};

use crate::adapter::http::{
    app_error_impl::ErrorResponse,
    routes::{media, profile, question, user},
    schema::{
        id::IdResponse,
        profile::{ProfileResponse, UpdateProfileForm, UpdateProfileResponse},
        question::{CommentResponse, QuestionResponse},
        user::CreateUserRequest,
        ValidPassword,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        user::register,
        profile::get_profile,
        profile::update_profile,
        question::get_question,
        media::get_media
    ),
    components(
        schemas(
            ErrorResponse,
            IdResponse,
            CreateUserRequest,
            ValidPassword,
            ProfileResponse,
            UpdateProfileForm,
            UpdateProfileResponse,
            QuestionResponse,
            CommentResponse
        )
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<OpenApiDoc> {
    Json(ApiDoc::openapi())
}

pub async fn docs_ui() -> Html<&'static str> {
    Html(
        r#"
            <!doctype html>
            <html>
              <head>
                <title>AskStack API docs</title>
                <meta charset="utf-8">
                <meta name="viewport" content="width=device-width, initial-scale=1">
                <script src="https://unpkg.com/@stoplight/elements/web-components.min.js"></script>
                <link rel="stylesheet" href="https://unpkg.com/@stoplight/elements/styles.min.css">
              </head>
              <body style="height: 100%; margin: 0;">
                <elements-api
                  apiDescriptionUrl="openapi.json"
                  basePath="/"
                  router="hash"
                />
              </body>
            </html>
        "#,
    )
}

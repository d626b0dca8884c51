use axum::extract::Path;
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::{HeaderValue, StatusCode};
use axum::response::IntoResponse;

use crate::adapter::http::app_error_impl::ErrorResponse;
use crate::application::app_error::AppResult;
use crate::application::dto::media::GetMediaFileDTO;
use crate::application::interactors::media::GetMediaFileInteractor;

#[utoipa::path(
    get,
    path = "/media/{path}",
    tag = "Media",
    params(("path" = String, Path, description = "Relative media path, e.g. profile_pic/<file>")),
    responses(
        (status = 200, description = "Stored file bytes, content type sniffed from the data"),
        (
            status = 400,
            description = "Path escapes the media root",
            body = ErrorResponse,
            example = json!({"error": "Invalid media path: ../secret"})
        ),
        (
            status = 404,
            description = "No such file",
            body = ErrorResponse,
            example = json!({"error": "Stored file not found"})
        )
    )
)]
pub async fn get_media(
    interactor: GetMediaFileInteractor,
    Path(path): Path<String>,
) -> AppResult<impl IntoResponse> {
    let file = interactor.execute(GetMediaFileDTO { path }).await?;
    let headers = [
        (CONTENT_TYPE, HeaderValue::from_str(&file.content_type)?),
        (CACHE_CONTROL, HeaderValue::from_static("no-cache")),
    ];
    Ok((StatusCode::OK, headers, file.data))
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::header::CONTENT_TYPE;
    use axum::http::{Request, StatusCode};
    use rstest::rstest;
    use serial_test::serial;
    use tower::ServiceExt;

    use crate::infra::app::create_app;
    use crate::tests::fixtures::{DEFAULT_IMAGE, TestApp, init_test_app};

    fn get_request_media(path: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(format!("/media/{}", path))
            .body(Body::empty())
            .unwrap()
    }

    #[rstest]
    #[tokio::test]
    #[serial]
    #[ignore = "requires TEST_DATABASE_URL"]
    async fn test_get_media_serves_file(#[future] init_test_app: anyhow::Result<TestApp>) {
        let app_ctx = init_test_app.await.expect("init app");
        let app = create_app(&app_ctx.config, app_ctx.state.clone());

        let response = app.oneshot(get_request_media(DEFAULT_IMAGE)).await.unwrap();
        let status = response.status();
        let content_type = response.headers()[CONTENT_TYPE].to_str().unwrap().to_string();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type, "image/jpeg");
        assert_eq!(body.as_ref(), std::fs::read(app_ctx.media.path().join(DEFAULT_IMAGE)).unwrap());
    }

    #[rstest]
    #[case("profile_pic/missing.png", StatusCode::NOT_FOUND)]
    #[case("profile_pic/../../etc/passwd", StatusCode::BAD_REQUEST)]
    #[case("profile_pic//default.jpg", StatusCode::BAD_REQUEST)]
    #[case("profile_pic/.default.jpg.0199a6f1.part", StatusCode::BAD_REQUEST)]
    #[tokio::test]
    #[serial]
    #[ignore = "requires TEST_DATABASE_URL"]
    async fn test_get_media_errors(
        #[case] path: &str,
        #[case] expected: StatusCode,
        #[future] init_test_app: anyhow::Result<TestApp>,
    ) {
        let app_ctx = init_test_app.await.expect("init app");
        let app = create_app(&app_ctx.config, app_ctx.state.clone());

        let status = app.oneshot(get_request_media(path)).await.unwrap().status();

        assert_eq!(status, expected);
    }
}

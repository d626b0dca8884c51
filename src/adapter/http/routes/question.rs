use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapter::http::app_error_impl::ErrorResponse;
use crate::adapter::http::schema::question::QuestionResponse;
use crate::application::app_error::AppResult;
use crate::application::dto::id::IdDTO;
use crate::application::interactors::question::GetQuestionInteractor;

#[utoipa::path(
    get,
    path = "/questions/{question_id}",
    tag = "Questions",
    params(("question_id" = String, Path, description = "Question id")),
    responses(
        (
            status = 200,
            description = "Question with like count and comments, newest first",
            body = QuestionResponse
        ),
        (
            status = 400,
            description = "Malformed question id",
            body = ErrorResponse,
            example = json!({"error": "Invalid id: abc"})
        ),
        (
            status = 404,
            description = "Question not found",
            body = ErrorResponse,
            example = json!({"error": "Question not found"})
        )
    )
)]
pub async fn get_question(
    interactor: GetQuestionInteractor,
    Path(question_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let question = interactor.execute(IdDTO { id: question_id }).await?;
    Ok((StatusCode::OK, Json(QuestionResponse::from(question))))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::{Duration, Utc};
    use rstest::rstest;
    use serial_test::serial;
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::infra::app::create_app;
    use crate::tests::fixtures::{DEFAULT_IMAGE, TestApp, init_test_app};
    use crate::tests::helpers::{
        delete_user, insert_comment, insert_question, insert_user_with_profile, like_question,
        response_json, unique_credentials,
    };

    fn get_request_question(question_id: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(format!("/questions/{}", question_id))
            .body(Body::empty())
            .unwrap()
    }

    async fn seed_user(app_ctx: &TestApp) -> Uuid {
        let (username, email) = unique_credentials();
        insert_user_with_profile(&app_ctx.state.pool, &username, &email, DEFAULT_IMAGE).await
    }

    #[rstest]
    #[tokio::test]
    #[serial]
    #[ignore = "requires TEST_DATABASE_URL"]
    async fn test_get_question_counts_likes_and_orders_comments(#[future] init_test_app: anyhow::Result<TestApp>) {
        let app_ctx = init_test_app.await.expect("init app");
        let app = create_app(&app_ctx.config, app_ctx.state.clone());
        let pool = &app_ctx.state.pool;

        let author = seed_user(&app_ctx).await;
        let fan_a = seed_user(&app_ctx).await;
        let fan_b = seed_user(&app_ctx).await;
        let question_id = insert_question(pool, author, "How do lifetimes work?").await;
        like_question(pool, question_id, fan_a).await;
        like_question(pool, question_id, fan_b).await;
        let now = Utc::now();
        insert_comment(pool, question_id, "older", now - Duration::minutes(5)).await;
        insert_comment(pool, question_id, "newer", now).await;

        let response = app.oneshot(get_request_question(&question_id.to_string())).await.unwrap();
        let status = response.status();
        let json = response_json(response).await;

        for user_id in [author, fan_a, fan_b] {
            delete_user(pool, user_id).await;
        }

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["title"], "How do lifetimes work?");
        assert_eq!(json["user_id"], author.to_string());
        assert_eq!(json["total_likes"], 2);
        let names: Vec<&str> = json["comments"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["newer", "older"]);
    }

    #[rstest]
    #[tokio::test]
    #[serial]
    #[ignore = "requires TEST_DATABASE_URL"]
    async fn test_get_question_without_likes(#[future] init_test_app: anyhow::Result<TestApp>) {
        let app_ctx = init_test_app.await.expect("init app");
        let app = create_app(&app_ctx.config, app_ctx.state.clone());
        let author = seed_user(&app_ctx).await;
        let question_id = insert_question(&app_ctx.state.pool, author, "Quiet question").await;

        let json = response_json(app.oneshot(get_request_question(&question_id.to_string())).await.unwrap()).await;
        delete_user(&app_ctx.state.pool, author).await;

        assert_eq!(json["total_likes"], 0);
        assert!(json["comments"].as_array().unwrap().is_empty());
    }

    #[rstest]
    #[case("nope", StatusCode::BAD_REQUEST)]
    #[case("019c47ec-183d-744e-b11d-cd409015bf13", StatusCode::NOT_FOUND)]
    #[tokio::test]
    #[serial]
    #[ignore = "requires TEST_DATABASE_URL"]
    async fn test_get_question_errors(
        #[case] question_id: &str,
        #[case] expected: StatusCode,
        #[future] init_test_app: anyhow::Result<TestApp>,
    ) {
        let app_ctx = init_test_app.await.expect("init app");
        let app = create_app(&app_ctx.config, app_ctx.state.clone());

        let status = app.oneshot(get_request_question(question_id)).await.unwrap().status();

        assert_eq!(status, expected);
    }
}

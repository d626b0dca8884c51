use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use sqlx::{Pool, Postgres};

use crate::adapter::db::gateway::profile::ProfileGateway;
use crate::adapter::db::gateway::question::{CommentGateway, QuestionGateway};
use crate::adapter::db::gateway::user::UserGateway;
use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::{AppError, AppResult};
use crate::application::interactors::media::GetMediaFileInteractor;
use crate::application::interactors::profile::{
    GetProfileInteractor, ProfileImageHook, UpdateProfileInteractor,
};
use crate::application::interactors::question::GetQuestionInteractor;
use crate::application::interactors::users::CreateUserInteractor;
use crate::application::interface::crypto::CredentialsHasher;
use crate::application::interface::image::ImageNormalizer;
use crate::application::interface::storage::MediaStorage;
use crate::domain::entities::media::MediaPath;
use crate::infra::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: Pool<Postgres>,
    pub hasher: Arc<dyn CredentialsHasher>,
    pub config: Arc<AppConfig>,
    pub storage: Arc<dyn MediaStorage>,
    pub normalizer: Arc<dyn ImageNormalizer>,
    pub default_image: MediaPath,
}

impl AppState {
    fn profile_image_hook(&self) -> ProfileImageHook {
        ProfileImageHook::new(self.storage.clone(), self.normalizer.clone())
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

#[async_trait]
pub trait FromAppState: Sized {
    async fn from_app_state(state: &AppState) -> AppResult<Self>;
}

// CreateUserInteractor
#[async_trait]
impl FromAppState for CreateUserInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let user_gateway = UserGateway::new(session.clone());
        let profile_gateway = ProfileGateway::new(session.clone());

        Ok(CreateUserInteractor::new(
            Arc::new(session),
            Arc::new(user_gateway.clone()),
            Arc::new(user_gateway),
            Arc::new(profile_gateway),
            state.hasher.clone(),
            state.profile_image_hook(),
            state.default_image.clone(),
        ))
    }
}

impl<S> FromRequestParts<S> for CreateUserInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        CreateUserInteractor::from_app_state(&app_state).await
    }
}

// GetProfileInteractor
#[async_trait]
impl FromAppState for GetProfileInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session);

        Ok(GetProfileInteractor::new(Arc::new(profile_gateway)))
    }
}

impl<S> FromRequestParts<S> for GetProfileInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        GetProfileInteractor::from_app_state(&app_state).await
    }
}

// UpdateProfileInteractor
#[async_trait]
impl FromAppState for UpdateProfileInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session.clone());

        Ok(UpdateProfileInteractor::new(
            Arc::new(session),
            Arc::new(profile_gateway.clone()),
            Arc::new(profile_gateway),
            state.storage.clone(),
            state.profile_image_hook(),
            state.default_image.clone(),
        ))
    }
}

impl<S> FromRequestParts<S> for UpdateProfileInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        UpdateProfileInteractor::from_app_state(&app_state).await
    }
}

// GetQuestionInteractor
#[async_trait]
impl FromAppState for GetQuestionInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let question_gateway = QuestionGateway::new(session.clone());
        let comment_gateway = CommentGateway::new(session);

        Ok(GetQuestionInteractor::new(
            Arc::new(question_gateway),
            Arc::new(comment_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for GetQuestionInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        GetQuestionInteractor::from_app_state(&app_state).await
    }
}

// GetMediaFileInteractor
#[async_trait]
impl FromAppState for GetMediaFileInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        Ok(GetMediaFileInteractor::new(state.storage.clone()))
    }
}

impl<S> FromRequestParts<S> for GetMediaFileInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        GetMediaFileInteractor::from_app_state(&app_state).await
    }
}

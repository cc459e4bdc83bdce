use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

use crate::{
    db::entities::user,
    response::{ApiResult, JsonApiResponse},
    routes::validate,
    services::{ServiceContext, user_service::SignupInput},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// A user as other users see it: no password hash, no tokens.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub avatar: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Debug, Serialize)]
pub struct AuthenticatedUserResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub token: Option<String>,
    pub refresh_token: Option<String>,
}

pub fn public_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/users/signup", post(signup))
        .route("/users/login", post(login))
        .route("/users/refresh", post(refresh))
        .with_state(state)
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/{user_id}", get(get_user))
        .with_state(state)
}

async fn signup(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SignupRequest>,
) -> ApiResult<AuthenticatedUserResponse> {
    let input = SignupInput {
        first_name: validate::bounded_name("first_name", &body.first_name)?.to_string(),
        last_name: validate::bounded_name("last_name", &body.last_name)?.to_string(),
        email: validate::email(&body.email)?,
        phone: validate::phone(&body.phone)?,
        password: validate::password(&body.password)?.to_string(),
        avatar: validate::optional_required("avatar", body.avatar.as_deref())?
            .map(str::to_string),
    };

    let user = ServiceContext::from_state(state.as_ref())
        .user()
        .signup(input)
        .await?;
    JsonApiResponse::with_status(StatusCode::CREATED, "created", user.into())
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> ApiResult<AuthenticatedUserResponse> {
    let email = body.email.trim().to_ascii_lowercase();
    let user = ServiceContext::from_state(state.as_ref())
        .user()
        .login(&email, &body.password)
        .await?;
    JsonApiResponse::ok(user.into())
}

async fn refresh(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RefreshRequest>,
) -> ApiResult<AuthenticatedUserResponse> {
    let token = validate::required("refresh_token", &body.refresh_token)?;
    let user = ServiceContext::from_state(state.as_ref())
        .user()
        .refresh(token)
        .await?;
    JsonApiResponse::ok(user.into())
}

async fn list_users(State(state): State<Arc<AppState>>) -> ApiResult<Vec<UserResponse>> {
    let users = ServiceContext::from_state(state.as_ref()).user().list().await?;
    JsonApiResponse::ok(users.into_iter().map(UserResponse::from).collect())
}

async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> ApiResult<UserResponse> {
    let user = ServiceContext::from_state(state.as_ref())
        .user()
        .get(&user_id)
        .await?;
    JsonApiResponse::ok(user.into())
}

impl From<user::Model> for UserResponse {
    fn from(model: user::Model) -> Self {
        Self {
            user_id: model.user_id,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            phone: model.phone,
            avatar: model.avatar,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<user::Model> for AuthenticatedUserResponse {
    fn from(mut model: user::Model) -> Self {
        let token = model.token.take();
        let refresh_token = model.refresh_token.take();
        Self {
            user: model.into(),
            token,
            refresh_token,
        }
    }
}

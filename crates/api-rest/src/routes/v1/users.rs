//! User endpoints.

use crate::{
    error::ApiResult,
    extractors::CallerIdentity,
    responses::Success,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use hackhub_application::validation::UpsertUserRequest;
use hackhub_domain::identifiers::UserId;
use hackhub_domain::user::User;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(upsert_user))
        .route("/users/me", get(current_user))
        .route("/users/:id", get(user_by_id))
}

/// Register the caller or patch their profile; called once per sign-in.
async fn upsert_user(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Json(request): Json<UpsertUserRequest>,
) -> ApiResult<Success<UserId>> {
    let id = state.user_service.upsert_user(&caller, request).await?;
    Ok(Success(id))
}

async fn current_user(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
) -> ApiResult<Success<User>> {
    let user = state.user_service.get_current_user(&caller).await?;
    Ok(Success(user))
}

async fn user_by_id(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> ApiResult<Success<User>> {
    let user = state.user_service.get_user_by_id(id).await?;
    Ok(Success(user))
}

//! Finalized-project (team formation) endpoints.

use crate::{
    error::ApiResult,
    extractors::CallerIdentity,
    responses::{Success, UpvoteOutcome},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use hackhub_application::validation::{
    AssignUserRequest, CommentRequest, CreateFinalizedProjectRequest,
    UpdateFinalizedProjectRequest,
};
use hackhub_application::FinalizedBoard;
use hackhub_domain::finalized::FinalizedProject;
use hackhub_domain::identifiers::{CommentId, FinalizedProjectId, HackathonEventId};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/finalized-projects", post(create_finalized))
        .route(
            "/finalized-projects/:id",
            get(finalized_by_id)
                .patch(update_finalized)
                .delete(delete_finalized),
        )
        .route(
            "/events/:event_id/finalized-projects",
            get(finalized_board),
        )
        .route(
            "/finalized-projects/:id/interest",
            put(add_interest).delete(remove_interest),
        )
        .route("/finalized-projects/:id/assignment", post(assign_user))
        .route("/finalized-projects/:id/comments", post(add_comment))
        .route(
            "/finalized-projects/:id/comments/:comment_id",
            delete(delete_comment).patch(update_comment),
        )
        .route(
            "/finalized-projects/:id/comments/:comment_id/upvote",
            put(upvote_comment).delete(remove_comment_upvote),
        )
}

/// Finalize a project for team formation. Admin only.
async fn create_finalized(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Json(request): Json<CreateFinalizedProjectRequest>,
) -> ApiResult<Success<FinalizedProject>> {
    let project = state.finalized_service.create(&caller, request).await?;
    Ok(Success(project))
}

async fn finalized_by_id(
    State(state): State<AppState>,
    Path(id): Path<FinalizedProjectId>,
) -> ApiResult<Success<FinalizedProject>> {
    let project = state.finalized_service.get_by_id(id).await?;
    Ok(Success(project))
}

/// Patch title and/or description. Admin only.
async fn update_finalized(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path(id): Path<FinalizedProjectId>,
    Json(request): Json<UpdateFinalizedProjectRequest>,
) -> ApiResult<Success<FinalizedProject>> {
    let project = state
        .finalized_service
        .update(&caller, id, request)
        .await?;
    Ok(Success(project))
}

/// Remove a finalized project. Admin only.
async fn delete_finalized(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path(id): Path<FinalizedProjectId>,
) -> ApiResult<Success<()>> {
    state.finalized_service.delete(&caller, id).await?;
    Ok(Success(()))
}

/// All finalized projects of one event plus every user visible on the board.
async fn finalized_board(
    State(state): State<AppState>,
    Path(event_id): Path<HackathonEventId>,
) -> ApiResult<Success<FinalizedBoard>> {
    let board = state.finalized_service.list_by_event(event_id).await?;
    Ok(Success(board))
}

/// Mark the caller as interested; repeat calls are no-ops.
async fn add_interest(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path(id): Path<FinalizedProjectId>,
) -> ApiResult<Success<()>> {
    state
        .finalized_service
        .add_interested_user(&caller, id)
        .await?;
    Ok(Success(()))
}

/// Withdraw the caller's interest; a no-op when none exists.
async fn remove_interest(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path(id): Path<FinalizedProjectId>,
) -> ApiResult<Success<()>> {
    state
        .finalized_service
        .remove_interested_user(&caller, id)
        .await?;
    Ok(Success(()))
}

/// Assign a user to this team, moving them off any sibling team in the same
/// event. Admin only.
async fn assign_user(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path(id): Path<FinalizedProjectId>,
    Json(request): Json<AssignUserRequest>,
) -> ApiResult<Success<()>> {
    state
        .finalized_service
        .assign_user(&caller, id, request)
        .await?;
    Ok(Success(()))
}

async fn add_comment(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path(id): Path<FinalizedProjectId>,
    Json(request): Json<CommentRequest>,
) -> ApiResult<Success<CommentId>> {
    let comment_id = state
        .finalized_service
        .add_comment(&caller, id, request)
        .await?;
    Ok(Success(comment_id))
}

/// Rewrite a comment's text. Author only.
async fn update_comment(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path((id, comment_id)): Path<(FinalizedProjectId, CommentId)>,
    Json(request): Json<CommentRequest>,
) -> ApiResult<Success<()>> {
    state
        .finalized_service
        .update_comment(&caller, id, comment_id, request)
        .await?;
    Ok(Success(()))
}

/// Delete a comment. Author only; finalized projects have no owning creator.
async fn delete_comment(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path((id, comment_id)): Path<(FinalizedProjectId, CommentId)>,
) -> ApiResult<Success<()>> {
    state
        .finalized_service
        .delete_comment(&caller, id, comment_id)
        .await?;
    Ok(Success(()))
}

async fn upvote_comment(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path((id, comment_id)): Path<(FinalizedProjectId, CommentId)>,
) -> ApiResult<Success<UpvoteOutcome>> {
    let toggle = state
        .finalized_service
        .upvote_comment(&caller, id, comment_id)
        .await?;
    Ok(Success(toggle.into()))
}

async fn remove_comment_upvote(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path((id, comment_id)): Path<(FinalizedProjectId, CommentId)>,
) -> ApiResult<Success<()>> {
    state
        .finalized_service
        .remove_comment_upvote(&caller, id, comment_id)
        .await?;
    Ok(Success(()))
}

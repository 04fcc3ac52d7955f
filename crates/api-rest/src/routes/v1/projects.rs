//! Submitted-project endpoints.
//!
//! Covers the voting-phase surface: CRUD on projects, the per-event board,
//! threaded comments and upvotes on both projects and comments.

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
    CommentRequest, CreateProjectRequest, UpdateProjectRequest,
};
use hackhub_application::ProjectBoard;
use hackhub_domain::identifiers::{CommentId, HackathonEventId, ProjectId};
use hackhub_domain::project::Project;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/projects", post(create_project))
        .route(
            "/projects/:id",
            get(project_by_id).patch(update_project).delete(delete_project),
        )
        .route("/events/:event_id/projects", get(project_board))
        .route("/projects/:id/upvote", put(upvote).delete(remove_upvote))
        .route("/projects/:id/comments", post(add_comment))
        .route(
            "/projects/:id/comments/:comment_id",
            delete(delete_comment).patch(update_comment),
        )
        .route(
            "/projects/:id/comments/:comment_id/upvote",
            put(upvote_comment).delete(remove_comment_upvote),
        )
}

/// Submit a project. Any registered caller.
async fn create_project(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Json(request): Json<CreateProjectRequest>,
) -> ApiResult<Success<Project>> {
    let project = state.project_service.create(&caller, request).await?;
    Ok(Success(project))
}

async fn project_by_id(
    State(state): State<AppState>,
    Path(id): Path<ProjectId>,
) -> ApiResult<Success<Project>> {
    let project = state.project_service.get_by_id(id).await?;
    Ok(Success(project))
}

/// Patch title and/or description. Creator only.
async fn update_project(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path(id): Path<ProjectId>,
    Json(request): Json<UpdateProjectRequest>,
) -> ApiResult<Success<Project>> {
    let project = state.project_service.update(&caller, id, request).await?;
    Ok(Success(project))
}

/// Delete a project and everything embedded in it. Creator only.
async fn delete_project(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path(id): Path<ProjectId>,
) -> ApiResult<Success<()>> {
    state.project_service.delete(&caller, id).await?;
    Ok(Success(()))
}

/// All projects of one event plus every user visible on the board.
async fn project_board(
    State(state): State<AppState>,
    Path(event_id): Path<HackathonEventId>,
) -> ApiResult<Success<ProjectBoard>> {
    let board = state.project_service.list_by_event(event_id).await?;
    Ok(Success(board))
}

/// Flip the caller's upvote on the project.
async fn upvote(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path(id): Path<ProjectId>,
) -> ApiResult<Success<UpvoteOutcome>> {
    let toggle = state.project_service.upvote(&caller, id).await?;
    Ok(Success(toggle.into()))
}

/// Withdraw the caller's upvote; a no-op when none exists.
async fn remove_upvote(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path(id): Path<ProjectId>,
) -> ApiResult<Success<()>> {
    state.project_service.remove_upvote(&caller, id).await?;
    Ok(Success(()))
}

async fn add_comment(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path(id): Path<ProjectId>,
    Json(request): Json<CommentRequest>,
) -> ApiResult<Success<CommentId>> {
    let comment_id = state
        .project_service
        .add_comment(&caller, id, request)
        .await?;
    Ok(Success(comment_id))
}

/// Rewrite a comment's text. Author only.
async fn update_comment(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path((id, comment_id)): Path<(ProjectId, CommentId)>,
    Json(request): Json<CommentRequest>,
) -> ApiResult<Success<()>> {
    state
        .project_service
        .update_comment(&caller, id, comment_id, request)
        .await?;
    Ok(Success(()))
}

/// Delete a comment. Author or project creator.
async fn delete_comment(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path((id, comment_id)): Path<(ProjectId, CommentId)>,
) -> ApiResult<Success<()>> {
    state
        .project_service
        .delete_comment(&caller, id, comment_id)
        .await?;
    Ok(Success(()))
}

async fn upvote_comment(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path((id, comment_id)): Path<(ProjectId, CommentId)>,
) -> ApiResult<Success<UpvoteOutcome>> {
    let toggle = state
        .project_service
        .upvote_comment(&caller, id, comment_id)
        .await?;
    Ok(Success(toggle.into()))
}

async fn remove_comment_upvote(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path((id, comment_id)): Path<(ProjectId, CommentId)>,
) -> ApiResult<Success<()>> {
    state
        .project_service
        .remove_comment_upvote(&caller, id, comment_id)
        .await?;
    Ok(Success(()))
}

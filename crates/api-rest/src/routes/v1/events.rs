//! Hackathon event endpoints.

use crate::{
    error::ApiResult,
    extractors::CallerIdentity,
    responses::Success,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    routing::{get, patch, post},
    Json, Router,
};
use hackhub_application::validation::{CreateEventRequest, SetPhaseRequest};
use hackhub_domain::event::HackathonEvent;
use hackhub_domain::identifiers::HackathonEventId;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/events", post(create_event))
        .route("/events/latest", get(latest_event))
        .route("/events/:id", get(event_by_id))
        .route("/events/:id/phase", patch(set_phase))
}

/// Open a new event in the submission phase. Admin only.
async fn create_event(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Json(request): Json<CreateEventRequest>,
) -> ApiResult<Success<HackathonEvent>> {
    let event = state.event_service.create(&caller, request).await?;
    Ok(Success(event))
}

/// The most recently created event, which the UI treats as current.
async fn latest_event(State(state): State<AppState>) -> ApiResult<Success<HackathonEvent>> {
    let event = state.event_service.latest().await?;
    Ok(Success(event))
}

async fn event_by_id(
    State(state): State<AppState>,
    Path(id): Path<HackathonEventId>,
) -> ApiResult<Success<HackathonEvent>> {
    let event = state.event_service.get_by_id(id).await?;
    Ok(Success(event))
}

/// Move the event to a given phase. Admin only.
async fn set_phase(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path(id): Path<HackathonEventId>,
    Json(request): Json<SetPhaseRequest>,
) -> ApiResult<Success<HackathonEvent>> {
    let event = state.event_service.set_phase(&caller, id, request).await?;
    Ok(Success(event))
}

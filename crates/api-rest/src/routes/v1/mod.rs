//! Version 1 API routes.

pub mod events;
pub mod finalized;
pub mod projects;
pub mod users;

use crate::state::AppState;
use axum::Router;

pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(users::routes())
        .merge(events::routes())
        .merge(projects::routes())
        .merge(finalized::routes())
}

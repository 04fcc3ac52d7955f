//! Standardized API response types.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use hackhub_domain::errors::Envelope;
use hackhub_domain::membership::Toggle;
use serde::{Deserialize, Serialize};

/// Success response: HTTP 200 with the value wrapped in the envelope.
pub struct Success<T>(pub T);

impl<T> IntoResponse for Success<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        Json(Envelope::success(self.0)).into_response()
    }
}

/// Wire shape of an upvote toggle outcome.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpvoteOutcome {
    pub added: bool,
}

impl From<Toggle> for UpvoteOutcome {
    fn from(toggle: Toggle) -> Self {
        Self {
            added: matches!(toggle, Toggle::Added),
        }
    }
}

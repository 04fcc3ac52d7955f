//! HTTP error conversion.
//!
//! Handlers return [`ApiResult`] and propagate [`hackhub_domain::DomainError`]
//! with `?`. The error is serialized into the failure side of the envelope,
//! so HTTP callers see exactly the same error shape as any other transport.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hackhub_domain::errors::{DomainError, Envelope};

/// Wrapper that carries a domain error across the handler boundary.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(Envelope::<()>::failure(&self.0))).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use hackhub_domain::errors::EntityKind;

    #[test]
    fn test_status_mapping() {
        let response = ApiError(DomainError::Unauthenticated).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response =
            ApiError(DomainError::not_found(EntityKind::Project, "p-1")).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ApiError(DomainError::unexpected("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

//! Caller identity extractor.
//!
//! The gateway in front of this service verifies the caller's token and
//! forwards the external identity subject in a trusted header. Requests
//! without the header are treated as anonymous; the services decide which
//! operations anonymous callers may perform.

use axum::{extract::FromRequestParts, http::request::Parts};
use hackhub_application::Caller;
use std::convert::Infallible;

/// Header carrying the verified external identity subject.
pub const SUBJECT_HEADER: &str = "x-hackhub-subject";

/// The caller identity attached to a request.
#[derive(Debug, Clone)]
pub struct CallerIdentity(pub Caller);

#[axum::async_trait]
impl<S> FromRequestParts<S> for CallerIdentity
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let caller = parts
            .headers
            .get(SUBJECT_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|subject| !subject.is_empty())
            .map(Caller::with_subject)
            .unwrap_or_else(Caller::anonymous);
        Ok(Self(caller))
    }
}

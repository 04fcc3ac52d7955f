//! Error types for the HackHub domain.
//!
//! Every operation in the domain layer returns a typed result instead of
//! throwing for expected failure modes. Before a result crosses the RPC
//! boundary it is serialized into the [`Envelope`] wrapper, whose error side
//! is the plain [`ErrorBody`] structure: no non-serializable fields, so the
//! caller on the other side can decode it back into an equal [`DomainError`].

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// The aggregate or sub-entity kind referenced by a not-found error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    User,
    Project,
    FinalizedProject,
    HackathonEvent,
    Comment,
}

impl EntityKind {
    /// Wire tag for the not-found variant of this entity kind.
    pub fn not_found_code(&self) -> &'static str {
        match self {
            Self::User => "USER_NOT_FOUND",
            Self::Project => "PROJECT_NOT_FOUND",
            Self::FinalizedProject => "FINALIZED_PROJECT_NOT_FOUND",
            Self::HackathonEvent => "HACKATHON_EVENT_NOT_FOUND",
            Self::Comment => "COMMENT_NOT_FOUND",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Project => "Project",
            Self::FinalizedProject => "Finalized project",
            Self::HackathonEvent => "Hackathon event",
            Self::Comment => "Comment",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Closed error taxonomy for every domain operation.
///
/// Internal helpers return or propagate these values; only truly exceptional
/// conditions (a storage call rejecting, for example) are wrapped into
/// [`DomainError::Unexpected`] at the adapter that observed them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// No verified caller identity.
    #[error("Not signed in")]
    Unauthenticated,

    /// Caller identity is known but lacks permission for the action.
    #[error("{0}")]
    Unauthorized(String),

    /// An id did not resolve to an entity of the expected kind.
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    /// A uniqueness constraint was violated, e.g. a duplicate
    /// external-identity mapping. Defensive: the index should prevent this.
    #[error("{0}")]
    NotUnique(String),

    /// A value read back from storage failed schema validation. Never
    /// silently coerced; corrupted or legacy data stays visible.
    #[error("{0}")]
    UnexpectedShape(String),

    /// Unclassified failure. The original cause is logged at the wrap site;
    /// only this generic message travels to callers.
    #[error("{message}")]
    Unexpected { message: String },
}

impl DomainError {
    pub fn not_found(kind: EntityKind, id: impl Display) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn not_unique(message: impl Into<String>) -> Self {
        Self::NotUnique(message.into())
    }

    pub fn unexpected_shape(message: impl Into<String>) -> Self {
        Self::UnexpectedShape(message.into())
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Wire tag for this error, stable across the RPC boundary.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::NotFound { kind, .. } => kind.not_found_code(),
            Self::NotUnique(_) => "NOT_UNIQUE",
            Self::UnexpectedShape(_) => "DATA_IS_UNEXPECTED_SHAPE",
            Self::Unexpected { .. } => "UNEXPECTED_ERROR",
        }
    }

    /// HTTP status for the REST boundary.
    ///
    /// `NOT_UNIQUE` and `DATA_IS_UNEXPECTED_SHAPE` are surfaced as
    /// unexpected-class errors to callers; operators see them distinctly in
    /// the logs.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::Unauthenticated => 401,
            Self::Unauthorized(_) => 403,
            Self::NotFound { .. } => 404,
            Self::NotUnique(_) | Self::UnexpectedShape(_) | Self::Unexpected { .. } => 500,
        }
    }
}

/// Result type used by every domain and application operation.
pub type DomainResult<T> = Result<T, DomainError>;

/// Transport-safe error payload.
///
/// Plain structurally-typed data: a `type` tag, a human-readable `message`,
/// and the offending `id` for not-found variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl From<&DomainError> for ErrorBody {
    fn from(error: &DomainError) -> Self {
        let id = match error {
            DomainError::NotFound { id, .. } => Some(id.clone()),
            _ => None,
        };
        Self {
            kind: error.code().to_string(),
            message: error.to_string(),
            id,
        }
    }
}

impl From<DomainError> for ErrorBody {
    fn from(error: DomainError) -> Self {
        Self::from(&error)
    }
}

impl ErrorBody {
    /// Decode the payload back into a [`DomainError`].
    ///
    /// Inverse of the `From<DomainError>` conversion for `type`, `message`
    /// and `id`; unrecognized tags decode as `Unexpected` so a newer server
    /// never crashes an older caller.
    pub fn into_domain_error(self) -> DomainError {
        match self.kind.as_str() {
            "UNAUTHENTICATED" => DomainError::Unauthenticated,
            "UNAUTHORIZED" => DomainError::Unauthorized(self.message),
            "USER_NOT_FOUND" => DomainError::NotFound {
                kind: EntityKind::User,
                id: self.id.unwrap_or_default(),
            },
            "PROJECT_NOT_FOUND" => DomainError::NotFound {
                kind: EntityKind::Project,
                id: self.id.unwrap_or_default(),
            },
            "FINALIZED_PROJECT_NOT_FOUND" => DomainError::NotFound {
                kind: EntityKind::FinalizedProject,
                id: self.id.unwrap_or_default(),
            },
            "HACKATHON_EVENT_NOT_FOUND" => DomainError::NotFound {
                kind: EntityKind::HackathonEvent,
                id: self.id.unwrap_or_default(),
            },
            "COMMENT_NOT_FOUND" => DomainError::NotFound {
                kind: EntityKind::Comment,
                id: self.id.unwrap_or_default(),
            },
            "NOT_UNIQUE" => DomainError::NotUnique(self.message),
            "DATA_IS_UNEXPECTED_SHAPE" => DomainError::UnexpectedShape(self.message),
            _ => DomainError::Unexpected {
                message: self.message,
            },
        }
    }
}

/// The ok/error envelope every operation result is serialized into before
/// crossing the process boundary.
///
/// Callers must check `ok` explicitly; there is no exception propagation
/// across the boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

impl<T> Envelope<T> {
    pub fn success(value: T) -> Self {
        Self {
            ok: true,
            value: Some(value),
            error: None,
        }
    }

    pub fn failure(error: &DomainError) -> Self {
        Self {
            ok: false,
            value: None,
            error: Some(ErrorBody::from(error)),
        }
    }

    pub fn from_result(result: Result<T, DomainError>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(ref error) => Self::failure(error),
        }
    }

    /// Unwrap the envelope on the receiving side.
    ///
    /// `Ok(None)` means a successful call whose value did not survive
    /// serialization (unit results serialize to `null`).
    pub fn into_result(self) -> Result<Option<T>, DomainError> {
        if self.ok {
            Ok(self.value)
        } else {
            Err(self
                .error
                .map(ErrorBody::into_domain_error)
                .unwrap_or_else(|| DomainError::unexpected("Malformed error envelope")))
        }
    }
}

//! Project argument objects.

use super::{Validatable, ValidationResult, ValidatorExt};
use hackhub_domain::identifiers::HackathonEventId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Arguments for `createProject`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProjectRequest {
    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 4000, message = "must be between 1 and 4000 characters"))]
    pub description: String,
    pub hackathon_event_id: HackathonEventId,
}

impl Validatable for CreateProjectRequest {
    fn validate_all(&self) -> ValidationResult {
        self.to_validation_result()
    }
}

/// Arguments for `updateProject`: only provided fields are patched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProjectRequest {
    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 4000, message = "must be between 1 and 4000 characters"))]
    pub description: Option<String>,
}

impl Validatable for UpdateProjectRequest {
    fn validate_all(&self) -> ValidationResult {
        self.to_validation_result()
    }
}

/// Comment text for add/update comment operations.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CommentRequest {
    #[validate(length(min = 1, max = 2000, message = "must be between 1 and 2000 characters"))]
    pub text: String,
}

impl Validatable for CommentRequest {
    fn validate_all(&self) -> ValidationResult {
        self.to_validation_result()
    }
}
